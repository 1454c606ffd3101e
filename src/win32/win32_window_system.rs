use windows::Win32::UI::WindowsAndMessaging::{
    GWL_EXSTYLE, GWL_STYLE, SET_WINDOW_POS_FLAGS, SWP_FRAMECHANGED, SWP_NOACTIVATE, SWP_NOZORDER, SW_HIDE, SW_SHOW,
};

use super::api::window::{
    destroy_window, from_hwnd, get_owner, get_parent, get_process_id, get_window_long, get_window_rect, is_window,
    is_window_visible, screen_to_client, set_parent, set_window_long, set_window_pos, show_window, to_hwnd,
};
use super::callbacks::enum_windows::enum_top_level_windows;
use super::window::placeholder_window::PlaceholderClass;
use crate::host::window_handle::{Area, WindowHandle};
use crate::host::window_system::{GeometryUpdate, WindowSystem};

pub struct Win32WindowSystem {
    placeholder_class: PlaceholderClass,
}

impl Win32WindowSystem {
    pub fn new(placeholder_class: &str) -> Option<Win32WindowSystem> {
        Some(Win32WindowSystem {
            placeholder_class: PlaceholderClass::register(placeholder_class)?,
        })
    }
}

fn get_flags(update: GeometryUpdate) -> SET_WINDOW_POS_FLAGS {
    match update {
        GeometryUpdate::Embed | GeometryUpdate::Restore => SWP_NOZORDER | SWP_FRAMECHANGED,
        GeometryUpdate::Follow => SWP_NOZORDER | SWP_NOACTIVATE,
    }
}

impl WindowSystem for Win32WindowSystem {
    fn create_placeholder(&self, parent: WindowHandle) -> Option<WindowHandle> {
        self.placeholder_class.create(to_hwnd(parent)).map(from_hwnd)
    }

    fn destroy_window(&self, window: WindowHandle) {
        destroy_window(to_hwnd(window));
    }

    fn is_window(&self, window: WindowHandle) -> bool {
        is_window(to_hwnd(window))
    }

    fn is_visible(&self, window: WindowHandle) -> bool {
        is_window_visible(to_hwnd(window))
    }

    fn show_window(&self, window: WindowHandle, visible: bool) {
        show_window(to_hwnd(window), if visible { SW_SHOW } else { SW_HIDE });
    }

    fn parent(&self, window: WindowHandle) -> WindowHandle {
        get_parent(to_hwnd(window)).map_or(WindowHandle::NULL, from_hwnd)
    }

    fn set_parent(&self, window: WindowHandle, parent: WindowHandle) {
        set_parent(to_hwnd(window), parent.non_null().map(to_hwnd));
    }

    fn owner(&self, window: WindowHandle) -> Option<WindowHandle> {
        get_owner(to_hwnd(window)).map(from_hwnd)
    }

    fn process_id(&self, window: WindowHandle) -> Option<u32> {
        get_process_id(to_hwnd(window))
    }

    fn style(&self, window: WindowHandle) -> isize {
        get_window_long(to_hwnd(window), GWL_STYLE)
    }

    fn set_style(&self, window: WindowHandle, style: isize) {
        set_window_long(to_hwnd(window), GWL_STYLE, style);
    }

    fn ex_style(&self, window: WindowHandle) -> isize {
        get_window_long(to_hwnd(window), GWL_EXSTYLE)
    }

    fn set_ex_style(&self, window: WindowHandle, ex_style: isize) {
        set_window_long(to_hwnd(window), GWL_EXSTYLE, ex_style);
    }

    fn window_rect(&self, window: WindowHandle) -> Option<Area> {
        get_window_rect(to_hwnd(window)).map(Area::from_edges)
    }

    fn set_window_pos(&self, window: WindowHandle, area: Area, update: GeometryUpdate) -> bool {
        set_window_pos(to_hwnd(window), area, get_flags(update))
    }

    fn screen_to_client(&self, reference: WindowHandle, point: (i32, i32)) -> Option<(i32, i32)> {
        screen_to_client(to_hwnd(reference), point)
    }

    fn top_level_windows(&self) -> Vec<WindowHandle> {
        enum_top_level_windows()
    }
}
