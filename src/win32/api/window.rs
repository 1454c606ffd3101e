use std::ffi::c_void;

use windows::Win32::Foundation::{HWND, POINT, RECT};
use windows::Win32::Graphics::Gdi::ScreenToClient;
use windows::Win32::UI::WindowsAndMessaging::{
    DestroyWindow, GetParent, GetWindow, GetWindowLongPtrW, GetWindowRect, GetWindowThreadProcessId, IsWindow,
    IsWindowVisible, SetParent, SetWindowLongPtrW, SetWindowPos, ShowWindow, GW_OWNER, SET_WINDOW_POS_FLAGS,
    SHOW_WINDOW_CMD, WINDOW_LONG_PTR_INDEX,
};

use crate::host::window_handle::{Area, WindowHandle};

pub fn to_hwnd(window: WindowHandle) -> HWND {
    HWND(window.0 as *mut c_void)
}

pub fn from_hwnd(hwnd: HWND) -> WindowHandle {
    WindowHandle(hwnd.0 as isize)
}

pub fn show_window(hwnd: HWND, cmd: SHOW_WINDOW_CMD) -> bool {
    unsafe { ShowWindow(hwnd, cmd).into() }
}

pub fn is_window(hwnd: HWND) -> bool {
    unsafe { IsWindow(hwnd).as_bool() }
}

pub fn is_window_visible(hwnd: HWND) -> bool {
    unsafe { IsWindowVisible(hwnd).as_bool() }
}

pub fn get_parent(hwnd: HWND) -> Option<HWND> {
    unsafe { GetParent(hwnd) }.ok().filter(|h| !h.is_invalid())
}

pub fn set_parent(hwnd: HWND, parent: Option<HWND>) -> bool {
    let parent = parent.unwrap_or_default();
    unsafe { SetParent(hwnd, parent) }
        .inspect_err(|e| log::warn!("SetParent failed for {:?}: {}", hwnd.0, e))
        .is_ok()
}

pub fn get_owner(hwnd: HWND) -> Option<HWND> {
    unsafe { GetWindow(hwnd, GW_OWNER) }.ok().filter(|h| !h.is_invalid())
}

pub fn get_process_id(hwnd: HWND) -> Option<u32> {
    let mut pid: u32 = 0;
    unsafe { GetWindowThreadProcessId(hwnd, Some(&mut pid)) };
    (pid != 0).then_some(pid)
}

pub fn get_window_long(hwnd: HWND, index: WINDOW_LONG_PTR_INDEX) -> isize {
    unsafe { GetWindowLongPtrW(hwnd, index) }
}

pub fn set_window_long(hwnd: HWND, index: WINDOW_LONG_PTR_INDEX, value: isize) {
    unsafe { SetWindowLongPtrW(hwnd, index, value) };
}

pub fn get_window_rect(hwnd: HWND) -> Option<[i32; 4]> {
    unsafe {
        let mut rect: RECT = RECT::default();
        match GetWindowRect(hwnd, &mut rect) {
            Ok(_) => Some([rect.left, rect.top, rect.right, rect.bottom]),
            Err(_) => None,
        }
    }
}

pub fn set_window_pos(hwnd: HWND, area: Area, flags: SET_WINDOW_POS_FLAGS) -> bool {
    unsafe { SetWindowPos(hwnd, None, area.x, area.y, area.width, area.height, flags) }
        .inspect_err(|e| log::debug!("SetWindowPos failed for {:?}: {}", hwnd.0, e))
        .is_ok()
}

pub fn screen_to_client(hwnd: HWND, point: (i32, i32)) -> Option<(i32, i32)> {
    let mut point = POINT { x: point.0, y: point.1 };
    match unsafe { ScreenToClient(hwnd, &mut point) }.as_bool() {
        true => Some((point.x, point.y)),
        false => None,
    }
}

pub fn destroy_window(hwnd: HWND) {
    unsafe {
        let _ = DestroyWindow(hwnd);
    }
}
