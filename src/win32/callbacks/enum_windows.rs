use windows::Win32::Foundation::{BOOL, HWND, LPARAM};
use windows::Win32::UI::WindowsAndMessaging::EnumWindows;

use crate::host::window_handle::WindowHandle;
use crate::win32::api::window::from_hwnd;

pub extern "system" fn collect_top_level_windows(hwnd: HWND, param: LPARAM) -> BOOL {
    let windows = unsafe { &mut *(param.0 as *mut Vec<WindowHandle>) };
    windows.push(from_hwnd(hwnd));
    true.into()
}

pub fn enum_top_level_windows() -> Vec<WindowHandle> {
    let mut windows: Vec<WindowHandle> = Vec::new();
    let lparam = LPARAM(&mut windows as *mut Vec<WindowHandle> as isize);

    if let Err(e) = unsafe { EnumWindows(Some(collect_top_level_windows), lparam) } {
        log::warn!("EnumWindows failed: {}", e);
    }

    windows
}
