use windows::core::PCWSTR;
use windows::Win32::Foundation::{HWND, LPARAM, LRESULT, WPARAM};
use windows::Win32::UI::WindowsAndMessaging::{
    CreateWindowExW, DefWindowProcW, PostQuitMessage, RegisterClassW, CS_HREDRAW, CS_VREDRAW, CW_USEDEFAULT,
    SW_SHOW, WINDOW_EX_STYLE, WM_DESTROY, WNDCLASSW, WS_CLIPCHILDREN, WS_OVERLAPPEDWINDOW,
};

use crate::app::configs::WindowConfig;
use crate::win32::api::misc::{get_module_handle, to_wide};
use crate::win32::api::window::{destroy_window, is_window, show_window};

const APP_WINDOW_CLASS_NAME: &str = "native_preview_host:app_window";

/// Top-level window hosting the placeholders. Closing it ends the message loop.
pub struct AppWindow {
    hwnd: HWND,
}

impl AppWindow {
    pub fn create(config: &WindowConfig) -> Option<AppWindow> {
        let hmod = get_module_handle()?;
        let class_name = to_wide(APP_WINDOW_CLASS_NAME)?;
        let title = to_wide(&config.title)?;

        let wc = WNDCLASSW {
            style: CS_HREDRAW | CS_VREDRAW,
            hInstance: hmod.into(),
            lpszClassName: PCWSTR(class_name.as_ptr()),
            lpfnWndProc: Some(window_proc),
            ..Default::default()
        };
        unsafe { RegisterClassW(&wc) };

        let hwnd = unsafe {
            CreateWindowExW(
                WINDOW_EX_STYLE(0),
                PCWSTR(class_name.as_ptr()),
                PCWSTR(title.as_ptr()),
                WS_OVERLAPPEDWINDOW | WS_CLIPCHILDREN,
                CW_USEDEFAULT,
                CW_USEDEFAULT,
                config.width.max(1),
                config.height.max(1),
                None,
                None,
                hmod,
                None,
            )
        }
        .inspect_err(|e| log::error!("Application window creation failed: {}", e))
        .ok()
        .filter(|h| !h.is_invalid())?;

        show_window(hwnd, SW_SHOW);
        Some(AppWindow { hwnd })
    }

    pub fn hwnd(&self) -> HWND {
        self.hwnd
    }
}

impl Drop for AppWindow {
    fn drop(&mut self) {
        if is_window(self.hwnd) {
            destroy_window(self.hwnd);
        }
    }
}

unsafe extern "system" fn window_proc(hwnd: HWND, msg: u32, wparam: WPARAM, lparam: LPARAM) -> LRESULT {
    match msg {
        WM_DESTROY => {
            PostQuitMessage(0);
            LRESULT(0)
        }
        _ => DefWindowProcW(hwnd, msg, wparam, lparam),
    }
}
