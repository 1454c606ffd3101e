use widestring::U16CString;
use windows::core::PCWSTR;
use windows::Win32::Foundation::{HWND, LPARAM, LRESULT, WPARAM};
use windows::Win32::UI::WindowsAndMessaging::{
    CreateWindowExW, DefWindowProcW, RegisterClassW, WINDOW_EX_STYLE, WNDCLASSW, WS_CHILD, WS_CLIPCHILDREN,
    WS_CLIPSIBLINGS, WS_VISIBLE,
};

use crate::win32::api::misc::{get_module_handle, to_wide};

const SYSTEM_STATIC_CLASS: &str = "STATIC";

/// Window class used for placeholders. Only custom classes are registered, "STATIC" is the
/// system one.
pub struct PlaceholderClass {
    name: U16CString,
}

impl PlaceholderClass {
    pub fn register(name: &str) -> Option<PlaceholderClass> {
        let wide_name = to_wide(name)?;
        if name.eq_ignore_ascii_case(SYSTEM_STATIC_CLASS) {
            return Some(PlaceholderClass { name: wide_name });
        }

        let wc = WNDCLASSW {
            hInstance: get_module_handle()?.into(),
            lpszClassName: PCWSTR(wide_name.as_ptr()),
            lpfnWndProc: Some(placeholder_proc),
            ..Default::default()
        };

        // INFO: fails when the class is already registered, which is fine
        if unsafe { RegisterClassW(&wc) } == 0 {
            log::debug!("Placeholder class '{}' not registered (already existing?)", name);
        }

        Some(PlaceholderClass { name: wide_name })
    }

    /// Creates a 1x1 visible child window of `parent`
    pub fn create(&self, parent: HWND) -> Option<HWND> {
        let hmod = get_module_handle()?;
        let style = WS_CHILD | WS_VISIBLE | WS_CLIPSIBLINGS | WS_CLIPCHILDREN;

        unsafe {
            CreateWindowExW(
                WINDOW_EX_STYLE(0),
                PCWSTR(self.name.as_ptr()),
                PCWSTR::null(),
                style,
                0,
                0,
                1,
                1,
                parent,
                None,
                hmod,
                None,
            )
        }
        .inspect_err(|e| log::warn!("Placeholder creation failed: {}", e))
        .ok()
        .filter(|h| !h.is_invalid())
    }
}

unsafe extern "system" fn placeholder_proc(hwnd: HWND, msg: u32, wparam: WPARAM, lparam: LPARAM) -> LRESULT {
    DefWindowProcW(hwnd, msg, wparam, lparam)
}
