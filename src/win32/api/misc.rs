use widestring::U16CString;
use windows::core::PCWSTR;
use windows::Win32::Foundation::HMODULE;
use windows::Win32::System::LibraryLoader::GetModuleHandleW;

pub fn get_module_handle() -> Option<HMODULE> {
    unsafe { GetModuleHandleW(PCWSTR::null()) }
        .inspect_err(|e| log::error!("GetModuleHandleW failed: {}", e))
        .ok()
}

/// Null-terminated wide string; `None` if `s` contains a nul character
pub fn to_wide(s: &str) -> Option<U16CString> {
    U16CString::from_str(s)
        .inspect_err(|_| log::error!("Invalid window string: {:?}", s))
        .ok()
}
