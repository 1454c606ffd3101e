pub mod host {
    pub mod error;
    pub mod locator;
    pub mod registry;
    pub mod slot;
    pub mod window_handle;
    pub mod window_system;
    #[cfg(test)]
    pub(crate) mod fake_window_system;
}

pub mod channel {
    pub mod method;
    pub mod plugin;
    pub mod registrar;
    pub mod stdio;
    pub mod value;
}

pub mod app {
    pub mod cli_args;
    pub mod configs;
    pub mod logger;
}

// INFO: GetWindowLongPtrW and SetWindowLongPtrW only exist on 64-bit targets
#[cfg(all(windows, target_pointer_width = "64"))]
pub mod win32 {
    pub mod api {
        pub mod misc;
        pub mod window;
    }
    pub mod callbacks {
        pub mod enum_windows;
    }
    pub mod window {
        pub mod app_window;
        pub mod placeholder_window;
    }
    pub mod win32_window_system;
    pub mod win_event_loop;
}
