use super::window_handle::{Area, WindowHandle};

/// Kind of geometry change applied with [`WindowSystem::set_window_pos`]. None of them alters
/// the z-order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeometryUpdate {
    /// Fits an attached window into its placeholder and recomputes its frame
    Embed,
    /// Keeps a placeholder (or its attached window) in sync without activating it
    Follow,
    /// Moves a detached window back to its original rect and redraws its frame
    Restore,
}

/// Native windowing calls used by the host.
///
/// Styles are the raw pointer-sized style words: values read with [`WindowSystem::style`] must
/// be accepted back verbatim by [`WindowSystem::set_style`].
pub trait WindowSystem {
    /// Creates a child placeholder window (initially 1x1) under `parent`
    fn create_placeholder(&self, parent: WindowHandle) -> Option<WindowHandle>;
    fn destroy_window(&self, window: WindowHandle);

    fn is_window(&self, window: WindowHandle) -> bool;
    fn is_visible(&self, window: WindowHandle) -> bool;
    fn show_window(&self, window: WindowHandle, visible: bool);

    /// Returns the null handle when the window has no parent
    fn parent(&self, window: WindowHandle) -> WindowHandle;
    fn set_parent(&self, window: WindowHandle, parent: WindowHandle);
    fn owner(&self, window: WindowHandle) -> Option<WindowHandle>;
    fn process_id(&self, window: WindowHandle) -> Option<u32>;

    fn style(&self, window: WindowHandle) -> isize;
    fn set_style(&self, window: WindowHandle, style: isize);
    fn ex_style(&self, window: WindowHandle) -> isize;
    fn set_ex_style(&self, window: WindowHandle, ex_style: isize);

    /// Window rect in screen coordinates
    fn window_rect(&self, window: WindowHandle) -> Option<Area>;
    /// Position is relative to the parent's client area for child windows
    fn set_window_pos(&self, window: WindowHandle, area: Area, update: GeometryUpdate) -> bool;
    /// Converts a screen point into the client coordinates of `reference`
    fn screen_to_client(&self, reference: WindowHandle, point: (i32, i32)) -> Option<(i32, i32)>;

    /// All top-level windows, in the order the OS enumerates them
    fn top_level_windows(&self) -> Vec<WindowHandle>;
}

impl<W: WindowSystem> WindowSystem for std::rc::Rc<W> {
    fn create_placeholder(&self, parent: WindowHandle) -> Option<WindowHandle> {
        (**self).create_placeholder(parent)
    }

    fn destroy_window(&self, window: WindowHandle) {
        (**self).destroy_window(window)
    }

    fn is_window(&self, window: WindowHandle) -> bool {
        (**self).is_window(window)
    }

    fn is_visible(&self, window: WindowHandle) -> bool {
        (**self).is_visible(window)
    }

    fn show_window(&self, window: WindowHandle, visible: bool) {
        (**self).show_window(window, visible)
    }

    fn parent(&self, window: WindowHandle) -> WindowHandle {
        (**self).parent(window)
    }

    fn set_parent(&self, window: WindowHandle, parent: WindowHandle) {
        (**self).set_parent(window, parent)
    }

    fn owner(&self, window: WindowHandle) -> Option<WindowHandle> {
        (**self).owner(window)
    }

    fn process_id(&self, window: WindowHandle) -> Option<u32> {
        (**self).process_id(window)
    }

    fn style(&self, window: WindowHandle) -> isize {
        (**self).style(window)
    }

    fn set_style(&self, window: WindowHandle, style: isize) {
        (**self).set_style(window, style)
    }

    fn ex_style(&self, window: WindowHandle) -> isize {
        (**self).ex_style(window)
    }

    fn set_ex_style(&self, window: WindowHandle, ex_style: isize) {
        (**self).set_ex_style(window, ex_style)
    }

    fn window_rect(&self, window: WindowHandle) -> Option<Area> {
        (**self).window_rect(window)
    }

    fn set_window_pos(&self, window: WindowHandle, area: Area, update: GeometryUpdate) -> bool {
        (**self).set_window_pos(window, area, update)
    }

    fn screen_to_client(&self, reference: WindowHandle, point: (i32, i32)) -> Option<(i32, i32)> {
        (**self).screen_to_client(reference, point)
    }

    fn top_level_windows(&self) -> Vec<WindowHandle> {
        (**self).top_level_windows()
    }
}
