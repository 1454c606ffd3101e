use std::cell::{Cell, RefCell};

use super::window_handle::{Area, WindowHandle};
use super::window_system::{GeometryUpdate, WindowSystem};

pub(crate) const FAKE_CHILD_STYLE: isize = 0x5600_0000;

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct FakeWindow {
    pub parent: WindowHandle,
    pub owner: Option<WindowHandle>,
    pub process_id: u32,
    pub style: isize,
    pub ex_style: isize,
    pub rect: Area,
    pub visible: bool,
}

impl FakeWindow {
    pub fn top_level(process_id: u32, style: isize, ex_style: isize, rect: Area) -> FakeWindow {
        FakeWindow {
            parent: WindowHandle::NULL,
            owner: None,
            process_id,
            style,
            ex_style,
            rect,
            visible: true,
        }
    }
}

/// In-memory window system. Windows are kept in creation order, which is also the
/// enumeration order, and every mutating call is recorded in a journal.
pub(crate) struct FakeWindowSystem {
    windows: RefCell<Vec<(WindowHandle, FakeWindow)>>,
    next_handle: Cell<isize>,
    journal: RefCell<Vec<String>>,
    placeholders_created: Cell<usize>,
    fail_placeholders: Cell<bool>,
    fail_window_rect: Cell<bool>,
}

impl FakeWindowSystem {
    pub fn new() -> FakeWindowSystem {
        FakeWindowSystem {
            windows: RefCell::new(Vec::new()),
            next_handle: Cell::new(0x100),
            journal: RefCell::new(Vec::new()),
            placeholders_created: Cell::new(0),
            fail_placeholders: Cell::new(false),
            fail_window_rect: Cell::new(false),
        }
    }

    pub fn add_window(&self, window: FakeWindow) -> WindowHandle {
        let handle = WindowHandle(self.next_handle.get());
        self.next_handle.set(handle.0 + 0x10);
        self.windows.borrow_mut().push((handle, window));
        handle
    }

    /// Adds a visible, unowned top-level window, e.g. an application main window
    pub fn add_top_level(&self, process_id: u32, style: isize, rect: Area) -> WindowHandle {
        self.add_window(FakeWindow::top_level(process_id, style, 0x100, rect))
    }

    pub fn window(&self, handle: WindowHandle) -> Option<FakeWindow> {
        self.windows
            .borrow()
            .iter()
            .find(|(h, _)| *h == handle)
            .map(|(_, w)| w.clone())
    }

    pub fn journal(&self) -> Vec<String> {
        self.journal.borrow().clone()
    }

    pub fn clear_journal(&self) {
        self.journal.borrow_mut().clear();
    }

    pub fn placeholders_created(&self) -> usize {
        self.placeholders_created.get()
    }

    pub fn set_fail_placeholders(&self, fail: bool) {
        self.fail_placeholders.set(fail);
    }

    pub fn set_fail_window_rect(&self, fail: bool) {
        self.fail_window_rect.set(fail);
    }

    pub fn set_visible_flag(&self, handle: WindowHandle, visible: bool) {
        self.update(handle, |w| w.visible = visible);
    }

    fn update<F: FnOnce(&mut FakeWindow)>(&self, handle: WindowHandle, f: F) -> bool {
        match self.windows.borrow_mut().iter_mut().find(|(h, _)| *h == handle) {
            Some((_, w)) => {
                f(w);
                true
            }
            None => false,
        }
    }

    fn record(&self, entry: String) {
        self.journal.borrow_mut().push(entry);
    }
}

impl WindowSystem for FakeWindowSystem {
    fn create_placeholder(&self, parent: WindowHandle) -> Option<WindowHandle> {
        if self.fail_placeholders.get() || !self.is_window(parent) {
            return None;
        }
        let handle = self.add_window(FakeWindow {
            parent,
            owner: None,
            process_id: 0,
            style: FAKE_CHILD_STYLE,
            ex_style: 0,
            rect: Area::new(0, 0, 1, 1),
            visible: true,
        });
        self.placeholders_created.set(self.placeholders_created.get() + 1);
        self.record(format!("create_placeholder {handle}"));
        Some(handle)
    }

    fn destroy_window(&self, window: WindowHandle) {
        self.windows.borrow_mut().retain(|(h, _)| *h != window);
        self.record(format!("destroy {window}"));
    }

    fn is_window(&self, window: WindowHandle) -> bool {
        self.window(window).is_some()
    }

    fn is_visible(&self, window: WindowHandle) -> bool {
        self.window(window).is_some_and(|w| w.visible)
    }

    fn show_window(&self, window: WindowHandle, visible: bool) {
        self.update(window, |w| w.visible = visible);
        self.record(format!("show {window} {visible}"));
    }

    fn parent(&self, window: WindowHandle) -> WindowHandle {
        self.window(window).map_or(WindowHandle::NULL, |w| w.parent)
    }

    fn set_parent(&self, window: WindowHandle, parent: WindowHandle) {
        self.update(window, |w| w.parent = parent);
        self.record(format!("set_parent {window} {parent}"));
    }

    fn owner(&self, window: WindowHandle) -> Option<WindowHandle> {
        self.window(window).and_then(|w| w.owner)
    }

    fn process_id(&self, window: WindowHandle) -> Option<u32> {
        self.window(window).map(|w| w.process_id)
    }

    fn style(&self, window: WindowHandle) -> isize {
        self.window(window).map_or(0, |w| w.style)
    }

    fn set_style(&self, window: WindowHandle, style: isize) {
        self.update(window, |w| w.style = style);
        self.record(format!("set_style {window} {style:#x}"));
    }

    fn ex_style(&self, window: WindowHandle) -> isize {
        self.window(window).map_or(0, |w| w.ex_style)
    }

    fn set_ex_style(&self, window: WindowHandle, ex_style: isize) {
        self.update(window, |w| w.ex_style = ex_style);
        self.record(format!("set_ex_style {window} {ex_style:#x}"));
    }

    fn window_rect(&self, window: WindowHandle) -> Option<Area> {
        if self.fail_window_rect.get() {
            return None;
        }
        self.window(window).map(|w| w.rect)
    }

    fn set_window_pos(&self, window: WindowHandle, area: Area, update: GeometryUpdate) -> bool {
        self.record(format!("set_pos {window} {:?} {update:?}", area.to_edges()));
        self.update(window, |w| w.rect = area)
    }

    fn screen_to_client(&self, reference: WindowHandle, point: (i32, i32)) -> Option<(i32, i32)> {
        let origin = self.window(reference)?.rect.get_origin();
        Some((point.0 - origin.0, point.1 - origin.1))
    }

    fn top_level_windows(&self) -> Vec<WindowHandle> {
        self.windows
            .borrow()
            .iter()
            .filter(|(_, w)| w.parent.is_null())
            .map(|(h, _)| *h)
            .collect()
    }
}
