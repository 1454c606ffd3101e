use std::fmt::{Debug, Display};

/// Opaque identifier of a native window.
///
/// The payload is the raw pointer-sized handle value; it is never dereferenced outside the
/// platform layer.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct WindowHandle(pub isize);

impl WindowHandle {
    pub const NULL: WindowHandle = WindowHandle(0);

    pub fn new(raw: isize) -> WindowHandle {
        WindowHandle(raw)
    }

    pub fn is_null(&self) -> bool {
        self.0 == 0
    }

    /// Returns `None` for the null handle
    pub fn non_null(self) -> Option<WindowHandle> {
        (!self.is_null()).then_some(self)
    }
}

impl Debug for WindowHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "WindowHandle({:#x})", self.0)
    }
}

impl Display for WindowHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:#x}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Area {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Area {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Area {
        Area { x, y, width, height }
    }

    /// Builds an area from its edges (`left`, `top`, `right`, `bottom`)
    pub fn from_edges(edges: [i32; 4]) -> Area {
        let [left, top, right, bottom] = edges;
        Area::new(left, top, right - left, bottom - top)
    }

    pub fn to_edges(&self) -> [i32; 4] {
        [self.x, self.y, self.x + self.width, self.y + self.height]
    }

    pub fn get_origin(&self) -> (i32, i32) {
        (self.x, self.y)
    }
}
