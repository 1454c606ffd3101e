use super::window_handle::{Area, WindowHandle};
use super::window_system::{GeometryUpdate, WindowSystem};

const WS_CHILD: u32 = 0x4000_0000;
const WS_POPUP: u32 = 0x8000_0000;
const WS_CAPTION: u32 = 0x00C0_0000;
const WS_BORDER: u32 = 0x0080_0000;
const WS_SYSMENU: u32 = 0x0008_0000;
const WS_THICKFRAME: u32 = 0x0004_0000;
const WS_MINIMIZEBOX: u32 = 0x0002_0000;
const WS_MAXIMIZEBOX: u32 = 0x0001_0000;

/// Top-level decoration bits removed from a window while it is embedded
pub const DECORATION_STYLES: u32 =
    WS_POPUP | WS_CAPTION | WS_THICKFRAME | WS_BORDER | WS_SYSMENU | WS_MINIMIZEBOX | WS_MAXIMIZEBOX;

/// Returns the style an embedded window gets: decorations stripped, child bit added
pub fn embedded_style(style: isize) -> isize {
    (style & !(DECORATION_STYLES as isize)) | WS_CHILD as isize
}

/// What a window looked like right before it was attached
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SavedState {
    pub parent: WindowHandle,
    pub style: isize,
    pub ex_style: isize,
    pub rect: Area,
}

impl SavedState {
    /// Returns `None` when the window rect can't be read
    pub fn capture<S: WindowSystem>(system: &S, window: WindowHandle) -> Option<SavedState> {
        let rect = system.window_rect(window)?;
        Some(SavedState {
            parent: system.parent(window),
            style: system.style(window),
            ex_style: system.ex_style(window),
            rect,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Attachment {
    #[default]
    Empty,
    Attached { window: WindowHandle, saved: SavedState },
}

/// Transition taken by [`HostSlot::attach`] for a given target
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttachTransition {
    /// Nothing attached yet
    Fresh,
    /// The target is already attached: nothing to do
    AlreadyAttached,
    /// Another window is attached and must be restored first
    Replace(WindowHandle),
}

#[derive(Debug, Clone, PartialEq)]
pub struct HostSlot {
    placeholder: Option<WindowHandle>,
    attachment: Attachment,
    width: i32,
    height: i32,
    visible: bool,
}

impl Default for HostSlot {
    fn default() -> Self {
        HostSlot {
            placeholder: None,
            attachment: Attachment::Empty,
            width: 0,
            height: 0,
            visible: true,
        }
    }
}

impl HostSlot {
    pub fn new() -> HostSlot {
        HostSlot::default()
    }

    pub fn placeholder(&self) -> Option<WindowHandle> {
        self.placeholder
    }

    pub fn attached_window(&self) -> Option<WindowHandle> {
        match self.attachment {
            Attachment::Attached { window, .. } => Some(window),
            Attachment::Empty => None,
        }
    }

    pub fn saved_state(&self) -> Option<&SavedState> {
        match &self.attachment {
            Attachment::Attached { saved, .. } => Some(saved),
            Attachment::Empty => None,
        }
    }

    pub fn get_size(&self) -> (i32, i32) {
        (self.width, self.height)
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Creates the placeholder under `parent` unless it already exists
    pub fn ensure_placeholder<S: WindowSystem>(&mut self, system: &S, parent: Option<WindowHandle>) -> bool {
        if self.placeholder.is_some() {
            return true;
        }

        let Some(parent) = parent.and_then(WindowHandle::non_null) else {
            log::debug!("No application window available for the placeholder");
            return false;
        };

        self.placeholder = system.create_placeholder(parent);
        match self.placeholder {
            Some(placeholder) => log::debug!("Placeholder {} created under {}", placeholder, parent),
            None => log::warn!("Failed to create a placeholder window under {}", parent),
        }
        self.placeholder.is_some()
    }

    pub fn transition_for(&self, target: WindowHandle) -> AttachTransition {
        match self.attached_window() {
            None => AttachTransition::Fresh,
            Some(window) if window == target => AttachTransition::AlreadyAttached,
            Some(window) => AttachTransition::Replace(window),
        }
    }

    pub fn attach<S: WindowSystem>(&mut self, system: &S, target: WindowHandle) -> bool {
        let Some(placeholder) = self.placeholder else {
            return false;
        };

        if target.is_null() || target == placeholder || !system.is_window(target) {
            log::debug!("Cannot attach {}: not a valid window", target);
            return false;
        }

        let transition = self.transition_for(target);
        if transition == AttachTransition::AlreadyAttached {
            return true;
        }

        // INFO: must be captured before any change to the target
        let Some(saved) = SavedState::capture(system, target) else {
            log::warn!("Cannot attach {}: its rect is not available", target);
            return false;
        };

        if let AttachTransition::Replace(previous) = transition {
            log::debug!("Replacing {} with {}", previous, target);
            self.detach(system);
        }

        system.set_parent(target, placeholder);
        system.set_style(target, embedded_style(saved.style));
        system.set_ex_style(target, saved.ex_style);

        let (width, height) = self.embed_size();
        system.set_window_pos(target, Area::new(0, 0, width, height), GeometryUpdate::Embed);
        system.show_window(target, self.visible);

        self.attachment = Attachment::Attached { window: target, saved };
        log::info!("Window {} attached to placeholder {}", target, placeholder);
        true
    }

    /// Gives the attached window back to its original parent, exactly as it was captured
    pub fn detach<S: WindowSystem>(&mut self, system: &S) {
        let Attachment::Attached { window, saved } = std::mem::take(&mut self.attachment) else {
            return;
        };

        system.set_parent(window, saved.parent);
        system.set_style(window, saved.style);
        system.set_ex_style(window, saved.ex_style);
        check_restored_styles(system, window, &saved);

        system.set_window_pos(window, saved.rect, GeometryUpdate::Restore);
        system.show_window(window, true);

        log::info!("Window {} detached and restored", window);
    }

    /// Moves the placeholder to `origin` (client coordinates of the application window)
    pub fn update_rect<S: WindowSystem>(&mut self, system: &S, origin: (i32, i32), width: i32, height: i32) -> bool {
        let Some(placeholder) = self.placeholder else {
            return false;
        };

        let (width, height) = (width.max(0), height.max(0));
        system.set_window_pos(
            placeholder,
            Area::new(origin.0, origin.1, width, height),
            GeometryUpdate::Follow,
        );
        self.width = width;
        self.height = height;

        if let Some(window) = self.attached_window() {
            system.set_window_pos(window, Area::new(0, 0, width, height), GeometryUpdate::Follow);
        }

        system.show_window(placeholder, self.visible);
        true
    }

    pub fn set_visible<S: WindowSystem>(&mut self, system: &S, visible: bool) {
        self.visible = visible;

        if let Some(placeholder) = self.placeholder {
            system.show_window(placeholder, visible);
        }

        if let Some(window) = self.attached_window() {
            system.show_window(window, visible);
        }
    }

    /// Restores the attached window and destroys the placeholder
    pub fn destroy<S: WindowSystem>(mut self, system: &S) {
        self.detach(system);
        if let Some(placeholder) = self.placeholder.take() {
            system.destroy_window(placeholder);
        }
    }

    fn embed_size(&self) -> (i32, i32) {
        let width = if self.width > 0 { self.width } else { 1 };
        let height = if self.height > 0 { self.height } else { 1 };
        (width, height)
    }
}

fn check_restored_styles<S: WindowSystem>(system: &S, window: WindowHandle, saved: &SavedState) {
    let (style, ex_style) = (system.style(window), system.ex_style(window));
    if style != saved.style || ex_style != saved.ex_style {
        log::warn!(
            "Window {} restored with style {:x}/{:x}, expected {:x}/{:x}",
            window,
            style,
            ex_style,
            saved.style,
            saved.ex_style
        );
    }
}
