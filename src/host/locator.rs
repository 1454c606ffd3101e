use super::window_handle::WindowHandle;
use super::window_system::WindowSystem;

/// Strategy used to resolve a process id into a window to attach.
pub trait WindowLocator<S: WindowSystem> {
    fn locate(&self, system: &S, process_id: u32) -> Option<WindowHandle>;
}

/// Picks the first visible, unowned top-level window of the process.
///
/// The OS enumeration order is not stable, so when a process has more than one qualifying
/// window the result is whichever comes first. Callers should pass an explicit handle when
/// that matters.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessWindowLocator;

impl<S: WindowSystem> WindowLocator<S> for ProcessWindowLocator {
    fn locate(&self, system: &S, process_id: u32) -> Option<WindowHandle> {
        let found = system
            .top_level_windows()
            .into_iter()
            .find(|w| is_process_main_window(system, *w, process_id));

        log::trace!("Window lookup for process {}: {:?}", process_id, found);
        found
    }
}

fn is_process_main_window<S: WindowSystem>(system: &S, window: WindowHandle, process_id: u32) -> bool {
    if system.process_id(window) != Some(process_id) {
        return false;
    }

    if !system.is_visible(window) {
        return false;
    }

    system.owner(window).is_none()
}

#[cfg(test)]
mod tests {
    use super::{ProcessWindowLocator, WindowLocator};
    use crate::host::fake_window_system::{FakeWindow, FakeWindowSystem};
    use crate::host::window_handle::Area;

    fn rect() -> Area {
        Area::new(0, 0, 640, 480)
    }

    #[test]
    fn test_locate_first_visible_unowned() {
        let system = FakeWindowSystem::new();
        let _other = system.add_top_level(7, 0, rect());
        let hidden = system.add_top_level(42, 0, rect());
        system.set_visible_flag(hidden, false);
        let main = system.add_top_level(42, 0, rect());
        let mut dialog = FakeWindow::top_level(42, 0, 0, rect());
        dialog.owner = Some(main);
        system.add_window(dialog);
        let _second = system.add_top_level(42, 0, rect());

        assert_eq!(ProcessWindowLocator.locate(&system, 42), Some(main));
    }

    #[test]
    fn test_locate_skips_owned_windows() {
        let system = FakeWindowSystem::new();
        let main = system.add_top_level(1, 0, rect());
        let mut tooltip = FakeWindow::top_level(2, 0, 0, rect());
        tooltip.owner = Some(main);
        system.add_window(tooltip);

        assert_eq!(ProcessWindowLocator.locate(&system, 2), None);
    }

    #[test]
    fn test_locate_not_found() {
        let system = FakeWindowSystem::new();
        system.add_top_level(1, 0, rect());

        assert_eq!(ProcessWindowLocator.locate(&system, 99), None);
    }
}
