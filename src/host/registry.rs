use std::collections::HashMap;

use super::error::HostError;
use super::locator::WindowLocator;
use super::slot::HostSlot;
use super::window_handle::WindowHandle;
use super::window_system::WindowSystem;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttachTarget {
    Handle(WindowHandle),
    Process(u32),
    None,
}

/// Owns every host slot, keyed by the caller's identifier.
///
/// All the operations run on the thread owning the application window; a failure on one slot
/// never touches the others.
pub struct HostRegistry<S: WindowSystem, L: WindowLocator<S>> {
    system: S,
    locator: L,
    app_window: Option<WindowHandle>,
    slots: HashMap<String, HostSlot>,
}

impl<S: WindowSystem, L: WindowLocator<S>> HostRegistry<S, L> {
    pub fn new(system: S, locator: L, app_window: Option<WindowHandle>) -> HostRegistry<S, L> {
        HostRegistry {
            system,
            locator,
            app_window: app_window.and_then(WindowHandle::non_null),
            slots: HashMap::new(),
        }
    }

    pub fn system(&self) -> &S {
        &self.system
    }

    pub fn set_app_window(&mut self, app_window: Option<WindowHandle>) {
        self.app_window = app_window.and_then(WindowHandle::non_null);
    }

    pub fn get_slot(&self, id: &str) -> Option<&HostSlot> {
        self.slots.get(id)
    }

    pub fn slots_count(&self) -> usize {
        self.slots.len()
    }

    pub fn create_host(&mut self, id: &str) -> Result<bool, HostError> {
        validate_id(id)?;

        // INFO: the slot is kept on failure, a later attach can still create the placeholder
        let slot = self.slots.entry(id.to_owned()).or_default();
        match slot.ensure_placeholder(&self.system, self.app_window) {
            true => Ok(true),
            false => HostError::CreateFailed.into(),
        }
    }

    pub fn destroy_host(&mut self, id: &str) -> Result<bool, HostError> {
        validate_id(id)?;

        if let Some(slot) = self.slots.remove(id) {
            slot.destroy(&self.system);
            log::debug!("Host '{}' destroyed", id);
        }
        Ok(true)
    }

    /// `x` and `y` are screen coordinates, converted to the application window client space
    pub fn update_rect(&mut self, id: &str, x: i32, y: i32, width: i32, height: i32) -> Result<bool, HostError> {
        validate_id(id)?;
        let slot = self.slots.get_mut(id).ok_or_else(|| HostError::MissingHost(id.to_owned()))?;

        let (Some(_), Some(app_window)) = (slot.placeholder(), self.app_window) else {
            return Ok(false);
        };

        let Some(origin) = self.system.screen_to_client(app_window, (x, y)) else {
            log::debug!("Screen to client conversion failed for host '{}'", id);
            return Ok(false);
        };

        Ok(slot.update_rect(&self.system, origin, width, height))
    }

    pub fn set_visible(&mut self, id: &str, visible: bool) -> Result<bool, HostError> {
        validate_id(id)?;
        let slot = self.slots.get_mut(id).ok_or_else(|| HostError::MissingHost(id.to_owned()))?;

        slot.set_visible(&self.system, visible);
        Ok(true)
    }

    /// A window lives in one slot at a time: attaching it here first restores it from any other slot
    pub fn attach_window(&mut self, id: &str, target: AttachTarget) -> Result<bool, HostError> {
        validate_id(id)?;
        let slot = self.slots.get_mut(id).ok_or_else(|| HostError::MissingHost(id.to_owned()))?;

        let target = match target {
            AttachTarget::Handle(handle) => handle.non_null(),
            AttachTarget::Process(pid) => self.locator.locate(&self.system, pid),
            AttachTarget::None => None,
        };

        let has_placeholder = slot.ensure_placeholder(&self.system, self.app_window);
        let Some(target) = target.filter(|_| has_placeholder) else {
            log::debug!("Nothing to attach to host '{}'", id);
            return Ok(false);
        };

        for (other_id, other) in self.slots.iter_mut().filter(|(other_id, _)| other_id.as_str() != id) {
            if other.attached_window() == Some(target) {
                log::debug!("Window {} moves from host '{}' to host '{}'", target, other_id, id);
                other.detach(&self.system);
            }
        }

        let slot = self.slots.get_mut(id).ok_or_else(|| HostError::MissingHost(id.to_owned()))?;
        Ok(slot.attach(&self.system, target))
    }

    pub fn detach_window(&mut self, id: &str) -> Result<bool, HostError> {
        validate_id(id)?;
        let slot = self.slots.get_mut(id).ok_or_else(|| HostError::MissingHost(id.to_owned()))?;

        slot.detach(&self.system);
        Ok(true)
    }
}

impl<S: WindowSystem, L: WindowLocator<S>> Drop for HostRegistry<S, L> {
    fn drop(&mut self) {
        for (id, slot) in self.slots.drain() {
            log::debug!("Releasing host '{}'", id);
            slot.destroy(&self.system);
        }
    }
}

fn validate_id(id: &str) -> Result<(), HostError> {
    match id.is_empty() {
        true => HostError::bad_args("host_id is required.").into(),
        false => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::{AttachTarget, HostRegistry};
    use crate::host::error::HostError;
    use crate::host::fake_window_system::FakeWindowSystem;
    use crate::host::locator::{ProcessWindowLocator, WindowLocator};
    use crate::host::slot::{embedded_style, SavedState};
    use crate::host::window_handle::{Area, WindowHandle};
    use crate::host::window_system::WindowSystem;

    const OVERLAPPED_WINDOW: isize = 0x10CF_0000;

    struct FixedLocator(Option<WindowHandle>);

    impl<S: WindowSystem> WindowLocator<S> for FixedLocator {
        fn locate(&self, _system: &S, _process_id: u32) -> Option<WindowHandle> {
            self.0
        }
    }

    fn setup() -> (HostRegistry<FakeWindowSystem, ProcessWindowLocator>, WindowHandle) {
        let system = FakeWindowSystem::new();
        let app = system.add_top_level(1, OVERLAPPED_WINDOW, Area::new(100, 50, 1280, 800));
        (HostRegistry::new(system, ProcessWindowLocator, Some(app)), app)
    }

    fn add_target(registry: &HostRegistry<FakeWindowSystem, ProcessWindowLocator>, pid: u32) -> WindowHandle {
        registry
            .system()
            .add_top_level(pid, OVERLAPPED_WINDOW, Area::new(300, 200, 640, 480))
    }

    #[test]
    fn test_create_host_is_idempotent() {
        let (mut registry, app) = setup();

        assert_eq!(registry.create_host("p1"), Ok(true));
        assert_eq!(registry.create_host("p1"), Ok(true));

        assert_eq!(registry.system().placeholders_created(), 1);
        let placeholder = registry.get_slot("p1").unwrap().placeholder().unwrap();
        assert_eq!(registry.system().window(placeholder).unwrap().parent, app);
    }

    #[test]
    fn test_create_host_without_app_window() {
        let system = FakeWindowSystem::new();
        let mut registry = HostRegistry::new(system, ProcessWindowLocator, None);

        assert_eq!(registry.create_host("p1"), Err(HostError::CreateFailed));
        assert_eq!(registry.slots_count(), 1);

        let app = registry.system().add_top_level(1, OVERLAPPED_WINDOW, Area::new(0, 0, 800, 600));
        registry.set_app_window(Some(app));
        assert_eq!(registry.create_host("p1"), Ok(true));
    }

    #[test]
    fn test_empty_id_is_rejected() {
        let (mut registry, _) = setup();
        registry.create_host("p1").unwrap();
        let before = registry.get_slot("p1").cloned();
        let bad_args = Err(HostError::bad_args("host_id is required."));

        assert_eq!(registry.create_host(""), bad_args);
        assert_eq!(registry.destroy_host(""), bad_args);
        assert_eq!(registry.update_rect("", 0, 0, 10, 10), bad_args);
        assert_eq!(registry.set_visible("", false), bad_args);
        assert_eq!(registry.attach_window("", AttachTarget::Process(1)), bad_args);
        assert_eq!(registry.detach_window(""), bad_args);

        assert_eq!(registry.slots_count(), 1);
        assert_eq!(registry.get_slot("p1").cloned(), before);
    }

    #[test]
    fn test_missing_host() {
        let (mut registry, _) = setup();
        let missing = Err(HostError::MissingHost("nope".to_owned()));

        assert_eq!(registry.update_rect("nope", 0, 0, 10, 10), missing);
        assert_eq!(registry.set_visible("nope", true), missing);
        assert_eq!(registry.attach_window("nope", AttachTarget::Process(1)), missing);
        assert_eq!(registry.detach_window("nope"), missing);
        assert_eq!(registry.destroy_host("nope"), Ok(true));
    }

    #[test]
    fn test_attach_and_detach_scenario() {
        let (mut registry, _) = setup();
        let target = add_target(&registry, 42);
        let before = SavedState::capture(registry.system(), target).unwrap();

        registry.create_host("p1").unwrap();
        assert_eq!(registry.update_rect("p1", 120, 90, 400, 300), Ok(true));
        assert_eq!(registry.attach_window("p1", AttachTarget::Handle(target)), Ok(true));

        let placeholder = registry.get_slot("p1").unwrap().placeholder().unwrap();
        let attached = registry.system().window(target).unwrap();
        assert_eq!(attached.parent, placeholder);
        assert_eq!(attached.style, embedded_style(OVERLAPPED_WINDOW));
        assert_eq!(attached.rect, Area::new(0, 0, 400, 300));

        assert_eq!(registry.detach_window("p1"), Ok(true));
        assert_eq!(SavedState::capture(registry.system(), target).unwrap(), before);
        assert!(registry.system().window(target).unwrap().visible);
    }

    #[test]
    fn test_update_rect_converts_to_client_space() {
        let (mut registry, _) = setup();
        let target = add_target(&registry, 42);
        registry.create_host("p1").unwrap();
        registry.attach_window("p1", AttachTarget::Handle(target)).unwrap();

        assert_eq!(registry.update_rect("p1", 150, 80, 320, 240), Ok(true));

        let placeholder = registry.get_slot("p1").unwrap().placeholder().unwrap();
        let placeholder_rect = registry.system().window(placeholder).unwrap().rect;
        assert_eq!(placeholder_rect, Area::new(50, 30, 320, 240));
        assert_eq!(registry.system().window(target).unwrap().rect, Area::new(0, 0, 320, 240));
    }

    #[test]
    fn test_update_rect_without_placeholder() {
        let (mut registry, _) = setup();
        registry.system().set_fail_placeholders(true);

        assert_eq!(registry.create_host("p1"), Err(HostError::CreateFailed));
        assert_eq!(registry.update_rect("p1", 0, 0, 100, 100), Ok(false));
    }

    #[test]
    fn test_attach_by_process_id() {
        let (mut registry, _) = setup();
        let target = add_target(&registry, 42);
        registry.create_host("p1").unwrap();

        assert_eq!(registry.attach_window("p1", AttachTarget::Process(43)), Ok(false));
        assert_eq!(registry.attach_window("p1", AttachTarget::Process(42)), Ok(true));
        assert_eq!(registry.get_slot("p1").unwrap().attached_window(), Some(target));
    }

    #[test]
    fn test_attach_with_substituted_locator() {
        let system = FakeWindowSystem::new();
        let app = system.add_top_level(1, OVERLAPPED_WINDOW, Area::new(0, 0, 800, 600));
        let target = system.add_top_level(2, OVERLAPPED_WINDOW, Area::new(0, 0, 200, 100));
        let mut registry = HostRegistry::new(system, FixedLocator(Some(target)), Some(app));
        registry.create_host("p1").unwrap();

        assert_eq!(registry.attach_window("p1", AttachTarget::Process(999)), Ok(true));
        assert_eq!(registry.attach_window("p1", AttachTarget::None), Ok(false));
        assert_eq!(registry.get_slot("p1").unwrap().attached_window(), Some(target));
    }

    #[test]
    fn test_attach_creates_placeholder_lazily() {
        let (mut registry, _) = setup();
        let target = add_target(&registry, 42);
        registry.system().set_fail_placeholders(true);
        assert_eq!(registry.create_host("p1"), Err(HostError::CreateFailed));

        assert_eq!(registry.attach_window("p1", AttachTarget::Handle(target)), Ok(false));

        registry.system().set_fail_placeholders(false);
        assert_eq!(registry.attach_window("p1", AttachTarget::Handle(target)), Ok(true));
        assert!(registry.get_slot("p1").unwrap().placeholder().is_some());
    }

    #[test]
    fn test_destroy_host_restores_attached_window() {
        let (mut registry, _) = setup();
        let target = add_target(&registry, 42);
        let before = SavedState::capture(registry.system(), target).unwrap();
        registry.create_host("p1").unwrap();
        registry.attach_window("p1", AttachTarget::Handle(target)).unwrap();
        let placeholder = registry.get_slot("p1").unwrap().placeholder().unwrap();

        assert_eq!(registry.destroy_host("p1"), Ok(true));

        assert_eq!(SavedState::capture(registry.system(), target).unwrap(), before);
        assert!(registry.system().window(placeholder).is_none());
        assert!(registry.get_slot("p1").is_none());
    }

    #[test]
    fn test_slots_are_independent() {
        let (mut registry, _) = setup();
        let first = add_target(&registry, 1);
        let second = add_target(&registry, 2);
        registry.create_host("a").unwrap();
        registry.create_host("b").unwrap();
        registry.attach_window("a", AttachTarget::Handle(first)).unwrap();
        registry.attach_window("b", AttachTarget::Handle(second)).unwrap();

        registry.set_visible("a", false).unwrap();
        registry.update_rect("a", 0, 0, 10, 10).unwrap();
        registry.detach_window("a").unwrap();

        let slot_b = registry.get_slot("b").unwrap();
        assert_eq!(slot_b.attached_window(), Some(second));
        assert!(slot_b.is_visible());
        assert_eq!(registry.system().window(second).unwrap().parent, slot_b.placeholder().unwrap());
        assert!(registry.system().window(second).unwrap().visible);
    }

    #[test]
    fn test_same_window_attached_to_two_hosts() {
        let (mut registry, _) = setup();
        let target = add_target(&registry, 42);
        let before = SavedState::capture(registry.system(), target).unwrap();
        registry.create_host("a").unwrap();
        registry.create_host("b").unwrap();

        assert_eq!(registry.attach_window("a", AttachTarget::Handle(target)), Ok(true));
        assert_eq!(registry.attach_window("b", AttachTarget::Handle(target)), Ok(true));

        let slot_b = registry.get_slot("b").unwrap();
        assert_eq!(registry.get_slot("a").unwrap().attached_window(), None);
        assert_eq!(slot_b.attached_window(), Some(target));
        assert_eq!(slot_b.saved_state(), Some(&before));
        assert_eq!(registry.system().window(target).unwrap().parent, slot_b.placeholder().unwrap());

        assert_eq!(registry.detach_window("a"), Ok(true));
        assert_eq!(registry.detach_window("b"), Ok(true));
        assert_eq!(SavedState::capture(registry.system(), target).unwrap(), before);
    }

    #[test]
    fn test_destroying_previous_host_keeps_moved_window() {
        let (mut registry, _) = setup();
        let target = add_target(&registry, 42);
        let before = SavedState::capture(registry.system(), target).unwrap();
        registry.create_host("a").unwrap();
        registry.create_host("b").unwrap();
        registry.attach_window("a", AttachTarget::Handle(target)).unwrap();
        registry.attach_window("b", AttachTarget::Handle(target)).unwrap();

        assert_eq!(registry.destroy_host("a"), Ok(true));
        let placeholder_b = registry.get_slot("b").unwrap().placeholder().unwrap();
        assert_eq!(registry.system().window(target).unwrap().parent, placeholder_b);

        assert_eq!(registry.destroy_host("b"), Ok(true));
        assert_eq!(SavedState::capture(registry.system(), target).unwrap(), before);
    }

    #[test]
    fn test_drop_restores_every_slot() {
        let system = FakeWindowSystem::new();
        let app = system.add_top_level(1, OVERLAPPED_WINDOW, Area::new(0, 0, 800, 600));
        let target = system.add_top_level(2, OVERLAPPED_WINDOW, Area::new(10, 20, 200, 100));
        let system = std::rc::Rc::new(system);

        let mut registry = HostRegistry::new(system.clone(), ProcessWindowLocator, Some(app));
        registry.create_host("p1").unwrap();
        registry.attach_window("p1", AttachTarget::Handle(target)).unwrap();
        drop(registry);

        let restored = system.window(target).unwrap();
        assert_eq!(restored.parent, WindowHandle::NULL);
        assert_eq!(restored.style, OVERLAPPED_WINDOW);
        assert_eq!(restored.rect, Area::new(10, 20, 200, 100));
        assert_eq!(system.top_level_windows(), vec![app, target]);
    }
}
