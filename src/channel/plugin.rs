use super::method::{MethodCall, MethodResponse};
use super::value::{get_bool, get_int, get_string, EncodableMap};
use crate::host::error::HostError;
use crate::host::locator::WindowLocator;
use crate::host::registry::{AttachTarget, HostRegistry};
use crate::host::window_handle::WindowHandle;
use crate::host::window_system::WindowSystem;

pub const DEFAULT_CHANNEL: &str = "conduit/native_preview_host";

/// Decodes the calls received on the channel and forwards them to the host registry
pub struct PreviewHostPlugin<S: WindowSystem, L: WindowLocator<S>> {
    registry: HostRegistry<S, L>,
}

impl<S: WindowSystem, L: WindowLocator<S>> PreviewHostPlugin<S, L> {
    pub fn new(registry: HostRegistry<S, L>) -> PreviewHostPlugin<S, L> {
        PreviewHostPlugin { registry }
    }

    pub fn registry(&self) -> &HostRegistry<S, L> {
        &self.registry
    }

    pub fn handle_method_call(&mut self, call: &MethodCall) -> MethodResponse {
        log::debug!("Method call received: {}", call.method);

        let result = self.dispatch(call);
        if let Err(e) = &result {
            log::log!(e.get_log_level(), "Method '{}' failed: {}", call.method, e);
        }
        result.into()
    }

    fn dispatch(&mut self, call: &MethodCall) -> Result<bool, HostError> {
        let args = call
            .arguments
            .as_map()
            .ok_or_else(|| HostError::bad_args("Expected map arguments."))?;
        let host_id = get_string(args, "host_id")
            .filter(|id| !id.is_empty())
            .ok_or_else(|| HostError::bad_args("host_id is required."))?;

        match call.method.as_str() {
            "createHost" => self.registry.create_host(host_id),
            "destroyHost" => self.registry.destroy_host(host_id),
            "updateRect" => {
                let x = get_i32(args, "x");
                let y = get_i32(args, "y");
                let width = get_i32(args, "width");
                let height = get_i32(args, "height");
                self.registry.update_rect(host_id, x, y, width, height)
            }
            "setVisible" => {
                let visible = get_bool(args, "visible").unwrap_or(true);
                self.registry.set_visible(host_id, visible)
            }
            "attachWindow" => self.registry.attach_window(host_id, attach_target(args)),
            "detachWindow" => self.registry.detach_window(host_id),
            method => HostError::NotImplemented(method.to_owned()).into(),
        }
    }
}

fn get_i32(args: &EncodableMap, key: &str) -> i32 {
    get_int(args, key).map_or(0, |v| v.clamp(i32::MIN as i64, i32::MAX as i64) as i32)
}

fn attach_target(args: &EncodableMap) -> AttachTarget {
    if let Some(handle) = get_int(args, "window_handle") {
        return AttachTarget::Handle(WindowHandle::new(handle as isize));
    }

    match get_int(args, "process_id").and_then(|pid| u32::try_from(pid).ok()) {
        Some(pid) => AttachTarget::Process(pid),
        None => AttachTarget::None,
    }
}
