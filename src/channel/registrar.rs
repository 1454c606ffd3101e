use super::method::{MethodCall, MethodCallHandler};
use super::plugin::PreviewHostPlugin;
use crate::host::locator::WindowLocator;
use crate::host::registry::HostRegistry;
use crate::host::window_handle::WindowHandle;
use crate::host::window_system::WindowSystem;

/// What the host application exposes to its plugins at startup
pub trait PluginRegistrar {
    /// Native handle of the application main window, if it already exists
    fn native_window(&self) -> Option<WindowHandle>;
    fn set_method_call_handler(&mut self, channel: &str, handler: MethodCallHandler);
}

/// Registration entry point, to be called once when the application starts.
///
/// The plugin is moved into the channel handler: it lives (and its windows stay attached) as
/// long as the registrar keeps the handler.
pub fn register_with_registrar<R, S, L>(registrar: &mut R, system: S, locator: L, channel: &str)
where
    R: PluginRegistrar,
    S: WindowSystem + 'static,
    L: WindowLocator<S> + 'static,
{
    let app_window = registrar.native_window();
    if app_window.is_none() {
        log::warn!("No application window available, hosts cannot be created yet");
    }

    let mut plugin = PreviewHostPlugin::new(HostRegistry::new(system, locator, app_window));
    registrar.set_method_call_handler(channel, Box::new(move |call: &MethodCall| plugin.handle_method_call(call)));
    log::info!("Preview host registered on channel '{}'", channel);
}
