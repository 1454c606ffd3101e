use serde::Deserialize;
use std::collections::HashMap;

use super::method::{MethodCall, MethodCallHandler, MethodResponse};
use super::registrar::PluginRegistrar;
use super::value::EncodableValue;
use crate::host::window_handle::WindowHandle;

#[derive(Deserialize, Debug)]
#[serde(deny_unknown_fields)]
struct Request {
    channel: Option<String>,
    method: String,
    #[serde(default)]
    arguments: EncodableValue,
}

/// Line-delimited JSON transport: one request per line in, one response per line out.
///
/// A request looks like `{"channel": "...", "method": "createHost", "arguments": {...}}`, where
/// `channel` can be omitted to target the default channel.
pub struct StdioTransport {
    native_window: Option<WindowHandle>,
    default_channel: String,
    handlers: HashMap<String, MethodCallHandler>,
}

impl StdioTransport {
    pub fn new(native_window: Option<WindowHandle>, default_channel: &str) -> StdioTransport {
        StdioTransport {
            native_window,
            default_channel: default_channel.to_owned(),
            handlers: HashMap::new(),
        }
    }

    /// Returns `None` for blank lines
    pub fn dispatch_line(&mut self, line: &str) -> Option<String> {
        let line = line.trim();
        if line.is_empty() {
            return None;
        }

        let response = match serde_json::from_str::<Request>(line) {
            Ok(request) => {
                let channel = request.channel.unwrap_or_else(|| self.default_channel.clone());
                self.dispatch(&channel, &MethodCall::new(&request.method, request.arguments))
            }
            Err(e) => {
                log::warn!("Malformed request: {}", e);
                MethodResponse::error("bad_request", &e.to_string())
            }
        };

        let json = serde_json::to_string(&response)
            .inspect_err(|e| log::error!("Can't serialize response: {}", e))
            .unwrap_or_else(|_| r#"{"error":{"code":"internal","message":"serialization failed"}}"#.to_owned());
        Some(json)
    }

    pub fn dispatch(&mut self, channel: &str, call: &MethodCall) -> MethodResponse {
        match self.handlers.get_mut(channel) {
            Some(handler) => handler(call),
            None => MethodResponse::error("unknown_channel", &format!("No handler for channel '{channel}'.")),
        }
    }
}

impl PluginRegistrar for StdioTransport {
    fn native_window(&self) -> Option<WindowHandle> {
        self.native_window
    }

    fn set_method_call_handler(&mut self, channel: &str, handler: MethodCallHandler) {
        if self.handlers.insert(channel.to_owned(), handler).is_some() {
            log::warn!("Handler for channel '{}' replaced", channel);
        }
    }
}
