//! IPC protocol between Rust and the chrome pages.
//!
//! Both directions carry the same envelope, `{"kind": ..., "payload": ...}`:
//! - **JS -> Rust**: `window.nebula.ipc.send(kind, payload)` posts the JSON
//!   string through `window.ipc.postMessage`, which reaches the webview's
//!   IPC handler.
//! - **Rust -> JS**: `evaluate_script` calls `window.nebula.ipc._dispatch`,
//!   which invokes the callback registered with `window.nebula.ipc.on`.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A message posted by a chrome page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IpcMessage {
    pub kind: String,
    /// Missing payloads arrive as `null`.
    #[serde(default)]
    pub payload: Value,
}

impl IpcMessage {
    /// Parse a raw postMessage body. `None` if it is not a `{kind, payload}`
    /// object.
    pub fn from_json(raw: &str) -> Option<Self> {
        serde_json::from_str(raw).ok()
    }

    pub fn new(kind: impl Into<String>, payload: Value) -> Self {
        Self {
            kind: kind.into(),
            payload,
        }
    }
}

/// Injected into chrome surfaces before any page script runs.
pub const IPC_INIT_SCRIPT: &str = r#"
(function() {
    window.nebula = window.nebula || {};
    window.nebula.ipc = {
        send: function(kind, payload) {
            window.ipc.postMessage(JSON.stringify({
                kind: kind,
                payload: payload === undefined ? null : payload
            }));
        },
        _handlers: {},
        on: function(kind, callback) {
            this._handlers[kind] = callback;
        },
        _dispatch: function(kind, payload) {
            var handler = this._handlers[kind];
            if (handler) {
                handler(payload);
            }
        }
    };
})();
"#;

/// JS that hands `payload` to the page's handler for `kind`.
pub fn js_dispatch_message(kind: &str, payload: &Value) -> String {
    let payload_json = serde_json::to_string(payload).unwrap_or_else(|_| "null".to_string());
    format!(
        "window.nebula.ipc._dispatch({}, {});",
        serde_json::to_string(kind).unwrap_or_else(|_| "\"unknown\"".to_string()),
        payload_json,
    )
}

/// JS for a full `{kind, payload}` envelope.
pub fn js_dispatch_envelope(envelope: &Value) -> String {
    let kind = envelope
        .get("kind")
        .and_then(Value::as_str)
        .unwrap_or("unknown");
    let payload = envelope.get("payload").unwrap_or(&Value::Null);
    js_dispatch_message(kind, payload)
}
