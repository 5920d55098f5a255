//! IPC message validation and dispatch from chrome pages to the router.

use nebula_common::WindowId;
use nebula_core::Command;
use nebula_webview::IpcMessage;
use winit::event_loop::ActiveEventLoop;

use crate::app_state::core::NebulaApp;
use crate::app_state::host::AppHost;

// =============================================================================
// IPC ALLOWLIST
// =============================================================================

/// Check whether an IPC message kind names a shell command.
pub fn is_ipc_kind_allowed(kind: &str) -> bool {
    Command::KINDS.contains(&kind)
}

// =============================================================================
// DISPATCH
// =============================================================================

impl NebulaApp {
    /// Handle one message posted by the chrome page of `window`.
    pub(in crate::app_state) fn handle_ipc_message(
        &mut self,
        event_loop: &ActiveEventLoop,
        window: WindowId,
        body: &str,
    ) {
        let Some(msg) = IpcMessage::from_json(body) else {
            tracing::warn!(
                window = %window,
                body_len = body.len(),
                "IPC message rejected: failed to parse"
            );
            return;
        };

        if !is_ipc_kind_allowed(&msg.kind) {
            tracing::warn!(window = %window, kind = %msg.kind, "IPC message rejected: unknown kind");
            return;
        }

        tracing::debug!(window = %window, kind = %msg.kind, "IPC message dispatched");

        let result = self.router.handle_ipc(
            window,
            &msg.kind,
            &msg.payload,
            &mut AppHost::new(&mut self.host, Some(event_loop)),
        );
        self.apply_outcome(Some(event_loop), window, result);
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ipc_kind_allowed_valid() {
        for kind in ["new-window", "new-view", "request-view", "navigate", "close-view", "ping"] {
            assert!(is_ipc_kind_allowed(kind), "{kind}");
        }
        assert!(is_ipc_kind_allowed("sidebar-on"));
        assert!(is_ipc_kind_allowed("maximize-window"));
    }

    #[test]
    fn ipc_kind_rejected_unknown() {
        assert!(!is_ipc_kind_allowed("eval"));
        assert!(!is_ipc_kind_allowed(""));
        assert!(!is_ipc_kind_allowed("navigate-extra"));
        assert!(!is_ipc_kind_allowed("NAVIGATE"));
        // outbound kinds are never accepted inbound
        assert!(!is_ipc_kind_allowed("view-metadata"));
        assert!(!is_ipc_kind_allowed("pong"));
    }

    #[test]
    fn ipc_kind_rejected_injection_attempts() {
        assert!(!is_ipc_kind_allowed("ping\0"));
        assert!(!is_ipc_kind_allowed("ping; rm -rf /"));
        assert!(!is_ipc_kind_allowed("<script>alert(1)</script>"));
    }
}
