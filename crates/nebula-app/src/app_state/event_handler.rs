//! `ApplicationHandler` implementation for the winit event loop.

use nebula_common::WindowId;
use nebula_platform::{normalize_winit_key, KeyCombo};
use winit::application::ApplicationHandler;
use winit::event::{ElementState, KeyEvent, WindowEvent};
use winit::event_loop::ActiveEventLoop;
use winit::keyboard::Key;

use super::core::NebulaApp;
use super::host::AppHost;

impl ApplicationHandler for NebulaApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.started {
            return;
        }
        self.started = true;

        let url = self.initial_url.take();
        let opened = self.router.open_window(
            url.as_deref(),
            &mut AppHost::new(&mut self.host, Some(event_loop)),
        );
        match opened {
            Ok(window) => self.focused = Some(window),
            Err(e) => {
                tracing::error!("Failed to open the first window: {e}");
                event_loop.exit();
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        native_id: winit::window::WindowId,
        event: WindowEvent,
    ) {
        let Some(window) = self.window_for(native_id) else {
            return;
        };

        match event {
            WindowEvent::CloseRequested | WindowEvent::Destroyed => {
                tracing::debug!(window = %window, "window close requested");
                self.close_window(Some(event_loop), window);
            }

            WindowEvent::Resized(size) => {
                if size.width > 0 && size.height > 0 {
                    self.host.resize_chrome(window);
                    self.router.window_resized(
                        window,
                        &mut AppHost::new(&mut self.host, Some(event_loop)),
                    );
                }
            }

            WindowEvent::Focused(true) => {
                self.focused = Some(window);
            }

            WindowEvent::ModifiersChanged(new_modifiers) => {
                self.modifiers = new_modifiers.state();
            }

            WindowEvent::KeyboardInput { event, .. } => {
                self.handle_keyboard_input(event_loop, window, event);
            }

            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.should_exit {
            self.shutdown(Some(event_loop));
            event_loop.exit();
            return;
        }
        self.poll_and_schedule(event_loop);
    }
}

impl NebulaApp {
    /// Resolve a key press against the keybind registry and dispatch it.
    fn handle_keyboard_input(&mut self, event_loop: &ActiveEventLoop, window: WindowId, event: KeyEvent) {
        let KeyEvent {
            logical_key, state, ..
        } = event;
        if state != ElementState::Pressed {
            return;
        }

        let key_name = match &logical_key {
            Key::Named(named) => format!("{named:?}"),
            Key::Character(c) => c.to_string(),
            _ => return,
        };

        let combo = KeyCombo::from_winit(
            self.modifiers.control_key(),
            self.modifiers.alt_key(),
            self.modifiers.shift_key(),
            self.modifiers.super_key(),
            normalize_winit_key(&key_name),
        );

        if let Some(action) = self.keybinds.lookup(&combo).copied() {
            self.dispatch(event_loop, window, action);
        }
    }
}
