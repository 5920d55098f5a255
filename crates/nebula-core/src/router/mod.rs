//! The command router: the only component that speaks the UI protocol.
//!
//! Inbound `{kind, payload}` messages become [`Command`]s, which the
//! [`CommandRouter`] applies to the multiplexer on behalf of the window that
//! sent them. Engine callbacks and host window notifications enter here too.

mod command;
mod dispatch;

pub use command::Command;
pub use dispatch::{ChromeRequest, CommandRouter, Outcome};

#[cfg(test)]
mod tests;
