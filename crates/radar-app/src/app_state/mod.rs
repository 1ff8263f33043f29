//! Top-level application state.
//!
//! Implements `winit::application::ApplicationHandler` to host one radar
//! view in a window, translating window events into the view's surface,
//! lifecycle and tap callbacks.

mod core;
mod event_handler;
mod events;
mod init;

pub use self::core::RadarApp;
