//! Top-level application state.
//!
//! Implements `winit::application::ApplicationHandler` to drive the main
//! event loop. Owns the scene, the renderer and the keyboard debug panel.

mod core;
mod event_handler;
mod init;
mod input;
mod panel;
mod title;

pub use self::core::MorphApp;
