//! Top-level application state.
//!
//! Implements `winit::application::ApplicationHandler` to drive the main
//! event loop: creates the host window, mounts the background into it,
//! and forwards input, resize, and frame callbacks.

mod core;
mod event_handler;
mod host;
mod init;
mod shutdown;

pub use core::AmbientApp;
