//! Core application setup and state management.

/// Application construction and system wiring for native and WASM targets.
pub mod app_setup;

/// Backdrop lifecycle state machine and cancellation handling.
pub mod app_state;

/// Optional JSON config asset with fallback to compiled defaults.
pub mod config;

/// Platform-specific window configuration.
pub mod window_config;
