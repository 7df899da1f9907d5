//! Runtime components for the TUI application.
//!
//! This module contains the runtime infrastructure for the TUI:
//! - Terminal management (TerminalGuard, keyboard enhancement, cursor shape)
//! - Configuration loading with CLI overrides
//! - The input pump task reading terminal events
//! - The shift listener task tracking the shift key
//!
//! Does NOT handle:
//! - Key dispatch or rendering (see `parley::app` and `parley::ui`).
//!
//! Invariants:
//! - All modules are initialized during application startup in `main()`.
//! - The input pump never blocks on the shift listener.

pub mod config;
pub mod input;
pub mod shift;
pub mod terminal;
