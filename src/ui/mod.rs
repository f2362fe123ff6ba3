//! # UI Module
//!
//! This module provides the terminal user interface for the launcher.
//!
//! ## Components
//!
//! - [`App`] - Application state owned by the event loop
//! - [`nav::Navigator`] - Focus, cursors and the selected command group
//! - [`keymap::Keymap`] - The `(scope, key) → action` routing table
//! - [`modal::CredentialModal`] - Password prompt drawn over the panes
//! - [`mod@render`] - Rendering functions for drawing the TUI
//!
//! ## Layout
//!
//! ```text
//! ┌────────────┬────────────────────────────┬────────────┐
//! │ Categories │          Output            │  Options   │
//! │            │                            │            │
//! │  general   │  [14:02:11] $ ls -la       │ List files │
//! │  git       │  ...                       │ Disk usage │
//! │  system    │  ──────────────────        │            │
//! │            │     ┌──────────────┐       │            │
//! │            │     │ 🔒 Credential │       │            │
//! │            │     └──────────────┘       │            │
//! ├────────────┴────────────────────────────┴────────────┤
//! │ key hints                                             │
//! └───────────────────────────────────────────────────────┘
//! ```

pub mod app;
pub mod config;
pub mod keymap;
pub mod modal;
pub mod nav;
pub mod render;

pub use app::App;
pub use render::render;
