//! # Roster TUI
//!
//! A terminal screen for managing the users of a REST user collection.
//!
//! ## Features
//! - List users with loading and error feedback
//! - Add, edit and delete users through modal dialogs
//! - Toast notifications for every action
//! - Keyboard and mouse (backdrop click closes dialogs)
//!
//! ## Architecture
//! Actor-based with channels:
//! - UI Layer (Ratatui) - synchronous
//! - App Layer (State machine over an action/reducer store)
//! - Network Layer (Tokio runtime)

pub mod app;
pub mod config;
pub mod constants;
pub mod form;
pub mod messages;
pub mod models;
pub mod network;
pub mod notify;
pub mod store;
pub mod ui;

// Re-export commonly used types
pub use models::{Gender, User, UserDraft, UserId};
pub use store::{reduce, Action, Store, UsersState};
pub use messages::{UiEvent, NetworkCommand, NetworkResponse, RenderState};
pub use app::{AppState, AppActor};
pub use network::{HttpUserApi, NetworkActor, UserApi};
pub use config::{Cli, Config};
