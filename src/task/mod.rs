//! Task draft lifecycle for kanban board dialogs.
//!
//! This module implements the create and edit task dialogs: the draft a user
//! composes, the validation gate guarding commits, the commit handler that
//! hands tasks to the board, and the open/closed dialog state machine. The
//! module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;
