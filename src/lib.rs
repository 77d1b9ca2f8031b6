//! Taskdeck: task draft lifecycle for kanban boards.
//!
//! This crate provides the state, validation and commit logic behind the
//! "new task" and "edit task" dialogs of a kanban board, independent of any
//! rendering surface.
//!
//! # Architecture
//!
//! Taskdeck follows hexagonal architecture principles:
//!
//! - **Domain**: Pure task and draft logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for the board and notice surface
//! - **Adapters**: Concrete implementations of ports (in-memory, logging)
//!
//! # Modules
//!
//! - [`task`]: Task drafts, validation, commit handling and dialog lifecycle

pub mod task;
