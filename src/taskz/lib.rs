//! # Taskz Architecture
//!
//! Taskz is a **UI-agnostic task-tracking engine**: an in-memory collection
//! of task records plus the operations to create, validate, mutate, query,
//! and regenerate them. There is no CLI, no prompt loop, and no transport
//! in this crate—those are thin clients that call into the engine.
//!
//! ## The Three-Layer Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Normalizes inputs (raw ID strings → TaskId)              │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Pure business logic                                      │
//! │  - Operates on Rust types, returns Rust types               │
//! │  - No I/O assumptions whatsoever                            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - Abstract DataStore trait, owns ID allocation             │
//! │  - InMemoryStore (the engine holds no persistent state)     │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## The Engine Contract
//!
//! Every mutating operation validates its arguments (see [`validate`]),
//! then fails with a typed error or succeeds with a
//! [`CmdResult`](commands::CmdResult) carrying affected records and
//! display-ready messages. Display layers render message text verbatim and
//! branch on `Ok`/`Err` and emptiness only.
//!
//! Fixed contract values—the 1000-task capacity and the 200/1000/20 field
//! limits—live in [`model`] so callers can surface them without
//! duplicating validation.
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward (API, commands, storage), code:
//! - Takes regular Rust function arguments
//! - Returns regular Rust types (`Result<CmdResult>`)
//! - **Never** writes to stdout/stderr
//! - **Never** assumes a terminal environment
//!
//! The engine is single-threaded and synchronous; a concurrent host wraps
//! one `TaskzApi` value in its own serialization (a mutex around mutating
//! calls is enough).
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade—entry point for all operations
//! - [`commands`]: Business logic for each operation
//! - [`store`]: Storage abstraction, in-memory backend, ID allocation
//! - [`model`]: Core data types (`Task`, `Priority`, `Recurrence`) and
//!   contract constants
//! - [`validate`]: Field validation and normalization
//! - [`schedule`]: Recurrence engine—next-occurrence dates and regeneration
//! - [`config`]: Engine configuration
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod schedule;
pub mod store;
pub mod validate;
