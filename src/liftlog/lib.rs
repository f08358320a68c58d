//! # Liftlog Architecture
//!
//! Liftlog is a **UI-agnostic training and nutrition log**. The library is the
//! product; the bundled CLI is just one client of it.
//!
//! ## The Layers
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────┐
//! │  CLI Layer (args.rs, wired by main.rs)                     │
//! │  - Parses arguments, formats output, resolves list indexes │
//! │  - The ONLY place that knows about stdout/stderr           │
//! └────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                        │
//! │  - Thin facade over commands, owns the session             │
//! │  - Returns structured Result types                         │
//! └────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                             │
//! │  - Pure business logic over (store, session, args)         │
//! │  - No I/O assumptions whatsoever                           │
//! └────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                    │
//! │  - Abstract StorageBackend trait                           │
//! │  - FileBackend (production), MemBackend (testing)          │
//! └────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## The Session
//!
//! The in-memory editing state (current training, today's food list) lives in
//! an explicit [`session::Session`] passed to every command, never in globals.
//! The persisted day snapshots and the saved-trainings history are derived
//! projections of it: every mutating command re-syncs them before returning.
//! Day snapshots are always replaced wholesale, never merged.
//!
//! ## Failure Policy
//!
//! This is a best-effort local log, not a system of record. Missing or
//! corrupt persisted values degrade to empty defaults (with a `tracing`
//! diagnostic), invalid input rejects an operation before any state changes,
//! and operations on unknown ids are no-ops. Only real I/O and serialization
//! failures surface as errors.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Business logic for each operation
//! - [`session`]: The live editing context
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: Core data types
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod error;
pub mod model;
pub mod session;
pub mod store;
