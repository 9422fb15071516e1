//! # Notz Architecture
//!
//! Notz is a **UI-agnostic note-taking library**: the crate implements the
//! full note state and presentation engine, and the bundled terminal client
//! is just one possible front-end for it.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI layer (main.rs + args.rs)                              │
//! │  - Renders pages, reads input, owns stdout/stderr/exit      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API facade (api.rs)                                        │
//! │  - Entry point for every user event                         │
//! │  - Projections: visible page, draft/error state             │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Core (validate, view, session, notebook)                   │
//! │  - Pure predicates and derivations, explicit UI state       │
//! │  - No I/O assumptions whatsoever                            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage layer (store/)                                     │
//! │  - KvBackend trait; FileBackend (production),               │
//! │    InMemoryBackend (testing)                                │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key behaviors
//!
//! - Notes are immutable once created; the only mutations are append and
//!   confirmed delete, and each one persists the whole collection before
//!   returning.
//! - Loading is fail-soft: corrupt or missing stored data degrades to an
//!   empty collection, with a one-time seed applied on the first-ever run.
//! - Validation errors are values, not `Err`s, and their *display* is
//!   gated separately by per-field activation flags in [`session`].
//! - The visible list is a pure function of (collection, search term,
//!   page); see [`view`].
//! - Deletion is a two-step request/resolve workflow so the confirmation
//!   gate can live anywhere; see [`api::ConfirmGate`].
//!
//! ## Module overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`model`]: Core data types (`Note`, `NewNote`)
//! - [`validate`]: Title/text validation predicates
//! - [`session`]: Ephemeral UI state and the deletion workflow
//! - [`view`]: Filter & pagination engine
//! - [`notebook`]: The authoritative ordered collection
//! - [`store`]: Storage abstraction and backends
//! - [`init`]: Production wiring and the default seed set
//! - [`error`]: Error types

pub mod api;
pub mod error;
pub mod init;
pub mod model;
pub mod notebook;
pub mod session;
pub mod store;
pub mod validate;
pub mod view;
