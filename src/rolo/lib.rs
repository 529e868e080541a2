//! # Rolo Architecture
//!
//! Rolo is a **UI-agnostic contact book library**. This is not a CLI application that happens
//! to have some library code—it's a library that happens to have an interactive CLI client.
//!
//! This distinction drives the entire architecture and should guide all development.
//!
//! ## The Two-Layer Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Session Layer (cli/, wired by main.rs)                     │
//! │  - Parses commands, formats output, handles terminal I/O    │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! │  - Subscribes its renderer to store change notifications    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Store Layer (store.rs, model.rs)                           │
//! │  - Single source of truth for the contact collection        │
//! │  - Id assignment, tag filtering, tag aggregation            │
//! │  - Notifies one subscriber after every successful mutation  │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## The Notification Flow
//!
//! Clients never poll. The store pushes a full snapshot of the collection to its
//! subscriber after each mutation, and the subscriber renders from that snapshot.
//! The CLI wires this up once at startup; a different UI would wire its own
//! renderer the same way.
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `store.rs` inward, code:
//! - Takes regular Rust function arguments
//! - Returns regular Rust types (`Result<Contact>`, `Vec<Contact>`)
//! - **Never** writes to stdout/stderr
//! - **Never** calls `std::process::exit`
//! - **Never** assumes a terminal environment
//!
//! This means the same core could serve a REST API, a TUI, or any other UI.
//!
//! ## Testing Strategy
//!
//! 1. **Store** (`store.rs`): Thorough unit tests of collection logic and the
//!    notification contract. This is where the lion's share of testing lives.
//!
//! 2. **CLI** (`cli/` + thin `main.rs`): Tests command parsing and input
//!    normalization in-process, plus a scripted end-to-end session against the
//!    compiled binary.
//!
//! ## Module Overview
//!
//! - [`store`]: The observable contact store—entry point for all operations
//! - [`model`]: Core data types (`Contact`, `ContactDraft`)
//! - [`error`]: Error types
//! - [`logging`]: Stderr logging bootstrap
//! - `cli`: Command parsing and printing for the binary (not part of the lib API)

pub mod error;
pub mod logging;
pub mod model;
pub mod store;
