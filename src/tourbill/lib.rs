//! # Tourbill Architecture
//!
//! Tourbill is a **UI-agnostic invoicing library** with a CLI client. A
//! user describes one tour trip, the library assigns it a sequential
//! `HK-<year>-NNN` number, stores it locally, renders it as a styled A4
//! document and exports it as a shareable PDF.
//!
//! ## The Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (main.rs + args.rs)                              │
//! │  - Parses arguments, formats output, handles exit codes     │
//! │  - The ONLY place that knows about stdout/stderr            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Business logic: validate, save, list, render, export     │
//! │  - No I/O assumptions whatsoever                            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - Abstract StorageBackend trait                            │
//! │  - FileBackend (production), MemoryBackend (testing)        │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Invariants
//!
//! - Invoice numbers are assigned **atomically at save time**: the store
//!   computes the next year-scoped sequence, prepends the record and
//!   commits the counter inside one mutex-guarded critical section. The
//!   number shown before saving is only a provisional preview.
//! - Saves are **idempotent per draft id**: re-saving the same draft is a
//!   no-op, so a double-tapped save neither duplicates a record nor burns
//!   a number.
//! - Reads **fail open**: corrupt or missing state degrades to an empty
//!   history and a counter starting at 1. Writes and exports surface
//!   their errors to the caller.
//!
//! ## External collaborators
//!
//! The HTML→PDF engine and the platform share primitive live behind the
//! [`export::PdfEngine`] and [`export::ShareSink`] traits; the document
//! renderer itself ([`render`]) is a pure function.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade—entry point for all operations
//! - [`commands`]: Business logic for each command
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: Core data types (`Invoice`, `InvoiceDraft`, enums)
//! - [`sequence`]: Pure invoice-number arithmetic
//! - [`render`]: Invoice → HTML document
//! - [`export`]: PDF conversion and share hand-off
//! - [`config`]: Issuer details (`config.json`)
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod export;
pub mod model;
pub mod render;
pub mod sequence;
pub mod store;
