//! # Innovation OS Architecture
//!
//! A small library for tracking ideas: create them, score them on eleven
//! fixed traits, attach resources and process steps, rank them against each
//! other and look at aggregate numbers. The `inno` binary is one client of
//! it; nothing in the library assumes a terminal.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (main.rs, args.rs, cli/)                         │
//! │  - Parses arguments, prints results, owns stdout/stderr     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade, parses selectors (positions or ids)         │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Business operations, returns `CmdResult`                 │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - IdeaStore: owned collection + listeners                  │
//! │  - BlobStore trait: FsBlobStore, MemBlobStore               │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## The Store
//!
//! [`store::idea_store::IdeaStore`] is constructed once at startup and owns
//! the collection. Every mutation is applied in memory, written to the blob
//! store as the full collection, and then announced to subscribed listeners.
//! Operations on ids that don't exist are no-ops, not errors.
//!
//! ## Traits
//!
//! [`model::Traits`] can only hold the complete canonical trait set with
//! values in 1..=10, so the invariant holds for every idea in memory and
//! every idea loaded from storage.
//!
//! ## Module Overview
//!
//! - [`api`]: Facade, entry point for clients
//! - [`commands`]: One module per operation
//! - [`store`]: Blob store abstraction and the idea store
//! - [`model`]: `Idea`, `Traits`, `Resource`
//! - [`stats`]: Aggregate statistics
//! - [`index`]: Display positions and selectors
//! - [`config`]: Configuration file
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod index;
pub mod model;
pub mod stats;
pub mod store;
