//! # GroupMe Client
//!
//! A typed async client for the [GroupMe v3 REST API](https://dev.groupme.com/docs/v3).
//!
//! Every v3 call returns the same envelope — a payload plus a `meta` block
//! carrying a status code and optional error messages. This crate decodes
//! that envelope into an explicit three-way outcome and builds lazy,
//! cursor-paged message-history streams on top of it.
//!
//! ## Features
//!
//! - **Envelope decoding**: `Success` / `NotModified` / `Failed`, never
//!   conflating "no more data" with an actual error
//! - **Lazy history pagination**: walk a conversation's full message history
//!   as a `futures::Stream`, fetching pages strictly on demand
//! - **Typed message DTOs**: group messages, direct messages, attachments
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use futures::TryStreamExt;
//! use groupme_client::{GroupMe, Result};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let client = GroupMe::new("<access token>")?;
//!
//!     let group = client.group_messages("1234567");
//!     let mut history = std::pin::pin!(group.history(None, Some(100)));
//!
//!     while let Some(message) = history.try_next().await? {
//!         println!("{}: {:?}", message.name, message.text);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────┐
//! │                       GroupMe client                       │
//! │  group_messages(id) / direct_messages(user) → index()      │
//! │  history(before_id, page_size) → Stream<Result<Message>>   │
//! └────────────────────────────────────────────────────────────┘
//!                │                               │
//! ┌──────────────┴─────────────┐  ┌──────────────┴─────────────┐
//! │           http             │  │         pagination         │
//! │  reqwest + token header    │  │  cursor = last item's id   │
//! │  body → Envelope<T>        │  │  stops on 304 / empty page │
//! └────────────────────────────┘  └────────────────────────────┘
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for the client
pub mod error;

/// The `{response, meta}` wrapper around every API call result
pub mod envelope;

/// Message and attachment wire types
pub mod types;

/// HTTP client carrying the access token
pub mod http;

/// Cursor-based history traversal
pub mod pagination;

/// Typed endpoint bindings
pub mod client;

// ============================================================================
// Re-exports
// ============================================================================

pub use client::{DirectMessages, GroupMe, GroupMessages};
pub use envelope::{Envelope, Meta, Outcome};
pub use error::{Error, Result};
pub use pagination::{paginate, MessageSource, Page, PagedMessage};
pub use types::*;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
