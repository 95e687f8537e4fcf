//! Pagination module
//!
//! Cursor-based traversal of a conversation's message history.
//!
//! # Overview
//!
//! Index endpoints return messages newest-first, a page at a time, with no
//! `has_more` flag; the only way to learn that history is exhausted is to
//! ask for the page before the last message seen and get a 304 (or an empty
//! page) back. [`paginate`] packages that probe-and-advance loop as a lazy
//! [`futures::Stream`]: each page is fetched only once the previous one has
//! been fully yielded, and dropping the stream fetches nothing further.

mod traversal;
mod types;

pub use traversal::paginate;
pub use types::{MessageSource, Page, PagedMessage};
