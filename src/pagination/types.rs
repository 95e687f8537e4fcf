//! Pagination types and traits
//!
//! Defines the page-fetch abstraction the traversal is built on.

use crate::envelope::Envelope;
use crate::error::Result;
use async_trait::async_trait;

/// A message that can act as a pagination cursor.
pub trait PagedMessage {
    /// The message's identifier; the traversal passes the last yielded
    /// message's id as `before_id` of the next fetch.
    fn id(&self) -> &str;
}

/// One batch of messages returned by a single index call, newest first.
#[derive(Debug, Clone)]
pub struct Page<M> {
    /// Total number of messages in the conversation, as reported upstream
    pub count: u64,
    /// The messages of this page, in the order the service returned them
    pub messages: Vec<M>,
}

/// The abstract page-fetch operation a traversal depends on.
///
/// Implementors perform the actual network call and deserialization and
/// hand back the raw envelope; classification and cursor advancement stay
/// in [`paginate`](super::paginate). Errors returned here (transport,
/// malformed body) propagate to the stream consumer unchanged.
#[async_trait]
pub trait MessageSource: Send + Sync {
    /// The message type this source pages over
    type Message: PagedMessage + Send;

    /// Fetch the page of messages older than `before_id`.
    ///
    /// `None` means "start from the most recent". `limit` is a page-size
    /// hint; the service picks its default when absent.
    async fn fetch_page(
        &self,
        before_id: Option<&str>,
        limit: Option<u32>,
    ) -> Result<Envelope<Page<Self::Message>>>;
}
