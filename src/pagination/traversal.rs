//! The cursor-advancing history traversal

use super::types::{MessageSource, Page, PagedMessage};
use crate::envelope::Outcome;
use crate::error::{Error, Result};
use futures::stream::{self, Stream};
use std::collections::VecDeque;

/// State threaded through the unfold: the source, the cursor, and the
/// not-yet-yielded remainder of the current page.
struct Traversal<S: MessageSource> {
    source: S,
    cursor: Option<String>,
    page_size: Option<u32>,
    buffer: VecDeque<S::Message>,
}

/// Walk a conversation's message history as a lazy stream.
///
/// Starting from `before_id` (or the most recent message when `None`),
/// repeatedly fetches the page older than the cursor and yields its
/// messages in the order received. After each non-empty page the cursor
/// advances to the id of that page's *last* message — with newest-first
/// ordering, further into the past.
///
/// The stream ends cleanly when a fetch comes back 304 or with an empty
/// success page, and aborts with [`Error::Api`] on any other status,
/// carrying the service's code and messages verbatim. Transport and parse
/// failures from the source pass through untranslated.
///
/// Fetches are strictly sequential and demand-driven: the next page is
/// requested only once the current one is drained, so abandoning the
/// stream early never issues another call. A consumed stream is not
/// resumable; rereading history takes a fresh `paginate` call.
pub fn paginate<S>(
    source: S,
    before_id: Option<String>,
    page_size: Option<u32>,
) -> impl Stream<Item = Result<S::Message>>
where
    S: MessageSource,
{
    let traversal = Traversal {
        source,
        cursor: before_id,
        page_size,
        buffer: VecDeque::new(),
    };

    stream::try_unfold(traversal, |mut t| async move {
        loop {
            if let Some(message) = t.buffer.pop_front() {
                return Ok(Some((message, t)));
            }

            let envelope = t.source.fetch_page(t.cursor.as_deref(), t.page_size).await?;

            match envelope.outcome()? {
                Outcome::Success(Page { messages, .. }) => {
                    match messages.last() {
                        Some(last) => t.cursor = Some(last.id().to_owned()),
                        // An empty success page means there is nothing
                        // older; refetching with the same cursor would
                        // loop forever.
                        None => return Ok(None),
                    }
                    t.buffer = messages.into();
                }
                Outcome::NotModified => return Ok(None),
                Outcome::Failed { code, errors } => return Err(Error::api(code, errors)),
            }
        }
    })
}
