//! Typed endpoint bindings
//!
//! [`GroupMe`] owns the HTTP client; per-conversation handles borrow it and
//! expose the raw index call next to a [`history`](GroupMessages::history)
//! stream built on [`paginate`]. Only the message-index surface is bound
//! here — the rest of the v3 API is out of scope for this crate.

use crate::envelope::Envelope;
use crate::error::Result;
use crate::http::{HttpClient, HttpClientConfig, RequestConfig};
use crate::pagination::{paginate, MessageSource, Page};
use crate::types::{
    DirectMessage, DirectMessagesIndex, GroupMessage, GroupMessagesIndex,
};
use async_trait::async_trait;
use futures::Stream;

/// Entry point for the v3 API.
#[derive(Debug)]
pub struct GroupMe {
    http: HttpClient,
}

impl GroupMe {
    /// Create a client for the production API.
    pub fn new(access_token: impl Into<String>) -> Result<Self> {
        Ok(Self {
            http: HttpClient::new(access_token)?,
        })
    }

    /// Create a client with custom HTTP configuration.
    pub fn with_config(
        config: HttpClientConfig,
        access_token: impl Into<String>,
    ) -> Result<Self> {
        Ok(Self {
            http: HttpClient::with_config(config, access_token)?,
        })
    }

    /// Get the underlying HTTP client
    pub fn http(&self) -> &HttpClient {
        &self.http
    }

    /// Messages of a group chat.
    pub fn group_messages(&self, group_id: impl Into<String>) -> GroupMessages<'_> {
        GroupMessages {
            http: &self.http,
            group_id: group_id.into(),
        }
    }

    /// Messages of the direct conversation with another user.
    pub fn direct_messages(&self, other_user_id: impl Into<String>) -> DirectMessages<'_> {
        DirectMessages {
            http: &self.http,
            other_user_id: other_user_id.into(),
        }
    }
}

// ============================================================================
// Group messages
// ============================================================================

/// Handle for `GET /groups/:group_id/messages`.
#[derive(Debug, Clone)]
pub struct GroupMessages<'a> {
    http: &'a HttpClient,
    group_id: String,
}

impl<'a> GroupMessages<'a> {
    /// Fetch one page of group messages, newest first.
    ///
    /// `before_id` pages into the past, `since_id` into the present;
    /// `limit` caps the page size (service default when absent).
    pub async fn index(
        &self,
        before_id: Option<&str>,
        since_id: Option<&str>,
        limit: Option<u32>,
    ) -> Result<Envelope<GroupMessagesIndex>> {
        let config = RequestConfig::new()
            .query_opt("before_id", before_id)
            .query_opt("since_id", since_id)
            .query_opt("limit", limit.map(|l| l.to_string()));

        self.http
            .get_envelope(&format!("groups/{}/messages", self.group_id), config)
            .await
    }

    /// Walk the group's full message history, newest first, as a lazy
    /// stream. See [`paginate`] for the traversal contract.
    pub fn history(
        &self,
        before_id: Option<String>,
        page_size: Option<u32>,
    ) -> impl Stream<Item = Result<GroupMessage>> + 'a {
        paginate(self.clone(), before_id, page_size)
    }
}

#[async_trait]
impl MessageSource for GroupMessages<'_> {
    type Message = GroupMessage;

    async fn fetch_page(
        &self,
        before_id: Option<&str>,
        limit: Option<u32>,
    ) -> Result<Envelope<Page<GroupMessage>>> {
        Ok(self.index(before_id, None, limit).await?.map(Page::from))
    }
}

// ============================================================================
// Direct messages
// ============================================================================

/// Handle for `GET /direct_messages`.
#[derive(Debug, Clone)]
pub struct DirectMessages<'a> {
    http: &'a HttpClient,
    other_user_id: String,
}

impl<'a> DirectMessages<'a> {
    /// Fetch one page of direct messages, newest first.
    pub async fn index(
        &self,
        before_id: Option<&str>,
        since_id: Option<&str>,
    ) -> Result<Envelope<DirectMessagesIndex>> {
        let config = RequestConfig::new()
            .query("other_user_id", self.other_user_id.as_str())
            .query_opt("before_id", before_id)
            .query_opt("since_id", since_id);

        self.http.get_envelope("direct_messages", config).await
    }

    /// Walk the conversation's full history, newest first, as a lazy
    /// stream. See [`paginate`] for the traversal contract.
    pub fn history(&self, before_id: Option<String>) -> impl Stream<Item = Result<DirectMessage>> + 'a {
        paginate(self.clone(), before_id, None)
    }
}

#[async_trait]
impl MessageSource for DirectMessages<'_> {
    type Message = DirectMessage;

    async fn fetch_page(
        &self,
        before_id: Option<&str>,
        _limit: Option<u32>,
    ) -> Result<Envelope<Page<DirectMessage>>> {
        // The direct_messages index takes no limit parameter; the page-size
        // hint has nothing to bind to.
        Ok(self.index(before_id, None).await?.map(Page::from))
    }
}
