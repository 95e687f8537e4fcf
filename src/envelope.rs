//! The response envelope shared by every GroupMe v3 call
//!
//! The service wraps each result as `{"response": ..., "meta": {"code": N,
//! "errors": [...]}}`. The `meta.code` field, not the transport status,
//! decides what a call meant:
//!
//! - `200` — success, `response` holds the payload
//! - `304` — no data for this request (end of a history traversal);
//!   carries no payload and is not an error
//! - anything else — failure, with `meta.errors` naming the reasons
//!
//! Classification is a pure transform; no retry or translation happens here.

use crate::error::{Error, Result};
use serde::Deserialize;

/// Wire wrapper around a single API call's result.
#[derive(Debug, Clone, Deserialize)]
pub struct Envelope<T> {
    /// Payload, present iff `meta.code` is 200
    pub response: Option<T>,
    /// Status code and error messages for the call
    pub meta: Meta,
}

/// The `meta` block of an envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct Meta {
    /// Service status code (mirrors the HTTP status on real responses)
    pub code: u16,
    /// Service-provided error messages, set on failure codes
    #[serde(default)]
    pub errors: Option<Vec<String>>,
}

/// Classified result of one API call.
///
/// `NotModified` and `Failed` stay separate variants: the former ends a
/// traversal cleanly, the latter aborts it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome<T> {
    /// Code 200 with a payload
    Success(T),
    /// Code 304, the terminal "no more data" signal
    NotModified,
    /// Any other code, with the service's messages verbatim
    Failed {
        /// Status code from `meta.code`
        code: u16,
        /// Messages from `meta.errors` (empty when the service sent none)
        errors: Vec<String>,
    },
}

impl<T> Envelope<T> {
    /// Classify this envelope into exactly one [`Outcome`].
    ///
    /// A 200 without a payload breaks the envelope's own invariant and is
    /// reported as a decode error rather than being forced into one of the
    /// three outcomes.
    pub fn outcome(self) -> Result<Outcome<T>> {
        match self.meta.code {
            200 => match self.response {
                Some(payload) => Ok(Outcome::Success(payload)),
                None => Err(Error::decode("code 200 envelope with no payload")),
            },
            304 => Ok(Outcome::NotModified),
            code => Ok(Outcome::Failed {
                code,
                errors: self.meta.errors.unwrap_or_default(),
            }),
        }
    }

    /// Convert the payload type, leaving `meta` untouched.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Envelope<U> {
        Envelope {
            response: self.response.map(f),
            meta: self.meta,
        }
    }
}

impl<T> Outcome<T> {
    /// Check if this is a success outcome
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Check if this is the terminal no-data signal
    pub fn is_not_modified(&self) -> bool {
        matches!(self, Self::NotModified)
    }

    /// Collapse into a `Result`, raising `Failed` as [`Error::Api`].
    ///
    /// `NotModified` becomes `Ok(None)`; callers that need to tell the two
    /// non-failure cases apart should match on the outcome instead.
    pub fn into_result(self) -> Result<Option<T>> {
        match self {
            Self::Success(payload) => Ok(Some(payload)),
            Self::NotModified => Ok(None),
            Self::Failed { code, errors } => Err(Error::api(code, errors)),
        }
    }
}
