//! HTTP client module
//!
//! A thin layer over `reqwest` that every endpoint binding goes through.
//!
//! # Features
//!
//! - **Token auth**: the access token rides along as `X-Access-Token`
//! - **Envelope parsing**: bodies are read regardless of transport status
//!   and decoded as [`Envelope`](crate::envelope::Envelope) — the `meta.code`
//!   inside, not the HTTP status, is what callers classify on
//! - **Configurable defaults**: base URL, timeout, headers, user agent
//!
//! Retry, backoff, and rate limiting are deliberately absent; callers that
//! want them wrap the client.

mod client;

pub use client::{
    HttpClient, HttpClientConfig, RequestConfig, ACCESS_TOKEN_HEADER, DEFAULT_BASE_URL,
};
