//! Credential forwarding
//!
//! Captures the inbound Authorization header as an opaque value and
//! re-applies it, unmodified, to outbound subgraph requests. Nothing is
//! cached or persisted beyond the request's lifetime.

use std::convert::Infallible;

use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts, HeaderMap, HeaderValue},
};

/// The caller's Authorization header, if any.
///
/// Absence is forwarded as absence: the gateway never synthesizes
/// credentials, and rejecting unauthenticated calls is solely the
/// downstream service's job.
#[derive(Debug, Clone)]
pub struct ForwardedCredentials(Option<HeaderValue>);

impl ForwardedCredentials {
    pub fn from_headers(headers: &HeaderMap) -> Self {
        Self(headers.get(AUTHORIZATION).cloned())
    }

    /// The header value to forward, byte-for-byte, if one was presented.
    pub fn header(&self) -> Option<&HeaderValue> {
        self.0.as_ref()
    }

    /// Copy the credentials onto an outbound request.
    pub fn apply(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.0 {
            Some(value) => builder.header(AUTHORIZATION, value.clone()),
            None => builder,
        }
    }
}

impl<S> FromRequestParts<S> for ForwardedCredentials
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &S,
    ) -> std::result::Result<Self, Self::Rejection> {
        Ok(Self::from_headers(&parts.headers))
    }
}
