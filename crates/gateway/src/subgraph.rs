//! Downstream subgraph registry and proxy routes

use std::collections::HashMap;
use std::time::Duration;

use axum::{
    body::{Body, Bytes},
    extract::{Path, State},
    http::{HeaderMap, HeaderName, Method},
    response::Response,
    routing::any,
    Router,
};

use crate::error::GatewayError;
use crate::forward::ForwardedCredentials;

/// Named downstream services and the shared outbound client.
#[derive(Clone)]
pub struct SubgraphRegistry {
    client: reqwest::Client,
    services: HashMap<String, String>,
}

impl SubgraphRegistry {
    /// Parse a registry from comma-separated `name=base_url` pairs,
    /// e.g. `orders=http://orders:3001,accounts=http://accounts:3002`.
    /// An empty spec yields a registry that knows no services.
    pub fn from_spec(spec: &str) -> anyhow::Result<Self> {
        let mut services = HashMap::new();
        for entry in spec.split(',').map(str::trim).filter(|e| !e.is_empty()) {
            let (name, url) = entry
                .split_once('=')
                .ok_or_else(|| anyhow::anyhow!("Malformed subgraph entry: {}", entry))?;
            services.insert(
                name.trim().to_string(),
                url.trim().trim_end_matches('/').to_string(),
            );
        }

        let client = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(5))
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| anyhow::anyhow!("Failed to build outbound client: {}", e))?;

        Ok(Self { client, services })
    }

    /// Build an outbound request to a named downstream, with the
    /// caller's credentials copied on. The request is not sent yet.
    pub fn request(
        &self,
        service: &str,
        method: Method,
        path: &str,
        credentials: &ForwardedCredentials,
    ) -> Result<reqwest::RequestBuilder, GatewayError> {
        let base = self
            .services
            .get(service)
            .ok_or_else(|| GatewayError::UnknownService(service.to_string()))?;

        let url = format!("{}/{}", base, path.trim_start_matches('/'));
        Ok(credentials.apply(self.client.request(method, url)))
    }
}

/// Hop-by-hop headers belong to a single connection and must not be
/// relayed. Host and content-length are recomputed for the rebuilt
/// request/response.
fn is_end_to_end(name: &HeaderName) -> bool {
    !matches!(
        name.as_str(),
        "connection"
            | "keep-alive"
            | "proxy-authenticate"
            | "proxy-authorization"
            | "te"
            | "trailer"
            | "transfer-encoding"
            | "upgrade"
            | "host"
            | "content-length"
    )
}

fn end_to_end_headers(source: &HeaderMap) -> HeaderMap {
    let mut headers = HeaderMap::new();
    for (name, value) in source {
        if is_end_to_end(name) {
            headers.append(name.clone(), value.clone());
        }
    }
    headers
}

/// Proxy handler: forwards the inbound request to the named downstream
/// and relays the response. End-to-end headers (Content-Type included)
/// travel in both directions; the gateway performs no authorization
/// decision, so downstream guards see the original credentials.
async fn proxy(
    State(registry): State<SubgraphRegistry>,
    Path((service, path)): Path<(String, String)>,
    method: Method,
    headers: HeaderMap,
    credentials: ForwardedCredentials,
    body: Bytes,
) -> Result<Response, GatewayError> {
    tracing::debug!(service = %service, path = %path, "Forwarding to downstream");

    let response = registry
        .request(&service, method, &path, &credentials)?
        .headers(end_to_end_headers(&headers))
        .body(body)
        .send()
        .await?;

    let status = response.status();
    let response_headers = end_to_end_headers(response.headers());
    let bytes = response.bytes().await?;

    let mut reply = Response::builder().status(status);
    if let Some(target) = reply.headers_mut() {
        target.extend(response_headers);
    }
    Ok(reply
        .body(Body::from(bytes))
        .unwrap_or_else(|_| Response::new(Body::empty())))
}

/// Gateway proxy routes: `/graph/{service}/{*path}` for any method.
pub fn routes() -> Router<SubgraphRegistry> {
    Router::new().route("/graph/{service}/{*path}", any(proxy))
}
