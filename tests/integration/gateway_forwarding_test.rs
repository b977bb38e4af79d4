//! Gateway credential forwarding properties.
//!
//! The forwarding contract is byte-level: whatever Authorization header
//! came in goes out on every subgraph request, and absence stays
//! absence. The outbound requests are built (not sent) and inspected.

use axum::http::{header::AUTHORIZATION, HeaderMap, HeaderValue, Method};
use dishpatch_gateway::{ForwardedCredentials, SubgraphRegistry};

fn registry() -> SubgraphRegistry {
    SubgraphRegistry::from_spec(
        "orders=http://orders.internal,accounts=http://accounts.internal",
    )
    .unwrap()
}

fn credentials(value: Option<&'static str>) -> ForwardedCredentials {
    let mut headers = HeaderMap::new();
    if let Some(v) = value {
        headers.insert(AUTHORIZATION, HeaderValue::from_static(v));
    }
    ForwardedCredentials::from_headers(&headers)
}

#[test]
fn every_subgraph_call_carries_the_inbound_header_verbatim() {
    let registry = registry();
    let creds = credentials(Some("Bearer X"));

    // One composed request fanning out to two services: both outbound
    // calls must carry exactly the inbound header
    for (service, path) in [("orders", "/v1/orders/mine"), ("accounts", "/v1/auth/whoami")] {
        let request = registry
            .request(service, Method::GET, path, &creds)
            .unwrap()
            .build()
            .unwrap();

        assert_eq!(
            request.headers().get(AUTHORIZATION).unwrap(),
            "Bearer X",
            "service {} must receive the caller's credentials",
            service
        );
    }
}

#[test]
fn no_inbound_header_means_no_outbound_header() {
    let registry = registry();
    let creds = credentials(None);

    let request = registry
        .request("orders", Method::GET, "/v1/orders/mine", &creds)
        .unwrap()
        .build()
        .unwrap();

    assert!(
        request.headers().get(AUTHORIZATION).is_none(),
        "the gateway must never synthesize credentials"
    );
}

#[test]
fn non_bearer_headers_are_forwarded_untouched() {
    // The gateway does transport, not policy: even a header another
    // scheme uses goes through unmodified for downstream guards to judge
    let registry = registry();
    let creds = credentials(Some("Basic dXNlcjpwdw=="));

    let request = registry
        .request("orders", Method::POST, "/v1/orders", &creds)
        .unwrap()
        .build()
        .unwrap();

    assert_eq!(
        request.headers().get(AUTHORIZATION).unwrap(),
        "Basic dXNlcjpwdw=="
    );
}

#[test]
fn unknown_service_is_rejected_without_any_outbound_call() {
    let registry = registry();
    let creds = credentials(Some("Bearer X"));

    let result = registry.request("billing", Method::GET, "/v1/invoices", &creds);
    assert!(result.is_err());
}
