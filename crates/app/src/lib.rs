//! Dishpatch application composition root
//!
//! Composes the accounts and orders domain routers and the gateway
//! proxy into a single application. Auth configuration is validated
//! here, before any router exists: a missing or shared signing secret
//! aborts startup instead of letting the service mint unverifiable
//! tokens.

use std::sync::Arc;

use axum::Router;
use dishpatch_accounts::AccountsState;
use dishpatch_auth::{AuthConfig, Authenticator, CredentialStore, PgCredentialStore};
use dishpatch_common::Config;
use dishpatch_gateway::SubgraphRegistry;
use dishpatch_orders::OrdersState;
use sqlx::PgPool;

/// Create the application router backed by the Postgres credential store.
pub fn create_app(config: &Config, pool: PgPool) -> Result<Router, anyhow::Error> {
    let auth_config = AuthConfig::new(
        config.access_token_secret.clone(),
        config.refresh_token_secret.clone(),
    )?;
    let store = Arc::new(PgCredentialStore::new(pool));

    create_app_with_store(auth_config, store, &config.subgraph_urls)
}

/// Create the application router over any credential store.
///
/// Tests and local demos hand in a `MemoryCredentialStore` here; the
/// wiring is otherwise identical to production.
pub fn create_app_with_store(
    auth_config: AuthConfig,
    store: Arc<dyn CredentialStore>,
    subgraph_spec: &str,
) -> Result<Router, anyhow::Error> {
    let auth = Authenticator::new(store, auth_config);

    // The route policy table is populated once, here, and shared by
    // every gated router.
    let policy = dishpatch_orders::route_policy();

    let accounts_state = AccountsState { auth: auth.clone() };
    let orders_state = OrdersState {
        auth,
        policy,
    };

    let registry = SubgraphRegistry::from_spec(subgraph_spec)?;

    let app = Router::new()
        .route("/health", axum::routing::get(health_check))
        .route(
            "/",
            axum::routing::get(|| async { "Dishpatch API v0.1.0" }),
        )
        .merge(dishpatch_accounts::routes().with_state(accounts_state))
        .merge(dishpatch_orders::routes().with_state(orders_state))
        .merge(dishpatch_gateway::routes().with_state(registry));

    Ok(app)
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}
