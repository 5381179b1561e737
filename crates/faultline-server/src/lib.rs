mod boundary;
mod error_page;
mod health;
mod members;
mod units;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use faultline_config::{Config, ResolverKind, UnitSelector};
use faultline_resolve::{FaultDispatcher, HandlerScope, HandlerTable, ResolverChain, ValidationResolver};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::TraceLayer;

pub use boundary::FaultBoundary;
pub use error_page::ErrorPage;
pub use members::MemberDto;
pub use units::{MEMBERS_V1, MEMBERS_V2, MEMBERS_V3, UNIT_NAMES};

/// Assembled server with all routes and middleware
pub struct Server {
    router: Router,
    listen_address: SocketAddr,
}

impl Server {
    /// Build the server from configuration
    ///
    /// Handler tables and the resolver chain are built here, once, and shared
    /// read-only by every request.
    ///
    /// # Errors
    ///
    /// Returns an error if the advice configuration names an unknown
    /// handling unit
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let listen_address = config
            .server
            .listen_address
            .unwrap_or_else(|| SocketAddr::from(([0, 0, 0, 0], 8080)));

        validate_advice_units(&config.advice.units)?;

        let chain = Arc::new(build_resolver_chain(&config.resolvers));
        let advice = config
            .advice
            .enabled
            .then(|| Arc::new(HandlerTable::standard(HandlerScope::Global)));
        let error_page = ErrorPage::new(config.server.error_page.include_message);

        tracing::debug!(
            resolvers = ?chain,
            advice = advice.is_some(),
            "fault resolution configured"
        );

        let mut app = Router::new();

        // Health check
        if config.server.health.enabled {
            app = app.route(&config.server.health.path, axum::routing::get(health::health_handler));
        }

        // Handling units, each behind its own fault boundary
        for unit in units::handling_units() {
            let mut dispatcher = FaultDispatcher::new(Arc::clone(&chain));

            if let Some(table) = unit.table {
                dispatcher = dispatcher.with_unit_table(Arc::new(table));
            }

            if let Some(ref advice) = advice
                && config.advice.units.covers(unit.name)
            {
                dispatcher = dispatcher.with_advice(Arc::clone(advice));
            }

            tracing::debug!(unit = unit.name, advice = dispatcher.has_advice(), "mounting handling unit");

            let unit_boundary = FaultBoundary::new(unit.name, dispatcher, error_page);
            app = app.merge(bound_unit(unit.router, unit_boundary));
        }

        Ok(Self {
            router: with_outer_layers(app),
            listen_address,
        })
    }

    /// Get the configured listen address
    #[must_use]
    pub const fn listen_address(&self) -> SocketAddr {
        self.listen_address
    }

    /// Override the listen address
    #[must_use]
    pub const fn with_listen_address(mut self, listen_address: SocketAddr) -> Self {
        self.listen_address = listen_address;
        self
    }

    /// Consume the server and return the inner router
    ///
    /// Useful for testing when the caller manages the listener
    pub fn into_router(self) -> Router {
        self.router
    }

    /// Start serving requests
    ///
    /// Blocks until the cancellation token is triggered.
    ///
    /// # Errors
    ///
    /// Returns an error if binding the TCP listener or serving fails
    pub async fn serve(self, shutdown: tokio_util::sync::CancellationToken) -> anyhow::Result<()> {
        let listener = tokio::net::TcpListener::bind(self.listen_address)
            .await
            .map_err(|e| anyhow::anyhow!("failed to bind {}: {e}", self.listen_address))?;
        let local_addr = listener.local_addr()?;
        tracing::info!(%local_addr, "server listening");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                shutdown.cancelled().await;
                tracing::info!("graceful shutdown initiated");
            })
            .await?;

        Ok(())
    }
}

/// Put a unit's routes behind its fault boundary
fn bound_unit(router: Router, unit_boundary: FaultBoundary) -> Router {
    router.layer(axum::middleware::from_fn_with_state(unit_boundary, boundary::fault_boundary))
}

/// Tracing, then outermost: a panic anywhere inside becomes the default 500 page
fn with_outer_layers(app: Router) -> Router {
    app.layer(TraceLayer::new_for_http())
        .layer(CatchPanicLayer::custom(error_page::panic_response))
}

/// Register the configured resolvers in the listed order
fn build_resolver_chain(kinds: &[ResolverKind]) -> ResolverChain {
    kinds
        .iter()
        .fold(ResolverChain::builder(), |builder, kind| match kind {
            ResolverKind::Validation => builder.push(ValidationResolver),
        })
        .build()
}

fn validate_advice_units(selector: &UnitSelector) -> anyhow::Result<()> {
    if let UnitSelector::Units(names) = selector
        && let Some(unknown) = names.iter().find(|name| !UNIT_NAMES.contains(&name.as_str()))
    {
        anyhow::bail!(
            "advice.units names unknown handling unit '{unknown}' (known: {})",
            UNIT_NAMES.join(", ")
        );
    }

    Ok(())
}
