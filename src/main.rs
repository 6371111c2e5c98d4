use {
    axum::{
        Router,
        extract::DefaultBodyLimit,
        routing::{get, post},
    },
    mollie_gateway::{
        AppState,
        adapters::{checkout::execute_payment_handler, mollie_client::MollieClient},
        config::GatewayConfig,
        infra::postgres::{order_repo::PgOrderStore, request_log_repo::PgRequestLog},
        services::{
            dispatch::Dispatcher,
            interceptor::{ProviderGateway, ProviderGatewayParts},
            offline::OfflineGateway,
            registry::StaticPaymentRegistry,
            return_url::ReturnUrlBuilder,
        },
    },
    sqlx::postgres::PgPoolOptions,
    std::{sync::Arc, time::Duration},
    tokio::signal,
    tower::ServiceBuilder,
    tower_http::timeout::TimeoutLayer,
};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    dotenvy::dotenv().ok();
    let config = GatewayConfig::from_env().expect("invalid configuration");

    let pool = PgPoolOptions::new()
        .max_connections(20)
        .acquire_timeout(Duration::from_secs(3))
        .connect(&config.database_url)
        .await
        .expect("failed to connect to database");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("failed to run migrations");

    let orders = Arc::new(PgOrderStore::new(pool.clone()));
    let request_log = Arc::new(PgRequestLog::new(pool));
    let provider = Arc::new(MollieClient::new(&config.mollie).expect("failed to build Mollie client"));
    let codes: Vec<&str> = config
        .payment_methods
        .iter()
        .map(|m| m.payment_type.as_str())
        .collect();
    tracing::info!(methods = ?codes, "payment methods registered");
    let registry = StaticPaymentRegistry::new(config.payment_methods.clone());

    let gateway = ProviderGateway::new(ProviderGatewayParts {
        base: Arc::new(OfflineGateway),
        registry: Arc::new(registry),
        orders: orders.clone(),
        request_log: request_log.clone(),
        dispatcher: Dispatcher::new(provider, request_log),
        return_urls: ReturnUrlBuilder::new(config.shop_url.clone()),
    });

    let state = AppState {
        orders,
        gateway: Arc::new(gateway),
    };

    // Provider call timeout plus headroom for the database round-trips.
    let request_timeout = Duration::from_secs(config.mollie.timeout_secs + 10);

    let app = Router::new()
        .route("/", get(|| async { "ok" }))
        .route("/checkout/{order_id}/execute", post(execute_payment_handler))
        .layer(
            ServiceBuilder::new()
                .layer(DefaultBodyLimit::max(64 * 1024))
                .layer(TimeoutLayer::new(request_timeout)),
        )
        .with_state(state);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .expect("failed to bind");
    tracing::info!(addr = %config.bind_addr, "listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("server error");
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c().await.expect("failed to listen for ctrl+c");
    };

    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to listen for SIGTERM")
            .recv()
            .await;
    };

    tokio::select! {
        _ = ctrl_c => tracing::info!("received ctrl+c, shutting down"),
        _ = terminate => tracing::info!("received SIGTERM, shutting down"),
    }
}
