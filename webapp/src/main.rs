use std::env;
use harvesting::{HarvestConfig, Harvester};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod page;
mod routes;

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("{}=debug,harvesting=debug,tower_http=debug", env!("CARGO_CRATE_NAME")).into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = HarvestConfig::from_env().expect("OAI_ENDPOINT and OAI_METADATA_PREFIX should be valid");
    tracing::debug!("harvesting from {} with prefix {}", config.endpoint, config.metadata_prefix);
    let harvester = Harvester::new(config).expect("Failed to build the http client");
    let app = routes::router(harvester);

    let addr = env::var("LISTEN_ADDR").unwrap_or_else(|_| String::from("127.0.0.1:3000"));
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .unwrap_or_else(|e| panic!("cannot bind to {addr}: {e}"));
    tracing::debug!("listening on {addr}");
    axum::serve(listener, app).await.expect("server error");
}
