use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Html,
    routing::get,
    Router,
};
use harvesting::{Harvester, sanitize_collection};
use tower_http::trace::TraceLayer;
use crate::page;

pub fn router(harvester: Harvester) -> Router {
    Router::new()
        .route("/manifest/{collection}", get(manifest))
        .route("/{collection}", get(links))
        .layer(TraceLayer::new_for_http())
        .with_state(harvester)
}

async fn manifest(Path(collection): Path<String>) -> Html<String> {
    let collection = sanitize_collection(&collection);
    Html(page::manifest(&collection))
}

async fn links(
    State(harvester): State<Harvester>,
    Path(collection): Path<String>,
) -> (StatusCode, Html<String>) {
    let collection = sanitize_collection(&collection);
    let result = match harvester.harvest(&collection).await {
        Ok(result) => result,
        Err(e) => {
            tracing::error!("harvest of {collection:?} failed: {e}");
            let status = if e.is_upstream() {
                StatusCode::BAD_GATEWAY
            } else {
                StatusCode::INTERNAL_SERVER_ERROR
            };
            return (status, Html(page::failure(&collection, &e.to_string())));
        }
    };
    if !result.has_records() {
        return (StatusCode::NOT_FOUND, Html(page::no_records(&collection)));
    }
    match result.urls().collect::<harvesting::Result<Vec<String>>>() {
        Ok(urls) => {
            tracing::debug!("{} links for {collection:?}", urls.len());
            (StatusCode::OK, Html(page::links(&collection, &urls)))
        }
        Err(e) => {
            tracing::error!("cannot link {collection:?}: {e}");
            (StatusCode::INTERNAL_SERVER_ERROR, Html(page::failure(&collection, &e.to_string())))
        }
    }
}
