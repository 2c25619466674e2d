mod search;

use std::sync::Arc;

use axum::{
    http::{header, Method, StatusCode},
    response::{Html, IntoResponse},
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use lojaprox_maps::MapsClient;

#[derive(Clone)]
pub struct AppState {
    pub maps: Arc<MapsClient>,
    pub nearby_max_results: usize,
}

/// One-page search form. Inline by design; there is no template engine.
const SEARCH_FORM_HTML: &str = r#"<!doctype html>
<html lang="pt-BR">
<head>
  <meta charset="utf-8">
  <title>Loja Próxima</title>
</head>
<body>
  <h1>Buscar loja mais próxima</h1>
  <form action="/buscar" method="post">
    <label for="cep">CEP:</label>
    <input type="text" id="cep" name="cep" placeholder="01311-000" required>
    <label for="tipo">Tipo de loja:</label>
    <input type="text" id="tipo" name="tipo" placeholder="farmácia" required>
    <button type="submit">Buscar</button>
  </form>
</body>
</html>
"#;

pub fn build_app(state: AppState) -> Router {
    Router::new()
        .route("/", get(search_form))
        .route("/buscar", post(search::find_store))
        .route("/health", get(health))
        .fallback(page_not_found)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(build_cors()),
        )
        .with_state(state)
}

async fn search_form() -> Html<&'static str> {
    Html(SEARCH_FORM_HTML)
}

async fn health() -> &'static str {
    "Loja Próxima está no ar"
}

async fn page_not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, "página não encontrada")
}

fn build_cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE])
}
