//! Form-submission lookup handler.
//!
//! Reduced-feature path relative to the CLI: geocode the CEP, fetch nearby
//! candidates, and render only the provider-ranked first result. No
//! distance-matrix refinement and no local ranking on this surface.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::Form;
use serde::Deserialize;

use lojaprox_maps::{lookup, LookupError};

use super::AppState;

#[derive(Debug, Deserialize)]
pub(super) struct SearchForm {
    pub cep: String,
    pub tipo: String,
}

pub(super) async fn find_store(
    State(state): State<AppState>,
    Form(form): Form<SearchForm>,
) -> Response {
    match first_candidate_response(&state, &form).await {
        Ok(response) => response,
        Err(e) => {
            tracing::error!(error = %e, cep = %form.cep, "busca de loja falhou");
            (StatusCode::BAD_GATEWAY, "serviço de mapas indisponível").into_response()
        }
    }
}

async fn first_candidate_response(
    state: &AppState,
    form: &SearchForm,
) -> Result<Response, LookupError> {
    let origin = match lookup::geocode_postal_code(state.maps.as_ref(), &form.cep).await {
        Ok(location) => location,
        Err(LookupError::PostalCodeNotFound(_)) => {
            return Ok("CEP não encontrado.".into_response());
        }
        Err(e) => return Err(e),
    };

    let stores = lookup::find_nearby_stores(
        state.maps.as_ref(),
        origin.coordinates,
        &form.tipo,
        state.nearby_max_results,
    )
    .await?;
    let Some(first) = stores.first() else {
        return Ok("Nenhuma loja encontrada.".into_response());
    };

    let name = escape_html(&first.name);
    let address = escape_html(first.vicinity.as_deref().unwrap_or("Endereço não disponível"));
    Ok(Html(format!(
        "<h3>Loja encontrada:</h3><p><b>{name}</b></p><p>{address}</p>"
    ))
    .into_response())
}

/// Escapes the characters that would break out of the HTML fragment.
fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
