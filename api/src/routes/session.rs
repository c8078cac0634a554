use axum::{
    http::StatusCode, response::IntoResponse, routing::get, Extension, Json, Router,
};
use serde::Serialize;

use tollbooth_auth::{AuthContext, DecodedToken, ProviderKind};

/// What the current request's credentials resolved to. The raw token is never
/// echoed back.
#[derive(Serialize)]
struct SessionResponse {
    authenticated: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    provider: Option<ProviderKind>,
    #[serde(skip_serializing_if = "Option::is_none")]
    scheme: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    decoded: Option<DecodedToken>,
}

async fn get_session(ctx: Option<Extension<AuthContext>>) -> impl IntoResponse {
    let body = match ctx {
        Some(Extension(ctx)) => SessionResponse {
            authenticated: true,
            provider: Some(ctx.metadata.provider),
            scheme: Some(ctx.metadata.scheme),
            decoded: ctx.decoded,
        },
        None => SessionResponse {
            authenticated: false,
            provider: None,
            scheme: None,
            decoded: None,
        },
    };

    (StatusCode::OK, Json(body))
}

pub fn configure() -> Router {
    Router::new().route("/session", get(get_session))
}
