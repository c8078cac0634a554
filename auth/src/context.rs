use axum::http::Request;
use serde::Serialize;

use crate::{
    decoder::{DecodedToken, DecoderRegistry, RequestContext},
    error::Error,
    header::parse_authorization_header,
    provider::{provider_kind, ProviderKind},
};

/// How the caller authenticated, as presented in the request headers.
#[derive(Clone, Debug, Serialize)]
pub struct AuthMetadata {
    #[serde(rename = "type")]
    pub provider: ProviderKind,
    pub scheme: String,
    pub token: String,
}

/// Authentication information extracted from a single request, before any
/// authorization decision is made.
#[derive(Clone, Debug, Serialize)]
pub struct AuthContext {
    pub decoded: Option<DecodedToken>,
    pub metadata: AuthMetadata,
}

/// Extract the authentication context from a request.
///
/// A request without the provider header is anonymous and yields `Ok(None)`;
/// that is the expected path for logged-out callers, not an error. Otherwise
/// the `Authorization` header must be well-formed and the provider's decoder
/// gets one shot at the token.
pub async fn authentication_context<B>(
    registry: &DecoderRegistry,
    req: &Request<B>,
) -> Result<Option<AuthContext>, Error> {
    let provider = match provider_kind(req) {
        Some(provider) => provider,
        None => return Ok(None),
    };

    let header = parse_authorization_header(req)?;
    let decoded = registry
        .decode(provider, &header.token, RequestContext::new(req))
        .await?;

    Ok(Some(AuthContext {
        decoded,
        metadata: AuthMetadata {
            provider,
            scheme: header.scheme,
            token: header.token,
        },
    }))
}
