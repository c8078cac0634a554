use axum::http::{header::AUTHORIZATION, Request};
use serde::Serialize;

use crate::error::Error;

/// The `Authorization` header split into its two parts.
///
/// The scheme is passed through without normalization; `bearer` and `Bearer`
/// are distinct values to downstream code.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct AuthorizationHeader {
    pub scheme: String,
    pub token: String,
}

/// Split the `Authorization` header into scheme and token.
///
/// The value must contain exactly one space, with nonempty text on both
/// sides. Header names are matched case-insensitively, so both
/// `authorization` and `Authorization` spellings land here.
pub fn parse_authorization_header<B>(req: &Request<B>) -> Result<AuthorizationHeader, Error> {
    let value = req
        .headers()
        .get(AUTHORIZATION)
        .ok_or(Error::InvalidAuthorizationHeader)?
        .to_str()
        .map_err(|_| Error::InvalidAuthorizationHeader)?;

    let (scheme, token) = value
        .split_once(' ')
        .ok_or(Error::InvalidAuthorizationHeader)?;

    if scheme.is_empty() || token.is_empty() || token.contains(' ') {
        return Err(Error::InvalidAuthorizationHeader);
    }

    Ok(AuthorizationHeader {
        scheme: scheme.to_string(),
        token: token.to_string(),
    })
}
