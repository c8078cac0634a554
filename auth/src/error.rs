use thiserror::Error;

use crate::provider::ProviderKind;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid authorization header")]
    InvalidAuthorizationHeader,

    #[error("Unknown auth provider {0}")]
    UnknownProvider(String),

    #[error("No decoder registered for auth provider {0}")]
    UnregisteredProvider(ProviderKind),

    #[error(transparent)]
    Decode(#[from] anyhow::Error),
}

impl Error {
    pub fn error_kind(&self) -> &'static str {
        match self {
            Error::InvalidAuthorizationHeader => "invalid_header",
            Error::UnknownProvider(_) => "unknown_provider",
            Error::UnregisteredProvider(_) => "unregistered_provider",
            Error::Decode(_) => "token_decode",
        }
    }
}
