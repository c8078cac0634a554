use serde::Serialize;
use std::borrow::Cow;
use tracing::{event, Level};

/// JSON body for error responses, shared by every service in the workspace.
#[derive(Debug, Serialize)]
pub struct ErrorResponseData {
    error: ErrorDetails,
}

#[derive(Debug, Serialize)]
struct ErrorDetails {
    kind: Cow<'static, str>,
    message: Cow<'static, str>,
}

impl ErrorResponseData {
    pub fn new(
        kind: impl Into<Cow<'static, str>>,
        message: impl Into<Cow<'static, str>>,
    ) -> ErrorResponseData {
        let ret = ErrorResponseData {
            error: ErrorDetails {
                kind: kind.into(),
                message: message.into(),
            },
        };

        event!(Level::ERROR, kind=%ret.error.kind, message=%ret.error.message);

        ret
    }

    /// Build a body from any error, using its `Display` output as the message.
    pub fn from_error(
        kind: impl Into<Cow<'static, str>>,
        err: &(dyn std::error::Error + 'static),
    ) -> ErrorResponseData {
        Self::new(kind, err.to_string())
    }

    pub fn kind(&self) -> &str {
        &self.error.kind
    }

    pub fn message(&self) -> &str {
        &self.error.message
    }
}
