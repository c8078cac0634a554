use std::{collections::HashMap, sync::Arc};

use async_trait::async_trait;
use axum::http::{HeaderMap, Method, Request, Uri};
use serde::Serialize;
use serde_json::{Map, Value};
use tracing::{event, Level};

use crate::{error::Error, provider::ProviderKind};

/// Request data made available to decoders, for providers whose tokens can
/// only be interpreted together with other request state.
#[derive(Clone, Copy, Debug)]
pub struct RequestContext<'a> {
    pub method: &'a Method,
    pub uri: &'a Uri,
    pub headers: &'a HeaderMap,
}

impl<'a> RequestContext<'a> {
    pub fn new<B>(req: &'a Request<B>) -> RequestContext<'a> {
        RequestContext {
            method: req.method(),
            uri: req.uri(),
            headers: req.headers(),
        }
    }
}

/// What a decoder made of the credential.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum DecodedToken {
    /// Structured claims, for providers whose tokens carry them.
    Claims(Map<String, Value>),
    /// The token itself, for providers whose tokens are opaque here.
    Raw(String),
}

#[async_trait]
pub trait TokenDecoder: Send + Sync {
    /// Turn a raw token into a payload. `Ok(None)` means the decoder had
    /// nothing to say about this token; failures mean the credential could
    /// not be interpreted at all.
    async fn decode(
        &self,
        token: &str,
        ctx: RequestContext<'_>,
    ) -> Result<Option<DecodedToken>, anyhow::Error>;
}

/// The decoder for each enabled provider, resolved once at startup.
#[derive(Clone, Default)]
pub struct DecoderRegistry {
    decoders: HashMap<ProviderKind, Arc<dyn TokenDecoder>>,
}

impl DecoderRegistry {
    pub fn new() -> DecoderRegistry {
        DecoderRegistry {
            decoders: HashMap::new(),
        }
    }

    pub fn with(mut self, kind: ProviderKind, decoder: impl TokenDecoder + 'static) -> Self {
        self.decoders.insert(kind, Arc::new(decoder));
        self
    }

    pub fn contains(&self, kind: ProviderKind) -> bool {
        self.decoders.contains_key(&kind)
    }

    /// Dispatch to the decoder registered for `kind`. A recognized provider
    /// with no decoder is a configuration gap and fails, rather than being
    /// treated as anonymous.
    pub async fn decode(
        &self,
        kind: ProviderKind,
        token: &str,
        ctx: RequestContext<'_>,
    ) -> Result<Option<DecodedToken>, Error> {
        let decoder = self
            .decoders
            .get(&kind)
            .ok_or(Error::UnregisteredProvider(kind))?;

        event!(Level::DEBUG, provider = %kind, "decoding token");
        decoder.decode(token, ctx).await.map_err(Error::Decode)
    }
}

impl std::fmt::Debug for DecoderRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_set().entries(self.decoders.keys()).finish()
    }
}
