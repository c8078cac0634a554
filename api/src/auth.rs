use async_trait::async_trait;

use tollbooth_auth::{
    AuthContextLayer, DecodedToken, DecoderRegistry, ProviderKind, RequestContext, TokenDecoder,
};

/// Decoder for providers whose tokens this service treats as opaque. The
/// token is handed through unchanged so downstream services can interpret it.
pub struct PassthroughDecoder;

#[async_trait]
impl TokenDecoder for PassthroughDecoder {
    async fn decode(
        &self,
        token: &str,
        _ctx: RequestContext<'_>,
    ) -> Result<Option<DecodedToken>, anyhow::Error> {
        Ok(Some(DecodedToken::Raw(token.to_string())))
    }
}

pub fn build_registry(providers: &[ProviderKind]) -> DecoderRegistry {
    let mut registry = DecoderRegistry::new();
    for kind in providers {
        registry = registry.with(*kind, PassthroughDecoder);
    }
    registry
}

pub fn auth_layer(providers: &[ProviderKind]) -> AuthContextLayer {
    AuthContextLayer::new(build_registry(providers))
}
