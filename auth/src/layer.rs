use std::sync::Arc;

use axum::{
    body::{boxed, Body, Bytes, HttpBody},
    http::{Request, StatusCode},
    response::{IntoResponse, Response},
    BoxError, Json,
};
use futures::future::BoxFuture;
use tower::{Layer, Service};
use tracing::{event, Level};

use tollbooth_http_errors::ErrorResponseData;

use crate::{context::authentication_context, decoder::DecoderRegistry, error::Error};

fn rejection(err: &Error) -> Response {
    // Intentionally vague; the details go to the logs, not the caller.
    let body = ErrorResponseData::new(err.error_kind(), "401 Unauthorized");
    (StatusCode::UNAUTHORIZED, Json(body)).into_response()
}

/// Resolve the authentication context for each request and stash it in the
/// request extensions. Anonymous requests pass through untouched.
#[derive(Clone)]
pub struct AuthContextLayer {
    registry: Arc<DecoderRegistry>,
}

impl AuthContextLayer {
    pub fn new(registry: DecoderRegistry) -> AuthContextLayer {
        AuthContextLayer {
            registry: Arc::new(registry),
        }
    }
}

impl<S> Layer<S> for AuthContextLayer {
    type Service = AuthContextService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        AuthContextService {
            inner,
            registry: self.registry.clone(),
        }
    }
}

#[derive(Clone)]
pub struct AuthContextService<S> {
    inner: S,
    registry: Arc<DecoderRegistry>,
}

impl<S, ResBody> Service<Request<Body>> for AuthContextService<S>
where
    S: Service<Request<Body>, Response = Response<ResBody>> + Send + Clone + 'static,
    S::Future: Send + 'static,
    ResBody: HttpBody<Data = Bytes> + Send + 'static,
    ResBody::Error: Into<BoxError>,
{
    type Response = Response;
    type Error = S::Error;
    type Future = BoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(
        &mut self,
        cx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, mut req: Request<Body>) -> Self::Future {
        let registry = self.registry.clone();
        let inner = self.inner.clone();
        let mut inner = std::mem::replace(&mut self.inner, inner);

        Box::pin(async move {
            match authentication_context(&registry, &req).await {
                Ok(Some(ctx)) => {
                    req.extensions_mut().insert(ctx);
                }
                Ok(None) => {}
                Err(e) => {
                    event!(Level::DEBUG, error = %e, "rejecting request");
                    return Ok(rejection(&e));
                }
            }

            let response = inner.call(req).await?.map(boxed);
            Ok(response)
        })
    }
}

#[cfg(test)]
mod tests {
    use axum::{
        body::Body,
        http::{Request, StatusCode},
        response::IntoResponse,
        routing::get,
        Extension, Router,
    };
    use tower::ServiceExt;

    use super::AuthContextLayer;
    use crate::{
        context::AuthContext,
        decoder::{DecodedToken, DecoderRegistry, RequestContext, TokenDecoder},
        provider::{ProviderKind, AUTH_PROVIDER_HEADER},
    };

    struct EchoDecoder;

    #[async_trait::async_trait]
    impl TokenDecoder for EchoDecoder {
        async fn decode(
            &self,
            token: &str,
            _ctx: RequestContext<'_>,
        ) -> Result<Option<DecodedToken>, anyhow::Error> {
            Ok(Some(DecodedToken::Raw(token.to_string())))
        }
    }

    async fn handler(ctx: Option<Extension<AuthContext>>) -> impl IntoResponse {
        match ctx {
            Some(Extension(ctx)) => ([("x-provider", ctx.metadata.provider.as_str())], "authed"),
            None => ([("x-provider", "none")], "anonymous"),
        }
    }

    fn app() -> Router {
        let registry = DecoderRegistry::new().with(ProviderKind::Custom, EchoDecoder);
        Router::new()
            .route("/", get(handler))
            .layer(AuthContextLayer::new(registry))
    }

    #[tokio::test]
    async fn context_in_extensions() {
        let req = Request::builder()
            .header(AUTH_PROVIDER_HEADER, "custom")
            .header("authorization", "Bearer abc123")
            .body(Body::empty())
            .unwrap();

        let res = app().oneshot(req).await.unwrap();
        assert_eq!(res.status(), StatusCode::OK);
        assert_eq!(res.headers()["x-provider"], "custom");
    }

    #[tokio::test]
    async fn anonymous_passes_through() {
        let req = Request::builder().body(Body::empty()).unwrap();

        let res = app().oneshot(req).await.unwrap();
        assert_eq!(res.status(), StatusCode::OK);
        assert_eq!(res.headers()["x-provider"], "none");
    }

    #[tokio::test]
    async fn malformed_header_rejected() {
        let req = Request::builder()
            .header(AUTH_PROVIDER_HEADER, "custom")
            .header("authorization", "Bearerabc123")
            .body(Body::empty())
            .unwrap();

        let res = app().oneshot(req).await.unwrap();
        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
        // The inner service never ran, so its marker header is absent.
        assert!(res.headers().get("x-provider").is_none());
    }
}
