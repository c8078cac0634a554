use axum::Router;

mod health;
mod session;

pub fn configure_routes(router: Router) -> Router {
    router.merge(health::configure()).merge(session::configure())
}
