use crate::auth::middleware;
use crate::AppState;
use axum::{
    middleware::{from_fn, from_fn_with_state},
    routing::{get, post},
    Router,
};

/// Build the `/api` router.
///
/// Each route gets its validation stages layered in front of the handler,
/// in order; a stage that rejects the request short-circuits the chain.
pub fn create_router(state: AppState) -> Router {
    let public_routes = Router::new()
        // Public routes (no auth required)
        .route(
            "/auth/register",
            post(crate::api::handlers::auth::register).route_layer(from_fn_with_state(
                state.clone(),
                middleware::validate_registration,
            )),
        )
        .route(
            "/auth/login",
            post(crate::api::handlers::auth::login)
                .route_layer(from_fn(middleware::validate_login)),
        );

    let protected_routes = Router::new()
        // Protected routes (auth required)
        .route("/users", get(crate::api::handlers::users::list_users))
        .layer(from_fn_with_state(state.clone(), middleware::require_auth));

    public_routes.merge(protected_routes).with_state(state)
}
