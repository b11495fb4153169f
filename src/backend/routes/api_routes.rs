/**
 * API Route Handlers
 *
 * Route tables for the users, auth, posts and profile endpoints.
 *
 * # Routes
 *
 * ## Users and Authentication
 * - `POST /api/users` - Register
 * - `POST /api/auth` - Login
 * - `GET /api/auth` - Current user (requires authentication)
 *
 * ## Posts (all require authentication)
 * - `POST /api/posts`, `GET /api/posts`
 * - `GET /api/posts/{id}`, `DELETE /api/posts/{id}`
 * - `PUT /api/posts/like/{id}`, `PUT /api/posts/unlike/{id}`
 * - `POST /api/posts/comment/{id}`, `DELETE /api/posts/comment/{id}/{comment_id}`
 *
 * ## Profiles
 * - `GET /api/profile`, `GET /api/profile/user/{user_id}` - Public
 * - `GET /api/profile/me`, `POST /api/profile`, `DELETE /api/profile`
 * - `PUT /api/profile/experience`, `DELETE /api/profile/experience/{exp_id}`
 * - `PUT /api/profile/education`, `DELETE /api/profile/education/{edu_id}`
 *
 * Paths shared by a public and a protected method (`/api/auth`,
 * `/api/profile`) attach the auth layer to the protected method only.
 */

use axum::{
    middleware,
    routing::{delete, get, post, put},
    Router,
};

use crate::backend::auth::{get_me, login, register};
use crate::backend::middleware::auth_middleware;
use crate::backend::posts::handlers as posts;
use crate::backend::profile::handlers as profile;
use crate::backend::server::state::AppState;

/// Configure API routes
///
/// # Arguments
///
/// * `router` - The router to add routes to
/// * `app_state` - State handed to the auth middleware
pub fn configure_api_routes(router: Router<AppState>, app_state: &AppState) -> Router<AppState> {
    let auth = || middleware::from_fn_with_state(app_state.clone(), auth_middleware);

    router
        // Registration and login
        .route("/api/users", post(register))
        .route("/api/auth", post(login).merge(get(get_me).route_layer(auth())))
        .merge(post_routes().route_layer(auth()))
        .merge(profile_routes(app_state))
}

/// Post routes; the caller wraps them in the auth layer
fn post_routes() -> Router<AppState> {
    Router::new()
        .route("/api/posts", post(posts::create_post).get(posts::list_posts))
        .route("/api/posts/{id}", get(posts::get_post).delete(posts::delete_post))
        .route("/api/posts/like/{id}", put(posts::like_post))
        .route("/api/posts/unlike/{id}", put(posts::unlike_post))
        .route("/api/posts/comment/{id}", post(posts::add_comment))
        .route("/api/posts/comment/{id}/{comment_id}", delete(posts::remove_comment))
}

fn profile_routes(app_state: &AppState) -> Router<AppState> {
    let auth = || middleware::from_fn_with_state(app_state.clone(), auth_middleware);

    let protected = Router::new()
        .route("/api/profile/me", get(profile::get_my_profile))
        .route("/api/profile/experience", put(profile::add_experience))
        .route("/api/profile/experience/{exp_id}", delete(profile::remove_experience))
        .route("/api/profile/education", put(profile::add_education))
        .route("/api/profile/education/{edu_id}", delete(profile::remove_education))
        .route_layer(auth());

    Router::new()
        .route(
            "/api/profile",
            get(profile::list_profiles).merge(
                post(profile::upsert_profile)
                    .delete(profile::delete_account)
                    .route_layer(auth()),
            ),
        )
        .route("/api/profile/user/{user_id}", get(profile::get_profile_by_user))
        .merge(protected)
}
