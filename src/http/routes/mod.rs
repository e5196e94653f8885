use axum::{
    Router,
    routing::{get, put},
};
use tower_http::trace::TraceLayer;

mod milestones;

pub fn router() -> Router {
    Router::new()
        .route("/api/iron-trials/milestones", get(milestones::get_milestones))
        .route("/api/iron-trials/groups", get(milestones::get_groups))
        .route(
            "/api/iron-trials/milestones/{group_id}",
            put(milestones::update_milestones),
        )
        .layer(TraceLayer::new_for_http())
}
