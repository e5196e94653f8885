use std::sync::Arc;

use axum::{
    Extension, Json,
    extract::{Path, Query},
};
use log::debug;

use crate::{
    http::{
        middleware::group_config::GroupConfigBody,
        models::{
            errors::HttpResult,
            milestones::{
                CONFIG_LAST_UPDATED, CONFIG_VERSION, GroupListResponse, MilestonesQuery,
                MilestonesResponse, UpdateResponse,
            },
        },
    },
    services::groups::GroupService,
};

/// Group used when a milestone request doesn't name one
const DEFAULT_GROUP: &str = "test-group";

/// GET /api/iron-trials/milestones
///
/// Gets the milestone configuration for the group named by the
/// `groupId` query parameter
pub async fn get_milestones(
    Query(query): Query<MilestonesQuery>,
    Extension(groups): Extension<Arc<GroupService>>,
) -> HttpResult<MilestonesResponse> {
    let group_id = query
        .group_id
        .unwrap_or_else(|| DEFAULT_GROUP.to_string());

    debug!("Requested milestone config: {}", group_id);

    let config = groups.get(&group_id)?;

    Ok(Json(MilestonesResponse {
        group_id,
        version: CONFIG_VERSION,
        last_updated: CONFIG_LAST_UPDATED,
        config,
    }))
}

/// GET /api/iron-trials/groups
///
/// Lists the currently known group identifiers
pub async fn get_groups(
    Extension(groups): Extension<Arc<GroupService>>,
) -> Json<GroupListResponse> {
    let groups = groups.group_ids();

    Json(GroupListResponse {
        count: groups.len(),
        groups,
    })
}

/// PUT /api/iron-trials/milestones/{group_id}
///
/// Replaces the milestone configuration for the provided group,
/// creating the group if it doesn't exist yet
pub async fn update_milestones(
    Path(group_id): Path<String>,
    Extension(groups): Extension<Arc<GroupService>>,
    GroupConfigBody(config): GroupConfigBody,
) -> HttpResult<UpdateResponse> {
    debug!("Update milestone config: {}", group_id);

    groups.replace(&group_id, config);

    Ok(Json(UpdateResponse {
        message: format!("Configuration updated for group '{group_id}'"),
        group_id,
    }))
}

#[cfg(test)]
mod test {
    use std::sync::Arc;

    use axum::{Extension, Router, body::Body};
    use hyper::{Request, StatusCode, header::CONTENT_TYPE};
    use serde_json::{Value, json};
    use tower::ServiceExt;

    use crate::services::groups::GroupService;

    /// Creates a router wired up with a freshly seeded group service
    fn router() -> Router {
        let groups = Arc::new(GroupService::new().unwrap());
        crate::http::routes::router().layer(Extension(groups))
    }

    async fn send(router: &Router, req: Request<Body>) -> (StatusCode, Value) {
        let res = router.clone().oneshot(req).await.unwrap();
        let status = res.status();
        let bytes = axum::body::to_bytes(res.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn put(uri: &str, body: Body) -> Request<Body> {
        Request::builder()
            .method("PUT")
            .uri(uri)
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .unwrap()
    }

    fn valid_config() -> Value {
        json!({
            "levelMilestones": [1],
            "questMilestones": [],
            "achievementMilestones": [],
            "rareDrops": [],
            "bossKills": [],
            "customMilestones": {}
        })
    }

    /// Fetching a seeded group should produce the envelope with
    /// the seeded configuration inside
    #[tokio::test]
    async fn fetch_seeded_group() {
        let router = router();
        let (status, body) = send(
            &router,
            get("/api/iron-trials/milestones?groupId=hardcore-group"),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["groupId"], "hardcore-group");
        assert_eq!(body["version"], "1.0");
        assert_eq!(body["lastUpdated"], "2025-01-02T00:00:00Z");
        assert_eq!(body["config"]["levelMilestones"], json!([50, 70, 80, 90, 99]));
    }

    /// Omitting the groupId query parameter should behave like
    /// requesting the default group
    #[tokio::test]
    async fn fetch_defaults_to_test_group() {
        let router = router();
        let (status, body) = send(&router, get("/api/iron-trials/milestones")).await;
        let (_, explicit) = send(
            &router,
            get("/api/iron-trials/milestones?groupId=test-group"),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, explicit);
        assert_eq!(body["groupId"], "test-group");
    }

    /// Unknown groups should 404 and list the known identifiers
    #[tokio::test]
    async fn fetch_unknown_group() {
        let router = router();
        let (status, body) = send(
            &router,
            get("/api/iron-trials/milestones?groupId=nonexistent"),
        )
        .await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "Group 'nonexistent' not found");
        assert_eq!(
            body["available_groups"],
            json!(["test-group", "hardcore-group", "casual-group"])
        );
    }

    /// Group listing should report the seeded groups and their count
    #[tokio::test]
    async fn list_groups() {
        let router = router();
        let (status, body) = send(&router, get("/api/iron-trials/groups")).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["count"], 3);
        assert_eq!(
            body["groups"],
            json!(["test-group", "hardcore-group", "casual-group"])
        );
    }

    /// Writing a configuration then reading it back should round-trip
    /// the body unchanged, including for previously unknown groups
    #[tokio::test]
    async fn update_then_fetch_round_trips() {
        let router = router();
        let config = valid_config();

        let (status, body) = send(
            &router,
            put(
                "/api/iron-trials/milestones/new-group",
                Body::from(config.to_string()),
            ),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["groupId"], "new-group");
        assert_eq!(
            body["message"],
            "Configuration updated for group 'new-group'"
        );

        let (status, body) = send(
            &router,
            get("/api/iron-trials/milestones?groupId=new-group"),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["config"], config);

        let (_, listing) = send(&router, get("/api/iron-trials/groups")).await;
        assert_eq!(listing["count"], 4);
    }

    /// Overwriting a seeded group should be visible to later reads
    #[tokio::test]
    async fn update_existing_group() {
        let router = router();
        let (status, _) = send(
            &router,
            put(
                "/api/iron-trials/milestones/casual-group",
                Body::from(valid_config().to_string()),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK);

        let (_, body) = send(
            &router,
            get("/api/iron-trials/milestones?groupId=casual-group"),
        )
        .await;
        assert_eq!(body["config"]["levelMilestones"], json!([1]));

        let (_, listing) = send(&router, get("/api/iron-trials/groups")).await;
        assert_eq!(listing["count"], 3);
    }

    /// Requests with an empty body should be rejected
    #[tokio::test]
    async fn update_empty_body() {
        let router = router();
        let (status, body) = send(
            &router,
            put("/api/iron-trials/milestones/test-group", Body::empty()),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "No data provided");
    }

    /// Bodies that aren't valid JSON should be rejected
    #[tokio::test]
    async fn update_malformed_body() {
        let router = router();
        let (status, body) = send(
            &router,
            put(
                "/api/iron-trials/milestones/test-group",
                Body::from("{not json"),
            ),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].is_string());
    }

    /// Bodies missing a required key should be rejected naming the
    /// first missing field and must leave the stored config untouched
    #[tokio::test]
    async fn update_missing_field_rejected() {
        let router = router();
        let mut config = valid_config();
        config.as_object_mut().unwrap().remove("rareDrops");

        let (status, body) = send(
            &router,
            put(
                "/api/iron-trials/milestones/hardcore-group",
                Body::from(config.to_string()),
            ),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Missing required field: rareDrops");

        // Rejected writes must not modify the registry
        let (_, body) = send(
            &router,
            get("/api/iron-trials/milestones?groupId=hardcore-group"),
        )
        .await;
        assert_eq!(body["config"]["levelMilestones"], json!([50, 70, 80, 90, 99]));
    }

    /// Each missing field should be reported in the documented order
    #[tokio::test]
    async fn update_reports_first_missing_field() {
        let router = router();
        let mut config = valid_config();
        let map = config.as_object_mut().unwrap();
        map.remove("levelMilestones");
        map.remove("bossKills");

        let (status, body) = send(
            &router,
            put(
                "/api/iron-trials/milestones/test-group",
                Body::from(config.to_string()),
            ),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Missing required field: levelMilestones");
    }

    /// Field values aren't type checked, a mismatched value is stored
    /// and served back as-is
    #[tokio::test]
    async fn update_accepts_untyped_values() {
        let router = router();
        let mut config = valid_config();
        config["levelMilestones"] = json!("not-a-list");

        let (status, _) = send(
            &router,
            put(
                "/api/iron-trials/milestones/test-group",
                Body::from(config.to_string()),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK);

        let (_, body) = send(&router, get("/api/iron-trials/milestones")).await;
        assert_eq!(body["config"]["levelMilestones"], "not-a-list");
    }
}
