#[cfg(test)]
mod tests {
    use crate::helpers::app::make_test_app;
    use api::auth::generate_jwt;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use db::models::{user::Model as UserModel, user::Role};
    use serde_json::json;
    use tower::ServiceExt;

    struct TestData {
        admin_user: UserModel,
        judge_user: UserModel,
    }

    async fn setup_test_data(db: &sea_orm::DatabaseConnection) -> TestData {
        let admin_user = UserModel::create(db, "admin", "admin@test.com", "password", Role::Admin, None)
            .await
            .expect("Failed to create admin user");
        let judge_user = UserModel::create(db, "judge", "judge@test.com", "password", Role::Judge, None)
            .await
            .expect("Failed to create judge user");

        TestData {
            admin_user,
            judge_user,
        }
    }

    fn round_body(number: i32) -> serde_json::Value {
        json!({
            "number": number,
            "start_time": "2026-08-01T09:00:00Z",
            "end_time": "2026-08-01T18:00:00Z"
        })
    }

    /// Test Case: Admin creates a round successfully
    #[tokio::test]
    async fn test_create_round_success() {
        let (app, app_state) = make_test_app().await;
        let data = setup_test_data(app_state.db()).await;

        let (token, _) = generate_jwt(data.admin_user.id, data.admin_user.role, None);
        let req = Request::builder()
            .method("POST")
            .uri("/api/admin/rounds")
            .header("Authorization", format!("Bearer {}", token))
            .header("Content-Type", "application/json")
            .body(Body::from(serde_json::to_vec(&round_body(1)).unwrap()))
            .unwrap();

        let response = app.oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["success"], true);
        assert_eq!(json["data"]["number"], 1);
        assert_eq!(json["data"]["is_active"], false);
        assert_eq!(json["data"]["submissions_enabled"], false);
    }

    /// Test Case: Unauthenticated request is rejected with 401
    #[tokio::test]
    async fn test_create_round_unauthenticated() {
        let (app, _app_state) = make_test_app().await;

        let req = Request::builder()
            .method("POST")
            .uri("/api/admin/rounds")
            .header("Content-Type", "application/json")
            .body(Body::from(serde_json::to_vec(&round_body(1)).unwrap()))
            .unwrap();

        let response = app.oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["success"], false);
        assert_eq!(json["message"], "Authentication required");
    }

    /// Test Case: Judge role cannot reach admin endpoints
    #[tokio::test]
    async fn test_create_round_forbidden_for_judge() {
        let (app, app_state) = make_test_app().await;
        let data = setup_test_data(app_state.db()).await;

        let (token, _) = generate_jwt(data.judge_user.id, data.judge_user.role, None);
        let req = Request::builder()
            .method("POST")
            .uri("/api/admin/rounds")
            .header("Authorization", format!("Bearer {}", token))
            .header("Content-Type", "application/json")
            .body(Body::from(serde_json::to_vec(&round_body(1)).unwrap()))
            .unwrap();

        let response = app.oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["success"], false);
        assert_eq!(json["message"], "Admin access required");
    }

    /// Test Case: Duplicate round number
    #[tokio::test]
    async fn test_create_round_duplicate_number() {
        let (app, app_state) = make_test_app().await;
        let data = setup_test_data(app_state.db()).await;

        let (token, _) = generate_jwt(data.admin_user.id, data.admin_user.role, None);

        let req1 = Request::builder()
            .method("POST")
            .uri("/api/admin/rounds")
            .header("Authorization", format!("Bearer {}", token))
            .header("Content-Type", "application/json")
            .body(Body::from(serde_json::to_vec(&round_body(1)).unwrap()))
            .unwrap();
        let response1 = app.clone().oneshot(req1).await.unwrap();
        assert_eq!(response1.status(), StatusCode::CREATED);

        let req2 = Request::builder()
            .method("POST")
            .uri("/api/admin/rounds")
            .header("Authorization", format!("Bearer {}", token))
            .header("Content-Type", "application/json")
            .body(Body::from(serde_json::to_vec(&round_body(1)).unwrap()))
            .unwrap();
        let response2 = app.oneshot(req2).await.unwrap();
        assert_eq!(response2.status(), StatusCode::CONFLICT);

        let body = axum::body::to_bytes(response2.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["message"], "A round with this number already exists");
    }

    /// Test Case: End time before start time
    #[tokio::test]
    async fn test_create_round_bad_times() {
        let (app, app_state) = make_test_app().await;
        let data = setup_test_data(app_state.db()).await;

        let (token, _) = generate_jwt(data.admin_user.id, data.admin_user.role, None);
        let req_body = json!({
            "number": 1,
            "start_time": "2026-08-01T18:00:00Z",
            "end_time": "2026-08-01T09:00:00Z"
        });
        let req = Request::builder()
            .method("POST")
            .uri("/api/admin/rounds")
            .header("Authorization", format!("Bearer {}", token))
            .header("Content-Type", "application/json")
            .body(Body::from(serde_json::to_vec(&req_body).unwrap()))
            .unwrap();

        let response = app.oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["message"], "End time must be after start time");
    }

    /// Test Case: Activating a round deactivates the others
    #[tokio::test]
    async fn test_edit_round_activation_is_exclusive() {
        let (app, app_state) = make_test_app().await;
        let data = setup_test_data(app_state.db()).await;

        let (token, _) = generate_jwt(data.admin_user.id, data.admin_user.role, None);

        for number in [1, 2] {
            let req = Request::builder()
                .method("POST")
                .uri("/api/admin/rounds")
                .header("Authorization", format!("Bearer {}", token))
                .header("Content-Type", "application/json")
                .body(Body::from(serde_json::to_vec(&round_body(number)).unwrap()))
                .unwrap();
            let response = app.clone().oneshot(req).await.unwrap();
            assert_eq!(response.status(), StatusCode::CREATED);
        }

        for round_id in [1, 2] {
            let req = Request::builder()
                .method("PUT")
                .uri(format!("/api/admin/rounds/{}", round_id))
                .header("Authorization", format!("Bearer {}", token))
                .header("Content-Type", "application/json")
                .body(Body::from(
                    serde_json::to_vec(&json!({"is_active": true})).unwrap(),
                ))
                .unwrap();
            let response = app.clone().oneshot(req).await.unwrap();
            assert_eq!(response.status(), StatusCode::OK);
        }

        let req = Request::builder()
            .method("GET")
            .uri("/api/admin/rounds")
            .header("Authorization", format!("Bearer {}", token))
            .body(Body::empty())
            .unwrap();
        let response = app.oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        let active: Vec<bool> = json["data"]
            .as_array()
            .unwrap()
            .iter()
            .map(|r| r["is_active"].as_bool().unwrap())
            .collect();
        assert_eq!(active.iter().filter(|a| **a).count(), 1);
        assert!(json["data"][1]["is_active"].as_bool().unwrap());
    }

    /// Test Case: Duplicate username on user provisioning
    #[tokio::test]
    async fn test_create_user_duplicate_username() {
        let (app, app_state) = make_test_app().await;
        let data = setup_test_data(app_state.db()).await;

        let (token, _) = generate_jwt(data.admin_user.id, data.admin_user.role, None);
        let req_body = json!({
            "username": "judge",
            "email": "other@test.com",
            "password": "password",
            "role": "judge"
        });
        let req = Request::builder()
            .method("POST")
            .uri("/api/admin/users")
            .header("Authorization", format!("Bearer {}", token))
            .header("Content-Type", "application/json")
            .body(Body::from(serde_json::to_vec(&req_body).unwrap()))
            .unwrap();

        let response = app.oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::CONFLICT);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["message"], "A user with this username already exists");
    }

    /// Test Case: Shortlisting the same team twice for a round
    #[tokio::test]
    async fn test_shortlist_duplicate() {
        let (app, app_state) = make_test_app().await;
        let data = setup_test_data(app_state.db()).await;
        let db = app_state.db();

        let team = db::models::team::Model::create(db, "rustaceans")
            .await
            .expect("Failed to create team");
        let round = db::models::round::Model::create(
            db,
            1,
            "2026-08-01T09:00:00Z".parse().unwrap(),
            "2026-08-01T18:00:00Z".parse().unwrap(),
        )
        .await
        .expect("Failed to create round");

        let (token, _) = generate_jwt(data.admin_user.id, data.admin_user.role, None);
        let req_body = json!({"team_id": team.id, "round_id": round.id});

        let req1 = Request::builder()
            .method("POST")
            .uri("/api/admin/shortlist")
            .header("Authorization", format!("Bearer {}", token))
            .header("Content-Type", "application/json")
            .body(Body::from(serde_json::to_vec(&req_body).unwrap()))
            .unwrap();
        let response1 = app.clone().oneshot(req1).await.unwrap();
        assert_eq!(response1.status(), StatusCode::CREATED);

        let req2 = Request::builder()
            .method("POST")
            .uri("/api/admin/shortlist")
            .header("Authorization", format!("Bearer {}", token))
            .header("Content-Type", "application/json")
            .body(Body::from(serde_json::to_vec(&req_body).unwrap()))
            .unwrap();
        let response2 = app.oneshot(req2).await.unwrap();
        assert_eq!(response2.status(), StatusCode::CONFLICT);
    }
}
