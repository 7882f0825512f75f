#[cfg(test)]
mod tests {
    use crate::helpers::app::make_test_app;
    use api::auth::generate_jwt;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use db::models::{
        round::Model as RoundModel, subtask::Model as SubtaskModel, team::Model as TeamModel,
        user::Model as UserModel, user::Role,
    };
    use sea_orm::{ActiveModelTrait, ActiveValue::Set};
    use serde_json::json;
    use std::collections::HashSet;
    use tower::ServiceExt;

    struct TestData {
        team_user: UserModel,
        team: TeamModel,
        round: RoundModel,
        subtasks: Vec<SubtaskModel>,
    }

    async fn setup_test_data(db: &sea_orm::DatabaseConnection) -> TestData {
        let team = TeamModel::create(db, "trait-objects")
            .await
            .expect("Failed to create team");
        let team_user = UserModel::create(
            db,
            "team1",
            "team1@test.com",
            "password",
            Role::Team,
            Some(team.id),
        )
        .await
        .expect("Failed to create team user");
        let round = RoundModel::create(
            db,
            1,
            "2026-08-01T09:00:00Z".parse().unwrap(),
            "2026-08-01T18:00:00Z".parse().unwrap(),
        )
        .await
        .expect("Failed to create round");

        let mut subtasks = Vec::new();
        for (title, description) in [
            ("Realtime leaderboard", "Build a live-updating leaderboard."),
            ("Offline sync", "Queue writes while offline and replay them."),
            ("Access audit", "Track who viewed which record and when."),
        ] {
            let subtask = SubtaskModel::create(db, round.id, title, description)
                .await
                .expect("Failed to create subtask");
            subtasks.push(subtask);
        }

        TestData {
            team_user,
            team,
            round,
            subtasks,
        }
    }

    fn team_token(data: &TestData) -> String {
        let (token, _) = generate_jwt(data.team_user.id, data.team_user.role, Some(data.team.id));
        token
    }

    async fn fetch_options(
        app: &tower::util::BoxCloneService<
            Request<Body>,
            axum::response::Response,
            std::convert::Infallible,
        >,
        token: &str,
        round_id: i64,
    ) -> serde_json::Value {
        let req = Request::builder()
            .method("GET")
            .uri(format!("/api/team/rounds/{}/options", round_id))
            .header("Authorization", format!("Bearer {}", token))
            .body(Body::empty())
            .unwrap();

        let response = app.clone().oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&body).unwrap()
    }

    /// Test Case: The offer holds exactly two distinct subtasks of the round,
    /// and revisiting returns the identical offer
    #[tokio::test]
    async fn test_options_draws_two_distinct_subtasks() {
        let (app, app_state) = make_test_app().await;
        let data = setup_test_data(app_state.db()).await;
        let token = team_token(&data);

        let first = fetch_options(&app, &token, data.round.id).await;
        let offered = first["data"]["subtasks"].as_array().unwrap();
        assert_eq!(offered.len(), 2);

        let valid_ids: HashSet<i64> = data.subtasks.iter().map(|s| s.id).collect();
        let offered_ids: HashSet<i64> = offered
            .iter()
            .map(|s| s["id"].as_i64().unwrap())
            .collect();
        assert_eq!(offered_ids.len(), 2, "offered subtasks must be distinct");
        assert!(offered_ids.is_subset(&valid_ids));

        let second = fetch_options(&app, &token, data.round.id).await;
        assert_eq!(first["data"]["subtasks"], second["data"]["subtasks"]);
    }

    /// Test Case: A round with fewer than two subtasks cannot make an offer
    #[tokio::test]
    async fn test_options_requires_two_subtasks() {
        let (app, app_state) = make_test_app().await;
        let data = setup_test_data(app_state.db()).await;
        let db = app_state.db();

        let sparse_round = RoundModel::create(
            db,
            2,
            "2026-08-02T09:00:00Z".parse().unwrap(),
            "2026-08-02T18:00:00Z".parse().unwrap(),
        )
        .await
        .expect("Failed to create round");
        SubtaskModel::create(db, sparse_round.id, "Only option", "Lone subtask.")
            .await
            .expect("Failed to create subtask");

        let token = team_token(&data);
        let req = Request::builder()
            .method("GET")
            .uri(format!("/api/team/rounds/{}/options", sparse_round.id))
            .header("Authorization", format!("Bearer {}", token))
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::CONFLICT);
    }

    /// Test Case: Selecting an offered subtask, then selecting again
    #[tokio::test]
    async fn test_select_subtask_once() {
        let (app, app_state) = make_test_app().await;
        let data = setup_test_data(app_state.db()).await;
        let token = team_token(&data);

        let options = fetch_options(&app, &token, data.round.id).await;
        let offered_id = options["data"]["subtasks"][0]["id"].as_i64().unwrap();
        let other_offered_id = options["data"]["subtasks"][1]["id"].as_i64().unwrap();

        let req1 = Request::builder()
            .method("POST")
            .uri(format!("/api/team/rounds/{}/selection", data.round.id))
            .header("Authorization", format!("Bearer {}", token))
            .header("Content-Type", "application/json")
            .body(Body::from(
                serde_json::to_vec(&json!({"subtask_id": offered_id})).unwrap(),
            ))
            .unwrap();
        let response1 = app.clone().oneshot(req1).await.unwrap();
        assert_eq!(response1.status(), StatusCode::CREATED);

        let req2 = Request::builder()
            .method("POST")
            .uri(format!("/api/team/rounds/{}/selection", data.round.id))
            .header("Authorization", format!("Bearer {}", token))
            .header("Content-Type", "application/json")
            .body(Body::from(
                serde_json::to_vec(&json!({"subtask_id": other_offered_id})).unwrap(),
            ))
            .unwrap();
        let response2 = app.clone().oneshot(req2).await.unwrap();
        assert_eq!(response2.status(), StatusCode::CONFLICT);

        let body = axum::body::to_bytes(response2.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(
            json["message"],
            "A subtask has already been selected for this round"
        );

        // The stored offer mirrors the committed choice.
        let options = fetch_options(&app, &token, data.round.id).await;
        assert_eq!(options["data"]["selected_subtask_id"], offered_id);
    }

    /// Test Case: Selecting a subtask outside the team's offer
    #[tokio::test]
    async fn test_select_unoffered_subtask() {
        let (app, app_state) = make_test_app().await;
        let data = setup_test_data(app_state.db()).await;
        let token = team_token(&data);

        let options = fetch_options(&app, &token, data.round.id).await;
        let offered_ids: HashSet<i64> = options["data"]["subtasks"]
            .as_array()
            .unwrap()
            .iter()
            .map(|s| s["id"].as_i64().unwrap())
            .collect();
        let unoffered = data
            .subtasks
            .iter()
            .find(|s| !offered_ids.contains(&s.id))
            .expect("three subtasks, two offered");

        let req = Request::builder()
            .method("POST")
            .uri(format!("/api/team/rounds/{}/selection", data.round.id))
            .header("Authorization", format!("Bearer {}", token))
            .header("Content-Type", "application/json")
            .body(Body::from(
                serde_json::to_vec(&json!({"subtask_id": unoffered.id})).unwrap(),
            ))
            .unwrap();

        let response = app.oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["message"], "Subtask was not offered to this team");
    }

    /// Test Case: The options endpoint records display markers
    #[tokio::test]
    async fn test_shown_subtasks_match_offer() {
        let (app, app_state) = make_test_app().await;
        let data = setup_test_data(app_state.db()).await;
        let token = team_token(&data);

        let options = fetch_options(&app, &token, data.round.id).await;
        let offered_ids: HashSet<i64> = options["data"]["subtasks"]
            .as_array()
            .unwrap()
            .iter()
            .map(|s| s["id"].as_i64().unwrap())
            .collect();

        let req = Request::builder()
            .method("GET")
            .uri(format!("/api/team/rounds/{}/shown", data.round.id))
            .header("Authorization", format!("Bearer {}", token))
            .body(Body::empty())
            .unwrap();
        let response = app.oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        let shown_ids: HashSet<i64> = json["data"]
            .as_array()
            .unwrap()
            .iter()
            .map(|s| s["id"].as_i64().unwrap())
            .collect();
        assert_eq!(shown_ids, offered_ids);
    }

    /// Test Case: Submissions are refused while the round gate is closed
    #[tokio::test]
    async fn test_create_submission_disabled() {
        let (app, app_state) = make_test_app().await;
        let data = setup_test_data(app_state.db()).await;
        let token = team_token(&data);

        let req_body = json!({"github_url": "https://github.com/trait-objects/entry"});
        let req = Request::builder()
            .method("POST")
            .uri(format!("/api/team/rounds/{}/submission", data.round.id))
            .header("Authorization", format!("Bearer {}", token))
            .header("Content-Type", "application/json")
            .body(Body::from(serde_json::to_vec(&req_body).unwrap()))
            .unwrap();

        let response = app.oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["message"], "Submissions are not enabled for this round");
    }

    async fn enable_submissions(db: &sea_orm::DatabaseConnection, round: &RoundModel) {
        let mut active_model: db::models::round::ActiveModel = round.clone().into();
        active_model.submissions_enabled = Set(true);
        active_model
            .update(db)
            .await
            .expect("Failed to enable submissions");
    }

    /// Test Case: Create, then duplicate submission
    #[tokio::test]
    async fn test_create_submission_and_duplicate() {
        let (app, app_state) = make_test_app().await;
        let data = setup_test_data(app_state.db()).await;
        enable_submissions(app_state.db(), &data.round).await;
        let token = team_token(&data);

        let req_body = json!({
            "github_url": "https://github.com/trait-objects/entry",
            "overview": "CRDT-backed offline sync demo"
        });
        let req1 = Request::builder()
            .method("POST")
            .uri(format!("/api/team/rounds/{}/submission", data.round.id))
            .header("Authorization", format!("Bearer {}", token))
            .header("Content-Type", "application/json")
            .body(Body::from(serde_json::to_vec(&req_body).unwrap()))
            .unwrap();
        let response1 = app.clone().oneshot(req1).await.unwrap();
        assert_eq!(response1.status(), StatusCode::CREATED);

        let req2 = Request::builder()
            .method("POST")
            .uri(format!("/api/team/rounds/{}/submission", data.round.id))
            .header("Authorization", format!("Bearer {}", token))
            .header("Content-Type", "application/json")
            .body(Body::from(serde_json::to_vec(&req_body).unwrap()))
            .unwrap();
        let response2 = app.oneshot(req2).await.unwrap();
        assert_eq!(response2.status(), StatusCode::CONFLICT);
    }

    /// Test Case: An invalid GitHub link fails validation
    #[tokio::test]
    async fn test_create_submission_invalid_github_url() {
        let (app, app_state) = make_test_app().await;
        let data = setup_test_data(app_state.db()).await;
        enable_submissions(app_state.db(), &data.round).await;
        let token = team_token(&data);

        let req_body = json!({"github_url": "ftp://github.com/nope"});
        let req = Request::builder()
            .method("POST")
            .uri(format!("/api/team/rounds/{}/submission", data.round.id))
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
        assert!(
            json["message"]
                .as_str()
                .unwrap()
                .contains("GitHub link must be")
        );
    }

    /// Test Case: A locked submission refuses edits
    #[tokio::test]
    async fn test_update_locked_submission() {
        let (app, app_state) = make_test_app().await;
        let data = setup_test_data(app_state.db()).await;
        let db = app_state.db();
        enable_submissions(db, &data.round).await;
        let token = team_token(&data);

        let submission = db::models::submission::Model::create(
            db,
            data.team.id,
            data.round.id,
            None,
            Some("https://github.com/trait-objects/entry"),
            None,
        )
        .await
        .expect("Failed to create submission");

        let mut active_model: db::models::submission::ActiveModel = submission.into();
        active_model.locked = Set(true);
        active_model.update(db).await.expect("Failed to lock");

        let req_body = json!({"overview": "Post-deadline edit"});
        let req = Request::builder()
            .method("PUT")
            .uri(format!("/api/team/rounds/{}/submission", data.round.id))
            .header("Authorization", format!("Bearer {}", token))
            .header("Content-Type", "application/json")
            .body(Body::from(serde_json::to_vec(&req_body).unwrap()))
            .unwrap();

        let response = app.oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::LOCKED);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["message"], "Submission is locked");
    }

    /// Test Case: A team token without linkage cannot use the portal
    #[tokio::test]
    async fn test_team_portal_requires_linkage() {
        let (app, app_state) = make_test_app().await;
        let data = setup_test_data(app_state.db()).await;

        let (token, _) = generate_jwt(data.team_user.id, data.team_user.role, None);
        let req = Request::builder()
            .method("GET")
            .uri("/api/team/rounds/active")
            .header("Authorization", format!("Bearer {}", token))
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["message"], "No team linkage");
    }

    /// Test Case: A judge token cannot use the team portal
    #[tokio::test]
    async fn test_team_portal_rejects_judge_role() {
        let (app, app_state) = make_test_app().await;
        let db = app_state.db();
        let _data = setup_test_data(db).await;

        let judge_user = UserModel::create(db, "judge", "judge@test.com", "password", Role::Judge, None)
            .await
            .expect("Failed to create judge user");

        let (token, _) = generate_jwt(judge_user.id, judge_user.role, None);
        let req = Request::builder()
            .method("GET")
            .uri("/api/team/rounds/active")
            .header("Authorization", format!("Bearer {}", token))
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["message"], "Team access required");
    }

    /// Test Case: Active round resolution
    #[tokio::test]
    async fn test_active_round() {
        let (app, app_state) = make_test_app().await;
        let data = setup_test_data(app_state.db()).await;
        let db = app_state.db();
        let token = team_token(&data);

        // No active round yet.
        let req = Request::builder()
            .method("GET")
            .uri("/api/team/rounds/active")
            .header("Authorization", format!("Bearer {}", token))
            .body(Body::empty())
            .unwrap();
        let response = app.clone().oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let mut active_model: db::models::round::ActiveModel = data.round.clone().into();
        active_model.is_active = Set(true);
        active_model.update(db).await.expect("Failed to activate");

        let req = Request::builder()
            .method("GET")
            .uri("/api/team/rounds/active")
            .header("Authorization", format!("Bearer {}", token))
            .body(Body::empty())
            .unwrap();
        let response = app.oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["data"]["id"], data.round.id);
        assert_eq!(json["data"]["is_active"], true);
    }

    /// Test Case: Final task is hidden until released
    #[tokio::test]
    async fn test_final_task_release_gate() {
        let (app, app_state) = make_test_app().await;
        let data = setup_test_data(app_state.db()).await;
        let db = app_state.db();
        let token = team_token(&data);

        db::models::final_task::Model::create(db, "Grand finale", "Ship it.", None, false)
            .await
            .expect("Failed to create final task");

        let req = Request::builder()
            .method("GET")
            .uri("/api/team/final-task")
            .header("Authorization", format!("Bearer {}", token))
            .body(Body::empty())
            .unwrap();
        let response = app.clone().oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        db::models::final_task::Model::create(
            db,
            "Grand finale",
            "Ship it.",
            Some("https://example.com/brief"),
            true,
        )
        .await
        .expect("Failed to release final task");

        let req = Request::builder()
            .method("GET")
            .uri("/api/team/final-task")
            .header("Authorization", format!("Bearer {}", token))
            .body(Body::empty())
            .unwrap();
        let response = app.oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["data"]["title"], "Grand finale");
        assert_eq!(json["data"]["released"], true);
    }
}
