#[cfg(test)]
mod tests {
    use crate::helpers::app::make_test_app;
    use api::auth::generate_jwt;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use db::models::{
        judge::Model as JudgeModel, judge_assignment::Model as AssignmentModel,
        round::Model as RoundModel, team::Model as TeamModel, user::Model as UserModel, user::Role,
    };
    use serde_json::json;
    use tower::ServiceExt;

    struct TestData {
        judge_user: UserModel,
        judge: JudgeModel,
        team: TeamModel,
        other_team: TeamModel,
        round: RoundModel,
    }

    async fn setup_test_data(db: &sea_orm::DatabaseConnection) -> TestData {
        let judge_user = UserModel::create(db, "judge", "judge@test.com", "password", Role::Judge, None)
            .await
            .expect("Failed to create judge user");
        let judge = JudgeModel::create(db, judge_user.id, "ai")
            .await
            .expect("Failed to create judge profile");
        let team = TeamModel::create(db, "borrow-checkers")
            .await
            .expect("Failed to create team");
        let other_team = TeamModel::create(db, "lifetimes")
            .await
            .expect("Failed to create other team");
        let round = RoundModel::create(
            db,
            1,
            "2026-08-01T09:00:00Z".parse().unwrap(),
            "2026-08-01T18:00:00Z".parse().unwrap(),
        )
        .await
        .expect("Failed to create round");

        AssignmentModel::create(db, judge.id, team.id, round.id)
            .await
            .expect("Failed to assign judge");

        TestData {
            judge_user,
            judge,
            team,
            other_team,
            round,
        }
    }

    /// Test Case: Assigned teams listing contains only assigned teams
    #[tokio::test]
    async fn test_assigned_teams() {
        let (app, app_state) = make_test_app().await;
        let data = setup_test_data(app_state.db()).await;

        let (token, _) = generate_jwt(data.judge_user.id, data.judge_user.role, None);
        let req = Request::builder()
            .method("GET")
            .uri(format!("/api/judge/rounds/{}/teams", data.round.id))
            .header("Authorization", format!("Bearer {}", token))
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        let teams = json["data"].as_array().unwrap();
        assert_eq!(teams.len(), 1);
        assert_eq!(teams[0]["id"], data.team.id);
    }

    /// Test Case: Score creation succeeds for an assigned team
    #[tokio::test]
    async fn test_create_score_success() {
        let (app, app_state) = make_test_app().await;
        let data = setup_test_data(app_state.db()).await;

        let (token, _) = generate_jwt(data.judge_user.id, data.judge_user.role, None);
        let req_body = json!({
            "team_id": data.team.id,
            "round_id": data.round.id,
            "value": 87,
            "remarks": "Strong demo, thin tests"
        });
        let req = Request::builder()
            .method("POST")
            .uri("/api/judge/scores")
            .header("Authorization", format!("Bearer {}", token))
            .header("Content-Type", "application/json")
            .body(Body::from(serde_json::to_vec(&req_body).unwrap()))
            .unwrap();

        let response = app.oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["success"], true);
        assert_eq!(json["data"]["judge_id"], data.judge.id);
        assert_eq!(json["data"]["value"], 87);
    }

    /// Test Case: Second score for the same (judge, team, round) conflicts
    #[tokio::test]
    async fn test_create_score_duplicate() {
        let (app, app_state) = make_test_app().await;
        let data = setup_test_data(app_state.db()).await;

        let (token, _) = generate_jwt(data.judge_user.id, data.judge_user.role, None);
        let req_body = json!({
            "team_id": data.team.id,
            "round_id": data.round.id,
            "value": 87
        });

        let req1 = Request::builder()
            .method("POST")
            .uri("/api/judge/scores")
            .header("Authorization", format!("Bearer {}", token))
            .header("Content-Type", "application/json")
            .body(Body::from(serde_json::to_vec(&req_body).unwrap()))
            .unwrap();
        let response1 = app.clone().oneshot(req1).await.unwrap();
        assert_eq!(response1.status(), StatusCode::CREATED);

        let req2 = Request::builder()
            .method("POST")
            .uri("/api/judge/scores")
            .header("Authorization", format!("Bearer {}", token))
            .header("Content-Type", "application/json")
            .body(Body::from(serde_json::to_vec(&req_body).unwrap()))
            .unwrap();
        let response2 = app.oneshot(req2).await.unwrap();
        assert_eq!(response2.status(), StatusCode::CONFLICT);

        let body = axum::body::to_bytes(response2.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(
            json["message"],
            "A score for this judge, team and round already exists"
        );
    }

    /// Test Case: Scoring a team the judge is not assigned to
    #[tokio::test]
    async fn test_create_score_unassigned_team() {
        let (app, app_state) = make_test_app().await;
        let data = setup_test_data(app_state.db()).await;

        let (token, _) = generate_jwt(data.judge_user.id, data.judge_user.role, None);
        let req_body = json!({
            "team_id": data.other_team.id,
            "round_id": data.round.id,
            "value": 50
        });
        let req = Request::builder()
            .method("POST")
            .uri("/api/judge/scores")
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
        assert_eq!(json["message"], "Not assigned to this team for this round");
    }

    /// Test Case: A judge account without a judge profile is rejected
    #[tokio::test]
    async fn test_score_requires_judge_profile() {
        let (app, app_state) = make_test_app().await;
        let data = setup_test_data(app_state.db()).await;
        let db = app_state.db();

        let profileless = UserModel::create(db, "judge2", "judge2@test.com", "password", Role::Judge, None)
            .await
            .expect("Failed to create user");

        let (token, _) = generate_jwt(profileless.id, profileless.role, None);
        let req_body = json!({
            "team_id": data.team.id,
            "round_id": data.round.id,
            "value": 60
        });
        let req = Request::builder()
            .method("POST")
            .uri("/api/judge/scores")
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
        assert_eq!(json["message"], "No judge profile for this account");
    }

    /// Test Case: Updating an own score
    #[tokio::test]
    async fn test_update_own_score() {
        let (app, app_state) = make_test_app().await;
        let data = setup_test_data(app_state.db()).await;
        let db = app_state.db();

        let score = db::models::score::Model::create(
            db,
            data.judge.id,
            data.team.id,
            data.round.id,
            70,
            None,
        )
        .await
        .expect("Failed to create score");

        let (token, _) = generate_jwt(data.judge_user.id, data.judge_user.role, None);
        let req_body = json!({"value": 92, "remarks": "Revised after demo"});
        let req = Request::builder()
            .method("PUT")
            .uri(format!("/api/judge/scores/{}", score.id))
            .header("Authorization", format!("Bearer {}", token))
            .header("Content-Type", "application/json")
            .body(Body::from(serde_json::to_vec(&req_body).unwrap()))
            .unwrap();

        let response = app.oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["data"]["value"], 92);
        assert_eq!(json["data"]["remarks"], "Revised after demo");
    }
}
