use chrono::{Duration, Utc};

use levelup_service::domain::{TokenKind, VerifyTokenResponse};

use crate::helpers::{error_message, TestApp};

#[tokio::test]
async fn should_return_200_with_identity_for_valid_token() {
    let app = TestApp::new().await;
    let session = app.signed_up_user().await;

    let response = app.verify_token(&session.tokens.access_token).await;

    assert_eq!(response.status().as_u16(), 200);
    let body = response
        .json::<VerifyTokenResponse>()
        .await
        .expect("Could not deserialize response body to VerifyTokenResponse");
    assert_eq!(body.subject_id, session.user.id);
    assert_eq!(body.email, session.user.email);
    assert_eq!(body.kind, TokenKind::Access);
}

#[tokio::test]
async fn should_report_refresh_kind() {
    let app = TestApp::new().await;
    let session = app.signed_up_user().await;

    let response = app.verify_token(&session.tokens.refresh_token).await;

    assert_eq!(response.status().as_u16(), 200);
    let body = response
        .json::<VerifyTokenResponse>()
        .await
        .expect("Could not deserialize response body to VerifyTokenResponse");
    assert_eq!(body.kind, TokenKind::Refresh);
}

#[tokio::test]
async fn should_return_401_if_missing_token() {
    let app = TestApp::new().await;

    let response = app
        .http_client
        .post(format!("{}/api/auth/verify", app.address))
        .send()
        .await
        .expect("Failed to execute verify token request.");

    assert_eq!(response.status().as_u16(), 401);
    assert_eq!(error_message(response).await, "Token not provided");
}

#[tokio::test]
async fn should_return_401_if_invalid_token() {
    let app = TestApp::new().await;

    let response = app.verify_token("not-a-real-token").await;

    assert_eq!(response.status().as_u16(), 401);
    assert_eq!(error_message(response).await, "Invalid token provided");
}

#[tokio::test]
async fn should_return_401_if_expired_token() {
    let app = TestApp::new().await;
    let stale = app
        .state
        .token_service
        .issue_at("user-42", None, Utc::now() - Duration::days(8))
        .expect("issue");

    let response = app.verify_token(&stale.access_token).await;

    assert_eq!(response.status().as_u16(), 401);
    assert_eq!(error_message(response).await, "Token has expired");
}

#[tokio::test]
async fn should_return_401_if_revoked_token() {
    let app = TestApp::new().await;
    let session = app.signed_up_user().await;

    let response = app.logout(&session.tokens.access_token, None).await;
    assert_eq!(response.status().as_u16(), 200);

    let response = app.verify_token(&session.tokens.access_token).await;

    assert_eq!(response.status().as_u16(), 401);
    assert_eq!(error_message(response).await, "Token has been revoked");
}
