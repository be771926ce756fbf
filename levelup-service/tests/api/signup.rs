use levelup_service::domain::{AuthResponse, TokenKind};
use levelup_service::validation::PASSWORD_POLICY;

use crate::helpers::{error_message, get_random_email, TestApp, VALID_PASSWORD};

#[tokio::test]
async fn should_return_422_if_malformed_input() {
    let app = TestApp::new().await;

    let response = app
        .http_client
        .post(format!("{}/api/auth/signup", app.address))
        .json(&serde_json::json!({ "password": VALID_PASSWORD }))
        .send()
        .await
        .expect("Failed to execute signup request.");

    assert_eq!(response.status().as_u16(), 422);
}

#[tokio::test]
async fn should_return_422_if_invalid_email() {
    let app = TestApp::new().await;

    for email in ["", "not-an-email", "missing-domain@"] {
        let response = app.signup(email, VALID_PASSWORD).await;
        assert_eq!(response.status().as_u16(), 422, "email {:?} was accepted", email);
        assert_eq!(error_message(response).await, "invalid email address");
    }
}

#[tokio::test]
async fn should_return_422_if_weak_password() {
    let app = TestApp::new().await;

    for password in ["", "short1!", "alllowercase!", "NoSpecial123"] {
        let response = app.signup(&get_random_email(), password).await;
        assert_eq!(
            response.status().as_u16(),
            422,
            "password {:?} was accepted",
            password
        );
        assert_eq!(error_message(response).await, PASSWORD_POLICY);
    }
}

#[tokio::test]
async fn should_return_201_with_session_if_valid_input() {
    let app = TestApp::new().await;
    let email = get_random_email();

    let response = app.signup(&email, VALID_PASSWORD).await;

    assert_eq!(response.status().as_u16(), 201);
    let access_cookie = response
        .cookies()
        .find(|cookie| cookie.name() == "access")
        .expect("No access cookie found");
    let access_token = access_cookie.value().to_owned();
    assert!(!access_token.is_empty());

    let body = response
        .json::<AuthResponse>()
        .await
        .expect("Could not deserialize response body to AuthResponse");
    assert_eq!(body.user.email.as_deref(), Some(email.as_str()));
    assert_eq!(body.tokens.access_token, access_token);
    assert!(!body.tokens.refresh_token.is_empty());

    let claims = app
        .state
        .token_service
        .verify(&body.tokens.access_token)
        .expect("issued access token verifies");
    assert_eq!(claims.sub, body.user.id);
    assert_eq!(claims.kind, TokenKind::Access);
}

#[tokio::test]
async fn should_return_409_if_email_already_exists() {
    let app = TestApp::new().await;
    let email = get_random_email();

    let response = app.signup(&email, VALID_PASSWORD).await;
    assert_eq!(response.status().as_u16(), 201);

    let response = app.signup(&email.to_uppercase(), VALID_PASSWORD).await;
    assert_eq!(response.status().as_u16(), 409);
}

#[tokio::test]
async fn should_return_409_for_demo_email() {
    let app = TestApp::new().await;

    let response = app.signup("demo@levelupsolo.net", VALID_PASSWORD).await;

    assert_eq!(response.status().as_u16(), 409);
}
