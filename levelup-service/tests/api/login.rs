use levelup_service::domain::AuthResponse;

use crate::helpers::{error_message, get_random_email, TestApp, VALID_PASSWORD};

#[tokio::test]
async fn should_return_422_if_malformed_email() {
    let app = TestApp::new().await;

    let response = app.login("", VALID_PASSWORD).await;

    assert_eq!(response.status().as_u16(), 422);
}

#[tokio::test]
async fn should_return_422_if_malformed_password() {
    let app = TestApp::new().await;

    let response = app.login(&get_random_email(), "").await;

    assert_eq!(response.status().as_u16(), 422);
}

#[tokio::test]
async fn should_return_401_if_user_not_found() {
    let app = TestApp::new().await;

    let response = app.login(&get_random_email(), VALID_PASSWORD).await;

    assert_eq!(response.status().as_u16(), 401);
    assert_eq!(error_message(response).await, "Incorrect email or password.");
}

#[tokio::test]
async fn should_return_401_if_wrong_password() {
    let app = TestApp::new().await;
    let email = get_random_email();
    assert_eq!(app.signup(&email, VALID_PASSWORD).await.status().as_u16(), 201);

    let response = app.login(&email, "Different123!").await;

    assert_eq!(response.status().as_u16(), 401);
}

#[tokio::test]
async fn should_return_200_with_fresh_session_if_valid_credentials() {
    let app = TestApp::new().await;
    let email = get_random_email();

    let signup = app.signup(&email, VALID_PASSWORD).await;
    assert_eq!(signup.status().as_u16(), 201);
    let signup_body = signup
        .json::<AuthResponse>()
        .await
        .expect("Could not deserialize response body to AuthResponse");

    let response = app.login(&email.to_uppercase(), VALID_PASSWORD).await;

    assert_eq!(response.status().as_u16(), 200);
    let refresh_cookie = response
        .cookies()
        .find(|cookie| cookie.name() == "refresh")
        .expect("No refresh cookie found");
    assert!(!refresh_cookie.value().is_empty());
    assert_eq!(refresh_cookie.path(), Some("/api/auth"));

    let body = response
        .json::<AuthResponse>()
        .await
        .expect("Could not deserialize response body to AuthResponse");
    assert_eq!(body.user.id, signup_body.user.id);
    assert_ne!(body.tokens.access_token, signup_body.tokens.access_token);
}
