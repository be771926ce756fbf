use reqwest::{Client, Response};
use serde::Serialize;
use serde_json::{json, Value};
use tokio::net::TcpListener;
use tokio::spawn;
use uuid::Uuid;

use levelup_service::app_router;
use levelup_service::app_state::AppState;
use levelup_service::domain::{AuthResponse, LoginRequestBody, SignupRequestBody};
use levelup_service::utils::Config;

pub const TEST_SECRET: &str = "integration-test-secret";
pub const VALID_PASSWORD: &str = "Password123!";

pub struct TestApp {
    pub address: String,
    pub http_client: Client,
    pub state: AppState,
}

impl TestApp {
    pub async fn new() -> Self {
        Self::with_config(Config::with_secret(TEST_SECRET)).await
    }

    pub async fn with_config(config: Config) -> Self {
        let state = AppState::in_memory(config).expect("failed to build app state");
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed binding to an ephemeral port");

        let port = listener.local_addr().unwrap().port();
        let address = format!("http://127.0.0.1:{}", port);

        let server = axum::serve(listener, app_router(state.clone()));

        spawn(async move {
            if let Err(e) = server.await {
                eprintln!("Test server error: {}", e);
            }
        });

        TestApp {
            address,
            http_client: Client::new(),
            state,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", &self.address, path)
    }

    pub async fn get_health(&self) -> Response {
        self.http_client
            .get(self.url("/health"))
            .send()
            .await
            .expect("Failed to execute health request.")
    }

    pub async fn signup(&self, email: &str, password: &str) -> Response {
        let body = SignupRequestBody {
            email: email.to_owned(),
            password: password.to_owned(),
        };

        self.http_client
            .post(self.url("/api/auth/signup"))
            .json(&body)
            .send()
            .await
            .expect("Failed to execute signup request.")
    }

    pub async fn login(&self, email: &str, password: &str) -> Response {
        let body = LoginRequestBody {
            email: email.to_owned(),
            password: password.to_owned(),
        };

        self.http_client
            .post(self.url("/api/auth/login"))
            .json(&body)
            .send()
            .await
            .expect("Failed to execute login request.")
    }

    pub async fn demo_login(&self) -> Response {
        self.http_client
            .post(self.url("/api/auth/demo"))
            .send()
            .await
            .expect("Failed to execute demo login request.")
    }

    pub async fn refresh(&self, refresh_token: &str) -> Response {
        self.http_client
            .post(self.url("/api/auth/refresh"))
            .json(&json!({ "refreshToken": refresh_token }))
            .send()
            .await
            .expect("Failed to execute refresh request.")
    }

    pub async fn verify_token(&self, token: &str) -> Response {
        self.http_client
            .post(self.url("/api/auth/verify"))
            .bearer_auth(token)
            .send()
            .await
            .expect("Failed to execute verify token request.")
    }

    pub async fn logout(&self, access_token: &str, refresh_token: Option<&str>) -> Response {
        self.http_client
            .post(self.url("/api/auth/logout"))
            .bearer_auth(access_token)
            .json(&json!({ "refreshToken": refresh_token }))
            .send()
            .await
            .expect("Failed to execute logout request.")
    }

    pub async fn get(&self, path: &str, token: &str) -> Response {
        self.http_client
            .get(self.url(path))
            .bearer_auth(token)
            .send()
            .await
            .expect("Failed to execute GET request.")
    }

    pub async fn post<B: Serialize>(&self, path: &str, token: &str, body: &B) -> Response {
        self.http_client
            .post(self.url(path))
            .bearer_auth(token)
            .json(body)
            .send()
            .await
            .expect("Failed to execute POST request.")
    }

    pub async fn put<B: Serialize>(&self, path: &str, token: &str, body: &B) -> Response {
        self.http_client
            .put(self.url(path))
            .bearer_auth(token)
            .json(body)
            .send()
            .await
            .expect("Failed to execute PUT request.")
    }

    pub async fn delete(&self, path: &str, token: &str) -> Response {
        self.http_client
            .delete(self.url(path))
            .bearer_auth(token)
            .send()
            .await
            .expect("Failed to execute DELETE request.")
    }

    /// Sign up a fresh user and return the session it was given.
    pub async fn signed_up_user(&self) -> AuthResponse {
        let response = self.signup(&get_random_email(), VALID_PASSWORD).await;
        assert_eq!(response.status().as_u16(), 201);
        response
            .json::<AuthResponse>()
            .await
            .expect("Could not deserialize response body to AuthResponse")
    }

    pub async fn demo_session(&self) -> AuthResponse {
        let response = self.demo_login().await;
        assert_eq!(response.status().as_u16(), 200);
        response
            .json::<AuthResponse>()
            .await
            .expect("Could not deserialize response body to AuthResponse")
    }
}

pub fn get_random_email() -> String {
    format!("{}@example.com", Uuid::new_v4())
}

pub async fn error_message(response: Response) -> String {
    let body: Value = response
        .json()
        .await
        .expect("Could not deserialize error body");
    body["error"]
        .as_str()
        .expect("error body has no message")
        .to_owned()
}
