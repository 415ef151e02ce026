mod common;

use axum::http::StatusCode;
use common::fixtures::{insert_user, TEST_PASSWORD};
use common::{bearer, create_test_app_state, create_test_server, db_state, test_config};
use http::{HeaderMap, HeaderValue};
use jsonwebtoken::{encode, EncodingKey, Header};
use prescripto_core::security::{Claims, Role, SecurityConfig};
use prescripto_core::services::auth_service::AuthService;
use prescripto_core::AppState;
use prescripto_primitives::error::{ApiError, AuthError};
use prescripto_primitives::models::dtos::auth_dto::{LoginRequest, RegisterRequest};
use serde_json::{json, Value};
use serial_test::serial;
use uuid::Uuid;

fn forged_claims(state: &AppState, exp_offset_secs: i64, audience: &str) -> Claims {
    let now = chrono::Utc::now().timestamp();
    Claims {
        sub: Uuid::new_v4().to_string(),
        exp: now + exp_offset_secs,
        iat: now,
        iss: state.config.jwt_details.jwt_issuer.clone(),
        aud: audience.to_string(),
        jti: Uuid::new_v4().to_string(),
        role: Role::User,
    }
}

fn sign(claims: &Claims, secret: &str) -> String {
    encode(
        &Header::default(),
        claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .unwrap()
}

#[tokio::test]
async fn test_token_round_trip_keeps_subject_and_role() {
    let state = create_test_app_state();
    let user_id = Uuid::new_v4();

    let token = SecurityConfig::create_token(&state, &user_id.to_string(), Role::User).unwrap();
    let claims = SecurityConfig::verify_token(&state, &token).unwrap();

    assert_eq!(claims.user_id().unwrap(), user_id);
    assert_eq!(claims.role, Role::User);
    assert_eq!(claims.iss, "prescripto");
    assert_eq!(claims.aud, "prescripto_api");
    assert!(claims.exp > claims.iat);
}

#[tokio::test]
async fn test_token_signed_with_other_secret_is_rejected() {
    let state = create_test_app_state();
    let claims = forged_claims(&state, 3600, "prescripto_api");
    let token = sign(&claims, "a_completely_different_secret_of_enough_length");

    let result = SecurityConfig::verify_token(&state, &token);
    assert!(matches!(result, Err(AuthError::InvalidToken(_))));
}

#[tokio::test]
async fn test_expired_token_is_rejected() {
    let state = create_test_app_state();
    let claims = forged_claims(&state, -3600, "prescripto_api");
    let token = sign(&claims, common::TEST_JWT_SECRET);

    let result = SecurityConfig::verify_token(&state, &token);
    assert!(matches!(result, Err(AuthError::InvalidToken(_))));
}

#[tokio::test]
async fn test_token_for_other_audience_is_rejected() {
    let state = create_test_app_state();
    let claims = forged_claims(&state, 3600, "someone_else");
    let token = sign(&claims, common::TEST_JWT_SECRET);

    let result = SecurityConfig::verify_token(&state, &token);
    assert!(matches!(result, Err(AuthError::InvalidToken(_))));
}

#[test]
fn test_extract_bearer_token() {
    let mut headers = HeaderMap::new();
    assert!(matches!(
        SecurityConfig::extract_bearer_token(&headers),
        Err(AuthError::MissingHeader)
    ));

    headers.insert(
        http::header::AUTHORIZATION,
        HeaderValue::from_static("Token abc"),
    );
    assert!(matches!(
        SecurityConfig::extract_bearer_token(&headers),
        Err(AuthError::InvalidFormat)
    ));

    headers.insert(http::header::AUTHORIZATION, HeaderValue::from_static("Bearer "));
    assert!(matches!(
        SecurityConfig::extract_bearer_token(&headers),
        Err(AuthError::InvalidFormat)
    ));

    headers.insert(
        http::header::AUTHORIZATION,
        HeaderValue::from_static("Bearer abc.def.ghi"),
    );
    assert_eq!(
        SecurityConfig::extract_bearer_token(&headers).unwrap(),
        "abc.def.ghi"
    );
}

#[tokio::test]
async fn test_register_rejects_missing_details_before_touching_storage() {
    let state = create_test_app_state();
    let payload = RegisterRequest {
        name: "Jane".into(),
        email: String::new(),
        password: "SecurePass123".into(),
    };

    let err = AuthService::register(&state, payload).await.unwrap_err();
    assert!(matches!(err, ApiError::BadRequest(ref m) if m == "Missing Details"));
}

#[tokio::test]
async fn test_register_endpoint_reports_validation_failures_softly() {
    let server = create_test_server(create_test_app_state());

    let weak = server
        .post("/api/user/register")
        .json(&json!({ "name": "Jane", "email": "jane@example.com", "password": "short" }))
        .await;
    weak.assert_status(StatusCode::OK);
    let body: Value = weak.json();
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Enter a strong password");

    let bad_email = server
        .post("/api/user/register")
        .json(&json!({ "name": "Jane", "email": "not-an-email", "password": "SecurePass123" }))
        .await;
    bad_email.assert_status(StatusCode::OK);
    let body: Value = bad_email.json();
    assert_eq!(body["message"], "Enter a valid email");

    let missing = server
        .post("/api/user/register")
        .json(&json!({ "email": "jane@example.com", "password": "SecurePass123" }))
        .await;
    let body: Value = missing.json();
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Missing Details");
}

#[tokio::test]
#[serial]
async fn test_register_login_and_profile_flow() {
    let Some(state) = db_state() else { return };
    let server = create_test_server(state.clone());

    let register = server
        .post("/api/user/register")
        .json(&json!({
            "name": "Jane Doe",
            "email": "  Jane.Doe@Example.com ",
            "password": "SecurePass123"
        }))
        .await;
    register.assert_status_ok();
    let body: Value = register.json();
    assert_eq!(body["success"], true);
    let token = body["token"].as_str().unwrap().to_string();

    let claims = SecurityConfig::verify_token(&state, &token).unwrap();
    assert_eq!(claims.role, Role::User);

    let login = server
        .post("/api/user/login")
        .json(&json!({ "email": "jane.doe@example.com", "password": "SecurePass123" }))
        .await;
    login.assert_status_ok();
    let body: Value = login.json();
    assert_eq!(body["success"], true);

    let profile = server
        .get("/api/user/get-profile")
        .add_header("Authorization", bearer(&token))
        .await;
    profile.assert_status_ok();
    let body: Value = profile.json();
    assert_eq!(body["success"], true);
    assert_eq!(body["userData"]["email"], "jane.doe@example.com");
    assert_eq!(body["userData"]["name"], "Jane Doe");
    assert!(body["userData"].get("password").is_none());
    assert!(body["userData"].get("password_hash").is_none());
}

#[tokio::test]
#[serial]
async fn test_register_duplicate_email_fails() {
    let Some(state) = db_state() else { return };
    let user = {
        let mut conn = state.db.get().unwrap();
        insert_user(&mut conn)
    };

    let payload = RegisterRequest {
        name: "Someone Else".into(),
        email: user.email.to_uppercase(),
        password: "SecurePass123".into(),
    };

    let err = AuthService::register(&state, payload).await.unwrap_err();
    assert!(matches!(err, ApiError::Auth(AuthError::DuplicateEmail)));
    assert_eq!(err.client_message(), "User already exists");
}

#[tokio::test]
#[serial]
async fn test_login_wrong_password_and_unknown_email_look_the_same() {
    let Some(state) = db_state() else { return };
    let user = {
        let mut conn = state.db.get().unwrap();
        insert_user(&mut conn)
    };

    let wrong_password = AuthService::login(
        &state,
        LoginRequest {
            email: user.email.clone(),
            password: "NotThePassword1".into(),
        },
    )
    .await
    .unwrap_err();

    let unknown = AuthService::login(
        &state,
        LoginRequest {
            email: "nobody@example.com".into(),
            password: TEST_PASSWORD.into(),
        },
    )
    .await
    .unwrap_err();

    assert_eq!(wrong_password.client_message(), unknown.client_message());
    assert!(matches!(wrong_password, ApiError::Auth(AuthError::InvalidCredentials)));

    let ok = AuthService::login(
        &state,
        LoginRequest {
            email: user.email.clone(),
            password: TEST_PASSWORD.into(),
        },
    )
    .await
    .unwrap();
    assert!(ok.success);
}

#[tokio::test]
async fn test_admin_login() {
    let server = create_test_server(create_test_app_state());

    let ok = server
        .post("/api/admin/login")
        .json(&json!({ "email": common::ADMIN_EMAIL, "password": common::ADMIN_PASSWORD }))
        .await;
    ok.assert_status_ok();
    let body: Value = ok.json();
    assert_eq!(body["success"], true);

    let state = create_test_app_state();
    let claims = SecurityConfig::verify_token(&state, body["token"].as_str().unwrap()).unwrap();
    assert_eq!(claims.role, Role::Admin);

    let bad = server
        .post("/api/admin/login")
        .json(&json!({ "email": common::ADMIN_EMAIL, "password": "wrong" }))
        .await;
    bad.assert_status_ok();
    let body: Value = bad.json();
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Invalid credentials");
}

#[tokio::test]
async fn test_admin_login_without_admin_configured() {
    let mut config = test_config();
    config.admin_details = None;
    let state = common::state_from_unchecked(config);

    let err = prescripto_core::services::admin_service::AdminService::login(
        &state,
        LoginRequest {
            email: common::ADMIN_EMAIL.into(),
            password: common::ADMIN_PASSWORD.into(),
        },
    )
    .await
    .unwrap_err();

    assert!(matches!(err, ApiError::Auth(AuthError::NotConfigured)));
}
