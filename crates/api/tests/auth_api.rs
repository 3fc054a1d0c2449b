//! HTTP-level integration tests for login, registration, and admin
//! user management.
//!
//! Tests cover password login, the token-gated registration flow,
//! single-use verification tokens, and RBAC on the admin endpoints.

mod common;

use axum::http::StatusCode;
use chrono::{Duration, Utc};
use common::{body_json, get_auth, post_json, post_json_auth};
use farrowgate_api::auth::jwt::generate_access_token;
use farrowgate_api::auth::password::hash_password;
use farrowgate_core::otp;
use farrowgate_core::roles::{ROLE_ADMIN, ROLE_CLIENT, ROLE_SALES};
use farrowgate_db::models::user::{CreateUser, User};
use farrowgate_db::repositories::{OtpRepo, UserRepo};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Create a test user directly in the database and return the user row
/// plus the plaintext password used.
async fn create_test_user(pool: &PgPool, username: &str, role: &str) -> (User, String) {
    let password = "test_password_123!";
    let hashed = hash_password(password).expect("hashing should succeed");
    let input = CreateUser {
        name: None,
        username: username.to_string(),
        email: format!("{username}@test.com"),
        password_hash: hashed,
        role: role.to_string(),
    };
    let user = UserRepo::create(pool, &input)
        .await
        .expect("user creation should succeed");
    (user, password.to_string())
}

/// Mint a Bearer token for a user with the test JWT config.
fn token_for(user: &User) -> String {
    let config = common::test_config();
    generate_access_token(user.id, &user.role, &config.jwt).expect("token generation")
}

/// Plant an active OTP record and run the verify endpoint to obtain a
/// registration verification token.
async fn obtain_verification_token(pool: &PgPool, email: &str) -> String {
    let code = "123456";
    let hashed = otp::hash_code(common::TEST_OTP_SECRET, code);
    let now = Utc::now();
    OtpRepo::start(
        pool,
        email,
        "registration",
        &hashed,
        now + Duration::minutes(5),
        now + Duration::seconds(60),
    )
    .await
    .expect("otp start should succeed");

    let app = common::build_test_app(pool.clone());
    let body = serde_json::json!({ "email": email, "purpose": "registration", "code": code });
    let response = post_json(app, "/api/v1/auth/otp/verify", body).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    json["verification_token"].as_str().unwrap().to_string()
}

// ---------------------------------------------------------------------------
// Login
// ---------------------------------------------------------------------------

/// Successful login returns 200 with access_token, expires_in, and user info.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_login_success(pool: PgPool) {
    let (user, password) = create_test_user(&pool, "loginuser", ROLE_CLIENT).await;
    let app = common::build_test_app(pool);

    let body = serde_json::json!({ "username": "loginuser", "password": password });
    let response = post_json(app, "/api/v1/auth/login", body).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert!(json["access_token"].is_string(), "response must contain access_token");
    assert!(json["expires_in"].is_number(), "response must contain expires_in");
    assert_eq!(json["user"]["id"], user.id);
    assert_eq!(json["user"]["username"], "loginuser");
    assert_eq!(json["user"]["role"], "client");
}

/// Login with an incorrect password returns 401.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_login_wrong_password(pool: PgPool) {
    let (_user, _password) = create_test_user(&pool, "wrongpw", ROLE_CLIENT).await;
    let app = common::build_test_app(pool);

    let body = serde_json::json!({ "username": "wrongpw", "password": "incorrect_password" });
    let response = post_json(app, "/api/v1/auth/login", body).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

/// Login with a nonexistent username returns 401.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_login_nonexistent_user(pool: PgPool) {
    let app = common::build_test_app(pool);

    let body = serde_json::json!({ "username": "ghost", "password": "whatever" });
    let response = post_json(app, "/api/v1/auth/login", body).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

// ---------------------------------------------------------------------------
// Registration
// ---------------------------------------------------------------------------

/// Registration with a verified email succeeds and the account can log in.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_register_with_verified_email(pool: PgPool) {
    let token = obtain_verification_token(&pool, "newclient@test.com").await;

    let app = common::build_test_app(pool.clone());
    let body = serde_json::json!({
        "username": "newclient",
        "email": "newclient@test.com",
        "password": "strong_password_1",
        "verification_token": token,
    });
    let response = post_json(app, "/api/v1/auth/register", body).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["username"], "newclient");
    assert_eq!(json["role"], "client");

    let app = common::build_test_app(pool);
    let body = serde_json::json!({ "username": "newclient", "password": "strong_password_1" });
    let response = post_json(app, "/api/v1/auth/login", body).await;
    assert_eq!(response.status(), StatusCode::OK);
}

/// An email typed with mixed case registers against the token minted
/// for its lowercase form, and the account is stored lowercase.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_register_mixed_case_email(pool: PgPool) {
    // The OTP flow stores the normalized address; submit the mixed-case
    // form to both endpoints the way a user retyping it would.
    let code = "123456";
    let hashed = otp::hash_code(common::TEST_OTP_SECRET, code);
    let now = Utc::now();
    OtpRepo::start(
        &pool,
        "new.client@test.com",
        "registration",
        &hashed,
        now + Duration::minutes(5),
        now + Duration::seconds(60),
    )
    .await
    .expect("otp start should succeed");

    let app = common::build_test_app(pool.clone());
    let body = serde_json::json!({
        "email": "New.Client@Test.com",
        "purpose": "registration",
        "code": code,
    });
    let response = post_json(app, "/api/v1/auth/otp/verify", body).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let token = body_json(response).await["verification_token"]
        .as_str()
        .unwrap()
        .to_string();

    let app = common::build_test_app(pool);
    let body = serde_json::json!({
        "username": "mixedcase",
        "email": "New.Client@Test.com",
        "password": "strong_password_1",
        "verification_token": token,
    });
    let response = post_json(app, "/api/v1/auth/register", body).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["email"], "new.client@test.com");
}

/// Registration with a garbage verification token returns 400.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_register_with_invalid_token(pool: PgPool) {
    let app = common::build_test_app(pool);

    let body = serde_json::json!({
        "username": "nobody",
        "email": "nobody@test.com",
        "password": "strong_password_1",
        "verification_token": "not-a-real-token",
    });
    let response = post_json(app, "/api/v1/auth/register", body).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

/// A verification token is consumed on first use; replaying it fails.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_verification_token_is_single_use(pool: PgPool) {
    let token = obtain_verification_token(&pool, "once@test.com").await;

    let app = common::build_test_app(pool.clone());
    let body = serde_json::json!({
        "username": "firstuse",
        "email": "once@test.com",
        "password": "strong_password_1",
        "verification_token": token.clone(),
    });
    let response = post_json(app, "/api/v1/auth/register", body).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    // Second attempt with the same token (different username so the
    // uniqueness pre-check does not mask the token check).
    let app = common::build_test_app(pool);
    let body = serde_json::json!({
        "username": "seconduse",
        "email": "other@test.com",
        "password": "strong_password_1",
        "verification_token": token,
    });
    let response = post_json(app, "/api/v1/auth/register", body).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

/// A taken username is rejected with 409 before the token is consumed.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_register_taken_username_preserves_token(pool: PgPool) {
    create_test_user(&pool, "taken", ROLE_CLIENT).await;
    let token = obtain_verification_token(&pool, "fresh@test.com").await;

    let app = common::build_test_app(pool.clone());
    let body = serde_json::json!({
        "username": "taken",
        "email": "fresh@test.com",
        "password": "strong_password_1",
        "verification_token": token.clone(),
    });
    let response = post_json(app, "/api/v1/auth/register", body).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);

    // The token survived the conflict and still works.
    let app = common::build_test_app(pool);
    let body = serde_json::json!({
        "username": "untaken",
        "email": "fresh@test.com",
        "password": "strong_password_1",
        "verification_token": token,
    });
    let response = post_json(app, "/api/v1/auth/register", body).await;
    assert_eq!(response.status(), StatusCode::CREATED);
}

// ---------------------------------------------------------------------------
// Admin user management + RBAC
// ---------------------------------------------------------------------------

/// An admin can create a staff account.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_admin_creates_sales_account(pool: PgPool) {
    let (admin, _) = create_test_user(&pool, "boss", ROLE_ADMIN).await;
    let app = common::build_test_app(pool);

    let body = serde_json::json!({
        "username": "seller",
        "email": "seller@test.com",
        "password": "strong_password_1",
        "role": "sales",
    });
    let response = post_json_auth(app, "/api/v1/admin/users", body, &token_for(&admin)).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["role"], "sales");
    assert!(json.get("password_hash").is_none(), "hash must never be exposed");
}

/// The admin role cannot be assigned through the API.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_admin_role_not_assignable(pool: PgPool) {
    let (admin, _) = create_test_user(&pool, "boss", ROLE_ADMIN).await;
    let app = common::build_test_app(pool);

    let body = serde_json::json!({
        "username": "wannabe",
        "email": "wannabe@test.com",
        "password": "strong_password_1",
        "role": "admin",
    });
    let response = post_json_auth(app, "/api/v1/admin/users", body, &token_for(&admin)).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

/// Non-admin callers are rejected from admin endpoints with 403.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_admin_endpoints_forbidden_for_staff(pool: PgPool) {
    let (sales, _) = create_test_user(&pool, "seller", ROLE_SALES).await;
    let app = common::build_test_app(pool);

    let response = get_auth(app, "/api/v1/admin/users", &token_for(&sales)).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

/// Unauthenticated requests to protected endpoints get 401.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_missing_token_is_unauthorized(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = common::get(app, "/api/v1/admin/users").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
