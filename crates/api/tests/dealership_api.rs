//! HTTP-level integration tests for dealership creation and its role
//! gating.

mod common;

use axum::http::StatusCode;
use common::{body_json, post_json, post_json_auth};
use lotlink_core::roles::{ROLE_DEALERSHIP, ROLE_SALESPERSON};
use lotlink_db::repositories::DealershipRepo;
use sqlx::PgPool;

/// Create a dealership user and return a logged-in bearer token.
async fn dealership_token(pool: &PgPool, email: &str) -> String {
    let (_user, password) = common::create_test_user(pool, email, ROLE_DEALERSHIP).await;
    let app = common::build_test_app(pool.clone());
    common::login_user(app, email, &password, "dealership").await
}

/// Successful creation returns 201 with the new dealership id.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_dealership_success(pool: PgPool) {
    let token = dealership_token(&pool, "owner@lot.com").await;
    let app = common::build_test_app(pool.clone());

    let body = serde_json::json!({
        "legal_name": "Maple Motors Inc.",
        "province": "ON",
        "dealer_license_number": "OMVIC-4821"
    });
    let response = post_json_auth(app, "/api/dealership/create", body, &token).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["message"], "Dealership created");
    let id = json["dealership_id"].as_i64().expect("dealership_id must be numeric");

    let dealership = DealershipRepo::find_by_id(&pool, id)
        .await
        .expect("lookup should succeed")
        .expect("created dealership must exist");
    assert_eq!(dealership.legal_name, "Maple Motors Inc.");
    assert_eq!(dealership.province, "ON");
    assert_eq!(dealership.dealer_license_number, "OMVIC-4821");
    assert_eq!(dealership.operating_name, None);
}

/// Optional basic-info fields are persisted when provided.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_persists_optional_fields(pool: PgPool) {
    let token = dealership_token(&pool, "owner2@lot.com").await;
    let app = common::build_test_app(pool.clone());

    let body = serde_json::json!({
        "legal_name": "Prairie Auto Group Ltd.",
        "province": "AB",
        "dealer_license_number": "AMVIC-0077",
        "operating_name": "Prairie Auto",
        "business_type": "Independent",
        "primary_contact_name": "Sam Lee",
        "phone": "403-555-0101",
        "website": "https://prairieauto.example",
        "logo_url": "https://cdn.example/logo.png"
    });
    let response = post_json_auth(app, "/api/dealership/create", body, &token).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    let id = json["dealership_id"].as_i64().unwrap();
    let dealership = DealershipRepo::find_by_id(&pool, id)
        .await
        .expect("lookup should succeed")
        .expect("created dealership must exist");
    assert_eq!(dealership.operating_name.as_deref(), Some("Prairie Auto"));
    assert_eq!(dealership.business_type.as_deref(), Some("Independent"));
    assert_eq!(dealership.primary_contact_name.as_deref(), Some("Sam Lee"));
    assert_eq!(dealership.phone.as_deref(), Some("403-555-0101"));
}

/// Missing any mandatory field returns 400.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_missing_required_fields(pool: PgPool) {
    let token = dealership_token(&pool, "owner3@lot.com").await;
    let app = common::build_test_app(pool);

    for body in [
        serde_json::json!({ "province": "ON", "dealer_license_number": "OMVIC-1" }),
        serde_json::json!({ "legal_name": "X Motors", "dealer_license_number": "OMVIC-1" }),
        serde_json::json!({ "legal_name": "X Motors", "province": "ON" }),
        serde_json::json!({ "legal_name": "  ", "province": "ON", "dealer_license_number": "OMVIC-1" }),
    ] {
        let response = post_json_auth(app.clone(), "/api/dealership/create", body, &token).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}

/// A missing token returns 401.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_requires_auth(pool: PgPool) {
    let app = common::build_test_app(pool);

    let body = serde_json::json!({
        "legal_name": "Ghost Motors",
        "province": "ON",
        "dealer_license_number": "OMVIC-0"
    });
    let response = post_json(app, "/api/dealership/create", body).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

/// A salesperson token is rejected with 403 and nothing is persisted.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_salesperson_token_is_forbidden(pool: PgPool) {
    let (user, password) = common::create_test_user(&pool, "sp@lot.com", ROLE_SALESPERSON).await;
    let app = common::build_test_app(pool.clone());
    let token = common::login_user(app.clone(), "sp@lot.com", &password, "salesperson").await;

    let body = serde_json::json!({
        "legal_name": "Forbidden Motors",
        "province": "ON",
        "dealer_license_number": "OMVIC-9"
    });
    let response = post_json_auth(app, "/api/dealership/create", body, &token).await;

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    let owned = DealershipRepo::list_by_owner(&pool, user.id)
        .await
        .expect("listing should succeed");
    assert!(owned.is_empty(), "a forbidden request must not create a row");
}

/// The schema allows several dealerships per owner.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_multiple_dealerships_per_owner(pool: PgPool) {
    let (user, password) = common::create_test_user(&pool, "multi@lot.com", ROLE_DEALERSHIP).await;
    let app = common::build_test_app(pool.clone());
    let token = common::login_user(app.clone(), "multi@lot.com", &password, "dealership").await;

    for name in ["First Lot Inc.", "Second Lot Inc."] {
        let body = serde_json::json!({
            "legal_name": name,
            "province": "BC",
            "dealer_license_number": "VSA-1000"
        });
        let response = post_json_auth(app.clone(), "/api/dealership/create", body, &token).await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let owned = DealershipRepo::list_by_owner(&pool, user.id)
        .await
        .expect("listing should succeed");
    assert_eq!(owned.len(), 2);
}
