use actix_web::{web, HttpResponse, Responder, ResponseError};
use crate::{
    database::MongoDB,
    services::user_service::{self, CreateUserResponse, MessageResponse, UserPayload},
};
use crate::models::UserResponse;

#[utoipa::path(
    post,
    path = "/api/users",
    tag = "Users",
    request_body = UserPayload,
    responses(
        (status = 201, description = "User created successfully", body = CreateUserResponse),
        (status = 400, description = "Missing fields")
    )
)]
pub async fn create_user(
    db: web::Data<MongoDB>,
    payload: web::Json<UserPayload>,
) -> impl Responder {
    log::info!("📝 POST /users");

    match user_service::create_user(&db, payload.into_inner()).await {
        Ok(response) => {
            log::info!("✅ User created: {}", response.id);
            HttpResponse::Created().json(response)
        }
        Err(e) => {
            log::warn!("❌ Failed to create user: {}", e);
            e.error_response()
        }
    }
}

#[utoipa::path(
    get,
    path = "/api/users",
    tag = "Users",
    responses(
        (status = 200, description = "A list of users", body = [UserResponse])
    )
)]
pub async fn list_users(db: web::Data<MongoDB>) -> impl Responder {
    log::info!("📋 GET /users");

    match user_service::list_users(&db).await {
        Ok(users) => {
            log::info!("✅ Listed {} users", users.len());
            HttpResponse::Ok().json(users)
        }
        Err(e) => {
            log::error!("❌ Failed to list users: {}", e);
            e.error_response()
        }
    }
}

#[utoipa::path(
    get,
    path = "/api/users/{id}",
    tag = "Users",
    params(
        ("id" = String, Path, description = "User id (24 hex characters)")
    ),
    responses(
        (status = 200, description = "User found", body = UserResponse),
        (status = 400, description = "Invalid ID format"),
        (status = 404, description = "User not found")
    )
)]
pub async fn get_user(db: web::Data<MongoDB>, id: web::Path<String>) -> impl Responder {
    log::info!("🔍 GET /users/{}", id);

    match user_service::get_user(&db, &id).await {
        Ok(user) => HttpResponse::Ok().json(user),
        Err(e) => {
            log::warn!("❌ Failed to get user {}: {}", id, e);
            e.error_response()
        }
    }
}

#[utoipa::path(
    put,
    path = "/api/users/{id}",
    tag = "Users",
    params(
        ("id" = String, Path, description = "User id (24 hex characters)")
    ),
    request_body = UserPayload,
    responses(
        (status = 200, description = "User updated successfully", body = MessageResponse),
        (status = 400, description = "Missing required fields or invalid id"),
        (status = 404, description = "User not found")
    )
)]
pub async fn update_user(
    db: web::Data<MongoDB>,
    id: web::Path<String>,
    payload: web::Json<UserPayload>,
) -> impl Responder {
    log::info!("🔧 PUT /users/{}", id);

    match user_service::update_user(&db, &id, payload.into_inner()).await {
        Ok(response) => {
            log::info!("✅ User updated: {}", id);
            HttpResponse::Ok().json(response)
        }
        Err(e) => {
            log::warn!("❌ Failed to update user {}: {}", id, e);
            e.error_response()
        }
    }
}

#[utoipa::path(
    delete,
    path = "/api/users/{id}",
    tag = "Users",
    params(
        ("id" = String, Path, description = "User id (24 hex characters)")
    ),
    responses(
        (status = 200, description = "User deleted successfully", body = MessageResponse),
        (status = 400, description = "Invalid ID format"),
        (status = 404, description = "User not found")
    )
)]
pub async fn delete_user(db: web::Data<MongoDB>, id: web::Path<String>) -> impl Responder {
    log::info!("🗑️ DELETE /users/{}", id);

    match user_service::delete_user(&db, &id).await {
        Ok(response) => {
            log::info!("✅ User deleted: {}", id);
            HttpResponse::Ok().json(response)
        }
        Err(e) => {
            log::warn!("❌ Failed to delete user {}: {}", id, e);
            e.error_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};

    #[actix_rt::test]
    #[ignore] // Requires MongoDB to be running
    async fn test_http_crud_contract() {
        dotenv::dotenv().ok();
        let uri = std::env::var("MONGO_URI")
            .unwrap_or_else(|_| "mongodb://localhost:27017/user_db_test".to_string());
        let db = MongoDB::new(&uri).await.expect("MongoDB must be running");

        let app = test::init_service(
            App::new().app_data(web::Data::new(db)).service(
                web::scope("/api")
                    .route("/users", web::post().to(create_user))
                    .route("/users", web::get().to(list_users))
                    .route("/users/{id}", web::get().to(get_user))
                    .route("/users/{id}", web::put().to(update_user))
                    .route("/users/{id}", web::delete().to(delete_user)),
            ),
        )
        .await;

        // Missing field -> 400
        let req = test::TestRequest::post()
            .uri("/api/users")
            .set_json(serde_json::json!({
                "name": "Shipra",
                "email": "shipra@example.com"
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "Missing fields");

        // Create -> 201 with a 24-hex id
        let req = test::TestRequest::post()
            .uri("/api/users")
            .set_json(serde_json::json!({
                "name": "Shipra",
                "email": "shipra@example.com",
                "pwd": "password123"
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "User created successfully");
        let id = body["id"].as_str().unwrap().to_string();
        assert_eq!(id.len(), 24);

        // Get -> 200, fields echoed, password hashed
        let req = test::TestRequest::get()
            .uri(&format!("/api/users/{}", id))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["_id"], id.as_str());
        assert_eq!(body["name"], "Shipra");
        assert_eq!(body["email"], "shipra@example.com");
        assert_ne!(body["password"], "password123");

        // List includes the record
        let req = test::TestRequest::get().uri("/api/users").to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert!(body
            .as_array()
            .unwrap()
            .iter()
            .any(|u| u["_id"] == id.as_str()));

        // Structurally invalid id -> 400, not a server error
        let req = test::TestRequest::delete()
            .uri("/api/users/not-a-valid-id")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "Invalid ID format");

        // Delete -> 200, then 404 on repeat, and get is 404 too
        let req = test::TestRequest::delete()
            .uri(&format!("/api/users/{}", id))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let req = test::TestRequest::delete()
            .uri(&format!("/api/users/{}", id))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let req = test::TestRequest::get()
            .uri(&format!("/api/users/{}", id))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}
