use std::env;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "User Service API",
        version = "1.0.0",
        description = "User management API over MongoDB. CRUD on the `users` collection with bcrypt password hashing."
    ),
    paths(
        // Users
        crate::api::users::create_user,
        crate::api::users::list_users,
        crate::api::users::get_user,
        crate::api::users::update_user,
        crate::api::users::delete_user,

        // Health
        crate::api::health::health_check,
    ),
    components(
        schemas(
            crate::services::user_service::UserPayload,
            crate::services::user_service::CreateUserResponse,
            crate::services::user_service::MessageResponse,
            crate::models::UserResponse,
            crate::api::health::HealthResponse,
        )
    ),
    tags(
        (name = "Users", description = "User management endpoints. Create, list, fetch, update and delete users."),
        (name = "Health", description = "Health check endpoint for monitoring service status."),
    ),
    modifiers(&DocInfoAddon)
)]
pub struct ApiDoc;

/// Overrides the OpenAPI title/description from the environment, keeping
/// the derive-time values as static defaults.
struct DocInfoAddon;

impl utoipa::Modify for DocInfoAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Ok(title) = env::var("SWAGGER_TITLE") {
            openapi.info.title = title;
        }
        if let Ok(description) = env::var("SWAGGER_DESCRIPTION") {
            openapi.info.description = Some(description);
        }
    }
}
