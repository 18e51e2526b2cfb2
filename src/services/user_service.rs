// ==================== USER MANAGEMENT ====================
// CRUD sobre a collection `users` no MongoDB.
// Senhas chegam em texto plano no campo `pwd` e são salvas como hash bcrypt.

use crate::{
    database::MongoDB,
    error::UserServiceError,
    models::{User, UserId, UserResponse},
};
use bcrypt::{hash, DEFAULT_COST};
use futures::stream::StreamExt;
use mongodb::bson::doc;
use serde::{Deserialize, Serialize};

const USERS_COLLECTION: &str = "users";

// ==================== REQUEST/RESPONSE MODELS ====================

/// Body for create and update. All three fields are required; only
/// presence is checked (an empty string passes).
#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct UserPayload {
    #[schema(example = "Shipra")]
    pub name: Option<String>,
    #[schema(example = "shipra@example.com")]
    pub email: Option<String>,
    #[schema(example = "password123")]
    pub pwd: Option<String>,
}

impl UserPayload {
    fn require_fields(
        &self,
        message: &'static str,
    ) -> Result<(&str, &str, &str), UserServiceError> {
        match (&self.name, &self.email, &self.pwd) {
            (Some(name), Some(email), Some(pwd)) => {
                Ok((name.as_str(), email.as_str(), pwd.as_str()))
            }
            _ => Err(UserServiceError::Validation(message)),
        }
    }
}

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct CreateUserResponse {
    #[schema(example = "User created successfully")]
    pub message: String,
    #[schema(example = "64f8d23d5aa1e45e76892abc")]
    pub id: String,
}

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

// ==================== SERVICE FUNCTIONS ====================

fn hash_password(pwd: &str) -> Result<String, UserServiceError> {
    Ok(hash(pwd, DEFAULT_COST)?)
}

/// POST /users - Cria um usuário com senha hasheada
pub async fn create_user(
    db: &MongoDB,
    payload: UserPayload,
) -> Result<CreateUserResponse, UserServiceError> {
    let (name, email, pwd) = payload.require_fields("Missing fields")?;

    let user = User {
        id: None,
        name: name.to_string(),
        email: email.to_string(),
        password: hash_password(pwd)?,
    };

    let collection = db.collection::<User>(USERS_COLLECTION);
    let result = collection.insert_one(&user).await?;

    let id = result
        .inserted_id
        .as_object_id()
        .map(|oid| oid.to_hex())
        .unwrap_or_default();

    Ok(CreateUserResponse {
        message: "User created successfully".to_string(),
        id,
    })
}

/// GET /users - Lista todos os usuários (sem paginação)
pub async fn list_users(db: &MongoDB) -> Result<Vec<UserResponse>, UserServiceError> {
    let collection = db.collection::<User>(USERS_COLLECTION);

    let mut cursor = collection.find(doc! {}).await?;
    let mut users = Vec::new();

    while let Some(user) = cursor.next().await {
        users.push(UserResponse::from(user?));
    }

    Ok(users)
}

/// GET /users/{id} - Busca um usuário pelo id
pub async fn get_user(db: &MongoDB, id: &str) -> Result<UserResponse, UserServiceError> {
    let user_id = UserId::parse(id)?;

    let collection = db.collection::<User>(USERS_COLLECTION);
    let user = collection
        .find_one(doc! { "_id": user_id.as_object_id() })
        .await?
        .ok_or(UserServiceError::NotFound)?;

    Ok(UserResponse::from(user))
}

/// PUT /users/{id} - Sobrescreve name, email e password (sempre re-hasheia)
pub async fn update_user(
    db: &MongoDB,
    id: &str,
    payload: UserPayload,
) -> Result<MessageResponse, UserServiceError> {
    let user_id = UserId::parse(id)?;
    let (name, email, pwd) = payload.require_fields("Missing required fields")?;

    let hashed_password = hash_password(pwd)?;

    let collection = db.collection::<User>(USERS_COLLECTION);
    let result = collection
        .update_one(
            doc! { "_id": user_id.as_object_id() },
            doc! { "$set": {
                "name": name,
                "email": email,
                "password": hashed_password,
            }},
        )
        .await?;

    if result.matched_count == 0 {
        return Err(UserServiceError::NotFound);
    }

    Ok(MessageResponse {
        message: "User updated successfully".to_string(),
    })
}

/// DELETE /users/{id} - Remove um usuário
pub async fn delete_user(db: &MongoDB, id: &str) -> Result<MessageResponse, UserServiceError> {
    let user_id = UserId::parse(id)?;

    let collection = db.collection::<User>(USERS_COLLECTION);
    let result = collection
        .delete_one(doc! { "_id": user_id.as_object_id() })
        .await?;

    if result.deleted_count == 0 {
        return Err(UserServiceError::NotFound);
    }

    Ok(MessageResponse {
        message: "User deleted successfully".to_string(),
    })
}
