use actix_web::{HttpResponse, web};
use sea_orm::DatabaseConnection;

use crate::auth::password::{hash_password, verify_password};
use crate::auth::verification;
use crate::db::users as user_db;
use crate::error::ApiError;
use crate::models::users::{LoginRequest, LoginUser, RegisterClient, RegisterWorker, VerifyAccount};

/// POST /registro-cliente — register a client account.
///
/// The verification code is only logged; no email is sent.
pub async fn register_client(
    db: web::Data<DatabaseConnection>,
    body: web::Json<RegisterClient>,
) -> Result<HttpResponse, ApiError> {
    let input = body.into_inner();
    let email = input.email.clone();
    let password_hash = hash_password(&input.password)?;
    let code = verification::generate_code();

    user_db::insert_client(db.get_ref(), input, password_hash, code.clone()).await?;
    tracing::info!("Verification code for client {email}: {code}");

    Ok(HttpResponse::Created().json(serde_json::json!({
        "message": "Client registered",
        "email": email,
    })))
}

/// POST /registro-trabajador — register a worker account with its serviced
/// categories.
pub async fn register_worker(
    db: web::Data<DatabaseConnection>,
    body: web::Json<RegisterWorker>,
) -> Result<HttpResponse, ApiError> {
    let input = body.into_inner();
    let email = input.email.clone();
    let password_hash = hash_password(&input.password)?;
    let code = verification::generate_code();

    user_db::insert_worker(db.get_ref(), input, password_hash, code.clone()).await?;
    tracing::info!("Verification code for worker {email}: {code}");

    Ok(HttpResponse::Created().json(serde_json::json!({
        "message": "Worker registered",
        "email": email,
    })))
}

/// POST /verificar-cuenta — activate an account with its emailed code.
///
/// Idempotent: an already-active account returns success without mutation.
pub async fn verify_account(
    db: web::Data<DatabaseConnection>,
    body: web::Json<VerifyAccount>,
) -> Result<HttpResponse, ApiError> {
    let user = user_db::find_by_email(db.get_ref(), &body.email)
        .await?
        .ok_or_else(|| ApiError::NotFound("User".to_string()))?;

    if user.active {
        return Ok(HttpResponse::Ok().json(serde_json::json!({
            "message": "Account already active",
        })));
    }

    if user.verification_code.as_deref() != Some(body.code.as_str()) {
        return Err(ApiError::InvalidCode);
    }

    user_db::activate(db.get_ref(), user.id).await?;
    Ok(HttpResponse::Ok().json(serde_json::json!({
        "message": "Account activated",
    })))
}

/// POST /login — credential check plus account-lock check.
///
/// Unknown email, inactive account and wrong password all collapse into the
/// same error so callers cannot probe which accounts exist.
pub async fn login(
    db: web::Data<DatabaseConnection>,
    body: web::Json<LoginRequest>,
) -> Result<HttpResponse, ApiError> {
    let user = user_db::find_by_email(db.get_ref(), &body.email)
        .await?
        .ok_or(ApiError::InvalidCredentials)?;

    if !user.active || !verify_password(&body.password, &user.password_hash)? {
        return Err(ApiError::InvalidCredentials);
    }

    if let Some(locked_until) = user.locked_until {
        if locked_until > chrono::Utc::now() {
            return Err(ApiError::AccountLocked);
        }
    }

    let is_worker = user_db::is_worker(db.get_ref(), user.id).await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "message": "Login successful",
        "user": LoginUser {
            id: user.id,
            name: user.name,
            is_admin: user.is_admin,
            is_worker,
        },
    })))
}
