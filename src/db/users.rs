use chrono::NaiveDate;
use sea_orm::sea_query::Expr;
use sea_orm::*;
use std::env;
use uuid::Uuid;

use crate::auth::password::hash_password;
use crate::error::ApiError;
use crate::models::users::{self, RegisterClient, RegisterWorker};
use crate::models::{client_details, worker_categories, worker_details};

/// Map a unique-key violation on `users.email` to the duplicate-email error.
fn map_email_err(e: DbErr) -> ApiError {
    match e.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => ApiError::DuplicateEmail,
        _ => e.into(),
    }
}

fn new_user_active_model(
    name: String,
    surname: String,
    email: String,
    password_hash: String,
    phone: String,
    birth_date: NaiveDate,
    verification_code: String,
) -> users::ActiveModel {
    users::ActiveModel {
        id: Set(Uuid::new_v4()),
        name: Set(name),
        surname: Set(surname),
        email: Set(email),
        password_hash: Set(password_hash),
        phone: Set(phone),
        birth_date: Set(birth_date),
        is_admin: Set(false),
        // Accounts are flagged active at registration even though a separate
        // verification endpoint exists. Observed behavior, kept as-is.
        active: Set(true),
        verification_code: Set(Some(verification_code)),
        locked_until: Set(None),
        profile_photo_url: Set(None),
        created_at: Set(chrono::Utc::now()),
    }
}

/// Insert a client: user row plus client_details row, one transaction.
pub async fn insert_client(
    db: &DatabaseConnection,
    input: RegisterClient,
    password_hash: String,
    code: String,
) -> Result<Uuid, ApiError> {
    let txn = db.begin().await?;

    let user = new_user_active_model(
        input.name,
        input.surname,
        input.email,
        password_hash,
        input.phone,
        input.birth_date,
        code,
    )
    .insert(&txn)
    .await
    .map_err(map_email_err)?;

    client_details::ActiveModel {
        user_id: Set(user.id),
        street: Set(input.street),
        neighborhood: Set(input.neighborhood),
        exterior_number: Set(input.exterior_number),
        interior_number: Set(input.interior_number),
        postal_code: Set(input.postal_code),
        city: Set(input.city),
        reference_notes: Set(input.reference_notes),
        latitude: Set(input.latitude),
        longitude: Set(input.longitude),
    }
    .insert(&txn)
    .await?;

    txn.commit().await?;
    Ok(user.id)
}

/// Insert a worker: user row, worker_details row and one worker_categories
/// row per serviced category, one transaction.
pub async fn insert_worker(
    db: &DatabaseConnection,
    input: RegisterWorker,
    password_hash: String,
    code: String,
) -> Result<Uuid, ApiError> {
    let txn = db.begin().await?;

    let user = new_user_active_model(
        input.name,
        input.surname,
        input.email,
        password_hash,
        input.phone,
        input.birth_date,
        code,
    )
    .insert(&txn)
    .await
    .map_err(map_email_err)?;

    worker_details::ActiveModel {
        user_id: Set(user.id),
        bio: Set(input.bio),
        years_experience: Set(input.years_experience),
        hourly_rate: Set(input.hourly_rate),
        rating_average: Set(0.0),
        rating_count: Set(0),
        admin_validated: Set(false),
        id_front_url: Set(None),
        id_back_url: Set(None),
        background_check_url: Set(None),
        latitude: Set(input.latitude),
        longitude: Set(input.longitude),
    }
    .insert(&txn)
    .await?;

    for category_id in input.category_ids {
        worker_categories::ActiveModel {
            user_id: Set(user.id),
            category_id: Set(category_id),
        }
        .insert(&txn)
        .await?;
    }

    txn.commit().await?;
    Ok(user.id)
}

/// Fetch a user by email.
pub async fn find_by_email(
    db: &DatabaseConnection,
    email: &str,
) -> Result<Option<users::Model>, ApiError> {
    Ok(users::Entity::find()
        .filter(users::Column::Email.eq(email))
        .one(db)
        .await?)
}

/// Mark an account active after a successful code check.
pub async fn activate(db: &DatabaseConnection, id: Uuid) -> Result<(), ApiError> {
    users::Entity::update_many()
        .col_expr(users::Column::Active, Expr::value(true))
        .filter(users::Column::Id.eq(id))
        .exec(db)
        .await?;
    Ok(())
}

/// Whether a worker_details row exists for this user.
pub async fn is_worker(db: &DatabaseConnection, id: Uuid) -> Result<bool, ApiError> {
    let found = worker_details::Entity::find_by_id(id).one(db).await?;
    Ok(found.is_some())
}

/// Seed a default admin account on startup, if it is not already present.
/// Email and password come from `ADMIN_EMAIL` / `ADMIN_PASSWORD`.
pub async fn ensure_default_admin(db: &DatabaseConnection) -> Result<(), ApiError> {
    let email = env::var("ADMIN_EMAIL").unwrap_or_else(|_| "admin@sistema.com".to_string());
    if find_by_email(db, &email).await?.is_some() {
        return Ok(());
    }

    let password = env::var("ADMIN_PASSWORD").unwrap_or_else(|_| "admin123".to_string());
    users::ActiveModel {
        id: Set(Uuid::new_v4()),
        name: Set("Super".to_string()),
        surname: Set("Admin".to_string()),
        email: Set(email.clone()),
        password_hash: Set(hash_password(&password)?),
        phone: Set("000".to_string()),
        birth_date: Set(NaiveDate::from_ymd_opt(2000, 1, 1).unwrap_or_default()),
        is_admin: Set(true),
        active: Set(true),
        verification_code: Set(None),
        locked_until: Set(None),
        profile_photo_url: Set(None),
        created_at: Set(chrono::Utc::now()),
    }
    .insert(db)
    .await?;

    tracing::info!("Seeded default admin account: {email}");
    Ok(())
}
