use chrono::{DateTime, Duration, Utc};
use sea_orm::FromQueryResult;
use sea_orm::sea_query::Expr;
use sea_orm::*;
use serde::Serialize;
use uuid::Uuid;

use crate::error::ApiError;
use crate::models::users::{self, AdminAction, AdminActionRequest};
use crate::models::{client_details, worker_details};

/// Lock horizon when no day count is given: effectively permanent.
const DEFAULT_LOCK_DAYS: i64 = 36_500;

/// Raw row for the admin user listing: user columns plus presence markers
/// from both detail tables.
#[derive(Debug, Clone, FromQueryResult)]
pub struct AdminUserRow {
    pub id: Uuid,
    pub name: String,
    pub surname: String,
    pub email: String,
    pub active: bool,
    pub is_admin: bool,
    pub locked_until: Option<DateTime<Utc>>,
    pub worker_user_id: Option<Uuid>,
    pub client_user_id: Option<Uuid>,
    pub admin_validated: Option<bool>,
}

/// A user as shown in the admin console, with the derived role label.
#[derive(Debug, Clone, Serialize)]
pub struct AdminUserEntry {
    pub id: Uuid,
    pub name: String,
    pub surname: String,
    pub email: String,
    pub active: bool,
    pub locked_until: Option<DateTime<Utc>>,
    pub role: &'static str,
    pub admin_validated: Option<bool>,
}

/// Role is inferred from which detail table has a row; workers win when a
/// user somehow has both. Observed behavior, kept as-is.
pub fn role_label(is_worker: bool, is_client: bool, is_admin: bool) -> &'static str {
    if is_worker {
        "Worker"
    } else if is_client {
        "Client"
    } else if is_admin {
        "Admin"
    } else {
        "Unknown"
    }
}

impl From<AdminUserRow> for AdminUserEntry {
    fn from(row: AdminUserRow) -> Self {
        let role = role_label(
            row.worker_user_id.is_some(),
            row.client_user_id.is_some(),
            row.is_admin,
        );
        AdminUserEntry {
            id: row.id,
            name: row.name,
            surname: row.surname,
            email: row.email,
            active: row.active,
            locked_until: row.locked_until,
            role,
            admin_validated: row.admin_validated,
        }
    }
}

/// Every user, newest first, with the derived role label and the worker
/// validation flag when applicable.
pub async fn list_users(db: &DatabaseConnection) -> Result<Vec<AdminUserEntry>, ApiError> {
    let rows = users::Entity::find()
        .select_only()
        .column(users::Column::Id)
        .column(users::Column::Name)
        .column(users::Column::Surname)
        .column(users::Column::Email)
        .column(users::Column::Active)
        .column(users::Column::IsAdmin)
        .column(users::Column::LockedUntil)
        .column_as(worker_details::Column::UserId, "worker_user_id")
        .column_as(client_details::Column::UserId, "client_user_id")
        .column(worker_details::Column::AdminValidated)
        .join(JoinType::LeftJoin, users::Relation::WorkerDetail.def())
        .join(JoinType::LeftJoin, users::Relation::ClientDetail.def())
        .order_by_desc(users::Column::CreatedAt)
        .into_model::<AdminUserRow>()
        .all(db)
        .await?;

    Ok(rows.into_iter().map(AdminUserEntry::from).collect())
}

/// When a lock issued now would expire.
pub fn lock_until(lock_days: Option<i64>) -> DateTime<Utc> {
    Utc::now() + Duration::days(lock_days.unwrap_or(DEFAULT_LOCK_DAYS))
}

/// Apply one moderation action to a user.
pub async fn apply_action(
    db: &DatabaseConnection,
    input: AdminActionRequest,
) -> Result<(), ApiError> {
    match input.action {
        AdminAction::Validate => {
            worker_details::Entity::update_many()
                .col_expr(worker_details::Column::AdminValidated, Expr::value(true))
                .filter(worker_details::Column::UserId.eq(input.user_id))
                .exec(db)
                .await?;
        }
        AdminAction::Lock => {
            users::Entity::update_many()
                .col_expr(
                    users::Column::LockedUntil,
                    Expr::value(Some(lock_until(input.lock_days))),
                )
                .filter(users::Column::Id.eq(input.user_id))
                .exec(db)
                .await?;
        }
        AdminAction::Unlock => {
            users::Entity::update_many()
                .col_expr(
                    users::Column::LockedUntil,
                    Expr::value(Option::<DateTime<Utc>>::None),
                )
                .filter(users::Column::Id.eq(input.user_id))
                .exec(db)
                .await?;
        }
        AdminAction::Delete => {
            // Detail rows, proposals and owned requests cascade at the
            // storage layer.
            users::Entity::delete_by_id(input.user_id).exec(db).await?;
        }
    }
    Ok(())
}
