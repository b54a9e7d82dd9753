use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

/// Identifiers for the `client_details` table and its columns.
#[derive(DeriveIden)]
enum ClientDetails {
    Table,
    UserId,
    Street,
    Neighborhood,
    ExteriorNumber,
    InteriorNumber,
    PostalCode,
    City,
    ReferenceNotes,
    Latitude,
    Longitude,
}

/// Identifiers for the `worker_details` table and its columns.
#[derive(DeriveIden)]
enum WorkerDetails {
    Table,
    UserId,
    Bio,
    YearsExperience,
    HourlyRate,
    RatingAverage,
    RatingCount,
    AdminValidated,
    IdFrontUrl,
    IdBackUrl,
    BackgroundCheckUrl,
    Latitude,
    Longitude,
}

/// Identifiers for the `worker_categories` join table.
#[derive(DeriveIden)]
enum WorkerCategories {
    Table,
    UserId,
    CategoryId,
}

/// Re-declare parent table identifiers for foreign-key references.
#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Categories {
    Table,
    Id,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ClientDetails::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ClientDetails::UserId)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(ClientDetails::Street).string().not_null())
                    .col(
                        ColumnDef::new(ClientDetails::Neighborhood)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ClientDetails::ExteriorNumber)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(ClientDetails::InteriorNumber).string())
                    .col(
                        ColumnDef::new(ClientDetails::PostalCode)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(ClientDetails::City).string().not_null())
                    .col(ColumnDef::new(ClientDetails::ReferenceNotes).string())
                    .col(ColumnDef::new(ClientDetails::Latitude).double())
                    .col(ColumnDef::new(ClientDetails::Longitude).double())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_client_details_user_id")
                            .from(ClientDetails::Table, ClientDetails::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(WorkerDetails::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(WorkerDetails::UserId)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(WorkerDetails::Bio).text().not_null())
                    .col(
                        ColumnDef::new(WorkerDetails::YearsExperience)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(WorkerDetails::HourlyRate)
                            .double()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(WorkerDetails::RatingAverage)
                            .double()
                            .not_null()
                            .default(0.0),
                    )
                    .col(
                        ColumnDef::new(WorkerDetails::RatingCount)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(WorkerDetails::AdminValidated)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(WorkerDetails::IdFrontUrl).string())
                    .col(ColumnDef::new(WorkerDetails::IdBackUrl).string())
                    .col(ColumnDef::new(WorkerDetails::BackgroundCheckUrl).string())
                    .col(ColumnDef::new(WorkerDetails::Latitude).double())
                    .col(ColumnDef::new(WorkerDetails::Longitude).double())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_worker_details_user_id")
                            .from(WorkerDetails::Table, WorkerDetails::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(WorkerCategories::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(WorkerCategories::UserId).uuid().not_null())
                    .col(
                        ColumnDef::new(WorkerCategories::CategoryId)
                            .integer()
                            .not_null(),
                    )
                    .primary_key(
                        Index::create()
                            .col(WorkerCategories::UserId)
                            .col(WorkerCategories::CategoryId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_worker_categories_user_id")
                            .from(WorkerCategories::Table, WorkerCategories::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_worker_categories_category_id")
                            .from(WorkerCategories::Table, WorkerCategories::CategoryId)
                            .to(Categories::Table, Categories::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(WorkerCategories::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(WorkerDetails::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(ClientDetails::Table).to_owned())
            .await
    }
}
