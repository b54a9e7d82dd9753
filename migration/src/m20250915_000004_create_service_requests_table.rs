use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

/// Identifiers for the `service_requests` table and its columns.
#[derive(DeriveIden)]
enum ServiceRequests {
    Table,
    Id,
    ClientId,
    CategoryId,
    Title,
    Description,
    ScheduledAt,
    EstimatedPrice,
    Address,
    Latitude,
    Longitude,
    PhotoUrl,
    Status,
    WorkerId,
    Rating,
    Review,
    CreatedAt,
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
                    .table(ServiceRequests::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ServiceRequests::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(ServiceRequests::ClientId).uuid().not_null())
                    .col(
                        ColumnDef::new(ServiceRequests::CategoryId)
                            .integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(ServiceRequests::Title).string().not_null())
                    .col(
                        ColumnDef::new(ServiceRequests::Description)
                            .text()
                            .not_null(),
                    )
                    .col(ColumnDef::new(ServiceRequests::ScheduledAt).timestamp_with_time_zone())
                    .col(ColumnDef::new(ServiceRequests::EstimatedPrice).double())
                    .col(ColumnDef::new(ServiceRequests::Address).string().not_null())
                    .col(
                        ColumnDef::new(ServiceRequests::Latitude)
                            .double()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ServiceRequests::Longitude)
                            .double()
                            .not_null(),
                    )
                    .col(ColumnDef::new(ServiceRequests::PhotoUrl).string())
                    .col(ColumnDef::new(ServiceRequests::Status).string().not_null())
                    .col(ColumnDef::new(ServiceRequests::WorkerId).uuid())
                    .col(ColumnDef::new(ServiceRequests::Rating).integer())
                    .col(ColumnDef::new(ServiceRequests::Review).text())
                    .col(
                        ColumnDef::new(ServiceRequests::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_service_requests_client_id")
                            .from(ServiceRequests::Table, ServiceRequests::ClientId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_service_requests_worker_id")
                            .from(ServiceRequests::Table, ServiceRequests::WorkerId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_service_requests_category_id")
                            .from(ServiceRequests::Table, ServiceRequests::CategoryId)
                            .to(Categories::Table, Categories::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_service_requests_client_created")
                    .table(ServiceRequests::Table)
                    .col(ServiceRequests::ClientId)
                    .col(ServiceRequests::CreatedAt)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_service_requests_status_created")
                    .table(ServiceRequests::Table)
                    .col(ServiceRequests::Status)
                    .col(ServiceRequests::CreatedAt)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ServiceRequests::Table).to_owned())
            .await
    }
}
