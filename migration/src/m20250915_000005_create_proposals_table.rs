use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

/// Identifiers for the `proposals` table and its columns.
#[derive(DeriveIden)]
enum Proposals {
    Table,
    Id,
    ServiceId,
    WorkerId,
    Price,
    Message,
    Accepted,
    CreatedAt,
}

/// Re-declare parent table identifiers for foreign-key references.
#[derive(DeriveIden)]
enum ServiceRequests {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Proposals::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Proposals::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Proposals::ServiceId).uuid().not_null())
                    .col(ColumnDef::new(Proposals::WorkerId).uuid().not_null())
                    .col(ColumnDef::new(Proposals::Price).double().not_null())
                    .col(ColumnDef::new(Proposals::Message).text().not_null())
                    .col(
                        ColumnDef::new(Proposals::Accepted)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Proposals::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_proposals_service_id")
                            .from(Proposals::Table, Proposals::ServiceId)
                            .to(ServiceRequests::Table, ServiceRequests::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_proposals_worker_id")
                            .from(Proposals::Table, Proposals::WorkerId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // One proposal per (service, worker) pair.
        manager
            .create_index(
                Index::create()
                    .name("idx_proposals_service_worker_unique")
                    .table(Proposals::Table)
                    .col(Proposals::ServiceId)
                    .col(Proposals::WorkerId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Proposals::Table).to_owned())
            .await
    }
}
