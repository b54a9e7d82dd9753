use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(DeriveIden)]
enum Categories {
    Table,
    Name,
    IconUrl,
}

/// Starter set of trade categories so the catalog endpoint has something
/// to return on a fresh database.
const STARTER_CATEGORIES: [&str; 8] = [
    "Plumbing",
    "Electrical",
    "Carpentry",
    "Painting",
    "Cleaning",
    "Gardening",
    "Masonry",
    "Appliance repair",
];

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let mut insert = Query::insert()
            .into_table(Categories::Table)
            .columns([Categories::Name, Categories::IconUrl])
            .to_owned();
        for name in STARTER_CATEGORIES {
            insert.values_panic([name.into(), Option::<String>::None.into()]);
        }
        manager.exec_stmt(insert).await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for name in STARTER_CATEGORIES {
            manager
                .exec_stmt(
                    Query::delete()
                        .from_table(Categories::Table)
                        .and_where(Expr::col(Categories::Name).eq(name))
                        .to_owned(),
                )
                .await?;
        }
        Ok(())
    }
}
