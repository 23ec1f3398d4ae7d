use sea_orm_migration::prelude::*;

use crate::m20250101_000001_create_sites::Sites;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_index(
                Index::create()
                    .name("idx_sites_domain")
                    .table(Sites::Table)
                    .col(Sites::Domain)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_sites_keyword")
                    .table(Sites::Table)
                    .col(Sites::Keyword)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        // Dashboard aggregates filter on status and listings sort on created_at
        manager
            .create_index(
                Index::create()
                    .name("idx_sites_status_created_at")
                    .table(Sites::Table)
                    .col(Sites::Status)
                    .col(Sites::CreatedAt)
                    .if_not_exists()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for name in [
            "idx_sites_status_created_at",
            "idx_sites_keyword",
            "idx_sites_domain",
        ] {
            manager
                .drop_index(Index::drop().name(name).table(Sites::Table).to_owned())
                .await?;
        }
        Ok(())
    }
}
