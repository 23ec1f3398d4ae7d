use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Sites::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Sites::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Sites::Domain).string().not_null())
                    .col(ColumnDef::new(Sites::Title).string().not_null())
                    .col(ColumnDef::new(Sites::Keyword).string().not_null())
                    .col(ColumnDef::new(Sites::Content).text())
                    .col(ColumnDef::new(Sites::MetaDescription).string())
                    .col(ColumnDef::new(Sites::MetaTags).json())
                    .col(ColumnDef::new(Sites::CloudProvider).string().not_null())
                    .col(ColumnDef::new(Sites::CloudUrl).string())
                    .col(
                        ColumnDef::new(Sites::Status)
                            .string_len(20)
                            .not_null()
                            .default("pending"),
                    )
                    .col(
                        ColumnDef::new(Sites::SeoScore)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(ColumnDef::new(Sites::Analytics).json().not_null())
                    .col(
                        ColumnDef::new(Sites::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Sites::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Sites::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub(crate) enum Sites {
    Table,
    Id,
    Domain,
    Title,
    Keyword,
    Content,
    MetaDescription,
    MetaTags,
    CloudProvider,
    CloudUrl,
    Status,
    SeoScore,
    Analytics,
    CreatedAt,
    UpdatedAt,
}
