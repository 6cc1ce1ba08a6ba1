use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

/// Identifiers for the `dormitories` table and its columns.
#[derive(DeriveIden)]
enum Dormitories {
    Table,
    Id,
    Name,
    Location,
    CreatedAt,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Dormitories::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Dormitories::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Dormitories::Name).string().not_null())
                    .col(ColumnDef::new(Dormitories::Location).string())
                    .col(
                        ColumnDef::new(Dormitories::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Dormitories::Table).to_owned())
            .await
    }
}
