use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

/// Identifiers for the `contracts` table and its columns.
#[derive(DeriveIden)]
enum Contracts {
    Table,
    Id,
    TenantId,
    RoomId,
    StartDate,
    EndDate,
    Deposit,
    Status,
    CreatedAt,
}

/// Re-declare parent table identifiers for foreign-key references.
#[derive(DeriveIden)]
enum Tenants {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Rooms {
    Table,
    Id,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Contracts::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Contracts::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Contracts::TenantId).uuid().not_null())
                    .col(ColumnDef::new(Contracts::RoomId).uuid().not_null())
                    .col(ColumnDef::new(Contracts::StartDate).date())
                    .col(ColumnDef::new(Contracts::EndDate).date())
                    .col(ColumnDef::new(Contracts::Deposit).double())
                    .col(ColumnDef::new(Contracts::Status).string().not_null())
                    .col(
                        ColumnDef::new(Contracts::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_contracts_tenant_id")
                            .from(Contracts::Table, Contracts::TenantId)
                            .to(Tenants::Table, Tenants::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_contracts_room_id")
                            .from(Contracts::Table, Contracts::RoomId)
                            .to(Rooms::Table, Rooms::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Contracts::Table).to_owned())
            .await
    }
}
