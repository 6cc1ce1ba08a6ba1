use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

/// Identifiers for the `utilities` table and its columns.
#[derive(DeriveIden)]
enum Utilities {
    Table,
    Id,
    RoomId,
    Month,
    WaterUnit,
    ElectricityUnit,
    WaterRate,
    ElectricityRate,
    CreatedAt,
}

/// Re-declare parent table identifiers for foreign-key references.
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
                    .table(Utilities::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Utilities::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Utilities::RoomId).uuid().not_null())
                    .col(ColumnDef::new(Utilities::Month).string().not_null())
                    .col(ColumnDef::new(Utilities::WaterUnit).double())
                    .col(ColumnDef::new(Utilities::ElectricityUnit).double())
                    .col(ColumnDef::new(Utilities::WaterRate).double())
                    .col(ColumnDef::new(Utilities::ElectricityRate).double())
                    .col(
                        ColumnDef::new(Utilities::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_utilities_room_id")
                            .from(Utilities::Table, Utilities::RoomId)
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
            .drop_table(Table::drop().table(Utilities::Table).to_owned())
            .await
    }
}
