use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Contract status stored as a lowercase string in the database.
///
/// Only `Active` drives room occupancy; a contract whose end date has passed
/// stays `Active` until the operator edits it (no background sweep).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
#[serde(rename_all = "lowercase")]
pub enum ContractStatus {
    #[sea_orm(string_value = "active")]
    Active,
    #[sea_orm(string_value = "expired")]
    Expired,
    #[sea_orm(string_value = "cancelled")]
    Cancelled,
}

/// SeaORM entity for the `contracts` table.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "contracts")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub tenant_id: Uuid,
    pub room_id: Uuid,
    pub start_date: Option<Date>,
    pub end_date: Option<Date>,
    #[sea_orm(column_type = "Double", nullable)]
    pub deposit: Option<f64>,
    pub status: ContractStatus,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::tenants::Entity",
        from = "Column::TenantId",
        to = "super::tenants::Column::Id"
    )]
    Tenant,
    #[sea_orm(
        belongs_to = "super::rooms::Entity",
        from = "Column::RoomId",
        to = "super::rooms::Column::Id"
    )]
    Room,
    #[sea_orm(has_many = "super::payments::Entity")]
    Payments,
}

impl Related<super::tenants::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Tenant.def()
    }
}

impl Related<super::rooms::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Room.def()
    }
}

impl Related<super::payments::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Payments.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// ── DTOs ──

#[derive(Debug, Clone, Deserialize)]
pub struct CreateContract {
    pub tenant_id: Uuid,
    pub room_id: Uuid,
    pub start_date: Option<Date>,
    pub end_date: Option<Date>,
    pub deposit: Option<f64>,
    pub status: ContractStatus,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdateContract {
    pub tenant_id: Uuid,
    pub room_id: Uuid,
    pub start_date: Option<Date>,
    pub end_date: Option<Date>,
    pub deposit: Option<f64>,
    pub status: ContractStatus,
}

/// Contract row enriched with the display names the list view shows.
#[derive(Debug, Clone, Serialize)]
pub struct ContractDetail {
    #[serde(flatten)]
    pub contract: Model,
    pub tenant_name: String,
    pub room_name: String,
    pub dorm_name: String,
}

/// Picker row for the payment form — active contracts only.
#[derive(Debug, Clone, Serialize)]
pub struct ContractOption {
    pub id: Uuid,
    pub tenant_name: String,
    pub room_name: String,
    pub dorm_name: String,
}
