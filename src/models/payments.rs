use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Payment status stored as a lowercase string in the database.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    #[sea_orm(string_value = "paid")]
    Paid,
    #[sea_orm(string_value = "pending")]
    Pending,
    #[sea_orm(string_value = "cancelled")]
    Cancelled,
}

/// SeaORM entity for the `payments` table. One row is one month's rent
/// charge for one contract; `month` is a "YYYY-MM" key.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "payments")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub contract_id: Uuid,
    pub month: String,
    #[sea_orm(column_type = "Double")]
    pub amount: f64,
    pub status: PaymentStatus,
    pub paid_at: Option<Date>,
    #[sea_orm(column_type = "Text", nullable)]
    pub note: Option<String>,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::contracts::Entity",
        from = "Column::ContractId",
        to = "super::contracts::Column::Id"
    )]
    Contract,
}

impl Related<super::contracts::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Contract.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// ── DTOs ──

#[derive(Debug, Clone, Deserialize)]
pub struct CreatePayment {
    pub contract_id: Uuid,
    pub month: String,
    pub amount: f64,
    pub status: PaymentStatus,
    pub paid_at: Option<Date>,
    pub note: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdatePayment {
    pub contract_id: Uuid,
    pub month: String,
    pub amount: f64,
    pub status: PaymentStatus,
    pub paid_at: Option<Date>,
    pub note: Option<String>,
}

/// Payment row enriched with display names via contract → tenant/room/dorm.
#[derive(Debug, Clone, Serialize)]
pub struct PaymentDetail {
    #[serde(flatten)]
    pub payment: Model,
    pub tenant_name: String,
    pub room_name: String,
    pub dorm_name: String,
}

/// Compact shape for the dashboard's recent-payments card.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecentPayment {
    pub id: Uuid,
    pub month: String,
    pub amount: f64,
    pub status: PaymentStatus,
    pub tenant_name: String,
    pub room_name: String,
}
