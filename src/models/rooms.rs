use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Room occupancy status, stored and serialized as the Thai strings the
/// operator-facing client has always used.
///
/// `Vacant`/`Occupied` are driven automatically by contract changes;
/// `Reserved` and `Maintenance` are manual overrides the automatic rule
/// never produces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum RoomStatus {
    #[sea_orm(string_value = "ว่าง")]
    #[serde(rename = "ว่าง")]
    Vacant,
    #[sea_orm(string_value = "ไม่ว่าง")]
    #[serde(rename = "ไม่ว่าง")]
    Occupied,
    #[sea_orm(string_value = "จอง")]
    #[serde(rename = "จอง")]
    Reserved,
    #[sea_orm(string_value = "ปิดปรับปรุง")]
    #[serde(rename = "ปิดปรับปรุง")]
    Maintenance,
}

/// SeaORM entity for the `rooms` table.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "rooms")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub dorm_id: Uuid,
    pub name: String,
    pub floor: Option<i32>,
    #[sea_orm(column_name = "type")]
    #[serde(rename = "type")]
    pub room_type: Option<String>,
    #[sea_orm(column_type = "Double", nullable)]
    pub price: Option<f64>,
    pub status: RoomStatus,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::dormitories::Entity",
        from = "Column::DormId",
        to = "super::dormitories::Column::Id"
    )]
    Dormitory,
    #[sea_orm(has_many = "super::contracts::Entity")]
    Contracts,
    #[sea_orm(has_many = "super::utilities::Entity")]
    Utilities,
}

impl Related<super::dormitories::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Dormitory.def()
    }
}

impl Related<super::contracts::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Contracts.def()
    }
}

impl Related<super::utilities::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Utilities.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// ── DTOs ──

#[derive(Debug, Clone, Deserialize)]
pub struct CreateRoom {
    pub dorm_id: Uuid,
    pub name: String,
    pub floor: Option<i32>,
    #[serde(rename = "type")]
    pub room_type: Option<String>,
    pub price: Option<f64>,
    pub status: RoomStatus,
}

/// Full-row edit; a room cannot be moved to another dormitory.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateRoom {
    pub name: String,
    pub floor: Option<i32>,
    #[serde(rename = "type")]
    pub room_type: Option<String>,
    pub price: Option<f64>,
    pub status: RoomStatus,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RoomListQuery {
    pub dorm_id: Option<Uuid>,
}

/// Picker row for the contract and utility forms.
#[derive(Debug, Clone, Serialize)]
pub struct RoomOption {
    pub id: Uuid,
    pub name: String,
    pub dorm_name: String,
}
