use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// SeaORM entity for the `utilities` table — one water/electricity meter
/// reading per room per month. Costs are derived, never stored.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "utilities")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub room_id: Uuid,
    pub month: String,
    #[sea_orm(column_type = "Double", nullable)]
    pub water_unit: Option<f64>,
    #[sea_orm(column_type = "Double", nullable)]
    pub electricity_unit: Option<f64>,
    #[sea_orm(column_type = "Double", nullable)]
    pub water_rate: Option<f64>,
    #[sea_orm(column_type = "Double", nullable)]
    pub electricity_rate: Option<f64>,
    pub created_at: DateTimeUtc,
}

impl Model {
    /// Missing units or rates count as zero.
    pub fn water_cost(&self) -> f64 {
        self.water_unit.unwrap_or(0.0) * self.water_rate.unwrap_or(0.0)
    }

    pub fn electricity_cost(&self) -> f64 {
        self.electricity_unit.unwrap_or(0.0) * self.electricity_rate.unwrap_or(0.0)
    }

    pub fn total_cost(&self) -> f64 {
        self.water_cost() + self.electricity_cost()
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::rooms::Entity",
        from = "Column::RoomId",
        to = "super::rooms::Column::Id"
    )]
    Room,
}

impl Related<super::rooms::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Room.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// ── DTOs ──

#[derive(Debug, Clone, Deserialize)]
pub struct CreateUtility {
    pub room_id: Uuid,
    pub month: String,
    pub water_unit: Option<f64>,
    pub electricity_unit: Option<f64>,
    pub water_rate: Option<f64>,
    pub electricity_rate: Option<f64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdateUtility {
    pub room_id: Uuid,
    pub month: String,
    pub water_unit: Option<f64>,
    pub electricity_unit: Option<f64>,
    pub water_rate: Option<f64>,
    pub electricity_rate: Option<f64>,
}

/// Utility row enriched with room/dorm names and the derived costs.
#[derive(Debug, Clone, Serialize)]
pub struct UtilityDetail {
    #[serde(flatten)]
    pub utility: Model,
    pub room_name: String,
    pub dorm_name: String,
    pub water_cost: f64,
    pub electricity_cost: f64,
    pub total_cost: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use uuid::Uuid;

    fn reading(
        water_unit: Option<f64>,
        water_rate: Option<f64>,
        electricity_unit: Option<f64>,
        electricity_rate: Option<f64>,
    ) -> Model {
        Model {
            id: Uuid::new_v4(),
            room_id: Uuid::new_v4(),
            month: "2025-01".to_string(),
            water_unit,
            electricity_unit,
            water_rate,
            electricity_rate,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn costs_are_unit_times_rate() {
        let m = reading(Some(10.0), Some(18.0), Some(5.0), Some(8.0));
        assert_eq!(m.water_cost(), 180.0);
        assert_eq!(m.electricity_cost(), 40.0);
        assert_eq!(m.total_cost(), 220.0);
    }

    #[test]
    fn missing_fields_count_as_zero() {
        let m = reading(None, Some(18.0), Some(5.0), None);
        assert_eq!(m.water_cost(), 0.0);
        assert_eq!(m.electricity_cost(), 0.0);
        assert_eq!(m.total_cost(), 0.0);
    }
}
