use std::collections::HashMap;

use sea_orm::*;
use uuid::Uuid;

use crate::models::dormitories;
use crate::models::rooms;
use crate::models::utilities::{self, CreateUtility, UpdateUtility, UtilityDetail};
use crate::models::{UNKNOWN_DORM, UNKNOWN_ROOM};

/// Insert a new utility reading.
pub async fn insert_utility(
    db: &DatabaseConnection,
    input: CreateUtility,
) -> Result<utilities::Model, DbErr> {
    let new_utility = utilities::ActiveModel {
        id: Set(Uuid::new_v4()),
        room_id: Set(input.room_id),
        month: Set(input.month),
        water_unit: Set(input.water_unit),
        electricity_unit: Set(input.electricity_unit),
        water_rate: Set(input.water_rate),
        electricity_rate: Set(input.electricity_rate),
        created_at: Set(chrono::Utc::now()),
    };

    new_utility.insert(db).await
}

/// Fetch all utility readings, newest first.
pub async fn get_all_utilities(db: &DatabaseConnection) -> Result<Vec<utilities::Model>, DbErr> {
    utilities::Entity::find()
        .order_by_desc(utilities::Column::CreatedAt)
        .all(db)
        .await
}

/// Fetch a single utility reading by ID.
pub async fn get_utility_by_id(
    db: &DatabaseConnection,
    id: Uuid,
) -> Result<Option<utilities::Model>, DbErr> {
    utilities::Entity::find_by_id(id).one(db).await
}

/// Update an existing utility reading (full row).
pub async fn update_utility(
    db: &DatabaseConnection,
    id: Uuid,
    input: UpdateUtility,
) -> Result<utilities::Model, DbErr> {
    let utility = utilities::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or(DbErr::RecordNotFound("Utility not found".to_string()))?;

    let mut active: utilities::ActiveModel = utility.into();
    active.room_id = Set(input.room_id);
    active.month = Set(input.month);
    active.water_unit = Set(input.water_unit);
    active.electricity_unit = Set(input.electricity_unit);
    active.water_rate = Set(input.water_rate);
    active.electricity_rate = Set(input.electricity_rate);

    active.update(db).await
}

/// Delete a utility reading by ID.
pub async fn delete_utility(db: &DatabaseConnection, id: Uuid) -> Result<DeleteResult, DbErr> {
    utilities::Entity::delete_by_id(id).exec(db).await
}

/// Fetch all readings enriched with room/dorm names and the derived costs,
/// newest first.
pub async fn get_utilities_detailed(
    db: &DatabaseConnection,
) -> Result<Vec<UtilityDetail>, DbErr> {
    let utilities = get_all_utilities(db).await?;
    let rooms: HashMap<Uuid, rooms::Model> = rooms::Entity::find()
        .all(db)
        .await?
        .into_iter()
        .map(|r| (r.id, r))
        .collect();
    let dorms: HashMap<Uuid, String> = dormitories::Entity::find()
        .all(db)
        .await?
        .into_iter()
        .map(|d| (d.id, d.name))
        .collect();

    Ok(utilities
        .into_iter()
        .map(|utility| {
            let room = rooms.get(&utility.room_id);
            UtilityDetail {
                room_name: room
                    .map(|r| r.name.clone())
                    .unwrap_or_else(|| UNKNOWN_ROOM.to_string()),
                dorm_name: room
                    .and_then(|r| dorms.get(&r.dorm_id).cloned())
                    .unwrap_or_else(|| UNKNOWN_DORM.to_string()),
                water_cost: utility.water_cost(),
                electricity_cost: utility.electricity_cost(),
                total_cost: utility.total_cost(),
                utility,
            }
        })
        .collect())
}
