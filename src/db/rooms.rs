use std::collections::HashMap;

use sea_orm::*;
use uuid::Uuid;

use crate::models::UNKNOWN_DORM;
use crate::models::dormitories;
use crate::models::rooms::{self, CreateRoom, RoomOption, RoomStatus, UpdateRoom};

/// Insert a new room.
pub async fn insert_room(
    db: &DatabaseConnection,
    input: CreateRoom,
) -> Result<rooms::Model, DbErr> {
    let new_room = rooms::ActiveModel {
        id: Set(Uuid::new_v4()),
        dorm_id: Set(input.dorm_id),
        name: Set(input.name),
        floor: Set(input.floor),
        room_type: Set(input.room_type),
        price: Set(input.price),
        status: Set(input.status),
        created_at: Set(chrono::Utc::now()),
    };

    new_room.insert(db).await
}

/// Fetch all rooms ordered by name.
pub async fn get_all_rooms(db: &DatabaseConnection) -> Result<Vec<rooms::Model>, DbErr> {
    rooms::Entity::find()
        .order_by_asc(rooms::Column::Name)
        .all(db)
        .await
}

/// Fetch the rooms of one dormitory ordered by name.
pub async fn get_rooms_by_dorm(
    db: &DatabaseConnection,
    dorm_id: Uuid,
) -> Result<Vec<rooms::Model>, DbErr> {
    rooms::Entity::find()
        .filter(rooms::Column::DormId.eq(dorm_id))
        .order_by_asc(rooms::Column::Name)
        .all(db)
        .await
}

/// Fetch a single room by ID.
pub async fn get_room_by_id(
    db: &DatabaseConnection,
    id: Uuid,
) -> Result<Option<rooms::Model>, DbErr> {
    rooms::Entity::find_by_id(id).one(db).await
}

/// Update an existing room (dormitory assignment is immutable).
pub async fn update_room(
    db: &DatabaseConnection,
    id: Uuid,
    input: UpdateRoom,
) -> Result<rooms::Model, DbErr> {
    let room = rooms::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or(DbErr::RecordNotFound("Room not found".to_string()))?;

    let mut active: rooms::ActiveModel = room.into();
    active.name = Set(input.name);
    active.floor = Set(input.floor);
    active.room_type = Set(input.room_type);
    active.price = Set(input.price);
    active.status = Set(input.status);

    active.update(db).await
}

/// Write only the status column of a room. Used by the contract handlers to
/// keep occupancy in sync with contract state.
pub async fn set_room_status(
    db: &DatabaseConnection,
    id: Uuid,
    status: RoomStatus,
) -> Result<rooms::Model, DbErr> {
    let room = rooms::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or(DbErr::RecordNotFound("Room not found".to_string()))?;

    let mut active: rooms::ActiveModel = room.into();
    active.status = Set(status);

    active.update(db).await
}

/// Delete a room by ID.
pub async fn delete_room(db: &DatabaseConnection, id: Uuid) -> Result<DeleteResult, DbErr> {
    rooms::Entity::delete_by_id(id).exec(db).await
}

/// Picker rows (id, name, dormitory name) for the contract/utility forms,
/// ordered by room name.
pub async fn get_room_options(db: &DatabaseConnection) -> Result<Vec<RoomOption>, DbErr> {
    let rooms = get_all_rooms(db).await?;
    let dorms: HashMap<Uuid, dormitories::Model> = dormitories::Entity::find()
        .all(db)
        .await?
        .into_iter()
        .map(|d| (d.id, d))
        .collect();

    Ok(rooms
        .into_iter()
        .map(|room| RoomOption {
            id: room.id,
            name: room.name,
            dorm_name: dorms
                .get(&room.dorm_id)
                .map(|d| d.name.clone())
                .unwrap_or_else(|| UNKNOWN_DORM.to_string()),
        })
        .collect())
}
