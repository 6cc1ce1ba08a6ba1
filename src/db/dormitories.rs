use sea_orm::*;
use uuid::Uuid;

use crate::models::dormitories::{self, CreateDormitory, UpdateDormitory};

/// Insert a new dormitory.
pub async fn insert_dormitory(
    db: &DatabaseConnection,
    input: CreateDormitory,
) -> Result<dormitories::Model, DbErr> {
    let new_dormitory = dormitories::ActiveModel {
        id: Set(Uuid::new_v4()),
        name: Set(input.name),
        location: Set(input.location),
        created_at: Set(chrono::Utc::now()),
    };

    new_dormitory.insert(db).await
}

/// Fetch all dormitories, newest first.
pub async fn get_all_dormitories(
    db: &DatabaseConnection,
) -> Result<Vec<dormitories::Model>, DbErr> {
    dormitories::Entity::find()
        .order_by_desc(dormitories::Column::CreatedAt)
        .all(db)
        .await
}

/// Fetch a single dormitory by ID.
pub async fn get_dormitory_by_id(
    db: &DatabaseConnection,
    id: Uuid,
) -> Result<Option<dormitories::Model>, DbErr> {
    dormitories::Entity::find_by_id(id).one(db).await
}

/// Update an existing dormitory.
pub async fn update_dormitory(
    db: &DatabaseConnection,
    id: Uuid,
    input: UpdateDormitory,
) -> Result<dormitories::Model, DbErr> {
    let dormitory = dormitories::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or(DbErr::RecordNotFound("Dormitory not found".to_string()))?;

    let mut active: dormitories::ActiveModel = dormitory.into();
    active.name = Set(input.name);
    active.location = Set(input.location);

    active.update(db).await
}

/// Delete a dormitory by ID.
pub async fn delete_dormitory(db: &DatabaseConnection, id: Uuid) -> Result<DeleteResult, DbErr> {
    dormitories::Entity::delete_by_id(id).exec(db).await
}
