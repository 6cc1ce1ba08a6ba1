use sea_orm::*;
use uuid::Uuid;

use crate::models::tenants::{self, CreateTenant, UpdateTenant};

/// Insert a new tenant.
pub async fn insert_tenant(
    db: &DatabaseConnection,
    input: CreateTenant,
) -> Result<tenants::Model, DbErr> {
    let new_tenant = tenants::ActiveModel {
        id: Set(Uuid::new_v4()),
        name: Set(input.name),
        phone: Set(input.phone),
        note: Set(input.note),
        created_at: Set(chrono::Utc::now()),
    };

    new_tenant.insert(db).await
}

/// Fetch all tenants, newest first.
pub async fn get_all_tenants(db: &DatabaseConnection) -> Result<Vec<tenants::Model>, DbErr> {
    tenants::Entity::find()
        .order_by_desc(tenants::Column::CreatedAt)
        .all(db)
        .await
}

/// Fetch a single tenant by ID.
pub async fn get_tenant_by_id(
    db: &DatabaseConnection,
    id: Uuid,
) -> Result<Option<tenants::Model>, DbErr> {
    tenants::Entity::find_by_id(id).one(db).await
}

/// Update an existing tenant.
pub async fn update_tenant(
    db: &DatabaseConnection,
    id: Uuid,
    input: UpdateTenant,
) -> Result<tenants::Model, DbErr> {
    let tenant = tenants::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or(DbErr::RecordNotFound("Tenant not found".to_string()))?;

    let mut active: tenants::ActiveModel = tenant.into();
    active.name = Set(input.name);
    active.phone = Set(input.phone);
    active.note = Set(input.note);

    active.update(db).await
}

/// Delete a tenant by ID.
pub async fn delete_tenant(db: &DatabaseConnection, id: Uuid) -> Result<DeleteResult, DbErr> {
    tenants::Entity::delete_by_id(id).exec(db).await
}
