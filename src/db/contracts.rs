use std::collections::HashMap;

use sea_orm::*;
use uuid::Uuid;

use crate::models::contracts::{
    self, ContractDetail, ContractOption, ContractStatus, CreateContract, UpdateContract,
};
use crate::models::dormitories;
use crate::models::rooms;
use crate::models::tenants;
use crate::models::{UNKNOWN_DORM, UNKNOWN_ROOM, UNKNOWN_TENANT};

/// Insert a new contract. The caller is responsible for the follow-up room
/// status write (see `crate::occupancy`).
pub async fn insert_contract(
    db: &DatabaseConnection,
    input: CreateContract,
) -> Result<contracts::Model, DbErr> {
    let new_contract = contracts::ActiveModel {
        id: Set(Uuid::new_v4()),
        tenant_id: Set(input.tenant_id),
        room_id: Set(input.room_id),
        start_date: Set(input.start_date),
        end_date: Set(input.end_date),
        deposit: Set(input.deposit),
        status: Set(input.status),
        created_at: Set(chrono::Utc::now()),
    };

    new_contract.insert(db).await
}

/// Fetch all contracts, newest first.
pub async fn get_all_contracts(db: &DatabaseConnection) -> Result<Vec<contracts::Model>, DbErr> {
    contracts::Entity::find()
        .order_by_desc(contracts::Column::CreatedAt)
        .all(db)
        .await
}

/// Fetch a single contract by ID.
pub async fn get_contract_by_id(
    db: &DatabaseConnection,
    id: Uuid,
) -> Result<Option<contracts::Model>, DbErr> {
    contracts::Entity::find_by_id(id).one(db).await
}

/// Update an existing contract (full row).
pub async fn update_contract(
    db: &DatabaseConnection,
    id: Uuid,
    input: UpdateContract,
) -> Result<contracts::Model, DbErr> {
    let contract = contracts::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or(DbErr::RecordNotFound("Contract not found".to_string()))?;

    let mut active: contracts::ActiveModel = contract.into();
    active.tenant_id = Set(input.tenant_id);
    active.room_id = Set(input.room_id);
    active.start_date = Set(input.start_date);
    active.end_date = Set(input.end_date);
    active.deposit = Set(input.deposit);
    active.status = Set(input.status);

    active.update(db).await
}

/// Delete a contract by ID.
pub async fn delete_contract(db: &DatabaseConnection, id: Uuid) -> Result<DeleteResult, DbErr> {
    contracts::Entity::delete_by_id(id).exec(db).await
}

/// Fetch all contracts enriched with tenant, room, and dormitory names,
/// newest first. Joins are resolved from id maps; a missing relation falls
/// back to the placeholder label instead of failing.
pub async fn get_contracts_detailed(
    db: &DatabaseConnection,
) -> Result<Vec<ContractDetail>, DbErr> {
    let contracts = get_all_contracts(db).await?;
    let (tenants, rooms, dorms) = load_name_maps(db).await?;

    Ok(contracts
        .into_iter()
        .map(|contract| {
            let room = rooms.get(&contract.room_id);
            ContractDetail {
                tenant_name: tenants
                    .get(&contract.tenant_id)
                    .cloned()
                    .unwrap_or_else(|| UNKNOWN_TENANT.to_string()),
                room_name: room
                    .map(|r| r.name.clone())
                    .unwrap_or_else(|| UNKNOWN_ROOM.to_string()),
                dorm_name: room
                    .and_then(|r| dorms.get(&r.dorm_id).cloned())
                    .unwrap_or_else(|| UNKNOWN_DORM.to_string()),
                contract,
            }
        })
        .collect())
}

/// Picker rows for the payment form: active contracts only, newest first,
/// with tenant/room/dorm display names.
pub async fn get_active_contract_options(
    db: &DatabaseConnection,
) -> Result<Vec<ContractOption>, DbErr> {
    let contracts = contracts::Entity::find()
        .filter(contracts::Column::Status.eq(ContractStatus::Active))
        .order_by_desc(contracts::Column::CreatedAt)
        .all(db)
        .await?;
    let (tenants, rooms, dorms) = load_name_maps(db).await?;

    Ok(contracts
        .into_iter()
        .map(|contract| {
            let room = rooms.get(&contract.room_id);
            ContractOption {
                id: contract.id,
                tenant_name: tenants
                    .get(&contract.tenant_id)
                    .cloned()
                    .unwrap_or_else(|| UNKNOWN_TENANT.to_string()),
                room_name: room
                    .map(|r| r.name.clone())
                    .unwrap_or_else(|| UNKNOWN_ROOM.to_string()),
                dorm_name: room
                    .and_then(|r| dorms.get(&r.dorm_id).cloned())
                    .unwrap_or_else(|| UNKNOWN_DORM.to_string()),
            }
        })
        .collect())
}

/// Id → display-name maps for the tables the contract views join against.
pub(crate) async fn load_name_maps(
    db: &DatabaseConnection,
) -> Result<
    (
        HashMap<Uuid, String>,
        HashMap<Uuid, rooms::Model>,
        HashMap<Uuid, String>,
    ),
    DbErr,
> {
    let tenants: HashMap<Uuid, String> = tenants::Entity::find()
        .all(db)
        .await?
        .into_iter()
        .map(|t| (t.id, t.name))
        .collect();
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

    Ok((tenants, rooms, dorms))
}
