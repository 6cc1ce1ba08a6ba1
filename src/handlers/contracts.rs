use actix_web::{HttpResponse, Responder, web};
use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::cache::{CacheData, views};
use crate::db::contracts as contract_db;
use crate::db::rooms as room_db;
use crate::db::tenants as tenant_db;
use crate::models::contracts::{CreateContract, UpdateContract};
use crate::occupancy::{self, RoomStatusChange};

/// Apply the room-status writes a contract operation implies.
///
/// These writes are the best-effort tier: the contract row has already been
/// written when this runs, so a failure here is logged and skipped rather
/// than surfaced or rolled back. The room can drift out of sync until the
/// operator touches the contract again.
async fn apply_room_changes(db: &DatabaseConnection, changes: Vec<RoomStatusChange>) {
    for change in changes {
        if let Err(e) = room_db::set_room_status(db, change.room_id, change.status).await {
            tracing::warn!(
                "Failed to update status of room {}: {e}",
                change.room_id
            );
        }
    }
}

/// GET /api/contracts — list contracts with tenant/room/dormitory names,
/// newest first.
pub async fn get_contracts(db: web::Data<DatabaseConnection>) -> impl Responder {
    match contract_db::get_contracts_detailed(db.get_ref()).await {
        Ok(contracts) => HttpResponse::Ok().json(contracts),
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({
            "error": format!("Failed to fetch contracts: {e}"),
        })),
    }
}

/// GET /api/contracts/options — active contracts as picker rows for the
/// payment form.
pub async fn get_contract_options(db: web::Data<DatabaseConnection>) -> impl Responder {
    match contract_db::get_active_contract_options(db.get_ref()).await {
        Ok(options) => HttpResponse::Ok().json(options),
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({
            "error": format!("Failed to fetch contracts: {e}"),
        })),
    }
}

/// GET /api/contracts/{id} — get a single contract.
pub async fn get_contract(
    db: web::Data<DatabaseConnection>,
    path: web::Path<Uuid>,
) -> impl Responder {
    let id = path.into_inner();
    match contract_db::get_contract_by_id(db.get_ref(), id).await {
        Ok(Some(contract)) => HttpResponse::Ok().json(contract),
        Ok(None) => HttpResponse::NotFound().json(serde_json::json!({
            "error": format!("Contract {id} not found"),
        })),
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({
            "error": format!("Database error: {e}"),
        })),
    }
}

/// POST /api/contracts — create a lease contract and mark its room occupied.
///
/// The tenant and room must exist. The room write happens after the
/// contract insert and is not transactional with it.
pub async fn create_contract(
    db: web::Data<DatabaseConnection>,
    cache: web::Data<CacheData>,
    body: web::Json<CreateContract>,
) -> impl Responder {
    let input = body.into_inner();

    // 1. Verify the referenced rows exist before writing anything.
    match tenant_db::get_tenant_by_id(db.get_ref(), input.tenant_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return HttpResponse::NotFound().json(serde_json::json!({
                "error": format!("Tenant {} not found", input.tenant_id),
            }));
        }
        Err(e) => {
            return HttpResponse::InternalServerError().json(serde_json::json!({
                "error": format!("Database error: {e}"),
            }));
        }
    }
    match room_db::get_room_by_id(db.get_ref(), input.room_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return HttpResponse::NotFound().json(serde_json::json!({
                "error": format!("Room {} not found", input.room_id),
            }));
        }
        Err(e) => {
            return HttpResponse::InternalServerError().json(serde_json::json!({
                "error": format!("Database error: {e}"),
            }));
        }
    }

    // 2. Insert the contract, then occupy the room (best effort).
    let room_id = input.room_id;
    match contract_db::insert_contract(db.get_ref(), input).await {
        Ok(contract) => {
            apply_room_changes(db.get_ref(), occupancy::on_contract_created(room_id)).await;
            cache.invalidate(views::OCCUPANCY_VIEWS).await;
            HttpResponse::Created().json(contract)
        }
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({
            "error": format!("Failed to create contract: {e}"),
        })),
    }
}

/// PUT /api/contracts/{id} — edit a contract and reconcile room statuses.
///
/// The previous room is read first; it drives the vacate side of the
/// transition when the contract moved rooms or left the active state.
pub async fn update_contract(
    db: web::Data<DatabaseConnection>,
    cache: web::Data<CacheData>,
    path: web::Path<Uuid>,
    body: web::Json<UpdateContract>,
) -> impl Responder {
    let id = path.into_inner();
    let input = body.into_inner();

    // 1. Fetch the contract as it was before the edit.
    let previous = match contract_db::get_contract_by_id(db.get_ref(), id).await {
        Ok(Some(c)) => c,
        Ok(None) => {
            return HttpResponse::NotFound().json(serde_json::json!({
                "error": format!("Contract {id} not found"),
            }));
        }
        Err(e) => {
            return HttpResponse::InternalServerError().json(serde_json::json!({
                "error": format!("Database error: {e}"),
            }));
        }
    };

    // 2. Write the contract row; this is the fatal tier.
    let changes = occupancy::on_contract_updated(previous.room_id, input.room_id, &input.status);
    match contract_db::update_contract(db.get_ref(), id, input).await {
        Ok(updated) => {
            apply_room_changes(db.get_ref(), changes).await;
            cache.invalidate(views::OCCUPANCY_VIEWS).await;
            HttpResponse::Ok().json(updated)
        }
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({
            "error": format!("Failed to update contract: {e}"),
        })),
    }
}

/// DELETE /api/contracts/{id} — delete a contract and vacate its room.
///
/// Fails closed: if the contract cannot be read, nothing is deleted.
pub async fn delete_contract(
    db: web::Data<DatabaseConnection>,
    cache: web::Data<CacheData>,
    path: web::Path<Uuid>,
) -> impl Responder {
    let id = path.into_inner();

    // 1. Read the contract to learn which room it held.
    let contract = match contract_db::get_contract_by_id(db.get_ref(), id).await {
        Ok(Some(c)) => c,
        Ok(None) => {
            return HttpResponse::NotFound().json(serde_json::json!({
                "error": format!("Contract {id} not found"),
            }));
        }
        Err(e) => {
            return HttpResponse::InternalServerError().json(serde_json::json!({
                "error": format!("Database error: {e}"),
            }));
        }
    };

    // 2. Delete the row, then vacate the room (best effort).
    match contract_db::delete_contract(db.get_ref(), id).await {
        Ok(result) => {
            if result.rows_affected > 0 {
                apply_room_changes(
                    db.get_ref(),
                    occupancy::on_contract_deleted(contract.room_id),
                )
                .await;
                cache.invalidate(views::OCCUPANCY_VIEWS).await;
                HttpResponse::Ok().json(serde_json::json!({
                    "message": format!("Contract {id} deleted"),
                }))
            } else {
                HttpResponse::NotFound().json(serde_json::json!({
                    "error": format!("Contract {id} not found"),
                }))
            }
        }
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({
            "error": format!("Failed to delete contract: {e}"),
        })),
    }
}
