use actix_web::{HttpResponse, Responder, web};
use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::cache::{CacheData, views};
use crate::db::rooms as room_db;
use crate::models::rooms::{CreateRoom, RoomListQuery, UpdateRoom};

/// GET /api/rooms — list rooms ordered by name.
/// Query params: ?dorm_id= to restrict to one dormitory.
pub async fn get_rooms(
    db: web::Data<DatabaseConnection>,
    query: web::Query<RoomListQuery>,
) -> impl Responder {
    let result = match query.dorm_id {
        Some(dorm_id) => room_db::get_rooms_by_dorm(db.get_ref(), dorm_id).await,
        None => room_db::get_all_rooms(db.get_ref()).await,
    };

    match result {
        Ok(rooms) => HttpResponse::Ok().json(rooms),
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({
            "error": format!("Failed to fetch rooms: {e}"),
        })),
    }
}

/// GET /api/rooms/options — picker rows (id, name, dormitory name) for the
/// contract and utility forms.
pub async fn get_room_options(db: web::Data<DatabaseConnection>) -> impl Responder {
    match room_db::get_room_options(db.get_ref()).await {
        Ok(options) => HttpResponse::Ok().json(options),
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({
            "error": format!("Failed to fetch rooms: {e}"),
        })),
    }
}

/// GET /api/rooms/{id} — get a single room.
pub async fn get_room(db: web::Data<DatabaseConnection>, path: web::Path<Uuid>) -> impl Responder {
    let id = path.into_inner();
    match room_db::get_room_by_id(db.get_ref(), id).await {
        Ok(Some(room)) => HttpResponse::Ok().json(room),
        Ok(None) => HttpResponse::NotFound().json(serde_json::json!({
            "error": format!("Room {id} not found"),
        })),
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({
            "error": format!("Database error: {e}"),
        })),
    }
}

/// POST /api/rooms — create a new room in a dormitory.
pub async fn create_room(
    db: web::Data<DatabaseConnection>,
    cache: web::Data<CacheData>,
    body: web::Json<CreateRoom>,
) -> impl Responder {
    match room_db::insert_room(db.get_ref(), body.into_inner()).await {
        Ok(room) => {
            cache.invalidate(views::OCCUPANCY_VIEWS).await;
            HttpResponse::Created().json(room)
        }
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({
            "error": format!("Failed to create room: {e}"),
        })),
    }
}

/// PUT /api/rooms/{id} — update a room (including manual status overrides
/// such as reserved or maintenance).
pub async fn update_room(
    db: web::Data<DatabaseConnection>,
    cache: web::Data<CacheData>,
    path: web::Path<Uuid>,
    body: web::Json<UpdateRoom>,
) -> impl Responder {
    let id = path.into_inner();
    match room_db::update_room(db.get_ref(), id, body.into_inner()).await {
        Ok(updated) => {
            cache.invalidate(views::OCCUPANCY_VIEWS).await;
            HttpResponse::Ok().json(updated)
        }
        Err(e) => {
            let mut status = if e.to_string().contains("not found") {
                HttpResponse::NotFound()
            } else {
                HttpResponse::InternalServerError()
            };
            status.json(serde_json::json!({
                "error": format!("Failed to update room: {e}"),
            }))
        }
    }
}

/// DELETE /api/rooms/{id} — delete a room.
pub async fn delete_room(
    db: web::Data<DatabaseConnection>,
    cache: web::Data<CacheData>,
    path: web::Path<Uuid>,
) -> impl Responder {
    let id = path.into_inner();
    match room_db::delete_room(db.get_ref(), id).await {
        Ok(result) => {
            if result.rows_affected > 0 {
                cache.invalidate(views::OCCUPANCY_VIEWS).await;
                HttpResponse::Ok().json(serde_json::json!({
                    "message": format!("Room {id} deleted"),
                }))
            } else {
                HttpResponse::NotFound().json(serde_json::json!({
                    "error": format!("Room {id} not found"),
                }))
            }
        }
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({
            "error": format!("Failed to delete room: {e}"),
        })),
    }
}
