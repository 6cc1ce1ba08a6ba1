use actix_web::{HttpResponse, Responder, web};
use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::cache::{CacheData, views};
use crate::db::dormitories as dorm_db;
use crate::models::dormitories::{CreateDormitory, UpdateDormitory};

/// GET /api/dormitories — list all dormitories, newest first.
pub async fn get_dormitories(db: web::Data<DatabaseConnection>) -> impl Responder {
    match dorm_db::get_all_dormitories(db.get_ref()).await {
        Ok(dormitories) => HttpResponse::Ok().json(dormitories),
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({
            "error": format!("Failed to fetch dormitories: {e}"),
        })),
    }
}

/// GET /api/dormitories/{id} — get a single dormitory.
pub async fn get_dormitory(
    db: web::Data<DatabaseConnection>,
    path: web::Path<Uuid>,
) -> impl Responder {
    let id = path.into_inner();
    match dorm_db::get_dormitory_by_id(db.get_ref(), id).await {
        Ok(Some(dormitory)) => HttpResponse::Ok().json(dormitory),
        Ok(None) => HttpResponse::NotFound().json(serde_json::json!({
            "error": format!("Dormitory {id} not found"),
        })),
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({
            "error": format!("Database error: {e}"),
        })),
    }
}

/// POST /api/dormitories — create a new dormitory.
pub async fn create_dormitory(
    db: web::Data<DatabaseConnection>,
    cache: web::Data<CacheData>,
    body: web::Json<CreateDormitory>,
) -> impl Responder {
    match dorm_db::insert_dormitory(db.get_ref(), body.into_inner()).await {
        Ok(dormitory) => {
            cache.invalidate(views::OCCUPANCY_VIEWS).await;
            HttpResponse::Created().json(dormitory)
        }
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({
            "error": format!("Failed to create dormitory: {e}"),
        })),
    }
}

/// PUT /api/dormitories/{id} — update a dormitory.
pub async fn update_dormitory(
    db: web::Data<DatabaseConnection>,
    cache: web::Data<CacheData>,
    path: web::Path<Uuid>,
    body: web::Json<UpdateDormitory>,
) -> impl Responder {
    let id = path.into_inner();
    match dorm_db::update_dormitory(db.get_ref(), id, body.into_inner()).await {
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
                "error": format!("Failed to update dormitory: {e}"),
            }))
        }
    }
}

/// DELETE /api/dormitories/{id} — delete a dormitory (rooms cascade).
pub async fn delete_dormitory(
    db: web::Data<DatabaseConnection>,
    cache: web::Data<CacheData>,
    path: web::Path<Uuid>,
) -> impl Responder {
    let id = path.into_inner();
    match dorm_db::delete_dormitory(db.get_ref(), id).await {
        Ok(result) => {
            if result.rows_affected > 0 {
                cache.invalidate(views::OCCUPANCY_VIEWS).await;
                HttpResponse::Ok().json(serde_json::json!({
                    "message": format!("Dormitory {id} deleted"),
                }))
            } else {
                HttpResponse::NotFound().json(serde_json::json!({
                    "error": format!("Dormitory {id} not found"),
                }))
            }
        }
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({
            "error": format!("Failed to delete dormitory: {e}"),
        })),
    }
}
