use actix_web::{HttpResponse, Responder, web};
use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::db::utilities as utility_db;
use crate::models::utilities::{CreateUtility, UpdateUtility};

/// GET /api/utilities — list meter readings with room/dormitory names and
/// derived costs, newest first. No cached view depends on utilities, so the
/// mutation handlers below skip cache invalidation.
pub async fn get_utilities(db: web::Data<DatabaseConnection>) -> impl Responder {
    match utility_db::get_utilities_detailed(db.get_ref()).await {
        Ok(utilities) => HttpResponse::Ok().json(utilities),
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({
            "error": format!("Failed to fetch utilities: {e}"),
        })),
    }
}

/// GET /api/utilities/{id} — get a single meter reading.
pub async fn get_utility(
    db: web::Data<DatabaseConnection>,
    path: web::Path<Uuid>,
) -> impl Responder {
    let id = path.into_inner();
    match utility_db::get_utility_by_id(db.get_ref(), id).await {
        Ok(Some(utility)) => HttpResponse::Ok().json(utility),
        Ok(None) => HttpResponse::NotFound().json(serde_json::json!({
            "error": format!("Utility {id} not found"),
        })),
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({
            "error": format!("Database error: {e}"),
        })),
    }
}

/// POST /api/utilities — record a month's water/electricity reading.
pub async fn create_utility(
    db: web::Data<DatabaseConnection>,
    body: web::Json<CreateUtility>,
) -> impl Responder {
    match utility_db::insert_utility(db.get_ref(), body.into_inner()).await {
        Ok(utility) => HttpResponse::Created().json(utility),
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({
            "error": format!("Failed to create utility: {e}"),
        })),
    }
}

/// PUT /api/utilities/{id} — update a meter reading.
pub async fn update_utility(
    db: web::Data<DatabaseConnection>,
    path: web::Path<Uuid>,
    body: web::Json<UpdateUtility>,
) -> impl Responder {
    let id = path.into_inner();
    match utility_db::update_utility(db.get_ref(), id, body.into_inner()).await {
        Ok(updated) => HttpResponse::Ok().json(updated),
        Err(e) => {
            let mut status = if e.to_string().contains("not found") {
                HttpResponse::NotFound()
            } else {
                HttpResponse::InternalServerError()
            };
            status.json(serde_json::json!({
                "error": format!("Failed to update utility: {e}"),
            }))
        }
    }
}

/// DELETE /api/utilities/{id} — delete a meter reading.
pub async fn delete_utility(
    db: web::Data<DatabaseConnection>,
    path: web::Path<Uuid>,
) -> impl Responder {
    let id = path.into_inner();
    match utility_db::delete_utility(db.get_ref(), id).await {
        Ok(result) => {
            if result.rows_affected > 0 {
                HttpResponse::Ok().json(serde_json::json!({
                    "message": format!("Utility {id} deleted"),
                }))
            } else {
                HttpResponse::NotFound().json(serde_json::json!({
                    "error": format!("Utility {id} not found"),
                }))
            }
        }
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({
            "error": format!("Failed to delete utility: {e}"),
        })),
    }
}
