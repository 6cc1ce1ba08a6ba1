use actix_web::{HttpResponse, Responder, web};
use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::cache::{CacheData, views};
use crate::db::tenants as tenant_db;
use crate::models::tenants::{CreateTenant, UpdateTenant};

/// GET /api/tenants — list all tenants, newest first.
pub async fn get_tenants(db: web::Data<DatabaseConnection>) -> impl Responder {
    match tenant_db::get_all_tenants(db.get_ref()).await {
        Ok(tenants) => HttpResponse::Ok().json(tenants),
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({
            "error": format!("Failed to fetch tenants: {e}"),
        })),
    }
}

/// GET /api/tenants/{id} — get a single tenant.
pub async fn get_tenant(
    db: web::Data<DatabaseConnection>,
    path: web::Path<Uuid>,
) -> impl Responder {
    let id = path.into_inner();
    match tenant_db::get_tenant_by_id(db.get_ref(), id).await {
        Ok(Some(tenant)) => HttpResponse::Ok().json(tenant),
        Ok(None) => HttpResponse::NotFound().json(serde_json::json!({
            "error": format!("Tenant {id} not found"),
        })),
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({
            "error": format!("Database error: {e}"),
        })),
    }
}

/// POST /api/tenants — create a new tenant.
pub async fn create_tenant(
    db: web::Data<DatabaseConnection>,
    cache: web::Data<CacheData>,
    body: web::Json<CreateTenant>,
) -> impl Responder {
    match tenant_db::insert_tenant(db.get_ref(), body.into_inner()).await {
        Ok(tenant) => {
            cache.invalidate(views::OCCUPANCY_VIEWS).await;
            HttpResponse::Created().json(tenant)
        }
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({
            "error": format!("Failed to create tenant: {e}"),
        })),
    }
}

/// PUT /api/tenants/{id} — update a tenant.
pub async fn update_tenant(
    db: web::Data<DatabaseConnection>,
    cache: web::Data<CacheData>,
    path: web::Path<Uuid>,
    body: web::Json<UpdateTenant>,
) -> impl Responder {
    let id = path.into_inner();
    match tenant_db::update_tenant(db.get_ref(), id, body.into_inner()).await {
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
                "error": format!("Failed to update tenant: {e}"),
            }))
        }
    }
}

/// DELETE /api/tenants/{id} — delete a tenant (contracts cascade).
pub async fn delete_tenant(
    db: web::Data<DatabaseConnection>,
    cache: web::Data<CacheData>,
    path: web::Path<Uuid>,
) -> impl Responder {
    let id = path.into_inner();
    match tenant_db::delete_tenant(db.get_ref(), id).await {
        Ok(result) => {
            if result.rows_affected > 0 {
                cache.invalidate(views::OCCUPANCY_VIEWS).await;
                HttpResponse::Ok().json(serde_json::json!({
                    "message": format!("Tenant {id} deleted"),
                }))
            } else {
                HttpResponse::NotFound().json(serde_json::json!({
                    "error": format!("Tenant {id} not found"),
                }))
            }
        }
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({
            "error": format!("Failed to delete tenant: {e}"),
        })),
    }
}
