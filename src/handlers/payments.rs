use actix_web::{HttpResponse, Responder, web};
use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::cache::{CacheData, views};
use crate::db::payments as payment_db;
use crate::models::payments::{CreatePayment, UpdatePayment};

/// GET /api/payments — list payments with tenant/room/dormitory names,
/// newest first.
pub async fn get_payments(db: web::Data<DatabaseConnection>) -> impl Responder {
    match payment_db::get_payments_detailed(db.get_ref()).await {
        Ok(payments) => HttpResponse::Ok().json(payments),
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({
            "error": format!("Failed to fetch payments: {e}"),
        })),
    }
}

/// GET /api/payments/{id} — get a single payment.
pub async fn get_payment(
    db: web::Data<DatabaseConnection>,
    path: web::Path<Uuid>,
) -> impl Responder {
    let id = path.into_inner();
    match payment_db::get_payment_by_id(db.get_ref(), id).await {
        Ok(Some(payment)) => HttpResponse::Ok().json(payment),
        Ok(None) => HttpResponse::NotFound().json(serde_json::json!({
            "error": format!("Payment {id} not found"),
        })),
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({
            "error": format!("Database error: {e}"),
        })),
    }
}

/// POST /api/payments — record a month's rent payment for a contract.
pub async fn create_payment(
    db: web::Data<DatabaseConnection>,
    cache: web::Data<CacheData>,
    body: web::Json<CreatePayment>,
) -> impl Responder {
    match payment_db::insert_payment(db.get_ref(), body.into_inner()).await {
        Ok(payment) => {
            cache.invalidate(views::PAYMENT_VIEWS).await;
            HttpResponse::Created().json(payment)
        }
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({
            "error": format!("Failed to create payment: {e}"),
        })),
    }
}

/// PUT /api/payments/{id} — update a payment.
pub async fn update_payment(
    db: web::Data<DatabaseConnection>,
    cache: web::Data<CacheData>,
    path: web::Path<Uuid>,
    body: web::Json<UpdatePayment>,
) -> impl Responder {
    let id = path.into_inner();
    match payment_db::update_payment(db.get_ref(), id, body.into_inner()).await {
        Ok(updated) => {
            cache.invalidate(views::PAYMENT_VIEWS).await;
            HttpResponse::Ok().json(updated)
        }
        Err(e) => {
            let mut status = if e.to_string().contains("not found") {
                HttpResponse::NotFound()
            } else {
                HttpResponse::InternalServerError()
            };
            status.json(serde_json::json!({
                "error": format!("Failed to update payment: {e}"),
            }))
        }
    }
}

/// DELETE /api/payments/{id} — delete a payment.
pub async fn delete_payment(
    db: web::Data<DatabaseConnection>,
    cache: web::Data<CacheData>,
    path: web::Path<Uuid>,
) -> impl Responder {
    let id = path.into_inner();
    match payment_db::delete_payment(db.get_ref(), id).await {
        Ok(result) => {
            if result.rows_affected > 0 {
                cache.invalidate(views::PAYMENT_VIEWS).await;
                HttpResponse::Ok().json(serde_json::json!({
                    "message": format!("Payment {id} deleted"),
                }))
            } else {
                HttpResponse::NotFound().json(serde_json::json!({
                    "error": format!("Payment {id} not found"),
                }))
            }
        }
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({
            "error": format!("Failed to delete payment: {e}"),
        })),
    }
}
