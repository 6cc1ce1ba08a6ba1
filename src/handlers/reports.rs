use actix_web::{HttpResponse, Responder, web};
use sea_orm::{DatabaseConnection, DbErr};

use crate::cache::{CacheConfig, CacheData, views};
use crate::db::dormitories as dorm_db;
use crate::db::payments as payment_db;
use crate::db::rooms as room_db;
use crate::reports::{self, IncomeReport, OccupancyReport, PaymentStatusReport};

async fn compute_income(db: &DatabaseConnection) -> Result<IncomeReport, DbErr> {
    let payments = payment_db::get_all_payments(db).await?;
    Ok(reports::income_report(&payments))
}

async fn compute_occupancy(db: &DatabaseConnection) -> Result<OccupancyReport, DbErr> {
    let dorms = dorm_db::get_all_dormitories(db).await?;
    let rooms = room_db::get_all_rooms(db).await?;
    Ok(reports::occupancy_report(&dorms, &rooms))
}

async fn compute_payment_status(db: &DatabaseConnection) -> Result<PaymentStatusReport, DbErr> {
    let payments = payment_db::get_all_payments(db).await?;
    let recent = payment_db::get_recent_payments(db, 5).await?;
    Ok(reports::payment_status_report(&payments, recent))
}

/// GET /api/reports/income — payment-based income totals and month buckets.
pub async fn income(
    db: web::Data<DatabaseConnection>,
    cache: web::Data<CacheData>,
    config: web::Data<CacheConfig>,
) -> impl Responder {
    match cache.get::<IncomeReport>(views::INCOME_REPORT).await {
        Ok(Some(cached)) => return HttpResponse::Ok().json(cached),
        Ok(None) => {}
        Err(e) => tracing::warn!("Cache error: {e}"),
    }

    match compute_income(db.get_ref()).await {
        Ok(report) => {
            let _ = cache
                .set(views::INCOME_REPORT, &report, config.report_ttl)
                .await;
            HttpResponse::Ok().json(report)
        }
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({
            "error": format!("Failed to compute income report: {e}"),
        })),
    }
}

/// GET /api/reports/occupancy — global and per-dormitory occupancy.
pub async fn occupancy(
    db: web::Data<DatabaseConnection>,
    cache: web::Data<CacheData>,
    config: web::Data<CacheConfig>,
) -> impl Responder {
    match cache.get::<OccupancyReport>(views::OCCUPANCY_REPORT).await {
        Ok(Some(cached)) => return HttpResponse::Ok().json(cached),
        Ok(None) => {}
        Err(e) => tracing::warn!("Cache error: {e}"),
    }

    match compute_occupancy(db.get_ref()).await {
        Ok(report) => {
            let _ = cache
                .set(views::OCCUPANCY_REPORT, &report, config.report_ttl)
                .await;
            HttpResponse::Ok().json(report)
        }
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({
            "error": format!("Failed to compute occupancy report: {e}"),
        })),
    }
}

/// GET /api/reports/payment-status — counts, rates, and recent payments.
pub async fn payment_status(
    db: web::Data<DatabaseConnection>,
    cache: web::Data<CacheData>,
    config: web::Data<CacheConfig>,
) -> impl Responder {
    match cache
        .get::<PaymentStatusReport>(views::PAYMENT_STATUS_REPORT)
        .await
    {
        Ok(Some(cached)) => return HttpResponse::Ok().json(cached),
        Ok(None) => {}
        Err(e) => tracing::warn!("Cache error: {e}"),
    }

    match compute_payment_status(db.get_ref()).await {
        Ok(report) => {
            let _ = cache
                .set(views::PAYMENT_STATUS_REPORT, &report, config.report_ttl)
                .await;
            HttpResponse::Ok().json(report)
        }
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({
            "error": format!("Failed to compute payment status report: {e}"),
        })),
    }
}
