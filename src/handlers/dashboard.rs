use actix_web::{HttpResponse, Responder, web};
use sea_orm::{DatabaseConnection, DbErr};

use crate::cache::{CacheConfig, CacheData, views};
use crate::db::contracts as contract_db;
use crate::db::dormitories as dorm_db;
use crate::db::payments as payment_db;
use crate::db::rooms as room_db;
use crate::db::tenants as tenant_db;
use crate::reports::{self, DormitorySummary, OccupancySummary};

/// How many rows the recent-payments card shows.
const RECENT_PAYMENT_LIMIT: u64 = 5;

async fn compute_summary(db: &DatabaseConnection) -> Result<DormitorySummary, DbErr> {
    let dorms = dorm_db::get_all_dormitories(db).await?;
    let rooms = room_db::get_all_rooms(db).await?;
    let tenants = tenant_db::get_all_tenants(db).await?;
    let contracts = contract_db::get_all_contracts(db).await?;
    Ok(reports::dormitory_summary(
        &dorms, &rooms, &tenants, &contracts,
    ))
}

async fn compute_occupancy(db: &DatabaseConnection) -> Result<Vec<OccupancySummary>, DbErr> {
    let dorms = dorm_db::get_all_dormitories(db).await?;
    let rooms = room_db::get_all_rooms(db).await?;
    Ok(reports::dormitory_occupancy(&dorms, &rooms))
}

/// GET /api/dashboard/summary — headline counts and the room-price income
/// approximation, recomputed from current rows (cached briefly).
pub async fn summary(
    db: web::Data<DatabaseConnection>,
    cache: web::Data<CacheData>,
    config: web::Data<CacheConfig>,
) -> impl Responder {
    match cache.get::<DormitorySummary>(views::DASHBOARD_SUMMARY).await {
        Ok(Some(cached)) => return HttpResponse::Ok().json(cached),
        Ok(None) => {}
        Err(e) => tracing::warn!("Cache error: {e}"),
    }

    match compute_summary(db.get_ref()).await {
        Ok(summary) => {
            let _ = cache
                .set(views::DASHBOARD_SUMMARY, &summary, config.dashboard_ttl)
                .await;
            HttpResponse::Ok().json(summary)
        }
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({
            "error": format!("Failed to compute summary: {e}"),
        })),
    }
}

/// GET /api/dashboard/occupancy — per-dormitory occupancy for the chart.
pub async fn occupancy(
    db: web::Data<DatabaseConnection>,
    cache: web::Data<CacheData>,
    config: web::Data<CacheConfig>,
) -> impl Responder {
    match cache
        .get::<Vec<OccupancySummary>>(views::DASHBOARD_OCCUPANCY)
        .await
    {
        Ok(Some(cached)) => return HttpResponse::Ok().json(cached),
        Ok(None) => {}
        Err(e) => tracing::warn!("Cache error: {e}"),
    }

    match compute_occupancy(db.get_ref()).await {
        Ok(occupancy) => {
            let _ = cache
                .set(views::DASHBOARD_OCCUPANCY, &occupancy, config.dashboard_ttl)
                .await;
            HttpResponse::Ok().json(occupancy)
        }
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({
            "error": format!("Failed to compute occupancy: {e}"),
        })),
    }
}

/// GET /api/dashboard/recent-payments — the 5 newest payments with display
/// names. Cheap enough to skip the cache.
pub async fn recent_payments(db: web::Data<DatabaseConnection>) -> impl Responder {
    match payment_db::get_recent_payments(db.get_ref(), RECENT_PAYMENT_LIMIT).await {
        Ok(payments) => HttpResponse::Ok().json(payments),
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({
            "error": format!("Failed to fetch recent payments: {e}"),
        })),
    }
}
