use actix_web::{HttpResponse, Responder, web};
use sea_orm::{DatabaseConnection, DbErr};

use crate::cache::{CacheConfig, CacheData, views};
use crate::db::contracts as contract_db;
use crate::db::dormitories as dorm_db;
use crate::db::rooms as room_db;
use crate::db::tenants as tenant_db;
use crate::reports::{self, DormitoryOverview};

async fn compute_overview(db: &DatabaseConnection) -> Result<Vec<DormitoryOverview>, DbErr> {
    let dorms = dorm_db::get_all_dormitories(db).await?;
    let rooms = room_db::get_all_rooms(db).await?;
    let contracts = contract_db::get_all_contracts(db).await?;
    let tenants = tenant_db::get_all_tenants(db).await?;
    Ok(reports::dormitory_overview(
        &dorms, &rooms, &contracts, &tenants,
    ))
}

/// GET /api/overview — every dormitory with its rooms, each room carrying
/// the tenant of its active contract.
pub async fn get_overview(
    db: web::Data<DatabaseConnection>,
    cache: web::Data<CacheData>,
    config: web::Data<CacheConfig>,
) -> impl Responder {
    match cache.get::<Vec<DormitoryOverview>>(views::OVERVIEW).await {
        Ok(Some(cached)) => return HttpResponse::Ok().json(cached),
        Ok(None) => {}
        Err(e) => tracing::warn!("Cache error: {e}"),
    }

    match compute_overview(db.get_ref()).await {
        Ok(overview) => {
            let _ = cache
                .set(views::OVERVIEW, &overview, config.overview_ttl)
                .await;
            HttpResponse::Ok().json(overview)
        }
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({
            "error": format!("Failed to compute overview: {e}"),
        })),
    }
}
