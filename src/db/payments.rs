use std::collections::HashMap;

use sea_orm::*;
use uuid::Uuid;

use crate::db::contracts::load_name_maps;
use crate::models::contracts;
use crate::models::payments::{
    self, CreatePayment, PaymentDetail, RecentPayment, UpdatePayment,
};
use crate::models::{UNKNOWN_DORM, UNKNOWN_ROOM, UNKNOWN_TENANT};

/// Insert a new payment.
pub async fn insert_payment(
    db: &DatabaseConnection,
    input: CreatePayment,
) -> Result<payments::Model, DbErr> {
    let new_payment = payments::ActiveModel {
        id: Set(Uuid::new_v4()),
        contract_id: Set(input.contract_id),
        month: Set(input.month),
        amount: Set(input.amount),
        status: Set(input.status),
        paid_at: Set(input.paid_at),
        note: Set(input.note),
        created_at: Set(chrono::Utc::now()),
    };

    new_payment.insert(db).await
}

/// Fetch all payments, newest first.
pub async fn get_all_payments(db: &DatabaseConnection) -> Result<Vec<payments::Model>, DbErr> {
    payments::Entity::find()
        .order_by_desc(payments::Column::CreatedAt)
        .all(db)
        .await
}

/// Fetch a single payment by ID.
pub async fn get_payment_by_id(
    db: &DatabaseConnection,
    id: Uuid,
) -> Result<Option<payments::Model>, DbErr> {
    payments::Entity::find_by_id(id).one(db).await
}

/// Update an existing payment (full row).
pub async fn update_payment(
    db: &DatabaseConnection,
    id: Uuid,
    input: UpdatePayment,
) -> Result<payments::Model, DbErr> {
    let payment = payments::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or(DbErr::RecordNotFound("Payment not found".to_string()))?;

    let mut active: payments::ActiveModel = payment.into();
    active.contract_id = Set(input.contract_id);
    active.month = Set(input.month);
    active.amount = Set(input.amount);
    active.status = Set(input.status);
    active.paid_at = Set(input.paid_at);
    active.note = Set(input.note);

    active.update(db).await
}

/// Delete a payment by ID.
pub async fn delete_payment(db: &DatabaseConnection, id: Uuid) -> Result<DeleteResult, DbErr> {
    payments::Entity::delete_by_id(id).exec(db).await
}

/// Fetch all payments enriched with tenant/room/dorm names via their
/// contract, newest first.
pub async fn get_payments_detailed(db: &DatabaseConnection) -> Result<Vec<PaymentDetail>, DbErr> {
    let payments = get_all_payments(db).await?;
    let contracts = contract_map(db).await?;
    let (tenants, rooms, dorms) = load_name_maps(db).await?;

    Ok(payments
        .into_iter()
        .map(|payment| {
            let contract = contracts.get(&payment.contract_id);
            let room = contract.and_then(|c| rooms.get(&c.room_id));
            PaymentDetail {
                tenant_name: contract
                    .and_then(|c| tenants.get(&c.tenant_id).cloned())
                    .unwrap_or_else(|| UNKNOWN_TENANT.to_string()),
                room_name: room
                    .map(|r| r.name.clone())
                    .unwrap_or_else(|| UNKNOWN_ROOM.to_string()),
                dorm_name: room
                    .and_then(|r| dorms.get(&r.dorm_id).cloned())
                    .unwrap_or_else(|| UNKNOWN_DORM.to_string()),
                payment,
            }
        })
        .collect())
}

/// The N most recently created payments with display names, for the
/// dashboard and the payment-status report.
pub async fn get_recent_payments(
    db: &DatabaseConnection,
    limit: u64,
) -> Result<Vec<RecentPayment>, DbErr> {
    let payments = payments::Entity::find()
        .order_by_desc(payments::Column::CreatedAt)
        .limit(limit)
        .all(db)
        .await?;
    let contracts = contract_map(db).await?;
    let (tenants, rooms, _) = load_name_maps(db).await?;

    Ok(payments
        .into_iter()
        .map(|payment| {
            let contract = contracts.get(&payment.contract_id);
            RecentPayment {
                id: payment.id,
                month: payment.month,
                amount: payment.amount,
                status: payment.status,
                tenant_name: contract
                    .and_then(|c| tenants.get(&c.tenant_id).cloned())
                    .unwrap_or_else(|| UNKNOWN_TENANT.to_string()),
                room_name: contract
                    .and_then(|c| rooms.get(&c.room_id))
                    .map(|r| r.name.clone())
                    .unwrap_or_else(|| UNKNOWN_ROOM.to_string()),
            }
        })
        .collect())
}

async fn contract_map(
    db: &DatabaseConnection,
) -> Result<HashMap<Uuid, contracts::Model>, DbErr> {
    Ok(contracts::Entity::find()
        .all(db)
        .await?
        .into_iter()
        .map(|c| (c.id, c))
        .collect())
}
