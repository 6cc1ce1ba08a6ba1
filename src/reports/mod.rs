//! Pure aggregate computations over already-fetched rows.
//!
//! Every function here is a read-only reduction: it takes snapshots of the
//! relevant collections and returns a derived structure. Nothing is cached
//! or stored — figures are recomputed from current rows on every call —
//! and every function yields a well-defined result for empty input (zero
//! counts, 0% rates, empty groupings).
//!
//! Percentages use round-half-up integer semantics; missing numeric fields
//! count as 0; missing relations fall back to the placeholder labels in
//! `crate::models`.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::UNKNOWN_DORM;
use crate::models::contracts::{self, ContractStatus};
use crate::models::dormitories;
use crate::models::payments::{self, PaymentStatus, RecentPayment};
use crate::models::rooms::{self, RoomStatus};
use crate::models::tenants;

/// Integer percentage of `part` in `total`; 0 when `total` is 0.
fn rate(part: usize, total: usize) -> u32 {
    if total == 0 {
        0
    } else {
        (part as f64 / total as f64 * 100.0).round() as u32
    }
}

// ── Dashboard summary ──

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DormitorySummary {
    pub dormitory_count: usize,
    pub room_count: usize,
    pub vacant_room_count: usize,
    pub tenant_count: usize,
    pub active_contract_count: usize,
    pub monthly_income: f64,
}

/// Headline counts for the dashboard. Monthly income is a named
/// approximation: the summed price of every currently non-vacant room, not
/// a sum over actual payments (the income report does that instead).
pub fn dormitory_summary(
    dorms: &[dormitories::Model],
    rooms: &[rooms::Model],
    tenants: &[tenants::Model],
    contracts: &[contracts::Model],
) -> DormitorySummary {
    let vacant_room_count = rooms
        .iter()
        .filter(|r| r.status == RoomStatus::Vacant)
        .count();
    let active_contract_count = contracts
        .iter()
        .filter(|c| c.status == ContractStatus::Active)
        .count();
    let monthly_income = rooms
        .iter()
        .filter(|r| r.status != RoomStatus::Vacant)
        .map(|r| r.price.unwrap_or(0.0))
        .sum();

    DormitorySummary {
        dormitory_count: dorms.len(),
        room_count: rooms.len(),
        vacant_room_count,
        tenant_count: tenants.len(),
        active_contract_count,
        monthly_income,
    }
}

// ── Occupancy ──

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OccupancySummary {
    pub id: Uuid,
    pub name: String,
    pub total_rooms: usize,
    pub occupied_rooms: usize,
    pub vacant_rooms: usize,
    pub occupancy_rate: u32,
}

impl OccupancySummary {
    fn new(id: Uuid, name: String) -> Self {
        OccupancySummary {
            id,
            name,
            total_rooms: 0,
            occupied_rooms: 0,
            vacant_rooms: 0,
            occupancy_rate: 0,
        }
    }

    fn count(&mut self, room: &rooms::Model) {
        self.total_rooms += 1;
        if room.status != RoomStatus::Vacant {
            self.occupied_rooms += 1;
        } else {
            self.vacant_rooms += 1;
        }
    }
}

/// Per-dormitory occupancy for the dashboard chart. Groups follow the
/// order of `dorms`; rooms referencing an unknown dormitory are ignored.
pub fn dormitory_occupancy(
    dorms: &[dormitories::Model],
    rooms: &[rooms::Model],
) -> Vec<OccupancySummary> {
    let mut groups: Vec<OccupancySummary> = dorms
        .iter()
        .map(|d| OccupancySummary::new(d.id, d.name.clone()))
        .collect();
    let index: HashMap<Uuid, usize> = dorms
        .iter()
        .enumerate()
        .map(|(i, d)| (d.id, i))
        .collect();

    for room in rooms {
        if let Some(&i) = index.get(&room.dorm_id) {
            groups[i].count(room);
        }
    }

    for group in &mut groups {
        group.occupancy_rate = rate(group.occupied_rooms, group.total_rooms);
    }

    groups
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OccupancyReport {
    pub total_rooms: usize,
    pub occupied_rooms: usize,
    pub vacant_rooms: usize,
    pub occupancy_rate: u32,
    pub dormitory_occupancy: Vec<OccupancySummary>,
}

/// Global occupancy plus a per-dormitory breakdown. Unlike the dashboard
/// variant, rooms whose dormitory row is missing still appear, grouped
/// under the placeholder name; groups follow first-seen room order.
pub fn occupancy_report(
    dorms: &[dormitories::Model],
    rooms: &[rooms::Model],
) -> OccupancyReport {
    let total_rooms = rooms.len();
    let occupied_rooms = rooms
        .iter()
        .filter(|r| r.status != RoomStatus::Vacant)
        .count();
    let vacant_rooms = total_rooms - occupied_rooms;

    let names: HashMap<Uuid, &str> = dorms.iter().map(|d| (d.id, d.name.as_str())).collect();
    let mut groups: Vec<OccupancySummary> = Vec::new();
    let mut index: HashMap<Uuid, usize> = HashMap::new();

    for room in rooms {
        let i = *index.entry(room.dorm_id).or_insert_with(|| {
            let name = names
                .get(&room.dorm_id)
                .map(|n| n.to_string())
                .unwrap_or_else(|| UNKNOWN_DORM.to_string());
            groups.push(OccupancySummary::new(room.dorm_id, name));
            groups.len() - 1
        });
        groups[i].count(room);
    }

    for group in &mut groups {
        group.occupancy_rate = rate(group.occupied_rooms, group.total_rooms);
    }

    OccupancyReport {
        total_rooms,
        occupied_rooms,
        vacant_rooms,
        occupancy_rate: rate(occupied_rooms, total_rooms),
        dormitory_occupancy: groups,
    }
}

// ── Income ──

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthlyIncome {
    pub month: String,
    pub amount: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IncomeReport {
    pub total_income: f64,
    pub paid_income: f64,
    pub pending_income: f64,
    pub monthly_income: Vec<MonthlyIncome>,
}

/// Payment-based income totals. Total covers every row regardless of
/// status; the month buckets sort ascending on the "YYYY-MM" key, which is
/// also chronological.
pub fn income_report(payments: &[payments::Model]) -> IncomeReport {
    let total_income = payments.iter().map(|p| p.amount).sum();
    let paid_income = payments
        .iter()
        .filter(|p| p.status == PaymentStatus::Paid)
        .map(|p| p.amount)
        .sum();
    let pending_income = payments
        .iter()
        .filter(|p| p.status == PaymentStatus::Pending)
        .map(|p| p.amount)
        .sum();

    let mut buckets: HashMap<&str, f64> = HashMap::new();
    for payment in payments {
        *buckets.entry(payment.month.as_str()).or_insert(0.0) += payment.amount;
    }
    let mut monthly_income: Vec<MonthlyIncome> = buckets
        .into_iter()
        .map(|(month, amount)| MonthlyIncome {
            month: month.to_string(),
            amount,
        })
        .collect();
    monthly_income.sort_by(|a, b| a.month.cmp(&b.month));

    IncomeReport {
        total_income,
        paid_income,
        pending_income,
        monthly_income,
    }
}

// ── Payment status ──

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentStatusReport {
    pub total_payments: usize,
    pub paid_count: usize,
    pub pending_count: usize,
    pub cancelled_count: usize,
    pub paid_rate: u32,
    pub pending_rate: u32,
    pub cancelled_rate: u32,
    pub recent_payments: Vec<RecentPayment>,
}

/// Counts and integer rates per payment status, plus the recent payments
/// the caller already fetched (enriched with display names).
pub fn payment_status_report(
    payments: &[payments::Model],
    recent_payments: Vec<RecentPayment>,
) -> PaymentStatusReport {
    let total_payments = payments.len();
    let paid_count = payments
        .iter()
        .filter(|p| p.status == PaymentStatus::Paid)
        .count();
    let pending_count = payments
        .iter()
        .filter(|p| p.status == PaymentStatus::Pending)
        .count();
    let cancelled_count = payments
        .iter()
        .filter(|p| p.status == PaymentStatus::Cancelled)
        .count();

    PaymentStatusReport {
        total_payments,
        paid_count,
        pending_count,
        cancelled_count,
        paid_rate: rate(paid_count, total_payments),
        pending_rate: rate(pending_count, total_payments),
        cancelled_rate: rate(cancelled_count, total_payments),
        recent_payments,
    }
}

// ── Overview ──

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TenantInfo {
    pub id: Uuid,
    pub name: String,
    pub phone: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomOverview {
    #[serde(flatten)]
    pub room: rooms::Model,
    pub tenant: Option<TenantInfo>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DormitoryOverview {
    #[serde(flatten)]
    pub dormitory: dormitories::Model,
    pub rooms: Vec<RoomOverview>,
    pub total_rooms: usize,
    pub occupied_rooms: usize,
    pub vacant_rooms: usize,
    pub tenant_count: usize,
    pub occupancy_rate: u32,
}

/// Every dormitory with its room list; each room carries its current
/// tenant, derived from the first contract on that room whose status is
/// still active. Rooms referencing an unknown dormitory are dropped, as the
/// overview page always grouped strictly by known dormitories.
pub fn dormitory_overview(
    dorms: &[dormitories::Model],
    rooms: &[rooms::Model],
    contracts: &[contracts::Model],
    tenants: &[tenants::Model],
) -> Vec<DormitoryOverview> {
    let tenant_map: HashMap<Uuid, &tenants::Model> =
        tenants.iter().map(|t| (t.id, t)).collect();

    let mut overviews: Vec<DormitoryOverview> = dorms
        .iter()
        .map(|d| DormitoryOverview {
            dormitory: d.clone(),
            rooms: Vec::new(),
            total_rooms: 0,
            occupied_rooms: 0,
            vacant_rooms: 0,
            tenant_count: 0,
            occupancy_rate: 0,
        })
        .collect();
    let index: HashMap<Uuid, usize> = dorms
        .iter()
        .enumerate()
        .map(|(i, d)| (d.id, i))
        .collect();

    for room in rooms {
        let Some(&i) = index.get(&room.dorm_id) else {
            continue;
        };
        let overview = &mut overviews[i];

        let tenant = contracts
            .iter()
            .find(|c| c.room_id == room.id && c.status == ContractStatus::Active)
            .and_then(|c| tenant_map.get(&c.tenant_id))
            .map(|t| TenantInfo {
                id: t.id,
                name: t.name.clone(),
                phone: t.phone.clone(),
            });

        overview.total_rooms += 1;
        if room.status != RoomStatus::Vacant {
            overview.occupied_rooms += 1;
        } else {
            overview.vacant_rooms += 1;
        }
        if tenant.is_some() {
            overview.tenant_count += 1;
        }
        overview.rooms.push(RoomOverview {
            room: room.clone(),
            tenant,
        });
    }

    for overview in &mut overviews {
        overview.occupancy_rate = rate(overview.occupied_rooms, overview.total_rooms);
    }

    overviews
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rate_is_zero_for_empty_total() {
        assert_eq!(rate(0, 0), 0);
        assert_eq!(rate(5, 0), 0);
    }

    #[test]
    fn rate_rounds_half_up() {
        assert_eq!(rate(3, 4), 75);
        assert_eq!(rate(1, 3), 33);
        assert_eq!(rate(2, 3), 67);
        assert_eq!(rate(1, 8), 13); // 12.5 rounds up
    }
}
