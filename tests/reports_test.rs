//! Scenario tests for the aggregate report computations.
//!
//! The report functions are pure reductions over already-fetched rows, so
//! these tests build rows in memory — no running server or database is
//! needed. Run with: `cargo test --test reports_test`

use chrono::Utc;
use uuid::Uuid;

use dormitory_backend::models::contracts::{self, ContractStatus};
use dormitory_backend::models::dormitories;
use dormitory_backend::models::payments::{self, PaymentStatus, RecentPayment};
use dormitory_backend::models::rooms::{self, RoomStatus};
use dormitory_backend::models::tenants;
use dormitory_backend::reports;

fn dorm(name: &str) -> dormitories::Model {
    dormitories::Model {
        id: Uuid::new_v4(),
        name: name.to_string(),
        location: None,
        created_at: Utc::now(),
    }
}

fn room(dorm_id: Uuid, name: &str, status: RoomStatus, price: Option<f64>) -> rooms::Model {
    rooms::Model {
        id: Uuid::new_v4(),
        dorm_id,
        name: name.to_string(),
        floor: None,
        room_type: None,
        price,
        status,
        created_at: Utc::now(),
    }
}

fn tenant(name: &str) -> tenants::Model {
    tenants::Model {
        id: Uuid::new_v4(),
        name: name.to_string(),
        phone: Some("081-234-5678".to_string()),
        note: None,
        created_at: Utc::now(),
    }
}

fn contract(tenant_id: Uuid, room_id: Uuid, status: ContractStatus) -> contracts::Model {
    contracts::Model {
        id: Uuid::new_v4(),
        tenant_id,
        room_id,
        start_date: None,
        end_date: None,
        deposit: Some(3000.0),
        status,
        created_at: Utc::now(),
    }
}

fn payment(month: &str, amount: f64, status: PaymentStatus) -> payments::Model {
    payments::Model {
        id: Uuid::new_v4(),
        contract_id: Uuid::new_v4(),
        month: month.to_string(),
        amount,
        status,
        paid_at: None,
        note: None,
        created_at: Utc::now(),
    }
}

#[test]
fn summary_counts_and_room_price_income() {
    let d = dorm("หอพัก A");
    let rooms = vec![
        room(d.id, "101", RoomStatus::Occupied, Some(3500.0)),
        room(d.id, "102", RoomStatus::Occupied, None), // no price → counts as 0
        room(d.id, "103", RoomStatus::Reserved, Some(4000.0)),
        room(d.id, "104", RoomStatus::Vacant, Some(3500.0)),
    ];
    let tenants = vec![tenant("สมชาย"), tenant("สมหญิง")];
    let contracts = vec![
        contract(tenants[0].id, rooms[0].id, ContractStatus::Active),
        contract(tenants[1].id, rooms[1].id, ContractStatus::Expired),
    ];

    let summary = reports::dormitory_summary(
        std::slice::from_ref(&d),
        &rooms,
        &tenants,
        &contracts,
    );

    assert_eq!(summary.dormitory_count, 1);
    assert_eq!(summary.room_count, 4);
    assert_eq!(summary.vacant_room_count, 1);
    assert_eq!(summary.tenant_count, 2);
    assert_eq!(summary.active_contract_count, 1);
    // Income approximates from non-vacant room prices, not payments:
    // 3500 (occupied) + 0 (no price) + 4000 (reserved counts too).
    assert_eq!(summary.monthly_income, 7500.0);
}

#[test]
fn summary_is_all_zero_for_empty_collections() {
    let summary = reports::dormitory_summary(&[], &[], &[], &[]);
    assert_eq!(summary.dormitory_count, 0);
    assert_eq!(summary.room_count, 0);
    assert_eq!(summary.vacant_room_count, 0);
    assert_eq!(summary.monthly_income, 0.0);
}

#[test]
fn occupancy_rate_three_of_four_rooms_is_75_percent() {
    let d = dorm("หอพัก A");
    let rooms = vec![
        room(d.id, "101", RoomStatus::Occupied, None),
        room(d.id, "102", RoomStatus::Occupied, None),
        room(d.id, "103", RoomStatus::Occupied, None),
        room(d.id, "104", RoomStatus::Vacant, None),
    ];

    let groups = reports::dormitory_occupancy(std::slice::from_ref(&d), &rooms);

    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].total_rooms, 4);
    assert_eq!(groups[0].occupied_rooms, 3);
    assert_eq!(groups[0].vacant_rooms, 1);
    assert_eq!(groups[0].occupancy_rate, 75);
}

#[test]
fn occupancy_rate_is_zero_for_dormitory_without_rooms() {
    let d = dorm("หอพักใหม่");
    let groups = reports::dormitory_occupancy(std::slice::from_ref(&d), &[]);
    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].total_rooms, 0);
    assert_eq!(groups[0].occupancy_rate, 0);
}

#[test]
fn dashboard_occupancy_ignores_rooms_of_unknown_dormitories() {
    let d = dorm("หอพัก A");
    let rooms = vec![
        room(d.id, "101", RoomStatus::Occupied, None),
        room(Uuid::new_v4(), "999", RoomStatus::Occupied, None),
    ];
    let groups = reports::dormitory_occupancy(std::slice::from_ref(&d), &rooms);
    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].total_rooms, 1);
}

#[test]
fn occupancy_report_keeps_rooms_of_unknown_dormitories() {
    let d = dorm("หอพัก A");
    let orphan = room(Uuid::new_v4(), "999", RoomStatus::Vacant, None);
    let rooms = vec![
        room(d.id, "101", RoomStatus::Occupied, None),
        orphan.clone(),
    ];

    let report = reports::occupancy_report(std::slice::from_ref(&d), &rooms);

    assert_eq!(report.total_rooms, 2);
    assert_eq!(report.occupied_rooms, 1);
    assert_eq!(report.vacant_rooms, 1);
    assert_eq!(report.occupancy_rate, 50);
    assert_eq!(report.dormitory_occupancy.len(), 2);
    let orphan_group = report
        .dormitory_occupancy
        .iter()
        .find(|g| g.id == orphan.dorm_id)
        .unwrap();
    assert_eq!(orphan_group.name, "ไม่ระบุหอพัก");
    assert_eq!(orphan_group.total_rooms, 1);
}

#[test]
fn income_report_totals_add_up_across_statuses() {
    let payments = vec![
        payment("2025-01", 3500.0, PaymentStatus::Paid),
        payment("2025-01", 4000.0, PaymentStatus::Pending),
        payment("2025-02", 3500.0, PaymentStatus::Paid),
        payment("2025-02", 1200.0, PaymentStatus::Cancelled),
    ];

    let report = reports::income_report(&payments);

    assert_eq!(report.paid_income, 7000.0);
    assert_eq!(report.pending_income, 4000.0);
    // Total includes every status, so total = paid + pending + cancelled.
    assert_eq!(report.total_income, 12200.0);
    assert_eq!(
        report.total_income,
        report.paid_income + report.pending_income + 1200.0
    );

    // Month buckets sum back to the total and sort ascending.
    let bucket_sum: f64 = report.monthly_income.iter().map(|m| m.amount).sum();
    assert_eq!(bucket_sum, report.total_income);
    assert_eq!(report.monthly_income.len(), 2);
    assert_eq!(report.monthly_income[0].month, "2025-01");
    assert_eq!(report.monthly_income[0].amount, 7500.0);
    assert_eq!(report.monthly_income[1].month, "2025-02");
    assert_eq!(report.monthly_income[1].amount, 4700.0);
}

#[test]
fn income_report_is_empty_for_no_payments() {
    let report = reports::income_report(&[]);
    assert_eq!(report.total_income, 0.0);
    assert_eq!(report.paid_income, 0.0);
    assert_eq!(report.pending_income, 0.0);
    assert!(report.monthly_income.is_empty());
}

#[test]
fn payment_status_rates_round_to_integers() {
    let payments = vec![
        payment("2025-01", 3500.0, PaymentStatus::Paid),
        payment("2025-01", 3500.0, PaymentStatus::Paid),
        payment("2025-02", 3500.0, PaymentStatus::Pending),
    ];

    let report = reports::payment_status_report(&payments, Vec::new());

    assert_eq!(report.total_payments, 3);
    assert_eq!(report.paid_count, 2);
    assert_eq!(report.pending_count, 1);
    assert_eq!(report.cancelled_count, 0);
    assert_eq!(report.paid_rate, 67); // 66.7 rounds up
    assert_eq!(report.pending_rate, 33);
    assert_eq!(report.cancelled_rate, 0);
}

#[test]
fn payment_status_rates_are_zero_when_there_are_no_payments() {
    let report = reports::payment_status_report(&[], Vec::new());
    assert_eq!(report.total_payments, 0);
    assert_eq!(report.paid_rate, 0);
    assert_eq!(report.pending_rate, 0);
    assert_eq!(report.cancelled_rate, 0);
    assert!(report.recent_payments.is_empty());
}

#[test]
fn payment_status_report_passes_recent_payments_through() {
    let recent = vec![RecentPayment {
        id: Uuid::new_v4(),
        month: "2025-03".to_string(),
        amount: 3500.0,
        status: PaymentStatus::Paid,
        tenant_name: "สมชาย".to_string(),
        room_name: "101".to_string(),
    }];
    let report = reports::payment_status_report(&[], recent);
    assert_eq!(report.recent_payments.len(), 1);
    assert_eq!(report.recent_payments[0].tenant_name, "สมชาย");
}

#[test]
fn overview_takes_each_rooms_tenant_from_its_active_contract() {
    let d = dorm("หอพัก A");
    let r1 = room(d.id, "101", RoomStatus::Occupied, Some(3500.0));
    let r2 = room(d.id, "102", RoomStatus::Vacant, Some(3500.0));
    let t1 = tenant("สมชาย");
    let t2 = tenant("สมหญิง");
    let contracts = vec![
        // An old cancelled contract on room 101 must not win over the
        // active one.
        contract(t2.id, r1.id, ContractStatus::Cancelled),
        contract(t1.id, r1.id, ContractStatus::Active),
    ];

    let overview = reports::dormitory_overview(
        std::slice::from_ref(&d),
        &[r1.clone(), r2.clone()],
        &contracts,
        &[t1.clone(), t2],
    );

    assert_eq!(overview.len(), 1);
    let dorm_view = &overview[0];
    assert_eq!(dorm_view.total_rooms, 2);
    assert_eq!(dorm_view.occupied_rooms, 1);
    assert_eq!(dorm_view.vacant_rooms, 1);
    assert_eq!(dorm_view.tenant_count, 1);
    assert_eq!(dorm_view.occupancy_rate, 50);

    let room_view = dorm_view.rooms.iter().find(|r| r.room.id == r1.id).unwrap();
    let tenant_info = room_view.tenant.as_ref().unwrap();
    assert_eq!(tenant_info.id, t1.id);
    assert_eq!(tenant_info.name, "สมชาย");

    let vacant_view = dorm_view.rooms.iter().find(|r| r.room.id == r2.id).unwrap();
    assert!(vacant_view.tenant.is_none());
}

#[test]
fn overview_is_empty_for_no_dormitories() {
    assert!(reports::dormitory_overview(&[], &[], &[], &[]).is_empty());
}
