//! Room occupancy transitions driven by contract changes.
//!
//! A room should read "ไม่ว่าง" (occupied) exactly while a contract with
//! status `active` points at it, and "ว่าง" (vacant) otherwise; the reserved
//! and maintenance states are manual overrides this rule never emits.
//!
//! The transition functions are pure: they return the ordered list of room
//! status writes a contract operation implies, and the handler applies them
//! after the contract row itself has been written. Room writes are
//! best-effort — a failure is logged, never rolled back — so the pair of
//! writes is not atomic. Concurrent edits on the same room can race; the
//! tool targets a single operator and accepts that window.

use uuid::Uuid;

use crate::models::contracts::ContractStatus;
use crate::models::rooms::RoomStatus;

/// One pending write to a room's status column. Changes are applied in
/// order; when a transition touches the same room twice the last write wins.
#[derive(Debug, Clone, PartialEq)]
pub struct RoomStatusChange {
    pub room_id: Uuid,
    pub status: RoomStatus,
}

fn occupy(room_id: Uuid) -> RoomStatusChange {
    RoomStatusChange {
        room_id,
        status: RoomStatus::Occupied,
    }
}

fn vacate(room_id: Uuid) -> RoomStatusChange {
    RoomStatusChange {
        room_id,
        status: RoomStatus::Vacant,
    }
}

/// A newly created contract always marks its room occupied, whatever status
/// the contract was created with: a room with a fresh contract on it is no
/// longer offered.
pub fn on_contract_created(room_id: Uuid) -> Vec<RoomStatusChange> {
    vec![occupy(room_id)]
}

/// Transition for an edited contract, given the room it pointed at before
/// the edit and the room/status it carries now.
///
/// When nothing relevant changed (same room, still active) no write is
/// emitted at all — the edit is a status no-op. When the room changed or the
/// contract left the active state, the previous room is vacated first, and
/// the new room is occupied afterwards if the contract is still active.
pub fn on_contract_updated(
    previous_room_id: Uuid,
    room_id: Uuid,
    status: &ContractStatus,
) -> Vec<RoomStatusChange> {
    let active = *status == ContractStatus::Active;
    let mut changes = Vec::new();

    if previous_room_id != room_id || !active {
        changes.push(vacate(previous_room_id));
        if active {
            changes.push(occupy(room_id));
        }
    }

    changes
}

/// A deleted contract returns its room to the vacant pool.
pub fn on_contract_deleted(room_id: Uuid) -> Vec<RoomStatusChange> {
    vec![vacate(room_id)]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn creating_a_contract_occupies_its_room() {
        let room = Uuid::new_v4();
        assert_eq!(on_contract_created(room), vec![occupy(room)]);
    }

    #[test]
    fn moving_an_active_contract_vacates_old_then_occupies_new() {
        let old_room = Uuid::new_v4();
        let new_room = Uuid::new_v4();
        let changes = on_contract_updated(old_room, new_room, &ContractStatus::Active);
        assert_eq!(changes, vec![vacate(old_room), occupy(new_room)]);
    }

    #[test]
    fn cancelling_a_contract_vacates_its_room() {
        let room = Uuid::new_v4();
        let changes = on_contract_updated(room, room, &ContractStatus::Cancelled);
        assert_eq!(changes, vec![vacate(room)]);
    }

    #[test]
    fn expiring_a_contract_on_a_new_room_only_vacates_the_old_one() {
        let old_room = Uuid::new_v4();
        let new_room = Uuid::new_v4();
        let changes = on_contract_updated(old_room, new_room, &ContractStatus::Expired);
        assert_eq!(changes, vec![vacate(old_room)]);
    }

    #[test]
    fn unchanged_active_contract_is_a_status_noop() {
        let room = Uuid::new_v4();
        assert!(on_contract_updated(room, room, &ContractStatus::Active).is_empty());
    }

    #[test]
    fn deleting_a_contract_vacates_its_room() {
        let room = Uuid::new_v4();
        assert_eq!(on_contract_deleted(room), vec![vacate(room)]);
    }
}
