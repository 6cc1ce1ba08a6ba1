pub mod contracts;
pub mod dormitories;
pub mod payments;
pub mod rooms;
pub mod tenants;
pub mod utilities;

/// Fallback display names used when a joined row is missing (the client has
/// always shown these Thai placeholders, so they are part of the wire format).
pub const UNKNOWN_TENANT: &str = "ไม่ระบุชื่อ";
pub const UNKNOWN_ROOM: &str = "ไม่ระบุห้อง";
pub const UNKNOWN_DORM: &str = "ไม่ระบุหอพัก";
