pub mod cache;
pub mod db;
pub mod handlers;
pub mod models;
pub mod occupancy;
pub mod reports;

pub use db::create_pool;
