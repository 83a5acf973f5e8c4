pub mod config;
pub mod db;
pub mod handlers;
pub mod models;
pub mod notion;

pub use db::create_pool;
