pub mod database;
pub mod dto;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;

pub use database::Database;
