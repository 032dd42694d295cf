// src/statements/mod.rs
pub mod client;
pub mod models;

pub use client::StatementClient;
pub use models::{statement_range, StatementInfo};
