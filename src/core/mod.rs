//! Configuration, data model and run bookkeeping

pub mod config;
pub mod events;
pub mod models;
pub mod report;
