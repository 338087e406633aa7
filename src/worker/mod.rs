//! Run pipeline: discovery, per-item processing, delivery and orchestration

pub mod deliver;
pub mod discover;
pub mod orchestrator;
pub mod process;

pub use discover::{ITEM_CAP, discover_items};
pub use orchestrator::{Collaborators, Orchestrator, RunSettings};
pub use process::ItemProcessor;
