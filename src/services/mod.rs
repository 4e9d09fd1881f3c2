pub mod classifier;
pub mod event_table;
pub mod payload;
pub mod store;
