pub mod connector;
pub mod memory;
pub mod models;
pub mod queries;
pub mod store;
