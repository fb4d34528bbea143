// Order facade and its agent tool adapter
pub mod orders;
pub mod tools;

// Persistence
pub mod store;

// HTTP surface
pub mod handlers;
pub mod models;
pub mod routes;

pub mod config;
pub mod telemetry;
