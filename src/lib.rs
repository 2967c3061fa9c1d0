pub mod backend;
pub mod config;
pub mod error;
pub mod extractors;
pub mod logging;
pub mod models;
pub mod parser;
pub mod resource;
pub mod service;
pub mod startup;

// Re-export commonly used types for easier access
pub use models::{Customer, CustomerDto, Page};
pub use startup::{build_app, build_router, AppState};
