// Web Interface module root
pub mod assets;
#[cfg(test)]
pub mod integration_tests;
pub mod routes;
pub mod types;
pub mod web_server;

// Re-export commonly used items
pub use routes::*;
pub use web_server::*;
