pub mod config;
pub mod errors;
pub mod guidance;
pub mod llm_client;
pub mod routes;
pub mod state;
