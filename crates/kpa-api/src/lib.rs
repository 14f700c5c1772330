pub mod config;
pub mod error;
pub mod evaluation;
pub mod metrics;
pub mod middleware;
pub mod pronunciation;
pub mod router;
pub mod speaking;
pub mod state;
pub mod tracing;
pub mod v1;
pub mod validation;

pub use config::ApiConfig;
pub use state::ApiState;
