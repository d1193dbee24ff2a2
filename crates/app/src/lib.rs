#![forbid(unsafe_code)]

pub mod config;
pub mod http;
pub mod telemetry;

pub use config::{AppConfig, ArgsError, Invocation};
pub use http::{AppState, HttpError, build_router};
