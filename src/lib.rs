pub mod config;
pub mod service;
pub mod table;

pub use config::Config;
pub use service::{routes, SampleError};
