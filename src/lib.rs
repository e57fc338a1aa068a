pub mod config;
pub mod environment;
pub mod logging;
pub mod resolve;
pub mod version;
