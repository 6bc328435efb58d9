pub mod config;
pub mod policy;
pub mod quiz;
pub mod session;
