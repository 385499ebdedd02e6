pub mod backup;
pub mod build_script;
pub mod config;
pub mod edit;
pub mod log;
pub mod project;
pub mod session;
pub mod summary;
