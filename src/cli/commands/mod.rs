pub mod backup;
pub mod build_script;
pub mod config;
pub mod db;
pub mod export;
pub mod init;
pub mod log;
pub mod project;
pub mod session;
pub mod summary;
