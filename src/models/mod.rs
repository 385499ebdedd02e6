pub mod field;
pub mod project;
pub mod session;
pub mod summary;
