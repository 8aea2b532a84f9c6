pub mod analyze;
pub mod inherit;
pub mod init;
pub mod types;
