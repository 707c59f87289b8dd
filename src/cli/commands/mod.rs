pub mod config;
pub mod edit;
pub mod init;
pub mod process;
