pub mod document;
pub mod init;
pub mod list;
pub mod workflow;
