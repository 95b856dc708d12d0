pub mod config;
pub mod init;
pub mod push;
pub mod sheet;
pub mod watch;
