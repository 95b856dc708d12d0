pub mod config;
pub mod date;
pub mod issue;
pub mod pipeline;
pub mod push;
pub mod reader;
pub mod record;
pub mod sheet;
pub mod validate;
pub mod watch;
