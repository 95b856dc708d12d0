pub mod messages;
pub mod preview;
pub mod prompt;
