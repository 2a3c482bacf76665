pub mod chat;
pub mod classify;
pub mod help;
pub mod indicators;
