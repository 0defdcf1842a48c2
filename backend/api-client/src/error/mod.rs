pub mod client;
pub mod config;
pub mod copy;
pub mod sentinel;
