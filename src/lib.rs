pub mod cli;
pub mod config;
pub mod core;
pub mod cricinfo;
pub mod error;
pub mod scheduler;
pub mod server;
pub mod storage;
pub mod utils;
