pub mod config;
pub mod logging;

pub mod catalog;
pub mod fetch;
pub mod manifest;
pub mod safe_name;
pub mod storage;
pub mod sync;
