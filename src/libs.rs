pub mod core;
pub mod logging;
pub mod models;
pub mod settings;
pub mod storage;
