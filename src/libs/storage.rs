pub mod directory_store;
pub mod records;
pub mod snapshot;
pub mod storage_traits;
