//! Storage subsystem
//!
//! Story records live only as long as the process. The `Storage` trait keeps the manager
//! independent from the backend; `MemoryStorage` is the in-process map used by the server.
//!
//! Components:
//! - `storage_trait`: the Storage trait defining a uniform API.
//! - `memory_storage`: mutex-guarded `HashMap` implementation.

pub mod memory_storage;
pub mod storage_trait;

pub use memory_storage::MemoryStorage;
pub use storage_trait::Storage;
