pub mod filesystem_config_store;
pub mod memory_config_store;

pub use filesystem_config_store::FilesystemConfigStore;
pub use memory_config_store::MemoryConfigStore;
