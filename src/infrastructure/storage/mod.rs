mod common;
mod file_locks;
mod markdown_store;
mod memory_store;
pub use common::*;
pub use file_locks::FileLocks;
pub mod fs {
    pub use super::markdown_store::*;
}
pub mod memory {
    pub use super::memory_store::*;
}
