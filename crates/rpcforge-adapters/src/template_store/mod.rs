//! Template storage adapters.

mod memory;

pub use memory::InMemoryStore;
