//! Stats persistence adapters.

mod in_memory;

pub use in_memory::InMemoryStatsRepository;
