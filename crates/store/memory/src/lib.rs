mod store;

pub use store::MemoryParcelStore;
