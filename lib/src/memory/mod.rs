// lib/src/memory/mod.rs

//! The in-memory patient graph store. Graphs live only for the lifetime of
//! the process; there is no persistence layer.

pub mod datastore;

pub use datastore::GraphStore;
