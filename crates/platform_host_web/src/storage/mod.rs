//! Concrete storage adapters: durable app-state snapshots, per-app key-value pairs,
//! and small synchronous preferences.

pub mod indexed_db;
pub mod indexed_kv;
pub mod local_prefs;
