//! Heroes, powers and their links, independent of storage and HTTP.
//!
//! `entities` has the types and the two validation rules (description
//! length, strength values). `ports` has the repository traits the SQLite
//! adapters implement.

pub mod entities;
pub mod ports;
