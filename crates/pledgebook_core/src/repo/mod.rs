//! Store layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define per-store data access contracts keyed by participant address.
//! - Isolate SQLite query details from the operation façade.
//!
//! # Invariants
//! - Store writes must enforce record `validate()` before persistence.
//! - Store APIs return semantic errors (`NotFound`, `AlreadyExists`) in
//!   addition to DB transport errors.

pub mod registry_store;
