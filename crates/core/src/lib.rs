//! Functional core for the catalog service.
//!
//! Pure types and functions shared by the HTTP shell: the product record, the
//! payload validator, the error-to-response mapping and the storage contracts.
//! Nothing in this crate performs I/O.

pub mod product;
pub mod storage;
