//! # Catalog Repository
//!
//! Concrete repository implementation (adapter) for the product catalog.
//! This crate provides the in-memory store that implements the
//! `ProductRepository` port.

pub mod memory;


pub use memory::InMemoryProductRepo;
