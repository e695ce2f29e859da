//! Domain layer containing business entities and capability traits.
//!
//! # Architecture
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Storage and vacancy source trait definitions
//!
//! # Design Principles
//!
//! - Domain layer has no dependencies on infrastructure or presentation layers
//! - Traits define contracts implemented by the infrastructure layer
//! - Use-cases live in services (see [`crate::application::services`])

pub mod entities;
pub mod repositories;
