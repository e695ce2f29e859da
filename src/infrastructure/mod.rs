//! Infrastructure layer for external integrations.
//!
//! This layer implements interfaces defined by the domain layer.
//!
//! # Modules
//!
//! - [`headhunter`] - hh.ru vacancy search client
//! - [`persistence`] - JSON file vacancy repository

pub mod headhunter;
pub mod persistence;
