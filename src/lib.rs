//! Alexandria Library Management System
//!
//! Core integrity and availability engine for the Alexandria library
//! catalog: entity validation, ISBN checking, lending-availability
//! derivation and role-based loan quotas, all computed over pluggable
//! storage capabilities.

pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;
pub mod validation;

pub use config::AppConfig;
pub use error::{AppError, AppResult};
