//! Marketplace: buyer/seller session, onboarding and screen service.

pub mod app;
pub mod config;
pub mod error;
pub mod guard;
pub mod onboarding;
pub mod screens;
pub mod session;

pub use error::{Error, Result};
