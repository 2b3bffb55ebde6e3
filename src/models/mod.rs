//! Domain models
//!
//! This module contains all domain models representing game entities
//! and concepts. Models are pure data structures with minimal logic.

pub mod config;
pub mod constants;
pub mod errors;
pub mod outcome;
pub mod question;
pub mod session;
