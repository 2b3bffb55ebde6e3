//! User interface and presentation
//!
//! This module contains presenters that handle formatting and displaying
//! session information to the player, separating presentation from the rules.

pub mod presenters;
