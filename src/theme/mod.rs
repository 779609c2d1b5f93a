//! Theme definitions and color mode handling.
//!
//! This module provides:
//!
//! - [`Theme`]: A named light/dark palette pair
//! - [`Palette`]: The concrete style record for one mode
//! - [`Mode`]: Light or dark color mode enum
//! - [`detect_mode`]/[`set_mode_detector`]: OS dark-mode detection
//!
//! Themes are plain data. Selecting one is a registry lookup (see
//! [`crate::registry`]), and the active selection lives in
//! [`crate::provider`].

mod detect;
mod palette;
#[allow(clippy::module_inception)]
mod theme;

pub use detect::{detect_mode, set_mode_detector};
pub use palette::{Mode, Palette};
pub use theme::Theme;
