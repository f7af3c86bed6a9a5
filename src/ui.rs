//! UI module for the favorite button
//!
//! # Architecture
//!
//! The UI is organized into layers:
//!
//! - **Animation** (`animation`): springs, tweens and the phase animator
//! - **Primitives** (`primitives`): Low-level canvas programs
//! - **Widgets** (`widgets`): The splash ornament and the favorite button

pub mod animation;
pub mod primitives;
pub mod theme;
pub mod widgets;
