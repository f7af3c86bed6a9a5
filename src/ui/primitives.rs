//! Primitive UI elements - atomic building blocks
//!
//! This module contains the lowest-level UI components that implement
//! iced's `canvas::Program` trait directly.
//!
//! # Design Principles
//!
//! - **No business logic**: Primitives must not import from `crate::app`
//! - **Generic Message types**: Use type parameters for flexibility
//! - **Plain data in, geometry out**: layers are records, not widgets
//!
//! # Contents
//!
//! - [`LayerStack`] - Ordered layer composition on a single canvas

pub mod layer_stack;

pub use layer_stack::{
    Anchor, Dot, Layer, LayerStack, Paint, Shape, Transform, UnitPoint, view_layer_stack,
};
