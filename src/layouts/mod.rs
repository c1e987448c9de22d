//! Layout implementations

pub mod json;
pub mod pattern;
pub mod simple;

pub use json::JsonLayout;
pub use pattern::PatternLayout;
pub use simple::SimpleLayout;

pub use crate::core::Layout;
