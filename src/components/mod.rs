//! Shared UI components.

pub mod navigation;
pub mod toast_stack;
