//! Small client-side utilities.

pub mod guard;
