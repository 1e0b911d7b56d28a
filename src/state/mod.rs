//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`session`, `toasts`) so individual components
//! can depend on small focused models. Each model is a plain struct held in
//! a `RwSignal` provided via context from the root component.

pub mod session;
pub mod toasts;
