//! Network layer: the authenticated fetch contract, token inspection, and
//! typed REST helpers.

pub mod api;
pub mod http;
pub mod token;
pub mod types;
