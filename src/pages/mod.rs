//! Page components, one per route.

pub mod admin;
pub mod analytics;
pub mod etl;
pub mod home;
pub mod locate_to_map;
pub mod login;
pub mod map_search;
pub mod observations;
pub mod register;
pub mod settings;
