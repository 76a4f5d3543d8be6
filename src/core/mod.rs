//! Configuration and the data carried through a custom-resource request

pub mod config;
pub mod de;
pub mod models;
pub mod placeholder;
