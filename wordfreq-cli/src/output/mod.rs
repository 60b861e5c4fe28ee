//! Output formatting and persistence

pub mod json;
pub mod text;
