//! Entity module for database models

pub mod attraction;
pub mod like;
pub mod prelude;
