//! Prelude module for convenient imports

pub use super::attraction::Entity as Attraction;
pub use super::like::Entity as Like;
