// Business logic service implementations

pub mod attraction_service;
pub mod health;
pub mod like_service;
