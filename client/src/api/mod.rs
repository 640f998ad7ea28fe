pub mod client;
pub mod error;

pub use client::AttractionsClient;
pub use error::ApiClientError;
