//! Remote drinks service: wire types, HTTP client, and the command worker
//! that serializes every remote operation.

mod client;
mod error;
mod types;
pub mod worker;

pub use client::{DrinkService, DrinksApi};
pub use error::ApiError;
pub use types::{Drink, DrinkDraft, DrinkId};
