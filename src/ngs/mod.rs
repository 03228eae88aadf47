mod client;
mod geoid_response;
mod lookup;

pub use client::new_client;
pub use lookup::{HeightLookup, LookupError, NgsClient};
