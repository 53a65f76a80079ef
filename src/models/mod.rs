pub mod responses;

pub use responses::{GreetingResponse, HealthResponse};
