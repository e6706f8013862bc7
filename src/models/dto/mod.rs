pub mod model_payload;
pub mod request;
pub mod response;
