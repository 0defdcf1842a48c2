pub mod envelope_error;
pub mod model_error;
pub mod server_error;
