pub mod client_context;
pub mod http;
