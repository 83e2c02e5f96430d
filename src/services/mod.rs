pub mod processing;
pub mod server;
