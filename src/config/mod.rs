pub mod listings;
pub mod server;
