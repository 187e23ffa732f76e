pub mod listings_client;
