pub mod api_response;
pub mod entity_ruler;
pub mod filter_extractor;
