pub mod impact_service;
pub mod offer_detail_service;
pub mod offer_metadata_service;
