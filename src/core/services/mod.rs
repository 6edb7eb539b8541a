pub mod insights_service;
pub mod recommendation_service;

pub use insights_service::InsightsService;
pub use recommendation_service::RecommendationService;
