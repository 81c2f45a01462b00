pub mod survey_analytics;

pub use survey_analytics::configure_survey_analytics_routes;
