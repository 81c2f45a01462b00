pub mod survey_analytics;

pub use survey_analytics::SurveyAnalyticsService;
