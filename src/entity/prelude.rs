//! 预导入模块，方便使用

pub use super::survey_distributions::{
    Entity as SurveyDistributions, Model as SurveyDistributionModel,
};
pub use super::survey_questions::{Entity as SurveyQuestions, Model as SurveyQuestionModel};
pub use super::survey_responses::{Entity as SurveyResponses, Model as SurveyResponseModel};
pub use super::survey_templates::{Entity as SurveyTemplates, Model as SurveyTemplateModel};
