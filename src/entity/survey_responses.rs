//! 问卷答卷实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "survey_responses")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub distribution_id: String,
    pub student_id: Option<String>,
    // JSON 对象 {name, class, number}
    #[sea_orm(column_type = "Text", nullable)]
    pub student_info: Option<String>,
    // JSON 对象，题目 ID → 答案
    #[sea_orm(column_type = "Text")]
    pub response_data: String,
    pub submission_type: Option<String>,
    pub is_complete: bool,
    pub completion_time: Option<f64>,
    pub created_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::survey_distributions::Entity",
        from = "Column::DistributionId",
        to = "super::survey_distributions::Column::Id"
    )]
    Distribution,
}

impl Related<super::survey_distributions::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Distribution.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_survey_response(self) -> crate::models::surveys::entities::SurveyResponse {
        use crate::models::surveys::entities::{
            AnswerValue, ResponseData, StudentInfo, SurveyResponse,
        };
        use chrono::{DateTime, Utc};

        let response_data: ResponseData =
            match serde_json::from_str::<serde_json::Map<String, serde_json::Value>>(
                &self.response_data,
            ) {
                Ok(map) => map
                    .iter()
                    .map(|(question_id, value)| {
                        (question_id.clone(), AnswerValue::from_json(value))
                    })
                    .collect(),
                Err(e) => {
                    tracing::warn!(
                        "Response {}: invalid response_data JSON ({}), treating as empty",
                        self.id,
                        e
                    );
                    ResponseData::new()
                }
            };

        let student_info = self
            .student_info
            .as_deref()
            .and_then(|raw| serde_json::from_str::<serde_json::Value>(raw).ok())
            .and_then(|value| StudentInfo::from_json(&value));

        SurveyResponse {
            id: self.id,
            distribution_id: self.distribution_id,
            student_id: self.student_id,
            student_info,
            response_data,
            submission_type: self.submission_type.and_then(|s| s.parse().ok()),
            is_complete: self.is_complete,
            completion_time: self.completion_time,
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::surveys::entities::{AnswerValue, SubmissionType};

    fn model(response_data: &str) -> Model {
        Model {
            id: "r1".into(),
            distribution_id: "d1".into(),
            student_id: Some("s1".into()),
            student_info: Some(r#"{"name":"Ali","class":"9-A","number":17}"#.into()),
            response_data: response_data.into(),
            submission_type: Some("MANUAL_EXCEL".into()),
            is_complete: true,
            completion_time: Some(7.5),
            created_at: 1_709_287_200,
        }
    }

    #[test]
    fn test_into_survey_response() {
        let response =
            model(r#"{"q1":"A","q2":4,"q3":true,"q4":null,"q5":""}"#).into_survey_response();

        assert_eq!(response.answer("q1"), Some(&AnswerValue::Text("A".into())));
        assert_eq!(response.answer("q2"), Some(&AnswerValue::Number(4.0)));
        assert_eq!(response.answer("q3"), Some(&AnswerValue::Bool(true)));
        assert_eq!(response.answer("q4"), None);
        assert_eq!(response.answer("q5"), None);
        assert_eq!(response.submission_type, Some(SubmissionType::ManualExcel));
        assert_eq!(
            response.student_info.unwrap().class_name.as_deref(),
            Some("9-A")
        );
        assert_eq!(
            response.created_at.format("%Y-%m-%d").to_string(),
            "2024-03-01"
        );
    }

    #[test]
    fn test_invalid_response_data_is_empty() {
        let response = model("not json").into_survey_response();
        assert!(response.response_data.is_empty());
    }
}
