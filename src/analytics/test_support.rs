//! 测试用数据构造

use chrono::{DateTime, TimeZone, Utc};

use crate::models::surveys::entities::{
    AnswerValue, DistributionStatus, QuestionType, ResponseData, SurveyDistribution,
    SurveyQuestion, SurveyResponse, SurveyTemplate,
};

pub fn question(id: &str, question_type: &str, options: &[&str]) -> SurveyQuestion {
    SurveyQuestion {
        id: id.to_string(),
        template_id: "t1".to_string(),
        question_text: format!("{id} text"),
        question_type: QuestionType::from(question_type),
        required: false,
        order_index: 0,
        options: (!options.is_empty()).then(|| options.iter().map(|o| o.to_string()).collect()),
    }
}

pub fn response(id: &str, answers: &[(&str, serde_json::Value)]) -> SurveyResponse {
    let response_data: ResponseData = answers
        .iter()
        .map(|(qid, value)| (qid.to_string(), AnswerValue::from_json(value)))
        .collect();

    SurveyResponse {
        id: id.to_string(),
        distribution_id: "d1".to_string(),
        student_id: None,
        student_info: None,
        response_data,
        submission_type: None,
        is_complete: true,
        completion_time: None,
        created_at: at(2024, 3, 1, 10),
    }
}

/// 为同一题构造一组答卷
pub fn answers_for(question_id: &str, values: &[serde_json::Value]) -> Vec<SurveyResponse> {
    values
        .iter()
        .enumerate()
        .map(|(i, value)| response(&format!("r{i}"), &[(question_id, value.clone())]))
        .collect()
}

pub fn template() -> SurveyTemplate {
    SurveyTemplate {
        id: "t1".to_string(),
        title: "Okul İklimi Anketi".to_string(),
        survey_type: "OKUL_IKLIMI".to_string(),
        meb_compliant: true,
        estimated_duration: Some(15),
        target_grades: vec!["9".to_string(), "10".to_string()],
    }
}

pub fn distribution(target_students: usize, max_responses: Option<i64>) -> SurveyDistribution {
    SurveyDistribution {
        id: "d1".to_string(),
        template_id: "t1".to_string(),
        title: "2024 Bahar Dönemi".to_string(),
        target_classes: vec!["9-A".to_string()],
        target_students: (0..target_students).map(|i| format!("s{i}")).collect(),
        status: DistributionStatus::Active,
        start_date: None,
        end_date: None,
        allow_anonymous: false,
        max_responses,
    }
}

pub fn at(year: i32, month: u32, day: u32, hour: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, 0, 0)
        .single()
        .expect("valid test timestamp")
}
