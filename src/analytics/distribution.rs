//! 发放级汇总：回答率、平均用时、最常跳过的题目、满意度

use super::format::{format_percent, round_to};
use super::normalize::count_skips;
use crate::models::surveys::entities::{
    SurveyDistribution, SurveyQuestion, SurveyResponse, SurveyTemplate,
};
use crate::models::surveys::responses::{
    DistributionInfo, MetricValue, OverallStats, QuestionAnalytics,
};

/// 不限制答卷数量时的完成率文本
pub const UNLIMITED: &str = "Sınırsız";

pub fn distribution_info(
    distribution: &SurveyDistribution,
    template: &SurveyTemplate,
    responses: &[SurveyResponse],
) -> DistributionInfo {
    let target_count = distribution.target_students.len();

    DistributionInfo {
        id: distribution.id.clone(),
        title: distribution.title.clone(),
        status: distribution.status,
        template_title: template.title.clone(),
        template_type: template.survey_type.clone(),
        target_count: target_count as i64,
        total_responses: responses.len() as i64,
        response_rate: format_percent(responses.len(), target_count)
            .unwrap_or_else(|| MetricValue::NOT_AVAILABLE.to_string()),
    }
}

pub fn overall_stats(
    questions: &[SurveyQuestion],
    responses: &[SurveyResponse],
    question_analytics: &[QuestionAnalytics],
) -> OverallStats {
    OverallStats {
        total_responses: responses.len() as i64,
        complete_responses: responses.iter().filter(|r| r.is_complete).count() as i64,
        average_completion_time: average_completion_time(responses),
        most_skipped_question: most_skipped_question(questions, responses),
        satisfaction_score: satisfaction_score(question_analytics),
    }
}

/// 答卷数 / 最大答卷数；未设置上限时为 "Sınırsız"
pub fn completion_rate(distribution: &SurveyDistribution, responses: &[SurveyResponse]) -> String {
    match distribution.max_responses {
        Some(max) if max > 0 => {
            format_percent(responses.len(), max as usize).unwrap_or_else(|| UNLIMITED.to_string())
        }
        _ => UNLIMITED.to_string(),
    }
}

/// 平均填写用时（分钟，取整）
fn average_completion_time(responses: &[SurveyResponse]) -> MetricValue {
    let times: Vec<f64> = responses
        .iter()
        .filter_map(|r| r.completion_time)
        .filter(|t| t.is_finite())
        .collect();

    if times.is_empty() {
        return MetricValue::NotAvailable;
    }
    let average = times.iter().sum::<f64>() / times.len() as f64;
    MetricValue::Value(average.round())
}

/// 跳过次数最多的题目
///
/// 需严格大于当前最大值才替换，因此同数时取靠前的题目；没有任何跳过时为 None。
fn most_skipped_question(
    questions: &[SurveyQuestion],
    responses: &[SurveyResponse],
) -> Option<String> {
    let mut max_skips = 0;
    let mut most_skipped = None;

    for question in questions {
        let skips = count_skips(&question.id, responses);
        if skips > max_skips {
            max_skips = skips;
            most_skipped = Some(question.question_text.clone());
        }
    }

    most_skipped
}

/// 评分类题目平均分的均值，保留两位小数
fn satisfaction_score(question_analytics: &[QuestionAnalytics]) -> MetricValue {
    let ratings: Vec<f64> = question_analytics
        .iter()
        .filter(|qa| qa.question_type.is_rating())
        .map(|qa| qa.average_rating.unwrap_or(0.0))
        .collect();

    if ratings.is_empty() {
        return MetricValue::NotAvailable;
    }
    let average = ratings.iter().sum::<f64>() / ratings.len() as f64;
    MetricValue::Value(round_to(average, 2))
}
