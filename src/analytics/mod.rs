//! 问卷统计引擎
//!
//! 纯计算模块：输入为已加载的发放、模板、题目和答卷快照，输出可序列化的统计报告。
//! 不做任何 I/O，不缓存，不修改输入，相同输入总是得到相同输出。
//!
//! # 组成
//! - `normalize`: 按题目抽取有效答案
//! - `question`: 按题型计算单题统计
//! - `sentiment`: 开放题关键词情感判定
//! - `distribution`: 发放级汇总
//! - `breakdown`: 按日期/班级/提交方式分组

pub mod breakdown;
pub mod distribution;
pub mod format;
pub mod normalize;
pub mod question;
pub mod sentiment;

#[cfg(test)]
pub(crate) mod test_support;

pub use question::calculate_question_analytics;
pub use sentiment::analyze_sentiment;

use crate::models::surveys::entities::{
    SurveyDistribution, SurveyQuestion, SurveyResponse, SurveyTemplate,
};
use crate::models::surveys::responses::{
    DemographicBreakdown, DistributionStatistics, QuestionAnalytics, SurveyAnalytics,
};

/// 计算问卷分析报告
///
/// `questions` 需按 `order_index` 排好序，报告中的题目顺序与之一致。
pub fn calculate_survey_analytics(
    distribution: &SurveyDistribution,
    template: &SurveyTemplate,
    questions: &[SurveyQuestion],
    responses: &[SurveyResponse],
) -> SurveyAnalytics {
    let question_analytics: Vec<QuestionAnalytics> = questions
        .iter()
        .map(|question| calculate_question_analytics(question, responses))
        .collect();

    SurveyAnalytics {
        distribution_info: distribution::distribution_info(distribution, template, responses),
        overall_stats: distribution::overall_stats(questions, responses, &question_analytics),
        question_analytics,
    }
}

/// 计算发放统计（完成率、每日答卷数、班级分布、提交方式）
pub fn calculate_distribution_statistics(
    distribution: &SurveyDistribution,
    responses: &[SurveyResponse],
) -> DistributionStatistics {
    DistributionStatistics {
        distribution_id: distribution.id.clone(),
        total_responses: responses.len() as i64,
        completion_rate: distribution::completion_rate(distribution, responses),
        responses_by_day: breakdown::responses_by_day(responses),
        demographic_breakdown: DemographicBreakdown {
            by_class: breakdown::responses_by_class(responses),
        },
        submission_types: breakdown::responses_by_submission_type(responses),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::surveys::responses::{MetricValue, SentimentLabel};
    use serde_json::json;
    use crate::analytics::test_support::{distribution, question, response, template};

    fn sample_questions() -> Vec<SurveyQuestion> {
        vec![
            question("q1", "MULTIPLE_CHOICE", &["A", "B", "C"]),
            question("q2", "RATING", &[]),
            question("q3", "YES_NO", &[]),
            question("q4", "OPEN_ENDED", &[]),
        ]
    }

    fn sample_responses() -> Vec<SurveyResponse> {
        vec![
            response(
                "r1",
                &[
                    ("q1", json!("A")),
                    ("q2", json!(5)),
                    ("q3", json!("Evet")),
                    ("q4", json!("harika")),
                ],
            ),
            response(
                "r2",
                &[("q1", json!("B")), ("q2", json!("4")), ("q3", json!(false))],
            ),
            response(
                "r3",
                &[("q1", json!("A")), ("q4", json!("")), ("orphan", json!("x"))],
            ),
        ]
    }

    #[test]
    fn test_full_report() {
        let questions = sample_questions();
        let responses = sample_responses();

        let report =
            calculate_survey_analytics(&distribution(6, Some(10)), &template(), &questions, &responses);

        assert_eq!(report.distribution_info.response_rate, "50.0%");
        assert_eq!(report.overall_stats.total_responses, 3);
        assert_eq!(report.overall_stats.complete_responses, 3);
        assert_eq!(
            report.overall_stats.average_completion_time,
            MetricValue::NotAvailable
        );
        // q4 被跳过两次（r2 缺失，r3 为空），多于 q2/q3 的一次
        assert_eq!(
            report.overall_stats.most_skipped_question.as_deref(),
            Some("q4 text")
        );
        assert_eq!(
            report.overall_stats.satisfaction_score,
            MetricValue::Value(4.5)
        );

        let ids: Vec<&str> = report
            .question_analytics
            .iter()
            .map(|qa| qa.question_id.as_str())
            .collect();
        assert_eq!(ids, vec!["q1", "q2", "q3", "q4"]);

        let q1 = &report.question_analytics[0];
        assert_eq!(q1.response_rate, "100.0%");
        assert_eq!(q1.option_counts.as_ref().unwrap()[0].option, "A");

        let q3 = &report.question_analytics[2];
        assert_eq!((q3.yes_count, q3.no_count), (Some(1), Some(1)));

        let q4 = &report.question_analytics[3];
        assert_eq!(q4.response_rate, "33.3%");
        assert_eq!(
            q4.sentiment.as_ref().unwrap().overall,
            SentimentLabel::Positive
        );
    }

    #[test]
    fn test_empty_responses() {
        let questions = vec![
            question("q1", "MULTIPLE_CHOICE", &["A"]),
            question("q2", "OPEN_ENDED", &[]),
        ];

        let report = calculate_survey_analytics(&distribution(3, None), &template(), &questions, &[]);

        assert_eq!(report.distribution_info.response_rate, "0.0%");
        assert_eq!(report.overall_stats.most_skipped_question, None);
        assert_eq!(
            report.overall_stats.satisfaction_score,
            MetricValue::NotAvailable
        );
        for qa in &report.question_analytics {
            assert_eq!(qa.total_responses, 0);
            assert_eq!(qa.response_rate, "0%");
        }
        let sentiment = report.question_analytics[1].sentiment.as_ref().unwrap();
        assert_eq!(
            (sentiment.positive, sentiment.negative, sentiment.neutral),
            (0, 0, 0)
        );
        assert_eq!(sentiment.overall, SentimentLabel::Neutral);
    }

    #[test]
    fn test_report_is_deterministic() {
        let questions = sample_questions();
        let responses = sample_responses();
        let dist = distribution(6, Some(10));

        let first = calculate_survey_analytics(&dist, &template(), &questions, &responses);
        let second = calculate_survey_analytics(&dist, &template(), &questions, &responses);
        assert_eq!(first, second);
        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }

    #[test]
    fn test_rates_stay_within_bounds() {
        let questions = sample_questions();
        let responses = sample_responses();
        let report =
            calculate_survey_analytics(&distribution(3, None), &template(), &questions, &responses);

        for qa in &report.question_analytics {
            let rate: f64 = qa.response_rate.trim_end_matches('%').parse().unwrap();
            assert!((0.0..=100.0).contains(&rate));
        }
    }

    #[test]
    fn test_distribution_statistics() {
        let stats = calculate_distribution_statistics(&distribution(0, None), &sample_responses());

        assert_eq!(stats.distribution_id, "d1");
        assert_eq!(stats.total_responses, 3);
        assert_eq!(stats.completion_rate, "Sınırsız");
        assert_eq!(stats.responses_by_day["2024-03-01"], 3);
        assert!(stats.demographic_breakdown.by_class.is_empty());
        assert_eq!(stats.submission_types["ONLINE"], 3);

        let value = serde_json::to_value(&stats).unwrap();
        assert_eq!(value["completionRate"], json!("Sınırsız"));
        assert_eq!(value["demographicBreakdown"]["byClass"], json!({}));
    }
}
