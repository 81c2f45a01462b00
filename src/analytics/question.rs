//! 单题统计
//!
//! 按题型分派到不同的统计方法：
//! - 单选/下拉：各选项计数与占比
//! - 李克特/评分：平均分与分值分布
//! - 是否题：是/否计数
//! - 开放题：原始答案、平均长度与情感分布

use std::collections::BTreeMap;

use super::format::{format_percent, percentage, to_fixed};
use super::normalize::extract_answers;
use super::sentiment::analyze_sentiment;
use crate::models::surveys::entities::{
    AnswerValue, QuestionType, SurveyQuestion, SurveyResponse, format_number,
};
use crate::models::surveys::responses::{OptionCount, QuestionAnalytics};

/// 计算单题统计
///
/// `responses` 为该发放下的全部答卷，作为回答率的分母。
pub fn calculate_question_analytics(
    question: &SurveyQuestion,
    responses: &[SurveyResponse],
) -> QuestionAnalytics {
    let answers = extract_answers(&question.id, responses);
    let total_responses = answers.len();

    let mut analytics = QuestionAnalytics {
        question_id: question.id.clone(),
        question_text: question.question_text.clone(),
        question_type: question.question_type.clone(),
        total_responses: total_responses as i64,
        response_rate: format_percent(total_responses, responses.len())
            .unwrap_or_else(|| "0%".to_string()),
        option_counts: None,
        average_rating: None,
        distribution: None,
        yes_count: None,
        no_count: None,
        responses: None,
        average_length: None,
        sentiment: None,
    };

    match question.question_type {
        QuestionType::MultipleChoice | QuestionType::Dropdown => {
            let options = question.options.as_deref().unwrap_or_default();
            analytics.option_counts = Some(count_options(options, &answers));
        }
        QuestionType::Likert | QuestionType::Rating => {
            let (average, distribution) = summarize_ratings(&answers);
            analytics.average_rating = Some(average);
            analytics.distribution = Some(distribution);
        }
        QuestionType::YesNo => {
            let (yes, no) = tally_yes_no(&answers);
            analytics.yes_count = Some(yes);
            analytics.no_count = Some(no);
        }
        QuestionType::OpenEnded => {
            let texts: Vec<String> = answers.iter().map(|a| a.to_string()).collect();
            analytics.average_length = Some(average_length(&texts));
            analytics.sentiment = Some(analyze_sentiment(&texts));
            analytics.responses = Some(answers.into_iter().cloned().collect());
        }
        QuestionType::Unknown(_) => {}
    }

    analytics
}

/// 选项计数，按次数降序（稳定排序，同数保持模板顺序）
fn count_options(options: &[String], answers: &[&AnswerValue]) -> Vec<OptionCount> {
    let total = answers.len();

    let mut counts: Vec<OptionCount> = options
        .iter()
        .map(|option| {
            let count = answers
                .iter()
                .filter(|answer| answer.as_text() == Some(option.as_str()))
                .count();
            OptionCount {
                option: option.clone(),
                count: count as i64,
                percentage: percentage(count, total)
                    .map(|p| to_fixed(p, 1))
                    .unwrap_or_else(|| "0".to_string()),
            }
        })
        .collect();

    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts
}

/// 平均分与分值分布，无法转为数字的答案直接忽略
fn summarize_ratings(answers: &[&AnswerValue]) -> (f64, BTreeMap<String, i64>) {
    let ratings: Vec<f64> = answers.iter().filter_map(|a| a.as_number()).collect();

    let average = if ratings.is_empty() {
        0.0
    } else {
        ratings.iter().sum::<f64>() / ratings.len() as f64
    };

    let mut distribution = BTreeMap::new();
    for rating in &ratings {
        *distribution.entry(format_number(*rating)).or_insert(0) += 1;
    }

    (average, distribution)
}

/// 是/否计数，其他值忽略
fn tally_yes_no(answers: &[&AnswerValue]) -> (i64, i64) {
    let mut yes = 0;
    let mut no = 0;

    for answer in answers {
        match answer {
            AnswerValue::Bool(true) => yes += 1,
            AnswerValue::Bool(false) => no += 1,
            AnswerValue::Text(s) if s == "Evet" || s == "yes" => yes += 1,
            AnswerValue::Text(s) if s == "Hayır" || s == "no" => no += 1,
            _ => {}
        }
    }

    (yes, no)
}

/// 平均长度（按 UTF-16 码元计），无答案时为 0
fn average_length(texts: &[String]) -> f64 {
    if texts.is_empty() {
        return 0.0;
    }
    let total: usize = texts.iter().map(|t| t.encode_utf16().count()).sum();
    total as f64 / texts.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::test_support::{answers_for, question, response};
    use crate::models::surveys::responses::SentimentLabel;
    use serde_json::json;

    #[test]
    fn test_multiple_choice_counts() {
        let q = question("q1", "MULTIPLE_CHOICE", &["A", "B", "C"]);
        let responses = answers_for(
            "q1",
            &[json!("A"), json!("A"), json!("B"), json!("A"), json!("C")],
        );

        let analytics = calculate_question_analytics(&q, &responses);
        assert_eq!(analytics.total_responses, 5);
        assert_eq!(analytics.response_rate, "100.0%");
        assert_eq!(
            analytics.option_counts.unwrap(),
            vec![
                OptionCount {
                    option: "A".into(),
                    count: 3,
                    percentage: "60.0".into()
                },
                OptionCount {
                    option: "B".into(),
                    count: 1,
                    percentage: "20.0".into()
                },
                OptionCount {
                    option: "C".into(),
                    count: 1,
                    percentage: "20.0".into()
                },
            ]
        );
        assert!(analytics.average_rating.is_none());
    }

    #[test]
    fn test_option_sort_is_stable() {
        let q = question("q1", "DROPDOWN", &["X", "Y", "Z", "W"]);
        let responses = answers_for("q1", &[json!("W"), json!("Z"), json!("W")]);

        let counts = calculate_question_analytics(&q, &responses)
            .option_counts
            .unwrap();
        let order: Vec<&str> = counts.iter().map(|c| c.option.as_str()).collect();
        assert_eq!(order, vec!["W", "Z", "X", "Y"]);
    }

    #[test]
    fn test_option_counts_ignore_unlisted_answers() {
        let q = question("q1", "MULTIPLE_CHOICE", &["A", "B"]);
        let responses = answers_for("q1", &[json!("A"), json!("Diğer"), json!(1)]);

        let analytics = calculate_question_analytics(&q, &responses);
        let counts = analytics.option_counts.unwrap();
        let sum: i64 = counts.iter().map(|c| c.count).sum();
        assert!(sum <= analytics.total_responses);
        assert_eq!(sum, 1);
        assert_eq!(counts[0].percentage, "33.3");
    }

    #[test]
    fn test_choice_without_answers() {
        let q = question("q1", "MULTIPLE_CHOICE", &["A", "B"]);
        let analytics = calculate_question_analytics(&q, &[]);
        assert_eq!(analytics.response_rate, "0%");
        let counts = analytics.option_counts.unwrap();
        assert!(counts.iter().all(|c| c.count == 0 && c.percentage == "0"));
    }

    #[test]
    fn test_choice_without_options() {
        let q = question("q1", "MULTIPLE_CHOICE", &[]);
        let responses = answers_for("q1", &[json!("A")]);
        let analytics = calculate_question_analytics(&q, &responses);
        assert_eq!(analytics.option_counts, Some(vec![]));
    }

    #[test]
    fn test_rating_average_and_distribution() {
        let q = question("q1", "RATING", &[]);
        let mut responses = answers_for("q1", &[json!(5), json!(4), json!("5"), json!(3)]);
        responses.push(response("r-empty", &[]));

        let analytics = calculate_question_analytics(&q, &responses);
        assert_eq!(analytics.total_responses, 4);
        assert_eq!(analytics.response_rate, "80.0%");
        assert_eq!(analytics.average_rating, Some(4.25));

        let distribution = analytics.distribution.unwrap();
        assert_eq!(distribution.len(), 3);
        assert_eq!(distribution["5"], 2);
        assert_eq!(distribution["4"], 1);
        assert_eq!(distribution["3"], 1);
    }

    #[test]
    fn test_rating_drops_non_numeric() {
        let q = question("q1", "LIKERT", &[]);
        let responses = answers_for("q1", &[json!("iyi"), json!(2), json!(true)]);

        let analytics = calculate_question_analytics(&q, &responses);
        assert_eq!(analytics.total_responses, 3);
        assert_eq!(analytics.average_rating, Some(2.0));
        assert_eq!(analytics.distribution.unwrap().len(), 1);
    }

    #[test]
    fn test_rating_without_numeric_answers() {
        let q = question("q1", "LIKERT", &[]);
        let responses = answers_for("q1", &[json!("bilmiyorum")]);
        let analytics = calculate_question_analytics(&q, &responses);
        assert_eq!(analytics.average_rating, Some(0.0));
        assert!(analytics.distribution.unwrap().is_empty());
    }

    #[test]
    fn test_yes_no_counts() {
        let q = question("q1", "YES_NO", &[]);
        let responses = answers_for(
            "q1",
            &[json!("Evet"), json!("Hayır"), json!("Evet"), json!(true)],
        );

        let analytics = calculate_question_analytics(&q, &responses);
        assert_eq!(analytics.yes_count, Some(3));
        assert_eq!(analytics.no_count, Some(1));
    }

    #[test]
    fn test_yes_no_ignores_other_values() {
        let q = question("q1", "YES_NO", &[]);
        let responses = answers_for(
            "q1",
            &[json!("no"), json!(false), json!("belki"), json!("EVET"), json!("yes")],
        );

        let analytics = calculate_question_analytics(&q, &responses);
        assert_eq!(analytics.total_responses, 5);
        assert_eq!(analytics.yes_count, Some(1));
        assert_eq!(analytics.no_count, Some(2));
    }

    #[test]
    fn test_open_ended_summary() {
        let q = question("q1", "OPEN_ENDED", &[]);
        let responses = answers_for(
            "q1",
            &[
                json!("çok iyi bir deneyim"),
                json!("berbat geçti"),
                json!("normal"),
            ],
        );

        let analytics = calculate_question_analytics(&q, &responses);
        let sentiment = analytics.sentiment.unwrap();
        assert_eq!(sentiment.positive, 1);
        assert_eq!(sentiment.negative, 1);
        assert_eq!(sentiment.neutral, 1);
        assert_eq!(sentiment.overall, SentimentLabel::Neutral);

        // 19 + 12 + 6
        assert_eq!(analytics.average_length, Some(37.0 / 3.0));
        assert_eq!(analytics.responses.unwrap().len(), 3);
    }

    #[test]
    fn test_open_ended_without_answers() {
        let q = question("q1", "OPEN_ENDED", &[]);
        let analytics = calculate_question_analytics(&q, &[]);
        assert_eq!(analytics.total_responses, 0);
        assert_eq!(analytics.average_length, Some(0.0));
        assert_eq!(analytics.responses, Some(vec![]));
        assert_eq!(
            analytics.sentiment.unwrap().overall,
            SentimentLabel::Neutral
        );
    }

    #[test]
    fn test_unknown_type_has_only_common_fields() {
        let q = question("q1", "MATRIX", &["A"]);
        let responses = answers_for("q1", &[json!("A")]);

        let analytics = calculate_question_analytics(&q, &responses);
        assert_eq!(analytics.total_responses, 1);
        assert_eq!(analytics.response_rate, "100.0%");
        assert!(analytics.option_counts.is_none());
        assert!(analytics.average_rating.is_none());
        assert!(analytics.yes_count.is_none());
        assert!(analytics.sentiment.is_none());
    }

    #[test]
    fn test_repeated_calls_are_identical() {
        let q = question("q1", "RATING", &[]);
        let responses = answers_for("q1", &[json!(1), json!("2.5"), json!(5)]);
        assert_eq!(
            calculate_question_analytics(&q, &responses),
            calculate_question_analytics(&q, &responses)
        );
    }
}
