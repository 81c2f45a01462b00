use std::collections::BTreeMap;

use serde::{Serialize, Serializer};
use ts_rs::TS;

use super::entities::{AnswerValue, DistributionStatus, QuestionType};

/// 可能缺失的统计值，缺失时输出 `"N/A"`
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MetricValue {
    Value(f64),
    NotAvailable,
}

impl MetricValue {
    pub const NOT_AVAILABLE: &'static str = "N/A";

    pub fn value(&self) -> Option<f64> {
        match self {
            MetricValue::Value(v) => Some(*v),
            MetricValue::NotAvailable => None,
        }
    }
}

impl Serialize for MetricValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            // 整数值不输出小数部分
            MetricValue::Value(v) if v.fract() == 0.0 && v.abs() < 1e15 => {
                serializer.serialize_i64(*v as i64)
            }
            MetricValue::Value(v) => serializer.serialize_f64(*v),
            MetricValue::NotAvailable => serializer.serialize_str(Self::NOT_AVAILABLE),
        }
    }
}

impl std::fmt::Display for MetricValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MetricValue::Value(v) => write!(f, "{v}"),
            MetricValue::NotAvailable => write!(f, "{}", Self::NOT_AVAILABLE),
        }
    }
}

/// 选项计数
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/survey.ts")]
pub struct OptionCount {
    pub option: String,
    pub count: i64,
    // 一位小数的百分比文本，如 "60.0"
    pub percentage: String,
}

/// 情感倾向
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export, export_to = "../frontend/src/types/generated/survey.ts")]
pub enum SentimentLabel {
    Positive,
    Negative,
    Neutral,
}

/// 开放题情感统计
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/survey.ts")]
pub struct SentimentSummary {
    pub positive: i64,
    pub negative: i64,
    pub neutral: i64,
    pub overall: SentimentLabel,
}

/// 单题统计
///
/// 公共字段总是存在，其余字段只在对应题型下出现。
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/survey.ts")]
pub struct QuestionAnalytics {
    pub question_id: String,
    pub question_text: String,
    #[ts(type = "string")]
    pub question_type: QuestionType,
    pub total_responses: i64,
    pub response_rate: String,

    // 选择题
    #[serde(skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub option_counts: Option<Vec<OptionCount>>,

    // 评分题
    #[serde(skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub average_rating: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub distribution: Option<BTreeMap<String, i64>>,

    // 是否题
    #[serde(skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub yes_count: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub no_count: Option<i64>,

    // 开放题
    #[serde(skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub responses: Option<Vec<AnswerValue>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub average_length: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub sentiment: Option<SentimentSummary>,
}

/// 发放信息
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/survey.ts")]
pub struct DistributionInfo {
    pub id: String,
    pub title: String,
    pub status: DistributionStatus,
    pub template_title: String,
    pub template_type: String,
    pub target_count: i64,
    pub total_responses: i64,
    // "X.X%" 或 "N/A"
    pub response_rate: String,
}

/// 整体统计
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/survey.ts")]
pub struct OverallStats {
    pub total_responses: i64,
    pub complete_responses: i64,
    #[ts(type = "number | string")]
    pub average_completion_time: MetricValue,
    pub most_skipped_question: Option<String>,
    #[ts(type = "number | string")]
    pub satisfaction_score: MetricValue,
}

/// 问卷分析报告
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/survey.ts")]
pub struct SurveyAnalytics {
    pub distribution_info: DistributionInfo,
    pub overall_stats: OverallStats,
    pub question_analytics: Vec<QuestionAnalytics>,
}

/// 人口统计分组
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/survey.ts")]
pub struct DemographicBreakdown {
    pub by_class: BTreeMap<String, i64>,
}

/// 发放统计
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/survey.ts")]
pub struct DistributionStatistics {
    pub distribution_id: String,
    pub total_responses: i64,
    // "X.X%" 或 "Sınırsız"
    pub completion_rate: String,
    pub responses_by_day: BTreeMap<String, i64>,
    pub demographic_breakdown: DemographicBreakdown,
    pub submission_types: BTreeMap<String, i64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_metric_value_serialize() {
        assert_eq!(
            serde_json::to_value(MetricValue::NotAvailable).unwrap(),
            json!("N/A")
        );
        assert_eq!(serde_json::to_value(MetricValue::Value(12.0)).unwrap(), json!(12));
        assert_eq!(
            serde_json::to_value(MetricValue::Value(4.25)).unwrap(),
            json!(4.25)
        );
    }

    #[test]
    fn test_question_analytics_omits_other_branches() {
        let analytics = QuestionAnalytics {
            question_id: "q1".into(),
            question_text: "Memnun musunuz?".into(),
            question_type: QuestionType::YesNo,
            total_responses: 2,
            response_rate: "100.0%".into(),
            option_counts: None,
            average_rating: None,
            distribution: None,
            yes_count: Some(1),
            no_count: Some(1),
            responses: None,
            average_length: None,
            sentiment: None,
        };
        let value = serde_json::to_value(&analytics).unwrap();
        assert_eq!(value["questionType"], json!("YES_NO"));
        assert_eq!(value["yesCount"], json!(1));
        assert!(value.get("optionCounts").is_none());
        assert!(value.get("sentiment").is_none());
    }
}
