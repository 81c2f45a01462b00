use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 题目类型
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuestionType {
    MultipleChoice, // 单选
    Dropdown,       // 下拉选择
    Likert,         // 李克特量表
    Rating,         // 评分
    YesNo,          // 是/否
    OpenEnded,      // 开放题
    Unknown(String),
}

impl QuestionType {
    pub const MULTIPLE_CHOICE: &'static str = "MULTIPLE_CHOICE";
    pub const DROPDOWN: &'static str = "DROPDOWN";
    pub const LIKERT: &'static str = "LIKERT";
    pub const RATING: &'static str = "RATING";
    pub const YES_NO: &'static str = "YES_NO";
    pub const OPEN_ENDED: &'static str = "OPEN_ENDED";

    pub fn as_str(&self) -> &str {
        match self {
            QuestionType::MultipleChoice => Self::MULTIPLE_CHOICE,
            QuestionType::Dropdown => Self::DROPDOWN,
            QuestionType::Likert => Self::LIKERT,
            QuestionType::Rating => Self::RATING,
            QuestionType::YesNo => Self::YES_NO,
            QuestionType::OpenEnded => Self::OPEN_ENDED,
            QuestionType::Unknown(raw) => raw,
        }
    }

    /// 是否为评分类题目（参与满意度计算）
    pub fn is_rating(&self) -> bool {
        matches!(self, QuestionType::Likert | QuestionType::Rating)
    }
}

// 未知类型不报错，原样保留
impl From<&str> for QuestionType {
    fn from(s: &str) -> Self {
        match s {
            Self::MULTIPLE_CHOICE => QuestionType::MultipleChoice,
            Self::DROPDOWN => QuestionType::Dropdown,
            Self::LIKERT => QuestionType::Likert,
            Self::RATING => QuestionType::Rating,
            Self::YES_NO => QuestionType::YesNo,
            Self::OPEN_ENDED => QuestionType::OpenEnded,
            other => QuestionType::Unknown(other.to_string()),
        }
    }
}

impl Serialize for QuestionType {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for QuestionType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(QuestionType::from(s.as_str()))
    }
}

impl std::fmt::Display for QuestionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// 发放状态
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, TS)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[ts(export, export_to = "../frontend/src/types/generated/survey.ts")]
pub enum DistributionStatus {
    Draft,    // 草稿
    Active,   // 收集中
    Closed,   // 已关闭
    Archived, // 已归档
}

impl<'de> Deserialize<'de> for DistributionStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(|_| {
            serde::de::Error::custom(format!(
                "无效的发放状态: '{s}'. 支持的状态: DRAFT, ACTIVE, CLOSED, ARCHIVED"
            ))
        })
    }
}

impl std::fmt::Display for DistributionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DistributionStatus::Draft => write!(f, "DRAFT"),
            DistributionStatus::Active => write!(f, "ACTIVE"),
            DistributionStatus::Closed => write!(f, "CLOSED"),
            DistributionStatus::Archived => write!(f, "ARCHIVED"),
        }
    }
}

impl std::str::FromStr for DistributionStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "DRAFT" => Ok(DistributionStatus::Draft),
            "ACTIVE" => Ok(DistributionStatus::Active),
            "CLOSED" => Ok(DistributionStatus::Closed),
            "ARCHIVED" => Ok(DistributionStatus::Archived),
            _ => Err(format!("Invalid distribution status: {s}")),
        }
    }
}

// 答卷提交方式
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, TS)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[ts(export, export_to = "../frontend/src/types/generated/survey.ts")]
pub enum SubmissionType {
    Online,      // 在线填写
    ManualExcel, // Excel 手工导入
}

impl SubmissionType {
    pub const ONLINE: &'static str = "ONLINE";
    pub const MANUAL_EXCEL: &'static str = "MANUAL_EXCEL";

    pub fn as_str(&self) -> &'static str {
        match self {
            SubmissionType::Online => Self::ONLINE,
            SubmissionType::ManualExcel => Self::MANUAL_EXCEL,
        }
    }
}

impl std::str::FromStr for SubmissionType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            Self::ONLINE => Ok(SubmissionType::Online),
            Self::MANUAL_EXCEL => Ok(SubmissionType::ManualExcel),
            _ => Err(format!("Invalid submission type: {s}")),
        }
    }
}

/// 单个答案
///
/// 答卷中的原始值类型不固定：选择题和开放题为文本，评分题为数字或数字字符串，
/// 是否题为布尔值或 "Evet"/"Hayır"。各统计分支在使用时再做类型转换。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(untagged)]
#[ts(export, export_to = "../frontend/src/types/generated/survey.ts")]
pub enum AnswerValue {
    Bool(bool),
    Number(f64),
    Text(String),
}

impl AnswerValue {
    /// 从任意 JSON 值转换；`null` 视为未作答
    ///
    /// 数组按逗号拼接为文本，对象保留其 JSON 文本。
    pub fn from_json(value: &serde_json::Value) -> Option<Self> {
        use serde_json::Value;

        match value {
            Value::Null => None,
            Value::Bool(b) => Some(AnswerValue::Bool(*b)),
            Value::Number(n) => n.as_f64().map(AnswerValue::Number),
            Value::String(s) => Some(AnswerValue::Text(s.clone())),
            Value::Array(items) => {
                let joined = items
                    .iter()
                    .map(|item| match AnswerValue::from_json(item) {
                        Some(v) => v.to_string(),
                        None => String::new(),
                    })
                    .collect::<Vec<_>>()
                    .join(",");
                Some(AnswerValue::Text(joined))
            }
            Value::Object(_) => Some(AnswerValue::Text(value.to_string())),
        }
    }

    /// 空字符串等同于未作答
    pub fn is_blank(&self) -> bool {
        matches!(self, AnswerValue::Text(s) if s.is_empty())
    }

    /// 转为数值，无法解析时返回 None
    pub fn as_number(&self) -> Option<f64> {
        let n = match self {
            AnswerValue::Number(n) => *n,
            AnswerValue::Text(s) => s.trim().parse::<f64>().ok()?,
            AnswerValue::Bool(_) => return None,
        };
        n.is_finite().then_some(n)
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            AnswerValue::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl std::fmt::Display for AnswerValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AnswerValue::Bool(b) => write!(f, "{b}"),
            AnswerValue::Number(n) => write!(f, "{}", format_number(*n)),
            AnswerValue::Text(s) => write!(f, "{s}"),
        }
    }
}

/// 数字的文本形式：整数不带小数点（`5` 而不是 `5.0`）
pub fn format_number(n: f64) -> String {
    if n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        format!("{n}")
    }
}

/// 题目 ID → 答案
pub type ResponseData = HashMap<String, Option<AnswerValue>>;

// 学生信息
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/survey.ts")]
pub struct StudentInfo {
    pub name: Option<String>,
    #[serde(rename = "class")]
    pub class_name: Option<String>,
    pub number: Option<String>,
}

impl StudentInfo {
    /// 宽松解析：数字字段（如学号）转为文本
    pub fn from_json(value: &serde_json::Value) -> Option<Self> {
        let obj = value.as_object()?;
        let field = |key: &str| {
            obj.get(key)
                .and_then(AnswerValue::from_json)
                .map(|v| v.to_string())
        };
        Some(StudentInfo {
            name: field("name"),
            class_name: field("class"),
            number: field("number"),
        })
    }
}

// 问卷模板
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/survey.ts")]
pub struct SurveyTemplate {
    pub id: String,
    pub title: String,
    // 模板类型
    #[serde(rename = "type")]
    pub survey_type: String,
    // 是否符合教育部规范
    pub meb_compliant: bool,
    // 预计用时（分钟）
    pub estimated_duration: Option<i32>,
    pub target_grades: Vec<String>,
}

// 问卷题目
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/survey.ts")]
pub struct SurveyQuestion {
    pub id: String,
    pub template_id: String,
    pub question_text: String,
    #[ts(type = "string")]
    pub question_type: QuestionType,
    pub required: bool,
    // 模板内唯一，决定显示顺序
    pub order_index: i32,
    pub options: Option<Vec<String>>,
}

// 问卷发放
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/survey.ts")]
pub struct SurveyDistribution {
    pub id: String,
    pub template_id: String,
    pub title: String,
    pub target_classes: Vec<String>,
    pub target_students: Vec<String>,
    pub status: DistributionStatus,
    pub start_date: Option<chrono::DateTime<chrono::Utc>>,
    pub end_date: Option<chrono::DateTime<chrono::Utc>>,
    pub allow_anonymous: bool,
    // 为空表示不限制答卷数量
    pub max_responses: Option<i64>,
}

// 答卷
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/survey.ts")]
pub struct SurveyResponse {
    pub id: String,
    pub distribution_id: String,
    pub student_id: Option<String>,
    pub student_info: Option<StudentInfo>,
    pub response_data: ResponseData,
    pub submission_type: Option<SubmissionType>,
    pub is_complete: bool,
    // 填写用时（分钟）
    pub completion_time: Option<f64>,
    #[serde(rename = "created_at")]
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl SurveyResponse {
    /// 读取某题的答案，未作答（缺失、null、空字符串）返回 None
    pub fn answer(&self, question_id: &str) -> Option<&AnswerValue> {
        self.response_data
            .get(question_id)
            .and_then(Option::as_ref)
            .filter(|v| !v.is_blank())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_question_type_parse() {
        let parsed: QuestionType = serde_json::from_value(json!("YES_NO")).unwrap();
        assert_eq!(parsed, QuestionType::YesNo);

        let unknown: QuestionType = serde_json::from_value(json!("MATRIX")).unwrap();
        assert_eq!(unknown, QuestionType::Unknown("MATRIX".to_string()));
        assert_eq!(serde_json::to_value(&unknown).unwrap(), json!("MATRIX"));
    }

    #[test]
    fn test_distribution_status_roundtrip() {
        let status: DistributionStatus = serde_json::from_value(json!("CLOSED")).unwrap();
        assert_eq!(status, DistributionStatus::Closed);
        assert_eq!(status.to_string(), "CLOSED");
        assert!(serde_json::from_value::<DistributionStatus>(json!("OPEN")).is_err());
    }

    #[test]
    fn test_answer_from_json() {
        assert_eq!(AnswerValue::from_json(&json!(null)), None);
        assert_eq!(
            AnswerValue::from_json(&json!(true)),
            Some(AnswerValue::Bool(true))
        );
        assert_eq!(
            AnswerValue::from_json(&json!(4)),
            Some(AnswerValue::Number(4.0))
        );
        assert_eq!(
            AnswerValue::from_json(&json!(["A", "B"])),
            Some(AnswerValue::Text("A,B".to_string()))
        );
    }

    #[test]
    fn test_answer_as_number() {
        assert_eq!(AnswerValue::Text(" 4.5 ".into()).as_number(), Some(4.5));
        assert_eq!(AnswerValue::Text("çok".into()).as_number(), None);
        assert_eq!(AnswerValue::Text("NaN".into()).as_number(), None);
        assert_eq!(AnswerValue::Bool(true).as_number(), None);
        assert_eq!(AnswerValue::Number(3.0).as_number(), Some(3.0));
    }

    #[test]
    fn test_answer_display() {
        assert_eq!(AnswerValue::Number(5.0).to_string(), "5");
        assert_eq!(AnswerValue::Number(4.5).to_string(), "4.5");
        assert_eq!(AnswerValue::Bool(false).to_string(), "false");
    }

    #[test]
    fn test_student_info_numeric_number() {
        let info = StudentInfo::from_json(&json!({"name": "Ayşe", "class": "9-A", "number": 112}))
            .unwrap();
        assert_eq!(info.class_name.as_deref(), Some("9-A"));
        assert_eq!(info.number.as_deref(), Some("112"));
    }

    #[test]
    fn test_response_answer_skips_blank() {
        let mut data = ResponseData::new();
        data.insert("q1".into(), Some(AnswerValue::Text(String::new())));
        data.insert("q2".into(), None);
        data.insert("q3".into(), Some(AnswerValue::Number(0.0)));
        let response = SurveyResponse {
            id: "r1".into(),
            distribution_id: "d1".into(),
            student_id: None,
            student_info: None,
            response_data: data,
            submission_type: None,
            is_complete: true,
            completion_time: None,
            created_at: chrono::Utc::now(),
        };
        assert!(response.answer("q1").is_none());
        assert!(response.answer("q2").is_none());
        assert!(response.answer("q4").is_none());
        assert_eq!(response.answer("q3"), Some(&AnswerValue::Number(0.0)));
    }
}
