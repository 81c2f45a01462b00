//! SeaORM 实体定义
//!
//! 这些实体用于数据库操作，与 models 模块中的业务实体分离。
//! Storage 层使用这些实体查询，然后转换为 models 中的业务实体。
//! 列表、对象类字段以 JSON 文本存储，时间为 Unix 秒。

pub mod prelude;

pub mod survey_distributions;
pub mod survey_questions;
pub mod survey_responses;
pub mod survey_templates;

/// 解析 JSON 字符串数组列，格式错误时记录警告并返回空列表
///
/// 数组中的数字元素会转为文本。
pub(crate) fn parse_string_list(raw: Option<&str>, column: &str) -> Vec<String> {
    let Some(raw) = raw.filter(|r| !r.trim().is_empty()) else {
        return Vec::new();
    };

    match serde_json::from_str::<Vec<serde_json::Value>>(raw) {
        Ok(items) => items
            .iter()
            .filter_map(crate::models::surveys::entities::AnswerValue::from_json)
            .map(|v| v.to_string())
            .collect(),
        Err(e) => {
            tracing::warn!("Invalid JSON list in {}: {}", column, e);
            Vec::new()
        }
    }
}
