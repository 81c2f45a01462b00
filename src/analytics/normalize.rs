//! 答案归一化：按题目抽取有效答案

use crate::models::surveys::entities::{AnswerValue, SurveyResponse};

/// 抽取某题的全部有效答案
///
/// 缺失、`null` 与空字符串不计入；`0`、`false`、`"0"` 视为已作答。
/// 结果保持答卷原有顺序。
pub fn extract_answers<'a>(question_id: &str, responses: &'a [SurveyResponse]) -> Vec<&'a AnswerValue> {
    responses
        .iter()
        .filter_map(|response| response.answer(question_id))
        .collect()
}

/// 统计某题被跳过的答卷数
pub fn count_skips(question_id: &str, responses: &[SurveyResponse]) -> usize {
    responses
        .iter()
        .filter(|response| response.answer(question_id).is_none())
        .count()
}
