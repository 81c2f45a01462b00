//! 按日期、班级、提交方式分组计数

use std::collections::BTreeMap;

use crate::models::surveys::entities::{SubmissionType, SurveyResponse};

/// 按提交日期（UTC，`YYYY-MM-DD`）计数
pub fn responses_by_day(responses: &[SurveyResponse]) -> BTreeMap<String, i64> {
    let mut by_day = BTreeMap::new();
    for response in responses {
        let day = response.created_at.format("%Y-%m-%d").to_string();
        *by_day.entry(day).or_insert(0) += 1;
    }
    by_day
}

/// 按班级计数，缺少班级信息的答卷不计入
pub fn responses_by_class(responses: &[SurveyResponse]) -> BTreeMap<String, i64> {
    let mut by_class = BTreeMap::new();
    for response in responses {
        let class_name = response
            .student_info
            .as_ref()
            .and_then(|info| info.class_name.as_deref())
            .filter(|name| !name.is_empty());
        if let Some(class_name) = class_name {
            *by_class.entry(class_name.to_string()).or_insert(0) += 1;
        }
    }
    by_class
}

/// 按提交方式计数，未标记的视为在线提交
pub fn responses_by_submission_type(responses: &[SurveyResponse]) -> BTreeMap<String, i64> {
    let mut by_type = BTreeMap::new();
    for response in responses {
        let submission_type = response.submission_type.unwrap_or(SubmissionType::Online);
        *by_type
            .entry(submission_type.as_str().to_string())
            .or_insert(0) += 1;
    }
    by_type
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::test_support::{at, response};
    use crate::models::surveys::entities::StudentInfo;

    #[test]
    fn test_group_by_day() {
        let mut r1 = response("r1", &[]);
        r1.created_at = at(2024, 3, 1, 8);
        let mut r2 = response("r2", &[]);
        r2.created_at = at(2024, 3, 1, 23);
        let mut r3 = response("r3", &[]);
        r3.created_at = at(2024, 3, 2, 0);

        let by_day = responses_by_day(&[r1, r2, r3]);
        assert_eq!(by_day.len(), 2);
        assert_eq!(by_day["2024-03-01"], 2);
        assert_eq!(by_day["2024-03-02"], 1);
    }

    #[test]
    fn test_group_by_class_skips_missing() {
        let with_class = |id: &str, class_name: Option<&str>| {
            let mut r = response(id, &[]);
            r.student_info = Some(StudentInfo {
                name: Some("Öğrenci".into()),
                class_name: class_name.map(str::to_string),
                number: None,
            });
            r
        };

        let responses = vec![
            with_class("r1", Some("9-A")),
            with_class("r2", Some("9-A")),
            with_class("r3", Some("10-B")),
            with_class("r4", None),
            with_class("r5", Some("")),
            response("r6", &[]),
        ];

        let by_class = responses_by_class(&responses);
        assert_eq!(by_class.len(), 2);
        assert_eq!(by_class["9-A"], 2);
        assert_eq!(by_class["10-B"], 1);
    }

    #[test]
    fn test_submission_type_defaults_to_online() {
        let mut manual = response("r1", &[]);
        manual.submission_type = Some(SubmissionType::ManualExcel);
        let mut online = response("r2", &[]);
        online.submission_type = Some(SubmissionType::Online);
        let unmarked = response("r3", &[]);

        let by_type = responses_by_submission_type(&[manual, online, unmarked]);
        assert_eq!(by_type["ONLINE"], 2);
        assert_eq!(by_type["MANUAL_EXCEL"], 1);
    }
}
