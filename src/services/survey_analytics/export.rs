//! 问卷分析报告导出服务

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use chrono::Utc;
use rust_xlsxwriter::{Format, Workbook, Worksheet};
use tracing::error;

use super::SurveyAnalyticsService;
use super::snapshot::load_snapshot;
use crate::analytics::{calculate_distribution_statistics, calculate_survey_analytics};
use crate::errors::Result;
use crate::models::surveys::entities::format_number;
use crate::models::surveys::responses::{
    DistributionStatistics, QuestionAnalytics, SurveyAnalytics,
};
use crate::models::{ApiResponse, ErrorCode};

/// 导出问卷分析报表
pub async fn export_survey_analytics(
    service: &SurveyAnalyticsService,
    request: &HttpRequest,
    distribution_id: &str,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let snapshot = match load_snapshot(storage.as_ref(), distribution_id).await {
        Ok(snapshot) => snapshot,
        Err(response) => return Ok(response),
    };

    let report = calculate_survey_analytics(
        &snapshot.distribution,
        &snapshot.template,
        &snapshot.questions,
        &snapshot.responses,
    );
    let statistics = calculate_distribution_statistics(&snapshot.distribution, &snapshot.responses);

    match generate_xlsx(&report, &statistics) {
        Ok(buffer) => {
            let timestamp = Utc::now().format("%Y%m%d_%H%M%S").to_string();
            let filename = format!("survey_{distribution_id}_analytics_{timestamp}.xlsx");

            Ok(HttpResponse::Ok()
                .content_type("application/vnd.openxmlformats-officedocument.spreadsheetml.sheet")
                .insert_header((
                    "Content-Disposition",
                    format!("attachment; filename=\"{filename}\""),
                ))
                .body(buffer))
        }
        Err(e) => {
            error!("生成 XLSX 失败: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::ExportFailed,
                    format!("生成报表失败: {e}"),
                )),
            )
        }
    }
}

/// 生成 XLSX 文件
fn generate_xlsx(report: &SurveyAnalytics, statistics: &DistributionStatistics) -> Result<Vec<u8>> {
    let mut workbook = Workbook::new();

    let header_format = Format::new().set_bold();
    let title_format = Format::new().set_bold().set_font_size(14);

    // Sheet 1: 概要
    let sheet1 = workbook.add_worksheet().set_name("Özet")?;
    write_summary_sheet(sheet1, &header_format, &title_format, report, statistics)?;

    // Sheet 2: 逐题统计
    let sheet2 = workbook.add_worksheet().set_name("Sorular")?;
    write_questions_sheet(sheet2, &header_format, &report.question_analytics)?;

    // Sheet 3: 按日、班级、提交方式分布
    let sheet3 = workbook.add_worksheet().set_name("Dağılım")?;
    write_breakdown_sheet(sheet3, &header_format, statistics)?;

    Ok(workbook.save_to_buffer()?)
}

/// 写入概要 Sheet
fn write_summary_sheet(
    sheet: &mut Worksheet,
    header_format: &Format,
    title_format: &Format,
    report: &SurveyAnalytics,
    statistics: &DistributionStatistics,
) -> Result<()> {
    let info = &report.distribution_info;
    let overall = &report.overall_stats;

    sheet.write_string_with_format(0, 0, &info.title, title_format)?;

    let rows: Vec<(&str, String)> = vec![
        ("Anket Şablonu", info.template_title.clone()),
        ("Anket Türü", info.template_type.clone()),
        ("Durum", info.status.to_string()),
        ("Hedef Öğrenci Sayısı", info.target_count.to_string()),
        ("Toplam Yanıt", info.total_responses.to_string()),
        ("Yanıt Oranı", info.response_rate.clone()),
        ("Tamamlanan Yanıt", overall.complete_responses.to_string()),
        ("Tamamlanma Oranı", statistics.completion_rate.clone()),
        (
            "Ortalama Tamamlama Süresi",
            overall.average_completion_time.to_string(),
        ),
        (
            "En Çok Atlanan Soru",
            overall.most_skipped_question.clone().unwrap_or_default(),
        ),
        ("Memnuniyet Puanı", overall.satisfaction_score.to_string()),
    ];

    for (i, (label, value)) in rows.iter().enumerate() {
        let row = (i + 2) as u32;
        sheet.write_string_with_format(row, 0, *label, header_format)?;
        sheet.write_string(row, 1, value)?;
    }

    sheet.set_column_width(0, 28)?;
    sheet.set_column_width(1, 40)?;

    Ok(())
}

/// 写入逐题统计 Sheet
fn write_questions_sheet(
    sheet: &mut Worksheet,
    header_format: &Format,
    questions: &[QuestionAnalytics],
) -> Result<()> {
    let headers = ["Sıra", "Soru", "Tür", "Yanıt Sayısı", "Yanıt Oranı", "Özet"];
    for (col, header) in headers.iter().enumerate() {
        sheet.write_string_with_format(0, col as u16, *header, header_format)?;
    }

    for (i, question) in questions.iter().enumerate() {
        let row = (i + 1) as u32;
        sheet.write_number(row, 0, (i + 1) as f64)?;
        sheet.write_string(row, 1, &question.question_text)?;
        sheet.write_string(row, 2, question.question_type.as_str())?;
        sheet.write_number(row, 3, question.total_responses as f64)?;
        sheet.write_string(row, 4, &question.response_rate)?;
        sheet.write_string(row, 5, question_summary(question))?;
    }

    sheet.set_column_width(1, 50)?;
    sheet.set_column_width(5, 60)?;

    Ok(())
}

/// 写入分布 Sheet
fn write_breakdown_sheet(
    sheet: &mut Worksheet,
    header_format: &Format,
    statistics: &DistributionStatistics,
) -> Result<()> {
    let sections = [
        ("Gün", &statistics.responses_by_day),
        ("Sınıf", &statistics.demographic_breakdown.by_class),
        ("Gönderim Türü", &statistics.submission_types),
    ];

    let mut row = 0u32;
    for (label, buckets) in sections {
        sheet.write_string_with_format(row, 0, label, header_format)?;
        sheet.write_string_with_format(row, 1, "Yanıt Sayısı", header_format)?;
        row += 1;

        for (key, count) in buckets {
            sheet.write_string(row, 0, key)?;
            sheet.write_number(row, 1, *count as f64)?;
            row += 1;
        }

        // 分节之间空一行
        row += 1;
    }

    sheet.set_column_width(0, 20)?;

    Ok(())
}

/// 单题结果的一行文字摘要
fn question_summary(question: &QuestionAnalytics) -> String {
    if let Some(option_counts) = &question.option_counts {
        return option_counts
            .iter()
            .map(|c| format!("{}: {} ({}%)", c.option, c.count, c.percentage))
            .collect::<Vec<_>>()
            .join(", ");
    }

    if let Some(average) = question.average_rating {
        return format!("Ortalama: {}", format_number(average));
    }

    if let (Some(yes), Some(no)) = (question.yes_count, question.no_count) {
        return format!("Evet: {yes}, Hayır: {no}");
    }

    if let Some(sentiment) = &question.sentiment {
        return format!(
            "Ortalama uzunluk: {}, Olumlu: {}, Olumsuz: {}, Nötr: {}",
            format_number(question.average_length.unwrap_or(0.0)),
            sentiment.positive,
            sentiment.negative,
            sentiment.neutral
        );
    }

    String::new()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::test_support::{distribution, question, response, template};
    use crate::models::surveys::entities::QuestionType;
    use serde_json::json;

    fn sample_report() -> (SurveyAnalytics, DistributionStatistics) {
        let questions = vec![
            question("q1", QuestionType::MULTIPLE_CHOICE, &["A", "B"]),
            question("q2", QuestionType::RATING, &[]),
            question("q3", QuestionType::YES_NO, &[]),
            question("q4", QuestionType::OPEN_ENDED, &[]),
        ];
        let responses = vec![
            response(
                "r1",
                &[
                    ("q1", json!("A")),
                    ("q2", json!(5)),
                    ("q3", json!(true)),
                    ("q4", json!("Çok iyi")),
                ],
            ),
            response("r2", &[("q1", json!("B")), ("q2", json!("4"))]),
        ];
        let dist = distribution(4, Some(10));
        (
            calculate_survey_analytics(&dist, &template(), &questions, &responses),
            calculate_distribution_statistics(&dist, &responses),
        )
    }

    #[test]
    fn test_question_summary() {
        let (report, _) = sample_report();
        let summaries: Vec<_> = report
            .question_analytics
            .iter()
            .map(question_summary)
            .collect();

        assert_eq!(summaries[0], "A: 1 (50.0%), B: 1 (50.0%)");
        assert_eq!(summaries[1], "Ortalama: 4.5");
        assert_eq!(summaries[2], "Evet: 1, Hayır: 0");
        assert!(summaries[3].starts_with("Ortalama uzunluk: 7"));
    }

    #[test]
    fn test_generate_xlsx() {
        let (report, statistics) = sample_report();
        let buffer = generate_xlsx(&report, &statistics).unwrap();

        // XLSX 是 zip 容器
        assert!(buffer.starts_with(b"PK"));
    }
}
