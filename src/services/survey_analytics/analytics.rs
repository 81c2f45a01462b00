use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::SurveyAnalyticsService;
use super::snapshot::load_snapshot;
use crate::analytics::calculate_survey_analytics;
use crate::models::ApiResponse;

pub async fn get_survey_analytics(
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

    Ok(HttpResponse::Ok().json(ApiResponse::success(report, "获取问卷分析成功")))
}
