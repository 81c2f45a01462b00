use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::SurveyAnalyticsService;
use super::snapshot::{load_distribution, load_responses};
use crate::analytics::calculate_distribution_statistics;
use crate::models::ApiResponse;

pub async fn get_distribution_statistics(
    service: &SurveyAnalyticsService,
    request: &HttpRequest,
    distribution_id: &str,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let distribution = match load_distribution(storage.as_ref(), distribution_id).await {
        Ok(distribution) => distribution,
        Err(response) => return Ok(response),
    };

    let responses = match load_responses(storage.as_ref(), distribution_id).await {
        Ok(responses) => responses,
        Err(response) => return Ok(response),
    };

    let statistics = calculate_distribution_statistics(&distribution, &responses);

    Ok(HttpResponse::Ok().json(ApiResponse::success(statistics, "获取发放统计成功")))
}
