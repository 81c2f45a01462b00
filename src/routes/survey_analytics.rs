use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, middleware, web};
use once_cell::sync::Lazy;

use crate::middlewares::RateLimit;
use crate::services::SurveyAnalyticsService;
use crate::utils::SafeDistributionId;

// 懒加载的全局 SurveyAnalyticsService 实例
static SURVEY_ANALYTICS_SERVICE: Lazy<SurveyAnalyticsService> =
    Lazy::new(SurveyAnalyticsService::new_lazy);

// 获取问卷分析报告
pub async fn get_survey_analytics(
    req: HttpRequest,
    path: SafeDistributionId,
) -> ActixResult<HttpResponse> {
    SURVEY_ANALYTICS_SERVICE
        .get_survey_analytics(&req, &path.0)
        .await
}

// 导出问卷分析报告
pub async fn export_survey_analytics(
    req: HttpRequest,
    path: SafeDistributionId,
) -> ActixResult<HttpResponse> {
    SURVEY_ANALYTICS_SERVICE
        .export_survey_analytics(&req, &path.0)
        .await
}

// 获取发放统计
pub async fn get_distribution_statistics(
    req: HttpRequest,
    path: SafeDistributionId,
) -> ActixResult<HttpResponse> {
    SURVEY_ANALYTICS_SERVICE
        .get_distribution_statistics(&req, &path.0)
        .await
}

// 配置路由
pub fn configure_survey_analytics_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/survey-analytics")
            .wrap(middleware::Compress::default())
            .wrap(RateLimit::analytics())
            .service(web::resource("/{id}").route(web::get().to(get_survey_analytics)))
            .service(web::resource("/{id}/export").route(web::get().to(export_survey_analytics))),
    )
    .service(
        web::scope("/api/survey-statistics")
            .wrap(middleware::Compress::default())
            .wrap(RateLimit::analytics())
            .service(web::resource("/{id}").route(web::get().to(get_distribution_statistics))),
    );
}
