pub mod analytics;
pub mod export;
pub mod snapshot;
pub mod statistics;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::storage::Storage;

pub struct SurveyAnalyticsService {
    storage: Option<Arc<dyn Storage>>,
}

impl SurveyAnalyticsService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        if let Some(storage) = &self.storage {
            storage.clone()
        } else {
            request
                .app_data::<actix_web::web::Data<Arc<dyn Storage>>>()
                .expect("Storage not found in app data")
                .get_ref()
                .clone()
        }
    }

    // 完整问卷分析报告
    pub async fn get_survey_analytics(
        &self,
        request: &HttpRequest,
        distribution_id: &str,
    ) -> ActixResult<HttpResponse> {
        analytics::get_survey_analytics(self, request, distribution_id).await
    }

    // 发放统计（按日、按班级、按提交方式）
    pub async fn get_distribution_statistics(
        &self,
        request: &HttpRequest,
        distribution_id: &str,
    ) -> ActixResult<HttpResponse> {
        statistics::get_distribution_statistics(self, request, distribution_id).await
    }

    // 导出分析报告为 XLSX
    pub async fn export_survey_analytics(
        &self,
        request: &HttpRequest,
        distribution_id: &str,
    ) -> ActixResult<HttpResponse> {
        export::export_survey_analytics(self, request, distribution_id).await
    }
}
