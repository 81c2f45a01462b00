//! 加载分析所需的数据快照
//!
//! 失败时直接返回可发送给客户端的错误响应。

use actix_web::HttpResponse;
use tracing::{debug, error};

use crate::errors::CounselError;
use crate::models::surveys::entities::{
    SurveyDistribution, SurveyQuestion, SurveyResponse, SurveyTemplate,
};
use crate::models::{ApiResponse, ErrorCode};
use crate::storage::Storage;

/// 一次分析请求读取到的全部数据
pub struct SurveySnapshot {
    pub distribution: SurveyDistribution,
    pub template: SurveyTemplate,
    pub questions: Vec<SurveyQuestion>,
    pub responses: Vec<SurveyResponse>,
}

fn storage_failure(context: &str, e: CounselError) -> HttpResponse {
    error!("{}: {}", context, e);
    HttpResponse::InternalServerError().json(ApiResponse::error_empty(
        ErrorCode::InternalServerError,
        format!("{context}: {e}"),
    ))
}

/// 读取发放记录，不存在时返回 404
pub async fn load_distribution(
    storage: &dyn Storage,
    distribution_id: &str,
) -> Result<SurveyDistribution, HttpResponse> {
    match storage.get_distribution_by_id(distribution_id).await {
        Ok(Some(distribution)) => Ok(distribution),
        Ok(None) => Err(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::DistributionNotFound,
            "问卷发放不存在",
        ))),
        Err(e) => Err(storage_failure("查询问卷发放失败", e)),
    }
}

/// 读取发放下的全部答卷
pub async fn load_responses(
    storage: &dyn Storage,
    distribution_id: &str,
) -> Result<Vec<SurveyResponse>, HttpResponse> {
    storage
        .list_responses_by_distribution(distribution_id)
        .await
        .map_err(|e| storage_failure("查询答卷失败", e))
}

/// 读取完整快照：发放、模板、题目、答卷
pub async fn load_snapshot(
    storage: &dyn Storage,
    distribution_id: &str,
) -> Result<SurveySnapshot, HttpResponse> {
    let distribution = load_distribution(storage, distribution_id).await?;

    let template = match storage.get_template_by_id(&distribution.template_id).await {
        Ok(Some(template)) => template,
        Ok(None) => {
            return Err(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::TemplateNotFound,
                "问卷模板不存在",
            )));
        }
        Err(e) => return Err(storage_failure("查询问卷模板失败", e)),
    };

    let questions = storage
        .list_questions_by_template(&template.id)
        .await
        .map_err(|e| storage_failure("查询题目失败", e))?;

    let responses = load_responses(storage, distribution_id).await?;

    debug!(
        "Loaded snapshot for distribution {}: {} questions, {} responses",
        distribution_id,
        questions.len(),
        responses.len()
    );

    Ok(SurveySnapshot {
        distribution,
        template,
        questions,
        responses,
    })
}
