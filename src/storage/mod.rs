use std::sync::Arc;

use crate::models::surveys::entities::{
    SurveyDistribution, SurveyQuestion, SurveyResponse, SurveyTemplate,
};

use crate::errors::Result;

pub mod sea_orm_storage;

/// 问卷分析所需的只读数据访问
#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    /// 问卷发放
    // 通过ID获取发放记录
    async fn get_distribution_by_id(&self, id: &str) -> Result<Option<SurveyDistribution>>;

    /// 问卷模板
    // 通过ID获取模板
    async fn get_template_by_id(&self, id: &str) -> Result<Option<SurveyTemplate>>;
    // 列出模板下的题目，按 order_index 升序
    async fn list_questions_by_template(&self, template_id: &str) -> Result<Vec<SurveyQuestion>>;

    /// 答卷
    // 列出发放下的全部答卷，按提交时间升序
    async fn list_responses_by_distribution(
        &self,
        distribution_id: &str,
    ) -> Result<Vec<SurveyResponse>>;
}

pub async fn create_storage() -> Result<Arc<dyn Storage>> {
    let storage = sea_orm_storage::SeaOrmStorage::new_async().await?;
    Ok(Arc::new(storage))
}
