//! 问卷发放存储操作

use super::SeaOrmStorage;
use crate::entity::survey_distributions::Entity as SurveyDistributions;
use crate::errors::{CounselError, Result};
use crate::models::surveys::entities::SurveyDistribution;
use sea_orm::EntityTrait;

impl SeaOrmStorage {
    /// 通过 ID 获取发放记录
    pub async fn get_distribution_by_id_impl(
        &self,
        id: &str,
    ) -> Result<Option<SurveyDistribution>> {
        let result = SurveyDistributions::find_by_id(id.to_string())
            .one(&self.db)
            .await
            .map_err(|e| CounselError::database_operation(format!("查询问卷发放失败: {e}")))?;

        Ok(result.map(|m| m.into_survey_distribution()))
    }
}
