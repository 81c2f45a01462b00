//! 答卷存储操作

use super::SeaOrmStorage;
use crate::entity::survey_responses::{Column, Entity as SurveyResponses};
use crate::errors::{CounselError, Result};
use crate::models::surveys::entities::SurveyResponse;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder};

impl SeaOrmStorage {
    /// 列出发放下的全部答卷
    pub async fn list_responses_by_distribution_impl(
        &self,
        distribution_id: &str,
    ) -> Result<Vec<SurveyResponse>> {
        let models = SurveyResponses::find()
            .filter(Column::DistributionId.eq(distribution_id))
            .order_by_asc(Column::CreatedAt)
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| CounselError::database_operation(format!("查询答卷列表失败: {e}")))?;

        Ok(models.into_iter().map(|m| m.into_survey_response()).collect())
    }
}
