//! 问卷模板与题目存储操作

use super::SeaOrmStorage;
use crate::entity::survey_questions::{Column as QuestionColumn, Entity as SurveyQuestions};
use crate::entity::survey_templates::Entity as SurveyTemplates;
use crate::errors::{CounselError, Result};
use crate::models::surveys::entities::{SurveyQuestion, SurveyTemplate};
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder};

impl SeaOrmStorage {
    /// 通过 ID 获取问卷模板
    pub async fn get_template_by_id_impl(&self, id: &str) -> Result<Option<SurveyTemplate>> {
        let result = SurveyTemplates::find_by_id(id.to_string())
            .one(&self.db)
            .await
            .map_err(|e| CounselError::database_operation(format!("查询问卷模板失败: {e}")))?;

        Ok(result.map(|m| m.into_survey_template()))
    }

    /// 列出模板下的题目
    pub async fn list_questions_by_template_impl(
        &self,
        template_id: &str,
    ) -> Result<Vec<SurveyQuestion>> {
        let models = SurveyQuestions::find()
            .filter(QuestionColumn::TemplateId.eq(template_id))
            .order_by_asc(QuestionColumn::OrderIndex)
            .order_by_asc(QuestionColumn::Id)
            .all(&self.db)
            .await
            .map_err(|e| CounselError::database_operation(format!("查询题目列表失败: {e}")))?;

        Ok(models.into_iter().map(|m| m.into_survey_question()).collect())
    }
}
