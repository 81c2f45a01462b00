//! 问卷题目实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "survey_questions")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub template_id: String,
    #[sea_orm(column_type = "Text")]
    pub question_text: String,
    pub question_type: String,
    pub required: bool,
    pub order_index: i32,
    // JSON 数组，仅选择题使用
    #[sea_orm(column_type = "Text", nullable)]
    pub options: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::survey_templates::Entity",
        from = "Column::TemplateId",
        to = "super::survey_templates::Column::Id"
    )]
    Template,
}

impl Related<super::survey_templates::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Template.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_survey_question(self) -> crate::models::surveys::entities::SurveyQuestion {
        use crate::models::surveys::entities::{QuestionType, SurveyQuestion};

        let options = self
            .options
            .as_deref()
            .map(|raw| super::parse_string_list(Some(raw), "survey_questions.options"));

        SurveyQuestion {
            id: self.id,
            template_id: self.template_id,
            question_text: self.question_text,
            question_type: QuestionType::from(self.question_type.as_str()),
            required: self.required,
            order_index: self.order_index,
            options,
        }
    }
}
