//! 问卷模板实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "survey_templates")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub title: String,
    #[sea_orm(column_name = "type")]
    pub survey_type: String,
    pub meb_compliant: bool,
    pub estimated_duration: Option<i32>,
    // JSON 数组
    #[sea_orm(column_type = "Text", nullable)]
    pub target_grades: Option<String>,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::survey_questions::Entity")]
    Questions,
    #[sea_orm(has_many = "super::survey_distributions::Entity")]
    Distributions,
}

impl Related<super::survey_questions::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Questions.def()
    }
}

impl Related<super::survey_distributions::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Distributions.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// 从数据库模型转换为业务模型
impl Model {
    pub fn into_survey_template(self) -> crate::models::surveys::entities::SurveyTemplate {
        use crate::models::surveys::entities::SurveyTemplate;

        let target_grades =
            super::parse_string_list(self.target_grades.as_deref(), "survey_templates.target_grades");

        SurveyTemplate {
            id: self.id,
            title: self.title,
            survey_type: self.survey_type,
            meb_compliant: self.meb_compliant,
            estimated_duration: self.estimated_duration,
            target_grades,
        }
    }
}
