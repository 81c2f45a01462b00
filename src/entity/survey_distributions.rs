//! 问卷发放实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "survey_distributions")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub template_id: String,
    pub title: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub target_classes: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub target_students: Option<String>,
    pub status: String,
    pub start_date: Option<i64>,
    pub end_date: Option<i64>,
    pub allow_anonymous: bool,
    pub max_responses: Option<i32>,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::survey_templates::Entity",
        from = "Column::TemplateId",
        to = "super::survey_templates::Column::Id"
    )]
    Template,
    #[sea_orm(has_many = "super::survey_responses::Entity")]
    Responses,
}

impl Related<super::survey_templates::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Template.def()
    }
}

impl Related<super::survey_responses::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Responses.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_survey_distribution(self) -> crate::models::surveys::entities::SurveyDistribution {
        use crate::models::surveys::entities::{DistributionStatus, SurveyDistribution};
        use chrono::{DateTime, Utc};

        let status = self.status.parse().unwrap_or_else(|e| {
            tracing::warn!("Distribution {}: {}, treating as DRAFT", self.id, e);
            DistributionStatus::Draft
        });

        SurveyDistribution {
            target_classes: super::parse_string_list(
                self.target_classes.as_deref(),
                "survey_distributions.target_classes",
            ),
            target_students: super::parse_string_list(
                self.target_students.as_deref(),
                "survey_distributions.target_students",
            ),
            id: self.id,
            template_id: self.template_id,
            title: self.title,
            status,
            start_date: self
                .start_date
                .and_then(|ts| DateTime::<Utc>::from_timestamp(ts, 0)),
            end_date: self
                .end_date
                .and_then(|ts| DateTime::<Utc>::from_timestamp(ts, 0)),
            allow_anonymous: self.allow_anonymous,
            max_responses: self.max_responses.map(i64::from),
        }
    }
}
