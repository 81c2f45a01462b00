use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 创建问卷模板表
        manager
            .create_table(
                Table::create()
                    .table(SurveyTemplates::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(SurveyTemplates::Id)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(SurveyTemplates::Title).string().not_null())
                    .col(ColumnDef::new(SurveyTemplates::Type).string().not_null())
                    .col(
                        ColumnDef::new(SurveyTemplates::MebCompliant)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(SurveyTemplates::EstimatedDuration)
                            .integer()
                            .null(),
                    )
                    .col(ColumnDef::new(SurveyTemplates::TargetGrades).text().null())
                    .col(
                        ColumnDef::new(SurveyTemplates::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(SurveyTemplates::UpdatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建问卷题目表
        manager
            .create_table(
                Table::create()
                    .table(SurveyQuestions::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(SurveyQuestions::Id)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(SurveyQuestions::TemplateId)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(SurveyQuestions::QuestionText)
                            .text()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(SurveyQuestions::QuestionType)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(SurveyQuestions::Required)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(SurveyQuestions::OrderIndex)
                            .integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(SurveyQuestions::Options).text().null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(SurveyQuestions::Table, SurveyQuestions::TemplateId)
                            .to(SurveyTemplates::Table, SurveyTemplates::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建问卷发放表
        manager
            .create_table(
                Table::create()
                    .table(SurveyDistributions::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(SurveyDistributions::Id)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(SurveyDistributions::TemplateId)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(SurveyDistributions::Title)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(SurveyDistributions::TargetClasses)
                            .text()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(SurveyDistributions::TargetStudents)
                            .text()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(SurveyDistributions::Status)
                            .string()
                            .not_null()
                            .default("DRAFT"),
                    )
                    .col(
                        ColumnDef::new(SurveyDistributions::StartDate)
                            .big_integer()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(SurveyDistributions::EndDate)
                            .big_integer()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(SurveyDistributions::AllowAnonymous)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(SurveyDistributions::MaxResponses)
                            .integer()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(SurveyDistributions::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(SurveyDistributions::UpdatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(SurveyDistributions::Table, SurveyDistributions::TemplateId)
                            .to(SurveyTemplates::Table, SurveyTemplates::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建问卷答卷表
        manager
            .create_table(
                Table::create()
                    .table(SurveyResponses::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(SurveyResponses::Id)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(SurveyResponses::DistributionId)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(SurveyResponses::StudentId).string().null())
                    .col(ColumnDef::new(SurveyResponses::StudentInfo).text().null())
                    .col(
                        ColumnDef::new(SurveyResponses::ResponseData)
                            .text()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(SurveyResponses::SubmissionType)
                            .string()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(SurveyResponses::IsComplete)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(SurveyResponses::CompletionTime)
                            .double()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(SurveyResponses::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(SurveyResponses::Table, SurveyResponses::DistributionId)
                            .to(SurveyDistributions::Table, SurveyDistributions::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建索引
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_survey_questions_template_order")
                    .table(SurveyQuestions::Table)
                    .col(SurveyQuestions::TemplateId)
                    .col(SurveyQuestions::OrderIndex)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_survey_distributions_template_id")
                    .table(SurveyDistributions::Table)
                    .col(SurveyDistributions::TemplateId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_survey_responses_distribution_id")
                    .table(SurveyResponses::Table)
                    .col(SurveyResponses::DistributionId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 按照创建的相反顺序删除
        manager
            .drop_table(Table::drop().table(SurveyResponses::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(SurveyDistributions::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(SurveyQuestions::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(SurveyTemplates::Table).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum SurveyTemplates {
    #[sea_orm(iden = "survey_templates")]
    Table,
    Id,
    Title,
    Type,
    MebCompliant,
    EstimatedDuration,
    TargetGrades,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum SurveyQuestions {
    #[sea_orm(iden = "survey_questions")]
    Table,
    Id,
    TemplateId,
    QuestionText,
    QuestionType,
    Required,
    OrderIndex,
    Options,
}

#[derive(DeriveIden)]
enum SurveyDistributions {
    #[sea_orm(iden = "survey_distributions")]
    Table,
    Id,
    TemplateId,
    Title,
    TargetClasses,
    TargetStudents,
    Status,
    StartDate,
    EndDate,
    AllowAnonymous,
    MaxResponses,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum SurveyResponses {
    #[sea_orm(iden = "survey_responses")]
    Table,
    Id,
    DistributionId,
    StudentId,
    StudentInfo,
    ResponseData,
    SubmissionType,
    IsComplete,
    CompletionTime,
    CreatedAt,
}
