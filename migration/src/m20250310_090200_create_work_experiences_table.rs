use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(WorkExperiences::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(WorkExperiences::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(
                        ColumnDef::new(WorkExperiences::ApplicantProfileId)
                            .uuid()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(WorkExperiences::CompanyName)
                            .string_len(255)
                            .not_null(),
                    )
                    .col(ColumnDef::new(WorkExperiences::Location).string_len(255))
                    .col(ColumnDef::new(WorkExperiences::StartDate).date().not_null())
                    // NULL end date means the position is ongoing
                    .col(ColumnDef::new(WorkExperiences::EndDate).date())
                    .col(ColumnDef::new(WorkExperiences::RoleDescription).text())
                    .col(
                        ColumnDef::new(WorkExperiences::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(WorkExperiences::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_work_experiences_applicant_profile_id")
                            .from(WorkExperiences::Table, WorkExperiences::ApplicantProfileId)
                            .to(ApplicantProfiles::Table, ApplicantProfiles::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX IF NOT EXISTS idx_work_experiences_profile_start
                ON work_experiences (applicant_profile_id, start_date DESC);
                "#,
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE TRIGGER update_work_experiences_updated_at
                BEFORE UPDATE ON work_experiences
                FOR EACH ROW
                EXECUTE FUNCTION update_updated_at_column();
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                DROP TRIGGER IF EXISTS update_work_experiences_updated_at ON work_experiences;
                DROP INDEX IF EXISTS idx_work_experiences_profile_start;
                "#,
            )
            .await?;

        manager
            .drop_table(Table::drop().table(WorkExperiences::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum WorkExperiences {
    Table,
    Id,
    ApplicantProfileId,
    CompanyName,
    Location,
    StartDate,
    EndDate,
    RoleDescription,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum ApplicantProfiles {
    Table,
    Id,
}
