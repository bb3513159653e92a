use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // =====================================================
        // Create applicant_profiles table
        // =====================================================
        manager
            .create_table(
                Table::create()
                    .table(ApplicantProfiles::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ApplicantProfiles::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(
                        ColumnDef::new(ApplicantProfiles::UserId)
                            .uuid()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(ApplicantProfiles::FirstName).string_len(100))
                    .col(ColumnDef::new(ApplicantProfiles::LastName).string_len(100))
                    .col(ColumnDef::new(ApplicantProfiles::PhoneNumber).string_len(50))
                    .col(ColumnDef::new(ApplicantProfiles::University).string_len(255))
                    .col(ColumnDef::new(ApplicantProfiles::Major).string_len(255))
                    .col(ColumnDef::new(ApplicantProfiles::GraduationYear).integer())
                    .col(ColumnDef::new(ApplicantProfiles::Gpa).double())
                    .col(ColumnDef::new(ApplicantProfiles::PortfolioUrl).text())
                    .col(ColumnDef::new(ApplicantProfiles::LinkedinUrl).text())
                    .col(ColumnDef::new(ApplicantProfiles::GithubUrl).text())
                    .col(
                        ColumnDef::new(ApplicantProfiles::Skills)
                            .json_binary()
                            .not_null()
                            .default(Expr::cust("'[]'::jsonb")),
                    )
                    .col(
                        ColumnDef::new(ApplicantProfiles::Interests)
                            .json_binary()
                            .not_null()
                            .default(Expr::cust("'[]'::jsonb")),
                    )
                    .col(ColumnDef::new(ApplicantProfiles::ExperienceLevel).string_len(16))
                    .col(
                        ColumnDef::new(ApplicantProfiles::PreferredLocations)
                            .json_binary()
                            .not_null()
                            .default(Expr::cust("'[]'::jsonb")),
                    )
                    .col(ColumnDef::new(ApplicantProfiles::SalaryExpectation).string_len(100))
                    .col(ColumnDef::new(ApplicantProfiles::Availability).string_len(100))
                    .col(ColumnDef::new(ApplicantProfiles::Other).text())
                    .col(
                        ColumnDef::new(ApplicantProfiles::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(ApplicantProfiles::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_applicant_profiles_user_id")
                            .from(ApplicantProfiles::Table, ApplicantProfiles::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // =====================================================
        // Indexes backing the recruiter search filters
        // =====================================================

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX IF NOT EXISTS idx_applicant_profiles_graduation_year
                ON applicant_profiles (graduation_year);

                CREATE INDEX IF NOT EXISTS idx_applicant_profiles_gpa
                ON applicant_profiles (gpa);

                CREATE INDEX IF NOT EXISTS idx_applicant_profiles_updated_created
                ON applicant_profiles (updated_at DESC, created_at DESC);
                "#,
            )
            .await?;

        // GIN indexes serve `skills @> '["Rust"]'` style containment checks
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX IF NOT EXISTS idx_applicant_profiles_skills
                ON applicant_profiles USING GIN (skills);

                CREATE INDEX IF NOT EXISTS idx_applicant_profiles_preferred_locations
                ON applicant_profiles USING GIN (preferred_locations);
                "#,
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE TRIGGER update_applicant_profiles_updated_at
                BEFORE UPDATE ON applicant_profiles
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
                DROP TRIGGER IF EXISTS update_applicant_profiles_updated_at ON applicant_profiles;
                "#,
            )
            .await?;

        manager
            .drop_table(Table::drop().table(ApplicantProfiles::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum ApplicantProfiles {
    Table,
    Id,
    UserId,
    FirstName,
    LastName,
    PhoneNumber,
    University,
    Major,
    GraduationYear,
    Gpa,
    PortfolioUrl,
    LinkedinUrl,
    GithubUrl,
    Skills,
    Interests,
    ExperienceLevel,
    PreferredLocations,
    SalaryExpectation,
    Availability,
    Other,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
}
