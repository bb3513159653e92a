use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(RecruiterProfiles::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(RecruiterProfiles::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(
                        ColumnDef::new(RecruiterProfiles::UserId)
                            .uuid()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(RecruiterProfiles::FirstName).string_len(100))
                    .col(ColumnDef::new(RecruiterProfiles::LastName).string_len(100))
                    .col(ColumnDef::new(RecruiterProfiles::PhoneNumber).string_len(50))
                    .col(ColumnDef::new(RecruiterProfiles::Company).string_len(255))
                    .col(ColumnDef::new(RecruiterProfiles::Position).string_len(255))
                    .col(ColumnDef::new(RecruiterProfiles::Department).string_len(255))
                    .col(ColumnDef::new(RecruiterProfiles::CompanySize).string_len(16))
                    .col(ColumnDef::new(RecruiterProfiles::Industry).string_len(255))
                    .col(ColumnDef::new(RecruiterProfiles::LinkedinUrl).text())
                    .col(ColumnDef::new(RecruiterProfiles::CompanyUrl).text())
                    .col(
                        ColumnDef::new(RecruiterProfiles::HiringSectors)
                            .json_binary()
                            .not_null()
                            .default(Expr::cust("'[]'::jsonb")),
                    )
                    .col(
                        ColumnDef::new(RecruiterProfiles::ExperienceLevels)
                            .json_binary()
                            .not_null()
                            .default(Expr::cust("'[]'::jsonb")),
                    )
                    .col(ColumnDef::new(RecruiterProfiles::Other).text())
                    .col(
                        ColumnDef::new(RecruiterProfiles::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(RecruiterProfiles::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_recruiter_profiles_user_id")
                            .from(RecruiterProfiles::Table, RecruiterProfiles::UserId)
                            .to(Users::Table, Users::Id)
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
                CREATE TRIGGER update_recruiter_profiles_updated_at
                BEFORE UPDATE ON recruiter_profiles
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
                DROP TRIGGER IF EXISTS update_recruiter_profiles_updated_at ON recruiter_profiles;
                "#,
            )
            .await?;

        manager
            .drop_table(Table::drop().table(RecruiterProfiles::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum RecruiterProfiles {
    Table,
    Id,
    UserId,
    FirstName,
    LastName,
    PhoneNumber,
    Company,
    Position,
    Department,
    CompanySize,
    Industry,
    LinkedinUrl,
    CompanyUrl,
    HiringSectors,
    ExperienceLevels,
    Other,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
}
