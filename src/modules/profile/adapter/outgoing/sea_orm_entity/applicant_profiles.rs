use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "applicant_profiles")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    #[sea_orm(unique)]
    pub user_id: Uuid,

    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone_number: Option<String>,
    pub university: Option<String>,
    pub major: Option<String>,
    pub graduation_year: Option<i32>,

    #[sea_orm(column_type = "Double", nullable)]
    pub gpa: Option<f64>,

    #[sea_orm(column_type = "Text", nullable)]
    pub portfolio_url: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub linkedin_url: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub github_url: Option<String>,

    // JSONB arrays of strings
    #[sea_orm(column_type = "JsonBinary")]
    pub skills: Json,
    #[sea_orm(column_type = "JsonBinary")]
    pub interests: Json,

    /// "entry" | "junior" | "mid" | "senior"
    pub experience_level: Option<String>,

    #[sea_orm(column_type = "JsonBinary")]
    pub preferred_locations: Json,

    pub salary_expectation: Option<String>,
    pub availability: Option<String>,

    #[sea_orm(column_type = "Text", nullable)]
    pub other: Option<String>,

    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "crate::modules::auth::adapter::outgoing::sea_orm_entity::users::Entity",
        from = "Column::UserId",
        to = "crate::modules::auth::adapter::outgoing::sea_orm_entity::users::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Users,

    #[sea_orm(has_many = "super::work_experiences::Entity")]
    WorkExperiences,
}

impl Related<crate::modules::auth::adapter::outgoing::sea_orm_entity::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Users.def()
    }
}

impl Related<super::work_experiences::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::WorkExperiences.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
