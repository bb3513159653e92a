use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "work_experiences")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    pub applicant_profile_id: Uuid,

    pub company_name: String,
    pub location: Option<String>,
    pub start_date: Date,
    /// NULL while ongoing
    pub end_date: Option<Date>,

    #[sea_orm(column_type = "Text", nullable)]
    pub role_description: Option<String>,

    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::applicant_profiles::Entity",
        from = "Column::ApplicantProfileId",
        to = "super::applicant_profiles::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    ApplicantProfiles,
}

impl Related<super::applicant_profiles::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ApplicantProfiles.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
