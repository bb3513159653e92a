use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub email: String,
    pub password_hash: String,
    /// "applicant" | "recruiter"
    pub role: String,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        has_one = "crate::modules::profile::adapter::outgoing::sea_orm_entity::applicant_profiles::Entity"
    )]
    ApplicantProfile,

    #[sea_orm(
        has_one = "crate::modules::profile::adapter::outgoing::sea_orm_entity::recruiter_profiles::Entity"
    )]
    RecruiterProfile,
}

impl Related<crate::modules::profile::adapter::outgoing::sea_orm_entity::applicant_profiles::Entity>
    for Entity
{
    fn to() -> RelationDef {
        Relation::ApplicantProfile.def()
    }
}

impl Related<crate::modules::profile::adapter::outgoing::sea_orm_entity::recruiter_profiles::Entity>
    for Entity
{
    fn to() -> RelationDef {
        Relation::RecruiterProfile.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
