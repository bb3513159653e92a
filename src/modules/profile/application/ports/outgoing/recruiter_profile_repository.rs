use async_trait::async_trait;

use super::ProfileRepositoryError;
use crate::auth::application::domain::entities::UserId;
use crate::modules::profile::application::domain::entities::{
    CompanySize, ExperienceLevel, RecruiterProfile,
};
use crate::shared::patch::PatchField;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PatchRecruiterProfileData {
    pub first_name: PatchField<String>,
    pub last_name: PatchField<String>,
    pub phone_number: PatchField<String>,
    pub company: PatchField<String>,
    pub position: PatchField<String>,
    pub department: PatchField<String>,
    pub company_size: PatchField<CompanySize>,
    pub industry: PatchField<String>,
    pub linkedin_url: PatchField<String>,
    pub company_url: PatchField<String>,
    pub hiring_sectors: PatchField<Vec<String>>,
    pub experience_levels: PatchField<Vec<ExperienceLevel>>,
    pub other: PatchField<String>,
}

#[async_trait]
pub trait RecruiterProfileRepository: Send + Sync {
    async fn find_by_user(
        &self,
        user_id: UserId,
    ) -> Result<Option<RecruiterProfile>, ProfileRepositoryError>;

    async fn patch_by_user(
        &self,
        user_id: UserId,
        data: PatchRecruiterProfileData,
    ) -> Result<RecruiterProfile, ProfileRepositoryError>;
}
