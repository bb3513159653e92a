//! Row → domain conversions shared by the profile repositories and the
//! applicant search query.

use sea_orm::{ActiveValue, DbErr, Set};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::json;

use super::sea_orm_entity::{applicant_profiles, recruiter_profiles, work_experiences};
use crate::auth::application::domain::entities::{UserId, UserRole};
use crate::modules::auth::adapter::outgoing::sea_orm_entity::users;
use crate::modules::profile::application::domain::entities::{
    ApplicantProfile, CompanySize, ExperienceLevel, ProfileOwner, RecruiterProfile, WorkExperience,
};
use crate::modules::profile::application::ports::outgoing::ProfileRepositoryError;
use crate::shared::patch::PatchField;

pub fn to_json<T: Serialize>(data: &T) -> Result<serde_json::Value, ProfileRepositoryError> {
    serde_json::to_value(data).map_err(|e| ProfileRepositoryError::SerializationError(e.to_string()))
}

pub fn from_json<T: DeserializeOwned>(
    json: &serde_json::Value,
) -> Result<T, ProfileRepositoryError> {
    serde_json::from_value(json.clone())
        .map_err(|e| ProfileRepositoryError::SerializationError(e.to_string()))
}

pub fn map_db_err(e: DbErr) -> ProfileRepositoryError {
    ProfileRepositoryError::DatabaseError(e.to_string())
}

pub fn set_nullable<T>(slot: &mut ActiveValue<Option<T>>, field: PatchField<T>)
where
    Option<T>: Into<sea_orm::Value>,
{
    match field {
        PatchField::Unset => {}
        PatchField::Null => *slot = Set(None),
        PatchField::Value(v) => *slot = Set(Some(v)),
    }
}

/// List columns are NOT NULL; Null is stored as an empty array.
pub fn set_list<T: serde::Serialize>(
    slot: &mut ActiveValue<serde_json::Value>,
    field: PatchField<Vec<T>>,
) -> Result<(), ProfileRepositoryError> {
    match field {
        PatchField::Unset => {}
        PatchField::Null => *slot = Set(json!([])),
        PatchField::Value(values) => *slot = Set(to_json(&values)?),
    }
    Ok(())
}

/// `with_role` is false for the search projection (email + createdAt only).
pub fn owner_from_model(
    user: users::Model,
    with_role: bool,
) -> Result<ProfileOwner, ProfileRepositoryError> {
    let role = if with_role {
        Some(user.role.parse::<UserRole>().map_err(|e| {
            ProfileRepositoryError::SerializationError(e.to_string())
        })?)
    } else {
        None
    };

    Ok(ProfileOwner {
        email: user.email,
        role,
        created_at: user.created_at.into(),
    })
}

pub fn work_experience_from_model(model: work_experiences::Model) -> WorkExperience {
    WorkExperience {
        id: model.id,
        applicant_profile_id: model.applicant_profile_id,
        company_name: model.company_name,
        location: model.location,
        start_date: model.start_date,
        end_date: model.end_date,
        role_description: model.role_description,
        created_at: model.created_at.into(),
        updated_at: model.updated_at.into(),
    }
}

pub fn applicant_from_model(
    model: applicant_profiles::Model,
    work_experience: Vec<work_experiences::Model>,
    user: Option<ProfileOwner>,
) -> Result<ApplicantProfile, ProfileRepositoryError> {
    let experience_level = model
        .experience_level
        .as_deref()
        .map(|raw| {
            raw.parse::<ExperienceLevel>().map_err(|bad| {
                ProfileRepositoryError::SerializationError(format!(
                    "unknown experience level: {}",
                    bad
                ))
            })
        })
        .transpose()?;

    Ok(ApplicantProfile {
        id: model.id,
        user_id: UserId::from(model.user_id),
        first_name: model.first_name,
        last_name: model.last_name,
        phone_number: model.phone_number,
        university: model.university,
        major: model.major,
        graduation_year: model.graduation_year,
        gpa: model.gpa,
        portfolio_url: model.portfolio_url,
        linkedin_url: model.linkedin_url,
        github_url: model.github_url,
        skills: from_json(&model.skills)?,
        interests: from_json(&model.interests)?,
        experience_level,
        preferred_locations: from_json(&model.preferred_locations)?,
        salary_expectation: model.salary_expectation,
        availability: model.availability,
        other: model.other,
        created_at: model.created_at.into(),
        updated_at: model.updated_at.into(),
        work_experience: work_experience
            .into_iter()
            .map(work_experience_from_model)
            .collect(),
        user,
    })
}

pub fn recruiter_from_model(
    model: recruiter_profiles::Model,
    user: Option<ProfileOwner>,
) -> Result<RecruiterProfile, ProfileRepositoryError> {
    let company_size = model
        .company_size
        .as_deref()
        .map(|raw| {
            raw.parse::<CompanySize>().map_err(|bad| {
                ProfileRepositoryError::SerializationError(format!("unknown company size: {}", bad))
            })
        })
        .transpose()?;

    Ok(RecruiterProfile {
        id: model.id,
        user_id: UserId::from(model.user_id),
        first_name: model.first_name,
        last_name: model.last_name,
        phone_number: model.phone_number,
        company: model.company,
        position: model.position,
        department: model.department,
        company_size,
        industry: model.industry,
        linkedin_url: model.linkedin_url,
        company_url: model.company_url,
        hiring_sectors: from_json(&model.hiring_sectors)?,
        experience_levels: from_json(&model.experience_levels)?,
        other: model.other,
        created_at: model.created_at.into(),
        updated_at: model.updated_at.into(),
        user,
    })
}
