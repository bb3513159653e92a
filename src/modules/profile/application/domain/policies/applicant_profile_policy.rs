use crate::modules::profile::application::domain::entities::{
    ApplicantProfileUpdate, ExperienceLevel, ProfileValidationError,
};
use crate::modules::profile::application::ports::outgoing::applicant_profile_repository::PatchApplicantProfileData;
use crate::shared::patch::PatchField;

/// Turns a raw applicant update into typed patch data.
#[derive(Debug, Clone, Default)]
pub struct ApplicantProfilePolicy;

impl ApplicantProfilePolicy {
    pub fn validate(
        &self,
        update: ApplicantProfileUpdate,
    ) -> Result<PatchApplicantProfileData, ProfileValidationError> {
        let experience_level = update.experience_level.try_map(|raw| {
            raw.parse::<ExperienceLevel>().map_err(|bad| {
                ProfileValidationError(format!(
                    "Invalid experience level: {}. Allowed values: {}",
                    bad,
                    ExperienceLevel::allowed_values()
                ))
            })
        })?;

        let gpa = update.gpa.try_map(|gpa| {
            if gpa.is_finite() {
                Ok(gpa)
            } else {
                Err(ProfileValidationError("gpa must be a number".to_string()))
            }
        })?;

        Ok(PatchApplicantProfileData {
            first_name: update.first_name,
            last_name: update.last_name,
            phone_number: update.phone_number,
            university: update.university,
            major: update.major,
            graduation_year: update.graduation_year,
            gpa,
            portfolio_url: update.portfolio_url,
            linkedin_url: update.linkedin_url,
            github_url: update.github_url,
            skills: clear_to_empty(update.skills),
            interests: clear_to_empty(update.interests),
            experience_level,
            preferred_locations: clear_to_empty(update.preferred_locations),
            salary_expectation: update.salary_expectation,
            availability: update.availability,
            other: update.other,
        })
    }
}

/// JSONB list columns are NOT NULL; an explicit null empties them.
fn clear_to_empty(field: PatchField<Vec<String>>) -> PatchField<Vec<String>> {
    match field {
        PatchField::Null => PatchField::Value(Vec::new()),
        other => other,
    }
}
