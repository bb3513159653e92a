use url::Url;

use crate::modules::profile::application::domain::entities::{
    CompanySize, ExperienceLevel, ProfileValidationError, RecruiterProfileUpdate,
};
use crate::modules::profile::application::ports::outgoing::recruiter_profile_repository::PatchRecruiterProfileData;
use crate::shared::patch::PatchField;

/// Rules applied to a recruiter profile update before it reaches the database.
/// Checks run in a fixed order and stop at the first violation.
#[derive(Debug, Clone)]
pub struct RecruiterProfilePolicy {
    pub max_experience_levels: usize,
    pub max_hiring_sectors: usize,
}

impl Default for RecruiterProfilePolicy {
    fn default() -> Self {
        Self {
            max_experience_levels: Self::MAX_EXPERIENCE_LEVELS,
            max_hiring_sectors: Self::MAX_HIRING_SECTORS,
        }
    }
}

impl RecruiterProfilePolicy {
    pub const MAX_EXPERIENCE_LEVELS: usize = 4;
    pub const MAX_HIRING_SECTORS: usize = 15;

    pub fn validate(
        &self,
        update: RecruiterProfileUpdate,
    ) -> Result<PatchRecruiterProfileData, ProfileValidationError> {
        let company_size = update.company_size.try_map(|raw| {
            raw.parse::<CompanySize>().map_err(|bad| {
                ProfileValidationError(format!(
                    "Invalid company size: {}. Allowed values: {}",
                    bad,
                    CompanySize::allowed_values()
                ))
            })
        })?;

        let experience_levels = match update.experience_levels {
            PatchField::Unset => PatchField::Unset,
            PatchField::Null => PatchField::Value(Vec::new()),
            PatchField::Value(levels) => PatchField::Value(self.check_experience_levels(levels)?),
        };

        let hiring_sectors = match update.hiring_sectors {
            PatchField::Unset => PatchField::Unset,
            PatchField::Null => PatchField::Value(Vec::new()),
            PatchField::Value(sectors) if sectors.len() > self.max_hiring_sectors => {
                return Err(ProfileValidationError(format!(
                    "hiringSectors may contain at most {} entries (got {})",
                    self.max_hiring_sectors,
                    sectors.len()
                )))
            }
            PatchField::Value(sectors) => PatchField::Value(sectors),
        };

        let linkedin_url = check_url("linkedinUrl", update.linkedin_url)?;
        let company_url = check_url("companyUrl", update.company_url)?;

        Ok(PatchRecruiterProfileData {
            first_name: update.first_name,
            last_name: update.last_name,
            phone_number: update.phone_number,
            company: update.company,
            position: update.position,
            department: update.department,
            company_size,
            industry: update.industry,
            linkedin_url,
            company_url,
            hiring_sectors,
            experience_levels,
            other: update.other,
        })
    }

    fn check_experience_levels(
        &self,
        levels: Vec<String>,
    ) -> Result<Vec<ExperienceLevel>, ProfileValidationError> {
        // Count is checked before membership
        if levels.len() > self.max_experience_levels {
            return Err(ProfileValidationError(format!(
                "experienceLevels may contain at most {} entries (got {}): {}",
                self.max_experience_levels,
                levels.len(),
                levels.join(", ")
            )));
        }

        let invalid: Vec<&str> = levels
            .iter()
            .map(String::as_str)
            .filter(|l| l.parse::<ExperienceLevel>().is_err())
            .collect();

        if !invalid.is_empty() {
            return Err(ProfileValidationError(format!(
                "Invalid experience levels: {}. Allowed values: {}",
                invalid.join(", "),
                ExperienceLevel::allowed_values()
            )));
        }

        levels
            .iter()
            .map(|l| l.parse::<ExperienceLevel>())
            .collect::<Result<Vec<_>, _>>()
            .map_err(|bad| ProfileValidationError(format!("Invalid experience level: {}", bad)))
    }
}

fn check_url(
    field: &str,
    value: PatchField<String>,
) -> Result<PatchField<String>, ProfileValidationError> {
    value.try_map(|raw| match Url::parse(raw.trim()) {
        Ok(_) => Ok(raw.trim().to_string()),
        Err(e) => Err(ProfileValidationError(format!(
            "{} is not a valid URL: {}",
            field, e
        ))),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    fn policy() -> RecruiterProfilePolicy {
        RecruiterProfilePolicy::default()
    }

    #[test]
    fn empty_update_is_valid_and_stays_empty() {
        let patch = policy().validate(RecruiterProfileUpdate::default()).unwrap();
        assert!(patch.company_size.is_unset());
        assert!(patch.experience_levels.is_unset());
        assert!(patch.linkedin_url.is_unset());
    }

    #[test]
    fn typed_values_pass_through() {
        let update = RecruiterProfileUpdate {
            company: PatchField::Value("Acme".to_string()),
            company_size: PatchField::Value("medium".to_string()),
            experience_levels: PatchField::Value(strings(&["entry", "senior"])),
            company_url: PatchField::Value("https://acme.io".to_string()),
            ..Default::default()
        };

        let patch = policy().validate(update).unwrap();
        assert_eq!(patch.company_size, PatchField::Value(CompanySize::Medium));
        assert_eq!(
            patch.experience_levels,
            PatchField::Value(vec![ExperienceLevel::Entry, ExperienceLevel::Senior])
        );
        assert_eq!(patch.company_url, PatchField::Value("https://acme.io".to_string()));
    }

    #[test]
    fn unknown_company_size_names_value_and_allowed_set() {
        let update = RecruiterProfileUpdate {
            company_size: PatchField::Value("huge".to_string()),
            ..Default::default()
        };

        let err = policy().validate(update).unwrap_err();
        assert!(err.0.contains("huge"));
        assert!(err.0.contains("startup, small, medium, large, enterprise"));
    }

    #[test]
    fn five_levels_fail_on_count_before_membership() {
        let update = RecruiterProfileUpdate {
            experience_levels: PatchField::Value(strings(&[
                "entry", "junior", "mid", "senior", "lead",
            ])),
            ..Default::default()
        };

        let err = policy().validate(update).unwrap_err();
        assert!(err.0.starts_with("experienceLevels may contain at most 4 entries"));
        assert!(!err.0.contains("Allowed values"));
    }

    #[test]
    fn membership_violation_lists_offenders() {
        let update = RecruiterProfileUpdate {
            experience_levels: PatchField::Value(strings(&["entry", "lead", "intern"])),
            ..Default::default()
        };

        let err = policy().validate(update).unwrap_err();
        assert!(err.0.starts_with("Invalid experience levels: lead, intern."));
    }

    #[test]
    fn sixteen_hiring_sectors_are_too_many() {
        let sectors: Vec<String> = (0..16).map(|i| format!("sector-{}", i)).collect();
        let update = RecruiterProfileUpdate {
            hiring_sectors: PatchField::Value(sectors),
            ..Default::default()
        };

        let err = policy().validate(update).unwrap_err();
        assert!(err.0.starts_with("hiringSectors may contain at most 15"));

        let fifteen: Vec<String> = (0..15).map(|i| format!("sector-{}", i)).collect();
        let ok = RecruiterProfileUpdate {
            hiring_sectors: PatchField::Value(fifteen),
            ..Default::default()
        };
        assert!(policy().validate(ok).is_ok());
    }

    #[test]
    fn malformed_urls_are_rejected() {
        let update = RecruiterProfileUpdate {
            linkedin_url: PatchField::Value("linkedin.com/in/someone".to_string()),
            ..Default::default()
        };
        let err = policy().validate(update).unwrap_err();
        assert!(err.0.starts_with("linkedinUrl is not a valid URL"));

        let update = RecruiterProfileUpdate {
            company_url: PatchField::Value("not a url".to_string()),
            ..Default::default()
        };
        let err = policy().validate(update).unwrap_err();
        assert!(err.0.starts_with("companyUrl is not a valid URL"));
    }

    #[test]
    fn only_first_failure_is_reported() {
        let update = RecruiterProfileUpdate {
            company_size: PatchField::Value("huge".to_string()),
            linkedin_url: PatchField::Value("nope".to_string()),
            ..Default::default()
        };

        let err = policy().validate(update).unwrap_err();
        assert!(err.0.contains("company size"));
        assert!(!err.0.contains("linkedinUrl"));
    }

    #[test]
    fn null_clears_url_without_validation() {
        let update = RecruiterProfileUpdate {
            linkedin_url: PatchField::Null,
            ..Default::default()
        };
        let patch = policy().validate(update).unwrap();
        assert_eq!(patch.linkedin_url, PatchField::Null);
    }
}
