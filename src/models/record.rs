use super::status::{OutreachStatus, flag};
use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};

/// One HR contact paired with the company they recruit for.
///
/// Field order is the column order of the dataset file.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Record {
    pub hr_name: String,
    pub hr_job_title: String,
    pub hr_email: String,
    pub hr_phone: String,
    pub hr_linkedin_username: String,
    pub hr_twitter_username: String,
    pub hr_facebook_username: String,
    pub company_name: String,
    pub company_website: String,
    pub company_email: String,
    pub company_linkedin_username: String,
    pub company_twitter_username: String,
    pub company_facebook_username: String,
    pub company_location: String,
    pub company_niche: String,
    pub status: OutreachStatus,
    #[serde(with = "flag")]
    pub job_status: bool,
    #[serde(with = "flag")]
    pub linkedin_status: bool,
    #[serde(with = "flag")]
    pub twitter_status: bool,
    #[serde(with = "flag")]
    pub facebook_status: bool,
}

/// Lookup key of a record: (hr_name, company_name).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RecordKey {
    pub hr_name: String,
    pub company_name: String,
}

impl std::fmt::Display for RecordKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} @ {}", self.hr_name, self.company_name)
    }
}

/// Addressable columns of a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    HrName,
    HrJobTitle,
    HrEmail,
    HrPhone,
    HrLinkedin,
    HrTwitter,
    HrFacebook,
    CompanyName,
    CompanyWebsite,
    CompanyEmail,
    CompanyLinkedin,
    CompanyTwitter,
    CompanyFacebook,
    CompanyLocation,
    CompanyNiche,
    Status,
    JobStatus,
    LinkedinStatus,
    TwitterStatus,
    FacebookStatus,
}

impl Field {
    pub const ALL: [Field; 20] = [
        Field::HrName,
        Field::HrJobTitle,
        Field::HrEmail,
        Field::HrPhone,
        Field::HrLinkedin,
        Field::HrTwitter,
        Field::HrFacebook,
        Field::CompanyName,
        Field::CompanyWebsite,
        Field::CompanyEmail,
        Field::CompanyLinkedin,
        Field::CompanyTwitter,
        Field::CompanyFacebook,
        Field::CompanyLocation,
        Field::CompanyNiche,
        Field::Status,
        Field::JobStatus,
        Field::LinkedinStatus,
        Field::TwitterStatus,
        Field::FacebookStatus,
    ];

    /// Column name in the dataset header.
    pub fn column(&self) -> &'static str {
        match self {
            Field::HrName => "hr_name",
            Field::HrJobTitle => "hr_job_title",
            Field::HrEmail => "hr_email",
            Field::HrPhone => "hr_phone",
            Field::HrLinkedin => "hr_linkedin_username",
            Field::HrTwitter => "hr_twitter_username",
            Field::HrFacebook => "hr_facebook_username",
            Field::CompanyName => "company_name",
            Field::CompanyWebsite => "company_website",
            Field::CompanyEmail => "company_email",
            Field::CompanyLinkedin => "company_linkedin_username",
            Field::CompanyTwitter => "company_twitter_username",
            Field::CompanyFacebook => "company_facebook_username",
            Field::CompanyLocation => "company_location",
            Field::CompanyNiche => "company_niche",
            Field::Status => "status",
            Field::JobStatus => "job_status",
            Field::LinkedinStatus => "linkedin_status",
            Field::TwitterStatus => "twitter_status",
            Field::FacebookStatus => "facebook_status",
        }
    }

    /// Human label used by the record view.
    pub fn label(&self) -> &'static str {
        match self {
            Field::HrName => "Name of the HR",
            Field::HrJobTitle => "Job Title",
            Field::HrEmail => "Email ID",
            Field::HrPhone => "Contact No.",
            Field::HrLinkedin => "LinkedIn Username",
            Field::HrTwitter => "Twitter Username",
            Field::HrFacebook => "Facebook Username",
            Field::CompanyName => "Name of the Company",
            Field::CompanyWebsite => "Company Website URL",
            Field::CompanyEmail => "Company Email",
            Field::CompanyLinkedin => "Company LinkedIn Username",
            Field::CompanyTwitter => "Company Twitter Username",
            Field::CompanyFacebook => "Company Facebook Username",
            Field::CompanyLocation => "Company Location",
            Field::CompanyNiche => "Company Niche",
            Field::Status => "My Status",
            Field::JobStatus => "Applied for job",
            Field::LinkedinStatus => "Contacted on LinkedIn",
            Field::TwitterStatus => "Contacted on Twitter",
            Field::FacebookStatus => "Contacted on Facebook",
        }
    }

    /// Accepts the column name, with or without the `_username` suffix.
    pub fn from_name(name: &str) -> AppResult<Self> {
        let n = name.trim().to_ascii_lowercase().replace('-', "_");
        Self::ALL
            .into_iter()
            .find(|f| f.column() == n || f.column().trim_end_matches("_username") == n)
            .ok_or_else(|| AppError::UnknownField(name.to_string()))
    }

    pub fn is_flag(&self) -> bool {
        matches!(
            self,
            Field::JobStatus | Field::LinkedinStatus | Field::TwitterStatus | Field::FacebookStatus
        )
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.column())
    }
}

impl Record {
    pub fn key(&self) -> RecordKey {
        RecordKey {
            hr_name: self.hr_name.clone(),
            company_name: self.company_name.clone(),
        }
    }

    pub fn matches_key(&self, key: &RecordKey) -> bool {
        self.hr_name == key.hr_name && self.company_name == key.company_name
    }

    /// Cell value as displayed and stored.
    pub fn get(&self, field: Field) -> String {
        match field {
            Field::HrName => self.hr_name.clone(),
            Field::HrJobTitle => self.hr_job_title.clone(),
            Field::HrEmail => self.hr_email.clone(),
            Field::HrPhone => self.hr_phone.clone(),
            Field::HrLinkedin => self.hr_linkedin_username.clone(),
            Field::HrTwitter => self.hr_twitter_username.clone(),
            Field::HrFacebook => self.hr_facebook_username.clone(),
            Field::CompanyName => self.company_name.clone(),
            Field::CompanyWebsite => self.company_website.clone(),
            Field::CompanyEmail => self.company_email.clone(),
            Field::CompanyLinkedin => self.company_linkedin_username.clone(),
            Field::CompanyTwitter => self.company_twitter_username.clone(),
            Field::CompanyFacebook => self.company_facebook_username.clone(),
            Field::CompanyLocation => self.company_location.clone(),
            Field::CompanyNiche => self.company_niche.clone(),
            Field::Status => self.status.label().to_string(),
            Field::JobStatus => flag::as_str(self.job_status).to_string(),
            Field::LinkedinStatus => flag::as_str(self.linkedin_status).to_string(),
            Field::TwitterStatus => flag::as_str(self.twitter_status).to_string(),
            Field::FacebookStatus => flag::as_str(self.facebook_status).to_string(),
        }
    }

    /// Set a cell from user input. Status and flag fields are parsed;
    /// on a parse error the record is left unchanged.
    pub fn set(&mut self, field: Field, value: &str) -> AppResult<()> {
        let invalid = || AppError::InvalidValue {
            field: field.column().to_string(),
            value: value.to_string(),
        };

        match field {
            Field::Status => {
                self.status = OutreachStatus::from_label(value).ok_or_else(invalid)?;
            }
            f if f.is_flag() => {
                let v = flag::parse(value).ok_or_else(invalid)?;
                match f {
                    Field::JobStatus => self.job_status = v,
                    Field::LinkedinStatus => self.linkedin_status = v,
                    Field::TwitterStatus => self.twitter_status = v,
                    _ => self.facebook_status = v,
                }
            }
            _ => {
                let text = value.to_string();
                match field {
                    Field::HrName => self.hr_name = text,
                    Field::HrJobTitle => self.hr_job_title = text,
                    Field::HrEmail => self.hr_email = text,
                    Field::HrPhone => self.hr_phone = text,
                    Field::HrLinkedin => self.hr_linkedin_username = text,
                    Field::HrTwitter => self.hr_twitter_username = text,
                    Field::HrFacebook => self.hr_facebook_username = text,
                    Field::CompanyName => self.company_name = text,
                    Field::CompanyWebsite => self.company_website = text,
                    Field::CompanyEmail => self.company_email = text,
                    Field::CompanyLinkedin => self.company_linkedin_username = text,
                    Field::CompanyTwitter => self.company_twitter_username = text,
                    Field::CompanyFacebook => self.company_facebook_username = text,
                    Field::CompanyLocation => self.company_location = text,
                    _ => self.company_niche = text,
                }
            }
        }
        Ok(())
    }
}
