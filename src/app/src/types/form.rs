use serde::{Deserialize, Serialize};
use serde_valid::Validate;
use thiserror::Error;

/// Reason a submission was stopped at one of its gates
#[derive(Debug, Clone, Copy, Error, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum ValidationError {
    #[error("Timezone is invalid")]
    TimezoneInvalid,
    #[error("Email, password, or server is incomplete")]
    CredentialsIncomplete,
}

/// Unsubmitted form input.
///
/// `None` means the field was never touched, `Some("")` means the user
/// cleared it again. Both fail validation at submit time.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct DraftFields {
    pub timezone: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub server: Option<String>,
}

/// Account credentials that passed the completeness gate
#[derive(Debug, Clone, PartialEq, Eq, Validate)]
pub struct Credentials {
    #[validate(min_length = 1)]
    pub email: String,
    #[validate(min_length = 1)]
    pub password: String,
    #[validate(min_length = 1)]
    pub server: String,
}

impl DraftFields {
    pub fn is_untouched(&self) -> bool {
        *self == Self::default()
    }

    /// Timezone to merge into the document, if one was entered
    pub fn timezone(&self) -> Result<&str, ValidationError> {
        match self.timezone.as_deref() {
            Some(timezone) if !timezone.is_empty() => Ok(timezone),
            _ => Err(ValidationError::TimezoneInvalid),
        }
    }

    /// Credentials to upload, if all three fields are filled in
    pub fn credentials(&self) -> Result<Credentials, ValidationError> {
        let credentials = Credentials {
            email: self.email.clone().unwrap_or_default(),
            password: self.password.clone().unwrap_or_default(),
            server: self.server.clone().unwrap_or_default(),
        };

        credentials
            .validate()
            .map_err(|_| ValidationError::CredentialsIncomplete)?;

        Ok(credentials)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete() -> DraftFields {
        DraftFields {
            timezone: Some("UTC".to_string()),
            email: Some("a@b.com".to_string()),
            password: Some("x".to_string()),
            server: Some("https://x".to_string()),
        }
    }

    #[test]
    fn default_draft_is_untouched() {
        assert!(DraftFields::default().is_untouched());
        assert!(!complete().is_untouched());
    }

    #[test]
    fn timezone_rejects_unset_and_empty() {
        let mut draft = complete();
        draft.timezone = None;
        assert_eq!(draft.timezone(), Err(ValidationError::TimezoneInvalid));

        draft.timezone = Some(String::new());
        assert_eq!(draft.timezone(), Err(ValidationError::TimezoneInvalid));
    }

    #[test]
    fn timezone_is_not_normalized() {
        let mut draft = complete();
        draft.timezone = Some("Mars/Olympus_Mons".to_string());

        assert_eq!(draft.timezone(), Ok("Mars/Olympus_Mons"));
    }

    #[test]
    fn complete_credentials_pass() {
        assert_eq!(
            complete().credentials(),
            Ok(Credentials {
                email: "a@b.com".to_string(),
                password: "x".to_string(),
                server: "https://x".to_string(),
            })
        );
    }

    #[test]
    fn credentials_require_all_three_fields() {
        let fields: [(&str, fn(&mut DraftFields) -> &mut Option<String>); 3] = [
            ("email", |draft| &mut draft.email),
            ("password", |draft| &mut draft.password),
            ("server", |draft| &mut draft.server),
        ];

        for (name, field) in fields {
            for value in [None, Some(String::new())] {
                let mut draft = complete();
                *field(&mut draft) = value.clone();

                assert_eq!(
                    draft.credentials(),
                    Err(ValidationError::CredentialsIncomplete),
                    "{name} = {value:?}"
                );
            }
        }
    }

    #[test]
    fn validation_errors_have_user_facing_messages() {
        assert_eq!(
            ValidationError::TimezoneInvalid.to_string(),
            "Timezone is invalid"
        );
        assert_eq!(
            ValidationError::CredentialsIncomplete.to_string(),
            "Email, password, or server is incomplete"
        );
    }
}
