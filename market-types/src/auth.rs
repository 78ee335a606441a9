//! Sign-in request body.

use serde::{Deserialize, Serialize};

/// Body of `POST /auth/sign-in`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SignInRequest {
    pub email: String,
    pub password: String,
}

/// Why a sign-in form cannot be submitted yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SignInValidation {
    #[error("Email is required")]
    MissingEmail,
    #[error("Enter a valid email address")]
    InvalidEmail,
    #[error("Password is required")]
    MissingPassword,
}

impl SignInRequest {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    /// Check the form fields, returning the first problem found.
    ///
    /// The email is checked after trimming; the password is taken as-is.
    pub fn validate(&self) -> Result<(), SignInValidation> {
        let email = self.email.trim();
        if email.is_empty() {
            return Err(SignInValidation::MissingEmail);
        }
        match email.split_once('@') {
            Some((local, domain))
                if !local.is_empty() && !domain.is_empty() && !domain.contains('@') => {}
            _ => return Err(SignInValidation::InvalidEmail),
        }
        if self.password.is_empty() {
            return Err(SignInValidation::MissingPassword);
        }
        Ok(())
    }

    /// Copy with the email trimmed, ready to send.
    pub fn normalized(&self) -> Self {
        Self {
            email: self.email.trim().to_string(),
            password: self.password.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_request() {
        let req = SignInRequest::new("  planner@example.com ", "hunter2");
        assert_eq!(req.validate(), Ok(()));
        assert_eq!(req.normalized().email, "planner@example.com");
    }

    #[test]
    fn test_missing_fields() {
        assert_eq!(
            SignInRequest::new("   ", "pw").validate(),
            Err(SignInValidation::MissingEmail)
        );
        assert_eq!(
            SignInRequest::new("a@b.co", "").validate(),
            Err(SignInValidation::MissingPassword)
        );
    }

    #[test]
    fn test_malformed_email() {
        for email in ["plainaddress", "@example.com", "user@", "a@b@c"] {
            assert_eq!(
                SignInRequest::new(email, "pw").validate(),
                Err(SignInValidation::InvalidEmail),
                "{email} should be rejected"
            );
        }
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            SignInValidation::InvalidEmail.to_string(),
            "Enter a valid email address"
        );
    }
}
