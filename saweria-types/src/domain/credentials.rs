//! Saweria account credentials.

use secrecy::{ExposeSecret, SecretString};

use crate::error::DomainError;

/// Login credentials for one Saweria account.
///
/// The password is held as a [`SecretString`]; `Debug` shows only the username.
#[derive(Clone)]
pub struct Credentials {
    username: String,
    email: String,
    password: SecretString,
}

impl Credentials {
    /// Builds credentials, requiring every part to be non-empty.
    pub fn new(
        username: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<Self, DomainError> {
        let username = username.into();
        let email = email.into();
        let password = password.into();

        if username.is_empty() || email.is_empty() || password.is_empty() {
            return Err(DomainError::MissingCredentials);
        }

        Ok(Self {
            username,
            email,
            password: SecretString::new(password),
        })
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    /// Exposes the password for the login request.
    pub fn password(&self) -> &str {
        self.password.expose_secret()
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .finish_non_exhaustive()
    }
}
