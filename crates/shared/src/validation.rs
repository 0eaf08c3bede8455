//! Client-side validation. Everything here runs before any network call.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::format::digits_only;
use crate::models::{LoginRequest, RegisterRequest};

/// Largest photo the upload endpoint accepts.
pub const MAX_UPLOAD_BYTES: u64 = 5 * 1024 * 1024;

/// MIME types accepted for gallery photos.
pub const ALLOWED_IMAGE_TYPES: [&str; 4] = ["image/jpeg", "image/jpg", "image/png", "image/webp"];

pub const MIN_NAME_CHARS: usize = 3;
pub const MIN_PASSWORD_CHARS: usize = 6;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
});

/// Validation failures, each carrying the message shown inline in the form.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Preencha todos os campos obrigatórios")]
    MissingRequiredFields,
    #[error("Preencha todos os campos")]
    MissingCredentials,
    #[error("Digite seu e-mail")]
    MissingEmail,
    #[error("Nome deve ter pelo menos 3 caracteres")]
    NameTooShort,
    #[error("E-mail inválido")]
    InvalidEmail,
    #[error("WhatsApp inválido")]
    InvalidPhone,
    #[error("A senha deve ter pelo menos 6 caracteres")]
    PasswordTooShort,
    #[error("As senhas não conferem")]
    PasswordMismatch,
    #[error("Você precisa aceitar os termos de uso")]
    TermsNotAccepted,
    #[error("Formato não permitido. Use JPG, PNG ou WebP.")]
    UnsupportedFileType,
    #[error("Arquivo muito grande. Máximo 5MB.")]
    FileTooLarge,
    #[error("Valor inválido para {field}")]
    InvalidNumber { field: &'static str },
    #[error("Informe o motivo da reprovação")]
    MissingReason,
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Brazilian phone numbers have 10 (landline) or 11 (mobile) digits once
/// punctuation is stripped.
pub fn is_valid_phone(phone: &str) -> bool {
    matches!(digits_only(phone).len(), 10 | 11)
}

/// Check a photo before uploading it.
pub fn validate_upload(mime: &str, size: u64) -> Result<(), ValidationError> {
    if !ALLOWED_IMAGE_TYPES.contains(&mime) {
        return Err(ValidationError::UnsupportedFileType);
    }
    if size > MAX_UPLOAD_BYTES {
        return Err(ValidationError::FileTooLarge);
    }
    Ok(())
}

/// Login form as typed by the user.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    pub fn validate(&self) -> Result<LoginRequest, ValidationError> {
        let email = self.email.trim();
        if email.is_empty() || self.password.is_empty() {
            return Err(ValidationError::MissingCredentials);
        }
        if !is_valid_email(email) {
            return Err(ValidationError::InvalidEmail);
        }
        Ok(LoginRequest {
            email: email.to_string(),
            password: self.password.clone(),
        })
    }
}

/// Registration form as typed by the user.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RegisterForm {
    pub name: String,
    pub email: String,
    pub whatsapp: String,
    pub password: String,
    pub confirm_password: String,
    pub accepts_terms: bool,
}

impl RegisterForm {
    /// Run every rule in display order and produce the request body.
    pub fn validate(&self) -> Result<RegisterRequest, ValidationError> {
        let name = self.name.trim();
        let email = self.email.trim();
        let whatsapp = self.whatsapp.trim();

        if name.is_empty() || email.is_empty() || self.password.is_empty() {
            return Err(ValidationError::MissingRequiredFields);
        }
        if name.chars().count() < MIN_NAME_CHARS {
            return Err(ValidationError::NameTooShort);
        }
        if !is_valid_email(email) {
            return Err(ValidationError::InvalidEmail);
        }
        if !whatsapp.is_empty() && !is_valid_phone(whatsapp) {
            return Err(ValidationError::InvalidPhone);
        }
        if self.password.chars().count() < MIN_PASSWORD_CHARS {
            return Err(ValidationError::PasswordTooShort);
        }
        if self.password != self.confirm_password {
            return Err(ValidationError::PasswordMismatch);
        }
        if !self.accepts_terms {
            return Err(ValidationError::TermsNotAccepted);
        }

        Ok(RegisterRequest {
            name: name.to_string(),
            email: email.to_string(),
            password: self.password.clone(),
            whatsapp: (!whatsapp.is_empty()).then(|| whatsapp.to_string()),
        })
    }
}
