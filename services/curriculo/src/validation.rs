//! Input validation strategies
//!
//! Each strategy answers one question about one kind of input and knows the
//! message shown to the user when the answer is no. Handlers run one strategy
//! per field through an [`InputsValidator`] and stop at the first rejection.

use anyhow::Result;
use async_trait::async_trait;
use regex::Regex;
use std::sync::OnceLock;
use tracing::warn;

use crate::services::UserService;

/// One named form value together with the column width it must fit in
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField {
    pub name: &'static str,
    pub value: String,
    pub max_len: usize,
}

impl FormField {
    pub fn new(name: &'static str, value: &str, max_len: usize) -> Self {
        Self {
            name,
            value: value.to_string(),
            max_len,
        }
    }
}

/// A pluggable validation rule
#[async_trait]
pub trait ValidationStrategy<I: ?Sized + Sync>: Send + Sync {
    /// Returns `Ok(true)` when the input is acceptable
    async fn validate(&self, input: &I) -> Result<bool>;

    /// Message shown to the user when the input is rejected
    fn message(&self) -> &'static str;
}

/// Holds the strategy currently used to validate inputs of type `I`
pub struct InputsValidator<I: ?Sized + Sync> {
    strategy: Box<dyn ValidationStrategy<I>>,
}

impl<I: ?Sized + Sync> InputsValidator<I> {
    pub fn new(strategy: impl ValidationStrategy<I> + 'static) -> Self {
        Self {
            strategy: Box::new(strategy),
        }
    }

    /// Swap the strategy used by later calls
    pub fn set_strategy(&mut self, strategy: impl ValidationStrategy<I> + 'static) {
        self.strategy = Box::new(strategy);
    }

    pub async fn validate(&self, input: &I) -> Result<bool> {
        self.strategy.validate(input).await
    }

    pub fn message(&self) -> &'static str {
        self.strategy.message()
    }

    /// Validate and return the rejection message, if any
    pub async fn rejection(&self, input: &I) -> Result<Option<&'static str>> {
        if self.validate(input).await? {
            Ok(None)
        } else {
            Ok(Some(self.message()))
        }
    }
}

/// Email must look like `local@domain.tld`
pub struct EmailFormat;

#[async_trait]
impl ValidationStrategy<str> for EmailFormat {
    async fn validate(&self, email: &str) -> Result<bool> {
        static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();
        let regex = EMAIL_REGEX.get_or_init(|| {
            Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$")
                .expect("Failed to compile email regex")
        });

        Ok(regex.is_match(email.trim()))
    }

    fn message(&self) -> &'static str {
        "Email inválido. Verifique e tente novamente."
    }
}

/// Password must have at least 8 characters, an upper-case letter and a digit
pub struct PasswordStrength;

#[async_trait]
impl ValidationStrategy<str> for PasswordStrength {
    async fn validate(&self, password: &str) -> Result<bool> {
        Ok(password.chars().count() >= 8
            && password.chars().any(char::is_uppercase)
            && password.chars().any(|c| c.is_ascii_digit()))
    }

    fn message(&self) -> &'static str {
        "A senha deve ter pelo menos 8 caracteres, uma letra maiúscula e um número."
    }
}

/// Every field must hold something other than whitespace
pub struct NonEmptyFields;

#[async_trait]
impl ValidationStrategy<[FormField]> for NonEmptyFields {
    async fn validate(&self, fields: &[FormField]) -> Result<bool> {
        match fields.iter().find(|field| field.value.trim().is_empty()) {
            Some(field) => {
                warn!("Rejected form: field '{}' is empty", field.name);
                Ok(false)
            }
            None => Ok(true),
        }
    }

    fn message(&self) -> &'static str {
        "Preencha todos os campos."
    }
}

/// Every field must fit in its column
pub struct FieldLengths;

#[async_trait]
impl ValidationStrategy<[FormField]> for FieldLengths {
    async fn validate(&self, fields: &[FormField]) -> Result<bool> {
        match fields
            .iter()
            .find(|field| field.value.trim().chars().count() > field.max_len)
        {
            Some(field) => {
                warn!(
                    "Rejected form: field '{}' is longer than {} characters",
                    field.name, field.max_len
                );
                Ok(false)
            }
            None => Ok(true),
        }
    }

    fn message(&self) -> &'static str {
        "Um ou mais campos excedem o tamanho máximo permitido."
    }
}

/// Email must not belong to a registered user yet
pub struct EmailUniqueness {
    user_service: UserService,
}

impl EmailUniqueness {
    pub fn new(user_service: UserService) -> Self {
        Self { user_service }
    }
}

#[async_trait]
impl ValidationStrategy<str> for EmailUniqueness {
    async fn validate(&self, email: &str) -> Result<bool> {
        let existing = self.user_service.get_user_by_email(email).await?;
        Ok(existing.is_none())
    }

    fn message(&self) -> &'static str {
        "Esse email já foi cadastrado. Verifique e tente novamente."
    }
}

/// Run the form-level strategies shared by every record form
pub async fn check_form(fields: &[FormField]) -> Result<Option<&'static str>> {
    let mut validator = InputsValidator::new(NonEmptyFields);
    if let Some(message) = validator.rejection(fields).await? {
        return Ok(Some(message));
    }

    validator.set_strategy(FieldLengths);
    validator.rejection(fields).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::database::{DatabaseConfig, init_pool, migrate};

    use crate::models::NewUser;
    use crate::repositories::UserRepository;

    #[tokio::test]
    async fn test_email_format() -> Result<()> {
        let validator = InputsValidator::new(EmailFormat);
        assert!(validator.validate("ana.silva@example.com").await?);
        assert!(validator.validate("a+b@mail.example.org").await?);
        assert!(!validator.validate("ana.silva").await?);
        assert!(!validator.validate("ana@example").await?);
        assert!(!validator.validate("ana@example.com junk").await?);
        assert!(!validator.validate("").await?);
        Ok(())
    }

    #[tokio::test]
    async fn test_password_strength() -> Result<()> {
        let validator = InputsValidator::new(PasswordStrength);
        assert!(validator.validate("Segredo123").await?);
        assert!(!validator.validate("Curta1").await?, "too short");
        assert!(!validator.validate("semmaiuscula1").await?, "no upper case");
        assert!(!validator.validate("SemNumeroAqui").await?, "no digit");
        assert_eq!(
            validator.rejection("fraca").await?,
            Some(PasswordStrength.message())
        );
        Ok(())
    }

    #[tokio::test]
    async fn test_non_empty_fields() -> Result<()> {
        let validator = InputsValidator::new(NonEmptyFields);
        let filled = vec![
            FormField::new("curso", "Computação", 100),
            FormField::new("instituicao", "USP", 100),
        ];
        let blank = vec![
            FormField::new("curso", "Computação", 100),
            FormField::new("instituicao", "   ", 100),
        ];

        assert!(validator.validate(&filled).await?);
        assert!(!validator.validate(&blank).await?);
        assert!(validator.validate(&[]).await?);
        Ok(())
    }

    #[tokio::test]
    async fn test_check_form_reports_first_failure() -> Result<()> {
        let too_long = vec![FormField::new("telefone", &"9".repeat(21), 20)];
        assert_eq!(check_form(&too_long).await?, Some(FieldLengths.message()));

        let empty_and_long = vec![
            FormField::new("nome", "", 100),
            FormField::new("telefone", &"9".repeat(21), 20),
        ];
        assert_eq!(
            check_form(&empty_and_long).await?,
            Some(NonEmptyFields.message())
        );

        let ok = vec![FormField::new("telefone", "11 99999-0000", 20)];
        assert_eq!(check_form(&ok).await?, None);
        Ok(())
    }

    #[tokio::test]
    async fn test_email_uniqueness_and_strategy_swap() -> Result<()> {
        let pool = init_pool(&DatabaseConfig::in_memory()).await?;
        migrate(&pool).await?;
        let user_service = UserService::new(UserRepository::new(pool));

        user_service
            .create_user(&NewUser {
                email: "ana@example.com".to_string(),
                password: "Segredo123".to_string(),
            })
            .await?;

        let mut validator = InputsValidator::new(EmailFormat);
        assert!(validator.validate("ana@example.com").await?);

        validator.set_strategy(EmailUniqueness::new(user_service));
        assert!(!validator.validate("ana@example.com").await?);
        assert!(validator.validate("bia@example.com").await?);
        assert_eq!(
            validator.message(),
            "Esse email já foi cadastrado. Verifique e tente novamente."
        );
        Ok(())
    }
}
