//! Reusable field rules.

use std::fmt::Display;

use validator::ValidateEmail;

use super::Validator;
use crate::error::CoreError;

/// Text length limit, counted in characters rather than bytes.
#[derive(Debug, Clone, Copy)]
pub struct MaxChars(pub usize);

impl Validator<String> for MaxChars {
    fn validate(&self, field: &'static str, value: String) -> Result<String, CoreError> {
        let len = value.chars().count();
        if len > self.0 {
            return Err(CoreError::constraint(
                field,
                format!("must have at most {} characters, got {len}", self.0),
            ));
        }
        Ok(value)
    }
}

/// Sequence length limit.
#[derive(Debug, Clone, Copy)]
pub struct MaxItems(pub usize);

impl<T> Validator<Vec<T>> for MaxItems {
    fn validate(&self, field: &'static str, value: Vec<T>) -> Result<Vec<T>, CoreError> {
        if value.len() > self.0 {
            return Err(CoreError::constraint(
                field,
                format!("must have at most {} items, got {}", self.0, value.len()),
            ));
        }
        Ok(value)
    }
}

/// Open interval `(min, max)`: both bounds excluded.
#[derive(Debug, Clone, Copy)]
pub struct ExclusiveRange<T> {
    min: T,
    max: T,
}

impl<T> ExclusiveRange<T> {
    pub const fn new(min: T, max: T) -> Self {
        Self { min, max }
    }
}

impl<T: PartialOrd + Display> Validator<T> for ExclusiveRange<T> {
    fn validate(&self, field: &'static str, value: T) -> Result<T, CoreError> {
        if value > self.min && value < self.max {
            Ok(value)
        } else {
            Err(CoreError::constraint(
                field,
                format!(
                    "must be greater than {} and less than {}, got {value}",
                    self.min, self.max
                ),
            ))
        }
    }
}

/// Strict lower bound.
#[derive(Debug, Clone, Copy)]
pub struct GreaterThan<T>(pub T);

impl<T: PartialOrd + Display> Validator<T> for GreaterThan<T> {
    fn validate(&self, field: &'static str, value: T) -> Result<T, CoreError> {
        if value > self.0 {
            Ok(value)
        } else {
            Err(CoreError::constraint(
                field,
                format!("must be greater than {}, got {value}", self.0),
            ))
        }
    }
}

/// Syntactic email address check (local part, `@`, domain).
#[derive(Debug, Clone, Copy)]
pub struct EmailSyntax;

impl Validator<String> for EmailSyntax {
    fn validate(&self, field: &'static str, value: String) -> Result<String, CoreError> {
        if value.validate_email() {
            Ok(value)
        } else {
            Err(CoreError::constraint(
                field,
                format!("must be a valid email address, got '{value}'"),
            ))
        }
    }
}

/// The email domain (text after the last `@`) must be one of a fixed set.
///
/// Domains compare case-insensitively; the address itself passes through
/// unchanged.
#[derive(Debug, Clone, Copy)]
pub struct DomainAllowList(pub &'static [&'static str]);

impl Validator<String> for DomainAllowList {
    fn validate(&self, _field: &'static str, value: String) -> Result<String, CoreError> {
        let domain = value.rsplit('@').next().unwrap_or_default();
        if self.0.iter().any(|allowed| allowed.eq_ignore_ascii_case(domain)) {
            Ok(value)
        } else {
            Err(CoreError::InvalidDomain {
                domain: domain.to_string(),
            })
        }
    }
}

/// Absolute URL with a scheme and a non-empty host.
#[derive(Debug, Clone, Copy)]
pub struct UrlWithHost;

impl Validator<String> for UrlWithHost {
    fn validate(&self, field: &'static str, value: String) -> Result<String, CoreError> {
        let parsed = url::Url::parse(&value).map_err(|e| {
            CoreError::constraint(field, format!("must be a valid URL: {e}"))
        })?;
        match parsed.host_str() {
            Some(host) if !host.is_empty() => Ok(value),
            _ => Err(CoreError::constraint(
                field,
                format!("must be a URL with a host, got '{value}'"),
            )),
        }
    }
}

/// Rewrites text to uppercase. Never fails.
#[derive(Debug, Clone, Copy)]
pub struct Uppercase;

impl Validator<String> for Uppercase {
    fn validate(&self, _field: &'static str, value: String) -> Result<String, CoreError> {
        Ok(value.to_uppercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn max_chars_counts_characters_not_bytes() {
        let name = "é".repeat(50);
        assert!(MaxChars(50).validate("name", name).is_ok());
        assert!(MaxChars(50).validate("name", "a".repeat(51)).is_err());
    }

    #[test]
    fn max_items_boundary() {
        assert!(MaxItems(2).validate("allergies", vec![1, 2]).is_ok());
        assert!(MaxItems(2).validate("allergies", vec![1, 2, 3]).is_err());
    }

    #[test]
    fn exclusive_range_excludes_both_bounds() {
        let range = ExclusiveRange::new(0, 120);
        assert!(range.validate("age", 0).is_err());
        assert!(range.validate("age", 120).is_err());
        assert_eq!(range.validate("age", 1), Ok(1));
        assert_eq!(range.validate("age", 119), Ok(119));
    }

    #[test]
    fn greater_than_rejects_zero() {
        assert!(GreaterThan(0.0).validate("weight", 0.0).is_err());
        assert!(GreaterThan(0.0).validate("weight", -1.0).is_err());
        assert_eq!(GreaterThan(0.0).validate("weight", 0.1), Ok(0.1));
    }

    #[test]
    fn email_syntax() {
        assert!(EmailSyntax.validate("email", "abc@hdfc.com".into()).is_ok());
        assert!(EmailSyntax.validate("email", "not-an-email".into()).is_err());
        assert!(EmailSyntax.validate("email", "abc@".into()).is_err());
    }

    #[test]
    fn domain_allow_list_uses_last_at() {
        let rule = DomainAllowList(&["hdfc.com", "icici.com"]);
        assert_eq!(
            rule.validate("email", "abc@icici.com".into()),
            Ok("abc@icici.com".to_string())
        );
        assert_eq!(
            rule.validate("email", "abc@gmail.com".into()),
            Err(CoreError::InvalidDomain {
                domain: "gmail.com".into()
            })
        );
        assert!(rule.validate("email", "a@hdfc.com@gmail.com".into()).is_err());
    }

    #[test]
    fn domain_allow_list_ignores_case_and_keeps_address() {
        let rule = DomainAllowList(&["hdfc.com"]);
        assert_eq!(
            rule.validate("email", "abc@HDFC.com".into()),
            Ok("abc@HDFC.com".to_string())
        );
    }

    #[test]
    fn url_requires_scheme_and_host() {
        assert!(UrlWithHost
            .validate("linkedin_url", "https://linkedin.com/in/1322".into())
            .is_ok());
        assert!(UrlWithHost
            .validate("linkedin_url", "linkedin.com/in/1322".into())
            .is_err());
        assert!(UrlWithHost
            .validate("linkedin_url", "mailto:abc@hdfc.com".into())
            .is_err());
    }

    #[test]
    fn uppercase_is_idempotent() {
        let once = Uppercase.validate("name", "Tej".into()).unwrap();
        let twice = Uppercase.validate("name", once.clone()).unwrap();
        assert_eq!(once, "TEJ");
        assert_eq!(once, twice);
    }
}
