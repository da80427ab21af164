//! Résumé customization choices kept in the session

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr, sync::OnceLock};
use thiserror::Error;
use tracing::warn;

/// What a customization changes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CustomizationKind {
    Color,
    Font,
    Size,
}

impl CustomizationKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Color => "color",
            Self::Font => "font",
            Self::Size => "size",
        }
    }

    /// Whether `value` is safe and meaningful for this kind
    pub fn accepts(self, value: &str) -> bool {
        static COLOR: OnceLock<Regex> = OnceLock::new();
        static FONT: OnceLock<Regex> = OnceLock::new();
        static SIZE: OnceLock<Regex> = OnceLock::new();

        let regex = match self {
            Self::Color => COLOR.get_or_init(|| {
                Regex::new(r"^(#[0-9a-fA-F]{3}|#[0-9a-fA-F]{6}|[a-zA-Z]{3,30})$")
                    .expect("Failed to compile color regex")
            }),
            Self::Font => FONT.get_or_init(|| {
                Regex::new(r"^[a-zA-Z0-9][a-zA-Z0-9 ,\-]{0,59}$")
                    .expect("Failed to compile font regex")
            }),
            Self::Size => SIZE.get_or_init(|| {
                Regex::new(r"^[0-9]{1,3}(\.[0-9]{1,2})?(px|pt|em|rem|%)$")
                    .expect("Failed to compile size regex")
            }),
        };

        regex.is_match(value)
    }
}

impl fmt::Display for CustomizationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CustomizationKind {
    type Err = CustomizationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "color" | "cor" => Ok(Self::Color),
            "font" | "fonte" => Ok(Self::Font),
            "size" | "tamanho" => Ok(Self::Size),
            other => Err(CustomizationError::UnknownKind(other.to_string())),
        }
    }
}

/// One customization choice
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customization {
    pub kind: CustomizationKind,
    pub value: String,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CustomizationError {
    #[error("Unknown customization type: {0}")]
    UnknownKind(String),

    #[error("Invalid {kind} value: {value}")]
    InvalidValue {
        kind: CustomizationKind,
        value: String,
    },
}

/// Ordered customizations, at most one per kind
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Customizations(Vec<Customization>);

impl Customizations {
    /// Replace any earlier choice of the same kind and append the new one
    pub fn apply(
        &mut self,
        kind: CustomizationKind,
        value: &str,
    ) -> Result<(), CustomizationError> {
        let value = value.trim();
        if !kind.accepts(value) {
            return Err(CustomizationError::InvalidValue {
                kind,
                value: value.to_string(),
            });
        }

        self.0.retain(|existing| existing.kind != kind);
        self.0.push(Customization {
            kind,
            value: value.to_string(),
        });
        Ok(())
    }

    pub fn reset(&mut self) {
        self.0.clear();
    }

    pub fn get(&self, kind: CustomizationKind) -> Option<&str> {
        self.0
            .iter()
            .find(|c| c.kind == kind)
            .map(|c| c.value.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Customization> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Drop entries a tampered or outdated session may carry
    pub(crate) fn sanitized(self) -> Self {
        let mut clean = Self::default();
        for customization in self.0 {
            // Later duplicates win, same as apply.
            if let Err(e) = clean.apply(customization.kind, &customization.value) {
                warn!("Dropping session customization: {}", e);
            }
        }
        clean
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(list: &Customizations) -> Vec<CustomizationKind> {
        list.iter().map(|c| c.kind).collect()
    }

    #[test]
    fn test_parse_kind() {
        assert_eq!("color".parse::<CustomizationKind>(), Ok(CustomizationKind::Color));
        assert_eq!("Fonte".parse::<CustomizationKind>(), Ok(CustomizationKind::Font));
        assert_eq!("tamanho".parse::<CustomizationKind>(), Ok(CustomizationKind::Size));
        assert_eq!(
            "border".parse::<CustomizationKind>(),
            Err(CustomizationError::UnknownKind("border".to_string()))
        );
    }

    #[test]
    fn test_apply_replaces_then_appends() {
        let mut list = Customizations::default();
        list.apply(CustomizationKind::Color, "red").unwrap();
        list.apply(CustomizationKind::Font, "Arial").unwrap();
        list.apply(CustomizationKind::Size, "14px").unwrap();
        list.apply(CustomizationKind::Color, "#336699").unwrap();

        assert_eq!(list.len(), 3);
        assert_eq!(
            kinds(&list),
            vec![
                CustomizationKind::Font,
                CustomizationKind::Size,
                CustomizationKind::Color
            ]
        );
        assert_eq!(list.get(CustomizationKind::Color), Some("#336699"));
    }

    #[test]
    fn test_invalid_values_leave_list_unchanged() {
        let mut list = Customizations::default();
        list.apply(CustomizationKind::Color, "blue").unwrap();

        for (kind, value) in [
            (CustomizationKind::Color, "red;background:url(x)"),
            (CustomizationKind::Color, "#12345"),
            (CustomizationKind::Font, "Arial'><script>"),
            (CustomizationKind::Font, ""),
            (CustomizationKind::Size, "12"),
            (CustomizationKind::Size, "huge"),
        ] {
            assert!(list.apply(kind, value).is_err(), "{kind} {value}");
        }

        assert_eq!(list.len(), 1);
        assert_eq!(list.get(CustomizationKind::Color), Some("blue"));
    }

    #[test]
    fn test_accepts_common_values() {
        assert!(CustomizationKind::Font.accepts("Times New Roman, serif"));
        assert!(CustomizationKind::Size.accepts("1.25em"));
        assert!(CustomizationKind::Size.accepts("120%"));
        assert!(CustomizationKind::Color.accepts("#abc"));
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut list = Customizations::default();
        list.apply(CustomizationKind::Size, "12pt").unwrap();
        list.reset();
        assert!(list.is_empty());
    }

    #[test]
    fn test_sanitized_drops_bad_and_duplicate_entries() {
        let raw: Customizations = serde_json::from_str(
            r#"[
                {"kind": "color", "value": "red"},
                {"kind": "font", "value": "x'><b>"},
                {"kind": "color", "value": "green"}
            ]"#,
        )
        .unwrap();

        let clean = raw.sanitized();
        assert_eq!(clean.len(), 1);
        assert_eq!(clean.get(CustomizationKind::Color), Some("green"));
    }
}
