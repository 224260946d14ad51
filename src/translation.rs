//! Violation message catalog keyed by locale
//!
//! Mirrors the translator utility the form components consume: a plain
//! lookup from a violation to a human-readable message. Unknown locales
//! fall back to English.

use crate::validation::{FieldViolation, Violation};

pub const DEFAULT_LOCALE: &str = "en";

/// Renders validation violations as per-locale messages
#[derive(Debug, Clone)]
pub struct Translator {
    locale: String,
}

impl Default for Translator {
    fn default() -> Self {
        Self::new(DEFAULT_LOCALE)
    }
}

impl Translator {
    pub fn new(locale: impl Into<String>) -> Self {
        Self {
            locale: locale.into(),
        }
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }

    pub fn message(&self, violation: &FieldViolation) -> String {
        match self.locale.as_str() {
            "de" => german(violation),
            _ => english(violation),
        }
    }
}

fn english(fv: &FieldViolation) -> String {
    let field = &fv.field;
    match &fv.violation {
        Violation::Required => format!("The {field} field is required."),
        Violation::MinLength { min, .. } => {
            format!("The {field} field must be at least {min} characters long.")
        }
        Violation::MaxLength { max, .. } => {
            format!("The {field} field must not be longer than {max} characters.")
        }
        Violation::Email => format!("The {field} field must be a valid email address."),
        Violation::Pattern => format!("The {field} field contains invalid characters."),
        Violation::SameAs { other } => format!("The {field} field must match the {other} field."),
    }
}

fn german(fv: &FieldViolation) -> String {
    let field = &fv.field;
    match &fv.violation {
        Violation::Required => format!("Das Feld {field} ist erforderlich."),
        Violation::MinLength { min, .. } => {
            format!("Das Feld {field} muss mindestens {min} Zeichen lang sein.")
        }
        Violation::MaxLength { max, .. } => {
            format!("Das Feld {field} darf h\u{f6}chstens {max} Zeichen lang sein.")
        }
        Violation::Email => format!("Das Feld {field} muss eine g\u{fc}ltige E-Mail-Adresse sein."),
        Violation::Pattern => format!("Das Feld {field} enth\u{e4}lt ung\u{fc}ltige Zeichen."),
        Violation::SameAs { other } => {
            format!("Das Feld {field} muss mit dem Feld {other} \u{fc}bereinstimmen.")
        }
    }
}
