//! Form Fields
//!
//! The five inputs of the lead capture form and their values.

use serde::{Deserialize, Serialize};

/// A lead form input
///
/// Ordering follows declaration order, which is also the display order and
/// the order fields are written to the query string.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    FirstName,
    LastName,
    Email,
    Zip,
    CompanyName,
}

impl Field {
    /// All fields in display order
    pub const ALL: [Self; 5] = [
        Self::FirstName,
        Self::LastName,
        Self::Email,
        Self::Zip,
        Self::CompanyName,
    ];

    /// Name used for the input element and the query string key
    pub const fn name(self) -> &'static str {
        match self {
            Self::FirstName => "first_name",
            Self::LastName => "last_name",
            Self::Email => "email",
            Self::Zip => "zip",
            Self::CompanyName => "company_name",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::FirstName => "First Name",
            Self::LastName => "Last Name",
            Self::Email => "Email Address",
            Self::Zip => "ZIP Code",
            Self::CompanyName => "Company Name",
        }
    }

    pub const fn placeholder(self) -> &'static str {
        match self {
            Self::FirstName => "John",
            Self::LastName => "Doe",
            Self::Email => "john@company.com",
            Self::Zip => "12345",
            Self::CompanyName => "Acme Inc.",
        }
    }

    /// HTML input type
    pub const fn input_type(self) -> &'static str {
        match self {
            Self::Email => "email",
            _ => "text",
        }
    }

    pub const fn is_required(self) -> bool {
        !matches!(self, Self::CompanyName)
    }

    /// Look up a field by its input/query name
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.name() == name)
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Current values of every form input
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeadFields {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub zip: String,
    #[serde(default)]
    pub company_name: String,
}

impl LeadFields {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::FirstName => &self.first_name,
            Field::LastName => &self.last_name,
            Field::Email => &self.email,
            Field::Zip => &self.zip,
            Field::CompanyName => &self.company_name,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::FirstName => &mut self.first_name,
            Field::LastName => &mut self.last_name,
            Field::Email => &mut self.email,
            Field::Zip => &mut self.zip,
            Field::CompanyName => &mut self.company_name,
        };
        *slot = value.into();
    }

    /// Builder-style setter, handy for tests and fixtures
    #[must_use]
    pub fn with(mut self, field: Field, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    /// `(name, value)` pairs in field order
    pub fn pairs(&self) -> impl Iterator<Item = (&str, &str)> {
        Field::ALL.into_iter().map(|f| (f.name(), self.get(f)))
    }

    pub fn is_blank(&self) -> bool {
        Field::ALL.into_iter().all(|f| crate::validate::is_blank(self.get(f)))
    }
}
