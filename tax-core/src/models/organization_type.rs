use std::fmt;

use serde::{Deserialize, Serialize};

/// The kind of employer a taxpayer works for.
///
/// Only [`OrganizationType::Government`] changes the deduction rules; private
/// and corporate employees share the default provident fund rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum OrganizationType {
    Government,
    #[default]
    Private,
    Corporate,
}

impl OrganizationType {
    pub fn all() -> &'static [OrganizationType] {
        &[Self::Government, Self::Private, Self::Corporate]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Government => "Government",
            Self::Private => "Private",
            Self::Corporate => "Corporate",
        }
    }

    /// Parses an organization name, ignoring case and surrounding whitespace.
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        Self::all()
            .iter()
            .copied()
            .find(|org| org.as_str().eq_ignore_ascii_case(s))
    }
}

impl fmt::Display for OrganizationType {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
