//! Controlled vocabulary for classification fields
//!
//! Loaded once per run from `vocabulary.yaml` and immutable thereafter.
//! Each section lists the permitted values for one classification field.
//! Items are either a plain string:
//!
//! ```yaml
//! types:
//!   - Tool
//! ```
//!
//! or a mapping carrying display metadata:
//!
//! ```yaml
//! domains:
//!   - name: Security
//!     title: "🔒 Security"
//! ```

use serde::{Deserialize, Serialize};

/// One permitted value, optionally with display metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Term {
    pub name: String,
    pub title: Option<String>,
    pub emoji: Option<String>,
}

impl Term {
    pub fn plain(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            title: None,
            emoji: None,
        }
    }

    /// Heading text: the display title when present, the bare name
    /// otherwise.
    pub fn display_title(&self) -> &str {
        self.title.as_deref().unwrap_or(&self.name)
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum TermDe {
    Plain(String),
    Structured {
        name: String,
        #[serde(default)]
        title: Option<String>,
        #[serde(default)]
        emoji: Option<String>,
    },
}

impl<'de> Deserialize<'de> for Term {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        match TermDe::deserialize(deserializer)? {
            TermDe::Plain(name) => Ok(Self::plain(name)),
            TermDe::Structured { name, title, emoji } => Ok(Self { name, title, emoji }),
        }
    }
}

/// The controlled vocabulary: permitted values for every classification
/// field, in rendering order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Vocabulary {
    #[serde(default)]
    pub domains: Vec<Term>,

    #[serde(default)]
    pub types: Vec<Term>,

    #[serde(default)]
    pub maturity: Vec<Term>,

    #[serde(default)]
    pub effort: Vec<Term>,

    #[serde(default)]
    pub tags: Vec<Term>,

    #[serde(default)]
    pub good_for: Vec<Term>,
}

impl Vocabulary {
    fn section(&self, field: VocabField) -> &[Term] {
        match field {
            VocabField::Domains => &self.domains,
            VocabField::Types => &self.types,
            VocabField::Maturity => &self.maturity,
            VocabField::Effort => &self.effort,
            VocabField::Tags => &self.tags,
            VocabField::GoodFor => &self.good_for,
        }
    }

    /// Whether `value` is a permitted value for `field`.
    pub fn contains(&self, field: VocabField, value: &str) -> bool {
        self.section(field).iter().any(|t| t.name == value)
    }

    /// Permitted names for `field`, in file order.
    pub fn names(&self, field: VocabField) -> Vec<&str> {
        self.section(field).iter().map(|t| t.name.as_str()).collect()
    }

    /// Look up a domain term by name.
    pub fn domain(&self, name: &str) -> Option<&Term> {
        self.domains.iter().find(|t| t.name == name)
    }

    /// Emoji for a maturity level, empty when none is declared.
    pub fn maturity_emoji(&self, name: &str) -> &str {
        self.maturity
            .iter()
            .find(|t| t.name == name)
            .and_then(|t| t.emoji.as_deref())
            .unwrap_or("")
    }
}

/// Classification field backed by a vocabulary section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VocabField {
    Domains,
    Types,
    Maturity,
    Effort,
    Tags,
    GoodFor,
}
