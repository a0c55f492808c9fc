//! Ordered, validated collection of sections.

use std::collections::HashSet;

use thiserror::Error;

use crate::section::Section;

/// Contract violations detected while building a [`Schema`].
///
/// These are reported before any prompt is mounted; the interactive widget
/// never sees a malformed schema.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SchemaError {
    #[error("schema must contain at least one section")]
    Empty,
    #[error("section #{index} has a blank name")]
    BlankName { index: usize },
    #[error("section `{name}` appears more than once")]
    DuplicateName { name: String },
    #[error("menu section `{name}` has no options")]
    EmptyMenu { name: String },
    #[error("validator of menu section `{name}` rejects its own option `{option}`")]
    InconsistentValidator { name: String, option: String },
}

/// The fixed shape of one prompt: sections in positional order.
#[derive(Debug, Clone)]
pub struct Schema {
    sections: Vec<Section>,
}

/// One field of a submitted line after positional binding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoundField {
    pub name: String,
    /// The typed token, or the section default when the token is missing.
    pub value: Option<String>,
    /// Whether `value` came from the line rather than the default.
    pub provided: bool,
    /// Validator verdict on `value`; `false` when there is no value at all.
    pub valid: bool,
}

impl Schema {
    pub fn new(sections: Vec<Section>) -> Result<Self, SchemaError> {
        if sections.is_empty() {
            return Err(SchemaError::Empty);
        }
        let mut seen = HashSet::new();
        for (index, section) in sections.iter().enumerate() {
            if section.name.trim().is_empty() {
                return Err(SchemaError::BlankName { index });
            }
            if !seen.insert(section.name.as_str()) {
                return Err(SchemaError::DuplicateName {
                    name: section.name.clone(),
                });
            }
            if section.is_menu() {
                if section.options().is_empty() {
                    return Err(SchemaError::EmptyMenu {
                        name: section.name.clone(),
                    });
                }
                if let Some(option) = section.options().iter().find(|option| !section.validate(option)) {
                    return Err(SchemaError::InconsistentValidator {
                        name: section.name.clone(),
                        option: option.clone(),
                    });
                }
            }
        }
        Ok(Self { sections })
    }

    pub fn get(&self, index: usize) -> Option<&Section> {
        self.sections.get(index)
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    /// Always `false` for a constructed schema.
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Section> {
        self.sections.iter()
    }

    /// Pair the whitespace-separated tokens of `line` with the sections in
    /// order. Missing tokens fall back to each section's default suggestion.
    pub fn bind(&self, line: &str) -> Vec<BoundField> {
        let mut tokens = line.split_whitespace();
        self.sections
            .iter()
            .map(|section| {
                let typed = tokens.next();
                let value = typed
                    .map(str::to_string)
                    .or_else(|| section.default_suggestion().map(str::to_string));
                let valid = value.as_deref().is_some_and(|value| section.validate(value));
                BoundField {
                    name: section.name.clone(),
                    value,
                    provided: typed.is_some(),
                    valid,
                }
            })
            .collect()
    }

    /// Tokens typed beyond the last section.
    pub fn surplus<'a>(&self, line: &'a str) -> Vec<&'a str> {
        line.split_whitespace().skip(self.sections.len()).collect()
    }
}

impl<'a> IntoIterator for &'a Schema {
    type Item = &'a Section;
    type IntoIter = std::slice::Iter<'a, Section>;

    fn into_iter(self) -> Self::IntoIter {
        self.sections.iter()
    }
}
