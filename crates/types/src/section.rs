//! Positional field definitions for the section prompt.
//!
//! A [`Section`] describes one whitespace-delimited field of the input line:
//! its label, whether it is free text or a closed menu of options, how it is
//! validated and which values are offered as ghost text.

use std::fmt;
use std::sync::Arc;

/// Predicate deciding whether a typed value is acceptable for a field.
pub type Validator = Arc<dyn Fn(&str) -> bool + Send + Sync>;

/// How the options of a menu field are laid out in the detail panel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MenuLayout {
    /// All options on one line.
    #[default]
    Horizontal,
    /// One option per line.
    Vertical,
}

/// The kind of a field. Menu fields own their option list, so a text field
/// cannot be cycled by accident.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SectionKind {
    /// Free text, validated only by the section validator.
    Text,
    /// Closed set of case-sensitive values. Order is both the display order
    /// and the Tab cycle order.
    Menu { options: Vec<String>, layout: MenuLayout },
}

impl SectionKind {
    /// Options of a menu field; empty for text fields.
    pub fn options(&self) -> &[String] {
        match self {
            SectionKind::Text => &[],
            SectionKind::Menu { options, .. } => options,
        }
    }

    pub fn is_menu(&self) -> bool {
        matches!(self, SectionKind::Menu { .. })
    }
}

/// One positional field of a schema.
#[derive(Clone)]
pub struct Section {
    /// Display label, e.g. `nodes`.
    pub name: String,
    pub kind: SectionKind,
    /// `None` means every value is valid.
    pub validator: Option<Validator>,
    /// Ghost-text candidates; the first entry is the default shown while the
    /// field is empty.
    pub suggestions: Vec<String>,
    /// Short description rendered above the options in the detail panel.
    pub help: Option<String>,
}

impl fmt::Debug for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Section")
            .field("name", &self.name)
            .field("kind", &self.kind)
            .field("validator", &self.validator.as_ref().map(|_| "<fn>"))
            .field("suggestions", &self.suggestions)
            .field("help", &self.help)
            .finish()
    }
}

impl Section {
    /// A free-text field with no validator and no suggestions.
    pub fn text(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: SectionKind::Text,
            validator: None,
            suggestions: Vec::new(),
            help: None,
        }
    }

    /// A horizontal menu field. The options double as the suggestion list so
    /// that typing a prefix ghosts the rest of the first matching option.
    pub fn menu<I, S>(name: impl Into<String>, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let options: Vec<String> = options.into_iter().map(Into::into).collect();
        Self {
            name: name.into(),
            suggestions: options.clone(),
            kind: SectionKind::Menu {
                options,
                layout: MenuLayout::Horizontal,
            },
            validator: None,
            help: None,
        }
    }

    /// Set the menu layout. Text fields ignore this.
    pub fn with_layout(mut self, layout: MenuLayout) -> Self {
        if let SectionKind::Menu { layout: current, .. } = &mut self.kind {
            *current = layout;
        }
        self
    }

    pub fn with_validator<F>(mut self, validator: F) -> Self
    where
        F: Fn(&str) -> bool + Send + Sync + 'static,
    {
        self.validator = Some(Arc::new(validator));
        self
    }

    /// Replace the suggestion list.
    pub fn with_suggestions<I, S>(mut self, suggestions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.suggestions = suggestions.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }

    pub fn options(&self) -> &[String] {
        self.kind.options()
    }

    pub fn is_menu(&self) -> bool {
        self.kind.is_menu()
    }

    pub fn layout(&self) -> Option<MenuLayout> {
        match self.kind {
            SectionKind::Text => None,
            SectionKind::Menu { layout, .. } => Some(layout),
        }
    }

    /// The default suggestion (`suggestions[0]`), if any.
    pub fn default_suggestion(&self) -> Option<&str> {
        self.suggestions.first().map(String::as_str)
    }

    /// Run the validator; a section without one accepts everything.
    pub fn validate(&self, value: &str) -> bool {
        self.validator.as_ref().is_none_or(|validator| validator(value))
    }

    pub fn is_option(&self, value: &str) -> bool {
        self.options().iter().any(|option| option == value)
    }

    /// Option `step` positions away from `current` in cycle order, wrapping
    /// at both ends. Returns `None` for text fields and for values that are
    /// not options.
    pub fn cycle_option(&self, current: &str, step: isize) -> Option<&str> {
        let options = self.options();
        let position = options.iter().position(|option| option == current)?;
        let len = options.len() as isize;
        let next = (position as isize + step).rem_euclid(len) as usize;
        options.get(next).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn menu_builder_mirrors_options_into_suggestions() {
        let section = Section::menu("user", ["alice", "bob"]).with_layout(MenuLayout::Vertical);
        assert_eq!(section.options(), ["alice", "bob"]);
        assert_eq!(section.suggestions, ["alice", "bob"]);
        assert_eq!(section.layout(), Some(MenuLayout::Vertical));
        assert_eq!(section.default_suggestion(), Some("alice"));
    }

    #[test]
    fn layout_is_ignored_for_text_fields() {
        let section = Section::text("cores").with_layout(MenuLayout::Vertical);
        assert_eq!(section.kind, SectionKind::Text);
        assert_eq!(section.layout(), None);
        assert!(section.options().is_empty());
    }

    #[test]
    fn cycle_wraps_both_directions() {
        let section = Section::menu("nodes", ["1", "2", "3"]);
        assert_eq!(section.cycle_option("3", 1), Some("1"));
        assert_eq!(section.cycle_option("1", -1), Some("3"));
        assert_eq!(section.cycle_option("2", 1), Some("3"));
    }

    #[test]
    fn cycle_is_a_no_op_for_unknown_values_and_text_fields() {
        let section = Section::menu("nodes", ["1", "2"]);
        assert_eq!(section.cycle_option("7", 1), None);
        assert_eq!(Section::text("cores").cycle_option("", 1), None);
    }

    #[test]
    fn missing_validator_accepts_everything() {
        let section = Section::text("name");
        assert!(section.validate(""));
        let digits = Section::text("cores").with_validator(|v| !v.is_empty() && v.chars().all(|c| c.is_ascii_digit()));
        assert!(digits.validate("32"));
        assert!(!digits.validate("3x"));
    }

    #[test]
    fn debug_output_hides_validator_closure() {
        let section = Section::text("cores").with_validator(|_| true);
        let rendered = format!("{section:?}");
        assert!(rendered.contains("<fn>"), "{rendered}");
    }
}
