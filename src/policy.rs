use std::fmt;
use std::str::FromStr;

use crate::section::Section;

/// Decides what happens when a section title shows up a second time.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum DuplicatePolicy {
    /// Keep the first occurrence and drop every later block with the same title.
    #[default]
    Suppress,
    /// Fold later blocks into the first occurrence; later values win.
    Merge,
    /// Replace the entries of the first occurrence with the later block.
    Overwrite,
}

impl DuplicatePolicy {
    /// Whether a header naming an already finalized section opens a new block.
    #[must_use]
    pub fn admits(self, already_finalized: bool) -> bool {
        !already_finalized || self != Self::Suppress
    }

    /// Moves a completed section into `sections`, keeping titles unique.
    pub(crate) fn finalize(self, sections: &mut Vec<Section>, section: Section) {
        let Some(existing) = sections.iter_mut().find(|s| s.title() == section.title()) else {
            sections.push(section);
            return;
        };

        match self {
            // Unreachable through the parser since suppressed blocks never finalize.
            Self::Suppress => {}
            Self::Merge => existing.extend(section),
            Self::Overwrite => existing.replace_entries(section),
        }
    }
}

impl FromStr for DuplicatePolicy {
    type Err = UnknownPolicy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "suppress" => Ok(Self::Suppress),
            "merge" => Ok(Self::Merge),
            "overwrite" => Ok(Self::Overwrite),
            other => Err(UnknownPolicy(other.to_owned())),
        }
    }
}

impl fmt::Display for DuplicatePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Suppress => "suppress".fmt(f),
            Self::Merge => "merge".fmt(f),
            Self::Overwrite => "overwrite".fmt(f),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown duplicate policy: {0:?}")]
pub struct UnknownPolicy(String);

#[cfg(test)]
mod tests {
    use super::*;

    fn section(title: &str, entries: &[(&str, &str)]) -> Section {
        let mut section = Section::new(title);
        for (key, value) in entries {
            section.set(*key, *value);
        }
        section
    }

    #[test]
    fn only_suppress_rejects_duplicates() {
        assert!(DuplicatePolicy::Suppress.admits(false));
        assert!(!DuplicatePolicy::Suppress.admits(true));
        assert!(DuplicatePolicy::Merge.admits(true));
        assert!(DuplicatePolicy::Overwrite.admits(true));
    }

    #[test]
    fn merge_keeps_position_and_unions_entries() {
        let mut sections = vec![section("a", &[("k", "1"), ("x", "1")]), section("b", &[])];

        DuplicatePolicy::Merge.finalize(&mut sections, section("a", &[("k", "3")]));

        assert_eq!(sections.len(), 2);
        assert_eq!(sections[0].title(), "a");
        assert_eq!(sections[0].get("k"), Some("3"));
        assert_eq!(sections[0].get("x"), Some("1"));
    }

    #[test]
    fn overwrite_replaces_entries() {
        let mut sections = vec![section("a", &[("k", "1"), ("x", "1")])];

        DuplicatePolicy::Overwrite.finalize(&mut sections, section("a", &[("k", "3")]));

        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].count(), 1);
        assert_eq!(sections[0].get("k"), Some("3"));
    }

    #[test]
    fn parse_from_name() {
        assert_eq!("merge".parse::<DuplicatePolicy>(), Ok(DuplicatePolicy::Merge));
        assert_eq!(DuplicatePolicy::Overwrite.to_string(), "overwrite");
        assert!("replace".parse::<DuplicatePolicy>().is_err());
    }
}
