use std::io::BufRead;
use std::path::{Path, PathBuf};

use log::info;

use crate::error::Error;
use crate::parser::{Parsed, Parser};
use crate::policy::DuplicatePolicy;
use crate::section::Section;
use crate::source;

/// Where [`Document::with_name`] looks for its file.
pub const DEFAULT_LOCATION: &str = "db/";

/// An INI file identified by a name and a directory, plus the sections read from it.
#[derive(Debug, Clone)]
pub struct Document {
    name: String,
    location: PathBuf,
    policy: DuplicatePolicy,
    sections: Vec<Section>,
}

impl Document {
    #[must_use]
    pub fn new(name: impl Into<String>, location: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            location: location.into(),
            policy: DuplicatePolicy::default(),
            sections: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_name(name: impl Into<String>) -> Self {
        Self::new(name, DEFAULT_LOCATION)
    }

    /// Chooses how repeated section headers are handled by later parses.
    #[must_use]
    pub fn with_policy(mut self, policy: DuplicatePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Parses in-memory text without touching the filesystem.
    #[must_use]
    pub fn parse_str(text: &str) -> Self {
        let mut document = Self::with_name("");
        document.apply(Parser::parse(document.policy, text.lines()));
        document
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn location(&self) -> &Path {
        &self.location
    }

    #[must_use]
    pub fn policy(&self) -> DuplicatePolicy {
        self.policy
    }

    /// The file [`Document::open`] reads: `<location>/<name>.ini`.
    #[must_use]
    pub fn path(&self) -> PathBuf {
        source::resolve(&self.name, &self.location)
    }

    /// Reads and parses the backing file, returning how many lines were read.
    ///
    /// Sections from a previous parse are replaced only when this succeeds.
    pub fn open(&mut self) -> Result<usize, Error> {
        let path = self.path();
        let lines = source::open(&path)?;
        let count = self.read(Some(&path), lines)?;

        info!(
            "read {count} lines and {} sections from {}",
            self.sections.len(),
            path.display()
        );
        Ok(count)
    }

    /// Like [`Document::open`], but reads from any buffered reader.
    pub fn load<R: BufRead>(&mut self, reader: R) -> Result<usize, Error> {
        self.read(None, reader.lines())
    }

    fn read<I>(&mut self, path: Option<&Path>, lines: I) -> Result<usize, Error>
    where
        I: Iterator<Item = std::io::Result<String>>,
    {
        let mut parser = Parser::new(self.policy);

        for (i, line) in lines.enumerate() {
            let line = line.map_err(|source| Error::ReadFailure {
                path: path.map(Path::to_owned),
                line: i + 1,
                source,
            })?;
            parser.feed(&line);
        }

        Ok(self.apply(parser.finish()))
    }

    fn apply(&mut self, parsed: Parsed) -> usize {
        self.sections = parsed.sections;
        parsed.lines
    }

    #[must_use]
    pub fn section_count(&self) -> usize {
        self.sections.len()
    }

    /// Section titles in the order they first appeared.
    #[must_use]
    pub fn section_titles(&self) -> Vec<&str> {
        self.sections.iter().map(Section::title).collect()
    }

    #[must_use]
    pub fn section(&self, title: &str) -> Option<&Section> {
        self.sections.iter().find(|section| section.title() == title)
    }

    #[must_use]
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }
}
