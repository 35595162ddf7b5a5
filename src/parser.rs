use std::mem;

use log::{debug, trace};

use crate::policy::DuplicatePolicy;
use crate::section::Section;

/// Represents an on-going parse. Lines are fed in order with [`Parser::feed`].
#[derive(Debug, Clone)]
pub struct Parser {
    policy: DuplicatePolicy,
    sections: Vec<Section>,
    current: Accumulator,
    lines: usize,
}

/// The section that `key=value` lines are currently written into.
#[derive(Debug, Clone, Default)]
enum Accumulator {
    /// No header seen yet; anything here belongs to no section.
    #[default]
    Untitled,
    Active(Section),
    /// A duplicate header was rejected; lines are dropped until the next new title.
    Suppressed,
}

impl Parser {
    #[must_use]
    pub fn new(policy: DuplicatePolicy) -> Self {
        Self {
            policy,
            sections: Vec::with_capacity(16),
            current: Accumulator::Untitled,
            lines: 0,
        }
    }

    /// Consumes every line of `lines` and returns the finished parse.
    pub fn parse<I, S>(policy: DuplicatePolicy, lines: I) -> Parsed
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut parser = Self::new(policy);
        for line in lines {
            parser.feed(line.as_ref());
        }
        parser.finish()
    }

    pub fn feed(&mut self, line: &str) {
        self.lines += 1;

        match header_title(line) {
            Some("") => trace!("line {}: ignoring header without a title", self.lines),
            Some(title) => self.open_section(title),
            None => self.add_entry(line),
        }
    }

    /// Closes the trailing section, even when it has no entries.
    #[must_use]
    pub fn finish(mut self) -> Parsed {
        if let Accumulator::Active(section) = mem::take(&mut self.current) {
            self.close(section);
        }

        Parsed {
            sections: self.sections,
            lines: self.lines,
        }
    }

    fn open_section(&mut self, title: &str) {
        if let Accumulator::Active(section) = &self.current {
            if section.title() == title {
                return;
            }
        }

        if let Accumulator::Active(section) = mem::take(&mut self.current) {
            self.close(section);
        }

        let already_finalized = self.sections.iter().any(|s| s.title() == title);
        self.current = if self.policy.admits(already_finalized) {
            Accumulator::Active(Section::new(title))
        } else {
            debug!(
                "line {}: suppressing duplicate section [{title}]",
                self.lines
            );
            Accumulator::Suppressed
        };
    }

    fn add_entry(&mut self, line: &str) {
        let Accumulator::Active(section) = &mut self.current else {
            trace!("line {}: outside of any section", self.lines);
            return;
        };

        match split_entry(line) {
            Some((key, value)) => section.set(key, value),
            None => trace!("line {}: no delimiter", self.lines),
        }
    }

    fn close(&mut self, section: Section) {
        debug!(
            "closing section [{}] with {} entries",
            section.title(),
            section.count()
        );
        self.policy.finalize(&mut self.sections, section);
    }
}

/// The outcome of feeding every line through a [`Parser`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parsed {
    pub sections: Vec<Section>,
    /// Every line read, including blank and skipped ones.
    pub lines: usize,
}

/// Returns the text between the first `[` and the last `]`, if the line is a header.
#[must_use]
pub fn header_title(line: &str) -> Option<&str> {
    let start = line.find('[')?;
    let end = line.rfind(']')?;
    if end < start {
        return None;
    }
    Some(&line[start + 1..end])
}

/// Splits on the first `=`. Neither side is trimmed.
#[must_use]
pub fn split_entry(line: &str) -> Option<(&str, &str)> {
    line.split_once('=')
}
