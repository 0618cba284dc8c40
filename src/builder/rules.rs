//! publicsuffix.org rule-list parsing.

use std::fmt;
use std::io::{BufRead, BufReader, Read};
use std::str::FromStr;

use ahash::AHashSet;

use crate::label::{EXCEPTION, WILDCARD};
use crate::{Error, Result};

/// One effective-TLD rule such as `co.uk`, `*.kobe.jp` or `!city.kobe.jp`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Rule {
    /// Labels in written order, leftmost first.
    labels: Vec<String>,
}

impl Rule {
    /// Parse a single rule. The rule is lower-cased; the error is a short
    /// reason suitable for [`Error::InvalidRule`].
    pub fn parse(text: &str) -> std::result::Result<Self, &'static str> {
        if text.is_empty() {
            return Err("empty rule");
        }
        if !text.is_ascii() {
            return Err("rule is not ASCII; use its punycode form");
        }

        let labels: Vec<String> = text
            .to_ascii_lowercase()
            .split('.')
            .map(str::to_owned)
            .collect();

        for (idx, label) in labels.iter().enumerate() {
            let bytes = label.as_bytes();
            if bytes.is_empty() {
                return Err("empty label");
            }
            if bytes.contains(&0) {
                return Err("NUL byte in label");
            }
            if bytes.contains(&WILDCARD) && bytes != [WILDCARD] {
                return Err("wildcard must be a whole label");
            }
            if let Some(pos) = bytes.iter().position(|&b| b == EXCEPTION) {
                if pos != 0 || idx != 0 {
                    return Err("exception marker must start the leftmost label");
                }
                if bytes.len() == 1 {
                    return Err("empty exception label");
                }
                if labels.len() < 2 {
                    return Err("exception rule without a parent rule");
                }
            }
        }

        Ok(Self { labels })
    }

    /// Labels in written order, leftmost first.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Whether this is a `!label.parent` exception rule.
    pub fn is_exception(&self) -> bool {
        self.labels[0].as_bytes()[0] == EXCEPTION
    }

    /// Whether this is a `*.parent` wildcard rule.
    pub fn is_wildcard(&self) -> bool {
        self.labels[0].as_bytes() == [WILDCARD]
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.labels.join("."))
    }
}

impl FromStr for Rule {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Rule::parse(s).map_err(|reason| Error::InvalidRule {
            line: 1,
            rule: s.to_string(),
            reason,
        })
    }
}

/// An ordered, duplicate-free list of rules.
#[derive(Debug, Clone, Default)]
pub struct RuleList {
    rules: Vec<Rule>,
    seen: AHashSet<Rule>,
}

impl RuleList {
    /// Create an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a rule list in publicsuffix.org `.dat` syntax.
    ///
    /// `//` comment lines and blank lines are skipped, and only the first
    /// whitespace-delimited token of a line is read. Duplicate rules are
    /// dropped with a warning.
    pub fn parse(text: &str) -> Result<Self> {
        let mut list = Self::new();
        for (idx, line) in text.lines().enumerate() {
            list.parse_line(idx + 1, line)?;
        }
        log::debug!("Parsed {} rules", list.len());
        Ok(list)
    }

    /// Parse a rule list from a reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut list = Self::new();
        for (idx, line) in BufReader::new(reader).lines().enumerate() {
            list.parse_line(idx + 1, &line?)?;
        }
        log::debug!("Parsed {} rules", list.len());
        Ok(list)
    }

    fn parse_line(&mut self, line_no: usize, line: &str) -> Result<()> {
        let line = line.trim();
        if line.is_empty() || line.starts_with("//") {
            return Ok(());
        }
        let Some(token) = line.split_whitespace().next() else {
            return Ok(());
        };

        let rule = Rule::parse(token).map_err(|reason| Error::InvalidRule {
            line: line_no,
            rule: token.to_string(),
            reason,
        })?;

        if !self.push(rule) {
            log::warn!("Skipping duplicate rule {:?} on line {}", token, line_no);
        }
        Ok(())
    }

    /// Append a rule, returning `false` if it was already present.
    pub fn push(&mut self, rule: Rule) -> bool {
        if self.seen.contains(&rule) {
            return false;
        }
        self.seen.insert(rule.clone());
        self.rules.push(rule);
        true
    }

    /// Whether the list holds `rule`.
    pub fn contains(&self, rule: &Rule) -> bool {
        self.seen.contains(rule)
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Rule> {
        self.rules.iter()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Add the parent rules a deep rule needs to keep shorter matches.
    ///
    /// A lookup only keeps a match that ends at the last node it walks
    /// through. With `a.b.c` next to `*.c` or `c`, `x.b.c` walks into the
    /// non-terminal `b` node, misses `a` and ends with no match. Adding
    /// `b.c` makes that node terminal. Only rules of three or more labels
    /// whose leftmost label is a plain label are considered, and only
    /// against the rules already in the list. Returns the number of rules
    /// added.
    pub fn synthesize_wildcard_parents(&mut self) -> usize {
        let mut added: Vec<Rule> = Vec::new();

        for rule in &self.rules {
            let labels = &rule.labels;
            if labels.len() < 3 || rule.is_exception() || rule.is_wildcard() {
                continue;
            }

            let candidate = Rule {
                labels: labels[1..].to_vec(),
            };
            if self.seen.contains(&candidate) || added.contains(&candidate) {
                continue;
            }

            let parent = Rule {
                labels: labels[2..].to_vec(),
            };
            let mut wildcard = vec!["*".to_string()];
            wildcard.extend_from_slice(&parent.labels);
            if self.seen.contains(&parent) || self.seen.contains(&Rule { labels: wildcard }) {
                log::debug!("Synthesizing rule {} for {}", candidate, rule);
                added.push(candidate);
            }
        }

        let count = added.len();
        for rule in added {
            self.push(rule);
        }
        count
    }
}

impl FromStr for RuleList {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl<'a> IntoIterator for &'a RuleList {
    type Item = &'a Rule;
    type IntoIter = std::slice::Iter<'a, Rule>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.iter()
    }
}
