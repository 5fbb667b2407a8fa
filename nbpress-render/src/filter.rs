//! Boilerplate filter for markdown cells
//!
//!     The published notebooks come from graded coursework. Only the analysis is republished,
//!     so markdown cells that look like assignment framing are dropped.
//!
//!     The policy is a table of markers, each with the reason it is there. A cell is rejected
//!     when its lowercased text contains any marker. Each cell is judged on its own; there is
//!     no state carried between cells.
//!
//!     The table is deliberately crude. Genuine prose that happens to contain a marker (the
//!     word "task" is the usual offender) is dropped too, and scaffolding phrased in a way the
//!     table does not know slips through. Extend the table rather than adding branches to
//!     the predicate.

use once_cell::sync::Lazy;
use regex::Regex;

/// How a marker is matched against the lowercased cell text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    /// Plain substring containment
    Literal(&'static str),
    /// Regular expression, for markers that vary by number
    Pattern(&'static str),
}

/// One row of the policy table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarkerRule {
    pub marker: Marker,
    pub rationale: &'static str,
}

const fn literal(text: &'static str, rationale: &'static str) -> MarkerRule {
    MarkerRule {
        marker: Marker::Literal(text),
        rationale,
    }
}

const fn pattern(regex: &'static str, rationale: &'static str) -> MarkerRule {
    MarkerRule {
        marker: Marker::Pattern(regex),
        rationale,
    }
}

/// Built-in markers. Literals are lowercase; patterns run against lowercased text.
pub const BUILTIN_MARKERS: &[MarkerRule] = &[
    literal("dsc 80", "course code in assignment headers"),
    literal("dsc80", "course code in assignment headers"),
    literal("cse 158", "course code in assignment headers"),
    literal("cse158", "course code in assignment headers"),
    literal("cogs 108", "course code in assignment headers"),
    literal("cogs108", "course code in assignment headers"),
    literal("instructions:", "assignment instructions block"),
    literal("task", "task statements handed out with the assignment"),
    pattern(r"\bquestion\s*\d+", "numbered question prompt"),
    pattern(r"\bq\d+(\.\d+)*\s*[.):]", "abbreviated question number"),
    literal("answer:", "answer placeholder left for the student"),
    literal("your answer here", "autograder answer placeholder"),
    literal("please submit", "submission request"),
    literal("submit your", "submission request"),
    literal("<div class=\"alert", "presentational callout wrapper from the course template"),
    literal("<font", "presentational font markup from the course template"),
    literal("<center>", "presentational centering markup from the course template"),
];

static COMPILED_PATTERNS: Lazy<Vec<(Regex, &'static MarkerRule)>> = Lazy::new(|| {
    BUILTIN_MARKERS
        .iter()
        .filter_map(|rule| match rule.marker {
            Marker::Pattern(source) => {
                Some((Regex::new(source).expect("valid marker pattern"), rule))
            }
            Marker::Literal(_) => None,
        })
        .collect()
});

/// Why a cell was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rejection<'a> {
    pub marker: &'a str,
    pub rationale: &'a str,
}

/// The boilerplate predicate: built-in markers plus any configured extras.
#[derive(Debug, Clone, Default)]
pub struct BoilerplateFilter {
    extra_markers: Vec<String>,
}

impl BoilerplateFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add literal markers on top of the built-in table. Blank markers are ignored.
    pub fn with_extra_markers<I, S>(mut self, markers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.extra_markers.extend(
            markers
                .into_iter()
                .map(|m| m.as_ref().trim().to_lowercase())
                .filter(|m| !m.is_empty()),
        );
        self
    }

    /// `true` when the cell should be published.
    pub fn accepts(&self, text: &str) -> bool {
        self.rejection(text).is_none()
    }

    /// The first marker that rejects `text`, if any.
    pub fn rejection(&self, text: &str) -> Option<Rejection<'_>> {
        let lowered = text.to_lowercase();

        for rule in BUILTIN_MARKERS {
            if let Marker::Literal(needle) = rule.marker {
                if lowered.contains(needle) {
                    return Some(Rejection {
                        marker: needle,
                        rationale: rule.rationale,
                    });
                }
            }
        }

        for (regex, rule) in COMPILED_PATTERNS.iter() {
            if regex.is_match(&lowered) {
                if let Marker::Pattern(source) = rule.marker {
                    return Some(Rejection {
                        marker: source,
                        rationale: rule.rationale,
                    });
                }
            }
        }

        self.extra_markers
            .iter()
            .find(|needle| lowered.contains(needle.as_str()))
            .map(|needle| Rejection {
                marker: needle,
                rationale: "configured marker",
            })
    }
}
