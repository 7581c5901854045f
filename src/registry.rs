//! Fabrication-indicator pattern registry
//!
//! The authoritative set of regexes the engine scans for. The registry is
//! process-wide, immutable and compiled exactly once; a malformed built-in
//! pattern is a fatal configuration error at first use, never a
//! per-request error.
//!
//! Weights are signed: most entries penalize, but a well-formed recent-year
//! "et al. (YYYY)" citation rewards authenticity with a negative
//! contribution. Negative-weight entries never surface as detected issues;
//! they only lower the score.

use once_cell::sync::Lazy;
use regex::{Regex, RegexBuilder};

use crate::models::{Category, DetectedIssue, Severity};

/// Maximum literal match examples kept per issue
const MAX_EXAMPLES: usize = 3;

/// One registry entry: a compiled pattern with its scoring metadata
#[derive(Debug)]
pub struct PatternEntry {
    /// Stable snake_case identity
    pub id: &'static str,
    /// Human kind tag used on detected issues
    pub label: &'static str,
    /// What a match indicates
    pub description: &'static str,
    /// Reporting severity
    pub severity: Severity,
    /// Signed score contribution per match
    pub weight: i32,
    /// Recommendation-grouping category
    pub category: Category,
    regex: Regex,
}

impl PatternEntry {
    fn new(
        id: &'static str,
        label: &'static str,
        description: &'static str,
        severity: Severity,
        weight: i32,
        category: Category,
        pattern: &str,
    ) -> Self {
        let regex = RegexBuilder::new(pattern)
            .case_insensitive(true)
            .build()
            .unwrap_or_else(|e| panic!("invalid built-in pattern '{id}': {e}"));
        Self {
            id,
            label,
            description,
            severity,
            weight,
            category,
            regex,
        }
    }

    /// Whether this pattern matches anywhere in `text`
    #[must_use]
    pub fn is_match(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }

    /// All matched substrings, in match order
    #[must_use]
    pub fn matches(&self, text: &str) -> Vec<String> {
        self.regex.find_iter(text).map(|m| m.as_str().to_string()).collect()
    }
}

/// Matches found for a single registry entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternMatch {
    /// Registry entry id
    pub id: &'static str,
    /// Literal matched substrings, in match order
    pub matched: Vec<String>,
}

/// The immutable pattern registry
#[derive(Debug)]
pub struct Registry {
    entries: Vec<PatternEntry>,
}

impl Registry {
    fn new() -> Self {
        use Category as C;
        use Severity as S;

        let entries = vec![
            PatternEntry::new(
                "overly_precise_percentage",
                "Overly Precise Percentages",
                "Percentages reported with implausibly many decimal places",
                S::High,
                S::High.weight(),
                C::DataFabrication,
                r"\d+\.\d{4,}%",
            ),
            PatternEntry::new(
                "unrealistic_precision",
                "Unrealistic Numerical Precision",
                "Suspiciously precise or unrealistic numerical data",
                S::High,
                S::High.weight(),
                C::DataFabrication,
                r"\d{4,}\.\d+|\d+\.\d{8,}",
            ),
            PatternEntry::new(
                "perfect_results",
                "Perfect Results Claims",
                "Claims of impossible or highly unlikely perfect outcomes",
                S::High,
                S::High.weight(),
                C::ResultFabrication,
                r"100%\s+(?:accuracy|success(?:\s+rate)?|effectiveness|correlation)|perfect\s+correlation|zero\s+failures|flawless\s+results",
            ),
            PatternEntry::new(
                "zero_error_claims",
                "Zero Error Claims",
                "Claims of a complete absence of errors or failures",
                S::High,
                S::High.weight(),
                C::ResultFabrication,
                r"0%\s+(?:error|failure|false)",
            ),
            PatternEntry::new(
                "impossible_effect_size",
                "Impossible Effect Sizes",
                "Effect sizes far beyond what real studies produce",
                S::High,
                S::High.weight(),
                C::StatisticalIssues,
                r"cohen'?s\s+d\s*[>=]\s*[3-9]\.\d+",
            ),
            PatternEntry::new(
                "perfect_correlation",
                "Perfect Correlations",
                "Correlation coefficients implausibly close to 1",
                S::High,
                S::High.weight(),
                C::StatisticalIssues,
                r"r\s*=\s*0\.9[5-9]",
            ),
            PatternEntry::new(
                "suspicious_statistics",
                "Suspicious Statistics",
                "Statistical reporting patterns typical of fabricated results",
                S::High,
                S::High.weight(),
                C::StatisticalIssues,
                r"p\s*[<=]\s*0\.0{3,}1?|\ball\s+results\s+(?:were\s+)?significant|\bevery\s+\w+\s+(?:was\s+)?significant",
            ),
            PatternEntry::new(
                "unrealistic_sample_size",
                "Unrealistic Sample Sizes",
                "Round sample sizes far beyond typical study scales",
                S::Medium,
                S::Medium.weight(),
                C::DataFabrication,
                r"\b(?:50000|100000|500000|1000000)\s+(?:participants|subjects|samples)\b",
            ),
            PatternEntry::new(
                "unverifiable_citation",
                "Unverifiable Citations",
                "References to sources that cannot be checked",
                S::Medium,
                S::Medium.weight(),
                C::CitationIssues,
                r"personal\s+communication|unpublished\s+data|internal\s+report|confidential\s+study|private\s+correspondence",
            ),
            PatternEntry::new(
                "unrealistic_timeline",
                "Unrealistic Timeline",
                "Timeframes too short for the described research activities",
                S::Medium,
                S::Medium.weight(),
                C::TimelineIssues,
                r"conducted.*?same\s+day|completed.*?24\s+hours|instant\s+results|immediate\s+analysis|overnight\s+study",
            ),
            PatternEntry::new(
                "exaggerated_language",
                "Exaggerated Language",
                "Overblown novelty claims",
                S::Medium,
                S::Medium.weight(),
                C::ExaggeratedLanguage,
                r"unprecedented|groundbreaking|revolutionary|paradigm[- ]shifting",
            ),
            PatternEntry::new(
                "hyperbolic_results",
                "Hyperbolic Results",
                "Findings described in hyperbolic terms",
                S::Medium,
                S::Medium.weight(),
                C::HyperbolicResults,
                r"(?:extraordinary|remarkable|exceptional|outstanding)\s+results",
            ),
            PatternEntry::new(
                "vague_methodology",
                "Vague Methodology",
                "Methodology praised without being described",
                S::Low,
                S::Low.weight(),
                C::VagueMethodology,
                r"(?:advanced|sophisticated|novel)\s+(?:methodology|approach|technique)",
            ),
            PatternEntry::new(
                "generic_analysis_claims",
                "Generic Analysis Claims",
                "Boilerplate claims about the depth of analysis",
                S::Low,
                S::Low.weight(),
                C::GenericAnalysisClaims,
                r"(?:comprehensive|extensive|thorough)\s+analysis",
            ),
            // Legitimate pattern: recent well-formed citations argue for
            // authenticity, so this entry subtracts from the score.
            PatternEntry::new(
                "recent_citation",
                "Recent Citation Pattern",
                "Well-formed recent-year citation",
                S::Low,
                -5,
                C::CitationIssues,
                r"et\s+al\.\s*\(202[0-9]\)",
            ),
        ];

        Self { entries }
    }

    /// All registry entries, in declaration order
    #[must_use]
    pub fn entries(&self) -> &[PatternEntry] {
        &self.entries
    }

    /// Number of entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the registry is empty (it never is)
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up an entry by id
    #[must_use]
    pub fn entry(&self, id: &str) -> Option<&PatternEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// Scan `text` against every entry
    ///
    /// Deterministic: identical text yields identical matches in registry
    /// declaration order. The input is never mutated. Entries with no
    /// matches are omitted.
    #[must_use]
    pub fn find_matches(&self, text: &str) -> Vec<PatternMatch> {
        self.entries
            .iter()
            .filter_map(|entry| {
                let matched = entry.matches(text);
                if matched.is_empty() {
                    None
                } else {
                    Some(PatternMatch {
                        id: entry.id,
                        matched,
                    })
                }
            })
            .collect()
    }

    /// Fold matches into detected issues
    ///
    /// Negative-weight entries are excluded: they reward authenticity and
    /// have no place in an issue list.
    #[must_use]
    pub fn issues_from_matches(&self, matches: &[PatternMatch]) -> Vec<DetectedIssue> {
        matches
            .iter()
            .filter_map(|m| {
                let entry = self.entry(m.id)?;
                if entry.weight < 0 {
                    return None;
                }
                Some(DetectedIssue {
                    kind: entry.label.to_string(),
                    description: entry.description.to_string(),
                    severity: entry.severity,
                    category: entry.category,
                    count: m.matched.len(),
                    examples: m.matched.iter().take(MAX_EXAMPLES).cloned().collect(),
                })
            })
            .collect()
    }

    /// Signed score contribution of a set of matches
    #[must_use]
    pub fn score_from_matches(&self, matches: &[PatternMatch]) -> i32 {
        matches
            .iter()
            .filter_map(|m| {
                self.entry(m.id).map(|entry| entry.weight * m.matched.len() as i32)
            })
            .sum()
    }

    /// Convenience: detected issues for `text`
    #[must_use]
    pub fn issues(&self, text: &str) -> Vec<DetectedIssue> {
        self.issues_from_matches(&self.find_matches(text))
    }

    /// Convenience: signed pattern score for `text`
    #[must_use]
    pub fn score(&self, text: &str) -> i32 {
        self.score_from_matches(&self.find_matches(text))
    }
}

static REGISTRY: Lazy<Registry> = Lazy::new(Registry::new);

/// The process-wide pattern registry
#[must_use]
pub fn registry() -> &'static Registry {
    &REGISTRY
}
