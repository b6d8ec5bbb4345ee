pub mod data;
pub mod entities;

pub use entities::*;

use std::collections::HashMap;
use std::sync::OnceLock;

use regex::Regex;

/// Read-only ingredient reference data plus the two ordered scan term
/// lists. Built once per process and shared freely across threads; no
/// mutation after construction.
///
/// The scan lists and the per-record alias sets are intentionally
/// redundant: the lists drive detection, the aliases drive resolution
/// to a canonical record and its severity.
pub struct KnowledgeBase {
    records: Vec<IngredientRecord>,
    by_key: HashMap<String, usize>,
    patterns: HashMap<String, Regex>,
}

impl KnowledgeBase {
    pub fn new() -> Self {
        let records = data::ingredient_records();

        let mut by_key = HashMap::new();
        for (idx, record) in records.iter().enumerate() {
            by_key.insert(record.key.to_lowercase(), idx);
        }

        // Precompile a word-boundary pattern for every surface form the
        // engine can ever scan for, so classification never compiles
        // regexes on the hot path.
        let mut patterns = HashMap::new();
        let surfaces = data::HIGH_RISK_TERMS
            .iter()
            .chain(data::MODERATE_RISK_TERMS.iter())
            .map(|term| term.to_string())
            .chain(records.iter().flat_map(|r| r.aliases.iter().cloned()));
        for surface in surfaces {
            let normalized = surface.to_lowercase();
            if !patterns.contains_key(&normalized) {
                if let Some(re) = compile_word_boundary(&normalized) {
                    patterns.insert(normalized, re);
                }
            }
        }

        Self {
            records,
            by_key,
            patterns,
        }
    }

    /// Process-wide shared instance.
    pub fn shared() -> &'static KnowledgeBase {
        static SHARED: OnceLock<KnowledgeBase> = OnceLock::new();
        SHARED.get_or_init(KnowledgeBase::new)
    }

    /// Exact case-insensitive match on the canonical key.
    pub fn lookup_by_key(&self, key: &str) -> Option<&IngredientRecord> {
        self.by_key
            .get(&key.to_lowercase())
            .map(|&idx| &self.records[idx])
    }

    /// Exact (not substring) case-insensitive match across every
    /// record's alias set. If two records coincidentally share an alias
    /// the first declared record wins; that is a data configuration
    /// error, not something resolved at runtime.
    pub fn lookup_by_alias(&self, name: &str) -> Option<&IngredientRecord> {
        let normalized = name.to_lowercase();
        self.records.iter().find(|record| {
            record
                .aliases
                .iter()
                .any(|alias| alias.to_lowercase() == normalized)
        })
    }

    pub fn records(&self) -> &[IngredientRecord] {
        &self.records
    }

    /// Ordered high-risk scan terms. Any word-boundary hit forces a RED
    /// verdict.
    pub fn high_risk_terms(&self) -> &'static [&'static str] {
        data::HIGH_RISK_TERMS
    }

    /// Ordered moderate-risk scan terms, only consulted when the
    /// high-risk pass found nothing.
    pub fn moderate_risk_terms(&self) -> &'static [&'static str] {
        data::MODERATE_RISK_TERMS
    }

    /// Precompiled word-boundary pattern for a known surface form.
    pub(crate) fn pattern_for(&self, surface: &str) -> Option<&Regex> {
        self.patterns.get(&surface.to_lowercase())
    }
}

impl Default for KnowledgeBase {
    fn default() -> Self {
        Self::new()
    }
}

/// `\b` in the regex crate is Unicode-aware, which is what keeps "por"
/// from firing inside "eksport" and keeps multi-word Polish phrases
/// matching as whole token sequences.
pub(crate) fn compile_word_boundary(surface: &str) -> Option<Regex> {
    Regex::new(&format!(r"\b{}\b", regex::escape(surface))).ok()
}
