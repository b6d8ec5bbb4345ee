use crate::domain::knowledge::{self, KnowledgeBase};

/// Fixed engine messages and warnings. Polish, matching the target
/// market of the scanned labels; `red_verdict_message` handles the
/// three-way Polish plural so localization stays out of the engine.
pub const MSG_NO_DATA: &str = "Brak danych o składnikach.";
pub const MSG_MODERATE: &str =
    "Wykryto składniki ryzykowne lub zależne od ilości. Testuj ostrożnie.";
pub const MSG_SAFE: &str =
    "Nie wykryto typowych wyzwalaczy FODMAP. Produkt wygląda bezpiecznie.";

pub const RED_WARNINGS: [&str; 2] = [
    "Ten produkt może wywołać objawy u osób z IBS/SIBO",
    "Sprawdź szczegóły składników klikając na nie",
];

pub const YELLOW_WARNINGS: [&str; 2] = [
    "Składniki mogą być tolerowane w małych ilościach",
    "Jeśli jesteś bardzo wrażliwy, rozważ unikanie",
];

/// Count message for a RED verdict with correct Polish pluralization:
/// 1 wyzwalacz, 2-4 wyzwalacze, 5+ wyzwalaczy (with the 12-14
/// exception).
pub fn red_verdict_message(count: usize) -> String {
    match polish_plural(count) {
        PolishPlural::One => format!("Wykryto {count} silny wyzwalacz FODMAP."),
        PolishPlural::Few => format!("Wykryto {count} silne wyzwalacze FODMAP."),
        PolishPlural::Many => format!("Wykryto {count} silnych wyzwalaczy FODMAP."),
    }
}

enum PolishPlural {
    One,
    Few,
    Many,
}

fn polish_plural(count: usize) -> PolishPlural {
    if count == 1 {
        return PolishPlural::One;
    }
    let tens = count % 100;
    let units = count % 10;
    if (2..=4).contains(&units) && !(12..=14).contains(&tens) {
        PolishPlural::Few
    } else {
        PolishPlural::Many
    }
}

/// Whole-token match of `surface` inside already-lowercased `text`.
/// Substring containment is not enough: "por" must not fire inside
/// "eksport" and "cebula" must not fire inside "cebulowy".
pub fn is_word_boundary_match(kb: &KnowledgeBase, text: &str, surface: &str) -> bool {
    if let Some(re) = kb.pattern_for(surface) {
        return re.is_match(text);
    }
    // Surface form outside the precompiled set, e.g. caller-supplied.
    knowledge::compile_word_boundary(&surface.to_lowercase())
        .map(|re| re.is_match(text))
        .unwrap_or(false)
}

/// Find the surface form under which `term` occurs in `text`: the term
/// itself first, then each alias of the term's knowledge-base record in
/// declaration order. Returns the surface form that matched.
pub fn find_surface_match(kb: &KnowledgeBase, text: &str, term: &str) -> Option<String> {
    if is_word_boundary_match(kb, text, term) {
        return Some(term.to_string());
    }

    let record = kb.lookup_by_key(term)?;
    record
        .aliases
        .iter()
        .find(|alias| is_word_boundary_match(kb, text, alias))
        .cloned()
}
