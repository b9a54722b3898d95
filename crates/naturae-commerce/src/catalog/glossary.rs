//! Botanical glossary.
//!
//! Glossary entries are filtered by the first letter of their name and always
//! presented alphabetically. French names carry diacritics, so ordering folds
//! accents to their base letters before comparing ("Pétales" sorts before
//! "Poudre").

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// One glossary entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GlossaryItem {
    /// Ingredient name as shown to the reader.
    pub name: String,
    /// INCI identifier (standardized cosmetic ingredient nomenclature).
    pub inci: String,
    /// Description text.
    pub description: String,
}

/// The botanical glossary, supplied once and never mutated.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct Glossary {
    items: Vec<GlossaryItem>,
}

impl Glossary {
    pub fn new(items: Vec<GlossaryItem>) -> Self {
        Self { items }
    }

    /// The selectable filter letters: the distinct case-normalized first
    /// letters across all entries, sorted ascending.
    pub fn letters(&self) -> Vec<char> {
        let mut letters: Vec<char> = self
            .items
            .iter()
            .filter_map(|item| first_letter(&item.name))
            .collect();
        letters.sort_unstable();
        letters.dedup();
        letters
    }

    /// The entries visible under a letter filter, sorted by name.
    ///
    /// `None` shows everything; a letter keeps entries whose case-normalized
    /// first letter matches. A letter with no entries yields an empty set.
    pub fn visible(&self, letter: Option<char>) -> Vec<&GlossaryItem> {
        let wanted = letter.and_then(normalize_letter);
        let mut visible: Vec<&GlossaryItem> = self
            .items
            .iter()
            .filter(|item| match wanted {
                Some(l) => first_letter(&item.name) == Some(l),
                None => true,
            })
            .collect();
        visible.sort_by(|a, b| compare_names(&a.name, &b.name));
        visible
    }

    pub fn items(&self) -> &[GlossaryItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Case-normalized first letter of a name.
fn first_letter(name: &str) -> Option<char> {
    name.chars().next().and_then(|c| c.to_uppercase().next())
}

fn normalize_letter(letter: char) -> Option<char> {
    letter.to_uppercase().next()
}

/// Alphabetical comparison with French diacritics folded to base letters.
fn compare_names(a: &str, b: &str) -> Ordering {
    sort_key(a).cmp(&sort_key(b)).then_with(|| a.cmp(b))
}

fn sort_key(name: &str) -> String {
    let mut key = String::with_capacity(name.len());
    for c in name.chars() {
        for lower in c.to_lowercase() {
            match lower {
                'à' | 'â' | 'ä' | 'á' | 'ã' => key.push('a'),
                'é' | 'è' | 'ê' | 'ë' | 'ē' => key.push('e'),
                'î' | 'ï' | 'í' | 'ì' => key.push('i'),
                'ô' | 'ö' | 'ó' | 'ò' | 'õ' => key.push('o'),
                'û' | 'ü' | 'ú' | 'ù' => key.push('u'),
                'ç' => key.push('c'),
                'ñ' => key.push('n'),
                'œ' => key.push_str("oe"),
                'æ' => key.push_str("ae"),
                other => key.push(other),
            }
        }
    }
    key
}
