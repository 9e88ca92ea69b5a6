//! Catalog ordering.
//!
//! Entries sort by `order` ascending, then by `title`. Both keys are
//! optional; an entry missing a key sorts after every entry that has it.
//! Titles compare on a case- and accent-folded transliteration first (so
//! `Élan` sits next to `elan`), then on the raw text with lowercase first.
//! The sort is stable, so full ties keep enumeration order.

use std::cmp::Ordering;

use deunicode::deunicode;

use super::CatalogEntry;

/// Sort entries in place into catalog order.
pub fn sort_entries(entries: &mut [CatalogEntry]) {
    entries.sort_by_cached_key(SortKey::of);
}

/// Precomputed sort key for one entry.
#[derive(Debug, Clone)]
pub struct SortKey {
    order: Option<f64>,
    title: Option<TitleKey>,
}

/// Folded text first, then the raw text with ASCII case swapped so that
/// `alpha` sorts before `Alpha`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
struct TitleKey {
    folded: String,
    lower_first: String,
}

impl TitleKey {
    fn new(raw: &str) -> Self {
        Self {
            folded: deunicode(raw).to_lowercase(),
            lower_first: raw.chars().map(swap_ascii_case).collect(),
        }
    }
}

fn swap_ascii_case(c: char) -> char {
    if c.is_ascii_lowercase() {
        c.to_ascii_uppercase()
    } else {
        c.to_ascii_lowercase()
    }
}

impl SortKey {
    pub fn of(entry: &CatalogEntry) -> Self {
        Self {
            order: entry.order_key(),
            title: entry.title_key().map(|t| TitleKey::new(&t)),
        }
    }
}

/// Compare two optional keys, placing `None` last.
fn missing_last<T>(
    a: Option<&T>,
    b: Option<&T>,
    cmp: impl FnOnce(&T, &T) -> Ordering,
) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => cmp(a, b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

impl Ord for SortKey {
    fn cmp(&self, other: &Self) -> Ordering {
        // order keys are always finite
        missing_last(self.order.as_ref(), other.order.as_ref(), |a, b| {
            a.partial_cmp(b).unwrap_or(Ordering::Equal)
        })
        .then_with(|| missing_last(self.title.as_ref(), other.title.as_ref(), Ord::cmp))
    }
}

impl PartialOrd for SortKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for SortKey {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for SortKey {}
