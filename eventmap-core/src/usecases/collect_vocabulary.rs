use super::prelude::*;
use std::collections::BTreeSet;

/// All types and keywords occurring in a set of events.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Vocabulary {
    pub types: Vec<String>,
    pub keywords: Vec<String>,
}

fn sorted_case_insensitive(terms: BTreeSet<&str>) -> Vec<String> {
    let mut terms: Vec<_> = terms.into_iter().map(ToOwned::to_owned).collect();
    terms.sort_by_key(|t| t.to_lowercase());
    terms
}

pub fn collect_vocabulary<'a>(events: impl IntoIterator<Item = &'a Event>) -> Vocabulary {
    let mut types = BTreeSet::new();
    let mut keywords = BTreeSet::new();
    for event in events {
        types.extend(event.types.iter().map(String::as_str));
        keywords.extend(event.keywords.iter().map(String::as_str));
    }
    Vocabulary {
        types: sorted_case_insensitive(types),
        keywords: sorted_case_insensitive(keywords),
    }
}
