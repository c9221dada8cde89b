use super::prelude::*;
use std::collections::{BTreeSet, HashMap};

/// Type assigned to events that end up without any known type.
pub const DEFAULT_FALLBACK_TYPE: &str = "ostatní";

/// Directed graph from event types to their supertypes.
#[derive(Debug, Clone, Default)]
pub struct TypeHierarchy {
    supertypes: HashMap<String, Vec<String>>,
}

impl TypeHierarchy {
    pub fn new(entries: impl IntoIterator<Item = (String, Vec<String>)>) -> Self {
        let mut supertypes: HashMap<String, Vec<String>> = HashMap::new();
        for (event_type, parents) in entries {
            supertypes.entry(event_type).or_default().extend(parents);
        }
        Self { supertypes }
    }

    pub fn is_empty(&self) -> bool {
        self.supertypes.is_empty()
    }

    pub fn is_known(&self, event_type: &str) -> bool {
        self.supertypes.contains_key(event_type)
    }

    /// The type itself and all of its transitive supertypes.
    pub fn with_supertypes(&self, event_type: &str) -> BTreeSet<String> {
        let mut visited = BTreeSet::new();
        let mut pending = vec![event_type];
        while let Some(next) = pending.pop() {
            if !visited.insert(next.to_owned()) {
                continue;
            }
            if let Some(parents) = self.supertypes.get(next) {
                pending.extend(parents.iter().map(String::as_str));
            }
        }
        visited
    }
}

/// Expands the given types by their supertypes.
///
/// Types missing in the hierarchy are dropped. If nothing remains
/// the fallback type is returned. The result is sorted
/// case-insensitively.
pub fn associate_types<'a>(
    hierarchy: &TypeHierarchy,
    types: impl IntoIterator<Item = &'a str>,
    fallback: &str,
) -> Vec<String> {
    let mut associated: Vec<String> = types
        .into_iter()
        .filter(|t| hierarchy.is_known(t))
        .flat_map(|t| hierarchy.with_supertypes(t))
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();
    if associated.is_empty() {
        return vec![fallback.to_owned()];
    }
    associated.sort_by_key(|t| t.to_lowercase());
    associated
}

/// Replaces the types of all events by their associated types.
///
/// An empty hierarchy leaves the events untouched.
pub fn associate_event_types<'a>(
    hierarchy: &TypeHierarchy,
    events: impl IntoIterator<Item = &'a mut Event>,
    fallback: &str,
) {
    if hierarchy.is_empty() {
        log::debug!("No type hierarchy available");
        return;
    }
    for event in events {
        let types = associate_types(hierarchy, event.types.iter().map(String::as_str), fallback);
        event.types = types;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::usecases::tests::*;

    fn hierarchy() -> TypeHierarchy {
        TypeHierarchy::new([
            ("koncert".to_owned(), vec!["hudba".to_owned()]),
            ("hudba".to_owned(), vec!["kultura".to_owned()]),
            ("divadlo".to_owned(), vec!["kultura".to_owned()]),
            ("kultura".to_owned(), vec![]),
            ("Sport".to_owned(), vec![]),
        ])
    }

    #[test]
    fn transitive_supertypes() {
        let types = hierarchy().with_supertypes("koncert");
        assert_eq!(
            types.into_iter().collect::<Vec<_>>(),
            vec!["hudba", "koncert", "kultura"]
        );
    }

    #[test]
    fn cyclic_hierarchies_terminate() {
        let hierarchy = TypeHierarchy::new([
            ("a".to_owned(), vec!["b".to_owned()]),
            ("b".to_owned(), vec!["a".to_owned()]),
        ]);
        assert_eq!(hierarchy.with_supertypes("a").len(), 2);
    }

    #[test]
    fn associate_known_types_sorted_case_insensitively() {
        let types = associate_types(&hierarchy(), ["divadlo", "Sport"], DEFAULT_FALLBACK_TYPE);
        assert_eq!(types, vec!["divadlo", "kultura", "Sport"]);
    }

    #[test]
    fn fallback_for_unknown_or_missing_types() {
        assert_eq!(
            associate_types(&hierarchy(), ["unknown"], DEFAULT_FALLBACK_TYPE),
            vec![DEFAULT_FALLBACK_TYPE]
        );
        assert_eq!(
            associate_types(&hierarchy(), Vec::<&str>::new(), "other"),
            vec!["other"]
        );
    }

    #[test]
    fn associate_types_of_events() {
        let mut events = vec![
            Event::build().id("1").types(vec!["koncert"]).finish(),
            Event::build().id("2").finish(),
        ];
        associate_event_types(&hierarchy(), &mut events, DEFAULT_FALLBACK_TYPE);
        assert_eq!(events[0].types, vec!["hudba", "koncert", "kultura"]);
        assert_eq!(events[1].types, vec![DEFAULT_FALLBACK_TYPE]);

        let mut events = vec![Event::build().id("3").types(vec!["x"]).finish()];
        associate_event_types(&TypeHierarchy::default(), &mut events, DEFAULT_FALLBACK_TYPE);
        assert_eq!(events[0].types, vec!["x"]);
    }
}
