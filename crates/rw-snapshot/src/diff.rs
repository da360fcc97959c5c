//! Keyed diff between two entity lists.

use std::collections::HashSet;

use rw_core::entities::{Diff, EntityKey, KeyMode, RegistryEntity};

/// Entities added to and removed from the registry between `previous` and `current`.
///
/// One key function covers both sides: registry ids when every entity on
/// both sides has one, canonical names otherwise. `added` keeps the order
/// of `current` and `removed` the order of `previous`. A key present on
/// both sides is neither added nor removed, whatever its other fields say.
#[must_use]
pub fn diff(current: &[RegistryEntity], previous: &[RegistryEntity]) -> Diff {
    let mode = KeyMode::for_entities(current.iter().chain(previous));
    let current_keys = keys(current, mode);
    let previous_keys = keys(previous, mode);

    Diff {
        added: current
            .iter()
            .filter(|entity| !previous_keys.contains(&entity.key(mode)))
            .cloned()
            .collect(),
        removed: previous
            .iter()
            .filter(|entity| !current_keys.contains(&entity.key(mode)))
            .cloned()
            .collect(),
    }
}

fn keys(entities: &[RegistryEntity], mode: KeyMode) -> HashSet<EntityKey<'_>> {
    entities.iter().map(|entity| entity.key(mode)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn entity(id: Option<&str>, name: &str) -> RegistryEntity {
        RegistryEntity {
            id: id.map(String::from),
            ..RegistryEntity::new(name)
        }
    }

    #[test]
    fn new_entity_is_added() {
        let previous = vec![entity(Some("100"), "Alpha")];
        let mut current = previous.clone();
        current.push(entity(Some("200"), "Beta"));

        let result = diff(&current, &previous);
        assert_eq!(result.added, vec![entity(Some("200"), "Beta")]);
        assert!(result.removed.is_empty());
    }

    #[test]
    fn missing_entity_is_removed() {
        let previous = vec![entity(Some("100"), "Alpha"), entity(Some("200"), "Beta")];
        let current = vec![entity(Some("100"), "Alpha")];

        let result = diff(&current, &previous);
        assert!(result.added.is_empty());
        assert_eq!(result.removed, vec![entity(Some("200"), "Beta")]);
    }

    #[test]
    fn identical_lists_diff_to_nothing() {
        let list = vec![entity(None, "Alpha"), entity(Some("7"), "Beta")];
        assert!(diff(&list, &list).is_empty());
        assert!(diff(&[], &[]).is_empty());
    }

    #[test]
    fn field_edits_are_not_changes() {
        let previous = vec![entity(None, "Alpha")];
        let mut edited = entity(None, "Alpha");
        edited.address = "2 New Road".into();
        edited.license_types.insert("MPI".into());

        assert!(diff(&[edited], &previous).is_empty());
    }

    #[test]
    fn rename_under_same_id_is_not_a_change() {
        let previous = vec![entity(Some("100"), "Alpha Pte Ltd")];
        let current = vec![entity(Some("100"), "Alpha Holdings Pte Ltd")];
        assert!(diff(&current, &previous).is_empty());
    }

    #[test]
    fn id_column_appearing_between_captures_is_not_a_change() {
        let previous = vec![entity(None, "Alpha"), entity(None, "Beta")];
        let current = vec![entity(Some("100"), "Alpha"), entity(Some("200"), "Beta")];

        assert!(diff(&current, &previous).is_empty());
        assert!(diff(&previous, &current).is_empty());
    }

    #[test]
    fn partial_ids_fall_back_to_names_on_both_sides() {
        let previous = vec![entity(Some("100"), "Alpha"), entity(None, "Beta")];
        let current = vec![entity(Some("100"), "Alpha"), entity(Some("300"), "Gamma")];

        let result = diff(&current, &previous);
        assert_eq!(result.added, vec![entity(Some("300"), "Gamma")]);
        assert_eq!(result.removed, vec![entity(None, "Beta")]);
    }

    #[test]
    fn output_follows_input_order() {
        let previous = vec![entity(None, "Zeta"), entity(None, "Keep"), entity(None, "Eta")];
        let current = vec![entity(None, "Omega"), entity(None, "Keep"), entity(None, "Beta")];

        let result = diff(&current, &previous);
        let added: Vec<&str> = result.added.iter().map(|e| e.name.as_str()).collect();
        let removed: Vec<&str> = result.removed.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(added, vec!["Omega", "Beta"]);
        assert_eq!(removed, vec!["Zeta", "Eta"]);
    }
}
