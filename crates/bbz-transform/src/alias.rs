//! Default alias selection.

use bbz_model::{Alias, AliasRow};

/// Records that carry a "default" flag.
pub trait DefaultFlag {
    fn is_default(&self) -> bool;
}

impl DefaultFlag for Alias {
    fn is_default(&self) -> bool {
        self.default
    }
}

impl DefaultFlag for AliasRow {
    fn is_default(&self) -> bool {
        self.default
    }
}

impl<T: DefaultFlag> DefaultFlag for &T {
    fn is_default(&self) -> bool {
        (**self).is_default()
    }
}

/// Index of the first alias flagged default, or `0` when none is.
///
/// The result is also `0` for an empty slice; callers must check for
/// emptiness themselves (see [`split_default_alias`]).
pub fn default_alias_index<T: DefaultFlag>(aliases: &[T]) -> usize {
    aliases
        .iter()
        .position(DefaultFlag::is_default)
        .unwrap_or(0)
}

/// Remove the default alias from `aliases`.
///
/// Returns the default alias (`None` only for an empty input) and the
/// remaining aliases in their original order.
pub fn split_default_alias<T: DefaultFlag>(mut aliases: Vec<T>) -> (Option<T>, Vec<T>) {
    if aliases.is_empty() {
        return (None, aliases);
    }
    let index = default_alias_index(&aliases);
    let default_alias = aliases.remove(index);
    (Some(default_alias), aliases)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(id: i64, default: bool) -> AliasRow {
        AliasRow {
            id: Some(id),
            name: format!("alias {id}"),
            sort_name: format!("alias {id}"),
            default,
            ..AliasRow::default()
        }
    }

    #[test]
    fn picks_flagged_alias() {
        let aliases = vec![row(1, false), row(2, true), row(3, false)];
        assert_eq!(default_alias_index(&aliases), 1);
    }

    #[test]
    fn first_flagged_alias_wins() {
        let aliases = vec![row(1, false), row(2, true), row(3, true)];
        assert_eq!(default_alias_index(&aliases), 1);
    }

    #[test]
    fn falls_back_to_first() {
        let aliases = vec![row(1, false), row(2, false)];
        let (default_alias, rest) = split_default_alias(aliases);
        assert_eq!(default_alias.and_then(|alias| alias.id), Some(1));
        assert_eq!(rest.iter().map(|alias| alias.id).collect::<Vec<_>>(), vec![Some(2)]);
    }

    #[test]
    fn empty_has_no_default() {
        let (default_alias, rest) = split_default_alias(Vec::<AliasRow>::new());
        assert!(default_alias.is_none());
        assert!(rest.is_empty());
    }
}
