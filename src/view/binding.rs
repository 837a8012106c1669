//! Keyed diffing of the table body against the previously bound one.
//!
//! Rows are matched by user id. Whenever either side is a single-row
//! state (loading or placeholder), or surviving rows changed relative
//! order, the whole body is replaced instead of patched.

use std::collections::HashSet;
use std::fmt;

use serde::Serialize;

use crate::view::{RowView, TableBody};

/// A single change to apply to the rendered table body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "op", rename_all = "lowercase")]
pub enum Patch {
    /// Throw away the current body and render this one.
    ReplaceAll(TableBody),
    /// Insert `row` so that it ends up at `index`.
    Insert { index: usize, row: RowView },
    /// Re-render the row at `index`.
    Update { index: usize, row: RowView },
    /// Remove the row for `id`.
    Remove { id: u64 },
}

impl fmt::Display for Patch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Patch::ReplaceAll(body) => write!(f, "* table ({} rows)", body.row_count()),
            Patch::Insert { row, .. } => {
                write!(f, "+ #{} {} {}", row.id, row.first_name, row.last_name)
            }
            Patch::Update { row, .. } => {
                write!(f, "~ #{} {} {}", row.id, row.first_name, row.last_name)
            }
            Patch::Remove { id } => write!(f, "- #{id}"),
        }
    }
}

/// Holds the last bound table body.
#[derive(Debug, Clone, Default)]
pub struct ViewBinding {
    current: Option<TableBody>,
}

impl ViewBinding {
    /// Bind `next` and return the patches that turn the previous body into it.
    ///
    /// The first bind is always a full replace. Binding an identical body
    /// returns no patches.
    pub fn bind(&mut self, next: TableBody) -> Vec<Patch> {
        let patches = match &self.current {
            None => vec![Patch::ReplaceAll(next.clone())],
            Some(prev) => diff(prev, &next),
        };
        self.current = Some(next);
        patches
    }
}

/// Compute the patches from `prev` to `next`.
pub fn diff(prev: &TableBody, next: &TableBody) -> Vec<Patch> {
    if prev == next {
        return Vec::new();
    }

    let (TableBody::Rows(old), TableBody::Rows(new)) = (prev, next) else {
        return vec![Patch::ReplaceAll(next.clone())];
    };

    let old_ids: HashSet<u64> = old.iter().map(|r| r.id).collect();
    let new_ids: HashSet<u64> = new.iter().map(|r| r.id).collect();

    // Surviving rows must keep their relative order to be patched in place.
    let kept_old = old.iter().filter(|r| new_ids.contains(&r.id)).map(|r| r.id);
    let kept_new = new.iter().filter(|r| old_ids.contains(&r.id)).map(|r| r.id);
    if !kept_old.eq(kept_new) {
        return vec![Patch::ReplaceAll(next.clone())];
    }

    let mut patches: Vec<Patch> = old
        .iter()
        .filter(|r| !new_ids.contains(&r.id))
        .map(|r| Patch::Remove { id: r.id })
        .collect();

    for (index, row) in new.iter().enumerate() {
        match old.iter().find(|r| r.id == row.id) {
            None => patches.push(Patch::Insert {
                index,
                row: row.clone(),
            }),
            Some(before) if before != row => patches.push(Patch::Update {
                index,
                row: row.clone(),
            }),
            Some(_) => {}
        }
    }

    patches
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::fixtures::{ann, leanne};
    use pretty_assertions::assert_eq;

    fn rows(users: &[crate::models::UserRecord]) -> TableBody {
        TableBody::Rows(users.iter().map(RowView::from).collect())
    }

    /// Replays patches the way a live table would.
    fn apply(body: &TableBody, patches: &[Patch]) -> TableBody {
        let mut current = body.clone();
        for patch in patches {
            current = match (current, patch) {
                (_, Patch::ReplaceAll(next)) => next.clone(),
                (TableBody::Rows(mut rows), Patch::Insert { index, row }) => {
                    rows.insert((*index).min(rows.len()), row.clone());
                    TableBody::Rows(rows)
                }
                (TableBody::Rows(mut rows), Patch::Update { index, row }) => {
                    if let Some(slot) = rows.get_mut(*index) {
                        *slot = row.clone();
                    }
                    TableBody::Rows(rows)
                }
                (TableBody::Rows(mut rows), Patch::Remove { id }) => {
                    rows.retain(|r| r.id != *id);
                    if rows.is_empty() {
                        TableBody::Empty
                    } else {
                        TableBody::Rows(rows)
                    }
                }
                (other, _) => other,
            };
        }
        current
    }

    #[test]
    fn first_bind_replaces_everything() {
        let mut binding = ViewBinding::default();
        let patches = binding.bind(TableBody::Empty);
        assert_eq!(patches, vec![Patch::ReplaceAll(TableBody::Empty)]);
        assert!(binding.bind(TableBody::Empty).is_empty());
    }

    #[test]
    fn identical_bind_is_a_no_op() {
        let mut binding = ViewBinding::default();
        binding.bind(rows(&[leanne()]));
        assert!(binding.bind(rows(&[leanne()])).is_empty());
    }

    #[test]
    fn placeholder_transitions_replace_wholesale() {
        let patches = diff(&TableBody::Empty, &rows(&[leanne()]));
        assert_eq!(patches, vec![Patch::ReplaceAll(rows(&[leanne()]))]);

        let patches = diff(&rows(&[leanne()]), &TableBody::Empty);
        assert_eq!(patches, vec![Patch::ReplaceAll(TableBody::Empty)]);

        let patches = diff(&TableBody::Loading, &TableBody::Empty);
        assert_eq!(patches, vec![Patch::ReplaceAll(TableBody::Empty)]);
    }

    #[test]
    fn append_is_a_single_insert() {
        let prev = rows(&[leanne()]);
        let next = rows(&[leanne(), ann(11)]);
        let patches = diff(&prev, &next);
        assert_eq!(
            patches,
            vec![Patch::Insert {
                index: 1,
                row: RowView::from(&ann(11)),
            }]
        );
        assert_eq!(apply(&prev, &patches), next);
    }

    #[test]
    fn edit_is_a_single_update() {
        let mut edited = leanne();
        edited.department = "Ops".into();
        let prev = rows(&[leanne(), ann(2)]);
        let next = rows(&[edited.clone(), ann(2)]);
        let patches = diff(&prev, &next);
        assert_eq!(
            patches,
            vec![Patch::Update {
                index: 0,
                row: RowView::from(&edited),
            }]
        );
        assert_eq!(apply(&prev, &patches), next);
    }

    #[test]
    fn mixed_changes_round_trip() {
        let prev = rows(&[ann(1), ann(2), ann(3), ann(4)]);
        let mut changed = ann(3);
        changed.email = "c@x.com".into();
        let next = rows(&[ann(1), ann(5), changed, ann(6)]);
        let patches = diff(&prev, &next);
        assert!(patches.contains(&Patch::Remove { id: 2 }));
        assert!(patches.contains(&Patch::Remove { id: 4 }));
        assert_eq!(apply(&prev, &patches), next);
    }

    #[test]
    fn reorder_replaces_wholesale() {
        let prev = rows(&[ann(1), ann(2)]);
        let next = rows(&[ann(2), ann(1)]);
        assert_eq!(diff(&prev, &next), vec![Patch::ReplaceAll(next)]);
    }

    #[test]
    fn removing_last_row_yields_placeholder() {
        let prev = rows(&[ann(1)]);
        assert_eq!(apply(&prev, &[Patch::Remove { id: 1 }]), TableBody::Empty);
    }

    #[test]
    fn patch_display() {
        assert_eq!(Patch::Remove { id: 3 }.to_string(), "- #3");
        let insert = Patch::Insert {
            index: 0,
            row: RowView::from(&ann(11)),
        };
        assert_eq!(insert.to_string(), "+ #11 Ann Lee");
        assert_eq!(
            Patch::ReplaceAll(TableBody::Empty).to_string(),
            "* table (1 rows)"
        );
    }
}
