//! Myers diff over characters.
//!
//! Forward greedy search: diagonals are explored from the start of both
//! texts, so common runs anchored at the start are kept as long as
//! possible. Ties between a removal and an insertion are broken the way
//! the `diff` npm package breaks them, and removals are emitted before the
//! additions they pair with.

use std::rc::Rc;

use super::{push_op, DiffAlgorithm};
use crate::types::{EditKind, EditOp};

/// Myers O(ND) diff.
#[derive(Debug, Clone, Copy, Default)]
pub struct Myers;

impl DiffAlgorithm for Myers {
    fn name(&self) -> &'static str {
        "myers"
    }

    fn diff(&self, typed: &str, expected: &str, ignore_case: bool) -> Vec<EditOp> {
        let typed: Vec<char> = typed.chars().collect();
        let expected: Vec<char> = expected.chars().collect();

        let search = Search {
            old: &typed,
            new: &expected,
            ignore_case,
        };
        let runs = search.run();

        build_script(runs, &typed, &expected)
    }
}

/// One run of the edit path, linked to the run before it.
#[derive(Debug)]
struct Run {
    kind: EditKind,
    count: usize,
    previous: Option<Rc<Run>>,
}

/// Furthest-reaching path on one diagonal.
#[derive(Debug, Clone)]
struct Path {
    /// Characters of the old text consumed so far.
    x: usize,
    last: Option<Rc<Run>>,
}

impl Path {
    /// Take one step of `kind`, growing the trailing run when it matches.
    fn step(&self, kind: EditKind, dx: usize) -> Self {
        let last = match &self.last {
            Some(run) if run.kind == kind => Run {
                kind,
                count: run.count + 1,
                previous: run.previous.clone(),
            },
            _ => Run {
                kind,
                count: 1,
                previous: self.last.clone(),
            },
        };
        Self {
            x: self.x + dx,
            last: Some(Rc::new(last)),
        }
    }
}

struct Search<'a> {
    old: &'a [char],
    new: &'a [char],
    ignore_case: bool,
}

impl Search<'_> {
    /// Runs of the shortest edit path, in order.
    fn run(&self) -> Vec<(EditKind, usize)> {
        let (old_len, new_len) = (self.old.len(), self.new.len());
        let max_edit = old_len + new_len;

        let mut start = Path { x: 0, last: None };
        let y = self.follow_snake(&mut start, 0);
        if start.x >= old_len && y >= new_len {
            return unwind(start.last);
        }

        // Diagonal k holds paths with x - y == k, stored at k + offset.
        let offset = max_edit as isize + 1;
        let mut best: Vec<Option<Path>> = vec![None; 2 * max_edit + 3];
        best[offset as usize] = Some(start);

        let mut min_k = isize::MIN;
        let mut max_k = isize::MAX;

        for edit in 1..=max_edit as isize {
            let mut k = min_k.max(-edit);
            while k <= max_k.min(edit) {
                let slot = (k + offset) as usize;
                let remove = best[slot - 1].take();
                let add = best[slot + 1].clone();

                let can_add = add.as_ref().is_some_and(|path| {
                    let y = path.x as isize - k;
                    y >= 1 && y <= new_len as isize
                });
                let can_remove = remove.as_ref().is_some_and(|path| path.x < old_len);

                let mut path = match (remove, add) {
                    (Some(remove), Some(add))
                        if can_add && (!can_remove || remove.x + 1 < add.x) =>
                    {
                        add.step(EditKind::ExpectedOnly, 0)
                    }
                    (Some(remove), _) if can_remove => remove.step(EditKind::TypedOnly, 1),
                    (None, Some(add)) if can_add => add.step(EditKind::ExpectedOnly, 0),
                    _ => {
                        best[slot] = None;
                        k += 2;
                        continue;
                    }
                };

                let y = self.follow_snake(&mut path, k);
                if path.x >= old_len && y >= new_len {
                    return unwind(path.last);
                }
                if path.x >= old_len {
                    max_k = max_k.min(k - 1);
                }
                if y >= new_len {
                    min_k = min_k.max(k + 1);
                }
                best[slot] = Some(path);
                k += 2;
            }
        }

        // Unreachable: a path of `max_edit` steps always reaches the end.
        [(EditKind::TypedOnly, old_len), (EditKind::ExpectedOnly, new_len)]
            .into_iter()
            .filter(|(_, count)| *count > 0)
            .collect()
    }

    /// Slide along diagonal `k` over equal characters; returns the new-text position.
    fn follow_snake(&self, path: &mut Path, k: isize) -> usize {
        let mut x = path.x;
        let mut y = (x as isize - k) as usize;
        let mut count = 0;

        while x < self.old.len() && y < self.new.len() && self.same(self.old[x], self.new[y]) {
            x += 1;
            y += 1;
            count += 1;
        }

        if count > 0 {
            path.last = Some(Rc::new(Run {
                kind: EditKind::Common,
                count,
                previous: path.last.take(),
            }));
        }
        path.x = x;
        y
    }

    fn same(&self, a: char, b: char) -> bool {
        a == b || (self.ignore_case && a.to_lowercase().eq(b.to_lowercase()))
    }
}

/// Flatten the linked runs into path order.
fn unwind(mut last: Option<Rc<Run>>) -> Vec<(EditKind, usize)> {
    let mut runs = Vec::new();
    while let Some(run) = last {
        runs.push((run.kind, run.count));
        last = run.previous.clone();
    }
    runs.reverse();
    runs
}

/// Slice values for each run. Common runs take the expected text's characters.
fn build_script(
    mut runs: Vec<(EditKind, usize)>,
    typed: &[char],
    expected: &[char],
) -> Vec<EditOp> {
    // The search yields additions before removals; report removals first.
    for i in 1..runs.len() {
        if runs[i].0 == EditKind::TypedOnly && runs[i - 1].0 == EditKind::ExpectedOnly {
            runs.swap(i - 1, i);
        }
    }

    let mut script = Vec::with_capacity(runs.len());
    let (mut old_pos, mut new_pos) = (0, 0);

    for (kind, count) in runs {
        let chars = match kind {
            EditKind::TypedOnly => {
                old_pos += count;
                &typed[old_pos - count..old_pos]
            }
            EditKind::ExpectedOnly => {
                new_pos += count;
                &expected[new_pos - count..new_pos]
            }
            EditKind::Common => {
                old_pos += count;
                new_pos += count;
                &expected[new_pos - count..new_pos]
            }
        };
        push_op(&mut script, kind, chars);
    }

    script
}
