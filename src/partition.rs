//! Splitting ordered sequences into runs of equivalent elements.
//!
//! A run collects consecutive elements that are equivalent to the *first*
//! element of the run (its representative), not to their immediate
//! predecessor. The input is expected to be sorted so that equivalent
//! elements are contiguous; nothing is sorted here.

use serde::{Deserialize, Serialize};

/// An equivalence test between a run's representative and a candidate.
pub trait Equivalence<T: ?Sized> {
    /// Returns true if `candidate` belongs to the run started by `representative`.
    fn equivalent(&self, representative: &T, candidate: &T) -> bool;
}

impl<T: ?Sized, F> Equivalence<T> for F
where
    F: Fn(&T, &T) -> bool,
{
    fn equivalent(&self, representative: &T, candidate: &T) -> bool {
        self(representative, candidate)
    }
}

/// Options controlling which runs are emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartitionOptions {
    /// Drop runs holding a single element.
    pub omit_singletons: bool,
}

impl Default for PartitionOptions {
    fn default() -> Self {
        PartitionOptions {
            omit_singletons: true,
        }
    }
}

/// Split `items` into maximal runs of elements equivalent to each run's first element.
///
/// Runs keep the input order, and so do the elements inside each run.
pub fn partition_runs<T, E>(
    items: Vec<T>,
    equivalence: &E,
    options: PartitionOptions,
) -> Vec<Vec<T>>
where
    E: Equivalence<T> + ?Sized,
{
    let mut runs = Vec::new();
    let mut current: Vec<T> = Vec::new();

    for item in items {
        let joins = match current.first() {
            None => true,
            Some(representative) => equivalence.equivalent(representative, &item),
        };

        if joins {
            current.push(item);
        } else {
            let finished = std::mem::replace(&mut current, vec![item]);
            push_run(&mut runs, finished, options);
        }
    }

    if !current.is_empty() {
        push_run(&mut runs, current, options);
    }

    runs
}

fn push_run<T>(runs: &mut Vec<Vec<T>>, run: Vec<T>, options: PartitionOptions) {
    if options.omit_singletons && run.len() == 1 {
        return;
    }
    runs.push(run);
}
