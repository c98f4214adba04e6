//! Combinators over [`Seq`].
//!
//! Every combinator borrows its inputs, clones their (cheap) handles into
//! the new sequence's factory and returns immediately. Nothing is pulled from
//! a source until the result is traversed, and each traversal of the result
//! opens fresh cursors on its sources.

use std::rc::Rc;

use crate::error::SeqError;
use crate::extent::{Extent, IntoCount};
use crate::seq::{Cursor, Seq};

impl<T: 'static> Seq<T> {
    // ========================================================================
    // Lazy transformations
    // ========================================================================

    /// Applies `f` to every element.
    pub fn map<U, F>(&self, f: F) -> Seq<U>
    where
        U: 'static,
        F: Fn(T) -> U + 'static,
    {
        let src = self.clone();
        let f = Rc::new(f);
        Seq::from_fn(self.extent(), move || {
            let f = Rc::clone(&f);
            src.cursor().map(move |x| f(x))
        })
    }

    /// Keeps the elements satisfying `predicate`.
    ///
    /// On an infinite source whose elements stop matching after some point,
    /// pulling past the last match never returns. That cannot be detected;
    /// bound such traversals with [`Seq::take`].
    pub fn filter<P>(&self, predicate: P) -> Seq<T>
    where
        P: Fn(&T) -> bool + 'static,
    {
        let src = self.clone();
        let predicate = Rc::new(predicate);
        Seq::from_fn(self.extent().filtered(), move || {
            let predicate = Rc::clone(&predicate);
            src.cursor().filter(move |x| predicate(x))
        })
    }

    /// Combines elements pairwise by position. Ends when either side ends.
    pub fn zip_with<U, V, F>(&self, other: &Seq<U>, combine: F) -> Seq<V>
    where
        U: 'static,
        V: 'static,
        F: Fn(T, U) -> V + 'static,
    {
        let left = self.clone();
        let right = other.clone();
        let combine = Rc::new(combine);
        Seq::from_fn(self.extent().zipped(other.extent()), move || {
            let combine = Rc::clone(&combine);
            left.cursor()
                .zip(right.cursor())
                .map(move |(a, b)| combine(a, b))
        })
    }

    /// Pairs elements by position.
    pub fn zip<U: 'static>(&self, other: &Seq<U>) -> Seq<(T, U)> {
        self.zip_with(other, |a, b| (a, b))
    }

    /// The first `n` elements.
    ///
    /// The result is always finite. It holds fewer than `n` elements, without
    /// error, when the source is shorter. `take(0)` never touches the source.
    pub fn take(&self, n: impl IntoCount) -> Result<Seq<T>, SeqError> {
        let n = n.into_count("count")?;
        if n == 0 {
            return Ok(Seq::empty());
        }

        let src = self.clone();
        Ok(Seq::from_fn(self.extent().taken(n), move || {
            src.cursor().take(n)
        }))
    }

    /// Skips the first `n` elements.
    ///
    /// Skipping happens on the first pull of each traversal. Yields nothing
    /// if the source has fewer than `n` elements. Repeated drops add to one
    /// offset instead of stacking.
    pub fn drop(&self, n: impl IntoCount) -> Result<Seq<T>, SeqError> {
        let n = n.into_count("count")?;
        if n == 0 {
            return Ok(self.clone());
        }
        Ok(self.skipped(n))
    }

    /// Repeats this sequence endlessly by reopening it each time it ends.
    ///
    /// An infinite sequence is returned unchanged. A pass that yields no
    /// elements at all ends the cycle rather than spinning.
    pub fn cycle(&self) -> Result<Seq<T>, SeqError> {
        match self.extent() {
            Extent::Exact(0) | Extent::AtMost(0) => Err(SeqError::invalid_argument(
                "seq",
                "cannot cycle an empty sequence",
            )),
            Extent::Infinite => Ok(self.clone()),
            extent => {
                let cycled = if extent.exact().is_some() {
                    Extent::Infinite
                } else {
                    Extent::Unknown
                };
                let src = self.clone();
                Ok(Seq::from_fn(cycled, move || Restart {
                    current: src.cursor(),
                    src: src.clone(),
                    produced_this_pass: false,
                }))
            }
        }
    }

    /// Maps each element to a sequence and concatenates the results lazily.
    pub fn flat_map<U, F>(&self, f: F) -> Seq<U>
    where
        U: 'static,
        F: Fn(T) -> Seq<U> + 'static,
    {
        let src = self.clone();
        let f = Rc::new(f);
        Seq::from_fn(self.extent().flattened(), move || {
            let f = Rc::clone(&f);
            src.cursor().flat_map(move |x| f(x).cursor())
        })
    }

    /// This sequence followed by `other`.
    pub fn chain(&self, other: &Seq<T>) -> Seq<T> {
        let first = self.clone();
        let second = other.clone();
        Seq::from_fn(self.extent().chained(other.extent()), move || {
            first.cursor().chain(second.cursor())
        })
    }

    /// The longest prefix whose elements satisfy `predicate`.
    pub fn take_while<P>(&self, predicate: P) -> Seq<T>
    where
        P: Fn(&T) -> bool + 'static,
    {
        let src = self.clone();
        let predicate = Rc::new(predicate);
        Seq::from_fn(self.extent().prefix(), move || {
            let predicate = Rc::clone(&predicate);
            src.cursor().take_while(move |x| predicate(x))
        })
    }

    /// Running accumulation. Yields `initial`, then each intermediate result.
    pub fn scan<A, F>(&self, initial: A, f: F) -> Seq<A>
    where
        A: Clone + 'static,
        F: Fn(&A, T) -> A + 'static,
    {
        let src = self.clone();
        let f = Rc::new(f);
        Seq::from_fn(self.extent().scanned(), move || {
            let f = Rc::clone(&f);
            let mut acc = initial.clone();
            std::iter::once(initial.clone()).chain(src.cursor().map(move |x| {
                acc = f(&acc, x);
                acc.clone()
            }))
        })
    }

    /// Pairs each element with its position.
    pub fn enumerate(&self) -> Seq<(usize, T)> {
        let src = self.clone();
        Seq::from_fn(self.extent(), move || src.cursor().enumerate())
    }

    // ========================================================================
    // Strict traversals
    // ========================================================================

    /// Accumulates left to right.
    ///
    /// Refused for infinite sequences. For sequences of unknown extent the
    /// traversal proceeds and termination is the caller's responsibility.
    pub fn fold_left<A, F>(&self, initial: A, combine: F) -> Result<A, SeqError>
    where
        F: FnMut(A, T) -> A,
    {
        self.ensure_traversable("fold")?;
        Ok(self.cursor().fold(initial, combine))
    }

    /// Materializes every element into a `Vec`.
    ///
    /// Refused for infinite sequences; bound them with [`Seq::take`] first.
    pub fn to_list(&self) -> Result<Vec<T>, SeqError> {
        self.ensure_traversable("materialize")?;
        let capacity = self.extent().upper_bound().unwrap_or(0).min(PREALLOCATE_MAX);
        let mut out = Vec::with_capacity(capacity);
        out.extend(self.cursor());
        tracing::trace!(len = out.len(), "materialized sequence");
        Ok(out)
    }

    pub(crate) fn ensure_traversable(&self, operation: &'static str) -> Result<(), SeqError> {
        match self.extent() {
            Extent::Infinite => Err(SeqError::invalid_operation(operation, Extent::Infinite)),
            Extent::Unknown => {
                tracing::debug!(
                    operation,
                    "full traversal of a sequence with unknown extent"
                );
                Ok(())
            }
            Extent::Exact(_) | Extent::AtMost(_) => Ok(()),
        }
    }
}

/// Upper bound on the up-front allocation made by `to_list`.
const PREALLOCATE_MAX: usize = 4096;

/// Cursor state for [`Seq::cycle`].
struct Restart<T> {
    src: Seq<T>,
    current: Cursor<T>,
    produced_this_pass: bool,
}

impl<T: 'static> Iterator for Restart<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        loop {
            if let Some(item) = self.current.next() {
                self.produced_this_pass = true;
                return Some(item);
            }
            if !self.produced_this_pass {
                return None;
            }
            self.current = self.src.cursor();
            self.produced_this_pass = false;
        }
    }
}
