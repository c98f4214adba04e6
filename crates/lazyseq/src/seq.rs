//! The lazy sequence core.
//!
//! A [`Seq`] is a reusable *description* of an ordered production of values.
//! It never holds produced elements. Each traversal opens its own [`Cursor`],
//! which owns the generation state for that traversal and nothing else, so
//! two consumers of the same sequence observe the same elements without
//! interfering with each other.
//!
//! Suspension is explicit: producing element *i* happens inside
//! [`Cursor::next`], never while a sequence is being composed.

use std::fmt;
use std::rc::Rc;

use crate::error::SeqError;
use crate::extent::Extent;

// ============================================================================
// Cursor
// ============================================================================

/// Per-traversal state of a sequence.
///
/// A cursor only moves forward. Dropping it abandons the traversal; there is
/// nothing to clean up.
pub struct Cursor<T> {
    inner: Box<dyn Iterator<Item = T>>,
    position: usize,
    /// Leading elements still to be skipped on the first pull.
    skip: usize,
}

impl<T> Cursor<T> {
    pub(crate) fn new(inner: impl Iterator<Item = T> + 'static) -> Self {
        Self {
            inner: Box::new(inner),
            position: 0,
            skip: 0,
        }
    }

    /// Consumes the pending skip. Returns `None` if the source ended inside it.
    fn skip_pending(&mut self) -> Option<()> {
        let skip = std::mem::take(&mut self.skip);
        if skip > 0 {
            self.inner.nth(skip - 1)?;
        }
        Some(())
    }

    /// Number of elements this cursor has produced so far.
    pub fn position(&self) -> usize {
        self.position
    }
}

impl<T> Iterator for Cursor<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.skip_pending()?;
        let item = self.inner.next()?;
        self.position = self.position.saturating_add(1);
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (low, high) = self.inner.size_hint();
        (
            low.saturating_sub(self.skip),
            high.map(|h| h.saturating_sub(self.skip)),
        )
    }

    fn nth(&mut self, n: usize) -> Option<T> {
        self.skip_pending()?;
        let item = self.inner.nth(n)?;
        self.position = self.position.saturating_add(n).saturating_add(1);
        Some(item)
    }
}

impl<T> fmt::Debug for Cursor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cursor")
            .field("position", &self.position)
            .finish_non_exhaustive()
    }
}

// ============================================================================
// Seq
// ============================================================================

/// A lazy, possibly-infinite, immutable sequence.
///
/// Cloning is cheap: the generation rule is reference counted and shared.
/// Dropping a prefix only moves `offset`, so a chain of `drop` or `uncons`
/// calls never nests producers.
pub struct Seq<T> {
    producer: Rc<dyn Fn() -> Cursor<T>>,
    offset: usize,
    extent: Extent,
}

impl<T> Clone for Seq<T> {
    fn clone(&self) -> Self {
        Self {
            producer: Rc::clone(&self.producer),
            offset: self.offset,
            extent: self.extent,
        }
    }
}

impl<T> fmt::Debug for Seq<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Seq")
            .field("offset", &self.offset)
            .field("extent", &self.extent)
            .finish_non_exhaustive()
    }
}

impl<T: 'static> Seq<T> {
    /// Builds a sequence from a cursor factory and its structural extent.
    ///
    /// The factory is called once per traversal. It must produce the same
    /// elements every time and must not evaluate any element itself.
    pub fn from_fn<I, F>(extent: Extent, open: F) -> Self
    where
        I: Iterator<Item = T> + 'static,
        F: Fn() -> I + 'static,
    {
        Self {
            producer: Rc::new(move || Cursor::new(open())),
            offset: 0,
            extent,
        }
    }

    /// Opens a fresh traversal starting at the first element.
    pub fn cursor(&self) -> Cursor<T> {
        let mut cursor = (self.producer)();
        cursor.skip = self.offset;
        cursor
    }

    /// What is structurally known about the length of this sequence.
    pub fn extent(&self) -> Extent {
        self.extent
    }

    /// Returns true if the sequence is known to end.
    pub fn is_finite(&self) -> bool {
        self.extent.is_finite()
    }

    /// The same rule with `n` more leading elements skipped.
    pub(crate) fn skipped(&self, n: usize) -> Self {
        Self {
            producer: Rc::clone(&self.producer),
            offset: self.offset.saturating_add(n),
            extent: self.extent.dropped(n),
        }
    }

    // ========================================================================
    // Generators
    // ========================================================================

    /// The sequence with no elements.
    pub fn empty() -> Self {
        Self::from_fn(Extent::Exact(0), std::iter::empty)
    }

    /// A single-element sequence.
    pub fn once(value: T) -> Self
    where
        T: Clone,
    {
        Self::from_fn(Extent::Exact(1), move || std::iter::once(value.clone()))
    }

    /// The same value forever.
    pub fn repeat(value: T) -> Self
    where
        T: Clone,
    {
        Self::from_fn(Extent::Infinite, move || std::iter::repeat(value.clone()))
    }

    /// A finite sequence over owned values.
    pub fn from_vec(values: Vec<T>) -> Self
    where
        T: Clone,
    {
        let values: Rc<[T]> = values.into();
        Self::from_fn(Extent::Exact(values.len()), move || {
            let values = Rc::clone(&values);
            (0..values.len()).map(move |i| values[i].clone())
        })
    }

    /// `seed, next(seed), next(next(seed)), ...`
    ///
    /// Never ends. Element *i + 1* is computed only when it is pulled.
    pub fn from_step<F>(seed: T, next: F) -> Self
    where
        T: Clone,
        F: Fn(&T) -> T + 'static,
    {
        let next: Rc<dyn Fn(&T) -> T> = Rc::new(next);
        Self::from_fn(Extent::Infinite, move || Steps {
            seed: Some(seed.clone()),
            last: None,
            next: Rc::clone(&next),
        })
    }

    /// Repeats `values` endlessly.
    ///
    /// The values are stored once and indexed modulo their length.
    pub fn cycle_of(values: impl Into<Vec<T>>) -> Result<Self, SeqError>
    where
        T: Clone,
    {
        let values: Vec<T> = values.into();
        if values.is_empty() {
            return Err(SeqError::invalid_argument(
                "values",
                "cannot cycle an empty collection",
            ));
        }

        let values: Rc<[T]> = values.into();
        Ok(Self::from_fn(Extent::Infinite, move || Ring {
            values: Rc::clone(&values),
            index: 0,
        }))
    }

    /// Builds a sequence from a step function that decides when to stop.
    ///
    /// `step` returns the next element and the next state, or `None` to end.
    /// Whether it ever ends cannot be known ahead of time, so the extent is
    /// [`Extent::Unknown`].
    pub fn unfold<S, F>(seed: S, step: F) -> Self
    where
        S: Clone + 'static,
        F: Fn(S) -> Option<(T, S)> + 'static,
    {
        let step = Rc::new(step);
        Self::from_fn(Extent::Unknown, move || {
            let step = Rc::clone(&step);
            let mut state = Some(seed.clone());
            std::iter::from_fn(move || {
                let (item, next) = step(state.take()?)?;
                state = Some(next);
                Some(item)
            })
        })
    }

    // ========================================================================
    // Element access
    // ========================================================================

    /// The first element, if any.
    pub fn first(&self) -> Option<T> {
        self.cursor().next()
    }

    /// Element `index`, computed without retaining the elements before it.
    pub fn get(&self, index: usize) -> Option<T> {
        if let Some(bound) = self.extent.upper_bound() {
            if index >= bound {
                return None;
            }
        }
        self.cursor().nth(index)
    }

    /// Splits into the first element and the rest of the sequence.
    ///
    /// Returns `None` at end of sequence. The continuation is itself lazy: it
    /// shares the source rule and skips one more element per traversal.
    pub fn uncons(&self) -> Option<(T, Seq<T>)> {
        let head = self.first()?;
        Some((head, self.skipped(1)))
    }
}

impl Seq<i64> {
    /// Consecutive integers in `[start, end)`.
    pub fn from_range(start: i64, end: i64) -> Self {
        let span = (i128::from(end) - i128::from(start)).max(0);
        let len = usize::try_from(span).unwrap_or(usize::MAX);
        Self::from_fn(Extent::Exact(len), move || start..end)
    }

    /// Consecutive integers from `start` upwards.
    ///
    /// Treated as infinite, but the last element is `i64::MAX`.
    pub fn range_from(start: i64) -> Self {
        Self::from_fn(Extent::Infinite, move || start..=i64::MAX)
    }
}

impl<T: 'static> IntoIterator for &Seq<T> {
    type Item = T;
    type IntoIter = Cursor<T>;

    fn into_iter(self) -> Cursor<T> {
        self.cursor()
    }
}

impl<T: Clone + 'static> From<Vec<T>> for Seq<T> {
    fn from(values: Vec<T>) -> Self {
        Self::from_vec(values)
    }
}

// ============================================================================
// Generator state
// ============================================================================

/// Cursor state for [`Seq::from_step`].
///
/// Holds only the last produced element; the successor is computed on pull.
struct Steps<T> {
    seed: Option<T>,
    last: Option<T>,
    next: Rc<dyn Fn(&T) -> T>,
}

impl<T: Clone> Iterator for Steps<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        let item = match self.seed.take() {
            Some(seed) => seed,
            None => (self.next)(self.last.as_ref()?),
        };
        self.last = Some(item.clone());
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

/// Cursor state for [`Seq::cycle_of`]: shared backing values plus an index.
struct Ring<T> {
    values: Rc<[T]>,
    index: usize,
}

impl<T: Clone> Iterator for Ring<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        let item = self.values[self.index].clone();
        self.index = (self.index + 1) % self.values.len();
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }

    fn nth(&mut self, n: usize) -> Option<T> {
        self.index = (self.index + n % self.values.len()) % self.values.len();
        self.next()
    }
}
