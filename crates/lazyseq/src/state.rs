//! State threading without shared mutable state.
//!
//! A stateful computation is a pure function from the prior state to the
//! next one. Sequencing is composition: state transitions take ownership of
//! the state and return the new state, and a run is a fold of those
//! transitions over a sequence of commands.

use std::fmt;
use std::rc::Rc;

use crate::error::SeqError;
use crate::seq::Seq;

/// Point-free composition: `x -> g(f(x))`.
pub fn compose<A, B, C>(f: impl Fn(A) -> B, g: impl Fn(B) -> C) -> impl Fn(A) -> C {
    move |x| g(f(x))
}

// ============================================================================
// Transition
// ============================================================================

/// A reusable `S -> S` state transition.
///
/// Composed transitions keep their steps in a flat list and apply them in a
/// loop, so composing many steps never deepens the call stack.
pub struct Transition<S> {
    steps: Rc<[Rc<dyn Fn(S) -> S>]>,
}

impl<S> Clone for Transition<S> {
    fn clone(&self) -> Self {
        Self {
            steps: Rc::clone(&self.steps),
        }
    }
}

impl<S> fmt::Debug for Transition<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Transition")
            .field("steps", &self.steps.len())
            .finish()
    }
}

impl<S: 'static> Transition<S> {
    /// Wraps a single step.
    pub fn new(step: impl Fn(S) -> S + 'static) -> Self {
        let step: Rc<dyn Fn(S) -> S> = Rc::new(step);
        Self {
            steps: Rc::from(vec![step]),
        }
    }

    /// The transition that leaves the state unchanged.
    pub fn identity() -> Self {
        Self {
            steps: Rc::from(Vec::new()),
        }
    }

    /// `self`, then `next`.
    pub fn then(&self, next: &Transition<S>) -> Self {
        let steps: Vec<_> = self.steps.iter().chain(next.steps.iter()).cloned().collect();
        Self {
            steps: steps.into(),
        }
    }

    /// Runs the transition from `state`.
    pub fn apply(&self, state: S) -> S {
        self.steps.iter().fold(state, |state, step| step(state))
    }

    /// Number of primitive steps in this transition.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Returns true for the identity transition.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Composes a finite sequence of transitions, first element first.
    pub fn sequence(transitions: &Seq<Transition<S>>) -> Result<Self, SeqError> {
        transitions.ensure_traversable("compose")?;
        let steps: Vec<_> = transitions
            .cursor()
            .flat_map(|t| t.steps.iter().cloned().collect::<Vec<_>>())
            .collect();
        Ok(Self {
            steps: steps.into(),
        })
    }
}

// ============================================================================
// Runs
// ============================================================================

/// Threads `initial` through `step` once per command and returns the final
/// state.
///
/// Refused for infinite command sequences.
pub fn run_state<S, C, F>(commands: &Seq<C>, initial: S, step: F) -> Result<S, SeqError>
where
    C: 'static,
    F: FnMut(S, C) -> S,
{
    commands.fold_left(initial, step)
}

/// Every state a run passes through, starting with `initial`.
///
/// Lazy, so it can follow an infinite command sequence.
pub fn trajectory<S, C, F>(commands: &Seq<C>, initial: S, step: F) -> Seq<S>
where
    S: Clone + 'static,
    C: 'static,
    F: Fn(&S, C) -> S + 'static,
{
    commands.scan(initial, step)
}
