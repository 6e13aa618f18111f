//! Suspension sequences and the do-notation interpreter.
//!
//! A [`Routine`] is a chain of suspension points. Each point carries exactly
//! one [`Yielded`] item and a continuation that accepts exactly one resumed
//! value. [`interpret`] drives the chain one step at a time, asking the
//! yielded container (through [`ShortCircuit`]) whether to resume with the
//! unwrapped value or to abort the whole routine with a failure.
//!
//! Every container in the crate is driven by this one loop; they differ only
//! in their `ShortCircuit` policy:
//!
//! | Container | Failure | Aborts on |
//! |---|---|---|
//! | `Identity` | `Infallible` | never |
//! | `Maybe` / `Option` | `()` | absence |
//! | `Outcome` / `Result` | `E` | `Err(e)` |
//! | `IO` | `Infallible` | never, but executes each yielded IO |
//!
//! # Examples
//!
//! ```rust
//! use monads::control::{Maybe, Routine, interpret};
//!
//! let routine: Routine<Maybe<i32>> = Routine::bind(Maybe::some(2), |x| {
//!     Routine::bind(Maybe::<i32>::none(), move |y| Routine::pure(x + y))
//! });
//!
//! assert!(interpret(routine).is_none());
//! ```
//!
//! The `routine!` macro writes the same chain in a flat, imperative layout.

use std::fmt;

// =============================================================================
// Step Outcome and Failure Policy
// =============================================================================

/// The result of evaluating one suspension point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Flow<F, T> {
    /// Resume the routine with the unwrapped value.
    Continue(T),
    /// Stop the routine; the failure becomes the final result.
    Abort(F),
}

impl<F, T> Flow<F, T> {
    /// Returns `true` for [`Flow::Continue`].
    #[inline]
    pub const fn is_continue(&self) -> bool {
        matches!(self, Self::Continue(_))
    }

    /// Returns `true` for [`Flow::Abort`].
    #[inline]
    pub const fn is_abort(&self) -> bool {
        matches!(self, Self::Abort(_))
    }
}

/// The failure-tag capability the interpreter is parameterized by.
///
/// `inspect` splits a container into "resume with this value" or "abort with
/// this failure"; `succeed` and `fail` rebuild a container from either side.
/// `Family` names the container kind with its value type erased, so a routine
/// can yield `Maybe<&str>` and still finish as `Maybe<usize>`, but can never
/// yield an `Outcome` while producing a `Maybe`.
pub trait ShortCircuit: Sized {
    /// The value a successful container resumes the routine with.
    type Value;
    /// The payload of a short-circuit.
    type Failure;
    /// The container kind, independent of `Value`.
    type Family;

    /// Splits the container into a continue or abort decision.
    fn inspect(self) -> Flow<Self::Failure, Self::Value>;

    /// Wraps a plain value as a successful container.
    fn succeed(value: Self::Value) -> Self;

    /// Builds the container representing `failure`.
    fn fail(failure: Self::Failure) -> Self;
}

// =============================================================================
// Yielded Items
// =============================================================================

/// The tag carried by a suspension point or a routine's final value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Yielded<M: ShortCircuit> {
    /// A plain value; it is never a failure.
    Raw(M::Value),
    /// A container, subject to the failure policy.
    Wrapped(M),
}

impl<M: ShortCircuit> Yielded<M> {
    /// Turns the item into a container, wrapping raw values with `succeed`.
    #[inline]
    pub fn into_container(self) -> M {
        match self {
            Self::Raw(value) => M::succeed(value),
            Self::Wrapped(container) => container,
        }
    }

    /// Evaluates the item against the failure policy.
    #[inline]
    pub fn inspect(self) -> Flow<M::Failure, M::Value> {
        match self {
            Self::Raw(value) => Flow::Continue(value),
            Self::Wrapped(container) => container.inspect(),
        }
    }
}

// =============================================================================
// Routine
// =============================================================================

trait Step<N: ShortCircuit> {
    fn resume(self: Box<Self>) -> Flow<N::Failure, Routine<N>>;
}

struct Suspended<M: ShortCircuit, F> {
    yielded: Yielded<M>,
    resume: F,
}

impl<M, N, F> Step<N> for Suspended<M, F>
where
    M: ShortCircuit<Failure = N::Failure>,
    N: ShortCircuit,
    F: FnOnce(M::Value) -> Routine<N>,
{
    fn resume(self: Box<Self>) -> Flow<N::Failure, Routine<N>> {
        let Self { yielded, resume } = *self;
        match yielded.inspect() {
            Flow::Continue(value) => Flow::Continue(resume(value)),
            Flow::Abort(failure) => Flow::Abort(failure),
        }
    }
}

struct Resumed<V, F> {
    value: V,
    resume: F,
}

impl<V, N, F> Step<N> for Resumed<V, F>
where
    N: ShortCircuit,
    F: FnOnce(V) -> Routine<N>,
{
    fn resume(self: Box<Self>) -> Flow<N::Failure, Routine<N>> {
        let Self { value, resume } = *self;
        Flow::Continue(resume(value))
    }
}

/// A suspension point whose yielded item has been type-erased.
///
/// Each suspension may yield a different value type; only the final
/// container type `N` is fixed for the whole routine.
#[doc(hidden)]
pub struct Suspension<N: ShortCircuit>(Box<dyn Step<N>>);

/// A do-notation routine producing a container of type `N`.
///
/// Build it with [`Routine::bind`], [`Routine::bind_raw`] and
/// [`Routine::suspend`] for suspension points, and [`Routine::done`] or
/// [`Routine::pure`] for the final value. Nothing runs until the routine is
/// handed to [`interpret`] (or a container's `perform`).
pub enum Routine<N: ShortCircuit> {
    /// Waiting on one yielded item.
    Suspend(Suspension<N>),
    /// Finished.
    Return(Yielded<N>),
}

impl<N: ShortCircuit> Routine<N> {
    /// Suspends on a tagged item.
    pub fn suspend<M, F>(yielded: Yielded<M>, resume: F) -> Self
    where
        M: ShortCircuit<Failure = N::Failure, Family = N::Family> + 'static,
        M::Value: 'static,
        F: FnOnce(M::Value) -> Self + 'static,
    {
        Self::Suspend(Suspension(Box::new(Suspended { yielded, resume })))
    }

    /// Suspends on a container: resumes with its value or aborts with its failure.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monads::control::{Maybe, Routine, interpret};
    ///
    /// let routine: Routine<Maybe<usize>> =
    ///     Routine::bind(Maybe::some("abc"), |text| Routine::pure(text.len()));
    /// assert_eq!(interpret(routine), Maybe::some(3));
    /// ```
    pub fn bind<M, F>(container: M, resume: F) -> Self
    where
        M: ShortCircuit<Failure = N::Failure, Family = N::Family> + 'static,
        M::Value: 'static,
        F: FnOnce(M::Value) -> Self + 'static,
    {
        Self::suspend(Yielded::Wrapped(container), resume)
    }

    /// Suspends on a plain value, which always resumes.
    pub fn bind_raw<V, F>(value: V, resume: F) -> Self
    where
        V: 'static,
        F: FnOnce(V) -> Self + 'static,
    {
        Self::Suspend(Suspension(Box::new(Resumed { value, resume })))
    }

    /// Finishes with a container, returned as is.
    #[inline]
    pub const fn done(container: N) -> Self {
        Self::Return(Yielded::Wrapped(container))
    }

    /// Finishes with a plain value, wrapped as a success.
    #[inline]
    pub const fn pure(value: N::Value) -> Self {
        Self::Return(Yielded::Raw(value))
    }

    /// Returns `true` if the routine has reached its final value.
    #[inline]
    pub const fn is_finished(&self) -> bool {
        matches!(self, Self::Return(_))
    }
}

impl<N: ShortCircuit> fmt::Debug for Routine<N> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Suspend(_) => formatter.write_str("<Suspend>"),
            Self::Return(_) => formatter.write_str("<Return>"),
        }
    }
}

// =============================================================================
// Interpreter
// =============================================================================

/// Drives a routine to its final container.
///
/// Each suspension is evaluated once, in order. The first abort returns
/// `N::fail(failure)` and drops the remaining continuation, so no later step
/// runs. The loop is iterative: long routines do not grow the call stack.
#[cfg_attr(not(feature = "tracing"), allow(unused_variables, unused_assignments))]
pub fn interpret<N: ShortCircuit>(routine: Routine<N>) -> N {
    let mut current = routine;
    let mut steps: usize = 0;

    loop {
        match current {
            Routine::Return(last) => {
                #[cfg(feature = "tracing")]
                tracing::trace!(steps, "routine completed");
                return last.into_container();
            }
            Routine::Suspend(Suspension(step)) => {
                steps += 1;
                match step.resume() {
                    Flow::Continue(next) => current = next,
                    Flow::Abort(failure) => {
                        #[cfg(feature = "tracing")]
                        tracing::debug!(steps, "routine short-circuited");
                        return N::fail(failure);
                    }
                }
            }
        }
    }
}

/// Builds a routine with one suspension per item, collecting the unwrapped
/// values in order and finishing with `finish(values)`.
///
/// This is the sequence combinator each container's `sequence` is made of.
///
/// # Examples
///
/// ```rust
/// use monads::control::{Maybe, collect, interpret};
///
/// let present = collect(vec![Maybe::some(1), Maybe::some(2)].into_iter(), Maybe::some);
/// assert_eq!(interpret(present), Maybe::some(vec![1, 2]));
///
/// let gap = collect(vec![Maybe::some(1), Maybe::none()].into_iter(), Maybe::some);
/// assert_eq!(interpret(gap), Maybe::none());
/// ```
pub fn collect<M, N, I, F>(items: I, finish: F) -> Routine<N>
where
    M: ShortCircuit<Failure = N::Failure, Family = N::Family> + 'static,
    M::Value: 'static,
    N: ShortCircuit,
    I: Iterator<Item = M> + 'static,
    F: FnOnce(Vec<M::Value>) -> N + 'static,
{
    let collected = Vec::with_capacity(items.size_hint().0);
    collect_into(items, collected, finish)
}

fn collect_into<M, N, I, F>(mut items: I, mut collected: Vec<M::Value>, finish: F) -> Routine<N>
where
    M: ShortCircuit<Failure = N::Failure, Family = N::Family> + 'static,
    M::Value: 'static,
    N: ShortCircuit,
    I: Iterator<Item = M> + 'static,
    F: FnOnce(Vec<M::Value>) -> N + 'static,
{
    match items.next() {
        Some(item) => Routine::bind(item, move |value| {
            collected.push(value);
            collect_into(items, collected, finish)
        }),
        None => Routine::done(finish(collected)),
    }
}
