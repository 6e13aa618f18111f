//! IO Monad - Deferred side effect handling.
//!
//! The `IO` type represents a computation that may perform side effects.
//! Side effects are not executed until `exec` is called: building and
//! composing an `IO` never runs the wrapped effect.
//!
//! # Design Philosophy
//!
//! IO "describes" side effects but doesn't "execute" them. Execution happens
//! only via `exec`, which should be called at the program's "edge"
//! (e.g., in the `main` function). Unlike a one-shot thunk, an `IO` can be
//! executed any number of times; every call runs the effect again.
//!
//! # Examples
//!
//! ```rust
//! use monads::effect::IO;
//!
//! let io = IO::pure(10)
//!     .map(|x| x * 2)
//!     .flat_map(|x| IO::pure(x + 1));
//! assert_eq!(io.exec(), 21);
//! ```
//!
//! # Side Effect Deferral
//!
//! ```rust
//! use monads::effect::IO;
//! use std::cell::Cell;
//! use std::rc::Rc;
//!
//! let counter = Rc::new(Cell::new(0));
//! let handle = Rc::clone(&counter);
//!
//! let io = IO::new(move || handle.set(handle.get() + 1)).map(|()| "done");
//!
//! // Not executed yet
//! assert_eq!(counter.get(), 0);
//!
//! assert_eq!(io.exec(), "done");
//! assert_eq!(counter.get(), 1);
//!
//! // Executing again re-runs the effect
//! io.exec();
//! assert_eq!(counter.get(), 2);
//! ```
//!
//! # Faults
//!
//! A panic raised by the effect propagates out of `exec` unchanged. To
//! observe it as a value, execute inside `Outcome::catch_panic`:
//!
//! ```rust
//! use monads::control::Outcome;
//! use monads::effect::IO;
//!
//! let failing = IO::new(|| -> i32 { panic!("disk on fire") });
//! let observed = Outcome::catch_panic(|| failing.exec());
//! assert!(observed.is_err());
//! ```

use std::convert::Infallible;
use std::fmt;
use std::rc::Rc;

use crate::control::{Flow, Routine, ShortCircuit, collect, interpret};
use crate::typeclass::TypeConstructor;

/// A monad representing deferred, repeatable side effects.
///
/// `IO<A>` wraps a computation that produces a value of type `A` and may
/// perform side effects. Cloning an `IO` shares the same effect.
///
/// # Type Parameters
///
/// - `A`: The type of the value produced by the IO action.
///
/// # Monad Laws
///
/// `IO` satisfies the monad laws, compared by the values `exec` produces:
///
/// 1. **Left Identity**: `IO::pure(a).flat_map(f) == f(a)`
/// 2. **Right Identity**: `m.flat_map(IO::pure) == m`
/// 3. **Associativity**: `m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))`
pub struct IO<A> {
    effect: Rc<dyn Fn() -> A>,
}

impl<A: 'static> IO<A> {
    /// Creates a new IO action from a closure.
    ///
    /// The closure will not be executed until `exec` is called.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monads::effect::IO;
    ///
    /// let io = IO::new(|| 40 + 2);
    /// assert_eq!(io.exec(), 42);
    /// ```
    pub fn new<F>(effect: F) -> Self
    where
        F: Fn() -> A + 'static,
    {
        Self {
            effect: Rc::new(effect),
        }
    }

    /// Alias for [`IO::new`].
    #[inline]
    pub fn of<F>(effect: F) -> Self
    where
        F: Fn() -> A + 'static,
    {
        Self::new(effect)
    }

    /// Executes the IO action and returns the result.
    ///
    /// Each call runs the wrapped effect again; nothing is memoized.
    pub fn exec(&self) -> A {
        (self.effect)()
    }

    /// Transforms the result of an IO action using a function.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monads::effect::IO;
    ///
    /// let io = IO::new(|| "Hello").map(|x| format!("{x} world!"));
    /// assert_eq!(io.exec(), "Hello world!");
    /// ```
    pub fn map<B, F>(self, function: F) -> IO<B>
    where
        F: Fn(A) -> B + 'static,
        B: 'static,
    {
        IO::new(move || function(self.exec()))
    }

    /// Chains IO actions, passing the result of the first to a function
    /// that produces the second.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monads::effect::IO;
    ///
    /// let io = IO::pure(10).flat_map(|x| IO::pure(x * 2));
    /// assert_eq!(io.exec(), 20);
    /// ```
    pub fn flat_map<B, F>(self, function: F) -> IO<B>
    where
        F: Fn(A) -> IO<B> + 'static,
        B: 'static,
    {
        IO::new(move || function(self.exec()).exec())
    }

    /// Alias for `flat_map`.
    pub fn and_then<B, F>(self, function: F) -> IO<B>
    where
        F: Fn(A) -> IO<B> + 'static,
        B: 'static,
    {
        self.flat_map(function)
    }

    /// Sequences two IO actions, discarding the result of the first.
    ///
    /// The first action is still executed for its side effects.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monads::effect::IO;
    ///
    /// let io = IO::pure(10).then(IO::pure(20));
    /// assert_eq!(io.exec(), 20);
    /// ```
    pub fn then<B>(self, next: IO<B>) -> IO<B>
    where
        B: 'static,
    {
        IO::new(move || {
            self.exec();
            next.exec()
        })
    }

    /// Combines two IO actions using a function, executing `self` first.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monads::effect::IO;
    ///
    /// let io = IO::pure(10).map2(IO::pure(20), |a, b| a + b);
    /// assert_eq!(io.exec(), 30);
    /// ```
    pub fn map2<B, C, F>(self, other: IO<B>, function: F) -> IO<C>
    where
        F: Fn(A, B) -> C + 'static,
        B: 'static,
        C: 'static,
    {
        IO::new(move || {
            let first = self.exec();
            function(first, other.exec())
        })
    }

    /// Combines two IO actions into a tuple.
    pub fn product<B>(self, other: IO<B>) -> IO<(A, B)>
    where
        B: 'static,
    {
        self.map2(other, |a, b| (a, b))
    }
}

impl<A: Clone + 'static> IO<A> {
    /// Wraps a constant in an IO action that performs no side effect.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monads::effect::IO;
    ///
    /// let io = IO::pure(42);
    /// assert_eq!(io.exec(), 42);
    /// assert_eq!(io.exec(), 42);
    /// ```
    pub fn pure(value: A) -> Self {
        Self::new(move || value.clone())
    }

    /// Builds an IO from a do-notation routine.
    ///
    /// Nothing runs when `perform` is called. Each `exec` of the returned IO
    /// builds a fresh routine, executes every yielded IO in order, and then
    /// executes the final one.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monads::prelude::*;
    /// use std::cell::RefCell;
    /// use std::rc::Rc;
    ///
    /// let log = Rc::new(RefCell::new(Vec::new()));
    /// let sink = Rc::clone(&log);
    /// let say = move |message: &'static str| {
    ///     let sink = Rc::clone(&sink);
    ///     IO::new(move || sink.borrow_mut().push(message))
    /// };
    ///
    /// let program: IO<usize> = IO::perform(move || {
    ///     let say = say.clone();
    ///     routine! {
    ///         _ <= say("Please guess the number");
    ///         guess <= IO::new(|| 5);
    ///         _ <= if guess == 5 { say("Correct!") } else { say("Wrong!") };
    ///         pure 0
    ///     }
    /// });
    ///
    /// assert!(log.borrow().is_empty());
    /// program.exec();
    /// assert_eq!(*log.borrow(), vec!["Please guess the number", "Correct!"]);
    /// ```
    pub fn perform<F>(routine: F) -> Self
    where
        F: Fn() -> Routine<Self> + 'static,
    {
        Self::new(move || interpret(routine()).exec())
    }

    /// Combines IO actions into one that executes each of them in order and
    /// collects their results.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monads::effect::IO;
    ///
    /// let all = IO::sequence(vec![IO::pure(1), IO::new(|| 2), IO::pure(3)]);
    /// assert_eq!(all.exec(), vec![1, 2, 3]);
    /// ```
    pub fn sequence<I>(ios: I) -> IO<Vec<A>>
    where
        I: IntoIterator<Item = Self>,
    {
        let ios: Vec<Self> = ios.into_iter().collect();
        IO::perform(move || collect(ios.clone().into_iter(), IO::pure))
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

impl<A> Clone for IO<A> {
    fn clone(&self) -> Self {
        Self {
            effect: Rc::clone(&self.effect),
        }
    }
}

impl<A: Clone + 'static> From<A> for IO<A> {
    fn from(value: A) -> Self {
        Self::pure(value)
    }
}

impl<A> TypeConstructor for IO<A> {
    type Inner = A;
    type WithType<B> = IO<B>;
}

impl<A> fmt::Display for IO<A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("<IO>")
    }
}

impl<A> fmt::Debug for IO<A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("IO(<deferred>)")
    }
}

/// Yielding an IO inside a routine executes it and resumes with its result.
impl<A: Clone + 'static> ShortCircuit for IO<A> {
    type Value = A;
    type Failure = Infallible;
    type Family = IO<()>;

    fn inspect(self) -> Flow<Infallible, A> {
        Flow::Continue(self.exec())
    }

    fn succeed(value: A) -> Self {
        Self::pure(value)
    }

    fn fail(failure: Infallible) -> Self {
        match failure {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routine;
    use rstest::rstest;
    use static_assertions::assert_not_impl_any;
    use std::cell::Cell;

    assert_not_impl_any!(IO<i32>: Send, Sync);

    fn counting() -> (Rc<Cell<u32>>, IO<u32>) {
        let counter = Rc::new(Cell::new(0));
        let handle = Rc::clone(&counter);
        let io = IO::new(move || {
            handle.set(handle.get() + 1);
            handle.get()
        });
        (counter, io)
    }

    #[rstest]
    fn pure_and_exec() {
        assert_eq!(IO::pure(42).exec(), 42);
    }

    #[rstest]
    fn of_is_new() {
        assert_eq!(IO::of(|| 10 + 20).exec(), 30);
    }

    #[rstest]
    fn from_wraps_constant() {
        let io: IO<&str> = IO::from("constant");
        assert_eq!(io.exec(), "constant");
    }

    #[rstest]
    #[case(0, 0)]
    #[case(1, 1)]
    #[case(3, 3)]
    fn composition_never_runs_effect_eagerly(#[case] executions: u32, #[case] expected: u32) {
        let (counter, io) = counting();
        let composed = io.map(|x| x * 2).flat_map(IO::pure);
        for _ in 0..executions {
            composed.exec();
        }
        assert_eq!(counter.get(), expected);
    }

    #[rstest]
    fn clone_shares_effect() {
        let (counter, io) = counting();
        let copy = io.clone();
        io.exec();
        copy.exec();
        assert_eq!(counter.get(), 2);
    }

    #[rstest]
    fn then_runs_both() {
        let (counter, io) = counting();
        assert_eq!(io.then(IO::pure("next")).exec(), "next");
        assert_eq!(counter.get(), 1);
    }

    #[rstest]
    fn map2_and_product() {
        assert_eq!(IO::pure(10).map2(IO::pure(20), |a, b| a + b).exec(), 30);
        assert_eq!(IO::pure(1).product(IO::pure("a")).exec(), (1, "a"));
    }

    #[rstest]
    fn display_and_debug() {
        assert_eq!(IO::pure(1).to_string(), "<IO>");
        assert_eq!(format!("{:?}", IO::pure(1)), "IO(<deferred>)");
    }

    #[rstest]
    fn perform_is_deferred_and_repeatable() {
        let (counter, tick) = counting();
        let program: IO<u32> = IO::perform(move || {
            let tick = tick.clone();
            routine! {
                a <= tick.clone();
                b <= tick;
                pure a + b
            }
        });

        assert_eq!(counter.get(), 0);
        assert_eq!(program.exec(), 1 + 2);
        assert_eq!(program.exec(), 3 + 4);
        assert_eq!(counter.get(), 4);
    }

    #[rstest]
    fn perform_executes_final_io() {
        let (counter, tick) = counting();
        let program: IO<u32> = IO::perform(move || {
            let tick = tick.clone();
            routine! {
                _ <= IO::pure(());
                tick
            }
        });
        assert_eq!(program.exec(), 1);
        assert_eq!(counter.get(), 1);
    }

    #[rstest]
    fn sequence_runs_in_order_once_per_exec() {
        let (counter, tick) = counting();
        let all = IO::sequence(vec![tick.clone(), tick.clone(), tick]);

        assert_eq!(counter.get(), 0);
        assert_eq!(all.exec(), vec![1, 2, 3]);
        assert_eq!(counter.get(), 3);
    }
}
