//! Partial application of [`take_last_while()`]: fix the predicate now, supply
//! the input later.
use crate::sequence::Sequence;
use crate::take_last_while::{take_last_while, try_take_last_while};
use std::fmt;
use takelast_verdict::Verdict;

/// A predicate awaiting inputs to take trailing runs from.
///
/// Unlike [`take_last_while_fn()`], a single `TakeLastWhile` can be applied to
/// inputs of different kinds, as long as their elements are what the
/// predicate accepts.
///
/// # Example
///
/// ```
/// # use takelast::curry::TakeLastWhile;
/// let mut word = TakeLastWhile::new(|c: &char| !c.is_whitespace());
/// assert_eq!(word.apply("hello world"), "world");
/// assert_eq!(word.apply(String::from("foo\tbar")), "bar");
/// ```
#[derive(Clone, Copy)]
pub struct TakeLastWhile<P> {
    predicate: P,
}

impl<P> TakeLastWhile<P> {
    pub fn new(predicate: P) -> Self {
        TakeLastWhile { predicate }
    }

    /// Equivalent to `take_last_while(predicate, input)`
    pub fn apply<S, V>(&mut self, input: S) -> S::Output
    where
        S: Sequence,
        P: FnMut(&S::Elem) -> V,
        V: Verdict,
    {
        take_last_while(&mut self.predicate, input)
    }

    /// Equivalent to `try_take_last_while(predicate, input)`
    ///
    /// # Errors
    ///
    /// Returns the first error produced by the predicate, unchanged.
    pub fn try_apply<S, V, E>(&mut self, input: S) -> Result<S::Output, E>
    where
        S: Sequence,
        P: FnMut(&S::Elem) -> Result<V, E>,
        V: Verdict,
    {
        try_take_last_while(&mut self.predicate, input)
    }

    pub fn into_inner(self) -> P {
        self.predicate
    }
}

impl<P> fmt::Debug for TakeLastWhile<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TakeLastWhile").finish_non_exhaustive()
    }
}

/// Returns a function that calls [`take_last_while()`] with `predicate` on
/// each input it's given.  Useful in iterator pipelines.
///
/// # Example
///
/// ```
/// # use takelast::curry::take_last_while_fn;
/// let extensions = ["a.tar.gz", "README", "lib.rs"]
///     .into_iter()
///     .map(take_last_while_fn::<&str, _, _>(|&c| c != '.'))
///     .collect::<Vec<_>>();
/// assert_eq!(extensions, ["gz", "README", "rs"]);
/// ```
pub fn take_last_while_fn<S, P, V>(mut predicate: P) -> impl FnMut(S) -> S::Output
where
    S: Sequence,
    P: FnMut(&S::Elem) -> V,
    V: Verdict,
{
    move |input| take_last_while(&mut predicate, input)
}
