use crate::sequence::Sequence;
use crate::take_last_while as tlw;
use takelast_verdict::Verdict;

/// Method syntax for the functions in [`mod@crate::take_last_while`]
///
/// # Example
///
/// ```
/// use takelast::ext::TakeLastWhileExt;
/// assert_eq!("abc123".take_last_while(char::is_ascii_digit), "123");
/// assert_eq!([1, 2, 3, 4].as_slice().split_last_while(|&x| x > 2), (&[1, 2][..], &[3, 4][..]));
/// ```
pub trait TakeLastWhileExt: Sequence {
    /// Returns the maximal trailing run for which `predicate` does not return
    /// `false`
    fn take_last_while<P, V>(self, predicate: P) -> Self::Output
    where
        P: FnMut(&Self::Elem) -> V,
        V: Verdict,
    {
        tlw::take_last_while(predicate, self)
    }

    /// Divide into the prefix and the trailing run for which `predicate` does
    /// not return `false`
    fn split_last_while<P, V>(self, predicate: P) -> (Self::Output, Self::Output)
    where
        P: FnMut(&Self::Elem) -> V,
        V: Verdict,
    {
        tlw::split_last_while(predicate, self)
    }

    /// # Errors
    ///
    /// Returns the first error produced by `predicate`, unchanged.
    fn try_take_last_while<P, V, E>(self, predicate: P) -> Result<Self::Output, E>
    where
        P: FnMut(&Self::Elem) -> Result<V, E>,
        V: Verdict,
    {
        tlw::try_take_last_while(predicate, self)
    }

    /// # Errors
    ///
    /// Returns the first error produced by `predicate`, unchanged.
    fn try_split_last_while<P, V, E>(self, predicate: P) -> Result<(Self::Output, Self::Output), E>
    where
        P: FnMut(&Self::Elem) -> Result<V, E>,
        V: Verdict,
    {
        tlw::try_split_last_while(predicate, self)
    }
}

impl<S: Sequence> TakeLastWhileExt for S {}
