//! Input kinds accepted by [`take_last_while()`][crate::take_last_while::take_last_while]
//!
//! Element sequences (slices, arrays, vectors) hand each element to the
//! predicate by reference and produce slices or vectors.  Text (`str` and
//! `String`) hands each `char` to the predicate by reference and produces
//! string slices or strings.

/// An ordered sequence whose trailing run can be split off.
pub trait Sequence: Sized {
    /// The type of the values the predicate is called on
    type Elem;

    /// The type of the prefix & trailing run produced from this input.  This
    /// is always the same kind of container as the input: an element
    /// sequence for element sequences, text for text.
    type Output;

    /// Scan the sequence from the end backwards, calling `predicate` on each
    /// element until it returns `Ok(false)`, and return the index at which the
    /// trailing run of accepted elements begins.  For text, the index is a
    /// byte offset on a `char` boundary.
    ///
    /// If the sequence is empty, `predicate` is not called and the return
    /// value is zero.
    ///
    /// # Errors
    ///
    /// The first `Err` returned by `predicate` is returned as-is, and no
    /// further elements are examined.
    fn run_start<P, E>(&self, predicate: P) -> Result<usize, E>
    where
        P: FnMut(&Self::Elem) -> Result<bool, E>;

    /// Divide the sequence at index `at`, as returned by
    /// [`run_start()`][Sequence::run_start], into the prefix and the trailing
    /// run.  If `at` is zero, the trailing run is the input itself.
    fn split_at_run(self, at: usize) -> (Self::Output, Self::Output);
}

fn slice_run_start<T, P, E>(items: &[T], mut predicate: P) -> Result<usize, E>
where
    P: FnMut(&T) -> Result<bool, E>,
{
    let mut start = items.len();
    for item in items.iter().rev() {
        if !predicate(item)? {
            break;
        }
        start -= 1;
    }
    Ok(start)
}

fn text_run_start<P, E>(s: &str, mut predicate: P) -> Result<usize, E>
where
    P: FnMut(&char) -> Result<bool, E>,
{
    let mut start = s.len();
    for (i, ch) in s.char_indices().rev() {
        if !predicate(&ch)? {
            break;
        }
        start = i;
    }
    Ok(start)
}

impl<'a, T> Sequence for &'a [T] {
    type Elem = T;
    type Output = &'a [T];

    fn run_start<P, E>(&self, predicate: P) -> Result<usize, E>
    where
        P: FnMut(&T) -> Result<bool, E>,
    {
        slice_run_start(*self, predicate)
    }

    fn split_at_run(self, at: usize) -> (&'a [T], &'a [T]) {
        self.split_at(at)
    }
}

impl<'a, T, const N: usize> Sequence for &'a [T; N] {
    type Elem = T;
    type Output = &'a [T];

    fn run_start<P, E>(&self, predicate: P) -> Result<usize, E>
    where
        P: FnMut(&T) -> Result<bool, E>,
    {
        slice_run_start(self.as_slice(), predicate)
    }

    fn split_at_run(self, at: usize) -> (&'a [T], &'a [T]) {
        self.as_slice().split_at(at)
    }
}

impl<'a, T> Sequence for &'a Vec<T> {
    type Elem = T;
    type Output = &'a [T];

    fn run_start<P, E>(&self, predicate: P) -> Result<usize, E>
    where
        P: FnMut(&T) -> Result<bool, E>,
    {
        slice_run_start(self.as_slice(), predicate)
    }

    fn split_at_run(self, at: usize) -> (&'a [T], &'a [T]) {
        self.as_slice().split_at(at)
    }
}

impl<T> Sequence for Vec<T> {
    type Elem = T;
    type Output = Vec<T>;

    fn run_start<P, E>(&self, predicate: P) -> Result<usize, E>
    where
        P: FnMut(&T) -> Result<bool, E>,
    {
        slice_run_start(self.as_slice(), predicate)
    }

    fn split_at_run(mut self, at: usize) -> (Vec<T>, Vec<T>) {
        if at == 0 {
            (Vec::new(), self)
        } else {
            let run = self.split_off(at);
            (self, run)
        }
    }
}

impl<'a> Sequence for &'a str {
    type Elem = char;
    type Output = &'a str;

    fn run_start<P, E>(&self, predicate: P) -> Result<usize, E>
    where
        P: FnMut(&char) -> Result<bool, E>,
    {
        text_run_start(*self, predicate)
    }

    fn split_at_run(self, at: usize) -> (&'a str, &'a str) {
        self.split_at(at)
    }
}

impl<'a> Sequence for &'a String {
    type Elem = char;
    type Output = &'a str;

    fn run_start<P, E>(&self, predicate: P) -> Result<usize, E>
    where
        P: FnMut(&char) -> Result<bool, E>,
    {
        text_run_start(self.as_str(), predicate)
    }

    fn split_at_run(self, at: usize) -> (&'a str, &'a str) {
        self.as_str().split_at(at)
    }
}

impl Sequence for String {
    type Elem = char;
    type Output = String;

    fn run_start<P, E>(&self, predicate: P) -> Result<usize, E>
    where
        P: FnMut(&char) -> Result<bool, E>,
    {
        text_run_start(self.as_str(), predicate)
    }

    fn split_at_run(mut self, at: usize) -> (String, String) {
        if at == 0 {
            (String::new(), self)
        } else {
            let run = self.split_off(at);
            (self, run)
        }
    }
}
