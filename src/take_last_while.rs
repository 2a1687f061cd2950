use crate::sequence::Sequence;
use std::convert::Infallible;
use takelast_verdict::Verdict;

/// Returns the maximal trailing run of `input` for which `predicate` does not
/// return the literal `false`, in the same kind of container as `input`.
///
/// `input` is scanned from the end backwards, and the scan stops at the first
/// element for which `predicate` returns `false`; that element and everything
/// before it are left out.  Any other predicate result, including `0`, `""`,
/// `()`, and `None`, counts as acceptance (see [`Verdict`]).  If every element
/// is accepted, the whole of `input` is returned, and if `input` is empty, it
/// is returned without calling `predicate`.
///
/// Borrowed slices & strings produce borrowed suffixes; owned `Vec`s &
/// `String`s are consumed and have their prefix split off.
///
/// # Example
///
/// ```
/// # use takelast::take_last_while::take_last_while;
/// assert_eq!(take_last_while(|&x| x > 2, &[1, 2, 3, 4, 5]), [3, 4, 5]);
/// assert_eq!(take_last_while(|&c| c != ' ', "hello world"), "world");
/// assert_eq!(take_last_while(|&x| x > 2, vec![5, 4, 3, 2, 1]), Vec::<i32>::new());
/// ```
pub fn take_last_while<S, P, V>(predicate: P, input: S) -> S::Output
where
    S: Sequence,
    P: FnMut(&S::Elem) -> V,
    V: Verdict,
{
    split_last_while(predicate, input).1
}

/// Divides `input` in two before the trailing run that
/// [`take_last_while()`] would return and returns both parts.  Concatenating
/// the parts reproduces `input`.
///
/// # Example
///
/// ```
/// # use takelast::take_last_while::split_last_while;
/// assert_eq!(split_last_while(|&c| c != '/', "usr/local/bin"), ("usr/local/", "bin"));
/// assert_eq!(split_last_while(|&c| c != '/', "bin"), ("", "bin"));
/// assert_eq!(split_last_while(|&c| c != '/', "bin/"), ("bin/", ""));
/// ```
pub fn split_last_while<S, P, V>(mut predicate: P, input: S) -> (S::Output, S::Output)
where
    S: Sequence,
    P: FnMut(&S::Elem) -> V,
    V: Verdict,
{
    match try_split_last_while(|elem| Ok::<V, Infallible>(predicate(elem)), input) {
        Ok(parts) => parts,
        Err(never) => match never {},
    }
}

/// Like [`take_last_while()`], but for predicates that can fail.
///
/// # Errors
///
/// If `predicate` returns `Err`, the scan is abandoned and the error is
/// returned unchanged.
///
/// # Example
///
/// ```
/// # use takelast::take_last_while::try_take_last_while;
/// let digits = |&c: &char| c.to_digit(10).map(|d| d > 0).ok_or(c);
/// assert_eq!(try_take_last_while(digits, "10203"), Ok("3"));
/// assert_eq!(try_take_last_while(digits, "1x23"), Err('x'));
/// ```
pub fn try_take_last_while<S, P, V, E>(predicate: P, input: S) -> Result<S::Output, E>
where
    S: Sequence,
    P: FnMut(&S::Elem) -> Result<V, E>,
    V: Verdict,
{
    try_split_last_while(predicate, input).map(|(_, run)| run)
}

/// Like [`split_last_while()`], but for predicates that can fail.
///
/// # Errors
///
/// If `predicate` returns `Err`, the scan is abandoned and the error is
/// returned unchanged.
pub fn try_split_last_while<S, P, V, E>(
    mut predicate: P,
    input: S,
) -> Result<(S::Output, S::Output), E>
where
    S: Sequence,
    P: FnMut(&S::Elem) -> Result<V, E>,
    V: Verdict,
{
    let start = input.run_start(|elem| predicate(elem).map(|v| v.includes()))?;
    log::trace!("Trailing run begins at index {start}");
    Ok(input.split_at_run(start))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use thiserror::Error;

    #[derive(Clone, Copy, Debug, Error, Eq, PartialEq)]
    #[error("predicate refused to look at {0}")]
    struct Refused(i32);

    #[rstest]
    #[case(&[1, 2, 3, 4, 5], &[3, 4, 5])]
    #[case(&[5, 4, 3, 2, 1], &[])]
    #[case(&[3, 4, 5], &[3, 4, 5])]
    #[case(&[], &[])]
    #[case(&[9, 1, 9, 9], &[9, 9])]
    fn above_two(#[case] input: &[i32], #[case] run: &[i32]) {
        assert_eq!(take_last_while(|&x| x > 2, input), run);
    }

    #[rstest]
    #[case("hello world", "world")]
    #[case("hello world ", "")]
    #[case("world", "world")]
    #[case("", "")]
    #[case("caf\u{e9} cr\u{e8}me", "cr\u{e8}me")]
    fn non_space(#[case] input: &str, #[case] run: &str) {
        assert_eq!(take_last_while(|&c| c != ' ', input), run);
    }

    #[test]
    fn only_literal_false_stops() {
        // `!x` is false on the last element, so nothing is taken
        let input = [false, false, true];
        assert!(take_last_while(|&x| !x, &input).is_empty());
        assert_eq!(take_last_while(|&x| x, &input), [true]);
    }

    #[test]
    fn non_bool_results_include_everything() {
        let input = [0, 1, 2];
        assert_eq!(take_last_while(|_| 0, &input), [0, 1, 2]);
        assert_eq!(take_last_while(|_| (), &input), [0, 1, 2]);
        assert_eq!(take_last_while(|_| "", &input), [0, 1, 2]);
        assert_eq!(take_last_while(|_| None::<bool>, &input), [0, 1, 2]);
    }

    #[test]
    fn option_results() {
        let input = [Some(1), None, Some(3), Some(4)];
        let run = take_last_while(|&x| x.map(|n| n > 2), &input);
        assert_eq!(run, [None, Some(3), Some(4)]);
        let run = take_last_while(|&x| x.map(|n| n > 3), &input);
        assert_eq!(run, [Some(4)]);
        let run = take_last_while(|&x| x.map(|n| n > 0), &input);
        assert_eq!(run, input);
    }

    #[test]
    fn owned_vec() {
        let run = take_last_while(|x: &String| x.starts_with('b'), vec![
            String::from("apple"),
            String::from("banana"),
            String::from("blueberry"),
        ]);
        assert_eq!(run, ["banana", "blueberry"]);
    }

    #[test]
    fn owned_string() {
        let s = String::from("x = 42");
        assert_eq!(take_last_while(char::is_ascii_digit, s), "42");
    }

    #[test]
    fn whole_owned_input_is_returned_as_is() {
        let s = String::from("abc");
        let ptr = s.as_ptr();
        let run = take_last_while(char::is_ascii_alphabetic, s);
        assert_eq!(run, "abc");
        assert_eq!(run.as_ptr(), ptr);
    }

    #[test]
    fn empty_input_skips_predicate() {
        let mut calls = 0;
        let run = take_last_while(
            |_: &i32| {
                calls += 1;
                false
            },
            Vec::<i32>::new(),
        );
        assert!(run.is_empty());
        assert_eq!(calls, 0);
    }

    #[test]
    fn input_is_not_mutated() {
        let input = vec![1, 2, 3, 4];
        let run = take_last_while(|&x| x % 2 == 0, &input);
        assert_eq!(run, [4]);
        assert_eq!(input, [1, 2, 3, 4]);
    }

    #[test]
    fn predicate_calls_stop_at_first_false() {
        let mut seen = Vec::new();
        let run = take_last_while(
            |&c| {
                seen.push(c);
                c.is_ascii_digit()
            },
            "ab12",
        );
        assert_eq!(run, "12");
        assert_eq!(seen, ['2', '1', 'b']);
    }

    #[rstest]
    #[case("a/b/c", ("a/b/", "c"))]
    #[case("abc", ("", "abc"))]
    #[case("abc/", ("abc/", ""))]
    #[case("", ("", ""))]
    fn split_on_slash(#[case] input: &str, #[case] parts: (&str, &str)) {
        assert_eq!(split_last_while(|&c| c != '/', input), parts);
    }

    #[test]
    fn split_owned_vec() {
        let (prefix, run) = split_last_while(|&x| x < 10, vec![1, 20, 3, 4]);
        assert_eq!(prefix, [1, 20]);
        assert_eq!(run, [3, 4]);
    }

    #[test]
    fn try_error_propagates_unchanged() {
        let r = try_take_last_while(
            |&x| if x < 0 { Err(Refused(x)) } else { Ok(x > 1) },
            &[5, -1, 7, 8],
        );
        assert_eq!(r, Err(Refused(-1)));
    }

    #[test]
    fn try_error_past_stop_is_never_seen() {
        let r = try_take_last_while(
            |&x| if x < 0 { Err(Refused(x)) } else { Ok(x > 1) },
            &[-1, 0, 7, 8],
        );
        assert_eq!(r, Ok(&[7, 8][..]));
    }

    #[test]
    fn try_split_ok() {
        let r = try_split_last_while(|&c| Ok::<_, Refused>(c != '.'), String::from("a.txt"));
        assert_eq!(r, Ok((String::from("a."), String::from("txt"))));
    }

    #[test]
    #[should_panic(expected = "predicate exploded")]
    fn panicking_predicate_unwinds() {
        let _ = take_last_while(|_: &char| -> bool { panic!("predicate exploded") }, "abc");
    }
}
