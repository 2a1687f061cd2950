//! Taking the trailing run of a slice, vector, or string whose elements all
//! satisfy a predicate.
//!
//! The scan runs from the end of the input backwards and stops at the first
//! element for which the predicate returns `false`.  Only the literal `false`
//! stops the scan; see [`takelast_verdict::Verdict`] for how other predicate
//! results are read.
//!
//! # Example
//!
//! ```
//! use takelast::curry::take_last_while_fn;
//! use takelast::take_last_while::take_last_while;
//!
//! assert_eq!(take_last_while(|&x| x > 2, &[1, 2, 3, 4, 5]), [3, 4, 5]);
//! assert_eq!(take_last_while(|&c| c != ' ', "hello world"), "world");
//!
//! let mut last_word = take_last_while_fn::<&str, _, _>(|&c| c != ' ');
//! assert_eq!(last_word("hello world"), "world");
//! ```
automod::dir!(pub "src");

pub use takelast_verdict::Verdict;
