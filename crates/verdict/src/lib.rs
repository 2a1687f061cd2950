//! The result of a predicate, read under the rule that only a literal `false`
//! rejects an element.
//!
//! Every other value, including zero, the empty string, `()`, and `None`,
//! counts as acceptance.  This lets predicates that return "something or
//! nothing" be used where a strict yes/no is expected without a rejection
//! being triggered by accident.
//!
//! # Example
//!
//! ```
//! use takelast_verdict::Verdict;
//! assert!(false.is_stop());
//! assert!(true.includes());
//! assert!(0.includes());
//! assert!("".includes());
//! assert!(None::<bool>.includes());
//! assert!(Some(false).is_stop());
//! ```

pub trait Verdict {
    /// Returns `true` iff this value is the literal `false`
    fn is_stop(&self) -> bool;

    /// Returns `true` iff this value is anything other than the literal
    /// `false`
    fn includes(&self) -> bool {
        !self.is_stop()
    }
}

impl Verdict for bool {
    fn is_stop(&self) -> bool {
        !*self
    }
}

/// `None` is not `false`, so it never stops; `Some(v)` stops iff `v` does.
impl<V: Verdict> Verdict for Option<V> {
    fn is_stop(&self) -> bool {
        self.as_ref().is_some_and(Verdict::is_stop)
    }
}

impl<V: Verdict + ?Sized> Verdict for &V {
    fn is_stop(&self) -> bool {
        (**self).is_stop()
    }
}

impl<V: Verdict + ?Sized> Verdict for &mut V {
    fn is_stop(&self) -> bool {
        (**self).is_stop()
    }
}

impl<V: Verdict + ?Sized> Verdict for Box<V> {
    fn is_stop(&self) -> bool {
        (**self).is_stop()
    }
}

macro_rules! impl_never_stops {
    ($($t:ty),* $(,)?) => {
        $(
            impl Verdict for $t {
                fn is_stop(&self) -> bool {
                    false
                }
            }
        )*
    };
}

impl_never_stops!(
    (),
    i8,
    i16,
    i32,
    i64,
    i128,
    isize,
    u8,
    u16,
    u32,
    u64,
    u128,
    usize,
    f32,
    f64,
    char,
    str,
    String,
);
