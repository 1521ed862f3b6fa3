//! Structural cases over maps.
//!
//! `entry` matches one key's value; an absent key is a non-match, not an
//! error. `all_of` requires every listed entry case to match, evaluated in
//! declared order with the first failure short-circuiting.

use std::collections::HashMap;
use std::hash::Hash;

use super::capture::{CombineAll, NoBind};
use super::case::Case;

/// Matches a map containing `key` with a value matching the inner case.
#[derive(Debug, Clone, Copy)]
pub struct Entry<K, C> {
    key: K,
    value: C,
}

impl<K, V, C> Case<HashMap<K, V>> for Entry<K, C>
where
    K: Eq + Hash,
    C: Case<V>,
{
    type Capture = C::Capture;

    fn attempt(&self, value: &HashMap<K, V>) -> Option<Self::Capture> {
        let present = value.get(&self.key)?;
        self.value.attempt(present)
    }
}

pub fn entry<K, C>(key: K, value: C) -> Entry<K, C> {
    Entry { key, value }
}

/// Matches when every entry case matches the same input; captures are folded
/// left-to-right.
#[derive(Debug, Clone, Copy)]
pub struct AllOf<E> {
    entries: E,
}

pub fn all_of<E>(entries: E) -> AllOf<E> {
    AllOf { entries }
}

impl<I: ?Sized, C: Case<I>> Case<I> for AllOf<(C,)> {
    type Capture = C::Capture;

    fn attempt(&self, value: &I) -> Option<Self::Capture> {
        self.entries.0.attempt(value)
    }
}

impl<I: ?Sized> Case<I> for AllOf<()> {
    type Capture = NoBind;

    fn attempt(&self, _: &I) -> Option<NoBind> {
        Some(NoBind)
    }
}

macro_rules! all_of_case {
    ($($C:ident $c:ident),+) => {
        impl<I: ?Sized, $($C),+> Case<I> for AllOf<($($C,)+)>
        where
            $($C: Case<I>,)+
            ($($C::Capture,)+): CombineAll,
        {
            type Capture = <($($C::Capture,)+) as CombineAll>::Output;

            fn attempt(&self, value: &I) -> Option<Self::Capture> {
                let ($($c,)+) = &self.entries;
                $(let $c = $c.attempt(value)?;)+
                Some(($($c,)+).combine_all())
            }
        }
    };
}

all_of_case!(C1 c1, C2 c2);
all_of_case!(C1 c1, C2 c2, C3 c3);
all_of_case!(C1 c1, C2 c2, C3 c3, C4 c4);
all_of_case!(C1 c1, C2 c2, C3 c3, C4 c4, C5 c5);
all_of_case!(C1 c1, C2 c2, C3 c3, C4 c4, C5 c5, C6 c6);
all_of_case!(C1 c1, C2 c2, C3 c3, C4 c4, C5 c5, C6 c6, C7 c7);
all_of_case!(C1 c1, C2 c2, C3 c3, C4 c4, C5 c5, C6 c6, C7 c7, C8 c8);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matching::capture::Bind;
    use crate::matching::case::{any, eq, var};

    fn sample() -> HashMap<&'static str, i32> {
        HashMap::from([("a", 1), ("b", 2)])
    }

    #[test]
    fn test_entry_matches_present_key() {
        assert_eq!(entry("a", eq(1)).attempt(&sample()), Some(NoBind));
        assert_eq!(entry("a", eq(9)).attempt(&sample()), None);
    }

    #[test]
    fn test_absent_key_is_a_non_match() {
        assert_eq!(entry("missing", any()).attempt(&sample()), None);
    }

    #[test]
    fn test_all_of_requires_every_entry() {
        let shape = all_of((entry("a", eq(1)), entry("b", any())));
        assert_eq!(shape.attempt(&sample()), Some(NoBind));

        let wrong = all_of((entry("a", eq(1)), entry("b", eq(9))));
        assert_eq!(wrong.attempt(&sample()), None);
    }

    #[test]
    fn test_all_of_folds_bindings_in_order() {
        let bound = all_of((entry("a", var()), entry("b", var())));
        assert_eq!(bound.attempt(&sample()), Some(Bind((1, 2))));
    }
}
