//! Structural case over 2-tuples.

use super::capture::Combine;
use super::case::Case;

/// Matches a pair whose components match `first` and `second`.
#[derive(Debug, Clone, Copy)]
pub struct PairOf<A, B> {
    first: A,
    second: B,
}

impl<T, U, A, B> Case<(T, U)> for PairOf<A, B>
where
    A: Case<T>,
    B: Case<U>,
    A::Capture: Combine<B::Capture>,
{
    type Capture = <A::Capture as Combine<B::Capture>>::Output;

    fn attempt(&self, value: &(T, U)) -> Option<Self::Capture> {
        let first = self.first.attempt(&value.0)?;
        let second = self.second.attempt(&value.1)?;
        Some(first.combine(second))
    }
}

pub fn pair<A, B>(first: A, second: B) -> PairOf<A, B> {
    PairOf { first, second }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matching::capture::{Bind, NoBind};
    use crate::matching::case::{any, eq, var};

    #[test]
    fn test_shape_only_pair() {
        assert_eq!(pair(any(), any()).attempt(&(1, 2)), Some(NoBind));
        assert_eq!(pair(eq(1), eq(2)).attempt(&(1, 2)), Some(NoBind));
        assert_eq!(pair(eq(1), eq(2)).attempt(&(1, 3)), None);
    }

    #[test]
    fn test_both_components_bound() {
        assert_eq!(pair(var(), var()).attempt(&(1, "x")), Some(Bind((1, "x"))));
    }
}
