//! Capture model: the tagged outcome of a successful match attempt.
//!
//! A case that matches either has nothing to report upward ([`NoBind`]) or
//! carries exactly one extracted value ([`Bind`]). Composite cases merge the
//! captures of their sub-cases with [`Combine`]: shape-only captures vanish,
//! bound values accumulate as right-nested pairs in declaration order. The
//! resulting shape is carried in the types, so a handler whose parameter
//! pattern does not fit the composed capture is rejected by the compiler.

/// Structural success with nothing to report upward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NoBind;

/// Structural success carrying one extracted value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bind<T>(pub T);

/// The 2-ary capture composition rule.
///
///     NoBind  ⊕ NoBind  = NoBind
///     NoBind  ⊕ Bind(v) = Bind(v)
///     Bind(v) ⊕ NoBind  = Bind(v)
///     Bind(v) ⊕ Bind(w) = Bind((v, w))
pub trait Combine<Rhs> {
    type Output;

    fn combine(self, rhs: Rhs) -> Self::Output;
}

impl Combine<NoBind> for NoBind {
    type Output = NoBind;

    fn combine(self, _: NoBind) -> NoBind {
        NoBind
    }
}

impl<T> Combine<Bind<T>> for NoBind {
    type Output = Bind<T>;

    fn combine(self, rhs: Bind<T>) -> Bind<T> {
        rhs
    }
}

impl<T> Combine<NoBind> for Bind<T> {
    type Output = Bind<T>;

    fn combine(self, _: NoBind) -> Bind<T> {
        self
    }
}

impl<T, U> Combine<Bind<U>> for Bind<T> {
    type Output = Bind<(T, U)>;

    fn combine(self, rhs: Bind<U>) -> Bind<(T, U)> {
        Bind((self.0, rhs.0))
    }
}

/// Maps a capture to the value handed to a handler: `()` for [`NoBind`], the
/// carried value for [`Bind`].
pub trait Capture {
    type Bound;

    fn bound(self) -> Self::Bound;
}

impl Capture for NoBind {
    type Bound = ();

    fn bound(self) {}
}

impl<T> Capture for Bind<T> {
    type Bound = T;

    fn bound(self) -> T {
        self.0
    }
}

/// N-ary composition: right-fold of [`Combine`] over a tuple of captures, so
/// captures collected left-to-right nest as right-leaning pairs and a single
/// surviving binding collapses to its bare value.
pub trait CombineAll {
    type Output;

    fn combine_all(self) -> Self::Output;
}

impl<A> CombineAll for (A,) {
    type Output = A;

    fn combine_all(self) -> A {
        self.0
    }
}

macro_rules! combine_all_tuple {
    ($head:ident $h:ident, $($tail:ident $t:ident),+) => {
        impl<$head, $($tail),+> CombineAll for ($head, $($tail),+)
        where
            ($($tail,)+): CombineAll,
            $head: Combine<<($($tail,)+) as CombineAll>::Output>,
        {
            type Output = <$head as Combine<<($($tail,)+) as CombineAll>::Output>>::Output;

            fn combine_all(self) -> Self::Output {
                let ($h, $($t),+) = self;
                $h.combine(($($t,)+).combine_all())
            }
        }
    };
}

combine_all_tuple!(A a, B b);
combine_all_tuple!(A a, B b, C c);
combine_all_tuple!(A a, B b, C c, D d);
combine_all_tuple!(A a, B b, C c, D d, E e);
combine_all_tuple!(A a, B b, C c, D d, E e, F f);
combine_all_tuple!(A a, B b, C c, D d, E e, F f, G g);
combine_all_tuple!(A a, B b, C c, D d, E e, F f, G g, H h);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_shape_only_captures_vanish() {
        assert_eq!(NoBind.combine(NoBind), NoBind);
    }

    #[test]
    fn test_binding_absorbs_shape_only() {
        assert_eq!(NoBind.combine(Bind(1)), Bind(1));
        assert_eq!(Bind(1).combine(NoBind), Bind(1));
    }

    #[test]
    fn test_two_bindings_pair_up() {
        assert_eq!(Bind(1).combine(Bind("x")), Bind((1, "x")));
    }

    #[test]
    fn test_fold_keeps_declaration_order() {
        let folded = (Bind(1), NoBind, Bind(2), Bind(3)).combine_all();
        assert_eq!(folded, Bind((1, (2, 3))));
    }

    #[test]
    fn test_single_surviving_binding_is_bare() {
        let folded = (NoBind, Bind(7), NoBind).combine_all();
        assert_eq!(folded, Bind(7));
        assert_eq!(folded.bound(), 7);
    }
}
