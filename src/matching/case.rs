//! The `Case` trait and the primitive cases.
//!
//! A case is a predicate with extraction: applied to a value it either fails
//! structurally (`None`) or succeeds with a capture. Primitives match
//! anything, the absent sentinel, a constant, or a dynamic type; `var` marks
//! a position as bound so the matched value surfaces in the handler's
//! argument list.

use std::marker::PhantomData;

use super::capture::{Bind, NoBind};

/// A predicate-with-extraction over values of type `I`.
///
/// Stateless after construction: `attempt` never mutates, so a case can be
/// reused across inputs and shared between threads. Structural failure is
/// `None`, never an error.
pub trait Case<I: ?Sized> {
    type Capture;

    fn attempt(&self, value: &I) -> Option<Self::Capture>;
}

/// Matches any value, capturing nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct Any;

impl<I: ?Sized> Case<I> for Any {
    type Capture = NoBind;

    fn attempt(&self, _: &I) -> Option<NoBind> {
        Some(NoBind)
    }
}

pub fn any() -> Any {
    Any
}

/// Matches the absent sentinel (`Option::None`).
#[derive(Debug, Clone, Copy, Default)]
pub struct Nil;

impl<T> Case<Option<T>> for Nil {
    type Capture = NoBind;

    fn attempt(&self, value: &Option<T>) -> Option<NoBind> {
        if value.is_none() {
            Some(NoBind)
        } else {
            None
        }
    }
}

pub fn nil() -> Nil {
    Nil
}

/// Matches a present value (`Option::Some`) whose payload matches the inner
/// case.
#[derive(Debug, Clone, Copy)]
pub struct Present<C> {
    inner: C,
}

impl<T, C: Case<T>> Case<Option<T>> for Present<C> {
    type Capture = C::Capture;

    fn attempt(&self, value: &Option<T>) -> Option<Self::Capture> {
        value.as_ref().and_then(|present| self.inner.attempt(present))
    }
}

pub fn some<C>(inner: C) -> Present<C> {
    Present { inner }
}

/// Matches a value equal to a constant, capturing nothing.
#[derive(Debug, Clone, Copy)]
pub struct Constant<K> {
    expected: K,
}

impl<I, K> Case<I> for Constant<K>
where
    I: PartialEq<K> + ?Sized,
{
    type Capture = NoBind;

    fn attempt(&self, value: &I) -> Option<NoBind> {
        if value.eq(&self.expected) {
            Some(NoBind)
        } else {
            None
        }
    }
}

pub fn eq<K>(expected: K) -> Constant<K> {
    Constant { expected }
}

/// Matches a value whose dynamic type is `T`, capturing nothing.
///
/// Applies to `dyn Any` values; there is no value-level subtyping, so this is
/// exact dynamic type identity.
#[derive(Debug, Clone, Copy)]
pub struct OfType<T> {
    _marker: PhantomData<T>,
}

impl<T: 'static> Case<dyn std::any::Any> for OfType<T> {
    type Capture = NoBind;

    fn attempt(&self, value: &dyn std::any::Any) -> Option<NoBind> {
        if value.is::<T>() {
            Some(NoBind)
        } else {
            None
        }
    }
}

pub fn of_type<T: 'static>() -> OfType<T> {
    OfType {
        _marker: PhantomData,
    }
}

/// Re-tags a capture as binding: a shape-only inner capture binds the whole
/// matched value, a binding inner capture is propagated as-is (composition,
/// not duplication).
pub trait Retag<W> {
    type Out;

    fn retag(self, whole: impl FnOnce() -> W) -> Bind<Self::Out>;
}

impl<W> Retag<W> for NoBind {
    type Out = W;

    fn retag(self, whole: impl FnOnce() -> W) -> Bind<W> {
        Bind(whole())
    }
}

impl<W, T> Retag<W> for Bind<T> {
    type Out = T;

    fn retag(self, _: impl FnOnce() -> W) -> Bind<T> {
        self
    }
}

/// Wrapper case whose result is always a binding.
#[derive(Debug, Clone, Copy)]
pub struct Var<C> {
    inner: C,
}

impl<I, C> Case<I> for Var<C>
where
    I: ToOwned + ?Sized,
    C: Case<I>,
    C::Capture: Retag<I::Owned>,
{
    type Capture = Bind<<C::Capture as Retag<I::Owned>>::Out>;

    fn attempt(&self, value: &I) -> Option<Self::Capture> {
        self.inner
            .attempt(value)
            .map(|capture| capture.retag(|| value.to_owned()))
    }
}

/// Binds the matched value itself.
pub fn var() -> Var<Any> {
    Var { inner: Any }
}

/// Delegates to `inner` and forces the result to bind.
pub fn var_of<C>(inner: C) -> Var<C> {
    Var { inner }
}
