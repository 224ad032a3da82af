//! Field validation pipeline.
//!
//! A [`Validator`] checks one field value and returns it, possibly
//! transformed. Validators compose with [`Validator::then`] into a fixed,
//! statically-typed chain; the first failure short-circuits the chain.

pub mod rules;

use crate::error::CoreError;

/// A single check or transform applied to one field value.
pub trait Validator<T> {
    /// Accept `value` (possibly rewritten) or reject it for `field`.
    fn validate(&self, field: &'static str, value: T) -> Result<T, CoreError>;

    /// Run `next` on the output of `self`.
    fn then<V>(self, next: V) -> Chain<Self, V>
    where
        Self: Sized,
        V: Validator<T>,
    {
        Chain {
            first: self,
            second: next,
        }
    }
}

/// Two validators run in sequence.
#[derive(Debug, Clone, Copy)]
pub struct Chain<A, B> {
    first: A,
    second: B,
}

impl<T, A, B> Validator<T> for Chain<A, B>
where
    A: Validator<T>,
    B: Validator<T>,
{
    fn validate(&self, field: &'static str, value: T) -> Result<T, CoreError> {
        let value = self.first.validate(field, value)?;
        self.second.validate(field, value)
    }
}
