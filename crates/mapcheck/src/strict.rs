//! Panicking variants of every assertion helper, for direct use inside test
//! functions where a failed assertion should abort the test immediately.

use serde::Serialize;

use crate::errors::Failure;
use crate::policies::Policy;
use crate::{assertions, mappings};

#[track_caller]
fn unwrap_pass(result: Result<(), Failure>) {
    if let Err(failure) = result {
        panic!("{failure}");
    }
}

/// Panicking form of [`ensure`](crate::ensure).
#[track_caller]
pub fn ensure(condition: bool, message: impl Into<String>) {
    unwrap_pass(assertions::ensure(condition, message));
}

/// Panicking form of [`equal`](crate::equal).
#[track_caller]
pub fn equal<A, B>(actual: &A, expected: &B, message: &str)
where
    A: Serialize,
    B: Serialize,
{
    unwrap_pass(assertions::equal(actual, expected, message));
}

/// Panicking form of [`close`](crate::close).
#[track_caller]
pub fn close<A, B>(x: &A, y: &B, message: &str)
where
    A: Serialize,
    B: Serialize,
{
    unwrap_pass(assertions::close(x, y, message));
}

/// Panicking form of [`close_with`](crate::close_with).
#[track_caller]
pub fn close_with<A, B>(x: &A, y: &B, message: &str, policy: &Policy)
where
    A: Serialize,
    B: Serialize,
{
    unwrap_pass(assertions::close_with(x, y, message, policy));
}

/// Panicking form of [`forward`](crate::forward).
#[track_caller]
pub fn forward<A, B, F>(fwd: F, pairs: &[(A, B)])
where
    A: Serialize,
    B: Serialize,
    F: FnMut(&A) -> B,
{
    unwrap_pass(mappings::forward(fwd, pairs));
}

/// Panicking form of [`backward`](crate::backward).
#[track_caller]
pub fn backward<A, B, F>(bwd: F, pairs: &[(A, B)])
where
    A: Serialize,
    B: Serialize,
    F: FnMut(&B) -> A,
{
    unwrap_pass(mappings::backward(bwd, pairs));
}

/// Panicking form of [`inverses`](crate::inverses).
#[track_caller]
pub fn inverses<A, B, F, G>(fwd: F, bwd: G, items: &[A])
where
    A: Serialize,
    B: Serialize,
    F: FnMut(&A) -> B,
    G: FnMut(&B) -> A,
{
    unwrap_pass(mappings::inverses(fwd, bwd, items));
}

/// Panicking form of [`injects`](crate::injects).
#[track_caller]
pub fn injects<A, B, F>(fwd: F, items: &[A])
where
    A: Serialize,
    B: Serialize,
    F: FnMut(&A) -> B,
{
    unwrap_pass(mappings::injects(fwd, items));
}
