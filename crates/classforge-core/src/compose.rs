//! Generic function-composition helpers
//!
//! [`pipe`] applies stages left to right, [`compose`] right to left. Neither
//! is used by the factory itself; they are standalone utilities exposed as
//! part of the library surface.

/// A boxed unary transformation
pub type Unary<T> = Box<dyn Fn(T) -> T>;

/// Compose stages left to right
///
/// `pipe([f, g])(x)` is `g(f(x))`. An empty stage list yields the identity.
#[must_use]
pub fn pipe<T>(stages: Vec<Unary<T>>) -> impl Fn(T) -> T {
    move |x| stages.iter().fold(x, |acc, stage| stage(acc))
}

/// Compose stages right to left
///
/// `compose([f, g])(x)` is `f(g(x))`. An empty stage list yields the identity.
#[must_use]
pub fn compose<T>(stages: Vec<Unary<T>>) -> impl Fn(T) -> T {
    move |x| stages.iter().rev().fold(x, |acc, stage| stage(acc))
}
