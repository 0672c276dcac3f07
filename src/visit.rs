use std::ops::{Deref, DerefMut};

/// Trait implemented by types that know how to handle both variants of an Outcome.
///
/// Exactly one of the methods gets called by `Outcome::visit`, which is why
/// both of them take `self` by value.
///
/// ```rust
/// use outcome::{Outcome, OutcomeVisitor};
///
/// struct Describe;
///
/// impl OutcomeVisitor<i32, f64> for Describe {
///     type Output = String;
///
///     fn visit_success(self, value: i32) -> String {
///         format!("ok {}", value)
///     }
///
///     fn visit_failure(self, value: f64) -> String {
///         format!("err {}", value)
///     }
/// }
///
/// let outcome: Outcome<i32, f64> = Outcome::success(1);
/// assert_eq!(outcome.visit(Describe), "ok 1");
/// ```
pub trait OutcomeVisitor<S, F> {
    type Output;

    /// Handles success value.
    fn visit_success(self, value: S) -> Self::Output;

    /// Handles failure value.
    fn visit_failure(self, value: F) -> Self::Output;
}

/// Pair of handlers, first one for success, second one for failure.
/// Both must return the same type.
impl<S, F, R, OnSuccess, OnFailure> OutcomeVisitor<S, F> for (OnSuccess, OnFailure)
where
    OnSuccess: FnOnce(S) -> R,
    OnFailure: FnOnce(F) -> R,
{
    type Output = R;

    fn visit_success(self, value: S) -> R {
        (self.0)(value)
    }

    fn visit_failure(self, value: F) -> R {
        (self.1)(value)
    }
}

/// Macro for the two variant wrappers, they differ only in name.
macro_rules! variant_wrapper {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
        pub struct $name<T>(pub T);

        impl<T> $name<T> {
            /// Returns wrapped value.
            pub fn into_inner(self) -> T {
                self.0
            }
        }

        impl<T> Deref for $name<T> {
            type Target = T;

            fn deref(&self) -> &T {
                &self.0
            }
        }

        impl<T> DerefMut for $name<T> {
            fn deref_mut(&mut self) -> &mut T {
                &mut self.0
            }
        }
    };
}

variant_wrapper!(
    /// Success value on its way into an Outcome.
    ///
    /// ```rust
    /// use outcome::{Outcome, Success};
    ///
    /// fn one() -> Outcome<i32, f64> {
    ///     Success(1).into()
    /// }
    ///
    /// assert!(one().is_success());
    /// ```
    Success
);

variant_wrapper!(
    /// Failure value on its way into an Outcome.
    Failure
);
