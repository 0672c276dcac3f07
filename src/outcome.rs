use serde::{Deserialize, Serialize};

use crate::visit::{Failure, OutcomeVisitor, Success};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
enum Repr<S, F> {
    Success(S),
    Failure(F),
}

/// Result of an operation that either succeeded with `S` or failed with `F`.
///
/// The active variant is fixed at construction. There is no way to reach the
/// payload other than handling both variants:
///
/// * [`Outcome::match_with`] consumes the outcome and hands owned values to the handlers.
/// * [`Outcome::match_ref`] borrows it, so the same instance can be matched again.
///
/// ```rust
/// use outcome::Outcome;
///
/// let outcome: Outcome<i32, f64> = Outcome::success(1);
/// assert_eq!(outcome.match_with(|x| x + 1, |_| 0), 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Outcome<S, F>(Repr<S, F>);

impl<S, F> Outcome<S, F> {
    /// Creates outcome holding success value.
    pub fn success(value: S) -> Self {
        Self(Repr::Success(value))
    }

    /// Creates outcome holding failure value.
    pub fn failure(value: F) -> Self {
        Self(Repr::Failure(value))
    }

    pub fn is_success(&self) -> bool {
        matches!(self.0, Repr::Success(_))
    }

    pub fn is_failure(&self) -> bool {
        !self.is_success()
    }

    /// Calls exactly one of the handlers with the held value and returns its result.
    pub fn match_with<R, OnSuccess, OnFailure>(
        self,
        on_success: OnSuccess,
        on_failure: OnFailure,
    ) -> R
    where
        OnSuccess: FnOnce(S) -> R,
        OnFailure: FnOnce(F) -> R,
    {
        self.visit((on_success, on_failure))
    }

    /// Borrowing counterpart of `match_with`, handlers get references to the held value.
    pub fn match_ref<R, OnSuccess, OnFailure>(
        &self,
        on_success: OnSuccess,
        on_failure: OnFailure,
    ) -> R
    where
        OnSuccess: FnOnce(&S) -> R,
        OnFailure: FnOnce(&F) -> R,
    {
        match &self.0 {
            Repr::Success(value) => on_success(value),
            Repr::Failure(value) => on_failure(value),
        }
    }

    /// Dispatches the held value to the matching visitor method.
    pub fn visit<V>(self, visitor: V) -> V::Output
    where
        V: OutcomeVisitor<S, F>,
    {
        match self.0 {
            Repr::Success(value) => visitor.visit_success(value),
            Repr::Failure(value) => visitor.visit_failure(value),
        }
    }

    pub fn visit_ref<'a, V>(&'a self, visitor: V) -> V::Output
    where
        V: OutcomeVisitor<&'a S, &'a F>,
    {
        self.as_ref().visit(visitor)
    }

    /// Converts from `&Outcome<S, F>` to `Outcome<&S, &F>`, keeping the variant.
    pub fn as_ref(&self) -> Outcome<&S, &F> {
        match &self.0 {
            Repr::Success(value) => Outcome::success(value),
            Repr::Failure(value) => Outcome::failure(value),
        }
    }

    /// Turns self into `Result`, success becomes `Ok` and failure becomes `Err`.
    ///
    /// ```rust
    /// use outcome::Outcome;
    ///
    /// fn parse(raw: &str) -> anyhow::Result<u8> {
    ///     let outcome: Outcome<u8, anyhow::Error> =
    ///         Outcome::from(raw.parse::<u8>().map_err(anyhow::Error::from));
    ///     outcome.into_result()
    /// }
    ///
    /// assert!(parse("12").is_ok());
    /// assert!(parse("x").is_err());
    /// ```
    pub fn into_result(self) -> Result<S, F> {
        self.match_with(Ok, Err)
    }
}

impl<S, F> From<Result<S, F>> for Outcome<S, F> {
    fn from(result: Result<S, F>) -> Self {
        match result {
            Ok(value) => Self::success(value),
            Err(value) => Self::failure(value),
        }
    }
}

impl<S, F> From<Success<S>> for Outcome<S, F> {
    fn from(Success(value): Success<S>) -> Self {
        Self::success(value)
    }
}

impl<S, F> From<Failure<F>> for Outcome<S, F> {
    fn from(Failure(value): Failure<F>) -> Self {
        Self::failure(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variant_is_exclusive() {
        let s: Outcome<i32, f64> = Outcome::success(1);
        let f: Outcome<i32, f64> = Outcome::failure(2.0);

        assert!(s.is_success());
        assert!(!s.is_failure());
        assert!(f.is_failure());
        assert!(!f.is_success());
    }

    #[test]
    fn test_match_with() {
        let s: Outcome<i32, f64> = Outcome::success(1);
        assert_eq!(s.match_with(|x| x + 1, |_| 0), 2);

        let f: Outcome<i32, f64> = Outcome::failure(2.0);
        assert_eq!(f.match_with(|_| 0.0, |y| y * 2.0), 4.0);
    }

    #[test]
    fn test_match_ref_keeps_outcome() {
        let s: Outcome<String, String> = Outcome::success("hello".into());

        let first = s.match_ref(|v| v.len(), |_| 0);
        let second = s.match_ref(|v| v.len(), |_| 0);

        assert_eq!(first, 5);
        assert_eq!(first, second);
        assert!(s.is_success());
    }

    #[test]
    fn test_as_ref() {
        let f: Outcome<i32, String> = Outcome::failure("boom".into());

        assert_eq!(f.as_ref(), Outcome::failure(&String::from("boom")));
        assert_eq!(f.as_ref().match_with(|_| 0, |e| e.len()), 4);
    }

    #[test]
    fn test_result_conversion() {
        let ok: Result<i32, &str> = Ok(3);
        let s: Outcome<i32, &str> = ok.into();
        assert_eq!(s, Outcome::success(3));
        assert_eq!(s.into_result(), Ok(3));

        let err: Result<i32, &str> = Err("nope");
        let f: Outcome<i32, &str> = err.into();
        assert_eq!(f, Outcome::failure("nope"));
        assert_eq!(f.into_result(), Err("nope"));
    }

    #[test]
    fn test_from_wrappers() {
        let s: Outcome<i32, f64> = Success(1).into();
        let f: Outcome<i32, f64> = Failure(2.0).into();

        assert_eq!(s, Outcome::success(1));
        assert_eq!(f, Outcome::failure(2.0));
    }

    #[test]
    fn test_debug() {
        let s: Outcome<i32, f64> = Outcome::success(1);
        assert_eq!(format!("{:?}", s), "Outcome(Success(1))");
    }
}
