use std::fmt::{self, Debug, Formatter};

/// An [`Option`] paired with the handler to run when it holds a value. Created by
/// [`branch_on_presence`](super::branch_on_presence), resolved by [`otherwise`](Self::otherwise).
///
/// Resolving consumes the branch. To resolve the same branch again, clone it first; this re-runs whichever handler
/// applies, including its side effects.
#[must_use = "no handler runs until `otherwise` is called"]
#[derive(Clone, Copy)]
pub struct ExistenceBranch<T, F> {
  value: Option<T>,
  present: F,
}

impl<T, F> ExistenceBranch<T, F> {
  #[inline]
  pub const fn new(value: Option<T>, present: F) -> Self {
    Self { value, present }
  }

  #[inline]
  pub fn value(&self) -> Option<&T> { self.value.as_ref() }
  #[inline]
  pub fn is_present(&self) -> bool { self.value.is_some() }

  /// Runs the present handler with the value if there is one, and `absent` otherwise, returning the result of the
  /// handler that ran.
  #[inline]
  pub fn otherwise<R>(self, absent: impl FnOnce() -> R) -> R where
    F: FnOnce(T) -> R,
  {
    #[cfg(feature = "tracing")]
    tracing::trace!(present = self.is_present(), "resolving existence branch");
    match self.value {
      Some(value) => (self.present)(value),
      None => absent(),
    }
  }
}

impl<T: Debug, F> Debug for ExistenceBranch<T, F> {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    f.debug_struct("ExistenceBranch")
      .field("value", &self.value)
      .finish_non_exhaustive()
  }
}
