//! Branching on whether an [`Option`] holds a value.
//!
//! The operations are available both as methods on [`Option`] through [`OptionPresenceExt`], and as free functions
//! taking the option as their first argument:
//!
//! ```
//! use presence_core::OptionPresenceExt;
//!
//! let length = Some("a").branch_on_presence(|s| s.len() as i64).otherwise(|| -1);
//! assert_eq!(length, 1);
//!
//! let length = None::<&str>.branch_on_presence(|s| s.len() as i64).otherwise(|| -1);
//! assert_eq!(length, -1);
//! ```

pub use branch::ExistenceBranch;

mod branch;

pub trait OptionPresenceExt<T> {
  /// Runs `block` with the contained value if `self` is `Some`, discarding its result.
  fn run_if_present<R>(self, block: impl FnOnce(T) -> R);
  /// Runs `block` if `self` is `None`, discarding its result.
  fn run_if_absent<R>(self, block: impl FnOnce() -> R);
  /// Pairs `self` with the `present` handler. Nothing runs until [`ExistenceBranch::otherwise`] supplies the handler
  /// for the absent case.
  fn branch_on_presence<R, F: FnOnce(T) -> R>(self, present: F) -> ExistenceBranch<T, F>;
}

impl<T> OptionPresenceExt<T> for Option<T> {
  #[inline]
  fn run_if_present<R>(self, block: impl FnOnce(T) -> R) {
    if let Some(value) = self {
      block(value);
    }
  }

  #[inline]
  fn run_if_absent<R>(self, block: impl FnOnce() -> R) {
    if self.is_none() {
      block();
    }
  }

  #[inline]
  fn branch_on_presence<R, F: FnOnce(T) -> R>(self, present: F) -> ExistenceBranch<T, F> {
    ExistenceBranch::new(self, present)
  }
}


#[inline]
pub fn run_if_present<T, R>(value: Option<T>, block: impl FnOnce(T) -> R) {
  value.run_if_present(block)
}

#[inline]
pub fn run_if_absent<T, R>(value: Option<T>, block: impl FnOnce() -> R) {
  value.run_if_absent(block)
}

#[inline]
pub fn branch_on_presence<T, R, F: FnOnce(T) -> R>(value: Option<T>, present: F) -> ExistenceBranch<T, F> {
  value.branch_on_presence(present)
}
