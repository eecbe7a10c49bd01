//! Host contract for buffer access and scoped, all-or-nothing edits.
//!
//! The case commands never own text. They borrow a host [`Buffer`] for the
//! length of one invocation, open an [`EditTransaction`] on it, and wrap that
//! transaction in an [`EditScope`]:
//!
//! ```ignore
//! let mut scope = EditScope::new(buffer.begin_edit()?);
//! scope.replace_region(Region::new(0, 5), "HELLO");
//! scope.commit(); // dropping the scope instead rolls back
//! ```
//!
//! # Guarantees
//!
//! - Every mutation goes through the transaction; nothing touches the buffer
//!   outside of one.
//! - An [`EditScope`] that is dropped without [`EditScope::commit`] calls
//!   [`EditTransaction::rollback`], on early returns and during unwinding
//!   alike.
//! - Exactly one of `commit` / `rollback` reaches the host per transaction.
//!
//! Offsets are codepoint offsets. Hosts backed by byte-indexed storage must
//! convert.

use std::{
  borrow::Cow,
  ops::{
    Deref,
    DerefMut,
  },
};

use crate::selection::Region;

/// Read access to codepoint-indexed text.
pub trait TextSource {
  /// Total number of codepoints.
  fn len_chars(&self) -> usize;

  /// Text in `region`. Callers guarantee `region.is_valid_for(self.len_chars())`.
  fn read_region(&self, region: Region) -> Cow<'_, str>;
}

/// A host buffer that can be edited inside a transaction.
pub trait Buffer: TextSource {
  type Edit<'a>: EditTransaction
  where
    Self: 'a;

  /// Why the host refused to open a transaction.
  type Error: std::error::Error + Send + Sync + 'static;

  fn begin_edit(&mut self) -> Result<Self::Edit<'_>, Self::Error>;
}

/// An open batch of mutations. Reads observe the mutations made so far.
pub trait EditTransaction: TextSource {
  /// Replace the codepoints in `region` with `text`. Callers guarantee the
  /// region is valid for the current length.
  fn replace_region(&mut self, region: Region, text: &str);

  /// Make every mutation visible as one logical edit.
  fn commit(&mut self);

  /// Discard every mutation made through this transaction.
  fn rollback(&mut self);
}

/// Guard that commits explicitly or rolls back on drop.
#[derive(Debug)]
pub struct EditScope<T: EditTransaction> {
  edit:     T,
  finished: bool,
}

impl<T: EditTransaction> EditScope<T> {
  pub fn new(edit: T) -> Self {
    Self {
      edit,
      finished: false,
    }
  }

  pub fn commit(mut self) {
    self.finished = true;
    self.edit.commit();
  }

  /// Roll back now rather than at drop.
  pub fn rollback(mut self) {
    self.finished = true;
    self.edit.rollback();
  }
}

impl<T: EditTransaction> Deref for EditScope<T> {
  type Target = T;

  fn deref(&self) -> &T {
    &self.edit
  }
}

impl<T: EditTransaction> DerefMut for EditScope<T> {
  fn deref_mut(&mut self) -> &mut T {
    &mut self.edit
  }
}

impl<T: EditTransaction> Drop for EditScope<T> {
  fn drop(&mut self) {
    if !self.finished {
      tracing::trace!("edit scope dropped without commit, rolling back");
      self.edit.rollback();
    }
  }
}
