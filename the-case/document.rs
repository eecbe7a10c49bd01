//! Reference host buffer.
//!
//! [`Document`] implements the [`Buffer`] contract on top of a [`Rope`] so the
//! case commands can run against real text. It owns the text, a read-only
//! flag, and a [`History`] of committed edits.
//!
//! # Design
//!
//! - An edit snapshots the rope when it opens. Ropes are persistent, so the
//!   snapshot is a pointer copy.
//! - Rollback restores the snapshot. Commit records one history revision,
//!   no matter how many regions the edit replaced.
//! - A commit with no net change records nothing and leaves the version
//!   alone.
//!
//! # Example
//!
//! ```no_run
//! use the_case::{
//!   command::run_case_command,
//!   document::Document,
//!   selection::{
//!     Region,
//!     SelectionSet,
//!   },
//! };
//!
//! let mut doc = Document::from("Hello, World!");
//! run_case_command("swap_case", &mut doc, &SelectionSet::single(Region::new(0, 13))).unwrap();
//! assert_eq!(doc.text().to_string(), "hELLO, wORLD!");
//! doc.undo().unwrap();
//! ```

use std::borrow::Cow;

use ropey::Rope;
use thiserror::Error;

use crate::{
  history::{
    History,
    HistoryError,
  },
  selection::Region,
  transaction::{
    Buffer,
    EditTransaction,
    TextSource,
  },
};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DocumentFlags {
  pub readonly: bool,
  pub modified: bool,
}

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum DocumentError {
  #[error("document is readonly")]
  Readonly,
  #[error(transparent)]
  History(#[from] HistoryError),
}

pub type Result<T> = std::result::Result<T, DocumentError>;

#[derive(Debug)]
pub struct Document {
  text:    Rope,
  history: History,
  version: u64,
  flags:   DocumentFlags,
}

impl Document {
  pub fn new(text: Rope) -> Self {
    Self {
      history: History::new(text.clone()),
      text,
      version: 0,
      flags: DocumentFlags::default(),
    }
  }

  pub fn text(&self) -> &Rope {
    &self.text
  }

  pub fn version(&self) -> u64 {
    self.version
  }

  pub fn flags(&self) -> DocumentFlags {
    self.flags
  }

  pub fn set_readonly(&mut self, readonly: bool) {
    self.flags.readonly = readonly;
  }

  pub fn history(&self) -> &History {
    &self.history
  }

  pub fn undo(&mut self) -> Result<bool> {
    let Some(jump) = self.history.undo() else {
      return Ok(false);
    };
    self.history.apply_jump(&jump)?;
    self.install(jump.text);
    Ok(true)
  }

  pub fn redo(&mut self) -> Result<bool> {
    let Some(jump) = self.history.redo() else {
      return Ok(false);
    };
    self.history.apply_jump(&jump)?;
    self.install(jump.text);
    Ok(true)
  }

  fn install(&mut self, text: Rope) {
    self.text = text;
    self.flags.modified = true;
    self.version = self.version.saturating_add(1);
  }
}

impl From<&str> for Document {
  fn from(text: &str) -> Self {
    Self::new(Rope::from(text))
  }
}

impl TextSource for Document {
  fn len_chars(&self) -> usize {
    self.text.len_chars()
  }

  fn read_region(&self, region: Region) -> Cow<'_, str> {
    Cow::from(self.text.slice(region.start..region.end))
  }
}

impl Buffer for Document {
  type Edit<'a> = DocumentEdit<'a>;
  type Error = DocumentError;

  fn begin_edit(&mut self) -> Result<DocumentEdit<'_>> {
    if self.flags.readonly {
      return Err(DocumentError::Readonly);
    }

    Ok(DocumentEdit {
      original: self.text.clone(),
      changed:  false,
      doc:      self,
    })
  }
}

/// An open edit on a [`Document`]. Mutations are applied to the document text
/// immediately and undone wholesale by [`EditTransaction::rollback`].
#[derive(Debug)]
pub struct DocumentEdit<'a> {
  doc:      &'a mut Document,
  original: Rope,
  changed:  bool,
}

impl TextSource for DocumentEdit<'_> {
  fn len_chars(&self) -> usize {
    self.doc.len_chars()
  }

  fn read_region(&self, region: Region) -> Cow<'_, str> {
    self.doc.read_region(region)
  }
}

impl EditTransaction for DocumentEdit<'_> {
  fn replace_region(&mut self, region: Region, text: &str) {
    let text_rope = &mut self.doc.text;
    if !region.is_empty() {
      text_rope.remove(region.start..region.end);
    }
    if !text.is_empty() {
      text_rope.insert(region.start, text);
    }
    self.changed = true;
  }

  fn commit(&mut self) {
    if !self.changed || self.doc.text == self.original {
      return;
    }

    self.doc.history.commit_revision(self.doc.text.clone());
    self.doc.flags.modified = true;
    self.doc.version = self.doc.version.saturating_add(1);
    self.original = self.doc.text.clone();
    self.changed = false;
  }

  fn rollback(&mut self) {
    if self.changed {
      self.doc.text = self.original.clone();
      self.changed = false;
    }
  }
}
