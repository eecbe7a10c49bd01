use std::num::NonZeroUsize;

use ropey::Rope;
use thiserror::Error;

/// Result type for history operations.
pub type Result<T> = std::result::Result<T, HistoryError>;

/// Errors that can occur during history operations.
#[derive(Debug, Error)]
pub enum HistoryError {
  #[error("revision index {index} is out of bounds (max: {max})")]
  RevisionOutOfBounds { index: usize, max: usize },
}

/// Represents a pending jump in history that has not yet been applied.
///
/// The caller installs `text` in the document and then calls
/// [`History::apply_jump`], so history only moves once the document has.
#[derive(Debug, Clone)]
pub struct HistoryJump {
  /// The document text at the target revision.
  pub text:   Rope,
  /// The target revision index after the jump.
  pub target: usize,
}

/// Stores the committed revisions of a buffer.
///
/// The vector always has at least one element: the root revision holding the
/// text the document was created with. Every other revision has a parent and
/// stores the full text after its edit. Ropes share structure, so a revision
/// costs roughly the size of the nodes its edit touched.
///
/// Undo moves to the parent. Redo moves to the last child, i.e. the most
/// recent revision committed on top of the current one. Committing on top of
/// an undone revision starts a new branch; the old branch stays in the vector
/// but is no longer reachable by redo.
#[derive(Debug)]
pub struct History {
  revisions: Vec<Revision>,
  current:   usize,
}

/// A single point in history. See [History] for more information.
#[derive(Debug, Clone)]
struct Revision {
  parent:     usize,
  last_child: Option<NonZeroUsize>,
  text:       Rope,
}

impl History {
  pub fn new(root: Rope) -> Self {
    Self {
      revisions: vec![Revision {
        parent:     0,
        last_child: None,
        text:       root,
      }],
      current:   0,
    }
  }

  /// Record `text` as a new revision on top of the current one.
  pub fn commit_revision(&mut self, text: Rope) {
    let new_current = self.revisions.len();
    self.revisions[self.current].last_child = NonZeroUsize::new(new_current);
    self.revisions.push(Revision {
      parent: self.current,
      last_child: None,
      text,
    });
    self.current = new_current;
  }

  #[inline]
  pub fn current_revision(&self) -> usize {
    self.current
  }

  #[inline]
  pub const fn at_root(&self) -> bool {
    self.current == 0
  }

  /// Returns the number of revisions in the history, root included.
  #[inline]
  pub fn len(&self) -> usize {
    self.revisions.len()
  }

  /// Returns whether the history only has the root revision.
  #[inline]
  pub fn is_empty(&self) -> bool {
    self.revisions.len() <= 1
  }

  fn validate_revision(&self, revision: usize) -> Result<()> {
    if revision >= self.revisions.len() {
      return Err(HistoryError::RevisionOutOfBounds {
        index: revision,
        max:   self.revisions.len().saturating_sub(1),
      });
    }
    Ok(())
  }

  /// Prepare an undo without mutating history state. `None` at the root.
  pub fn undo(&self) -> Option<HistoryJump> {
    if self.at_root() {
      return None;
    }

    let parent = self.revisions[self.current].parent;
    Some(HistoryJump {
      text:   self.revisions[parent].text.clone(),
      target: parent,
    })
  }

  /// Prepare a redo without mutating history state. `None` when the current
  /// revision has no child.
  pub fn redo(&self) -> Option<HistoryJump> {
    let last_child = self.revisions[self.current].last_child?;

    Some(HistoryJump {
      text:   self.revisions[last_child.get()].text.clone(),
      target: last_child.get(),
    })
  }

  /// Apply a jump, updating the current revision.
  ///
  /// # Errors
  /// Returns an error if the jump target is out of bounds.
  pub fn apply_jump(&mut self, jump: &HistoryJump) -> Result<()> {
    self.validate_revision(jump.target)?;
    self.current = jump.target;
    Ok(())
  }
}
