//! Case commands and their executor.
//!
//! A command invocation moves through a fixed set of states:
//!
//! ```text
//! Idle -> Validating -> Applying -> Committed
//!              \            \
//!               `----------- `--> Aborted
//! ```
//!
//! Only `Committed` and `Aborted` are observable by the host. `Aborted`
//! always leaves the buffer exactly as it was before the call.

use std::{
  fmt,
  str::FromStr,
};

use thiserror::Error;

use crate::{
  Tendril,
  case_convention::{
    to_lower_case_with,
    to_swap_case_with,
    to_title_case_with,
    to_upper_case_with,
  },
  config::CaseConfig,
  selection::{
    SelectionSet,
    resolve_regions,
  },
  transaction::{
    Buffer,
    EditScope,
    EditTransaction,
    TextSource,
  },
};

pub type Result<T> = std::result::Result<T, CaseCommandError>;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CaseCommandError {
  #[error("unknown case command: {name}")]
  UnknownCommand { name: String },
  #[error("buffer is not editable")]
  BufferNotEditable(#[source] Box<dyn std::error::Error + Send + Sync>),
  #[error("region {start}..{end} is invalid for buffer length {len}")]
  InvalidRegion {
    start: usize,
    end:   usize,
    len:   usize,
  },
}

type TransformFn = fn(&str, &mut Tendril);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CaseCommand {
  Upper,
  Lower,
  Swap,
  Title,
}

impl CaseCommand {
  pub const ALL: [CaseCommand; 4] = [Self::Upper, Self::Lower, Self::Swap, Self::Title];

  pub fn from_name(name: &str) -> Option<Self> {
    match name {
      "upper_case" => Some(Self::Upper),
      "lower_case" => Some(Self::Lower),
      "swap_case" => Some(Self::Swap),
      "title_case" => Some(Self::Title),
      _ => None,
    }
  }

  pub const fn name(self) -> &'static str {
    match self {
      Self::Upper => "upper_case",
      Self::Lower => "lower_case",
      Self::Swap => "swap_case",
      Self::Title => "title_case",
    }
  }

  fn transform_fn(self) -> TransformFn {
    match self {
      Self::Upper => |text, buf| to_upper_case_with(text.chars(), buf),
      Self::Lower => |text, buf| to_lower_case_with(text.chars(), buf),
      Self::Swap => |text, buf| to_swap_case_with(text.chars(), buf),
      Self::Title => |text, buf| to_title_case_with(text.chars(), buf),
    }
  }

  /// Transform `text`. The result has as many codepoints as the input.
  pub fn apply(self, text: &str) -> Tendril {
    let mut res = Tendril::new();
    (self.transform_fn())(text, &mut res);
    res
  }
}

impl fmt::Display for CaseCommand {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.name())
  }
}

impl FromStr for CaseCommand {
  type Err = CaseCommandError;

  fn from_str(name: &str) -> Result<Self> {
    Self::from_name(name).ok_or_else(|| CaseCommandError::UnknownCommand { name: name.into() })
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CommandState {
  Idle,
  Validating,
  Applying,
  Committed,
  Aborted,
}

/// Runs case commands against host buffers with a fixed configuration.
#[derive(Debug, Default, Clone)]
pub struct CommandExecutor {
  config: CaseConfig,
}

impl CommandExecutor {
  pub fn new(config: CaseConfig) -> Self {
    Self { config }
  }

  pub fn config(&self) -> &CaseConfig {
    &self.config
  }

  /// Run the command called `name` over `selection`.
  pub fn run<B: Buffer>(&self, name: &str, buffer: &mut B, selection: &SelectionSet) -> Result<()> {
    let command = name.parse::<CaseCommand>()?;
    self.run_command(command, buffer, selection)
  }

  /// Run an already resolved command over `selection`.
  pub fn run_command<B: Buffer>(
    &self,
    command: CaseCommand,
    buffer: &mut B,
    selection: &SelectionSet,
  ) -> Result<()> {
    let mut state = CommandState::Idle;
    let result = self.execute(command, buffer, selection, &mut state);
    tracing::debug!(
      %command,
      regions = selection.len(),
      ?state,
      "case command finished"
    );
    result
  }

  fn execute<B: Buffer>(
    &self,
    command: CaseCommand,
    buffer: &mut B,
    selection: &SelectionSet,
    state: &mut CommandState,
  ) -> Result<()> {
    *state = CommandState::Validating;
    let edit = match buffer.begin_edit() {
      Ok(edit) => edit,
      Err(err) => {
        *state = CommandState::Aborted;
        tracing::debug!(%err, "host refused edit transaction");
        return Err(CaseCommandError::BufferNotEditable(Box::new(err)));
      },
    };
    let mut scope = EditScope::new(edit);

    let regions = resolve_regions(selection, scope.len_chars(), &self.config);
    *state = CommandState::Applying;

    for region in regions {
      let len = scope.len_chars();
      if !region.is_valid_for(len) {
        *state = CommandState::Aborted;
        tracing::debug!(%region, len, "invalid region, rolling back");
        scope.rollback();
        return Err(CaseCommandError::InvalidRegion {
          start: region.start,
          end: region.end,
          len,
        });
      }
      if region.is_empty() {
        continue;
      }

      let original = scope.read_region(region);
      let transformed = command.apply(&original);
      if transformed.as_str() == original {
        continue;
      }
      drop(original);

      tracing::trace!(%region, "replacing region");
      scope.replace_region(region, &transformed);
    }

    scope.commit();
    *state = CommandState::Committed;
    Ok(())
  }
}

/// Run the command called `name` with the default configuration.
pub fn run_case_command<B: Buffer>(name: &str, buffer: &mut B, selection: &SelectionSet) -> Result<()> {
  CommandExecutor::default().run(name, buffer, selection)
}
