//! Parser instance lifecycle.
//!
//! An instance moves through an explicit state machine:
//!
//! ```text
//! Constructed --initialize--> Ready --process--> Ready ... --dispose--> Disposed
//!       \
//!        `--init hook failed--> Failed (terminal)
//! ```
//!
//! Initialization runs the descriptor's init hook at most once, and only when
//! the descriptor accepts configuration; for hook-less parsers it is a pure
//! state transition. A disposed instance rejects every further call and never
//! touches the caller's record.

use logwright_parser_core::{LogRecord, Parser, ParserOptions};
use logwright_runtime::{ParserDescriptor, RuntimeError, RuntimeResult};
use tracing::{debug, warn};

/// Lifecycle state of a parser instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstanceState {
    /// Constructed, not yet initialized.
    Constructed,
    /// Initialized (or needing no initialization) and usable.
    Ready,
    /// The init hook failed; the instance is permanently unusable.
    Failed,
    /// Explicitly released; no further calls permitted.
    Disposed,
}

/// A constructed parser bound to its descriptor.
pub struct ParserInstance {
    descriptor: ParserDescriptor,
    parser: Option<Box<dyn Parser>>,
    state: InstanceState,
}

impl ParserInstance {
    /// Construct a fresh instance from a validated descriptor.
    pub fn construct(descriptor: &ParserDescriptor) -> Self {
        Self {
            parser: Some(descriptor.construct()),
            descriptor: descriptor.clone(),
            state: InstanceState::Constructed,
        }
    }

    /// The descriptor this instance was constructed from.
    pub fn descriptor(&self) -> &ParserDescriptor {
        &self.descriptor
    }

    /// The parser name.
    pub fn name(&self) -> &str {
        self.descriptor.name()
    }

    /// Current lifecycle state.
    pub fn state(&self) -> InstanceState {
        self.state
    }

    /// Check whether the instance has been disposed.
    pub fn is_disposed(&self) -> bool {
        self.state == InstanceState::Disposed
    }

    /// Run the init hook, at most once, iff the descriptor accepts
    /// configuration.
    ///
    /// Repeated calls on a ready instance are no-ops; no re-initialization
    /// ever occurs. A hook failure moves the instance to the terminal
    /// `Failed` state and surfaces as [`RuntimeError::InitFailed`].
    pub fn initialize(&mut self, options: &ParserOptions) -> RuntimeResult<()> {
        match self.state {
            InstanceState::Disposed => Err(RuntimeError::UseAfterDispose),
            InstanceState::Failed => Err(RuntimeError::InstanceNotReady {
                name: self.name().to_string(),
            }),
            InstanceState::Ready => Ok(()),
            InstanceState::Constructed => {
                if !self.descriptor.accepts_config() {
                    self.state = InstanceState::Ready;
                    return Ok(());
                }
                let Some(parser) = self.parser.as_mut() else {
                    return Err(RuntimeError::UseAfterDispose);
                };
                match parser.init(options) {
                    Ok(()) => {
                        debug!(parser = %self.descriptor.name(), "Parser initialized");
                        self.state = InstanceState::Ready;
                        Ok(())
                    }
                    Err(source) => {
                        warn!(
                            parser = %self.descriptor.name(),
                            error = %source,
                            "Init hook failed"
                        );
                        self.state = InstanceState::Failed;
                        Err(RuntimeError::InitFailed {
                            name: self.descriptor.name().to_string(),
                            source,
                        })
                    }
                }
            }
        }
    }

    /// Run the parser against one record.
    ///
    /// `Ok(false)` means "no match / nothing to do" and is not an error. A
    /// parser-signaled failure surfaces as [`RuntimeError::ProcessFailed`]
    /// and leaves the instance usable for subsequent records. Calling a
    /// disposed instance returns [`RuntimeError::UseAfterDispose`] without
    /// touching the record.
    pub fn process(&mut self, record: &mut LogRecord, payload: &str) -> RuntimeResult<bool> {
        match self.state {
            InstanceState::Disposed => Err(RuntimeError::UseAfterDispose),
            InstanceState::Constructed | InstanceState::Failed => {
                Err(RuntimeError::InstanceNotReady {
                    name: self.name().to_string(),
                })
            }
            InstanceState::Ready => {
                let Some(parser) = self.parser.as_mut() else {
                    return Err(RuntimeError::UseAfterDispose);
                };
                parser
                    .process(record, payload)
                    .map_err(|source| RuntimeError::ProcessFailed {
                        name: self.descriptor.name().to_string(),
                        source,
                    })
            }
        }
    }

    /// Release the instance. Idempotent; every later call on the instance
    /// fails with [`RuntimeError::UseAfterDispose`].
    pub fn dispose(&mut self) {
        self.parser = None;
        self.state = InstanceState::Disposed;
    }
}

impl std::fmt::Debug for ParserInstance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ParserInstance")
            .field("name", &self.descriptor.name())
            .field("state", &self.state)
            .finish()
    }
}
