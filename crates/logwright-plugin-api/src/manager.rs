//! The loading orchestrator.
//!
//! `ParserManager` ties the pipeline together: scan a namespace, qualify each
//! candidate, register the survivors, and construct initialized instances on
//! demand. Structural rejections and per-parser runtime failures are caught
//! at this boundary, logged, and collected into reports; a bad parser never
//! aborts the rest of a scan or a batch.

use crate::config::HostConfig;
use crate::instance::ParserInstance;
use crate::registry::ParserRegistry;
use logwright_parser_core::LogRecord;
use logwright_runtime::{qualify, scan, Namespace, Rejection, RuntimeError, RuntimeResult};
use tracing::{debug, info, warn};

/// A candidate the capability filter turned away.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedCandidate {
    /// The candidate's symbol name.
    pub name: String,
    /// Why it was rejected.
    pub reason: Rejection,
}

/// Outcome of loading one namespace.
#[derive(Debug, Clone, Default)]
pub struct ScanReport {
    /// Names registered, in registration order.
    pub registered: Vec<String>,
    /// Candidates rejected by the capability filter.
    pub rejected: Vec<RejectedCandidate>,
}

/// Outcome of spawning instances for every enabled registered parser.
#[derive(Debug, Default)]
pub struct SpawnReport {
    /// Successfully constructed and initialized instances, in registry order.
    pub instances: Vec<ParserInstance>,
    /// Parsers whose construction or init hook failed.
    pub failed: Vec<(String, RuntimeError)>,
}

/// Per-parser outcome of dispatching one record.
#[derive(Debug)]
pub struct Dispatch {
    /// The parser name.
    pub parser: String,
    /// What the parser did with the record.
    pub outcome: DispatchOutcome,
}

/// What a parser did with one record.
#[derive(Debug)]
pub enum DispatchOutcome {
    /// The parser produced or augmented the record.
    Matched,
    /// The payload was not a match; not an error.
    NoMatch,
    /// The parser signaled a failure; reported, never fatal to the batch.
    Failed(RuntimeError),
}

impl DispatchOutcome {
    /// Check whether this outcome is a failure.
    pub fn is_failure(&self) -> bool {
        matches!(self, DispatchOutcome::Failed(_))
    }
}

/// Orchestrates scanning, filtering, registration, and instantiation.
pub struct ParserManager {
    config: HostConfig,
    registry: ParserRegistry,
}

impl ParserManager {
    /// Create a manager with default host configuration.
    pub fn new() -> Self {
        Self::with_config(HostConfig::default())
    }

    /// Create a manager with the given host configuration.
    pub fn with_config(config: HostConfig) -> Self {
        Self {
            config,
            registry: ParserRegistry::new(),
        }
    }

    /// Scan a namespace and register every qualifying candidate.
    ///
    /// Rejected candidates are logged and collected in the report; the scan
    /// always runs to completion.
    pub fn load_namespace(&mut self, namespace: &Namespace) -> ScanReport {
        let mut report = ScanReport::default();

        for candidate in scan(namespace) {
            match qualify(&candidate) {
                Ok(descriptor) => {
                    info!(
                        namespace = %namespace.name(),
                        parser = %descriptor.name(),
                        accepts_config = descriptor.accepts_config(),
                        "Registered parser"
                    );
                    report.registered.push(descriptor.name().to_string());
                    self.registry.register(descriptor);
                }
                Err(reason) => {
                    warn!(
                        namespace = %namespace.name(),
                        candidate = %candidate.name(),
                        "Rejected candidate: {reason}"
                    );
                    report.rejected.push(RejectedCandidate {
                        name: candidate.name().to_string(),
                        reason,
                    });
                }
            }
        }

        info!(
            namespace = %namespace.name(),
            registered = report.registered.len(),
            rejected = report.rejected.len(),
            "Namespace scan complete"
        );
        report
    }

    /// The underlying registry.
    pub fn registry(&self) -> &ParserRegistry {
        &self.registry
    }

    /// Mutable access to the underlying registry.
    pub fn registry_mut(&mut self) -> &mut ParserRegistry {
        &mut self.registry
    }

    /// The host configuration.
    pub fn config(&self) -> &HostConfig {
        &self.config
    }

    /// Construct and initialize an instance of a registered parser, applying
    /// the per-parser options from the host configuration.
    pub fn spawn(&self, name: &str) -> RuntimeResult<ParserInstance> {
        let descriptor = self
            .registry
            .get(name)
            .ok_or_else(|| RuntimeError::UnknownParser(name.to_string()))?;

        let settings = self.config.parser(name);
        if !settings.enabled {
            return Err(RuntimeError::DisabledParser(name.to_string()));
        }

        let mut instance = ParserInstance::construct(descriptor);
        instance.initialize(&settings.options())?;
        Ok(instance)
    }

    /// Spawn an instance for every enabled registered parser, in registry
    /// order.
    ///
    /// Init failures are caught here, logged, and collected in the report;
    /// one failing parser does not prevent the others from spawning.
    pub fn spawn_enabled(&self) -> SpawnReport {
        let mut report = SpawnReport::default();

        for descriptor in self.registry.iter() {
            let name = descriptor.name();
            if !self.config.parser(name).enabled {
                debug!(parser = %name, "Skipping disabled parser");
                continue;
            }
            match self.spawn(name) {
                Ok(instance) => report.instances.push(instance),
                Err(error) => {
                    warn!(parser = %name, "Failed to spawn parser: {error}");
                    report.failed.push((name.to_string(), error));
                }
            }
        }

        report
    }
}

impl Default for ParserManager {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ParserManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ParserManager")
            .field("registry", &self.registry)
            .finish()
    }
}

/// Run every instance against one record.
///
/// Failures are caught per parser: a parser that signals an error is
/// reported in its [`Dispatch`] entry and the remaining instances still run.
/// The record accumulates whatever each matching parser wrote into it.
pub fn dispatch(
    instances: &mut [ParserInstance],
    record: &mut LogRecord,
    payload: &str,
) -> Vec<Dispatch> {
    instances
        .iter_mut()
        .map(|instance| {
            let outcome = match instance.process(record, payload) {
                Ok(true) => DispatchOutcome::Matched,
                Ok(false) => DispatchOutcome::NoMatch,
                Err(error) => {
                    warn!(parser = %instance.name(), "Parser failed on record: {error}");
                    DispatchOutcome::Failed(error)
                }
            };
            Dispatch {
                parser: instance.name().to_string(),
                outcome,
            }
        })
        .collect()
}
