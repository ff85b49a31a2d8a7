//! # Protocol Registry
//!
//! Maps protocol identifiers to their [`Aggregator`]. A registry is built once
//! and is immutable afterwards: lookups are plain map reads and need no
//! locking.
//!
//! ## Building
//!
//! ```
//! use rollcode::escpos::EscPos;
//! use rollcode::registry::Registry;
//!
//! let registry = Registry::builder().register(EscPos::new()).build()?;
//! assert!(registry.resolve("esc/pos").is_ok());
//! assert!(registry.resolve("zpl").is_err());
//! # Ok::<(), rollcode::RollcodeError>(())
//! ```
//!
//! Construction checks that no identifier is registered twice and that every
//! capability an aggregator declares actually resolves. A broken registration
//! fails here, not at the first print job.
//!
//! ## Process-wide Registry
//!
//! [`init`] installs a registry for the whole process, once. [`global`]
//! returns it, installing [`Registry::with_defaults`] if nothing was
//! installed yet.

use std::collections::HashMap;
use std::sync::OnceLock;

use tracing::info;

use crate::capability::CapabilityKind;
use crate::error::{Result, RollcodeError};
use crate::protocol::{Aggregator, ProtocolId};

static GLOBAL: OnceLock<Registry> = OnceLock::new();

/// Immutable protocol lookup table.
#[derive(Debug, Clone)]
pub struct Registry {
    protocols: HashMap<ProtocolId, Aggregator>,
}

impl Registry {
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::default()
    }

    /// ESC/POS and ZPL.
    pub fn with_defaults() -> Self {
        let protocols = ProtocolId::ALL
            .iter()
            .map(|&id| (id, Aggregator::new(id)))
            .collect();
        Self { protocols }
    }

    /// Look up by textual identifier (`"escpos"`, `"ESC/POS"`, `"zpl"`, ...).
    pub fn resolve(&self, id: &str) -> Result<&Aggregator> {
        let parsed: ProtocolId = id.parse()?;
        self.protocols
            .get(&parsed)
            .ok_or_else(|| RollcodeError::UnknownProtocol(id.to_string()))
    }

    pub fn get(&self, id: ProtocolId) -> Result<&Aggregator> {
        self.protocols
            .get(&id)
            .ok_or_else(|| RollcodeError::UnknownProtocol(id.to_string()))
    }

    pub fn contains(&self, id: ProtocolId) -> bool {
        self.protocols.contains_key(&id)
    }

    /// Registered identifiers, sorted.
    pub fn ids(&self) -> Vec<ProtocolId> {
        let mut ids: Vec<_> = self.protocols.keys().copied().collect();
        ids.sort();
        ids
    }

    pub fn len(&self) -> usize {
        self.protocols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.protocols.is_empty()
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

/// Collects aggregators and validates them on [`build`](RegistryBuilder::build).
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    entries: Vec<(Aggregator, &'static [CapabilityKind])>,
}

impl RegistryBuilder {
    /// Register an aggregator with the capability set it declares.
    pub fn register(self, aggregator: impl Into<Aggregator>) -> Self {
        let aggregator = aggregator.into();
        let declared = aggregator.capabilities();
        self.register_declared(aggregator, declared)
    }

    /// Register with an explicit declared capability set.
    ///
    /// Used for profiles that advertise a subset (or, by mistake, a superset)
    /// of what the protocol implements. A superset fails at build time.
    ///
    /// The declared set is a construction check only and is not stored. The
    /// registered aggregator still serves every capability its protocol
    /// implements. Callers gating features per printer keep the subset
    /// themselves.
    pub fn register_declared(
        mut self,
        aggregator: impl Into<Aggregator>,
        declared: &'static [CapabilityKind],
    ) -> Self {
        self.entries.push((aggregator.into(), declared));
        self
    }

    pub fn build(self) -> Result<Registry> {
        let mut protocols = HashMap::with_capacity(self.entries.len());
        for (aggregator, declared) in self.entries {
            for &kind in declared {
                aggregator.capability(kind)?;
            }
            let id = aggregator.id();
            if protocols.insert(id, aggregator).is_some() {
                return Err(RollcodeError::DuplicateProtocol(id));
            }
        }
        Ok(Registry { protocols })
    }
}

/// Install the process-wide registry.
///
/// Fails with [`RollcodeError::RegistryAlreadyInitialized`] if a registry is
/// already installed, including one installed implicitly by [`global`].
pub fn init(registry: Registry) -> Result<()> {
    let ids = registry.ids();
    GLOBAL
        .set(registry)
        .map_err(|_| RollcodeError::RegistryAlreadyInitialized)?;
    info!(protocols = ?ids, "Protocol registry installed");
    Ok(())
}

/// The process-wide registry.
pub fn global() -> &'static Registry {
    GLOBAL.get_or_init(|| {
        let registry = Registry::with_defaults();
        info!(protocols = ?registry.ids(), "Protocol registry installed with defaults");
        registry
    })
}
