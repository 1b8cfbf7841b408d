//! The process-wide variable registry.
//!
//! Expressions refer to variables by a stable integer id rather than by name. The set of valid
//! names is closed: it is declared exactly once, before any expression is built, and is read-only
//! for the rest of the process lifetime. Call [`init`] at application startup to declare the
//! names; if [`init`] is never called, the registry defaults to `x`, `y`, `z` on first use.
//!
//! The same ids index the value slots of an evaluation [`Ctxt`](crate::ctxt::Ctxt), so a context
//! is always a *total* binding over the registry.

use once_cell::sync::OnceCell;
use std::fmt;
use thiserror::Error;

/// Names registered when [`init`] is never called.
const DEFAULT_NAMES: [&str; 3] = ["x", "y", "z"];

static REGISTRY: OnceCell<Registry> = OnceCell::new();

/// The closed set of variable names declared for this process.
#[derive(Debug)]
pub struct Registry {
    names: Vec<String>,
}

impl Registry {
    /// Returns the name registered for the given id, if the id is in range.
    pub fn name(&self, id: usize) -> Option<&str> {
        self.names.get(id).map(|name| name.as_str())
    }

    /// Looks up a variable by its registered name.
    pub fn resolve(&self, name: &str) -> Option<Var> {
        self.names.iter().position(|n| n == name).map(Var)
    }

    /// The number of registered variables.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Returns true if no variables are registered.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Returns the registered variables in id order.
    pub fn vars(&self) -> impl Iterator<Item = Var> + '_ {
        (0..self.names.len()).map(Var)
    }
}

/// Returns the process-wide registry, initializing it with the default names if [`init`] was
/// never called.
pub fn registry() -> &'static Registry {
    REGISTRY.get_or_init(|| Registry {
        names: DEFAULT_NAMES.iter().map(|name| name.to_string()).collect(),
    })
}

/// Declares the set of variable names for this process.
///
/// Must be called before any variable is resolved, any context is created, or any expression is
/// rendered; once the registry exists it can never change.
pub fn init<I, S>(names: I) -> Result<(), RegistryError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let registry = Registry {
        names: names.into_iter().map(Into::into).collect(),
    };
    REGISTRY.set(registry).map_err(|_| RegistryError::AlreadyInitialized)
}

/// Errors arising from registry initialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// [`init`] was called after the registry was already established.
    #[error("the variable registry is already initialized")]
    AlreadyInitialized,
}

/// A reference to a registered variable.
///
/// A `Var` is just the variable's id; all name information lives in the [`Registry`]. Ids outside
/// the registry are representable (and render as `unknown`), but nothing hands them out; they
/// only arise from calling [`Var::new`] with an out-of-range id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Var(usize);

impl Var {
    /// Creates a variable reference from a raw id.
    pub fn new(id: usize) -> Self {
        Self(id)
    }

    /// The variable's stable id.
    pub fn id(self) -> usize {
        self.0
    }

    /// The variable's registered name, or `"unknown"` if the id is not registered.
    pub fn name(self) -> &'static str {
        registry().name(self.0).unwrap_or("unknown")
    }

    /// Looks up a variable by name in the process-wide registry.
    pub fn resolve(name: &str) -> Option<Self> {
        registry().resolve(name)
    }

    /// Returns all registered variables in id order.
    pub fn all() -> impl Iterator<Item = Var> {
        registry().vars()
    }
}

impl fmt::Display for Var {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
