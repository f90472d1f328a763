//! A small composable state store.
//!
//! Feature modules register under a unique namespace when the store is built.
//! Callers either borrow a module by type or address its getters and actions
//! by `"namespace/name"` path, with `serde_json::Value` payloads.

pub mod top_toolbar;

pub use top_toolbar::TopToolbar;

use log::debug;
use serde_json::Value;
use std::any::Any;
use std::collections::HashMap;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("namespace '{0}' is already registered")]
    DuplicateNamespace(String),
    #[error("'{0}' is not a namespaced path")]
    InvalidPath(String),
    #[error("unknown namespace '{0}'")]
    UnknownNamespace(String),
    #[error("unknown getter '{0}'")]
    UnknownGetter(String),
    #[error("unknown action '{0}'")]
    UnknownAction(String),
    #[error("invalid payload for action '{action}': {source}")]
    InvalidPayload {
        action: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Gives a module type its fixed namespace key
pub trait Namespaced {
    const NAMESPACE: &'static str;
}

/// A state slice that can live inside a [`Store`]
pub trait StoreModule: Any + Send + Sync {
    /// Reads a named getter, `None` if the module has no such getter
    fn getter(&self, name: &str) -> Option<Value>;

    /// Runs a named action with its payload
    fn dispatch(&mut self, action: &str, payload: Value) -> Result<(), StoreError>;

    fn as_any(&self) -> &dyn Any;

    fn as_any_mut(&mut self) -> &mut dyn Any;
}

#[derive(Default)]
pub struct StoreBuilder {
    modules: HashMap<&'static str, Box<dyn StoreModule>>,
}

impl StoreBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a module under its namespace
    pub fn register<M>(mut self, module: M) -> Result<Self, StoreError>
    where
        M: StoreModule + Namespaced,
    {
        if self.modules.contains_key(M::NAMESPACE) {
            return Err(StoreError::DuplicateNamespace(M::NAMESPACE.to_string()));
        }
        debug!("Registering store module '{}'", M::NAMESPACE);
        self.modules.insert(M::NAMESPACE, Box::new(module));
        Ok(self)
    }

    pub fn build(self) -> Store {
        Store {
            modules: self.modules,
        }
    }
}

/// Root store composed from namespaced modules
pub struct Store {
    modules: HashMap<&'static str, Box<dyn StoreModule>>,
}

impl Store {
    pub fn builder() -> StoreBuilder {
        StoreBuilder::new()
    }

    pub fn namespaces(&self) -> Vec<&'static str> {
        let mut namespaces: Vec<_> = self.modules.keys().copied().collect();
        namespaces.sort_unstable();
        namespaces
    }

    pub fn module<M>(&self) -> Option<&M>
    where
        M: StoreModule + Namespaced,
    {
        self.modules
            .get(M::NAMESPACE)
            .and_then(|module| module.as_any().downcast_ref::<M>())
    }

    pub fn module_mut<M>(&mut self) -> Option<&mut M>
    where
        M: StoreModule + Namespaced,
    {
        self.modules
            .get_mut(M::NAMESPACE)
            .and_then(|module| module.as_any_mut().downcast_mut::<M>())
    }

    /// Reads a getter by `"namespace/getter"` path
    pub fn getter(&self, path: &str) -> Result<Value, StoreError> {
        let (namespace, name) = split_path(path)?;
        let module = self
            .modules
            .get(namespace)
            .ok_or_else(|| StoreError::UnknownNamespace(namespace.to_string()))?;
        module
            .getter(name)
            .ok_or_else(|| StoreError::UnknownGetter(path.to_string()))
    }

    /// Dispatches an action by `"namespace/action"` path
    pub fn dispatch(&mut self, path: &str, payload: Value) -> Result<(), StoreError> {
        let (namespace, action) = split_path(path)?;
        let module = self
            .modules
            .get_mut(namespace)
            .ok_or_else(|| StoreError::UnknownNamespace(namespace.to_string()))?;
        debug!("Dispatching {}", path);
        module.dispatch(action, payload)
    }
}

fn split_path(path: &str) -> Result<(&str, &str), StoreError> {
    match path.split_once('/') {
        Some((namespace, name)) if !namespace.is_empty() && !name.is_empty() => {
            Ok((namespace, name))
        }
        _ => Err(StoreError::InvalidPath(path.to_string())),
    }
}
