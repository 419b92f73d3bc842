#![forbid(unsafe_code)]

//! Name-indexed storage for the components of one creation cycle.

use ahash::HashMap;
use glider_core::state::RenderData;

use crate::component::Component;
use crate::error::ViewError;

/// Mapping from component name to its ordered instances.
///
/// Keys are fixed by the factory; instance identity lasts exactly one
/// `create`/`re_create` cycle.
#[derive(Default)]
pub struct Registry {
    instances: HashMap<String, Vec<Box<dyn Component>>>,
}

impl Registry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the instances for a name, replacing any previous set.
    pub fn insert(&mut self, name: impl Into<String>, components: Vec<Box<dyn Component>>) {
        self.instances.insert(name.into(), components);
    }

    /// Whether no components have been created yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }

    /// Drop all instances (end of a creation cycle).
    pub fn clear(&mut self) {
        self.instances.clear();
    }

    /// The instances under a name, or an empty slice when the name is
    /// absent. Non-erroring variant for hit-testing optional components.
    #[must_use]
    pub fn instances(&self, name: &str) -> &[Box<dyn Component>] {
        self.instances.get(name).map_or(&[], Vec::as_slice)
    }

    /// The first instance under a name.
    pub fn first(&self, name: &str) -> Result<&dyn Component, ViewError> {
        self.all(name)?
            .first()
            .map(AsRef::as_ref)
            .ok_or_else(|| ViewError::NoInstances { name: name.into() })
    }

    /// All instances under a name.
    pub fn all(&self, name: &str) -> Result<&[Box<dyn Component>], ViewError> {
        if self.instances.is_empty() {
            return Err(ViewError::EmptyRegistry);
        }
        match self.instances.get(name) {
            Some(components) if !components.is_empty() => Ok(components),
            Some(_) => Err(ViewError::NoInstances { name: name.into() }),
            None => Err(ViewError::UnknownComponent { name: name.into() }),
        }
    }

    /// Fan a render pass out to every stored instance.
    ///
    /// Instances that don't override [`Component::render`] keep the
    /// default no-op and are effectively skipped.
    pub fn render_all(&mut self, data: &RenderData) {
        for components in self.instances.values_mut() {
            for component in components.iter_mut() {
                component.render(data);
            }
        }
    }
}

impl std::fmt::Debug for Registry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut names: Vec<(&str, usize)> = self
            .instances
            .iter()
            .map(|(name, components)| (name.as_str(), components.len()))
            .collect();
        names.sort_unstable();
        f.debug_map().entries(names).finish()
    }
}
