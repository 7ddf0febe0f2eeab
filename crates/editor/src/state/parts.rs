//! Ordered part collection

use shared::{Part, PartId, PartPatch, PartType};

use crate::error::{EditorError, Result};

/// Smallest allowed scale component
pub const MIN_SCALE: f64 = 0.1;

/// Result of patching a part by id
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateOutcome {
    Updated,
    /// No part with that id; nothing changed
    NotFound,
}

/// Parts in insertion order (= display order). Ids are unique.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PartCollection {
    parts: Vec<Part>,
}

impl PartCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a collection from loaded parts, rejecting repeated ids
    pub fn from_parts(parts: Vec<Part>) -> Result<Self> {
        let mut collection = Self::new();
        for part in parts {
            collection.add(part)?;
        }
        Ok(collection)
    }

    /// Append a part
    pub fn add(&mut self, part: Part) -> Result<()> {
        if self.contains(&part.id) {
            return Err(EditorError::DuplicateId(part.id));
        }
        self.parts.push(part);
        Ok(())
    }

    /// Patch a part in place. Vector fields merge per axis, scale is clamped to [`MIN_SCALE`].
    pub fn update(&mut self, id: &str, patch: &PartPatch) -> UpdateOutcome {
        let Some(part) = self.get_mut(id) else {
            return UpdateOutcome::NotFound;
        };

        if let Some(name) = &patch.name {
            part.name = name.clone();
        }
        if let Some(position) = &patch.position {
            part.position.apply(position);
        }
        if let Some(rotation) = &patch.rotation {
            part.rotation.apply(rotation);
        }
        if let Some(scale) = &patch.scale {
            part.scale.apply(scale);
            part.scale.clamp_min(MIN_SCALE);
        }
        UpdateOutcome::Updated
    }

    /// Remove a part. Missing ids are ignored.
    pub fn remove(&mut self, id: &str) -> Option<Part> {
        let index = self.parts.iter().position(|p| p.id == id)?;
        Some(self.parts.remove(index))
    }

    pub fn get(&self, id: &str) -> Option<&Part> {
        self.parts.iter().find(|p| p.id == id)
    }

    fn get_mut(&mut self, id: &str) -> Option<&mut Part> {
        self.parts.iter_mut().find(|p| p.id == id)
    }

    /// All parts in insertion order
    pub fn list(&self) -> &[Part] {
        &self.parts
    }

    pub fn contains(&self, id: &str) -> bool {
        self.parts.iter().any(|p| p.id == id)
    }

    pub fn len(&self) -> usize {
        self.parts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    /// Number of parts of the given kind
    pub fn count_of_type(&self, part_type: PartType) -> usize {
        self.parts.iter().filter(|p| p.part_type == part_type).count()
    }

    pub fn ids(&self) -> impl Iterator<Item = &PartId> {
        self.parts.iter().map(|p| &p.id)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Part> {
        self.parts.iter()
    }

    pub fn to_vec(&self) -> Vec<Part> {
        self.parts.clone()
    }
}

impl<'a> IntoIterator for &'a PartCollection {
    type Item = &'a Part;
    type IntoIter = std::slice::Iter<'a, Part>;

    fn into_iter(self) -> Self::IntoIter {
        self.parts.iter()
    }
}
