use crate::{
    foundation::core::{DVec3, Transform3},
    foundation::error::{BackdropError, BackdropResult},
    scene::entity::{Entity, EntityId, EntityKind},
};

/// Fixed-size, ordered collection of animatable entities.
///
/// Order is render order. There is no insert/remove API: the count is fixed at construction.
#[derive(Clone, Debug)]
pub struct SceneState {
    entities: Vec<Entity>,
}

impl SceneState {
    pub fn new(entities: Vec<Entity>) -> BackdropResult<Self> {
        let mut ids: Vec<EntityId> = entities.iter().map(Entity::id).collect();
        ids.sort_unstable();
        if ids.windows(2).any(|w| w[0] == w[1]) {
            return Err(BackdropError::validation("scene entity ids must be unique"));
        }
        Ok(Self { entities })
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    pub fn get(&self, id: EntityId) -> Option<&Entity> {
        self.entities.iter().find(|e| e.id() == id)
    }

    pub(crate) fn entities_mut(&mut self) -> &mut [Entity] {
        &mut self.entities
    }

    pub fn snapshot(&self) -> SceneSnapshot {
        SceneSnapshot {
            entities: self
                .entities
                .iter()
                .map(|e| EntitySnapshot {
                    id: e.id(),
                    kind: e.kind().clone(),
                    base_position: e.base_position(),
                    phase: e.phase(),
                    transform: e.transform(),
                })
                .collect(),
        }
    }
}

/// Serializable view of the scene at one instant.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SceneSnapshot {
    pub entities: Vec<EntitySnapshot>,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct EntitySnapshot {
    pub id: EntityId,
    pub kind: EntityKind,
    pub base_position: DVec3,
    pub phase: f64,
    pub transform: Transform3,
}

#[cfg(test)]
#[path = "../../tests/unit/scene/state.rs"]
mod tests;
