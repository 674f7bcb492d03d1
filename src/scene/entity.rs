use crate::foundation::core::{DVec3, Transform3};

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct EntityId(pub u32);

/// Per-line animated state. Both fields are absolute values, replaced every tick.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct LineState {
    pub start: DVec3,
    pub end: DVec3,
    /// Depth (z) of the start and end vertex.
    pub vertex_depth: [f64; 2],
    /// Emissive intensity of the line material.
    pub shimmer: f64,
}

impl LineState {
    pub fn new(start: DVec3, end: DVec3) -> Self {
        Self {
            start,
            end,
            vertex_depth: [start.z, end.z],
            shimmer: 0.0,
        }
    }

    /// Current vertex positions with the animated depth applied.
    pub fn vertices(&self) -> [DVec3; 2] {
        [
            DVec3::new(self.start.x, self.start.y, self.vertex_depth[0]),
            DVec3::new(self.end.x, self.end.y, self.vertex_depth[1]),
        ]
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum EntityKind {
    FloatingSphere { radius: f64 },
    RotatingSolid { size: DVec3 },
    ConnectorLine(LineState),
}

/// One animatable scene entity.
///
/// `base_position` and `phase` are fixed at construction. Only motion application mutates the
/// transform and line state.
#[derive(Clone, Debug, PartialEq)]
pub struct Entity {
    id: EntityId,
    kind: EntityKind,
    base_position: DVec3,
    phase: f64,
    transform: Transform3,
}

impl Entity {
    pub fn new(id: EntityId, kind: EntityKind, base_position: DVec3, phase: f64) -> Self {
        Self {
            id,
            kind,
            base_position,
            phase,
            transform: Transform3::at(base_position),
        }
    }

    pub fn sphere(id: EntityId, radius: f64, base_position: DVec3, phase: f64) -> Self {
        Self::new(id, EntityKind::FloatingSphere { radius }, base_position, phase)
    }

    pub fn solid(id: EntityId, size: DVec3, base_position: DVec3) -> Self {
        Self::new(id, EntityKind::RotatingSolid { size }, base_position, 0.0)
    }

    pub fn line(id: EntityId, start: DVec3, end: DVec3, phase: f64) -> Self {
        Self::new(
            id,
            EntityKind::ConnectorLine(LineState::new(start, end)),
            start.lerp(end, 0.5),
            phase,
        )
    }

    pub fn id(&self) -> EntityId {
        self.id
    }

    pub fn kind(&self) -> &EntityKind {
        &self.kind
    }

    pub fn base_position(&self) -> DVec3 {
        self.base_position
    }

    pub fn phase(&self) -> f64 {
        self.phase
    }

    pub fn transform(&self) -> Transform3 {
        self.transform
    }

    pub fn line_state(&self) -> Option<&LineState> {
        match &self.kind {
            EntityKind::ConnectorLine(l) => Some(l),
            _ => None,
        }
    }

    /// Disjoint mutable access for motion application.
    pub(crate) fn animated_mut(&mut self) -> (&mut EntityKind, &mut Transform3) {
        (&mut self.kind, &mut self.transform)
    }
}
