use crate::{
    foundation::core::DVec3,
    foundation::error::{BackdropError, BackdropResult},
    foundation::rng::Rng64,
    scene::entity::{Entity, EntityId},
    scene::state::SceneState,
};

/// Declarative description of the default background scene.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SceneLayout {
    pub sphere_count: u32,
    pub sphere_radius: f64,
    /// Spheres are scattered uniformly in `[-e, e)` on each axis.
    pub sphere_half_extent: DVec3,
    pub solid_size: DVec3,
    pub solid_position: DVec3,
    pub line_count: u32,
    pub line_start_x: f64,
    pub line_end_x: f64,
    pub line_spacing: f64,
    pub line_depth: f64,
}

impl Default for SceneLayout {
    fn default() -> Self {
        Self {
            sphere_count: 8,
            sphere_radius: 0.3,
            sphere_half_extent: DVec3::new(4.0, 3.0, 2.0),
            solid_size: DVec3::new(1.0, 0.7, 0.5),
            solid_position: DVec3::ZERO,
            line_count: 10,
            line_start_x: -6.0,
            line_end_x: 6.0,
            line_spacing: 0.5,
            line_depth: 0.8,
        }
    }
}

impl SceneLayout {
    pub fn validate(&self) -> BackdropResult<()> {
        if !self.sphere_radius.is_finite() || self.sphere_radius <= 0.0 {
            return Err(BackdropError::validation(
                "scene sphere_radius must be finite and > 0",
            ));
        }
        for (name, v) in [
            ("sphere_half_extent", self.sphere_half_extent),
            ("solid_size", self.solid_size),
            ("solid_position", self.solid_position),
        ] {
            if !v.is_finite() {
                return Err(BackdropError::validation(format!(
                    "scene {name} must be finite"
                )));
            }
        }
        if self.sphere_half_extent.min_element() < 0.0 {
            return Err(BackdropError::validation(
                "scene sphere_half_extent must be >= 0",
            ));
        }
        for (name, v) in [
            ("line_start_x", self.line_start_x),
            ("line_end_x", self.line_end_x),
            ("line_spacing", self.line_spacing),
            ("line_depth", self.line_depth),
        ] {
            if !v.is_finite() {
                return Err(BackdropError::validation(format!(
                    "scene {name} must be finite"
                )));
            }
        }
        Ok(())
    }

    /// Build the scene. Randomness is consumed here only; the result is fixed-size.
    ///
    /// Render order is spheres, then the solid, then lines. Phases are the entity's index within
    /// its group.
    pub fn build(&self, seed: u64) -> BackdropResult<SceneState> {
        self.validate()?;

        let mut rng = Rng64::new(seed);
        let mut next_id = 0u32;
        let mut alloc = || {
            let id = EntityId(next_id);
            next_id += 1;
            id
        };

        let total = self.sphere_count as usize + 1 + self.line_count as usize;
        let mut entities = Vec::with_capacity(total);

        let ext = self.sphere_half_extent;
        for i in 0..self.sphere_count {
            let pos = DVec3::new(
                rng.next_centered(ext.x),
                rng.next_centered(ext.y),
                rng.next_centered(ext.z),
            );
            entities.push(Entity::sphere(
                alloc(),
                self.sphere_radius,
                pos,
                f64::from(i),
            ));
        }

        entities.push(Entity::solid(alloc(), self.solid_size, self.solid_position));

        let mid = f64::from(self.line_count / 2);
        for i in 0..self.line_count {
            let y = (f64::from(i) - mid) * self.line_spacing;
            entities.push(Entity::line(
                alloc(),
                DVec3::new(self.line_start_x, y, self.line_depth),
                DVec3::new(self.line_end_x, y, self.line_depth),
                f64::from(i),
            ));
        }

        SceneState::new(entities)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/build.rs"]
mod tests;
