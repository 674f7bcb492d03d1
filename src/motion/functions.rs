use crate::{
    foundation::core::DVec3,
    foundation::error::{BackdropError, BackdropResult},
    scene::entity::{Entity, EntityKind},
};

use std::f64::consts::TAU;

/// Constants for the per-tick motion formulas. `t` is always clock seconds.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct MotionParams {
    pub drift_rate: f64,
    pub drift_amplitude: f64,
    pub spin_step: f64,
    pub shimmer_rate: f64,
    pub shimmer_base: f64,
    pub shimmer_amplitude: f64,
    pub wave_base: f64,
    pub wave_amplitude: f64,
    pub wave_vertex_step: f64,
}

impl Default for MotionParams {
    fn default() -> Self {
        Self {
            drift_rate: 1.0,
            drift_amplitude: 0.002,
            spin_step: 0.01,
            shimmer_rate: 1.0,
            shimmer_base: 0.9,
            shimmer_amplitude: 0.1,
            wave_base: 0.8,
            wave_amplitude: 0.3,
            wave_vertex_step: 3.0,
        }
    }
}

impl MotionParams {
    pub fn validate(&self) -> BackdropResult<()> {
        for (name, v) in [
            ("drift_rate", self.drift_rate),
            ("drift_amplitude", self.drift_amplitude),
            ("spin_step", self.spin_step),
            ("shimmer_rate", self.shimmer_rate),
            ("shimmer_base", self.shimmer_base),
            ("shimmer_amplitude", self.shimmer_amplitude),
            ("wave_base", self.wave_base),
            ("wave_amplitude", self.wave_amplitude),
            ("wave_vertex_step", self.wave_vertex_step),
        ] {
            if !v.is_finite() {
                return Err(BackdropError::validation(format!(
                    "motion {name} must be finite"
                )));
            }
        }
        Ok(())
    }

    /// Additive drift applied to a sphere's position this tick.
    pub fn position_delta(&self, t: f64, phase: f64) -> DVec3 {
        let a = t * self.drift_rate + phase;
        DVec3::new(
            a.cos() * self.drift_amplitude,
            a.sin() * self.drift_amplitude,
            0.0,
        )
    }

    /// Additive spin applied to the solid each tick, independent of time and entity.
    pub fn rotation_delta(&self) -> DVec3 {
        DVec3::new(self.spin_step, self.spin_step, 0.0)
    }

    /// Absolute emissive intensity of a connector line.
    pub fn shimmer_intensity(&self, t: f64, phase: f64) -> f64 {
        self.shimmer_base + self.shimmer_amplitude * (t * self.shimmer_rate + phase).sin()
    }

    /// Absolute depth of one connector-line vertex.
    pub fn wave_depth(&self, t: f64, phase: f64, vertex: usize) -> f64 {
        let a = t * self.drift_rate + phase + vertex as f64 * self.wave_vertex_step;
        self.wave_base + self.wave_amplitude * a.sin()
    }

    /// Advance one entity to clock time `t`.
    pub fn apply(&self, entity: &mut Entity, t: f64) {
        let phase = entity.phase();
        let (kind, transform) = entity.animated_mut();
        match kind {
            EntityKind::FloatingSphere { .. } => {
                transform.position += self.position_delta(t, phase);
            }
            EntityKind::RotatingSolid { .. } => {
                transform.rotation = wrap_angles(transform.rotation + self.rotation_delta());
            }
            EntityKind::ConnectorLine(line) => {
                line.shimmer = self.shimmer_intensity(t, phase);
                for (vertex, depth) in line.vertex_depth.iter_mut().enumerate() {
                    *depth = self.wave_depth(t, phase, vertex);
                }
            }
        }
    }
}

fn wrap_angles(v: DVec3) -> DVec3 {
    DVec3::new(v.x.rem_euclid(TAU), v.y.rem_euclid(TAU), v.z.rem_euclid(TAU))
}

#[cfg(test)]
#[path = "../../tests/unit/motion/functions.rs"]
mod tests;
