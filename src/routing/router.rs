use std::collections::BTreeMap;

use crate::{
    foundation::core::{Anchor, Point, Viewport},
    foundation::error::{BackdropError, BackdropResult},
    routing::anchor::AnchorProvider,
    routing::path::BezierPath,
};

/// Offsets (CSS pixels) shaping the three connector paths.
///
/// Only the ordering matters: A runs above the target, B through it, C below it.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct RouteTuning {
    /// Rise of path A above the higher of the badge top and the target top.
    pub lift: f64,
    /// Clearance of path A above the target's vertical centre.
    pub gap: f64,
    /// Depth of path B below the target's vertical centre.
    pub dip: f64,
    /// Drop of path C below the badge bottom.
    pub drop: f64,
    /// Clearance of path C below the lower of the target's bottom edge and path B.
    pub approach: f64,
    /// Horizontal lead-in before the target centre.
    pub lead: f64,
}

impl Default for RouteTuning {
    fn default() -> Self {
        Self {
            lift: 80.0,
            gap: 12.0,
            dip: 40.0,
            drop: 30.0,
            approach: 16.0,
            lead: 120.0,
        }
    }
}

impl RouteTuning {
    pub fn validate(&self) -> BackdropResult<()> {
        for (name, v) in [
            ("lift", self.lift),
            ("gap", self.gap),
            ("dip", self.dip),
            ("drop", self.drop),
            ("approach", self.approach),
            ("lead", self.lead),
        ] {
            if !v.is_finite() || v <= 0.0 {
                return Err(BackdropError::validation(format!(
                    "route {name} must be finite and > 0"
                )));
            }
        }
        Ok(())
    }
}

/// Compute the three connector paths. Pure: identical inputs give identical paths.
pub fn route(
    viewport: Viewport,
    badge: Anchor,
    target: Anchor,
    tuning: &RouteTuning,
) -> [BezierPath; 3] {
    let right = f64::from(viewport.width);
    let hub = target.center();
    let lead_x = hub.x - tuning.lead;

    let top = Point::new(badge.center().x, badge.top());
    let apex = badge.top().min(target.top()) - tuning.lift;
    let above = hub.y - tuning.gap;
    let a = BezierPath::new(top)
        .quad_to(Point::new(top.x, apex), Point::new(lead_x, apex))
        .quad_to(Point::new(hub.x, above), Point::new(right, above));

    let side = Point::new(badge.right(), badge.center().y);
    let under = hub.y + tuning.dip;
    let b = BezierPath::new(side)
        .quad_to(Point::new(lead_x, side.y), Point::new(hub.x, under))
        .quad_to(Point::new(hub.x + tuning.lead, under), Point::new(right, under));

    let bottom = Point::new(badge.center().x, badge.bottom());
    let low = badge.bottom() + tuning.drop;
    let rise = target.bottom().max(under) + tuning.approach;
    let c = BezierPath::new(bottom)
        .quad_to(Point::new(bottom.x, low), Point::new(lead_x, low))
        .quad_to(Point::new(hub.x, rise), Point::new(right, rise));

    [a, b, c]
}

/// Attribute-write collaborator for overlay path elements.
pub trait PathSink {
    /// Whether an element with this identifier currently exists.
    fn has_element(&self, id: &str) -> bool;
    /// Replace the element's path description.
    fn write(&mut self, id: &str, path_d: &str);
}

impl<S: PathSink + ?Sized> PathSink for &mut S {
    fn has_element(&self, id: &str) -> bool {
        (**self).has_element(id)
    }

    fn write(&mut self, id: &str, path_d: &str) {
        (**self).write(id, path_d);
    }
}

/// Map-backed sink holding the last description written per element.
#[derive(Clone, Debug, Default)]
pub struct RecordingSink {
    elements: BTreeMap<String, Option<String>>,
    writes: u64,
}

impl RecordingSink {
    pub fn with_elements<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            elements: ids.into_iter().map(|id| (id.into(), None)).collect(),
            writes: 0,
        }
    }

    pub fn get(&self, id: &str) -> Option<&str> {
        self.elements.get(id).and_then(|d| d.as_deref())
    }

    pub fn writes(&self) -> u64 {
        self.writes
    }

    pub fn remove_element(&mut self, id: &str) {
        self.elements.remove(id);
    }
}

impl PathSink for RecordingSink {
    fn has_element(&self, id: &str) -> bool {
        self.elements.contains_key(id)
    }

    fn write(&mut self, id: &str, path_d: &str) {
        if let Some(slot) = self.elements.get_mut(id) {
            *slot = Some(path_d.to_string());
            self.writes += 1;
        }
    }
}

/// Why a recompute wrote nothing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SkipReason {
    MissingAnchor(String),
    MissingElement(String),
}

#[derive(Clone, Debug, PartialEq)]
pub enum RouteOutcome {
    Written([BezierPath; 3]),
    Skipped(SkipReason),
}

impl RouteOutcome {
    pub fn is_written(&self) -> bool {
        matches!(self, Self::Written(_))
    }
}

/// Identifiers and tuning for the overlay connector paths.
#[derive(Clone, Debug)]
pub struct PathRouter {
    badge_id: String,
    target_id: String,
    path_ids: [String; 3],
    tuning: RouteTuning,
}

impl PathRouter {
    pub fn new(
        badge_id: impl Into<String>,
        target_id: impl Into<String>,
        path_ids: [String; 3],
        tuning: RouteTuning,
    ) -> Self {
        Self {
            badge_id: badge_id.into(),
            target_id: target_id.into(),
            path_ids,
            tuning,
        }
    }

    pub fn path_ids(&self) -> &[String; 3] {
        &self.path_ids
    }

    pub fn tuning(&self) -> &RouteTuning {
        &self.tuning
    }

    /// Resolve anchors, recompute every path and write them all.
    ///
    /// Missing anchors or elements abort the whole recompute before any write, leaving previously
    /// written paths untouched.
    #[tracing::instrument(skip(self, anchors, sink))]
    pub fn recompute(
        &self,
        viewport: Viewport,
        anchors: &impl AnchorProvider,
        sink: &mut impl PathSink,
    ) -> RouteOutcome {
        let Some(badge) = anchors.resolve(&self.badge_id, viewport) else {
            return self.skip(SkipReason::MissingAnchor(self.badge_id.clone()));
        };
        let Some(target) = anchors.resolve(&self.target_id, viewport) else {
            return self.skip(SkipReason::MissingAnchor(self.target_id.clone()));
        };
        if let Some(missing) = self.path_ids.iter().find(|id| !sink.has_element(id)) {
            return self.skip(SkipReason::MissingElement(missing.clone()));
        }

        let paths = route(viewport, badge, target, &self.tuning);
        for (id, path) in self.path_ids.iter().zip(&paths) {
            sink.write(id, &path.to_svg());
        }
        RouteOutcome::Written(paths)
    }

    fn skip(&self, reason: SkipReason) -> RouteOutcome {
        tracing::debug!(?reason, "path recompute skipped");
        RouteOutcome::Skipped(reason)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/routing/router.rs"]
mod tests;
