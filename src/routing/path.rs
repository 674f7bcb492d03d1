use crate::foundation::core::{BezPath, Point};

/// One quadratic segment, continuing from the previous segment's end point.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct QuadSegment {
    pub ctrl: Point,
    pub end: Point,
}

/// Connector curve made of chained quadratic Bezier segments.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct BezierPath {
    pub start: Point,
    pub segments: Vec<QuadSegment>,
}

impl BezierPath {
    pub fn new(start: Point) -> Self {
        Self {
            start,
            segments: Vec::new(),
        }
    }

    pub fn quad_to(mut self, ctrl: Point, end: Point) -> Self {
        self.segments.push(QuadSegment { ctrl, end });
        self
    }

    pub fn first_ctrl(&self) -> Option<Point> {
        self.segments.first().map(|s| s.ctrl)
    }

    pub fn end(&self) -> Point {
        self.segments.last().map_or(self.start, |s| s.end)
    }

    pub fn to_bez_path(&self) -> BezPath {
        let mut p = BezPath::new();
        p.move_to(self.start);
        for s in &self.segments {
            p.quad_to(s.ctrl, s.end);
        }
        p
    }

    /// Path description string (`M x,y Q cx,cy x,y ...`) for a vector overlay.
    pub fn to_svg(&self) -> String {
        self.to_bez_path().to_svg()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/routing/path.rs"]
mod tests;
