// Copyright 2026 the Mutator Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Clip shape types for mutation clipping.

use kurbo::{BezPath, Rect, RoundedRect, Shape};

/// Accuracy used when flattening curved clip shapes into a [`BezPath`].
pub const PATH_TOLERANCE: f64 = 0.1;

/// A shape used to clip an embedded view's content.
#[derive(Clone, Debug, PartialEq)]
pub enum ClipShape {
    /// An axis-aligned rectangle.
    Rect(Rect),
    /// A rectangle with rounded corners.
    RoundedRect(RoundedRect),
    /// An arbitrary closed path.
    Path(BezPath),
}

impl ClipShape {
    /// Converts the shape to a path in its own coordinate space.
    #[must_use]
    pub fn to_path(&self) -> BezPath {
        match self {
            Self::Rect(rect) => rect.to_path(PATH_TOLERANCE),
            Self::RoundedRect(rrect) => rrect.to_path(PATH_TOLERANCE),
            Self::Path(path) => path.clone(),
        }
    }

    /// Returns the axis-aligned bounds of the shape.
    #[must_use]
    pub fn bounds(&self) -> Rect {
        match self {
            Self::Rect(rect) => *rect,
            Self::RoundedRect(rrect) => rrect.rect(),
            Self::Path(path) => path.bounding_box(),
        }
    }
}

impl From<Rect> for ClipShape {
    fn from(rect: Rect) -> Self {
        Self::Rect(rect)
    }
}

impl From<RoundedRect> for ClipShape {
    fn from(rrect: RoundedRect) -> Self {
        Self::RoundedRect(rrect)
    }
}

impl From<BezPath> for ClipShape {
    fn from(path: BezPath) -> Self {
        Self::Path(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::PathEl;

    #[test]
    fn rect_path_is_closed_outline() {
        let path = ClipShape::Rect(Rect::new(0.0, 0.0, 10.0, 20.0)).to_path();
        let els = path.elements();
        assert_eq!(els.first(), Some(&PathEl::MoveTo((0.0, 0.0).into())));
        assert_eq!(els.last(), Some(&PathEl::ClosePath));
        assert_eq!(path.bounding_box(), Rect::new(0.0, 0.0, 10.0, 20.0));
    }

    #[test]
    fn rounded_rect_bounds_ignore_radii() {
        let shape = ClipShape::from(RoundedRect::new(5.0, 5.0, 45.0, 25.0, 4.0));
        assert_eq!(shape.bounds(), Rect::new(5.0, 5.0, 45.0, 25.0));
        let bbox = shape.to_path().bounding_box();
        let eps = 1e-6;
        assert!((bbox.x0 - 5.0).abs() < eps, "got {bbox:?}");
        assert!((bbox.y1 - 25.0).abs() < eps, "got {bbox:?}");
    }

    #[test]
    fn path_shape_round_trips_unchanged() {
        let mut path = BezPath::new();
        path.move_to((1.0, 1.0));
        path.line_to((9.0, 1.0));
        path.line_to((5.0, 8.0));
        path.close_path();
        let shape = ClipShape::from(path.clone());
        assert_eq!(shape.to_path(), path);
        assert_eq!(shape.bounds(), Rect::new(1.0, 1.0, 9.0, 8.0));
    }
}
