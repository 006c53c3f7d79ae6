use crate::geom::{Circle3, Point3, Tolerance};

/// Fits the circle an arc segment follows.
///
/// Implementations must be deterministic and free of side effects; `None`
/// marks the three points as degenerate.
pub trait ArcFitter {
    fn fit(&self, start: Point3, mid: Point3, end: Point3) -> Option<Circle3>;
}

/// Closed-form circumcircle fit, see [`Circle3::from_three_points`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThreePointArcFitter {
    pub tolerance: Tolerance,
}

impl ThreePointArcFitter {
    #[must_use]
    pub const fn new(tolerance: Tolerance) -> Self {
        Self { tolerance }
    }
}

impl Default for ThreePointArcFitter {
    fn default() -> Self {
        Self::new(Tolerance::COLLINEAR)
    }
}

impl ArcFitter for ThreePointArcFitter {
    fn fit(&self, start: Point3, mid: Point3, end: Point3) -> Option<Circle3> {
        Circle3::from_three_points(start, mid, end, self.tolerance)
    }
}

impl<F> ArcFitter for F
where
    F: Fn(Point3, Point3, Point3) -> Option<Circle3>,
{
    fn fit(&self, start: Point3, mid: Point3, end: Point3) -> Option<Circle3> {
        self(start, mid, end)
    }
}
