use crate::geom::Point3;

use super::error::{PolyCurveError, PolyCurveResult};

/// Scales raw coordinate rows into 3D points.
///
/// Each row may carry zero to three coordinates (`[f64; 2]` for a 2D point
/// list, `[f64; 3]` or `Vec<f64>` otherwise). Missing axes become `0`, extra
/// values are ignored, and every present coordinate is multiplied by `scale`.
/// Rows are never rejected.
pub fn normalize_points<R: AsRef<[f64]>>(rows: &[R], scale: f64) -> Vec<Point3> {
    rows.iter()
        .map(|row| {
            let coords = row.as_ref();
            let axis = |i: usize| coords.get(i).map_or(0.0, |value| value * scale);
            Point3::new(axis(0), axis(1), axis(2))
        })
        .collect()
}

/// Normalized points addressed the way segment descriptors address them:
/// index 1 is the first point.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PointList {
    points: Vec<Point3>,
}

impl PointList {
    #[must_use]
    pub fn new(points: Vec<Point3>) -> Self {
        Self { points }
    }

    #[must_use]
    pub fn from_rows<R: AsRef<[f64]>>(rows: &[R], scale: f64) -> Self {
        Self::new(normalize_points(rows, scale))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Point3] {
        &self.points
    }

    /// Point at a 1-based index, `None` outside `[1, len]`.
    #[must_use]
    pub fn get(&self, index: i64) -> Option<Point3> {
        let offset = usize::try_from(index).ok()?.checked_sub(1)?;
        self.points.get(offset).copied()
    }

    /// Point at a 1-based index referenced by the descriptor at `segment`.
    pub fn resolve(&self, segment: usize, index: i64) -> PolyCurveResult<Point3> {
        self.get(index).ok_or(PolyCurveError::IndexOutOfBounds {
            segment,
            index,
            point_count: self.points.len(),
        })
    }
}

impl From<Vec<Point3>> for PointList {
    fn from(points: Vec<Point3>) -> Self {
        Self::new(points)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scales_every_coordinate() {
        let points = normalize_points(&[[1.0, 2.0, 3.0]], 2.0);
        assert_eq!(points, vec![Point3::new(2.0, 4.0, 6.0)]);
    }

    #[test]
    fn zero_fills_missing_axes() {
        let rows: Vec<Vec<f64>> = vec![vec![], vec![4.0], vec![4.0, 5.0]];
        let points = normalize_points(&rows, 0.5);
        assert_eq!(
            points,
            vec![
                Point3::new(0.0, 0.0, 0.0),
                Point3::new(2.0, 0.0, 0.0),
                Point3::new(2.0, 2.5, 0.0),
            ]
        );
    }

    #[test]
    fn two_dimensional_rows_lie_in_xy_plane() {
        let points = normalize_points(&[[1.0, 1.0], [3.0, -2.0]], 1000.0);
        assert_eq!(points[1], Point3::new(3000.0, -2000.0, 0.0));
    }

    #[test]
    fn extra_coordinates_are_ignored() {
        let points = normalize_points(&[vec![1.0, 2.0, 3.0, 4.0]], 1.0);
        assert_eq!(points, vec![Point3::new(1.0, 2.0, 3.0)]);
    }

    #[test]
    fn get_is_one_based() {
        let list = PointList::from_rows(&[[1.0, 0.0, 0.0], [2.0, 0.0, 0.0]], 1.0);
        assert_eq!(list.get(1), Some(Point3::new(1.0, 0.0, 0.0)));
        assert_eq!(list.get(2), Some(Point3::new(2.0, 0.0, 0.0)));
        assert_eq!(list.get(0), None);
        assert_eq!(list.get(3), None);
        assert_eq!(list.get(-1), None);
    }

    #[test]
    fn resolve_reports_offending_index() {
        let list = PointList::from_rows(&[[0.0, 0.0]], 1.0);
        assert_eq!(
            list.resolve(4, 7),
            Err(PolyCurveError::IndexOutOfBounds {
                segment: 4,
                index: 7,
                point_count: 1,
            })
        );
        assert!(list.resolve(0, 1).is_ok());
    }
}
