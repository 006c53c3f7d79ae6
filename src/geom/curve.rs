use std::f64::consts::TAU;

use serde::{Deserialize, Serialize};

use super::core::{Point3, Tolerance, Vec3};

pub trait Curve3 {
    fn point_at(&self, t: f64) -> Point3;

    fn derivative_at(&self, t: f64) -> Vec3;

    #[must_use]
    fn domain(&self) -> (f64, f64) {
        (0.0, 1.0)
    }

    #[must_use]
    fn is_closed(&self) -> bool {
        false
    }

    /// Returns the unit tangent vector at parameter `t`.
    /// Returns `None` if the derivative is zero or degenerate.
    #[must_use]
    fn tangent_at(&self, t: f64) -> Option<Vec3> {
        self.derivative_at(t).normalized()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line3 {
    pub start: Point3,
    pub end: Point3,
}

impl Line3 {
    #[must_use]
    pub const fn new(start: Point3, end: Point3) -> Self {
        Self { start, end }
    }

    #[must_use]
    pub const fn direction(self) -> Vec3 {
        self.end.sub_point(self.start)
    }
}

impl Curve3 for Line3 {
    fn point_at(&self, t: f64) -> Point3 {
        self.start.add_vec(self.direction().mul_scalar(t))
    }

    fn derivative_at(&self, _t: f64) -> Vec3 {
        self.direction()
    }
}

/// Full circle with an explicit in-plane frame.
///
/// `x_axis` and `y_axis` are orthonormal; the supporting plane normal is
/// `x_axis × y_axis`. Parameter 0 lies on `x_axis`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Circle3 {
    pub center: Point3,
    pub x_axis: Vec3,
    pub y_axis: Vec3,
    pub radius: f64,
}

impl Circle3 {
    #[must_use]
    pub fn new(center: Point3, normal: Vec3, radius: f64) -> Self {
        let (x_axis, y_axis) = frame_axes_from_normal(normal);
        Self {
            center,
            x_axis,
            y_axis,
            radius,
        }
    }

    #[must_use]
    pub fn from_center_xaxis_normal(center: Point3, x_axis: Vec3, normal: Vec3, radius: f64) -> Self {
        let (x_axis, y_axis) = frame_axes_from_xaxis_normal(x_axis, normal);
        Self {
            center,
            x_axis,
            y_axis,
            radius,
        }
    }

    /// Fits the unique circle through three points.
    ///
    /// Uses the closed-form 3D circumcenter of the triangle `a b c`. Returns
    /// `None` when the points are degenerate:
    ///
    /// - `a` coincides with `b` or `c` (chord at or below `Tolerance::ZERO_LENGTH`),
    /// - the sine of the angle spanned at `a` is at or below `tol.eps`, which
    ///   covers collinear points and `b == c`,
    /// - the result is not finite.
    ///
    /// The returned frame starts at `a` (parameter 0) and runs counter-clockwise
    /// about the normal `(b - a) × (c - a)`, so `a → b → c` is the positive
    /// direction.
    #[must_use]
    pub fn from_three_points(a: Point3, b: Point3, c: Point3, tol: Tolerance) -> Option<Self> {
        let u = b.sub_point(a);
        let v = c.sub_point(a);
        let u_len = u.length();
        let v_len = v.length();
        if Tolerance::ZERO_LENGTH.is_zero_length(u_len) || Tolerance::ZERO_LENGTH.is_zero_length(v_len) {
            return None;
        }

        let w = u.cross(v);
        let w_len_sq = w.length_squared();
        if w_len_sq.sqrt() <= tol.eps * u_len * v_len {
            return None;
        }

        let offset = v
            .mul_scalar(u.length_squared())
            .sub(u.mul_scalar(v.length_squared()))
            .cross(w)
            .mul_scalar(0.5 / w_len_sq);
        let center = a.add_vec(offset);
        let radius = offset.length();
        let normal = w.normalized()?;
        let x_axis = offset.mul_scalar(-1.0).normalized()?;
        let y_axis = normal.cross(x_axis);

        let circle = Self {
            center,
            x_axis,
            y_axis,
            radius,
        };
        circle.is_finite().then_some(circle)
    }

    /// Unit normal of the supporting plane.
    #[must_use]
    pub const fn normal(&self) -> Vec3 {
        self.x_axis.cross(self.y_axis)
    }

    /// Angle of `point` around the circle, measured from `x_axis` towards
    /// `y_axis`, in `[0, 2π)`. Points off the plane are projected onto it.
    #[must_use]
    pub fn angle_of(&self, point: Point3) -> f64 {
        let d = point.sub_point(self.center);
        let angle = d.dot(self.y_axis).atan2(d.dot(self.x_axis));
        if angle < 0.0 { angle + TAU } else { angle }
    }

    /// Checks that `point` lies on the circle: in the supporting plane and at
    /// `radius` from the center, both within `tol`.
    #[must_use]
    pub fn passes_through(&self, point: Point3, tol: Tolerance) -> bool {
        let d = point.sub_point(self.center);
        tol.approx_eq_f64(d.length(), self.radius) && tol.is_zero_length(d.dot(self.normal()))
    }

    fn is_finite(&self) -> bool {
        self.x_axis.is_finite()
            && self.y_axis.is_finite()
            && self.radius.is_finite()
            && self.center.sub_point(Point3::ORIGIN).is_finite()
    }
}

impl Curve3 for Circle3 {
    fn point_at(&self, t: f64) -> Point3 {
        let (t0, t1) = self.domain();
        if t == t1 {
            return self.point_at(t0);
        }
        let u = ((t - t0) / (t1 - t0)).clamp(0.0, 1.0);
        let angle = TAU * u;
        self.center
            .add_vec(self.x_axis.mul_scalar(self.radius * angle.cos()))
            .add_vec(self.y_axis.mul_scalar(self.radius * angle.sin()))
    }

    fn is_closed(&self) -> bool {
        true
    }

    fn derivative_at(&self, t: f64) -> Vec3 {
        let (t0, t1) = self.domain();
        let u = ((t - t0) / (t1 - t0)).clamp(0.0, 1.0);
        let angle = TAU * u;
        let dtheta_dt = TAU / (t1 - t0);
        let dx = self.x_axis.mul_scalar(-self.radius * angle.sin());
        let dy = self.y_axis.mul_scalar(self.radius * angle.cos());
        dx.add(dy).mul_scalar(dtheta_dt)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Arc3 {
    pub center: Point3,
    pub x_axis: Vec3,
    pub y_axis: Vec3,
    pub radius: f64,
    pub start_angle: f64,
    pub sweep_angle: f64,
}

impl Arc3 {
    #[must_use]
    pub fn from_center_xaxis_normal(
        center: Point3,
        x_axis: Vec3,
        normal: Vec3,
        radius: f64,
        start_angle: f64,
        sweep_angle: f64,
    ) -> Self {
        let (x_axis, y_axis) = frame_axes_from_xaxis_normal(x_axis, normal);
        Self {
            center,
            x_axis,
            y_axis,
            radius,
            start_angle,
            sweep_angle,
        }
    }

    /// Portion of `circle` running counter-clockwise from `start` to `end`.
    ///
    /// Both points are projected onto the circle's angle; coincident angles give
    /// a zero sweep.
    #[must_use]
    pub fn on_circle(circle: &Circle3, start: Point3, end: Point3) -> Self {
        let start_angle = circle.angle_of(start);
        let mut sweep_angle = circle.angle_of(end) - start_angle;
        if sweep_angle < 0.0 {
            sweep_angle += TAU;
        }
        Self {
            center: circle.center,
            x_axis: circle.x_axis,
            y_axis: circle.y_axis,
            radius: circle.radius,
            start_angle,
            sweep_angle,
        }
    }

    #[must_use]
    pub fn length(&self) -> f64 {
        self.radius * self.sweep_angle.abs()
    }
}

impl Curve3 for Arc3 {
    fn point_at(&self, t: f64) -> Point3 {
        let (t0, t1) = self.domain();
        let u = ((t - t0) / (t1 - t0)).clamp(0.0, 1.0);
        let angle = self.start_angle + self.sweep_angle * u;
        self.center
            .add_vec(self.x_axis.mul_scalar(self.radius * angle.cos()))
            .add_vec(self.y_axis.mul_scalar(self.radius * angle.sin()))
    }

    fn derivative_at(&self, t: f64) -> Vec3 {
        let (t0, t1) = self.domain();
        let u = ((t - t0) / (t1 - t0)).clamp(0.0, 1.0);
        let angle = self.start_angle + self.sweep_angle * u;
        let dtheta_dt = self.sweep_angle / (t1 - t0);
        let dx = self.x_axis.mul_scalar(-self.radius * angle.sin());
        let dy = self.y_axis.mul_scalar(self.radius * angle.cos());
        dx.add(dy).mul_scalar(dtheta_dt)
    }

    fn is_closed(&self) -> bool {
        const FULL_CIRCLE_TOLERANCE: f64 = 1e-9;
        (self.sweep_angle.abs() - TAU).abs() < FULL_CIRCLE_TOLERANCE
    }
}

/// Samples `steps` equal parameter intervals of `curve`.
///
/// Open curves return `steps + 1` points including both ends; closed curves
/// return `steps` points without repeating the seam.
pub fn tessellate_curve_uniform(curve: &impl Curve3, steps: usize) -> Vec<Point3> {
    let steps = steps.max(1);
    let (t0, t1) = curve.domain();
    let span = t1 - t0;
    let count = if curve.is_closed() { steps } else { steps + 1 };
    let denom = steps as f64;
    (0..count)
        .map(|i| curve.point_at(t0 + span * (i as f64 / denom)))
        .collect()
}

fn frame_axes_from_normal(normal: Vec3) -> (Vec3, Vec3) {
    let z = normal.normalized().unwrap_or(Vec3::Z);
    let x = orthogonal_unit_vector(z);
    let y = z.cross(x).normalized().unwrap_or(Vec3::Y);
    (x, y)
}

fn frame_axes_from_xaxis_normal(x_axis: Vec3, normal: Vec3) -> (Vec3, Vec3) {
    let z = normal.normalized().unwrap_or(Vec3::Z);
    let projected = x_axis.sub(z.mul_scalar(x_axis.dot(z)));
    let x = projected
        .normalized()
        .unwrap_or_else(|| orthogonal_unit_vector(z));
    let y = z.cross(x).normalized().unwrap_or(Vec3::Y);
    (x, y)
}

fn orthogonal_unit_vector(reference: Vec3) -> Vec3 {
    let candidate = if reference.x.abs() < reference.y.abs() {
        Vec3::new(0.0, -reference.z, reference.y)
    } else {
        Vec3::new(-reference.z, 0.0, reference.x)
    };

    candidate.normalized().unwrap_or(Vec3::X)
}
