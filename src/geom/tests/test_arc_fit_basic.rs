use crate::geom::{Circle3, Curve3, Point3, Tolerance, Vec3};

fn fit(a: [f64; 3], b: [f64; 3], c: [f64; 3]) -> Option<Circle3> {
    Circle3::from_three_points(a.into(), b.into(), c.into(), Tolerance::COLLINEAR)
}

#[test]
fn unit_circle_through_three_axis_points() {
    let circle = fit([1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [-1.0, 0.0, 0.0]).unwrap();
    let tol = Tolerance::new(1e-12);
    assert!(tol.approx_eq_point3(circle.center, Point3::ORIGIN));
    assert!(tol.approx_eq_f64(circle.radius, 1.0));
    assert!(tol.approx_eq_f64(circle.normal().dot(Vec3::Z), 1.0));
}

#[test]
fn fitted_circle_passes_through_all_three_points() {
    let a = Point3::new(3.0, -1.0, 2.0);
    let b = Point3::new(5.5, 0.25, 1.0);
    let c = Point3::new(4.0, 2.0, -0.5);
    let circle = Circle3::from_three_points(a, b, c, Tolerance::COLLINEAR).unwrap();
    for p in [a, b, c] {
        assert!(circle.passes_through(p, Tolerance::LOOSE), "{p:?} not on {circle:?}");
    }
}

#[test]
fn frame_starts_at_first_point() {
    let a = Point3::new(0.0, 0.0, 5.0);
    let b = Point3::new(2.0, 2.0, 5.0);
    let c = Point3::new(4.0, 0.0, 5.0);
    let circle = Circle3::from_three_points(a, b, c, Tolerance::COLLINEAR).unwrap();
    assert!(Tolerance::LOOSE.approx_eq_point3(circle.point_at(0.0), a));
    assert!(circle.x_axis.dot(circle.y_axis).abs() < 1e-12);
}

#[test]
fn middle_point_lies_between_start_and_end_angles() {
    // Clockwise in the XY plane: the normal flips to -Z so a -> b -> c stays
    // counter-clockwise about it.
    let a = Point3::new(0.0, 1.0, 0.0);
    let b = Point3::new(1.0, 0.0, 0.0);
    let c = Point3::new(0.0, -1.0, 0.0);
    let circle = Circle3::from_three_points(a, b, c, Tolerance::COLLINEAR).unwrap();
    assert!(circle.normal().dot(Vec3::Z) < 0.0);
    let mid = circle.angle_of(b);
    let end = circle.angle_of(c);
    assert!(mid > 0.0 && mid < end);
}

#[test]
fn collinear_points_are_degenerate() {
    assert!(fit([0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [2.0, 0.0, 0.0]).is_none());
    assert!(fit([0.0, 0.0, 0.0], [2.0, 2.0, 2.0], [1.0, 1.0, 1.0]).is_none());
}

#[test]
fn coincident_points_are_degenerate() {
    assert!(fit([1.0, 1.0, 0.0], [1.0, 1.0, 0.0], [2.0, 0.0, 0.0]).is_none());
    assert!(fit([1.0, 1.0, 0.0], [2.0, 0.0, 0.0], [1.0, 1.0, 0.0]).is_none());
    assert!(fit([0.0, 0.0, 0.0], [2.0, 0.0, 0.0], [2.0, 0.0, 0.0]).is_none());
}

#[test]
fn nearly_collinear_points_respect_tolerance() {
    let a = [0.0, 0.0, 0.0];
    let b = [1.0, 1e-6, 0.0];
    let c = [2.0, 0.0, 0.0];
    assert!(fit(a, b, c).is_some());
    let loose = Circle3::from_three_points(a.into(), b.into(), c.into(), Tolerance::new(1e-3));
    assert!(loose.is_none());
}

#[test]
fn non_finite_input_is_degenerate() {
    assert!(fit([0.0, 0.0, 0.0], [f64::NAN, 1.0, 0.0], [2.0, 0.0, 0.0]).is_none());
}
