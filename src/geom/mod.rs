mod core;
mod curve;
mod diagnostics;
mod topology;

pub use self::core::{Point3, Tolerance, Vec3};
pub use curve::{Arc3, Circle3, Curve3, Line3, tessellate_curve_uniform};
pub use diagnostics::ConversionDiagnostics;
pub use topology::{Edge, Loop};

#[cfg(test)]
mod tests;
