use thiserror::Error;

/// Result type for poly-curve conversion.
pub type PolyCurveResult<T> = Result<T, PolyCurveError>;

/// Structural problems that abort a poly-curve conversion.
///
/// `segment` is the 0-based position of the offending descriptor; indices are
/// reported exactly as they appear in the model (1-based, possibly zero or
/// negative).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PolyCurveError {
    #[error("IfcIndexedPolyCurve index out of bounds for index {index} (segment {segment}, {point_count} points)")]
    IndexOutOfBounds {
        segment: usize,
        index: i64,
        point_count: usize,
    },
    #[error("invalid IfcArcIndex encountered at segment {segment}: expected 3 indices, got {index_count}")]
    MalformedSegment { segment: usize, index_count: usize },
    #[error("unexpected IfcIndexedPolyCurve segment of type {kind} at segment {segment}")]
    UnsupportedSegmentKind { segment: usize, kind: String },
}
