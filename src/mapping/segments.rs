use serde::{Deserialize, Serialize};

use super::error::{PolyCurveError, PolyCurveResult};

/// Schema name of a straight-run segment.
pub const LINE_INDEX: &str = "IfcLineIndex";
/// Schema name of a three-point arc segment.
pub const ARC_INDEX: &str = "IfcArcIndex";

/// A segment exactly as read from the model: its schema type name and its
/// 1-based point indices. Nothing is validated until it is classified.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SegmentDescriptor {
    pub kind: String,
    pub indices: Vec<i64>,
}

impl SegmentDescriptor {
    #[must_use]
    pub fn new(kind: impl Into<String>, indices: Vec<i64>) -> Self {
        Self {
            kind: kind.into(),
            indices,
        }
    }

    #[must_use]
    pub fn line(indices: impl IntoIterator<Item = i64>) -> Self {
        Self::new(LINE_INDEX, indices.into_iter().collect())
    }

    #[must_use]
    pub fn arc(indices: impl IntoIterator<Item = i64>) -> Self {
        Self::new(ARC_INDEX, indices.into_iter().collect())
    }

    #[must_use]
    pub fn other(kind: impl Into<String>, indices: impl IntoIterator<Item = i64>) -> Self {
        Self::new(kind, indices.into_iter().collect())
    }
}

/// A classified segment. Index bounds are still unchecked at this point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    /// Polyline through the referenced points, in order.
    LineRun(&'a [i64]),
    /// Circular arc from the first to the last point through the middle one.
    ArcTriple([i64; 3]),
}

impl<'a> Segment<'a> {
    /// Classifies the descriptor at position `segment`.
    pub fn classify(segment: usize, descriptor: &'a SegmentDescriptor) -> PolyCurveResult<Self> {
        match descriptor.kind.as_str() {
            LINE_INDEX => Ok(Segment::LineRun(&descriptor.indices)),
            ARC_INDEX => match *descriptor.indices.as_slice() {
                [start, mid, end] => Ok(Segment::ArcTriple([start, mid, end])),
                _ => Err(PolyCurveError::MalformedSegment {
                    segment,
                    index_count: descriptor.indices.len(),
                }),
            },
            other => Err(PolyCurveError::UnsupportedSegmentKind {
                segment,
                kind: other.to_owned(),
            }),
        }
    }

    #[must_use]
    pub fn is_arc(&self) -> bool {
        matches!(self, Segment::ArcTriple(_))
    }
}

impl<'a> TryFrom<&'a SegmentDescriptor> for Segment<'a> {
    type Error = PolyCurveError;

    fn try_from(descriptor: &'a SegmentDescriptor) -> Result<Self, Self::Error> {
        Segment::classify(0, descriptor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_line_index_as_run() {
        let descriptor = SegmentDescriptor::line([1, 2, 3]);
        assert_eq!(
            Segment::try_from(&descriptor),
            Ok(Segment::LineRun(&[1, 2, 3][..]))
        );
    }

    #[test]
    fn classifies_arc_index_as_triple() {
        let descriptor = SegmentDescriptor::arc([3, 4, 5]);
        let segment = Segment::try_from(&descriptor).unwrap();
        assert_eq!(segment, Segment::ArcTriple([3, 4, 5]));
        assert!(segment.is_arc());
    }

    #[test]
    fn arc_with_wrong_index_count_is_malformed() {
        for indices in [vec![], vec![1, 2], vec![1, 2, 3, 4]] {
            let count = indices.len();
            let descriptor = SegmentDescriptor::arc(indices);
            assert_eq!(
                Segment::classify(2, &descriptor),
                Err(PolyCurveError::MalformedSegment {
                    segment: 2,
                    index_count: count,
                })
            );
        }
    }

    #[test]
    fn unknown_kind_is_unsupported() {
        let descriptor = SegmentDescriptor::other("IfcBSplineIndex", [1, 2]);
        let err = Segment::classify(1, &descriptor).unwrap_err();
        assert_eq!(
            err,
            PolyCurveError::UnsupportedSegmentKind {
                segment: 1,
                kind: "IfcBSplineIndex".to_owned(),
            }
        );
        assert!(err.to_string().contains("IfcBSplineIndex"));
    }

    #[test]
    fn kind_names_are_case_sensitive() {
        let descriptor = SegmentDescriptor::other("ifclineindex", [1, 2]);
        assert!(matches!(
            Segment::try_from(&descriptor),
            Err(PolyCurveError::UnsupportedSegmentKind { .. })
        ));
    }
}
