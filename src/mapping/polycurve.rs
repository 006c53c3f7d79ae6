//! Indexed poly-curve to edge loop conversion.
//!
//! An indexed poly-curve stores its points once and describes its shape with
//! segments that reference those points by 1-based index: `IfcLineIndex` runs
//! become straight edges between consecutive referenced points, `IfcArcIndex`
//! triples become one circular edge from the first to the last point, fitted
//! through all three. A curve without segments is a polyline over its points.
//!
//! Structural problems (indices outside the point list, arcs without exactly
//! three indices, unknown segment types) abort the conversion with a
//! [`PolyCurveError`](super::PolyCurveError). Arcs whose points are collinear
//! or coincident are dropped with a warning and conversion continues, so the
//! loop may contain a gap where the arc would have been. No straight edge is
//! substituted.

use serde::{Deserialize, Serialize};

use crate::geom::{ConversionDiagnostics, Edge, Loop, Point3, Tolerance};

use super::error::PolyCurveResult;
use super::fit::{ArcFitter, ThreePointArcFitter};
use super::points::PointList;
use super::segments::{Segment, SegmentDescriptor};
use super::sink::{DiagnosticSink, LogSink};

/// Entity label used in warnings when a curve carries none.
pub const DEFAULT_ENTITY_LABEL: &str = "IfcIndexedPolyCurve";

/// An indexed poly-curve as loaded from a model.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IndexedPolyCurve {
    /// Label identifying the source entity in warnings, e.g. `#42=IfcIndexedPolyCurve`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entity: Option<String>,
    /// Raw coordinate rows of the point list, 2 or 3 values each.
    pub points: Vec<Vec<f64>>,
    /// Segment descriptors; `None` means the points form a polyline.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub segments: Option<Vec<SegmentDescriptor>>,
}

impl IndexedPolyCurve {
    #[must_use]
    pub fn new(points: Vec<Vec<f64>>, segments: Option<Vec<SegmentDescriptor>>) -> Self {
        Self {
            entity: None,
            points,
            segments,
        }
    }

    #[must_use]
    pub fn with_entity(mut self, entity: impl Into<String>) -> Self {
        self.entity = Some(entity.into());
        self
    }

    #[must_use]
    pub fn entity_label(&self) -> &str {
        self.entity.as_deref().unwrap_or(DEFAULT_ENTITY_LABEL)
    }
}

/// Settings shared by every conversion a converter performs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConversionSettings {
    /// Multiplier applied to every raw coordinate.
    pub length_unit: f64,
    /// Collinearity threshold handed to the default arc fitter.
    pub tolerance: Tolerance,
}

impl ConversionSettings {
    #[must_use]
    pub fn with_length_unit(length_unit: f64) -> Self {
        Self {
            length_unit,
            ..Self::default()
        }
    }
}

impl Default for ConversionSettings {
    fn default() -> Self {
        Self {
            length_unit: 1.0,
            tolerance: Tolerance::COLLINEAR,
        }
    }
}

/// Converts indexed poly-curves into edge loops.
///
/// The converter holds no per-call state; one instance can serve any number
/// of conversions, including concurrent ones when `F` is `Sync`.
#[derive(Debug, Clone)]
pub struct PolyCurveConverter<F = ThreePointArcFitter> {
    settings: ConversionSettings,
    fitter: F,
}

impl PolyCurveConverter<ThreePointArcFitter> {
    #[must_use]
    pub fn new(settings: ConversionSettings) -> Self {
        let fitter = ThreePointArcFitter::new(settings.tolerance);
        Self { settings, fitter }
    }
}

impl Default for PolyCurveConverter<ThreePointArcFitter> {
    fn default() -> Self {
        Self::new(ConversionSettings::default())
    }
}

impl<F: ArcFitter> PolyCurveConverter<F> {
    #[must_use]
    pub fn with_fitter(settings: ConversionSettings, fitter: F) -> Self {
        Self { settings, fitter }
    }

    #[must_use]
    pub fn settings(&self) -> &ConversionSettings {
        &self.settings
    }

    /// Converts `curve`, reporting degenerate arcs to `sink`.
    pub fn convert(
        &self,
        curve: &IndexedPolyCurve,
        sink: &mut impl DiagnosticSink,
    ) -> PolyCurveResult<Loop> {
        let points = PointList::from_rows(&curve.points, self.settings.length_unit);
        assemble_loop(
            &points,
            curve.segments.as_deref(),
            &self.fitter,
            curve.entity_label(),
            sink,
        )
    }

    /// Converts `curve` and returns the loop with a report of what was built.
    pub fn convert_with_diagnostics(
        &self,
        curve: &IndexedPolyCurve,
    ) -> PolyCurveResult<(Loop, ConversionDiagnostics)> {
        let mut diagnostics = ConversionDiagnostics::new();
        let curve_loop = self.convert(curve, &mut diagnostics)?;

        let arc_segments = curve
            .segments
            .iter()
            .flatten()
            .filter(|descriptor| descriptor.kind == super::segments::ARC_INDEX)
            .count();

        diagnostics.point_count = curve.points.len();
        diagnostics.segment_count = curve.segments.as_ref().map_or(0, Vec::len);
        diagnostics.used_point_fallback = curve.segments.as_ref().is_none_or(Vec::is_empty);
        diagnostics.edge_count = curve_loop.len();
        diagnostics.arc_edge_count = curve_loop.arc_count();
        diagnostics.skipped_arc_count = arc_segments.saturating_sub(diagnostics.arc_edge_count);

        log::debug!(
            "converted {}: {}",
            curve.entity_label(),
            diagnostics.summary()
        );
        Ok((curve_loop, diagnostics))
    }
}

/// Converts raw point rows and optional segment descriptors into a loop.
///
/// Coordinates are multiplied by `scale`; degenerate arcs are reported through
/// the `log` facade.
pub fn convert<R: AsRef<[f64]>>(
    points: &[R],
    scale: f64,
    segments: Option<&[SegmentDescriptor]>,
) -> PolyCurveResult<Loop> {
    let points = PointList::from_rows(points, scale);
    assemble_loop(
        &points,
        segments,
        &ThreePointArcFitter::default(),
        DEFAULT_ENTITY_LABEL,
        &mut LogSink,
    )
}

/// Builds the loop for one curve.
///
/// Without segments the normalized points are chained directly; with segments
/// the loop holds exactly the dispatched edges. An empty segment list counts
/// as no segments.
pub fn assemble_loop(
    points: &PointList,
    segments: Option<&[SegmentDescriptor]>,
    fitter: &impl ArcFitter,
    entity: &str,
    sink: &mut impl DiagnosticSink,
) -> PolyCurveResult<Loop> {
    log::debug!(
        "assembling {entity}: {} points, {} segments",
        points.len(),
        segments.map_or(0, <[_]>::len)
    );

    match segments {
        Some(segments) if !segments.is_empty() => {
            dispatch_segments(points, segments, fitter, entity, sink).map(Loop::from)
        }
        _ => Ok(Loop::from_points(points.as_slice())),
    }
}

/// Turns segment descriptors into edges, in descriptor order.
pub fn dispatch_segments(
    points: &PointList,
    segments: &[SegmentDescriptor],
    fitter: &impl ArcFitter,
    entity: &str,
    sink: &mut impl DiagnosticSink,
) -> PolyCurveResult<Vec<Edge>> {
    let mut edges = Vec::new();

    for (position, descriptor) in segments.iter().enumerate() {
        match Segment::classify(position, descriptor)? {
            Segment::LineRun(indices) => {
                let mut previous: Option<Point3> = None;
                for &index in indices {
                    let current = points.resolve(position, index)?;
                    if let Some(previous) = previous {
                        edges.push(Edge::line(previous, current));
                    }
                    previous = Some(current);
                }
            }
            Segment::ArcTriple([a, b, c]) => {
                let start = points.resolve(position, a)?;
                let mid = points.resolve(position, b)?;
                let end = points.resolve(position, c)?;

                match fitter.fit(start, mid, end) {
                    Some(circle) => edges.push(Edge::arc(start, end, circle)),
                    None => sink.warning(&format!(
                        "Ignoring degenerate arc segment {position} ({a}, {b}, {c}) on {entity}"
                    )),
                }
            }
        }
    }

    Ok(edges)
}
