//! Mapping of indexed poly-curve entities onto edge loops.

mod batch;
mod error;
mod fit;
mod points;
mod polycurve;
mod segments;
mod sink;

pub use batch::{BatchItem, batch_diagnostics};
pub use error::{PolyCurveError, PolyCurveResult};
pub use fit::{ArcFitter, ThreePointArcFitter};
pub use points::{PointList, normalize_points};
pub use polycurve::{
    ConversionSettings, DEFAULT_ENTITY_LABEL, IndexedPolyCurve, PolyCurveConverter,
    assemble_loop, convert, dispatch_segments,
};
pub use segments::{ARC_INDEX, LINE_INDEX, Segment, SegmentDescriptor};
pub use sink::{DiagnosticSink, LogSink};
