#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod geom;
pub mod mapping;

use std::fmt;

use geom::{Edge, Loop};
use mapping::{ConversionSettings, IndexedPolyCurve, PolyCurveConverter, PolyCurveResult};
use serde::{Deserialize, Serialize};
use wasm_bindgen::JsError;
use wasm_bindgen::prelude::*;

cfg_if::cfg_if! {
    if #[cfg(all(feature = "console_error_panic_hook", target_arch = "wasm32"))] {
        #[wasm_bindgen(start)]
        pub fn initialize() {
            console_error_panic_hook::set_once();
            init_logger();
        }
    } else {
        #[wasm_bindgen(start)]
        pub fn initialize() {
            init_logger();
        }
    }
}

#[cfg(feature = "debug_logs")]
fn init_logger() {
    use log::LevelFilter;
    use wasm_bindgen_console_logger::DEFAULT_LOGGER;
    // A second initialize() finds the logger already installed.
    if log::set_logger(&DEFAULT_LOGGER).is_ok() {
        log::set_max_level(LevelFilter::Debug);
    }
}

#[cfg(not(feature = "debug_logs"))]
fn init_logger() {}

#[cfg(all(feature = "parallel", target_arch = "wasm32"))]
#[wasm_bindgen]
pub async fn initialize_parallel(worker_count: Option<u32>) -> Result<(), JsError> {
    let threads = worker_count
        .map(|count| count.max(1) as usize)
        .or_else(|| {
            std::thread::available_parallelism()
                .map(|value| value.get())
                .ok()
        })
        .unwrap_or(1);

    wasm_bindgen_rayon::init_thread_pool(threads)
        .await
        .map_err(|err| JsError::new(&format!("could not start rayon thread pool: {err}")))
}

/// Request accepted by [`convert_poly_curve`].
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConvertRequest {
    pub curve: IndexedPolyCurve,
    #[serde(default)]
    pub length_unit: Option<f64>,
}

/// Edge as handed to the host, with plain coordinate arrays.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum EdgeExport {
    Line {
        start: [f64; 3],
        end: [f64; 3],
    },
    Arc {
        start: [f64; 3],
        end: [f64; 3],
        center: [f64; 3],
        radius: f64,
        normal: [f64; 3],
    },
}

impl From<&Edge> for EdgeExport {
    fn from(edge: &Edge) -> Self {
        match edge.basis {
            Some(circle) => EdgeExport::Arc {
                start: edge.start.to_array(),
                end: edge.end.to_array(),
                center: circle.center.to_array(),
                radius: circle.radius,
                normal: circle.normal().to_array(),
            },
            None => EdgeExport::Line {
                start: edge.start.to_array(),
                end: edge.end.to_array(),
            },
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LoopExport {
    pub edges: Vec<EdgeExport>,
    pub warnings: Vec<String>,
}

impl LoopExport {
    fn new(curve_loop: &Loop, warnings: Vec<String>) -> Self {
        Self {
            edges: curve_loop.iter().map(EdgeExport::from).collect(),
            warnings,
        }
    }
}

/// Converts a request without touching the JS boundary.
pub fn convert_request(request: &ConvertRequest) -> PolyCurveResult<LoopExport> {
    let settings = request
        .length_unit
        .map_or_else(ConversionSettings::default, ConversionSettings::with_length_unit);
    let (curve_loop, diagnostics) =
        PolyCurveConverter::new(settings).convert_with_diagnostics(&request.curve)?;

    for warning in &diagnostics.warnings {
        log::warn!("{warning}");
    }
    Ok(LoopExport::new(&curve_loop, diagnostics.warnings))
}

/// Converts one `{ curve, lengthUnit? }` request into `{ edges, warnings }`.
#[wasm_bindgen(js_name = convertPolyCurve)]
pub fn convert_poly_curve(request: JsValue) -> Result<JsValue, JsValue> {
    let request: ConvertRequest = serde_wasm_bindgen::from_value(request).map_err(to_js_error)?;
    let export = convert_request(&request).map_err(to_js_error)?;
    serde_wasm_bindgen::to_value(&export).map_err(to_js_error)
}

fn to_js_error<E: fmt::Display>(error: E) -> JsValue {
    js_error(&error.to_string())
}

fn js_error(message: &str) -> JsValue {
    #[cfg(target_arch = "wasm32")]
    {
        JsError::new(message).into()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = message;
        JsValue::NULL
    }
}

#[cfg(test)]
mod tests {
    use super::{ConvertRequest, EdgeExport, convert_request};
    use crate::mapping::{IndexedPolyCurve, PolyCurveError, SegmentDescriptor};

    fn request(curve: IndexedPolyCurve, length_unit: Option<f64>) -> ConvertRequest {
        ConvertRequest { curve, length_unit }
    }

    #[test]
    fn exports_lines_and_arcs_in_order() {
        let curve = IndexedPolyCurve::new(
            vec![vec![-1.0, 0.0], vec![0.0, 1.0], vec![1.0, 0.0]],
            Some(vec![
                SegmentDescriptor::arc([1, 2, 3]),
                SegmentDescriptor::line([3, 1]),
            ]),
        );
        let export = convert_request(&request(curve, None)).unwrap();

        assert_eq!(export.edges.len(), 2);
        match &export.edges[0] {
            EdgeExport::Arc {
                start,
                end,
                center,
                radius,
                normal,
            } => {
                assert_eq!(*start, [-1.0, 0.0, 0.0]);
                assert_eq!(*end, [1.0, 0.0, 0.0]);
                assert!(center.iter().all(|value| value.abs() < 1e-9));
                assert!((radius - 1.0).abs() < 1e-9);
                // (-1,0) -> (0,1) -> (1,0) runs clockwise seen from +Z.
                assert!((normal[2] + 1.0).abs() < 1e-9);
            }
            other => panic!("expected arc, got {other:?}"),
        }
        assert_eq!(
            export.edges[1],
            EdgeExport::Line {
                start: [1.0, 0.0, 0.0],
                end: [-1.0, 0.0, 0.0],
            }
        );
        assert!(export.warnings.is_empty());
    }

    #[test]
    fn length_unit_scales_exported_points() {
        let curve = IndexedPolyCurve::new(vec![vec![1.0, 2.0, 3.0], vec![0.0, 0.0, 0.0]], None);
        let export = convert_request(&request(curve, Some(2.0))).unwrap();
        assert_eq!(
            export.edges,
            vec![EdgeExport::Line {
                start: [2.0, 4.0, 6.0],
                end: [0.0, 0.0, 0.0],
            }]
        );
    }

    #[test]
    fn degenerate_arcs_surface_as_warnings() {
        let curve = IndexedPolyCurve::new(
            vec![vec![0.0, 0.0], vec![1.0, 0.0], vec![2.0, 0.0]],
            Some(vec![SegmentDescriptor::arc([1, 2, 3])]),
        );
        let export = convert_request(&request(curve, None)).unwrap();
        assert!(export.edges.is_empty());
        assert_eq!(export.warnings.len(), 1);
    }

    #[test]
    fn structural_errors_are_returned() {
        let curve = IndexedPolyCurve::new(
            vec![vec![0.0, 0.0]],
            Some(vec![SegmentDescriptor::arc([1, 1])]),
        );
        assert!(matches!(
            convert_request(&request(curve, None)),
            Err(PolyCurveError::MalformedSegment { .. })
        ));
    }
}
