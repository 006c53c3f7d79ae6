//! Conversion of many curves from one model.
//!
//! Every curve owns its inputs and its output, so curves convert
//! independently. With the `parallel` feature the work is spread over the
//! rayon pool; the result order always matches the input order.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::geom::{ConversionDiagnostics, Loop};

use super::error::PolyCurveResult;
use super::fit::ArcFitter;
use super::polycurve::{IndexedPolyCurve, PolyCurveConverter};

/// Outcome of converting one curve in a batch.
pub type BatchItem = PolyCurveResult<(Loop, ConversionDiagnostics)>;

impl<F: ArcFitter + Sync> PolyCurveConverter<F> {
    /// Converts each curve on its own; a failing curve does not affect the
    /// others.
    pub fn convert_batch(&self, curves: &[IndexedPolyCurve]) -> Vec<BatchItem> {
        let results = self.convert_all(curves);
        let failed = results.iter().filter(|result| result.is_err()).count();
        log::debug!(
            "converted batch of {} curves ({} failed)",
            curves.len(),
            failed
        );
        results
    }

    #[cfg(feature = "parallel")]
    fn convert_all(&self, curves: &[IndexedPolyCurve]) -> Vec<BatchItem> {
        curves
            .par_iter()
            .map(|curve| self.convert_with_diagnostics(curve))
            .collect()
    }

    #[cfg(not(feature = "parallel"))]
    fn convert_all(&self, curves: &[IndexedPolyCurve]) -> Vec<BatchItem> {
        curves
            .iter()
            .map(|curve| self.convert_with_diagnostics(curve))
            .collect()
    }
}

/// Sums the diagnostics of every successful conversion in a batch.
#[must_use]
pub fn batch_diagnostics(results: &[BatchItem]) -> ConversionDiagnostics {
    let mut total = ConversionDiagnostics::new();
    for (_, diagnostics) in results.iter().flatten() {
        total.merge(diagnostics);
    }
    total
}
