//! Conversion diagnostics for the poly-curve mapping.
//!
//! A [`ConversionDiagnostics`] is returned next to the loop by
//! `PolyCurveConverter::convert_with_diagnostics`. It records what the
//! conversion produced and every non-fatal notice raised on the way, most
//! notably arc segments dropped because their three points do not define a
//! circle.
//!
//! ```ignore
//! let (curve_loop, diagnostics) = converter.convert_with_diagnostics(&curve)?;
//! if diagnostics.has_gaps() {
//!     for warning in &diagnostics.warnings {
//!         eprintln!("warning: {warning}");
//!     }
//! }
//! ```

use std::fmt;

/// Counts and warnings collected while converting one curve.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ConversionDiagnostics {
    /// Number of points in the normalized point list.
    pub point_count: usize,

    /// Number of segment descriptors processed. Zero when the point list was
    /// chained directly.
    pub segment_count: usize,

    /// Edges in the resulting loop.
    pub edge_count: usize,

    /// Edges carrying a circle basis.
    pub arc_edge_count: usize,

    /// Arc segments that produced no edge because their points are collinear
    /// or coincident. Each one leaves a gap in the loop.
    pub skipped_arc_count: usize,

    /// Whether the loop was built by chaining consecutive points because the
    /// curve carried no segment descriptors.
    pub used_point_fallback: bool,

    /// Human-readable notices, one per skipped arc.
    pub warnings: Vec<String>,
}

impl ConversionDiagnostics {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if an arc segment was dropped, leaving a gap between
    /// neighbouring edges.
    #[must_use]
    pub fn has_gaps(&self) -> bool {
        self.skipped_arc_count > 0
    }

    #[must_use]
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Returns `true` if nothing was skipped and no warnings were raised.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        !self.has_gaps() && !self.has_warnings()
    }

    pub fn add_warning(&mut self, warning: impl Into<String>) {
        self.warnings.push(warning.into());
    }

    /// Sums counts and appends warnings; `used_point_fallback` is OR'd.
    pub fn merge(&mut self, other: &ConversionDiagnostics) {
        self.point_count += other.point_count;
        self.segment_count += other.segment_count;
        self.edge_count += other.edge_count;
        self.arc_edge_count += other.arc_edge_count;
        self.skipped_arc_count += other.skipped_arc_count;
        self.used_point_fallback |= other.used_point_fallback;
        self.warnings.extend(other.warnings.iter().cloned());
    }

    /// Short one-line summary for logging.
    ///
    /// Format: `"P:{points} S:{segments} E:{edges} [extras...]"`
    #[must_use]
    pub fn summary(&self) -> String {
        let mut parts = vec![format!(
            "P:{} S:{} E:{}",
            self.point_count, self.segment_count, self.edge_count
        )];

        if self.arc_edge_count > 0 {
            parts.push(format!("arcs:{}", self.arc_edge_count));
        }
        if self.skipped_arc_count > 0 {
            parts.push(format!("skipped-arcs:{}", self.skipped_arc_count));
        }
        if self.used_point_fallback {
            parts.push("point-fallback".to_string());
        }

        parts.join(" ")
    }
}

impl fmt::Display for ConversionDiagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Conversion Diagnostics:")?;
        writeln!(f, "  Points: {}", self.point_count)?;
        writeln!(f, "  Segments: {}", self.segment_count)?;
        writeln!(f, "  Edges: {} ({} arcs)", self.edge_count, self.arc_edge_count)?;

        if self.used_point_fallback {
            writeln!(f, "  Built from consecutive points")?;
        }
        if self.skipped_arc_count > 0 {
            writeln!(f, "  Skipped degenerate arcs: {}", self.skipped_arc_count)?;
        }

        if !self.warnings.is_empty() {
            writeln!(f, "  Warnings:")?;
            for warning in &self.warnings {
                writeln!(f, "    - {warning}")?;
            }
        }

        let status = if self.is_clean() {
            "CLEAN"
        } else if self.has_gaps() {
            "GAPS"
        } else {
            "WARNINGS"
        };
        writeln!(f, "  Status: {status}")?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_clean() {
        let diag = ConversionDiagnostics::default();
        assert!(diag.is_clean());
        assert!(!diag.has_gaps());
        assert!(!diag.has_warnings());
    }

    #[test]
    fn test_skipped_arc_is_a_gap() {
        let diag = ConversionDiagnostics {
            skipped_arc_count: 1,
            ..Default::default()
        };
        assert!(diag.has_gaps());
        assert!(!diag.is_clean());
    }

    #[test]
    fn test_merge() {
        let mut first = ConversionDiagnostics {
            point_count: 4,
            segment_count: 2,
            edge_count: 3,
            warnings: vec!["first warning".to_string()],
            ..Default::default()
        };
        let second = ConversionDiagnostics {
            point_count: 3,
            edge_count: 2,
            used_point_fallback: true,
            skipped_arc_count: 1,
            warnings: vec!["second warning".to_string()],
            ..Default::default()
        };

        first.merge(&second);

        assert_eq!(first.point_count, 7);
        assert_eq!(first.segment_count, 2);
        assert_eq!(first.edge_count, 5);
        assert_eq!(first.skipped_arc_count, 1);
        assert!(first.used_point_fallback);
        assert_eq!(first.warnings.len(), 2);
    }

    #[test]
    fn test_summary() {
        let diag = ConversionDiagnostics {
            point_count: 5,
            segment_count: 3,
            edge_count: 3,
            arc_edge_count: 1,
            skipped_arc_count: 1,
            ..Default::default()
        };

        let summary = diag.summary();
        assert!(summary.contains("P:5"));
        assert!(summary.contains("S:3"));
        assert!(summary.contains("arcs:1"));
        assert!(summary.contains("skipped-arcs:1"));
        assert!(!summary.contains("point-fallback"));
    }

    #[test]
    fn test_display() {
        let mut diag = ConversionDiagnostics {
            point_count: 3,
            edge_count: 2,
            used_point_fallback: true,
            ..Default::default()
        };
        diag.add_warning("test warning");

        let output = format!("{diag}");
        assert!(output.contains("Points: 3"));
        assert!(output.contains("Edges: 2 (0 arcs)"));
        assert!(output.contains("consecutive points"));
        assert!(output.contains("test warning"));
        assert!(output.contains("WARNINGS"));
    }
}
