use crate::geom::ConversionDiagnostics;

/// Receives non-fatal notices raised during a conversion.
///
/// Reporting never affects control flow; a sink cannot abort a conversion.
pub trait DiagnosticSink {
    fn warning(&mut self, message: &str);
}

/// Forwards notices to the `log` facade at warn level.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

impl DiagnosticSink for LogSink {
    fn warning(&mut self, message: &str) {
        log::warn!("{message}");
    }
}

impl DiagnosticSink for ConversionDiagnostics {
    fn warning(&mut self, message: &str) {
        self.add_warning(message);
    }
}

impl DiagnosticSink for Vec<String> {
    fn warning(&mut self, message: &str) {
        self.push(message.to_owned());
    }
}

impl<S: DiagnosticSink + ?Sized> DiagnosticSink for &mut S {
    fn warning(&mut self, message: &str) {
        (**self).warning(message);
    }
}
