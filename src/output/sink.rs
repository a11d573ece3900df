//! Shared report sink
//!
//! Single destination for assembly reports. Whole-report writes are
//! serialized, so output from two assemblies never interleaves.

use std::io::{self, Write};
use std::sync::{Mutex, MutexGuard};
use tracing::warn;

/// Exclusive-write destination for flushed reports.
///
/// The lock is held only for the duration of one report's flush, never while
/// an assembly is executing. Ordering across assemblies is first-flush-wins.
pub struct ReportSink {
    dest: Mutex<Box<dyn Write + Send>>,
}

impl ReportSink {
    /// Sink writing to the process's stdout.
    pub fn stdout() -> Self {
        Self::from_writer(Box::new(io::stdout()))
    }

    pub fn from_writer(dest: Box<dyn Write + Send>) -> Self {
        Self {
            dest: Mutex::new(dest),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Box<dyn Write + Send>> {
        self.dest.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Write one report verbatim as a single exclusive operation.
    ///
    /// Write failures are logged, not propagated; report delivery does not
    /// change an assembly's status.
    pub fn flush_report(&self, report: &[u8]) {
        if report.is_empty() {
            return;
        }
        let mut dest = self.lock();
        if let Err(e) = dest.write_all(report).and_then(|()| dest.flush()) {
            warn!("failed to write report: {e}");
        }
    }
}


#[cfg(test)]
mod tests {
    use super::testing::SharedBuf;
    use super::*;
    use std::sync::Arc;

    #[test]
    fn flush_writes_verbatim() {
        let buf = SharedBuf::default();
        let sink = ReportSink::from_writer(Box::new(buf.clone()));

        sink.flush_report(b"line one\nline two\n");
        assert_eq!(buf.contents(), "line one\nline two\n");
    }

    #[test]
    fn empty_report_writes_nothing() {
        let buf = SharedBuf::default();
        let sink = ReportSink::from_writer(Box::new(buf.clone()));

        sink.flush_report(b"");
        assert_eq!(buf.contents(), "");
    }

    #[test]
    fn concurrent_flushes_never_interleave() {
        let buf = SharedBuf::default();
        let sink = Arc::new(ReportSink::from_writer(Box::new(buf.clone())));

        let mut handles = Vec::new();
        for i in 0..8 {
            let sink = sink.clone();
            handles.push(std::thread::spawn(move || {
                let report = format!("begin {i}\n{}end {i}\n", format!("body {i}\n").repeat(200));
                for _ in 0..10 {
                    sink.flush_report(report.as_bytes());
                }
            }));
        }
        for handle in handles {
            handle.join().expect("writer thread panicked");
        }

        let out = buf.contents();
        for i in 0..8 {
            let report = format!("begin {i}\n{}end {i}\n", format!("body {i}\n").repeat(200));
            // Every occurrence of a report's first line starts a contiguous
            // copy of the whole report.
            let mut from = 0;
            let mut seen = 0;
            while let Some(pos) = out[from..].find(&format!("begin {i}\n")) {
                let start = from + pos;
                assert_eq!(&out[start..start + report.len()], report);
                from = start + report.len();
                seen += 1;
            }
            assert_eq!(seen, 10);
        }
    }
}
