// Copyright 2026 the Mutator Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Human-readable trace output.
//!
//! [`PrettyPrintSink`] implements [`TraceSink`] and writes one line per event
//! to a [`Write`](std::io::Write) destination (default: stderr).

use std::io::Write;

use kurbo::Affine;
use mutator_core::trace::{
    ClipAppliedEvent, ConfigureEvent, PhaseBeginEvent, PhaseEndEvent, TraceSink,
    TransformAppliedEvent,
};

/// Writes human-readable trace lines to a [`Write`](std::io::Write) destination.
pub struct PrettyPrintSink<W: Write = Box<dyn Write>> {
    writer: W,
}

impl<W: Write> std::fmt::Debug for PrettyPrintSink<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PrettyPrintSink").finish_non_exhaustive()
    }
}

impl PrettyPrintSink {
    /// Creates a sink that writes to stderr.
    #[must_use]
    pub fn stderr() -> Self {
        Self {
            writer: Box::new(std::io::stderr()),
        }
    }

    /// Creates a sink that writes to a boxed writer.
    #[must_use]
    pub fn new(writer: Box<dyn Write>) -> Self {
        Self { writer }
    }
}

impl<W: Write> PrettyPrintSink<W> {
    /// Creates a sink that writes to the given destination.
    #[must_use]
    pub fn with_writer(writer: W) -> Self {
        Self { writer }
    }

    /// Consumes the sink and returns the destination.
    #[must_use]
    pub fn into_inner(self) -> W {
        self.writer
    }
}

fn coeffs(m: Affine) -> String {
    let [a, b, c, d, e, f] = m.as_coeffs();
    format!("[{a:.3} {b:.3} {c:.3} {d:.3} {e:.1} {f:.1}]")
}

impl<W: Write> TraceSink for PrettyPrintSink<W> {
    fn on_configure(&mut self, e: &ConfigureEvent) {
        let p = e.placement;
        let _ = writeln!(
            self.writer,
            "[configure] gen={} at=({},{}) size={}x{} transforms={} clips={}",
            e.generation, p.left, p.top, p.width, p.height, e.transforms, e.clips,
        );
    }

    fn on_phase_begin(&mut self, e: &PhaseBeginEvent) {
        let _ = writeln!(
            self.writer,
            "[phase:begin] gen={} {}",
            e.generation,
            e.phase.as_str(),
        );
    }

    fn on_phase_end(&mut self, e: &PhaseEndEvent) {
        let _ = writeln!(
            self.writer,
            "[phase:end] gen={} {}",
            e.generation,
            e.phase.as_str(),
        );
    }

    fn on_transform_applied(&mut self, e: &TransformAppliedEvent) {
        let _ = writeln!(
            self.writer,
            "[transform] gen={} density={} matrix={}",
            e.generation,
            e.density,
            coeffs(e.matrix),
        );
    }

    fn on_clip_applied(&mut self, e: &ClipAppliedEvent) {
        let b = e.bounds;
        let _ = writeln!(
            self.writer,
            "[clip] gen={} #{} bounds=({:.1},{:.1})-({:.1},{:.1})",
            e.generation, e.index, b.x0, b.y0, b.x1, b.y1,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::Rect;
    use mutator_core::trace::PhaseKind;
    use mutator_core::view::Placement;

    fn output(sink: PrettyPrintSink<Vec<u8>>) -> String {
        String::from_utf8(sink.into_inner()).unwrap()
    }

    #[test]
    fn pretty_print_configure() {
        let mut sink = PrettyPrintSink::with_writer(Vec::<u8>::new());
        sink.on_configure(&ConfigureEvent {
            generation: 1,
            placement: Placement::new(10, 20, 300, 200),
            transforms: 2,
            clips: 1,
        });
        let output = output(sink);
        assert!(output.contains("[configure]"), "got: {output}");
        assert!(output.contains("gen=1"), "got: {output}");
        assert!(output.contains("at=(10,20)"), "got: {output}");
        assert!(output.contains("size=300x200"), "got: {output}");
    }

    #[test]
    fn pretty_print_phases() {
        let mut sink = PrettyPrintSink::with_writer(Vec::<u8>::new());
        sink.on_phase_begin(&PhaseBeginEvent {
            generation: 4,
            phase: PhaseKind::Transform,
        });
        sink.on_phase_end(&PhaseEndEvent {
            generation: 4,
            phase: PhaseKind::Transform,
        });
        let output = output(sink);
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines, ["[phase:begin] gen=4 transform", "[phase:end] gen=4 transform"]);
    }

    #[test]
    fn pretty_print_transform_and_clip() {
        let mut sink = PrettyPrintSink::with_writer(Vec::<u8>::new());
        sink.on_transform_applied(&TransformAppliedEvent {
            generation: 2,
            matrix: Affine::translate((-50.0, -25.0)),
            density: 2.0,
        });
        sink.on_clip_applied(&ClipAppliedEvent {
            generation: 2,
            index: 0,
            bounds: Rect::new(-50.0, -50.0, 250.0, 250.0),
        });
        let output = output(sink);
        assert!(output.contains("density=2"), "got: {output}");
        assert!(output.contains("-50.0 -25.0]"), "got: {output}");
        assert!(
            output.contains("bounds=(-50.0,-50.0)-(250.0,250.0)"),
            "got: {output}"
        );
    }
}
