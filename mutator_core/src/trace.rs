// Copyright 2026 the Mutator Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tracing and diagnostics for configure and paint passes.
//!
//! This module provides a [`TraceSink`] trait with per-event methods that
//! [`MutatorView`](crate::view::MutatorView) calls at each stage. All method
//! bodies default to no-ops, so implementing only the events you care about
//! is fine.
//!
//! [`Tracer`] wraps an optional `&mut dyn TraceSink`. When the `trace` feature
//! is **off**, every `Tracer` method compiles to nothing (zero overhead). When
//! **on**, each method performs a single `Option` branch before dispatching.
//!
//! # Crate features
//!
//! - `trace` — enables the `Tracer` method bodies (one branch per call).
//! - `trace-rich` (implies `trace`) — gates [`ClipAppliedEvent`] and the
//!   corresponding `TraceSink` method.

use kurbo::Affine;
#[cfg(feature = "trace-rich")]
use kurbo::Rect;

use crate::view::Placement;

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

/// Which paint sub-phase is being traced.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PhaseKind {
    /// Clip phase around the view's own painting.
    Clip,
    /// Transform phase around the children dispatch.
    Transform,
}

impl PhaseKind {
    /// Returns a short lowercase label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Clip => "clip",
            Self::Transform => "transform",
        }
    }
}

// ---------------------------------------------------------------------------
// Event structs
// ---------------------------------------------------------------------------

/// Emitted when a view is bound to a new stack and placement.
#[derive(Clone, Copy, Debug)]
pub struct ConfigureEvent {
    /// Configure counter of the view after this call.
    pub generation: u64,
    /// The new placement.
    pub placement: Placement,
    /// Number of transform mutations in the new stack.
    pub transforms: usize,
    /// Number of clip mutations in the new stack.
    pub clips: usize,
}

/// Marks the beginning of a paint sub-phase, after the surface was saved.
#[derive(Clone, Copy, Debug)]
pub struct PhaseBeginEvent {
    /// Configure counter of the view being painted.
    pub generation: u64,
    /// Which phase is starting.
    pub phase: PhaseKind,
}

/// Marks the end of a paint sub-phase, after the surface was restored.
///
/// Not emitted when child painting unwinds.
#[derive(Clone, Copy, Debug)]
pub struct PhaseEndEvent {
    /// Configure counter of the view being painted.
    pub generation: u64,
    /// Which phase is ending.
    pub phase: PhaseKind,
}

/// Emitted when the transform phase concatenates its matrix.
#[derive(Clone, Copy, Debug)]
pub struct TransformAppliedEvent {
    /// Configure counter of the view being painted.
    pub generation: u64,
    /// The matrix concatenated onto the surface.
    pub matrix: Affine,
    /// Density used for the logical-pixel correction.
    pub density: f64,
}

/// Emitted once per clip path intersected in the clip phase.
#[cfg(feature = "trace-rich")]
#[derive(Clone, Copy, Debug)]
pub struct ClipAppliedEvent {
    /// Configure counter of the view being painted.
    pub generation: u64,
    /// Position of the clip in push order.
    pub index: usize,
    /// Bounds of the offset clip path in view-local space.
    pub bounds: Rect,
}

// ---------------------------------------------------------------------------
// TraceSink trait
// ---------------------------------------------------------------------------

/// Receives trace events from configure and paint passes.
///
/// All methods have default no-op implementations, so you only need to
/// override the events you care about.
pub trait TraceSink {
    /// Called after a view is configured.
    fn on_configure(&mut self, e: &ConfigureEvent) {
        _ = e;
    }

    /// Called at the beginning of a paint sub-phase.
    fn on_phase_begin(&mut self, e: &PhaseBeginEvent) {
        _ = e;
    }

    /// Called at the end of a paint sub-phase.
    fn on_phase_end(&mut self, e: &PhaseEndEvent) {
        _ = e;
    }

    /// Called when the transform phase concatenates its matrix.
    fn on_transform_applied(&mut self, e: &TransformAppliedEvent) {
        _ = e;
    }

    /// Called for each clip path (requires `trace-rich` feature).
    #[cfg(feature = "trace-rich")]
    fn on_clip_applied(&mut self, e: &ClipAppliedEvent) {
        _ = e;
    }
}

// ---------------------------------------------------------------------------
// NoopSink
// ---------------------------------------------------------------------------

/// A [`TraceSink`] that discards all events.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopSink;

impl TraceSink for NoopSink {}

// ---------------------------------------------------------------------------
// Tracer wrapper
// ---------------------------------------------------------------------------

/// Thin wrapper around an optional [`TraceSink`].
///
/// When the `trace` feature is **off**, every method compiles to nothing. When
/// **on**, each method checks the inner `Option` (one branch) before
/// dispatching to the sink.
pub struct Tracer<'a> {
    #[cfg(feature = "trace")]
    sink: Option<&'a mut dyn TraceSink>,
    #[cfg(not(feature = "trace"))]
    _marker: core::marker::PhantomData<&'a mut dyn TraceSink>,
}

impl core::fmt::Debug for Tracer<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Tracer").finish_non_exhaustive()
    }
}

impl<'a> Tracer<'a> {
    /// Creates a tracer that dispatches to the given sink.
    #[inline]
    #[must_use]
    pub fn new(sink: &'a mut dyn TraceSink) -> Self {
        #[cfg(feature = "trace")]
        {
            Self { sink: Some(sink) }
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = sink;
            Self {
                _marker: core::marker::PhantomData,
            }
        }
    }

    /// Creates a tracer that discards all events.
    #[inline]
    #[must_use]
    pub fn none() -> Self {
        #[cfg(feature = "trace")]
        {
            Self { sink: None }
        }
        #[cfg(not(feature = "trace"))]
        {
            Self {
                _marker: core::marker::PhantomData,
            }
        }
    }

    /// Emits a [`ConfigureEvent`].
    #[inline]
    pub fn configure(&mut self, e: &ConfigureEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_configure(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`PhaseBeginEvent`].
    #[inline]
    pub fn phase_begin(&mut self, e: &PhaseBeginEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_phase_begin(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`PhaseEndEvent`].
    #[inline]
    pub fn phase_end(&mut self, e: &PhaseEndEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_phase_end(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`TransformAppliedEvent`].
    #[inline]
    pub fn transform_applied(&mut self, e: &TransformAppliedEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_transform_applied(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`ClipAppliedEvent`] (requires `trace-rich` feature).
    #[cfg(feature = "trace-rich")]
    #[inline]
    pub fn clip_applied(&mut self, e: &ClipAppliedEvent) {
        if let Some(s) = &mut self.sink {
            s.on_clip_applied(e);
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
