// Copyright 2026 the Mutator Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Mutator stacks and paint adapters for embedded platform-native views.
//!
//! An external rendering pipeline computes layout, clipping, and
//! transformation for a tree that contains platform-native elements (video
//! surfaces, map widgets, native text fields). For each such element it emits
//! an ordered sequence of geometric *mutations*. `mutator_core` folds that
//! sequence into one transform and one ordered clip list, and applies both to
//! a host drawing surface at paint time.
//!
//! # Architecture
//!
//! ```text
//!   Rendering pipeline
//!       │  push_transform / push_clip_*
//!       ▼
//!   MutatorStack ──► final_transform, final_clip_paths
//!       │
//!       │  configure(stack, placement)
//!       ▼
//!   MutatorView ──► HostView::set_frame
//!       │
//!       ├── paint_clip(surface, ..)       clip phase (own painting)
//!       └── paint_transform(surface, ..)  transform phase (children)
//! ```
//!
//! **[`mutator`]** — The [`Mutation`](mutator::Mutation) log and its composed
//! transform and clip list.
//!
//! **[`view`]** — [`MutatorView`](view::MutatorView), the paint adapter, plus
//! [`Placement`](view::Placement) and [`Density`](view::Density).
//!
//! **[`surface`]** — The [`Surface`](surface::Surface) trait that host
//! drawing targets implement, and the scoped
//! [`SurfaceGuard`](surface::SurfaceGuard) that restores state on every exit
//! path.
//!
//! **[`host`]** — The [`HostView`](host::HostView) trait that host view
//! hierarchies implement to receive placement.
//!
//! **[`trace`]** — [`TraceSink`](trace::TraceSink) trait and event types for
//! configure/paint instrumentation, with zero-overhead
//! [`Tracer`](trace::Tracer) wrapper.
//!
//! # Coordinate spaces
//!
//! Mutations are expressed in the pipeline's physical-pixel space. The host
//! lays out and paints in logical pixels. The view's own frame already
//! encodes the final `(left, top)` offset, so both paint phases undo it, and
//! the transform phase additionally scales by `1 / density` exactly once.
//!
//! # Crate features
//!
//! - `std` (disabled by default): Enables `std` support in dependencies.
//! - `trace` (disabled by default): Enables `Tracer` method bodies (one branch
//!   per call site).
//! - `trace-rich` (disabled by default, implies `trace`): Gates per-clip
//!   events.

#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

extern crate alloc;

pub mod host;
pub mod mutator;
pub mod surface;
pub mod trace;
pub mod view;
