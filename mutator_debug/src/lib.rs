// Copyright 2026 the Mutator Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pretty-printing trace sinks and recording surfaces for mutator
//! diagnostics.
//!
//! This crate provides development and post-mortem helpers for
//! [`mutator_core`]:
//!
//! - [`pretty::PrettyPrintSink`] — a
//!   [`TraceSink`](mutator_core::trace::TraceSink) with human-readable
//!   one-line-per-event output.
//! - [`recording::RecordingSurface`] — a
//!   [`Surface`](mutator_core::surface::Surface) that records every command
//!   and tracks the effective transform and clip, for tests and for dumping
//!   what a paint pass did.

pub mod pretty;
pub mod recording;
