// Copyright 2026 the Mutator Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Mutation log data model.
//!
//! A *mutation* is one incremental geometric operation emitted by the
//! rendering pipeline for an embedded view:
//!
//! - [`Mutation::Transform`] — an affine transform composed with every
//!   transform pushed before it. The first-pushed transform is the outermost.
//! - [`Mutation::Clip`] — a clip shape expressed in the coordinate space in
//!   effect at the point it was pushed.
//!
//! [`MutatorStack`] keeps the ordered log and maintains two derived values as
//! mutations are appended:
//!
//! - [`final_transform`](MutatorStack::final_transform) — the product
//!   `T1 * T2 * … * Tn` of all transforms in push order.
//! - [`final_clip_paths`](MutatorStack::final_clip_paths) — one path per clip,
//!   in push order, each mapped through the transform that was current when
//!   it was pushed, so all paths share the final coordinate space.
//!
//! The stack is append-only. Consumers treat it as read-only once handed
//! over and replace it wholesale when geometry is recomputed.

mod clip;
mod stack;

pub use clip::{ClipShape, PATH_TOLERANCE};
pub use stack::{Mutation, MutatorStack};
