// Copyright 2026 the Mutator Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Append-only mutation log with composed transform and clip list.

use alloc::vec::Vec;

use kurbo::{Affine, BezPath, Rect, RoundedRect};

use super::clip::ClipShape;

/// One incremental geometric operation emitted by the rendering pipeline.
#[derive(Clone, Debug, PartialEq)]
pub enum Mutation {
    /// An affine transform, composed inside all previously pushed transforms.
    Transform(Affine),
    /// A clip shape in the coordinate space current at push time.
    Clip(ClipShape),
}

/// An ordered, append-only log of [`Mutation`]s.
///
/// The composed transform and clip list are maintained as mutations are
/// pushed, so reading them is free. Mutations are never reordered or removed;
/// a recomputed geometry produces a new stack.
#[derive(Clone, Debug, PartialEq)]
pub struct MutatorStack {
    mutations: Vec<Mutation>,
    final_transform: Affine,
    final_clip_paths: Vec<BezPath>,
}

impl Default for MutatorStack {
    fn default() -> Self {
        Self::new()
    }
}

impl MutatorStack {
    /// Creates an empty stack: identity transform, no clips.
    #[must_use]
    pub fn new() -> Self {
        Self {
            mutations: Vec::new(),
            final_transform: Affine::IDENTITY,
            final_clip_paths: Vec::new(),
        }
    }

    /// Appends a mutation.
    pub fn push(&mut self, mutation: Mutation) {
        match &mutation {
            Mutation::Transform(transform) => {
                self.final_transform = self.final_transform * *transform;
            }
            Mutation::Clip(shape) => {
                let mut path = shape.to_path();
                path.apply_affine(self.final_transform);
                self.final_clip_paths.push(path);
            }
        }
        self.mutations.push(mutation);
    }

    /// Appends a transform.
    ///
    /// The transform is composed *inside* every transform pushed so far:
    /// `final = final * transform`.
    pub fn push_transform(&mut self, transform: Affine) {
        self.push(Mutation::Transform(transform));
    }

    /// Appends a clip of any shape.
    pub fn push_clip(&mut self, shape: impl Into<ClipShape>) {
        self.push(Mutation::Clip(shape.into()));
    }

    /// Appends a rectangular clip.
    pub fn push_clip_rect(&mut self, rect: Rect) {
        self.push_clip(rect);
    }

    /// Appends a rounded-rectangle clip.
    pub fn push_clip_rounded_rect(&mut self, rrect: RoundedRect) {
        self.push_clip(rrect);
    }

    /// Appends a clip along an arbitrary closed path.
    pub fn push_clip_path(&mut self, path: BezPath) {
        self.push_clip(path);
    }

    /// Returns the raw mutation log in push order.
    #[must_use]
    pub fn mutations(&self) -> &[Mutation] {
        &self.mutations
    }

    /// Returns the product of all pushed transforms, first-pushed outermost.
    ///
    /// Identity for a stack without transforms.
    #[must_use]
    pub fn final_transform(&self) -> Affine {
        self.final_transform
    }

    /// Returns one path per pushed clip, in push order, each mapped into the
    /// final coordinate space.
    #[must_use]
    pub fn final_clip_paths(&self) -> &[BezPath] {
        &self.final_clip_paths
    }

    /// Returns the total number of mutations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.mutations.len()
    }

    /// Returns `true` if no mutation was pushed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.mutations.is_empty()
    }

    /// Returns the number of transform mutations.
    #[must_use]
    pub fn transform_count(&self) -> usize {
        self.mutations.len() - self.final_clip_paths.len()
    }

    /// Returns the number of clip mutations.
    #[must_use]
    pub fn clip_count(&self) -> usize {
        self.final_clip_paths.len()
    }

    /// Is the composed transform [finite]?
    ///
    /// Input is never validated; this is a diagnostic aid for callers.
    ///
    /// [finite]: f64::is_finite
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.final_transform.is_finite()
    }
}

impl Extend<Mutation> for MutatorStack {
    fn extend<I: IntoIterator<Item = Mutation>>(&mut self, iter: I) {
        for mutation in iter {
            self.push(mutation);
        }
    }
}

impl FromIterator<Mutation> for MutatorStack {
    fn from_iter<I: IntoIterator<Item = Mutation>>(iter: I) -> Self {
        let mut stack = Self::new();
        stack.extend(iter);
        stack
    }
}
