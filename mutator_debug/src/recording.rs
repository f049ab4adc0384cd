// Copyright 2026 the Mutator Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Command-recording drawing surface.
//!
//! [`RecordingSurface`] implements [`Surface`] by appending each call to a
//! command list while maintaining the same state a real canvas would: a
//! current transform, a list of active clip paths (mapped to device space at
//! the time they were applied), and a save stack.

use kurbo::{Affine, BezPath, Point, Rect, Shape};
use mutator_core::surface::Surface;

/// One recorded call on a [`RecordingSurface`].
#[derive(Clone, Debug, PartialEq)]
pub enum SurfaceCommand {
    /// [`Surface::save`].
    Save,
    /// [`Surface::restore`].
    Restore,
    /// [`Surface::clip_path`] with the path as given (local space).
    ClipPath(BezPath),
    /// [`Surface::concat`].
    Concat(Affine),
    /// A caller-supplied marker, typically standing in for child painting.
    Mark(String),
}

#[derive(Clone, Debug)]
struct State {
    transform: Affine,
    clip_len: usize,
}

/// A [`Surface`] that records commands and tracks effective state.
#[derive(Clone, Debug, Default)]
pub struct RecordingSurface {
    commands: Vec<SurfaceCommand>,
    transform: Affine,
    clips: Vec<BezPath>,
    saved: Vec<State>,
    max_depth: usize,
    unbalanced_restores: usize,
}

impl RecordingSurface {
    /// Creates an empty recording with an identity transform and no clip.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a marker, e.g. where child content is painted.
    pub fn mark(&mut self, label: impl Into<String>) {
        self.commands.push(SurfaceCommand::Mark(label.into()));
    }

    /// Returns the recorded commands in call order.
    #[must_use]
    pub fn commands(&self) -> &[SurfaceCommand] {
        &self.commands
    }

    /// Takes the recorded commands, leaving the state untouched.
    pub fn take_commands(&mut self) -> Vec<SurfaceCommand> {
        std::mem::take(&mut self.commands)
    }

    /// Returns the current transform.
    #[must_use]
    pub fn transform(&self) -> Affine {
        self.transform
    }

    /// Returns the active clip paths in device space, oldest first.
    #[must_use]
    pub fn clip_paths(&self) -> &[BezPath] {
        &self.clips
    }

    /// Returns the intersection of the active clips' bounding boxes in device
    /// space, or `None` when nothing clips.
    ///
    /// Exact for rectangular clips, conservative otherwise.
    #[must_use]
    pub fn clip_bounds(&self) -> Option<Rect> {
        self.clips
            .iter()
            .map(Shape::bounding_box)
            .reduce(|acc, bounds| acc.intersect(bounds))
    }

    /// Maps a point drawn in the current local space to device space.
    #[must_use]
    pub fn to_device(&self, point: Point) -> Point {
        self.transform * point
    }

    /// Returns the current save depth.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.saved.len()
    }

    /// Returns the deepest save depth reached.
    #[must_use]
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Returns the number of `restore` calls made without a matching `save`.
    #[must_use]
    pub fn unbalanced_restores(&self) -> usize {
        self.unbalanced_restores
    }

    /// Returns `true` if every `save` was matched by a `restore` and no extra
    /// `restore` happened.
    #[must_use]
    pub fn is_balanced(&self) -> bool {
        self.saved.is_empty() && self.unbalanced_restores == 0
    }
}

impl Surface for RecordingSurface {
    fn save(&mut self) {
        self.commands.push(SurfaceCommand::Save);
        self.saved.push(State {
            transform: self.transform,
            clip_len: self.clips.len(),
        });
        self.max_depth = self.max_depth.max(self.saved.len());
    }

    fn restore(&mut self) {
        self.commands.push(SurfaceCommand::Restore);
        match self.saved.pop() {
            Some(state) => {
                self.transform = state.transform;
                self.clips.truncate(state.clip_len);
            }
            None => self.unbalanced_restores += 1,
        }
    }

    fn clip_path(&mut self, path: &BezPath) {
        self.commands.push(SurfaceCommand::ClipPath(path.clone()));
        let mut device = path.clone();
        device.apply_affine(self.transform);
        self.clips.push(device);
    }

    fn concat(&mut self, transform: Affine) {
        self.commands.push(SurfaceCommand::Concat(transform));
        self.transform = self.transform * transform;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_in_call_order() {
        let mut surface = RecordingSurface::new();
        surface.save();
        surface.concat(Affine::scale(2.0));
        surface.mark("child");
        surface.restore();
        assert_eq!(
            surface.commands(),
            &[
                SurfaceCommand::Save,
                SurfaceCommand::Concat(Affine::scale(2.0)),
                SurfaceCommand::Mark("child".to_owned()),
                SurfaceCommand::Restore,
            ]
        );
    }

    #[test]
    fn restore_rewinds_transform_and_clip() {
        let mut surface = RecordingSurface::new();
        surface.save();
        surface.concat(Affine::translate((5.0, 5.0)));
        surface.clip_path(&Rect::new(0.0, 0.0, 10.0, 10.0).to_path(0.1));
        assert_eq!(surface.clip_bounds(), Some(Rect::new(5.0, 5.0, 15.0, 15.0)));
        surface.restore();

        assert_eq!(surface.transform(), Affine::IDENTITY);
        assert_eq!(surface.clip_bounds(), None);
        assert!(surface.is_balanced());
    }

    #[test]
    fn clip_bounds_intersect() {
        let mut surface = RecordingSurface::new();
        surface.clip_path(&Rect::new(0.0, 0.0, 100.0, 100.0).to_path(0.1));
        surface.clip_path(&Rect::new(50.0, -10.0, 150.0, 60.0).to_path(0.1));
        assert_eq!(surface.clip_bounds(), Some(Rect::new(50.0, 0.0, 100.0, 60.0)));
    }

    #[test]
    fn extra_restore_is_counted() {
        let mut surface = RecordingSurface::new();
        surface.restore();
        assert_eq!(surface.unbalanced_restores(), 1);
        assert!(!surface.is_balanced());
    }

    #[test]
    fn take_commands_keeps_state() {
        let mut surface = RecordingSurface::new();
        surface.save();
        surface.concat(Affine::scale(3.0));
        let taken = surface.take_commands();
        assert_eq!(taken.len(), 2);
        assert!(surface.commands().is_empty());
        assert_eq!(surface.depth(), 1);
        assert_eq!(surface.to_device(Point::new(1.0, 1.0)), Point::new(3.0, 3.0));
    }
}
