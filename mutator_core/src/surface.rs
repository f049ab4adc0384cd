// Copyright 2026 the Mutator Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host drawing-surface contract.
//!
//! The host owns the actual drawing target (a platform canvas, a recording
//! display list, a software rasterizer). This module describes the subset of
//! its capabilities that [`MutatorView`](crate::view::MutatorView) consumes:
//!
//! - **State stack** — [`save`](Surface::save) pushes the current clip and
//!   transform; [`restore`](Surface::restore) pops them. Pairs must nest.
//! - **Clip** — [`clip_path`](Surface::clip_path) intersects the active clip
//!   with a path given in the surface's current local space.
//! - **Transform** — [`concat`](Surface::concat) post-multiplies the active
//!   transform (`current = current * transform`), so the new transform
//!   applies to content drawn afterwards before the existing one.
//!
//! Painting children is not part of the trait; paint methods take a closure
//! that receives the surface and draws whatever the host needs.
//!
//! # Scoped state
//!
//! A leaked `save` corrupts every sibling painted afterwards. [`SurfaceGuard`]
//! saves on construction and restores in `Drop`, so the pair stays balanced
//! on every exit path, including unwinding out of a panicking child paint.

use core::fmt;
use core::ops::{Deref, DerefMut};

use kurbo::{Affine, BezPath};

/// A drawing target that supports state save/restore, path clipping, and
/// transform concatenation.
pub trait Surface {
    /// Pushes the current clip and transform state.
    fn save(&mut self);

    /// Pops the most recently saved clip and transform state.
    fn restore(&mut self);

    /// Intersects the active clip with `path`, given in current local space.
    fn clip_path(&mut self, path: &BezPath);

    /// Concatenates `transform` onto the active transform.
    fn concat(&mut self, transform: Affine);
}

impl<S: Surface + ?Sized> Surface for &mut S {
    #[inline]
    fn save(&mut self) {
        (**self).save();
    }

    #[inline]
    fn restore(&mut self) {
        (**self).restore();
    }

    #[inline]
    fn clip_path(&mut self, path: &BezPath) {
        (**self).clip_path(path);
    }

    #[inline]
    fn concat(&mut self, transform: Affine) {
        (**self).concat(transform);
    }
}

/// Saves a [`Surface`]'s state on creation and restores it on drop.
///
/// The guard dereferences to the wrapped surface, so drawing goes through it
/// for the duration of the scope.
pub struct SurfaceGuard<'a, S: Surface + ?Sized> {
    surface: &'a mut S,
}

impl<'a, S: Surface + ?Sized> SurfaceGuard<'a, S> {
    /// Calls [`Surface::save`] and returns a guard that will call
    /// [`Surface::restore`] when dropped.
    #[inline]
    #[must_use = "dropping the guard restores the surface immediately"]
    pub fn new(surface: &'a mut S) -> Self {
        surface.save();
        Self { surface }
    }
}

impl<S: Surface + ?Sized> Deref for SurfaceGuard<'_, S> {
    type Target = S;

    #[inline]
    fn deref(&self) -> &S {
        &*self.surface
    }
}

impl<S: Surface + ?Sized> DerefMut for SurfaceGuard<'_, S> {
    #[inline]
    fn deref_mut(&mut self) -> &mut S {
        &mut *self.surface
    }
}

impl<S: Surface + ?Sized> Drop for SurfaceGuard<'_, S> {
    #[inline]
    fn drop(&mut self) {
        self.surface.restore();
    }
}

impl<S: Surface + ?Sized> fmt::Debug for SurfaceGuard<'_, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SurfaceGuard").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    #[derive(Debug, PartialEq)]
    enum Op {
        Save,
        Restore,
        Clip,
        Concat(Affine),
    }

    #[derive(Default)]
    struct Log(Vec<Op>);

    impl Surface for Log {
        fn save(&mut self) {
            self.0.push(Op::Save);
        }
        fn restore(&mut self) {
            self.0.push(Op::Restore);
        }
        fn clip_path(&mut self, _path: &BezPath) {
            self.0.push(Op::Clip);
        }
        fn concat(&mut self, transform: Affine) {
            self.0.push(Op::Concat(transform));
        }
    }

    #[test]
    fn guard_saves_and_restores() {
        let mut log = Log::default();
        {
            let mut guard = SurfaceGuard::new(&mut log);
            guard.concat(Affine::scale(2.0));
        }
        assert_eq!(
            log.0,
            [Op::Save, Op::Concat(Affine::scale(2.0)), Op::Restore]
        );
    }

    #[test]
    fn nested_guards_balance() {
        let mut log = Log::default();
        {
            let mut outer = SurfaceGuard::new(&mut log);
            outer.clip_path(&BezPath::new());
            {
                let _inner = SurfaceGuard::new(&mut *outer);
            }
        }
        assert_eq!(
            log.0,
            [Op::Save, Op::Clip, Op::Save, Op::Restore, Op::Restore]
        );
    }

    #[test]
    fn guard_works_through_trait_object() {
        let mut log = Log::default();
        {
            let surface: &mut dyn Surface = &mut log;
            let _guard = SurfaceGuard::new(surface);
        }
        assert_eq!(log.0, [Op::Save, Op::Restore]);
    }
}
