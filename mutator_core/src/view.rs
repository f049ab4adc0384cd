// Copyright 2026 the Mutator Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Paint adapter for an embedded platform-native view.
//!
//! [`MutatorView`] binds a [`MutatorStack`] to the [`Placement`] computed for
//! it and applies both at paint time. Painting is split into two independent
//! sub-phases, each bracketed by a [`SurfaceGuard`]:
//!
//! 1. **Clip** ([`paint_clip`](MutatorView::paint_clip)) — wraps the view's
//!    own draw pass. Every composed clip path is offset by `(-left, -top)` and
//!    intersected into the surface clip, in push order.
//! 2. **Transform** ([`paint_transform`](MutatorView::paint_transform)) —
//!    wraps the children dispatch. The composed transform is pre-scaled by
//!    `1 / density` and then post-translated by `(-left, -top)` before being
//!    concatenated.
//!
//! The offset correction exists because the view's frame already sits at
//! `(left, top)`: the stack includes the translation that produced that
//! offset, and applying it again would move content twice. The scale must
//! happen before the translation so that the translation stays in the
//! frame's own (logical) units.

use kurbo::{Affine, BezPath, Rect, Vec2};

use crate::host::{DetachedHost, HostView};
use crate::mutator::MutatorStack;
use crate::surface::{Surface, SurfaceGuard};
use crate::trace::{
    ConfigureEvent, PhaseBeginEvent, PhaseEndEvent, PhaseKind, TransformAppliedEvent, Tracer,
};

#[cfg(feature = "trace-rich")]
use crate::trace::ClipAppliedEvent;
#[cfg(feature = "trace-rich")]
use kurbo::Shape as _;

/// Final on-screen bounding rectangle of an embedded view.
///
/// `left` and `top` are the offset the view's own frame encodes; `width` and
/// `height` size its paintable area. A placement is only meaningful together
/// with the [`MutatorStack`] it was computed for.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Placement {
    /// Left edge of the frame.
    pub left: i32,
    /// Top edge of the frame.
    pub top: i32,
    /// Frame width.
    pub width: i32,
    /// Frame height.
    pub height: i32,
}

impl Placement {
    /// Creates a placement from its edges and size.
    #[inline]
    #[must_use]
    pub const fn new(left: i32, top: i32, width: i32, height: i32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Returns the `(left, top)` offset as a vector.
    #[inline]
    #[must_use]
    pub fn offset(self) -> Vec2 {
        Vec2::new(f64::from(self.left), f64::from(self.top))
    }

    /// Returns the frame as a rectangle.
    #[inline]
    #[must_use]
    pub fn frame(self) -> Rect {
        Rect::from_origin_size(
            self.offset().to_point(),
            (f64::from(self.width), f64::from(self.height)),
        )
    }
}

/// Ratio of physical pixels (the space mutations are expressed in) to the
/// host's logical pixel unit.
///
/// Always finite and strictly positive.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct Density(f64);

impl Density {
    /// One physical pixel per logical pixel.
    pub const ONE: Self = Self(1.0);

    /// Creates a density factor.
    ///
    /// # Panics
    ///
    /// Panics if `factor` is not finite or not strictly positive.
    #[must_use]
    pub fn new(factor: f64) -> Self {
        match Self::try_new(factor) {
            Some(density) => density,
            None => panic!("density must be finite and positive, got {factor}"),
        }
    }

    /// Creates a density factor, returning `None` if `factor` is not finite
    /// or not strictly positive.
    #[must_use]
    pub fn try_new(factor: f64) -> Option<Self> {
        (factor.is_finite() && factor > 0.0).then_some(Self(factor))
    }

    /// Returns the raw factor.
    #[inline]
    #[must_use]
    pub const fn get(self) -> f64 {
        self.0
    }
}

impl Default for Density {
    fn default() -> Self {
        Self::ONE
    }
}

/// A stack together with the placement it was computed for.
#[derive(Clone, Debug)]
struct Binding {
    stack: MutatorStack,
    placement: Placement,
}

/// Applies a [`MutatorStack`] to the painting of an embedded native view.
///
/// Call [`configure`](Self::configure) whenever the rendering pipeline
/// produces new geometry, then call [`paint_clip`](Self::paint_clip) from the
/// host view's draw pass and [`paint_transform`](Self::paint_transform) from
/// its children dispatch.
///
/// The density factor is fixed at construction.
#[derive(Debug)]
pub struct MutatorView<H = DetachedHost> {
    host: H,
    density: Density,
    binding: Option<Binding>,
    generation: u64,
}

impl<H: HostView> MutatorView<H> {
    /// Creates an unconfigured view with a density of 1.0.
    #[must_use]
    pub fn new(host: H) -> Self {
        Self::with_density(host, Density::ONE)
    }

    /// Creates an unconfigured view that corrects for `density`.
    #[must_use]
    pub fn with_density(host: H, density: Density) -> Self {
        Self {
            host,
            density,
            binding: None,
            generation: 0,
        }
    }

    /// Binds the view to `stack` and `placement`.
    ///
    /// Places the host view at the placement's frame and disables the host's
    /// skip-draw optimization so that the clip phase runs. Any previous
    /// stack and placement are replaced together.
    pub fn configure(&mut self, stack: MutatorStack, placement: Placement) {
        self.configure_traced(stack, placement, &mut Tracer::none());
    }

    /// Like [`configure`](Self::configure), reporting to `tracer`.
    pub fn configure_traced(
        &mut self,
        stack: MutatorStack,
        placement: Placement,
        tracer: &mut Tracer<'_>,
    ) {
        self.host.set_frame(placement);
        self.host.set_will_not_draw(false);

        let event = ConfigureEvent {
            generation: self.generation + 1,
            placement,
            transforms: stack.transform_count(),
            clips: stack.clip_count(),
        };
        self.binding = Some(Binding { stack, placement });
        self.generation += 1;
        tracer.configure(&event);
    }

    /// Returns whether [`configure`](Self::configure) has been called.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        self.binding.is_some()
    }

    /// Returns the number of `configure` calls so far.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Returns the density factor.
    #[must_use]
    pub fn density(&self) -> Density {
        self.density
    }

    /// Returns the bound stack, if configured.
    #[must_use]
    pub fn stack(&self) -> Option<&MutatorStack> {
        self.binding.as_ref().map(|b| &b.stack)
    }

    /// Returns the bound placement, if configured.
    #[must_use]
    pub fn placement(&self) -> Option<Placement> {
        self.binding.as_ref().map(|b| b.placement)
    }

    /// Returns a reference to the host view.
    #[must_use]
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Returns a mutable reference to the host view.
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Consumes the view and returns the host view.
    #[must_use]
    pub fn into_host(self) -> H {
        self.host
    }

    /// Returns the composed clip paths in view-local space, in push order.
    ///
    /// These are exactly the paths [`paint_clip`](Self::paint_clip)
    /// intersects.
    ///
    /// # Panics
    ///
    /// Panics if the view has not been configured.
    pub fn local_clip_paths(&self) -> impl Iterator<Item = BezPath> + '_ {
        let binding = self.binding();
        let offset = Affine::translate(-binding.placement.offset());
        binding.stack.final_clip_paths().iter().map(move |path| {
            let mut local = path.clone();
            local.apply_affine(offset);
            local
        })
    }

    /// Returns the matrix [`paint_transform`](Self::paint_transform)
    /// concatenates.
    ///
    /// This is the composed transform, pre-scaled by `1 / density` and then
    /// post-translated by `(-left, -top)`.
    ///
    /// # Panics
    ///
    /// Panics if the view has not been configured.
    #[must_use]
    pub fn paint_transform_matrix(&self) -> Affine {
        let binding = self.binding();
        let inverse_density = 1.0 / self.density.get();
        binding
            .stack
            .final_transform()
            .pre_scale(inverse_density)
            .then_translate(-binding.placement.offset())
    }

    /// Runs the clip phase around `draw`.
    ///
    /// Saves `surface`, intersects every local clip path in push order, calls
    /// `draw`, and restores `surface`, even if `draw` panics.
    ///
    /// # Panics
    ///
    /// Panics if the view has not been configured.
    pub fn paint_clip<S, R>(&self, surface: &mut S, draw: impl FnOnce(&mut S) -> R) -> R
    where
        S: Surface + ?Sized,
    {
        self.paint_clip_traced(surface, &mut Tracer::none(), draw)
    }

    /// Like [`paint_clip`](Self::paint_clip), reporting to `tracer`.
    pub fn paint_clip_traced<S, R>(
        &self,
        surface: &mut S,
        tracer: &mut Tracer<'_>,
        draw: impl FnOnce(&mut S) -> R,
    ) -> R
    where
        S: Surface + ?Sized,
    {
        let paths = self.local_clip_paths();
        let phase = PhaseKind::Clip;

        let mut guard = SurfaceGuard::new(surface);
        tracer.phase_begin(&PhaseBeginEvent {
            generation: self.generation,
            phase,
        });
        for (index, path) in paths.enumerate() {
            #[cfg(feature = "trace-rich")]
            tracer.clip_applied(&ClipAppliedEvent {
                generation: self.generation,
                index,
                bounds: path.bounding_box(),
            });
            #[cfg(not(feature = "trace-rich"))]
            {
                _ = index;
            }
            guard.clip_path(&path);
        }
        let out = draw(&mut *guard);
        drop(guard);

        tracer.phase_end(&PhaseEndEvent {
            generation: self.generation,
            phase,
        });
        out
    }

    /// Runs the transform phase around `draw`.
    ///
    /// Saves `surface`, concatenates
    /// [`paint_transform_matrix`](Self::paint_transform_matrix), calls
    /// `draw`, and restores `surface`, even if `draw` panics.
    ///
    /// # Panics
    ///
    /// Panics if the view has not been configured.
    pub fn paint_transform<S, R>(&self, surface: &mut S, draw: impl FnOnce(&mut S) -> R) -> R
    where
        S: Surface + ?Sized,
    {
        self.paint_transform_traced(surface, &mut Tracer::none(), draw)
    }

    /// Like [`paint_transform`](Self::paint_transform), reporting to
    /// `tracer`.
    pub fn paint_transform_traced<S, R>(
        &self,
        surface: &mut S,
        tracer: &mut Tracer<'_>,
        draw: impl FnOnce(&mut S) -> R,
    ) -> R
    where
        S: Surface + ?Sized,
    {
        let matrix = self.paint_transform_matrix();
        let phase = PhaseKind::Transform;

        let mut guard = SurfaceGuard::new(surface);
        tracer.phase_begin(&PhaseBeginEvent {
            generation: self.generation,
            phase,
        });
        guard.concat(matrix);
        tracer.transform_applied(&TransformAppliedEvent {
            generation: self.generation,
            matrix,
            density: self.density.get(),
        });
        let out = draw(&mut *guard);
        drop(guard);

        tracer.phase_end(&PhaseEndEvent {
            generation: self.generation,
            phase,
        });
        out
    }

    fn binding(&self) -> &Binding {
        match &self.binding {
            Some(binding) => binding,
            None => panic!("MutatorView used before configure"),
        }
    }
}
