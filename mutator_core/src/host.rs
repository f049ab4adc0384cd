// Copyright 2026 the Mutator Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host view-hierarchy contract.
//!
//! The host platform owns the native view that wraps the embedded element.
//! Each host integration provides the following pieces:
//!
//! - **Placement** — Implements [`HostView`] so that
//!   [`MutatorView::configure`](crate::view::MutatorView::configure) can hand
//!   the final frame to the platform's layout system (e.g. layout params with
//!   margins on Android, a frame rect on `UIView`).
//!
//! - **Drawing** — Implements [`Surface`](crate::surface::Surface) for the
//!   canvas it passes to the paint callbacks.
//!
//! - **Paint dispatch** — Calls
//!   [`paint_clip`](crate::view::MutatorView::paint_clip) from the view's own
//!   draw pass and
//!   [`paint_transform`](crate::view::MutatorView::paint_transform) from the
//!   children dispatch pass. This is host-specific and not abstracted by a
//!   trait because the paint scheduling differs fundamentally across
//!   platforms.
//!
//! # Threading
//!
//! Everything runs on the host's UI thread. `configure` happens between
//! paint passes, never during one.

use crate::view::Placement;

/// Receives placement for the native view that hosts an embedded element.
///
/// Both platform view wrappers and test doubles implement this trait.
pub trait HostView {
    /// Positions the view at `(left, top)` with size `(width, height)`.
    fn set_frame(&mut self, placement: Placement);

    /// Enables or disables the host's "skip draw when there is no content"
    /// optimization.
    ///
    /// A configured view always passes `false` so that its clip phase runs.
    fn set_will_not_draw(&mut self, will_not_draw: bool);
}

impl<H: HostView + ?Sized> HostView for &mut H {
    #[inline]
    fn set_frame(&mut self, placement: Placement) {
        (**self).set_frame(placement);
    }

    #[inline]
    fn set_will_not_draw(&mut self, will_not_draw: bool) {
        (**self).set_will_not_draw(will_not_draw);
    }
}

/// A [`HostView`] that ignores placement.
///
/// Useful when the host positions the view by other means, and in tests that
/// only inspect painting.
#[derive(Clone, Copy, Debug, Default)]
pub struct DetachedHost;

impl HostView for DetachedHost {
    fn set_frame(&mut self, placement: Placement) {
        _ = placement;
    }

    fn set_will_not_draw(&mut self, will_not_draw: bool) {
        _ = will_not_draw;
    }
}
