//! Arithmetic on a bounded plane whose opposite edges may be joined (a torus).

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Extent of the simulated area and whether it wraps.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub width: f64,
    pub height: f64,
    pub wrap: bool,
}

impl Bounds {
    #[must_use]
    pub const fn new(width: f64, height: f64, wrap: bool) -> Self {
        Self {
            width,
            height,
            wrap,
        }
    }

    #[must_use]
    pub fn size(&self) -> DVec2 {
        DVec2::new(self.width, self.height)
    }

    #[must_use]
    pub fn center(&self) -> DVec2 {
        self.size() * 0.5
    }

    /// `true` when `p` lies in `[0, width) x [0, height)`.
    #[must_use]
    pub fn contains(&self, p: DVec2) -> bool {
        p.is_finite() && p.x >= 0.0 && p.x < self.width && p.y >= 0.0 && p.y < self.height
    }

    /// Shortest displacement leading from `a` to `b`.
    ///
    /// On a torus each axis takes the minimal image of the raw difference, which for
    /// in-bounds points is the minimum over the 3x3 tiling of the area.
    #[inline]
    #[must_use]
    pub fn offset(&self, a: DVec2, b: DVec2) -> DVec2 {
        let d = b - a;
        if self.wrap {
            DVec2::new(
                minimal_image(d.x, self.width),
                minimal_image(d.y, self.height),
            )
        } else {
            d
        }
    }

    #[inline]
    #[must_use]
    pub fn distance(&self, a: DVec2, b: DVec2) -> f64 {
        self.offset(a, b).length()
    }

    /// Unit vector from `a` toward `b` along the path used by [`Bounds::distance`].
    ///
    /// `None` when the points coincide.
    #[inline]
    #[must_use]
    pub fn heading(&self, a: DVec2, b: DVec2) -> Option<DVec2> {
        self.offset(a, b).try_normalize()
    }

    /// Reduces each coordinate modulo the corresponding dimension.
    #[must_use]
    pub fn wrap_point(&self, p: DVec2) -> DVec2 {
        DVec2::new(wrap_coord(p.x, self.width), wrap_coord(p.y, self.height))
    }

    /// Pulls each coordinate back inside `[0, extent)`.
    #[must_use]
    pub fn clamp_point(&self, p: DVec2) -> DVec2 {
        DVec2::new(clamp_coord(p.x, self.width), clamp_coord(p.y, self.height))
    }
}

#[inline]
fn minimal_image(d: f64, extent: f64) -> f64 {
    d - extent * (d / extent).round()
}

#[inline]
fn wrap_coord(v: f64, extent: f64) -> f64 {
    let w = v.rem_euclid(extent);
    // rem_euclid of a tiny negative value rounds up to `extent` itself
    if w >= extent {
        0.0
    } else {
        w
    }
}

#[inline]
fn clamp_coord(v: f64, extent: f64) -> f64 {
    v.clamp(0.0, extent - extent * f64::EPSILON)
}
