use super::ClipError;
use crate::math::Real;

/// Parameters of a clip.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct ClipOptions {
    /// The distance, in the plane’s local units, under which projected points are welded
    /// together.
    ///
    /// Welding is bucket-based: points are merged when they round to the same multiple of the
    /// tolerance, which is not the same as being closer than the tolerance.
    pub tolerance: Real,
    /// The render order assigned to the generated segments and fills so they are drawn on top of
    /// the cut surfaces.
    pub render_order: i32,
}

impl Default for ClipOptions {
    fn default() -> Self {
        Self {
            tolerance: 1.0e-6,
            render_order: 20,
        }
    }
}

impl ClipOptions {
    /// Sets the welding tolerance.
    pub fn with_tolerance(mut self, tolerance: Real) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Sets the render order of the generated geometry.
    pub fn with_render_order(mut self, render_order: i32) -> Self {
        self.render_order = render_order;
        self
    }

    /// Checks that these options can be used for clipping.
    pub fn validate(&self) -> Result<(), ClipError> {
        if self.tolerance.is_finite() && self.tolerance > 0.0 {
            Ok(())
        } else {
            Err(ClipError::InvalidTolerance(self.tolerance))
        }
    }
}
