//! World/canvas coordinate conversion.
//!
//! The display canvas has its Y axis growing downward, so mapping a world
//! rectangle onto it needs a flipped linear map on that axis.

/// Linear map between two value ranges.
#[derive(Clone, Copy, Debug)]
pub struct LinearInterpolator {
    x1: f32,
    y1: f32,
    rate: f32,
}

impl LinearInterpolator {
    /// Create a map sending [x1, x2] onto [y1, y2]. `x1` and `x2` must
    /// differ.
    pub fn new(x1: f32, x2: f32, y1: f32, y2: f32) -> Self {
        Self {
            x1,
            y1,
            rate: (y2 - y1) / (x2 - x1),
        }
    }

    /// Map a value from the source range to the target range.
    #[inline]
    pub fn convert(&self, x: f32) -> f32 {
        self.y1 + (x - self.x1) * self.rate
    }

    /// Map a value from the target range back to the source range.
    #[inline]
    pub fn inverse_convert(&self, y: f32) -> f32 {
        self.x1 + (y - self.y1) / self.rate
    }
}

/// Converts between world coordinates (meters, Y up) and canvas pixel
/// coordinates (Y down).
#[derive(Clone, Copy, Debug)]
pub struct CanvasConverter {
    x_converter: LinearInterpolator,
    y_converter: LinearInterpolator,
}

impl CanvasConverter {
    /// Map the world rectangle [x_min, x_max] × [y_min, y_max] onto a
    /// canvas of the given pixel size.
    pub fn new(
        x_min: f32,
        x_max: f32,
        y_min: f32,
        y_max: f32,
        canvas_width: f32,
        canvas_height: f32,
    ) -> Self {
        Self {
            x_converter: LinearInterpolator::new(x_min, x_max, 0.0, canvas_width),
            // Swapped canvas_height and 0 to flip the Y axis
            y_converter: LinearInterpolator::new(y_min, y_max, canvas_height, 0.0),
        }
    }

    /// World X to canvas X.
    pub fn x_to_canvas(&self, x: f32) -> f32 {
        self.x_converter.convert(x)
    }

    /// World Y to canvas Y.
    pub fn y_to_canvas(&self, y: f32) -> f32 {
        self.y_converter.convert(y)
    }

    /// World position to canvas position.
    pub fn to_canvas(&self, x: f32, y: f32) -> (f32, f32) {
        (self.x_to_canvas(x), self.y_to_canvas(y))
    }

    /// Canvas X to world X.
    pub fn x_to_world(&self, cx: f32) -> f32 {
        self.x_converter.inverse_convert(cx)
    }

    /// Canvas Y to world Y.
    pub fn y_to_world(&self, cy: f32) -> f32 {
        self.y_converter.inverse_convert(cy)
    }

    /// Canvas position to world position.
    pub fn to_world(&self, cx: f32, cy: f32) -> (f32, f32) {
        (self.x_to_world(cx), self.y_to_world(cy))
    }
}
