use glam::f64::DVec3;

/// Double precision Axis Aligned Bounding Box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DAABox {
    pub min: DVec3,
    pub max: DVec3,
}

impl DAABox {
    /// Creates a new DAABox with explicitly specified min and max corners.
    /// Does not validate that min <= max, use this only when you're certain of the order.
    pub fn from_min_max(min: DVec3, max: DVec3) -> Self {
        DAABox { min, max }
    }

    /// Creates a degenerate box containing exactly one point, suitable as the
    /// seed for a sequence of `enclose_point` calls.
    pub fn from_point(point: DVec3) -> Self {
        DAABox {
            min: point,
            max: point,
        }
    }

    /// Returns the size of the box in each dimension.
    pub fn size(&self) -> DVec3 {
        self.max - self.min
    }

    /// Returns the center point of the box.
    pub fn center(&self) -> DVec3 {
        (self.min + self.max) * 0.5
    }

    /// Grows the box in-place so that it contains the given point.
    pub fn enclose_point(&mut self, point: DVec3) {
        self.min = self.min.min(point);
        self.max = self.max.max(point);
    }

    /// Checks if a point is inside this box (inclusive of boundaries).
    pub fn contains_point(&self, point: DVec3) -> bool {
        point.x >= self.min.x && point.x <= self.max.x &&
        point.y >= self.min.y && point.y <= self.max.y &&
        point.z >= self.min.z && point.z <= self.max.z
    }
}
