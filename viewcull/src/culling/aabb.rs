/// Axis-aligned bounding box in world space.
///
/// Read fresh from each test subject at classification time; the
/// library never caches or mutates boxes. Callers that keep bounds in
/// local space can bring them to world space with `transformed()`.

use glam::{Mat4, Vec3};

/// Axis-Aligned Bounding Box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    /// Minimum corner (x, y, z)
    pub min: Vec3,
    /// Maximum corner (x, y, z)
    pub max: Vec3,
}

impl Aabb {
    /// Box from its two extreme corners.
    ///
    /// `min <= max` componentwise is a caller contract, asserted in
    /// debug builds only. A zero-size box is valid and classifies as a
    /// single point.
    pub fn new(min: Vec3, max: Vec3) -> Self {
        debug_assert!(
            min.x <= max.x && min.y <= max.y && min.z <= max.z,
            "AABB min corner must not exceed max corner"
        );
        Self { min, max }
    }

    /// Box from a minimum corner and a non-negative size.
    pub fn from_min_size(min: Vec3, size: Vec3) -> Self {
        Self::new(min, min + size)
    }

    /// Center point of the box.
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    /// Extent of the box along each axis.
    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }

    /// Corner of the box farthest along `normal`.
    ///
    /// Per axis: the max component where the normal component is
    /// positive, the min component otherwise.
    #[inline]
    pub fn positive_vertex(&self, normal: Vec3) -> Vec3 {
        Vec3::new(
            if normal.x > 0.0 { self.max.x } else { self.min.x },
            if normal.y > 0.0 { self.max.y } else { self.min.y },
            if normal.z > 0.0 { self.max.z } else { self.min.z },
        )
    }

    /// Corner of the box farthest against `normal` (the complement of
    /// `positive_vertex`).
    #[inline]
    pub fn negative_vertex(&self, normal: Vec3) -> Vec3 {
        Vec3::new(
            if normal.x < 0.0 { self.max.x } else { self.min.x },
            if normal.y < 0.0 { self.max.y } else { self.min.y },
            if normal.z < 0.0 { self.max.z } else { self.min.z },
        )
    }

    /// Transform this box by a matrix, returning the enclosing box.
    ///
    /// Uses the Arvo method: projects each matrix axis onto the box
    /// extents for an exact (tight) result without transforming all
    /// 8 corners.
    pub fn transformed(&self, matrix: &Mat4) -> Aabb {
        let translation = matrix.col(3).truncate();
        let mut new_min = translation;
        let mut new_max = translation;

        for i in 0..3 {
            let axis = matrix.col(i).truncate();
            let a = axis * self.min[i];
            let b = axis * self.max[i];
            new_min += a.min(b);
            new_max += a.max(b);
        }

        Aabb { min: new_min, max: new_max }
    }
}

#[cfg(test)]
#[path = "aabb_tests.rs"]
mod tests;
