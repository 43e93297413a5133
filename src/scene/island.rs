use crate::scene::config::IslandConfig;
use crate::scene::facet_plane::FacetPlane;
use glam::f64::{DMat3, DVec3};

/// The resolved island region: either the intersection of facet half-spaces
/// (a convex polyhedral cut, as in a Wulff construction) or, when no usable
/// facet survives resolution, a sphere around the center.
#[derive(Debug, Clone)]
pub struct IslandRegion {
    center: DVec3,
    radius: f64,
    planes: Vec<FacetPlane>,
}

impl IslandRegion {
    /// Resolves the island config against an already-resolved center and the
    /// two frame rotations. Degenerate facets are dropped here, so an all-
    /// degenerate facet list falls back to the sphere like an empty one.
    pub fn resolve(
        island: &IslandConfig,
        center: DVec3,
        sea_rotation: &DMat3,
        island_rotation: &DMat3,
    ) -> Self {
        let planes = island
            .facets
            .iter()
            .filter_map(|facet| FacetPlane::resolve(facet, sea_rotation, island_rotation))
            .collect();
        IslandRegion {
            center,
            radius: island.radius,
            planes,
        }
    }

    pub fn center(&self) -> DVec3 {
        self.center
    }

    /// Number of planes that survived resolution.
    pub fn plane_count(&self) -> usize {
        self.planes.len()
    }

    /// Whether the point belongs to the island: the logical AND of every
    /// facet predicate, or the sphere test when there are no planes.
    pub fn contains(&self, point: DVec3) -> bool {
        let rel = point - self.center;
        if self.planes.is_empty() {
            rel.length_squared() <= self.radius * self.radius
        } else {
            self.planes.iter().all(|plane| plane.keeps(rel))
        }
    }
}
