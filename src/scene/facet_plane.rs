use crate::scene::config::{FacetConfig, Frame, Side};
use glam::f64::{DMat3, DVec3};
use log::warn;

/// Tolerance for the signed-distance comparison, so lattice sites that land
/// exactly on a facet plane are kept by both side selections.
pub const PLANE_EPSILON: f64 = 1e-8;

/// One resolved cutting plane: a unit normal in cartesian space, a signed
/// offset from the island center along that normal, and the side selection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FacetPlane {
    pub normal: DVec3,
    pub offset: f64,
    pub side: Side,
}

impl FacetPlane {
    /// Resolves a facet config against the two frame rotations.
    ///
    /// The Miller index is rotated through the matrix of the frame it is
    /// expressed in, then normalized. A zero Miller index has no plane to
    /// offer; the facet is dropped with a notice rather than failing the
    /// request.
    pub fn resolve(
        facet: &FacetConfig,
        sea_rotation: &DMat3,
        island_rotation: &DMat3,
    ) -> Option<FacetPlane> {
        if facet.miller == glam::i32::IVec3::ZERO {
            warn!("skipping degenerate facet with zero Miller index");
            return None;
        }
        let rotation = match facet.frame {
            Frame::Sea => sea_rotation,
            Frame::Island => island_rotation,
        };
        let normal = (*rotation * facet.miller.as_dvec3()).normalize();
        Some(FacetPlane {
            normal,
            offset: facet.offset,
            side: facet.side,
        })
    }

    /// Membership predicate for a point given relative to the island center.
    ///
    /// The signed distance is `d = rel · n̂ - offset`; `Inside` keeps
    /// `d <= 0`, `Outside` keeps `d >= 0`, both within `PLANE_EPSILON`.
    pub fn keeps(&self, rel: DVec3) -> bool {
        let d = rel.dot(self.normal) - self.offset;
        match self.side {
            Side::Inside => d <= PLANE_EPSILON,
            Side::Outside => d >= -PLANE_EPSILON,
        }
    }
}
