//! Scene configuration document.
//!
//! The config is the only persisted state in the system: a `sea` section
//! describing the host lattice and an `island` section describing the carved
//! inclusion. All fields use the tolerant reader pattern: missing fields get
//! defaults and unknown fields are ignored, so older documents keep loading
//! as the schema grows.

use crate::error::ValidationError;
use glam::f64::DVec3;
use glam::i32::IVec3;
use serde::{Deserialize, Serialize};

/// Which orientation basis a facet's Miller index is expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Frame {
    #[default]
    Sea,
    Island,
}

/// Which half-space of a facet plane belongs to the island.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    /// Keep the half-space containing the island center after the offset shift.
    #[default]
    Inside,
    /// Keep the complementary half-space.
    Outside,
}

/// Configuration for the host crystal (the "sea").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeaConfig {
    /// Lattice constant in Ångströms.
    #[serde(default = "default_lattice_constant")]
    pub lattice_constant: f64,
    /// Supercell extent (na, nb, nc) along the three basis directions.
    #[serde(default = "default_supercell")]
    pub supercell: [u32; 3],
    /// Integer direction the first basis vector is aligned with.
    #[serde(default = "default_a_dir")]
    pub a_dir: IVec3,
    /// Integer direction the second basis vector is aligned with.
    #[serde(default = "default_b_dir")]
    pub b_dir: IVec3,
    /// Integer direction for the third basis vector. Re-derived as `a × b`
    /// during orientation resolution so the frame stays right-handed.
    #[serde(default = "default_c_dir")]
    pub c_dir: IVec3,
}

fn default_lattice_constant() -> f64 {
    // Silicon
    5.43
}

fn default_supercell() -> [u32; 3] {
    [6, 6, 6]
}

fn default_a_dir() -> IVec3 {
    IVec3::new(1, 0, 0)
}

fn default_b_dir() -> IVec3 {
    IVec3::new(0, 1, 0)
}

fn default_c_dir() -> IVec3 {
    IVec3::new(0, 0, 1)
}

impl Default for SeaConfig {
    fn default() -> Self {
        SeaConfig {
            lattice_constant: default_lattice_constant(),
            supercell: default_supercell(),
            a_dir: default_a_dir(),
            b_dir: default_b_dir(),
            c_dir: default_c_dir(),
        }
    }
}

impl SeaConfig {
    /// Total number of lattice points in the supercell.
    pub fn lattice_point_count(&self) -> u64 {
        let [na, nb, nc] = self.supercell;
        na as u64 * nb as u64 * nc as u64
    }
}

/// A single plane facet used to bound the island.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FacetConfig {
    /// Frame the Miller index is expressed in.
    #[serde(default)]
    pub frame: Frame,
    /// Miller indices (h, k, l). A zero vector marks the facet degenerate
    /// and it is skipped during plane resolution.
    #[serde(default = "default_miller")]
    pub miller: IVec3,
    /// Signed distance of the plane from the island center along its normal (Å).
    #[serde(default = "default_facet_offset")]
    pub offset: f64,
    /// Which side of the plane is kept.
    #[serde(default)]
    pub side: Side,
}

fn default_miller() -> IVec3 {
    IVec3::new(1, 1, 1)
}

fn default_facet_offset() -> f64 {
    8.0
}

impl Default for FacetConfig {
    fn default() -> Self {
        FacetConfig {
            frame: Frame::default(),
            miller: default_miller(),
            offset: default_facet_offset(),
            side: Side::default(),
        }
    }
}

/// Configuration for the embedded island.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IslandConfig {
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    /// Island center in Ångströms, sea frame. The exact zero vector is a
    /// sentinel meaning "auto-center at the supercell centroid"; it is
    /// resolved per generation request and never written back.
    #[serde(default)]
    pub center: DVec3,
    /// Fallback sphere radius (Å), used when no usable facets are defined.
    #[serde(default = "default_radius")]
    pub radius: f64,
    #[serde(default)]
    pub facets: Vec<FacetConfig>,
}

fn default_enabled() -> bool {
    true
}

fn default_radius() -> f64 {
    8.0
}

impl Default for IslandConfig {
    fn default() -> Self {
        IslandConfig {
            enabled: default_enabled(),
            center: DVec3::ZERO,
            radius: default_radius(),
            facets: Vec::new(),
        }
    }
}

impl IslandConfig {
    /// The explicitly configured center, or `None` when the config carries
    /// the auto-center sentinel. This is the single place the sentinel is
    /// interpreted; everything downstream works with a resolved center.
    ///
    /// An island deliberately centered at the exact lab-frame origin is
    /// indistinguishable from the sentinel. Such a config auto-centers.
    pub fn configured_center(&self) -> Option<DVec3> {
        if self.center == DVec3::ZERO {
            None
        } else {
            Some(self.center)
        }
    }
}

/// Top level configuration for the scene.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SceneConfig {
    #[serde(default)]
    pub sea: SeaConfig,
    #[serde(default)]
    pub island: IslandConfig,
}

impl SceneConfig {
    /// Checks the config invariants. Malformed frame/side/miller values never
    /// reach this point: the enums make unknown tags unrepresentable, so they
    /// are rejected during deserialization instead.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.sea.lattice_constant.is_finite() || self.sea.lattice_constant <= 0.0 {
            return Err(ValidationError::LatticeConstant(self.sea.lattice_constant));
        }
        let [na, nb, nc] = self.sea.supercell;
        for (axis, n) in [("na", na), ("nb", nb), ("nc", nc)] {
            if n < 1 {
                return Err(ValidationError::SupercellDimension { axis });
            }
        }
        if !self.island.radius.is_finite() || self.island.radius <= 0.0 {
            return Err(ValidationError::IslandRadius(self.island.radius));
        }
        Ok(())
    }
}
