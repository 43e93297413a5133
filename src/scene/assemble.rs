//! Scene assembly: the classify-and-downsample pass.
//!
//! `generate_atoms` is the engine's single entry point for the request
//! boundary. It is a pure function of `(config, max_atoms)`: no shared
//! state, no I/O, and bit-reproducible output, so concurrent requests never
//! interfere.

use crate::error::{GeometryError, MAX_LATTICE_POINTS};
use crate::scene::config::SceneConfig;
use crate::scene::downsample::SampleIndices;
use crate::scene::island::IslandRegion;
use crate::scene::lattice::LatticePoints;
use crate::scene::orientation::resolve_orientation;
use crate::util::daabox::DAABox;
use glam::f64::{DMat3, DVec3};
use rayon::prelude::*;
use serde::ser::{Serialize, SerializeStruct, Serializer};

/// Sampled-atom count above which classification is spread across the rayon
/// pool. Output order is restored by global index, so chunk scheduling never
/// shows up in the result.
const PARALLEL_THRESHOLD: u64 = 32_768;

/// Whether an atom belongs to the host lattice or the carved inclusion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AtomKind {
    Sea = 0,
    Island = 1,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Atom {
    pub position: DVec3,
    pub kind: AtomKind,
}

// Wire shape for the rendering client: {"x": .., "y": .., "z": .., "type": 0|1}.
impl Serialize for Atom {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Atom", 4)?;
        state.serialize_field("x", &self.position.x)?;
        state.serialize_field("y", &self.position.y)?;
        state.serialize_field("z", &self.position.z)?;
        state.serialize_field("type", &(self.kind as u8))?;
        state.end()
    }
}

/// The generated atom list plus the bounds of the full supercell.
///
/// `bounds` always covers the complete lattice extent, independent of
/// downsampling and island membership, so the viewer can frame the scene.
#[derive(Debug, Clone, PartialEq)]
pub struct AtomScene {
    pub atoms: Vec<Atom>,
    pub bounds: DAABox,
}

impl AtomScene {
    /// Fraction of atoms tagged as island.
    pub fn island_ratio(&self) -> f64 {
        if self.atoms.is_empty() {
            return 0.0;
        }
        let islands = self
            .atoms
            .iter()
            .filter(|atom| atom.kind == AtomKind::Island)
            .count();
        islands as f64 / self.atoms.len() as f64
    }
}

// Wire shape: {"atoms": [..], "box": {"x": [min, max], "y": [..], "z": [..]}}.
impl Serialize for AtomScene {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        struct BoxBounds<'a>(&'a DAABox);

        impl Serialize for BoxBounds<'_> {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                let mut state = serializer.serialize_struct("Box", 3)?;
                state.serialize_field("x", &[self.0.min.x, self.0.max.x])?;
                state.serialize_field("y", &[self.0.min.y, self.0.max.y])?;
                state.serialize_field("z", &[self.0.min.z, self.0.max.z])?;
                state.end()
            }
        }

        let mut state = serializer.serialize_struct("AtomScene", 2)?;
        state.serialize_field("atoms", &self.atoms)?;
        state.serialize_field("box", &BoxBounds(&self.bounds))?;
        state.end()
    }
}

/// Resolves the island center for this request: the configured center, or
/// the supercell centroid `R * (na, nb, nc) * a / 2` when the config carries
/// the auto-center sentinel. Never written back to the config.
fn resolve_center(config: &SceneConfig, rotation: &DMat3) -> DVec3 {
    match config.island.configured_center() {
        Some(center) => center,
        None => {
            let [na, nb, nc] = config.sea.supercell;
            let cell = DVec3::new(na as f64, nb as f64, nc as f64);
            *rotation * (cell * (0.5 * config.sea.lattice_constant))
        }
    }
}

/// Generates the downsampled atom list and bounding box for a config.
///
/// Steps: validate, resolve the orientation, enforce the generation ceiling,
/// then run a single fused pass that stride-samples global lattice indices
/// and classifies only the sampled sites. Nothing beyond the output buffer
/// is materialized, so very large supercells stay bounded in memory.
pub fn generate_atoms(config: &SceneConfig, max_atoms: u64) -> Result<AtomScene, GeometryError> {
    config.validate()?;

    let sea_rotation = resolve_orientation(config.sea.a_dir, config.sea.b_dir, config.sea.c_dir)?;
    // The island frame currently shares the sea orientation; `Frame::Island`
    // facets dispatch through a separate matrix so a future island basis only
    // needs config plumbing.
    let island_rotation = sea_rotation;

    let total = config.sea.lattice_point_count();
    if total > MAX_LATTICE_POINTS {
        return Err(GeometryError::ResourceLimitExceeded {
            points: total,
            limit: MAX_LATTICE_POINTS,
        });
    }

    let lattice = LatticePoints::new(sea_rotation, config.sea.lattice_constant, config.sea.supercell);
    let bounds = lattice.bounds();
    let samples = SampleIndices::new(total, max_atoms);

    let atoms = if !config.island.enabled {
        // Everything is sea; skip classification entirely.
        samples
            .map(|index| Atom {
                position: lattice.point_at(index),
                kind: AtomKind::Sea,
            })
            .collect()
    } else {
        let center = resolve_center(config, &sea_rotation);
        let region = IslandRegion::resolve(&config.island, center, &sea_rotation, &island_rotation);
        classify_samples(&lattice, &region, &samples)
    };

    Ok(AtomScene { atoms, bounds })
}

fn classify_samples(
    lattice: &LatticePoints,
    region: &IslandRegion,
    samples: &SampleIndices,
) -> Vec<Atom> {
    let classify = |index: u64| {
        let position = lattice.point_at(index);
        let kind = if region.contains(position) {
            AtomKind::Island
        } else {
            AtomKind::Sea
        };
        Atom { position, kind }
    };

    let kept = samples.len();
    if kept >= PARALLEL_THRESHOLD {
        // Indexed parallel collect reassembles in global sample order; kept
        // is bounded by the generation ceiling so the usize cast is exact.
        (0..kept as usize)
            .into_par_iter()
            .map(|k| classify(samples.index_at(k as u64)))
            .collect()
    } else {
        samples.clone().map(classify).collect()
    }
}
