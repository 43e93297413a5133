//! Crystal Designer geometry engine.
//!
//! Builds an oriented cubic lattice of atom positions from a small
//! parametric description, carves a convex polyhedral inclusion (the
//! "island") out of the host lattice (the "sea") by intersecting facet
//! half-spaces defined by Miller indices, and downsamples the tagged atom
//! set to a bounded count for an interactive client.
//!
//! The request boundary consumes three operations:
//! [`ConfigStore::load`], [`ConfigStore::save`], and [`generate_atoms`].
//! Generation is pure and deterministic; the store is the only shared
//! resource and serializes its writes internally.

pub mod error;
pub mod scene;
pub mod store;
pub mod util;

pub use crate::error::{GeometryError, ValidationError, MAX_LATTICE_POINTS};
pub use crate::scene::assemble::{generate_atoms, Atom, AtomKind, AtomScene};
pub use crate::scene::config::{FacetConfig, Frame, IslandConfig, SceneConfig, SeaConfig, Side};
pub use crate::store::{ConfigStore, StoreError};
