use crate::util::daabox::DAABox;
use glam::f64::{DMat3, DVec3};

/// Lazy, restartable sequence of all lattice sites in the supercell.
///
/// Sites are enumerated row-major over (i, j, k) with k fastest, each mapped
/// to cartesian space as `R * (i, j, k) * lattice_constant`. The sequence is
/// a pure function of its inputs: iterating twice, cloning mid-way, or
/// addressing sites through `point_at` all produce bit-identical positions,
/// which the downsampling stride depends on.
#[derive(Debug, Clone)]
pub struct LatticePoints {
    rotation: DMat3,
    lattice_constant: f64,
    supercell: [u32; 3],
    cursor: u64,
}

impl LatticePoints {
    pub fn new(rotation: DMat3, lattice_constant: f64, supercell: [u32; 3]) -> Self {
        LatticePoints {
            rotation,
            lattice_constant,
            supercell,
            cursor: 0,
        }
    }

    /// Exact number of sites (`na * nb * nc`).
    pub fn len(&self) -> u64 {
        let [na, nb, nc] = self.supercell;
        na as u64 * nb as u64 * nc as u64
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Rewinds the sequence to the first site.
    pub fn restart(&mut self) {
        self.cursor = 0;
    }

    /// Cartesian position of the site at a global linear index, independent
    /// of the iteration cursor. `index` must be below `len()`.
    pub fn point_at(&self, index: u64) -> DVec3 {
        let [_, nb, nc] = self.supercell;
        let nb = nb as u64;
        let nc = nc as u64;
        let k = index % nc;
        let j = (index / nc) % nb;
        let i = index / (nc * nb);
        let cell = DVec3::new(i as f64, j as f64, k as f64);
        self.rotation * (cell * self.lattice_constant)
    }

    /// Axis-aligned bounds of the full lattice extent.
    ///
    /// Site coordinates are linear in (i, j, k), so the per-axis extrema are
    /// attained at the eight corner cells; enclosing those is exact without
    /// visiting every site.
    pub fn bounds(&self) -> DAABox {
        let [na, nb, nc] = self.supercell;
        let imax = na.saturating_sub(1) as f64;
        let jmax = nb.saturating_sub(1) as f64;
        let kmax = nc.saturating_sub(1) as f64;

        let mut bounds = DAABox::from_point(self.rotation * DVec3::ZERO);
        for corner in [
            DVec3::new(imax, 0.0, 0.0),
            DVec3::new(0.0, jmax, 0.0),
            DVec3::new(0.0, 0.0, kmax),
            DVec3::new(imax, jmax, 0.0),
            DVec3::new(imax, 0.0, kmax),
            DVec3::new(0.0, jmax, kmax),
            DVec3::new(imax, jmax, kmax),
        ] {
            bounds.enclose_point(self.rotation * (corner * self.lattice_constant));
        }
        bounds
    }
}

impl Iterator for LatticePoints {
    type Item = DVec3;

    fn next(&mut self) -> Option<DVec3> {
        if self.cursor >= self.len() {
            return None;
        }
        let point = self.point_at(self.cursor);
        self.cursor += 1;
        Some(point)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.len() - self.cursor) as usize;
        (remaining, Some(remaining))
    }
}
