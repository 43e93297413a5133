/// Deterministic, evenly spaced index sampling over the lattice generation
/// order.
///
/// When the atom count fits the bound the sample is the identity; otherwise
/// the k-th kept atom has global index `floor(k * total / kept)`, which for
/// `kept <= total` yields exactly `kept` strictly increasing indices spread
/// uniformly across the sequence. Sampling by global index keeps the result
/// stable across calls and across whatever chunking the classification pass
/// uses, and even spacing keeps the sea/island proportion of the sample close
/// to the full set's.
#[derive(Debug, Clone)]
pub struct SampleIndices {
    total: u64,
    kept: u64,
    cursor: u64,
}

impl SampleIndices {
    pub fn new(total: u64, max_atoms: u64) -> Self {
        SampleIndices {
            total,
            kept: total.min(max_atoms),
            cursor: 0,
        }
    }

    /// Number of indices the sample will produce.
    pub fn len(&self) -> u64 {
        self.kept
    }

    pub fn is_empty(&self) -> bool {
        self.kept == 0
    }

    /// Global index of the k-th sampled atom, independent of the cursor.
    /// `k` must be below `len()`. Does not overflow for any supercell under
    /// the generation ceiling.
    pub fn index_at(&self, k: u64) -> u64 {
        k * self.total / self.kept
    }
}

impl Iterator for SampleIndices {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        if self.cursor >= self.kept {
            return None;
        }
        let index = self.index_at(self.cursor);
        self.cursor += 1;
        Some(index)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.kept - self.cursor) as usize;
        (remaining, Some(remaining))
    }
}
