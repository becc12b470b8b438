/// Index vector over the product of several sequences.
///
/// The last position turns fastest and carries into the one before it when
/// it wraps, like the digit wheels of a mechanical odometer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Odometer {
    indices: Vec<usize>,
    sizes: Vec<usize>,
}

impl Odometer {
    /// Creates an odometer at all zeros.
    ///
    /// Returns `None` if there are no wheels or any wheel has size zero,
    /// since such a product has no elements.
    pub(crate) fn new(sizes: Vec<usize>) -> Option<Self> {
        if sizes.is_empty() || sizes.contains(&0) {
            return None;
        }

        Some(Self {
            indices: vec![0; sizes.len()],
            sizes,
        })
    }

    /// Returns the current index into each sequence.
    pub(crate) fn indices(&self) -> &[usize] {
        &self.indices
    }

    /// Advances to the next index tuple.
    ///
    /// Returns `false` once every wheel has wrapped, leaving all indices at zero.
    pub(crate) fn advance(&mut self) -> bool {
        for (index, &size) in self.indices.iter_mut().zip(&self.sizes).rev() {
            *index += 1;
            if *index < size {
                return true;
            }
            *index = 0;
        }
        false
    }

    /// Returns the number of index tuples, saturating at `usize::MAX`.
    pub(crate) fn total(&self) -> usize {
        self.sizes
            .iter()
            .try_fold(1_usize, |acc, &size| acc.checked_mul(size))
            .unwrap_or(usize::MAX)
    }
}
