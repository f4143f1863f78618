use std::cmp::Ordering;

/// A sparse term-weight vector, entries sorted by term id.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SparseVector {
    entries: Vec<(usize, f64)>,
    norm: f64,
}

impl SparseVector {
    /// Build from `(term id, weight)` pairs. Ids must be unique.
    pub fn from_entries(mut entries: Vec<(usize, f64)>) -> Self {
        entries.retain(|(_, w)| *w != 0.0);
        entries.sort_unstable_by_key(|(id, _)| *id);
        let norm = entries.iter().map(|(_, w)| w * w).sum::<f64>().sqrt();
        Self { entries, norm }
    }

    pub const fn norm(&self) -> f64 {
        self.norm
    }

    pub fn is_zero(&self) -> bool {
        self.norm < f64::EPSILON
    }

    #[cfg(test)]
    pub fn weight(&self, term: usize) -> f64 {
        self.entries
            .binary_search_by_key(&term, |(id, _)| *id)
            .map_or(0.0, |pos| self.entries[pos].1)
    }

    pub fn dot(&self, other: &Self) -> f64 {
        let (mut i, mut j) = (0, 0);
        let mut dot = 0.0_f64;
        while i < self.entries.len() && j < other.entries.len() {
            let (a_id, a_w) = self.entries[i];
            let (b_id, b_w) = other.entries[j];
            match a_id.cmp(&b_id) {
                Ordering::Less => i += 1,
                Ordering::Greater => j += 1,
                Ordering::Equal => {
                    dot += a_w * b_w;
                    i += 1;
                    j += 1;
                }
            }
        }
        dot
    }
}

/// Compute cosine similarity between two sparse vectors.
///
/// Returns 0.0 if either vector has zero magnitude. The result is clamped to
/// `[0, 1]`; weights are never negative so only rounding can push it out.
pub fn cosine_similarity(a: &SparseVector, b: &SparseVector) -> f64 {
    if a.is_zero() || b.is_zero() {
        return 0.0;
    }

    (a.dot(b) / (a.norm() * b.norm())).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_vectors_similarity_one() {
        let v = SparseVector::from_entries(vec![(0, 1.0), (2, 2.0), (5, 3.0)]);
        let sim = cosine_similarity(&v, &v);
        assert!((sim - 1.0).abs() < 1e-9);
    }

    #[test]
    fn orthogonal_vectors_similarity_zero() {
        let a = SparseVector::from_entries(vec![(0, 1.0)]);
        let b = SparseVector::from_entries(vec![(1, 1.0)]);
        assert!(cosine_similarity(&a, &b).abs() < 1e-9);
    }

    #[test]
    fn zero_vector_returns_zero() {
        let a = SparseVector::default();
        let b = SparseVector::from_entries(vec![(1, 1.0)]);
        assert!(a.is_zero());
        assert!(cosine_similarity(&a, &b).abs() < 1e-9);
        assert!(cosine_similarity(&b, &a).abs() < 1e-9);
    }

    #[test]
    fn entries_are_sorted_and_zeros_dropped() {
        let v = SparseVector::from_entries(vec![(4, 2.0), (1, 0.0), (2, 1.0)]);
        assert!((v.weight(4) - 2.0).abs() < 1e-12);
        assert!(v.weight(1).abs() < 1e-12);
        assert!((v.norm() - 5.0_f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn dot_merges_shared_terms() {
        let a = SparseVector::from_entries(vec![(1, 2.0), (3, 1.0)]);
        let b = SparseVector::from_entries(vec![(0, 5.0), (3, 4.0)]);
        assert!((a.dot(&b) - 4.0).abs() < 1e-12);
    }
}
