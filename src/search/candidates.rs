use crate::clique::VertexId;
use crate::random::RandomSource;

/** vertices still eligible to extend the clique under construction.

Stored as a buffer and a logical length: removing a vertex swaps it with the last live one and
shrinks the length. The order of the live vertices is not meaningful. The buffer is kept between
constructions, so resetting it does not reallocate.
*/
#[derive(Debug, Clone, Default)]
pub struct CandidateSet {
    /// vertices[..len] are the live candidates
    vertices: Vec<VertexId>,
    /// nb live candidates
    len: usize,
}

impl CandidateSet {
    /// every vertex of [0,n) becomes a candidate
    pub fn reset(&mut self, n:usize) {
        self.vertices.clear();
        self.vertices.extend(0..n);
        self.len = n;
    }

    /// nb live candidates
    pub fn len(&self) -> usize { self.len }

    /// true iff no candidate remains
    pub fn is_empty(&self) -> bool { self.len == 0 }

    /// live candidates (mutable, to reorder them)
    pub fn as_mut_slice(&mut self) -> &mut [VertexId] { &mut self.vertices[..self.len] }

    /// removes the candidate at position pos (swap with the last live one). O(1)
    pub fn swap_remove(&mut self, pos:usize) -> VertexId {
        debug_assert!(pos < self.len);
        self.len -= 1;
        self.vertices.swap(pos, self.len);
        self.vertices[self.len]
    }

    /// keeps only the candidates for which keep returns true
    pub fn retain<F>(&mut self, mut keep:F) where F: FnMut(VertexId) -> bool {
        let mut pos = 0;
        while pos < self.len {
            if keep(self.vertices[pos]) {
                pos += 1;
            } else {
                self.swap_remove(pos); // the swapped-in vertex is examined next
            }
        }
    }

    /// shuffles the live candidates
    pub fn shuffle(&mut self, rng:&mut RandomSource) {
        rng.shuffle(self.as_mut_slice());
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    fn live(s:&CandidateSet) -> &[VertexId] { &s.vertices[..s.len] }

    fn sorted(s:&CandidateSet) -> Vec<VertexId> {
        let mut res = live(s).to_vec();
        res.sort_unstable();
        res
    }

    #[test]
    fn test_reset() {
        let mut s = CandidateSet::default();
        assert!(s.is_empty());
        s.reset(5);
        assert_eq!(live(&s), &[0,1,2,3,4]);
        s.swap_remove(0);
        s.reset(3);
        assert_eq!(live(&s), &[0,1,2]);
    }

    #[test]
    fn test_swap_remove() {
        let mut s = CandidateSet::default();
        s.reset(4);
        assert_eq!(s.swap_remove(1), 1);
        assert_eq!(live(&s), &[0,3,2]);
        assert_eq!(s.swap_remove(2), 2);
        assert_eq!(s.len(), 2);
        assert_eq!(live(&s)[1], 3);
    }

    #[test]
    fn test_retain() {
        let mut s = CandidateSet::default();
        s.reset(10);
        s.retain(|v| v % 3 == 0);
        assert_eq!(sorted(&s), vec![0,3,6,9]);
        s.retain(|_| false);
        assert!(s.is_empty());
    }

    #[test]
    fn test_retain_consecutive_removals() {
        let mut s = CandidateSet::default();
        s.reset(6);
        // the last elements are removed too: each swapped-in vertex is examined
        s.retain(|v| v == 2);
        assert_eq!(live(&s), &[2]);
    }

    #[test]
    fn test_shuffle_keeps_live_candidates() {
        let mut rng = RandomSource::from_seed(3);
        let mut s = CandidateSet::default();
        s.reset(20);
        s.retain(|v| v < 12);
        s.shuffle(&mut rng);
        assert_eq!(sorted(&s), (0..12).collect::<Vec<VertexId>>());
    }
}
