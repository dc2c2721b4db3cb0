use bit_set::BitSet;

/** Vertex Id (0-based, the DIMACS files are 1-based) */
pub type VertexId = usize;

/** Clique: ordered list of vertices, pairwise adjacent in the instance. */
pub type Clique = Vec<VertexId>;

/** models a graph the clique solvers work on. Instances are read-only once built, so they can be
shared between the search workers. */
pub trait CliqueInstance: Send + Sync {
    /// number of vertices
    fn nb_vertices(&self) -> usize;

    /// number of (distinct, undirected) edges
    fn nb_edges(&self) -> usize;

    /// bitset of the vertices adjacent to u
    fn neighbors(&self, u:VertexId) -> &BitSet;

    /// number of neighbors of u
    fn degree(&self, u:VertexId) -> usize;

    /// true iff u and v are adjacent. O(1)
    fn are_adjacent(&self, u:VertexId, v:VertexId) -> bool {
        self.neighbors(u).contains(v)
    }

    /// iterates over the vertices
    fn vertices(&self) -> std::ops::Range<VertexId> { 0..self.nb_vertices() }

    /// prints some statistics about the instance
    fn display_statistics(&self) {
        let n = self.nb_vertices();
        println!("\t{} \t vertices", n);
        println!("\t{} \t edges", self.nb_edges());
        if n > 0 {
            let degrees:Vec<usize> = self.vertices().map(|i| self.degree(i)).collect();
            println!("\t{} \t min degree", degrees.iter().min().unwrap_or(&0));
            println!("\t{} \t max degree", degrees.iter().max().unwrap_or(&0));
        }
        if n > 1 {
            let density = 2. * self.nb_edges() as f64 / (n as f64 * (n-1) as f64);
            println!("\t{:.3} \t density", density);
        }
    }
}


/** result of the clique checker */
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckerResult {
    /// valid clique (contains its size)
    Ok(usize),
    /// vertex id outside [0, n)
    UnknownVertex(VertexId),
    /// vertex present more than once
    DuplicateVertex(VertexId),
    /// these two vertices of the clique are not adjacent
    MissingEdge(VertexId, VertexId),
}

impl CheckerResult {
    /// true iff the checked set is a clique
    pub fn is_ok(&self) -> bool { matches!(self, CheckerResult::Ok(_)) }
}

/**
checks that a vertex list is a clique of the instance:
 1. every vertex exists and appears at most once
 2. every pair of distinct vertices is adjacent

returns the first defect found, or the clique size. Does not depend on how the clique was built.
*/
pub fn checker(inst:&dyn CliqueInstance, sol:&[VertexId]) -> CheckerResult {
    let mut visited = BitSet::with_capacity(inst.nb_vertices());
    for v in sol {
        if *v >= inst.nb_vertices() {
            return CheckerResult::UnknownVertex(*v);
        }
        if !visited.insert(*v) {
            return CheckerResult::DuplicateVertex(*v);
        }
    }
    for (i,u) in sol.iter().enumerate() {
        for v in &sol[i+1..] {
            if !inst.are_adjacent(*u, *v) {
                return CheckerResult::MissingEdge(*u, *v);
            }
        }
    }
    CheckerResult::Ok(sol.len())
}


#[cfg(test)]
mod tests {
    use super::*;

    use crate::dimacs::DimacsInstance;

    fn square_with_diagonal() -> DimacsInstance {
        DimacsInstance::from_edges(4, &[(0,1), (1,2), (2,3), (0,2)]).unwrap()
    }

    #[test]
    fn test_checker_accepts_triangle() {
        let inst = square_with_diagonal();
        assert_eq!(checker(&inst, &[0,1,2]), CheckerResult::Ok(3));
        assert_eq!(checker(&inst, &[2,3]), CheckerResult::Ok(2));
    }

    #[test]
    fn test_checker_trivial_sets() {
        let inst = square_with_diagonal();
        assert_eq!(checker(&inst, &[]), CheckerResult::Ok(0));
        assert_eq!(checker(&inst, &[3]), CheckerResult::Ok(1));
    }

    #[test]
    fn test_checker_duplicate_before_missing_edge() {
        let inst = square_with_diagonal();
        // 1 and 3 are not adjacent, but the duplicate is reported first
        assert_eq!(checker(&inst, &[1,3,1]), CheckerResult::DuplicateVertex(1));
    }

    #[test]
    fn test_checker_missing_edge() {
        let inst = square_with_diagonal();
        assert_eq!(checker(&inst, &[0,1,3]), CheckerResult::MissingEdge(0,3));
        assert!(!checker(&inst, &[1,3]).is_ok());
    }

    #[test]
    fn test_checker_unknown_vertex() {
        let inst = square_with_diagonal();
        assert_eq!(checker(&inst, &[0,4]), CheckerResult::UnknownVertex(4));
    }
}
