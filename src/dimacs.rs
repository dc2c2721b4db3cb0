use std::fs;

use bit_set::BitSet;
use nom::IResult;
use nom::bytes::complete::take_till1;
use nom::character::complete::{char, digit1, space0, space1};
use nom::combinator::{all_consuming, map_res};
use nom::sequence::{preceded, terminated, tuple};
use tracing::{debug, warn};

use crate::clique::{CliqueInstance, VertexId};
use crate::error::{CliqueError, ParseError, ParseErrorKind};


/// largest number of vertices a DIMACS header may declare
pub const MAX_VERTICES:usize = 1 << 20;

/** models a graph read from a DIMACS file.
Adjacency is stored as one bitset per vertex: O(1) adjacency tests and n²/8 bytes, which is cheap
for the dense benchmark instances (up to a few thousand vertices).
*/
#[derive(Debug, Clone)]
pub struct DimacsInstance {
    /// nb vertices
    n: usize,
    /// nb distinct edges installed
    m: usize,
    /// adj_matrix[i] represents a bitset of the neighbors of i
    adj_matrix: Vec<BitSet>,
    /// degrees[i]: number of neighbors of i
    degrees: Vec<usize>,
}

impl CliqueInstance for DimacsInstance {
    fn nb_vertices(&self) -> usize { self.n }

    fn nb_edges(&self) -> usize { self.m }

    fn neighbors(&self, u:VertexId) -> &BitSet { &self.adj_matrix[u] }

    fn degree(&self, u:VertexId) -> usize { self.degrees[u] }
}


impl DimacsInstance {

    /// graph with n isolated vertices (the bitsets grow with the edges)
    pub fn with_vertices(n:usize) -> Self {
        Self {
            n,
            m: 0,
            adj_matrix: vec![BitSet::new(); n],
            degrees: vec![0; n],
        }
    }

    /** adds the edge {u,v} (0-based). Returns true if the edge was not already there.
    Adding an existing edge has no effect. */
    pub fn add_edge(&mut self, u:VertexId, v:VertexId) -> Result<bool, CliqueError> {
        if u >= self.n || v >= self.n {
            return Err(CliqueError::EdgeOutOfRange { u, v, n: self.n });
        }
        if !self.adj_matrix[u].insert(v) {
            return Ok(false);
        }
        self.degrees[u] += 1;
        if u != v {
            self.adj_matrix[v].insert(u);
            self.degrees[v] += 1;
        }
        self.m += 1;
        Ok(true)
    }

    /** constructor using an edge list (0-based) */
    pub fn from_edges(n:usize, edges:&[(VertexId,VertexId)]) -> Result<Self, CliqueError> {
        let mut res = Self::with_vertices(n);
        for (u,v) in edges {
            res.add_edge(*u, *v)?;
        }
        Ok(res)
    }

    /// creates an instance from a DIMACS file
    pub fn from_file(filename:&str) -> Result<Self, CliqueError> {
        read_from_file(filename)
    }
}


/// reads an instance from file
pub fn read_from_file(filename:&str) -> Result<DimacsInstance, CliqueError> {
    let content = fs::read_to_string(filename).map_err(|source|
        CliqueError::InputNotFound { path: filename.to_string(), source }
    )?;
    Ok(read_from_str(&content)?)
}

/** reads an instance from a DIMACS document.
 - `c ...` lines and blank lines are skipped
 - exactly one `p <type> <n> <m>` line, before any edge
 - `e <u> <v>` lines (WARNING: indices start at 1 in the DIMACS format)
 - other lines are skipped
*/
pub fn read_from_str(s:&str) -> Result<DimacsInstance, ParseError> {
    let mut instance:Option<DimacsInstance> = None;
    let mut declared_m = 0;
    let mut nb_edge_lines = 0;
    for (i, raw_line) in s.lines().enumerate() {
        let line_nb = i+1;
        let line = raw_line.trim_end();
        match line.chars().next() {
            None | Some('c') => {},
            Some('p') => {
                if instance.is_some() {
                    return Err(ParseError::new(line_nb, line, ParseErrorKind::DuplicateHeader));
                }
                let (_,(n,m)) = all_consuming(read_header)(line).map_err(|_|
                    ParseError::new(line_nb, line, ParseErrorKind::MalformedHeader)
                )?;
                if n > MAX_VERTICES {
                    return Err(ParseError::new(
                        line_nb, line, ParseErrorKind::TooManyVertices { n, max: MAX_VERTICES }
                    ));
                }
                declared_m = m;
                instance = Some(DimacsInstance::with_vertices(n));
            },
            Some('e') => {
                let inst = instance.as_mut().ok_or_else(||
                    ParseError::new(line_nb, line, ParseErrorKind::MissingHeader)
                )?;
                let (_,(a,b)) = all_consuming(read_edge)(line).map_err(|_|
                    ParseError::new(line_nb, line, ParseErrorKind::MalformedEdge)
                )?;
                let n = inst.nb_vertices();
                for vertex in [a,b] {
                    if vertex == 0 || vertex > n {
                        return Err(ParseError::new(
                            line_nb, line, ParseErrorKind::VertexOutOfRange { vertex, n }
                        ));
                    }
                }
                // in range: cannot fail
                inst.add_edge(a-1, b-1).map_err(|_|
                    ParseError::new(line_nb, line, ParseErrorKind::MalformedEdge)
                )?;
                nb_edge_lines += 1;
            },
            Some(_) => { debug!("skipping unrecognized line {}: {:?}", line_nb, line); }
        }
    }
    let inst = instance.ok_or_else(|| ParseError::new(0, "", ParseErrorKind::MissingHeader))?;
    if nb_edge_lines != declared_m {
        warn!(
            "header declares {} edges, read {} edge lines ({} distinct edges)",
            declared_m, nb_edge_lines, inst.nb_edges()
        );
    }
    Ok(inst)
}

/// reads an unsigned integer
fn read_integer(s:&str) -> IResult<&str, usize> {
    map_res(digit1, |d:&str| d.parse::<usize>())(s)
}

/// reads the header `p <type> <n> <m>`, returns (n,m). The type token is not checked.
pub fn read_header(s:&str) -> IResult<&str, (usize,usize)> {
    let (remaining, (_, _kind, n, m)) = terminated(tuple((
        char('p'),
        preceded(space1, take_till1(|c:char| c.is_whitespace())),
        preceded(space1, read_integer),
        preceded(space1, read_integer),
    )), space0)(s)?;
    Ok((remaining, (n,m)))
}

/// reads an edge line `e <u> <v>` (1-based ids, as written in the file)
pub fn read_edge(s:&str) -> IResult<&str, (usize,usize)> {
    let (remaining, (_, a, b)) = terminated(tuple((
        char('e'),
        preceded(space1, read_integer),
        preceded(space1, read_integer),
    )), space0)(s)?;
    Ok((remaining, (a,b)))
}


#[cfg(test)]
mod tests {
    use super::*;

    fn neighbor_list(inst:&DimacsInstance, u:VertexId) -> Vec<VertexId> {
        inst.neighbors(u).iter().collect()
    }

    #[test]
    fn test_read_instance() {
        let inst = DimacsInstance::from_file("insts/grid2x2.col").unwrap();
        assert_eq!(inst.nb_vertices(), 4);
        assert_eq!(inst.nb_edges(), 4);
    }

    #[test]
    fn test_missing_file() {
        match DimacsInstance::from_file("insts/does-not-exist.clq") {
            Err(CliqueError::InputNotFound { path, .. }) => assert_eq!(path, "insts/does-not-exist.clq"),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_symmetric_parse() {
        let inst = read_from_str("p edge 4 4\ne 1 2\ne 2 3\ne 3 4\ne 1 3\n").unwrap();
        assert_eq!(neighbor_list(&inst, 0), vec![1,2]);
        assert_eq!(neighbor_list(&inst, 1), vec![0,2]);
        assert_eq!(neighbor_list(&inst, 2), vec![0,1,3]);
        assert_eq!(neighbor_list(&inst, 3), vec![2]);
        assert_eq!(inst.degree(2), 3);
    }

    #[test]
    fn test_comments_and_unknown_lines() {
        let s = "c this is a test comment\nc another one\r\np col 3 1\n\nn 1 5\ne 1 2\r\n";
        let inst = read_from_str(s).unwrap();
        assert_eq!(inst.nb_vertices(), 3);
        assert_eq!(inst.nb_edges(), 1);
        assert!(inst.are_adjacent(1, 0));
    }

    #[test]
    fn test_duplicate_edges_are_harmless() {
        let inst = read_from_str("p edge 3 3\ne 1 2\ne 2 1\ne 1 2\n").unwrap();
        assert_eq!(inst.nb_edges(), 1);
        assert_eq!(inst.degree(0), 1);
        assert_eq!(inst.degree(1), 1);
    }

    #[test]
    fn test_read_header() {
        let s = "p edge 2 1";
        assert_eq!(read_header(s).unwrap().0, "");
        assert_eq!(read_header(s).unwrap().1, (2,1));
        assert_eq!(read_header("p col 200 9876  ").unwrap().1, (200,9876));
        assert!(read_header("p edge two 1").is_err());
    }

    #[test]
    fn test_read_edge() {
        assert_eq!(read_edge("e 1 2").unwrap().1, (1,2));
        assert_eq!(read_edge("e 10   25 ").unwrap(), ("", (10,25)));
        assert!(read_edge("e 1").is_err());
    }

    #[test]
    fn test_edge_before_header() {
        let err = read_from_str("c comment\ne 1 2\np edge 2 1\n").unwrap_err();
        assert_eq!(err.line, 2);
        assert_eq!(err.kind, ParseErrorKind::MissingHeader);
    }

    #[test]
    fn test_no_header() {
        let err = read_from_str("c only comments\n").unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::MissingHeader);
    }

    #[test]
    fn test_duplicate_header() {
        let err = read_from_str("p edge 2 0\np edge 3 0\n").unwrap_err();
        assert_eq!(err.line, 2);
        assert_eq!(err.kind, ParseErrorKind::DuplicateHeader);
    }

    #[test]
    fn test_malformed_lines() {
        let err = read_from_str("p edge 3\n").unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::MalformedHeader);
        let err = read_from_str("p edge 3 1\ne 1 x\n").unwrap_err();
        assert_eq!((err.line, err.kind), (2, ParseErrorKind::MalformedEdge));
        assert_eq!(err.content, "e 1 x");
        let err = read_from_str("p edge 3 1\ne 1 2 3\n").unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::MalformedEdge);
    }

    #[test]
    fn test_vertex_out_of_range() {
        let err = read_from_str("p edge 3 1\ne 1 4\n").unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::VertexOutOfRange { vertex: 4, n: 3 });
        let err = read_from_str("p edge 3 1\ne 0 2\n").unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::VertexOutOfRange { vertex: 0, n: 3 });
    }

    #[test]
    fn test_huge_header() {
        let err = read_from_str("p edge 4000000000 0\n").unwrap_err();
        assert_eq!(err.line, 1);
        assert_eq!(err.kind, ParseErrorKind::TooManyVertices { n: 4_000_000_000, max: MAX_VERTICES });
        // larger than usize: not a number
        let err = read_from_str("p edge 99999999999999999999999 0\n").unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::MalformedHeader);
        assert!(read_from_str(&format!("p edge {} 0\n", MAX_VERTICES)).is_ok());
    }

    #[test]
    fn test_add_edge() {
        let mut inst = DimacsInstance::with_vertices(3);
        assert!(inst.add_edge(0, 2).unwrap());
        assert!(!inst.add_edge(2, 0).unwrap());
        assert!(inst.are_adjacent(2, 0) && inst.are_adjacent(0, 2));
        assert!(!inst.are_adjacent(0, 1));
        assert!(matches!(inst.add_edge(0, 3), Err(CliqueError::EdgeOutOfRange { u: 0, v: 3, n: 3 })));
    }
}
