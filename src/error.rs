use std::fmt;

use thiserror::Error;

use crate::clique::CheckerResult;

/// kind of defect found on a line of a DIMACS file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// an edge line appears before the `p` line, or the `p` line is missing
    MissingHeader,
    /// a second `p` line
    DuplicateHeader,
    /// the `p` line does not read `p <type> <n> <m>`
    MalformedHeader,
    /// the `e` line does not read `e <u> <v>`
    MalformedEdge,
    /// the header declares more vertices than an instance can hold
    TooManyVertices {
        /// declared number of vertices
        n: usize,
        /// largest supported number of vertices
        max: usize,
    },
    /// a 1-based vertex id that is 0 or larger than n
    VertexOutOfRange {
        /// vertex as written in the file (1-based)
        vertex: usize,
        /// number of vertices declared by the header
        n: usize,
    },
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseErrorKind::MissingHeader => write!(f, "missing 'p <type> <n> <m>' line"),
            ParseErrorKind::DuplicateHeader => write!(f, "duplicated 'p' line"),
            ParseErrorKind::MalformedHeader => write!(f, "expected 'p <type> <n> <m>'"),
            ParseErrorKind::MalformedEdge => write!(f, "expected 'e <u> <v>'"),
            ParseErrorKind::TooManyVertices { n, max } => {
                write!(f, "{} vertices declared, at most {} supported", n, max)
            }
            ParseErrorKind::VertexOutOfRange { vertex, n } => {
                write!(f, "vertex {} is out of range [1, {}]", vertex, n)
            }
        }
    }
}

/** error produced while reading a DIMACS document. `line` is 1-based (0 when the defect is
not attached to a line, e.g. a missing header at the end of the file). */
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("line {line}: {kind} (read: {content:?})")]
pub struct ParseError {
    /// line number (1-based)
    pub line: usize,
    /// offending line content
    pub content: String,
    /// what is wrong with it
    pub kind: ParseErrorKind,
}

impl ParseError {
    /// creates a parse error for a given line
    pub fn new(line: usize, content: &str, kind: ParseErrorKind) -> Self {
        Self { line, content: content.to_string(), kind }
    }
}

/// errors of the clique solver and its drivers
#[derive(Debug, Error)]
pub enum CliqueError {
    /// instance file missing or unreadable
    #[error("unable to read instance {path}: {source}")]
    InputNotFound {
        /// file path
        path: String,
        /// underlying error
        source: std::io::Error,
    },
    /// instance file does not follow the DIMACS grammar
    #[error("malformed instance: {0}")]
    Parse(#[from] ParseError),
    /// an edge endpoint is not a vertex of the graph
    #[error("edge ({u},{v}) has an endpoint outside [0,{n})")]
    EdgeOutOfRange {
        /// first endpoint (0-based)
        u: usize,
        /// second endpoint (0-based)
        v: usize,
        /// number of vertices
        n: usize,
    },
    /// the returned vertex set is not a clique
    #[error("invalid clique for {file}: {reason:?}")]
    InvalidClique {
        /// instance the clique was computed on
        file: String,
        /// checker diagnostic
        reason: CheckerResult,
    },
    /// a search parameter is out of its domain
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
    /// the worker pool could not be created
    #[error("unable to build the worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
    /// a result file could not be written
    #[error("unable to write {path}: {source}")]
    Export {
        /// file path
        path: String,
        /// underlying error
        source: std::io::Error,
    },
}
