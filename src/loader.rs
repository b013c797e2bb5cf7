//! Vertex-list and edge-list loading
//!
//! Both files are line oriented. Empty lines and lines starting with `#` are
//! skipped. Names are form-URL-encoded (`+` for space, `%XX` escapes, UTF-8).
//! Edge lines hold two names separated by a single TAB.

use crate::error::{FinderError, FinderResult};
use crate::registry::NameRegistry;
use pathfinder_graph::AdjacencyGraph;
use percent_encoding::percent_decode_str;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use tracing::debug;

/// Decode one form-URL-encoded name.
///
/// Rejects `%` not followed by two hex digits, and escapes that do not
/// decode to valid UTF-8.
pub fn decode_name(raw: &str) -> Result<String, String> {
    let bytes = raw.as_bytes();
    let mut pos = 0;
    while let Some(offset) = bytes[pos..].iter().position(|&b| b == b'%') {
        let at = pos + offset;
        let escape_ok = bytes
            .get(at + 1..at + 3)
            .map_or(false, |hex| hex.iter().all(u8::is_ascii_hexdigit));
        if !escape_ok {
            return Err(format!("incomplete escape sequence at byte {}", at));
        }
        pos = at + 3;
    }

    let spaced = raw.replace('+', " ");
    percent_decode_str(&spaced)
        .decode_utf8()
        .map(|name| name.into_owned())
        .map_err(|e| format!("escaped bytes are not valid UTF-8: {}", e))
}

/// Open an input file, separating "missing" from other I/O failures
pub fn open(path: &Path) -> FinderResult<BufReader<File>> {
    File::open(path).map(BufReader::new).map_err(|e| {
        if e.kind() == io::ErrorKind::NotFound {
            FinderError::FileNotFound(path.to_path_buf())
        } else {
            FinderError::Io {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })
}

/// Register every name in a vertex list. Returns the number registered.
pub fn parse_vertices<R: BufRead>(
    reader: R,
    origin: &Path,
    graph: &mut AdjacencyGraph,
    registry: &mut NameRegistry,
) -> FinderResult<usize> {
    let mut count = 0;
    for_each_record(reader, origin, |line_no, line| {
        let name = decode_name(line).map_err(|reason| malformed(origin, line_no, reason))?;
        registry.register(graph, name)?;
        count += 1;
        Ok(())
    })?;

    debug!("Read {} vertices from {:?}", count, origin);
    Ok(count)
}

/// Add every edge in an edge list. All names must already be registered.
/// Returns the number of edges added.
pub fn parse_edges<R: BufRead>(
    reader: R,
    origin: &Path,
    graph: &mut AdjacencyGraph,
    registry: &NameRegistry,
) -> FinderResult<usize> {
    let mut count = 0;
    for_each_record(reader, origin, |line_no, line| {
        let fields: Vec<&str> = line.split('\t').collect();
        if fields.len() != 2 {
            return Err(malformed(
                origin,
                line_no,
                format!("expected 2 tab-separated names, found {}", fields.len()),
            ));
        }

        let mut ends = [0; 2];
        for (slot, field) in ends.iter_mut().zip(&fields) {
            let name = decode_name(field).map_err(|reason| malformed(origin, line_no, reason))?;
            *slot = registry.vertex_of(&name)?;
        }

        graph.add_edge(ends[0], ends[1])?;
        count += 1;
        Ok(())
    })?;

    debug!("Read {} edges from {:?}", count, origin);
    Ok(count)
}

/// Load both files into a fresh graph and registry.
///
/// Both files are opened before either is parsed, so a missing edge file is
/// reported even when the vertex file is also malformed.
pub fn load_files(
    vertex_path: &Path,
    edge_path: &Path,
    graph: &mut AdjacencyGraph,
    registry: &mut NameRegistry,
) -> FinderResult<(usize, usize)> {
    let vertices = open(vertex_path)?;
    let edges = open(edge_path)?;

    let vertex_count = parse_vertices(vertices, vertex_path, graph, registry)?;
    let edge_count = parse_edges(edges, edge_path, graph, registry)?;
    Ok((vertex_count, edge_count))
}

/// Call `f` with (1-based line number, line) for every non-blank, non-comment line
fn for_each_record<R, F>(reader: R, origin: &Path, mut f: F) -> FinderResult<()>
where
    R: BufRead,
    F: FnMut(usize, &str) -> FinderResult<()>,
{
    for (idx, line) in reader.lines().enumerate() {
        let line_no = idx + 1;
        let line = line.map_err(|e| {
            if e.kind() == io::ErrorKind::InvalidData {
                malformed(origin, line_no, "line is not valid UTF-8".to_string())
            } else {
                FinderError::Io {
                    path: origin.to_path_buf(),
                    source: e,
                }
            }
        })?;

        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        f(line_no, &line)?;
    }
    Ok(())
}

fn malformed(origin: &Path, line: usize, reason: String) -> FinderError {
    FinderError::MalformedInput {
        path: origin.to_path_buf(),
        line,
        reason,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn origin() -> &'static Path {
        Path::new("test-input")
    }

    #[test]
    fn test_decode_name() {
        assert_eq!(decode_name("Plain").unwrap(), "Plain");
        assert_eq!(decode_name("New+York").unwrap(), "New York");
        assert_eq!(decode_name("C%2B%2B").unwrap(), "C++");
        assert_eq!(decode_name("%C3%89cole").unwrap(), "École");
        assert_eq!(decode_name("100%25").unwrap(), "100%");
        assert_eq!(decode_name("").unwrap(), "");
    }

    #[test]
    fn test_decode_name_rejects_bad_escapes() {
        assert!(decode_name("50%").is_err());
        assert!(decode_name("%4").is_err());
        assert!(decode_name("%zz").is_err());
        assert!(decode_name("%C3").is_err());
        assert!(decode_name("%FF").is_err());
    }

    #[test]
    fn test_parse_vertices_skips_comments_and_blanks() {
        let input = "# header\nAlpha\n\nBeta+Gamma\n#Delta\n";
        let mut graph = AdjacencyGraph::new();
        let mut registry = NameRegistry::new();

        let count =
            parse_vertices(Cursor::new(input), origin(), &mut graph, &mut registry).unwrap();
        assert_eq!(count, 2);
        assert_eq!(registry.names().collect::<Vec<_>>(), vec!["Alpha", "Beta Gamma"]);
        assert!(!registry.contains("#Delta"));
    }

    #[test]
    fn test_parse_vertices_keeps_whitespace() {
        let input = " Alpha\r\nAlpha \n";
        let mut graph = AdjacencyGraph::new();
        let mut registry = NameRegistry::new();

        parse_vertices(Cursor::new(input), origin(), &mut graph, &mut registry).unwrap();
        assert!(registry.contains(" Alpha"));
        assert!(registry.contains("Alpha "));
    }

    #[test]
    fn test_parse_vertices_duplicate() {
        let mut graph = AdjacencyGraph::new();
        let mut registry = NameRegistry::new();
        let err = parse_vertices(Cursor::new("A\nB\nA\n"), origin(), &mut graph, &mut registry)
            .unwrap_err();
        assert!(matches!(err, FinderError::DuplicateNode(n) if n == "A"));
    }

    #[test]
    fn test_parse_vertices_reports_line() {
        let mut graph = AdjacencyGraph::new();
        let mut registry = NameRegistry::new();
        let input = Cursor::new("# c\nok\nbad%\n");
        let err = parse_vertices(input, origin(), &mut graph, &mut registry).unwrap_err();
        assert!(matches!(err, FinderError::MalformedInput { line: 3, .. }));
    }

    #[test]
    fn test_parse_edges() {
        let mut graph = AdjacencyGraph::new();
        let mut registry = NameRegistry::new();
        parse_vertices(Cursor::new("A\nB\nC+D\n"), origin(), &mut graph, &mut registry).unwrap();

        let edges = "# edges\nA\tB\n\nB\tC%20D\nA\tB\n";
        let count = parse_edges(Cursor::new(edges), origin(), &mut graph, &registry).unwrap();

        assert_eq!(count, 3);
        assert_eq!(graph.neighbors(0).unwrap(), &[1, 1]);
        assert_eq!(graph.neighbors(1).unwrap(), &[2]);
        assert!(graph.neighbors(2).unwrap().is_empty());
    }

    #[test]
    fn test_parse_edges_unknown_node() {
        let mut graph = AdjacencyGraph::new();
        let mut registry = NameRegistry::new();
        parse_vertices(Cursor::new("A\n"), origin(), &mut graph, &mut registry).unwrap();

        let err = parse_edges(Cursor::new("A\tZ\n"), origin(), &mut graph, &registry).unwrap_err();
        assert!(matches!(err, FinderError::UnknownNode(n) if n == "Z"));
    }

    #[test]
    fn test_parse_edges_field_count() {
        let mut graph = AdjacencyGraph::new();
        let mut registry = NameRegistry::new();
        parse_vertices(Cursor::new("A\nB\n"), origin(), &mut graph, &mut registry).unwrap();

        for bad in ["A B\n", "A\tB\tA\n", "A\n"] {
            let err = parse_edges(Cursor::new(bad), origin(), &mut graph, &registry).unwrap_err();
            assert!(matches!(err, FinderError::MalformedInput { line: 1, .. }), "{:?}", bad);
        }
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn test_open_missing_file() {
        let err = open(Path::new("/definitely/not/here.txt")).unwrap_err();
        assert!(matches!(err, FinderError::FileNotFound(_)));
    }
}
