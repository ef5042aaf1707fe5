//! Line classification for the edge-list format

use crate::bail_parse;
use crate::error::{HopgraphError, Result};
use crate::graph::Weight;
use regex::Regex;
use std::sync::OnceLock;

/// `(from,to)` or `(from,to,weight)`, whitespace allowed around tokens
const EDGE_PATTERN: &str =
    r"^\(\s*([^,()\s][^,()]*?)\s*,\s*([^,()\s][^,()]*?)\s*(?:,\s*([+-]?\d+)\s*)?\)$";

static EDGE_RE: OnceLock<Regex> = OnceLock::new();

fn edge_regex() -> Result<&'static Regex> {
    if let Some(re) = EDGE_RE.get() {
        return Ok(re);
    }
    let re = Regex::new(EDGE_PATTERN)
        .map_err(|e| HopgraphError::failed("compile edge pattern", e))?;
    Ok(EDGE_RE.get_or_init(|| re))
}

/// One meaningful line of an edge-list file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line {
    /// Blank line or `#` comment
    Skip,
    /// `G` (undirected) or `D` (directed)
    Mode { undirected: bool },
    /// Comma-separated vertex keys
    Vertices(Vec<String>),
    /// A parenthesized edge; weight is `None` when omitted
    Edge {
        from: String,
        to: String,
        weight: Option<Weight>,
    },
}

/// Classify a single line. `line_no` is 1-based and only used for errors.
pub fn parse_line(line_no: usize, raw: &str) -> Result<Line> {
    let line = raw.trim();

    if line.is_empty() || line.starts_with('#') {
        return Ok(Line::Skip);
    }

    match line {
        "G" | "g" => return Ok(Line::Mode { undirected: true }),
        "D" | "d" => return Ok(Line::Mode { undirected: false }),
        _ => {}
    }

    if line.starts_with('(') {
        return parse_edge(line_no, line);
    }

    parse_vertices(line_no, line)
}

fn parse_edge(line_no: usize, line: &str) -> Result<Line> {
    let Some(caps) = edge_regex()?.captures(line) else {
        bail_parse!(line_no, "malformed edge '{}' (expected (from,to) or (from,to,weight))", line);
    };

    let weight = match caps.get(3) {
        Some(m) => match m.as_str().parse::<Weight>() {
            Ok(w) => Some(w),
            Err(e) => bail_parse!(line_no, "invalid weight '{}': {}", m.as_str(), e),
        },
        None => None,
    };

    Ok(Line::Edge {
        from: caps[1].to_string(),
        to: caps[2].to_string(),
        weight,
    })
}

fn parse_vertices(line_no: usize, line: &str) -> Result<Line> {
    let mut keys = Vec::new();
    for key in line.split(',').map(str::trim).filter(|k| !k.is_empty()) {
        if key.contains(['(', ')']) {
            bail_parse!(line_no, "invalid vertex key '{}'", key);
        }
        keys.push(key.to_string());
    }
    Ok(Line::Vertices(keys))
}
