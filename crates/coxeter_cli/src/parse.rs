//! Parsing of command-line group descriptions.

use coxeter::{CoxeterDiagram, CoxeterMatrix, EdgeLabel, IndexLabel};
use eyre::{Context, Result, eyre};

/// Parses a Coxeter matrix written as rows separated by `;` with entries
/// separated by `,` or whitespace, such as `1,3;3,1`.
pub(crate) fn parse_coxeter_matrix(s: &str) -> Result<CoxeterMatrix> {
    let rows: Vec<Vec<i64>> = s
        .split(';')
        .map(|row| {
            row.split(|c: char| c == ',' || c.is_whitespace())
                .filter(|entry| !entry.is_empty())
                .map(|entry| {
                    entry
                        .parse()
                        .wrap_err_with(|| format!("invalid Coxeter matrix entry {entry:?}"))
                })
                .collect::<Result<Vec<i64>>>()
        })
        .collect::<Result<_>>()?;
    Ok(CoxeterMatrix::from_ints(&rows)?)
}

/// Parses a Coxeter diagram written as comma-separated edges `a-b` or
/// `a-b:label` and isolated vertices `a`, such as `1-2,2-3:4,4`.
pub(crate) fn parse_coxeter_diagram(s: &str) -> Result<CoxeterDiagram> {
    let mut diagram = CoxeterDiagram::new();
    for item in s.split(',').map(str::trim).filter(|item| !item.is_empty()) {
        let (endpoints, label) = match item.split_once(':') {
            Some((endpoints, label)) => (endpoints, label.parse::<EdgeLabel>()?),
            None => (item, EdgeLabel::Default),
        };
        match endpoints.split_once('-') {
            Some((a, b)) if !a.trim().is_empty() => {
                diagram.add_edge(parse_index_label(a), parse_index_label(b), label)?;
            }
            _ if item.contains(':') => return Err(eyre!("edge label without edge in {item:?}")),
            _ => diagram.add_vertex(parse_index_label(endpoints))?,
        }
    }
    Ok(diagram)
}

/// Parses an index label, which is an integer if possible and a string
/// otherwise.
pub(crate) fn parse_index_label(s: &str) -> IndexLabel {
    match s.parse() {
        Ok(label) => label,
        Err(never) => match never {},
    }
}
