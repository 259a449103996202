//! Finite-type recognition of Coxeter diagrams.
//!
//! A Coxeter group is finite iff every connected component of its diagram is
//! one of `A_n`, `B_n`, `D_n`, `E_6`, `E_7`, `E_8`, `F_4`, `H_3`, `H_4`, or
//! `I_2(m)`. Small components are matched against their labels directly.
//! Larger components can only be `A_n`, `B_n`, `D_n`, or `E_n`, which are
//! recognized from the eccentricities of their vertices.

use itertools::Itertools;

use crate::graph::AdjacencyGraph;
use crate::CoxeterMatrix;

/// Returns whether the Coxeter group with Coxeter matrix `m` is finite.
pub fn is_finite(m: &CoxeterMatrix) -> bool {
    let graph = AdjacencyGraph::new(m);
    graph.connected_components().into_iter().all(|component| {
        let finite = is_finite_component(m, &graph, &component);
        log::trace!("component {component:?} is {}", if finite { "finite" } else { "infinite" });
        finite
    })
}

/// Returns whether a connected component of the diagram has finite type.
fn is_finite_component(m: &CoxeterMatrix, graph: &AdjacencyGraph, component: &[usize]) -> bool {
    let label = |a: usize, b: usize| m.get(component[a], component[b]).as_int();

    match component.len() {
        0 | 1 => true,

        // I_2(m)
        2 => label(0, 1) > 0,

        // A_3, B_3, H_3
        3 => {
            let s = [label(0, 1), label(0, 2), label(1, 2)];
            let s = sorted(s);
            s[0] == 2 && s[1] == 3 && matches!(s[2], 3..=5)
        }

        // A_4, B_4, D_4, F_4, H_4
        4 => {
            let u = [
                label(0, 1),
                label(0, 2),
                label(0, 3),
                label(1, 2),
                label(1, 3),
                label(2, 3),
            ];
            let s = sorted(u);
            if s[..5] != [2, 2, 2, 3, 3] {
                return false;
            }
            match s[5] {
                3 => true,
                4 | 5 => {
                    // Sum of the labels at each vertex, which tells apart
                    // B_4, F_4, and H_4 from the same labels in other places.
                    let vertex_sums = sorted([
                        u[0] + u[1] + u[2],
                        u[0] + u[3] + u[4],
                        u[1] + u[3] + u[5],
                        u[2] + u[4] + u[5],
                    ]);
                    matches!(vertex_sums, [7, 7, 9, 9] | [7, 8, 8, 9] | [7, 8, 9, 10])
                }
                _ => false,
            }
        }

        l => {
            let subgraph = graph.subgraph(component);
            let entries = (0..l)
                .tuple_combinations()
                .map(|(a, b)| label(a, b))
                .sorted()
                .collect_vec();
            let largest = entries[entries.len() - 1];
            let second_largest = entries[entries.len() - 2];

            if entries[0] < 0 {
                return false;
            }

            if largest > 3 {
                // Only B_n remains: a path with a 4 at one end.
                if second_largest > 3 || largest > 4 {
                    return false;
                }
                if subgraph.diameter() != l - 1 {
                    return false;
                }
                let ecc = subgraph
                    .eccentricities()
                    .into_iter()
                    .map(|(v, e)| (e, v))
                    .sorted()
                    .collect_vec();
                let left_end = ecc[l - 1].1;
                let right_end = ecc[l - 2].1;
                let Some(path) = subgraph.shortest_path(left_end, right_end) else {
                    return false;
                };
                let left_almost_end = path[1];
                let right_almost_end = path[path.len() - 2];
                return m.get(left_end, left_almost_end).as_int() == 4
                    || m.get(right_end, right_almost_end).as_int() == 4;
            }

            // Only labels 2 and 3 remain: A_n, D_n, or E_n.
            if !subgraph.is_tree() {
                return false;
            }
            let ecc = subgraph
                .eccentricities()
                .into_iter()
                .map(|(_, e)| e)
                .sorted()
                .collect_vec();
            let nth_largest = |k: usize| ecc[l - k];
            nth_largest(1) == l - 1
                || nth_largest(3) == l - 2
                || (l <= 8 && nth_largest(2) == l - 2 && nth_largest(5) == l - 3)
        }
    }
}

fn sorted<const N: usize>(mut a: [i64; N]) -> [i64; N] {
    a.sort_unstable();
    a
}
