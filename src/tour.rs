//! Tour construction: nearest-neighbor seeding refined by 2-opt.
//!
//! Tours are open paths over indices into a distance matrix. There is no
//! depot and no return leg.

use crate::solver::SolveOptions;

/// Total length of an open path.
pub fn path_cost(tour: &[usize], matrix: &[Vec<f64>]) -> f64 {
    tour.windows(2).map(|leg| matrix[leg[0]][leg[1]]).sum()
}

/// Greedy tour starting at `nodes[start]`, always extending to the closest
/// remaining node. Ties go to the node listed first.
pub fn nearest_neighbor(nodes: &[usize], start: usize, matrix: &[Vec<f64>]) -> Vec<usize> {
    if nodes.is_empty() {
        return Vec::new();
    }

    let mut remaining = nodes.to_vec();
    let mut current = remaining.remove(start.min(nodes.len() - 1));
    let mut tour = Vec::with_capacity(nodes.len());
    tour.push(current);

    while !remaining.is_empty() {
        let closest = remaining
            .iter()
            .enumerate()
            .min_by(|(_, a), (_, b)| matrix[current][**a].total_cmp(&matrix[current][**b]))
            .map(|(position, _)| position)
            .unwrap_or(0);
        current = remaining.remove(closest);
        tour.push(current);
    }

    tour
}

/// 2-opt: reverse segments while that shortens the path by more than the
/// configured epsilon. Segments touching an anchored node are never reversed.
///
/// Returns the number of accepted moves.
pub fn two_opt<F>(tour: &mut [usize], matrix: &[Vec<f64>], options: &SolveOptions, is_anchor: F) -> usize
where
    F: Fn(usize) -> bool,
{
    let n = tour.len();
    if n < 2 {
        return 0;
    }

    let mut current_cost = path_cost(tour, matrix);
    let mut moves = 0;

    for _ in 0..options.max_two_opt_passes {
        let mut improved = false;

        for i in 0..n - 1 {
            if is_anchor(tour[i]) {
                continue;
            }
            for k in i + 1..n {
                if is_anchor(tour[k]) {
                    // every longer segment from i contains this anchor too
                    break;
                }

                let mut candidate = tour.to_vec();
                candidate[i..=k].reverse();
                let cost = path_cost(&candidate, matrix);

                if cost < current_cost - options.improvement_epsilon_km {
                    tracing::trace!(i, k, before = current_cost, after = cost, "2-opt move accepted");
                    tour[i..=k].reverse();
                    current_cost = cost;
                    moves += 1;
                    improved = true;
                }
            }
        }

        if !improved {
            break;
        }
    }

    moves
}

/// Build a locally optimal visiting order over `nodes`.
///
/// Candidates are the given order itself and nearest-neighbor tours (from the
/// first node, or from every node with `multi_start`). Each is refined with
/// 2-opt and the cheapest wins, earliest candidate on ties. Because the input
/// order is a candidate, the result is never longer than the input.
pub fn construct_tour(nodes: &[usize], matrix: &[Vec<f64>], options: &SolveOptions) -> Vec<usize> {
    if nodes.len() <= 1 {
        return nodes.to_vec();
    }

    let starts = if options.multi_start { nodes.len() } else { 1 };
    let mut candidates = Vec::with_capacity(starts + 1);
    candidates.push(nodes.to_vec());
    for start in 0..starts {
        candidates.push(nearest_neighbor(nodes, start, matrix));
    }

    let mut best: Option<(Vec<usize>, f64)> = None;
    for mut candidate in candidates {
        two_opt(&mut candidate, matrix, options, |_| false);
        let cost = path_cost(&candidate, matrix);
        let better = match &best {
            Some((_, best_cost)) => cost < *best_cost,
            None => true,
        };
        if better {
            best = Some((candidate, cost));
        }
    }

    best.map(|(tour, _)| tour).unwrap_or_else(|| nodes.to_vec())
}
