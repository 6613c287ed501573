use std::cmp::Ordering;

use super::MoveEvaluation;

/// Highest score first. The sort is stable, so equal scores keep encounter order.
#[inline]
pub fn order_by_score(moves: &mut [MoveEvaluation]) {
    moves.sort_by(|a, b| b.score.total_cmp(&a.score));
}

/// Index of the first maximal element, or None for an empty slice.
#[inline]
pub fn first_best(moves: &[MoveEvaluation]) -> Option<usize> {
    let mut best: Option<usize> = None;
    for (i, m) in moves.iter().enumerate() {
        match best {
            Some(b) if moves[b].score.total_cmp(&m.score) != Ordering::Less => {}
            _ => best = Some(i),
        }
    }
    best
}
