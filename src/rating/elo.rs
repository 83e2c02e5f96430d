use ndarray::Array1;

use super::types::RatingBook;
use crate::config::RatingSettings;
use crate::domain::Round;

/// Probability that a player rated `rating_a` beats one rated `rating_b`
pub fn expected_score(rating_a: f64, rating_b: f64, denominator: f64) -> f64 {
    1.0 / (1.0 + 10f64.powf((rating_b - rating_a) / denominator))
}

/// Unweighted rating deltas for one round, aligned with `round.scores` (name order).
///
/// Every winner is scored against every loser of the round: the winner gains
/// `1 - expected` and the loser gives up the same amount, so each pairing is
/// zero-sum. Teammates are never compared. The pairwise sum is averaged over the
/// `n - 1` possible opponents and scaled by the k-factor. All expectations use the
/// ratings held when the round started.
pub fn round_deltas(round: &Round, book: &RatingBook, settings: &RatingSettings) -> Array1<f64> {
    let ratings: Array1<f64> = round.scores.keys().map(|p| book.rating_of(p)).collect();
    let won: Vec<bool> = round.scores.values().map(|&score| score > 0).collect();
    let n = won.len();

    let mut deltas = Array1::<f64>::zeros(n);
    if n < 2 {
        return deltas;
    }

    for i in 0..n {
        for j in (i + 1)..n {
            if won[i] == won[j] {
                continue;
            }
            let (winner, loser) = if won[i] { (i, j) } else { (j, i) };
            let transfer = 1.0 - expected_score(ratings[winner], ratings[loser], settings.denominator);
            deltas[winner] += transfer;
            deltas[loser] -= transfer;
        }
    }

    let step = settings.k_factor / (n - 1) as f64;
    deltas.mapv_inplace(|delta| delta * step);
    deltas
}
