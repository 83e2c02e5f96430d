use ndarray::Array1;
use serde::{Deserialize, Serialize};

use super::round_to;
use crate::domain::Tournament;

/// Score dispersion of one player across a tournament
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsistencyStats {
    pub mean: Option<f64>,
    pub std: Option<f64>,
    pub cv: Option<f64>,
    pub mean_wins: Option<f64>,
    pub std_wins: Option<f64>,
    pub scores: Vec<i32>,
}

pub fn consistency_stats(tournament: &Tournament, player: &str) -> ConsistencyStats {
    let scores: Vec<i32> = tournament
        .rounds
        .iter()
        .map(|r| r.scores.get(player).copied().unwrap_or(0))
        .collect();
    let winning: Vec<i32> = scores.iter().copied().filter(|&s| s > 0).collect();

    let (mean, std) = mean_and_std(&scores);
    let (mean_wins, std_wins) = mean_and_std(&winning);

    ConsistencyStats {
        mean: mean.map(|m| round_to(m, 1)),
        std: std.map(|s| round_to(s, 1)),
        cv: coefficient_of_variation(mean, std),
        mean_wins: mean_wins.map(|m| round_to(m, 1)),
        std_wins: std_wins.map(|s| round_to(s, 1)),
        scores,
    }
}

/// Sample (n-1) standard deviation; undefined below two values
fn mean_and_std(values: &[i32]) -> (Option<f64>, Option<f64>) {
    let array: Array1<f64> = values.iter().map(|&v| v as f64).collect();
    let mean = array.mean();
    let std = (array.len() > 1).then(|| array.std(1.0));
    (mean, std)
}

fn coefficient_of_variation(mean: Option<f64>, std: Option<f64>) -> Option<f64> {
    match (mean, std) {
        (Some(mean), Some(std)) if mean != 0.0 => Some(round_to(std / mean, 3)),
        _ => None,
    }
}
