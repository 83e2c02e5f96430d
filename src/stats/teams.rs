use serde::{Deserialize, Serialize};

use super::round_to;
use crate::domain::{Round, Tournament};

/// Same-side record of two or three players
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamStat {
    pub members: Vec<String>,
    pub wins: u32,
    pub losses: u32,
    pub total_games: u32,
    /// Sum over shared rounds of the lowest member score
    pub total_points: i64,
    pub avg_points: f64,
    pub win_percentage: Option<f64>,
}

impl TeamStat {
    pub fn new(members: Vec<String>, wins: u32, losses: u32, total_games: u32, total_points: i64) -> Self {
        Self {
            members,
            wins,
            losses,
            total_games,
            total_points,
            avg_points: average(total_points, total_games),
            win_percentage: win_percentage(wins, losses),
        }
    }
}

pub fn average(total_points: i64, total_games: u32) -> f64 {
    if total_games == 0 {
        return 0.0;
    }
    round_to(total_points as f64 / total_games as f64, 1)
}

pub fn win_percentage(wins: u32, losses: u32) -> Option<f64> {
    let decided = wins + losses;
    if decided == 0 {
        return None;
    }
    Some(round_to(100.0 * wins as f64 / decided as f64, 1))
}

pub fn pairwise_stats(tournament: &Tournament, min_games: u32) -> Vec<TeamStat> {
    team_stats(tournament, 2, min_games)
}

pub fn trio_stats(tournament: &Tournament, min_games: u32) -> Vec<TeamStat> {
    team_stats(tournament, 3, min_games)
}

/// Every group of `size` players that shared a side at least `min_games` times,
/// best win percentage first
pub fn team_stats(tournament: &Tournament, size: usize, min_games: u32) -> Vec<TeamStat> {
    let mut stats: Vec<TeamStat> = combinations(&tournament.players, size)
        .into_iter()
        .map(|members| tally(&tournament.rounds, &members))
        .filter(|stat| stat.total_games >= min_games && stat.total_games > 0)
        .collect();

    stats.sort_by(|a, b| {
        let a_pct = a.win_percentage.unwrap_or(0.0);
        let b_pct = b.win_percentage.unwrap_or(0.0);
        b_pct.total_cmp(&a_pct).then_with(|| a.members.cmp(&b.members))
    });
    stats
}

fn tally(rounds: &[Round], members: &[&str]) -> TeamStat {
    let (mut wins, mut losses, mut total_points) = (0u32, 0u32, 0i64);

    for round in rounds {
        let outcomes: Vec<bool> = members.iter().map(|m| round.won(m)).collect();
        let all_won = outcomes.iter().all(|&won| won);
        let all_lost = outcomes.iter().all(|&won| !won);
        if !all_won && !all_lost {
            continue;
        }

        if all_won {
            wins += 1;
        } else {
            losses += 1;
        }
        total_points += members
            .iter()
            .map(|m| round.scores.get(*m).copied().unwrap_or(0) as i64)
            .min()
            .unwrap_or(0);
    }

    let members = members.iter().map(|m| m.to_string()).collect();
    TeamStat::new(members, wins, losses, wins + losses, total_points)
}

/// Sorted-order combinations, so each group appears exactly once
fn combinations(players: &[String], size: usize) -> Vec<Vec<&str>> {
    if size == 0 {
        return vec![Vec::new()];
    }

    let mut groups = Vec::new();
    for (i, first) in players.iter().enumerate() {
        for rest in combinations(&players[i + 1..], size - 1) {
            let mut group = Vec::with_capacity(size);
            group.push(first.as_str());
            group.extend(rest);
            groups.push(group);
        }
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::test_support::tournament_from_rows;

    #[test]
    fn test_combinations_are_unordered_and_unique() {
        let players: Vec<String> = ["A", "B", "C", "D"].iter().map(|p| p.to_string()).collect();
        assert_eq!(combinations(&players, 2).len(), 6);
        assert_eq!(combinations(&players, 3).len(), 4);
        assert_eq!(combinations(&players, 3)[0], vec!["A", "B", "C"]);
    }

    #[test]
    fn test_pairs_count_only_shared_sides() {
        // A and B share a side in rounds 1, 2 and 4
        let tournament = tournament_from_rows(
            &["A", "B", "C", "D"],
            &[
                &[30, 20, 0, 0],
                &[0, 0, 40, 40],
                &[30, 0, 30, 0],
                &[10, 15, 0, 0],
            ],
        );
        let pairs = pairwise_stats(&tournament, 1);
        let ab = pairs.iter().find(|s| s.members == vec!["A", "B"]).unwrap();

        assert_eq!(ab.wins, 2);
        assert_eq!(ab.losses, 1);
        assert_eq!(ab.total_games, 3);
        assert_eq!(ab.wins + ab.losses, ab.total_games);
        assert_eq!(ab.total_points, 20 + 0 + 10);
        assert_eq!(ab.avg_points, 10.0);
        assert_eq!(ab.win_percentage, Some(66.7));
    }

    #[test]
    fn test_threshold_filters_rare_groups() {
        let tournament = tournament_from_rows(&["A", "B", "C"], &[&[30, 30, 0], &[0, 20, 20]]);
        assert!(pairwise_stats(&tournament, 10).is_empty());
        assert!(trio_stats(&tournament, 5).is_empty());
        assert_eq!(pairwise_stats(&tournament, 1).len(), 2);
    }

    #[test]
    fn test_trios_need_all_three_together() {
        let tournament = tournament_from_rows(
            &["A", "B", "C", "D"],
            &[&[10, 10, 10, 0], &[0, 0, 0, 50], &[10, 10, 0, 10]],
        );
        let trios = trio_stats(&tournament, 1);
        let abc = trios.iter().find(|s| s.members == vec!["A", "B", "C"]).unwrap();
        assert_eq!((abc.wins, abc.losses), (1, 1));
        assert_eq!(abc.win_percentage, Some(50.0));
    }

    #[test]
    fn test_sorted_by_win_percentage() {
        let tournament = tournament_from_rows(
            &["A", "B", "C"],
            &[&[10, 10, 0], &[10, 10, 0], &[0, 10, 10], &[10, 0, 0]],
        );
        let pairs = pairwise_stats(&tournament, 1);
        let pcts: Vec<f64> = pairs.iter().filter_map(|p| p.win_percentage).collect();
        let mut sorted = pcts.clone();
        sorted.sort_by(|a, b| b.total_cmp(a));
        assert_eq!(pcts, sorted);
    }
}
