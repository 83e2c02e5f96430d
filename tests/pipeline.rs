mod common;

use rstest::rstest;
use std::collections::BTreeSet;

use common::{DocumentBuilder, build, league, rotating_rounds};
use spades_ledger::config::AppConfig;
use spades_ledger::domain::TournamentCollection;
use spades_ledger::rating::RatingBook;
use spades_ledger::rating::elo::round_deltas;

#[test]
fn test_rerun_is_byte_identical() {
    let document = league();
    let config = AppConfig::default();

    let first = build(&document, &config);
    let second = build(&document, &config);

    assert_eq!(
        serde_json::to_string(&first.rankings).unwrap(),
        serde_json::to_string(&second.rankings).unwrap()
    );
    assert_eq!(
        serde_json::to_string(&first.rating_history).unwrap(),
        serde_json::to_string(&second.rating_history).unwrap()
    );
    assert_eq!(first, second);
}

#[test]
fn test_every_round_is_zero_sum_before_weighting() {
    let config = AppConfig::default();
    let collection = TournamentCollection::from_document(&league(), &config.rating).unwrap();

    let mut book = RatingBook::new(config.rating.base_rating);
    // skew the book so expectations are not all 0.5
    for (i, player) in ["A", "B", "C", "D", "G"].iter().enumerate() {
        book.register(player).rating = 900.0 + 55.5 * i as f64;
    }

    for tournament in collection.iter() {
        for round in &tournament.rounds {
            let deltas = round_deltas(round, &book, &config.rating);
            assert!(deltas.sum().abs() < 1e-9, "round {} of {}", round.index, tournament.id());
        }
    }
}

#[rstest]
#[case("championship", 1.0)]
#[case("international_friendly", 1.0)]
#[case("mini_championship", 0.75)]
#[case("tiny_championship", 0.75)]
fn test_weight_scales_rating_movement(#[case] kind: &str, #[case] weight: f64) {
    let rows = vec![vec![30, 0, 15]];
    let config = AppConfig::default();

    let reference = build(
        &DocumentBuilder::new().tournament("championship", 1, &["A", "B", "C"], &rows).document(),
        &config,
    );
    let weighted = build(
        &DocumentBuilder::new().tournament(kind, 1, &["A", "B", "C"], &rows).document(),
        &config,
    );

    let id = format!("{kind}_1");
    for player in ["A", "B", "C"] {
        let full = reference.tournament_snapshots["championship_1"][player].rating_change;
        let scaled = weighted.tournament_snapshots[&id][player].rating_change;
        // snapshot values carry one decimal
        assert!((scaled - weight * full).abs() <= 0.1, "{player}: {scaled} vs {weight} * {full}");
    }
}

#[test]
fn test_guest_appears_only_in_tournament_snapshots() {
    let data = build(&league(), &AppConfig::default());

    assert_eq!(data.players, vec!["A", "B", "C", "D"]);
    assert!(data.rankings.iter().all(|r| r.player != "G"));
    assert!(data.all_time_stats.iter().all(|s| s.player != "G"));
    assert!(!data.career_stats.contains_key("G"));
    assert!(data.rating_history.iter().all(|row| !row.ratings.contains_key("G")));

    for id in ["championship_1", "mini_championship_1"] {
        let guest = &data.tournament_snapshots[id]["G"];
        assert!(guest.is_guest);
        assert!(guest.rank_before.is_none() && guest.rank_after.is_none());
    }
    assert!(!data.tournament_snapshots["championship_2"].contains_key("G"));
    assert_eq!(data.tournament_snapshots["mini_championship_1"]["G"].career_games, 150);
}

#[test]
fn test_all_time_totals_match_tournament_totals() {
    let data = build(&league(), &AppConfig::default());

    for stats in &data.all_time_stats {
        let (games, wins, points) = data
            .tournaments
            .iter()
            .flat_map(|t| t.summary.player_stats.iter())
            .filter(|row| row.player == stats.player)
            .fold((0, 0, 0), |(g, w, p), row| {
                (g + row.total_games, w + row.wins, p + row.total_points)
            });
        assert_eq!(stats.total_games, games);
        assert_eq!(stats.wins, wins);
        assert_eq!(stats.total_points, points);
        assert_eq!(stats.total_games, data.career_stats[&stats.player].career_games);
    }

    let tournament_wins: u32 = data.all_time_stats.iter().map(|s| s.tournament_wins).sum();
    let core_winners = data
        .tournaments
        .iter()
        .flat_map(|t| t.summary.winners.iter())
        .filter(|w| data.players.contains(w))
        .count();
    assert_eq!(tournament_wins as usize, core_winners);
}

#[test]
fn test_all_time_pairwise_is_symmetric() {
    let data = build(&league(), &AppConfig::default());
    assert!(!data.all_time_pairwise.is_empty());

    let mut seen = BTreeSet::new();
    for pair in &data.all_time_pairwise {
        assert!(pair.player1 < pair.player2);
        assert!(seen.insert((pair.player1.clone(), pair.player2.clone())));
        assert_eq!(pair.wins + pair.losses, pair.total_games);
    }
}

#[test]
fn test_rating_history_rows() {
    let data = build(&league(), &AppConfig::default());

    assert_eq!(data.rating_history.len(), data.total_tournaments + 1);
    assert!(data.rating_history[0].ratings.values().all(|&r| r == 1000.0));
    let last = data.rating_history.last().unwrap();
    for ranking in &data.rankings {
        assert_eq!(last.ratings[&ranking.player], ranking.rating);
    }
}

#[test]
fn test_snapshot_ranks_match_rankings_after_last_tournament() {
    let data = build(&league(), &AppConfig::default());
    let last = &data.tournament_snapshots["championship_2"];

    for ranking in &data.rankings {
        assert_eq!(last[&ranking.player].rank_after, Some(ranking.rank));
    }
}

#[test]
fn test_single_tournament_below_threshold_has_no_core_players() {
    let document = DocumentBuilder::new()
        .tournament("championship", 1, &["A", "B", "C", "D"], &rotating_rounds(20, 4, 0))
        .document();
    let data = build(&document, &AppConfig::default());

    assert!(data.players.is_empty());
    assert!(data.rankings.is_empty());
    assert_eq!(data.tournament_snapshots["championship_1"].len(), 4);
    assert!(data.tournament_snapshots["championship_1"].values().all(|s| s.is_guest));
}
