#[derive(Debug, Clone)]
pub struct RatingSettings {
    pub base_rating: f64,
    pub denominator: f64,
    pub k_factor: f64,
    pub championship_weight: f64,
    pub mini_championship_weight: f64,
    pub tiny_championship_weight: f64,
    pub friendly_weight: f64,
}

impl Default for RatingSettings {
    fn default() -> Self {
        Self {
            base_rating: 1000.0,
            denominator: 200.0,
            k_factor: 32.0,
            championship_weight: 1.0,
            mini_championship_weight: 0.75,
            tiny_championship_weight: 0.75,
            friendly_weight: 1.0,
        }
    }
}

/// Streak lengths that count as a milestone
#[derive(Debug, Clone)]
pub struct StreakSettings {
    pub fivple: u32,
    pub tenple: u32,
    pub five_motte: u32,
}

impl Default for StreakSettings {
    fn default() -> Self {
        Self {
            fivple: 5,
            tenple: 10,
            five_motte: 5,
        }
    }
}

#[derive(Debug, Clone)]
pub struct StatsSettings {
    /// Players with strictly more career rounds than this are ranked
    pub core_player_threshold: u32,
    pub pairwise_min_games: u32,
    pub trio_min_games: u32,
}

impl Default for StatsSettings {
    fn default() -> Self {
        Self {
            core_player_threshold: 200,
            pairwise_min_games: 10,
            trio_min_games: 5,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    pub rating: RatingSettings,
    pub streaks: StreakSettings,
    pub stats: StatsSettings,
}

impl AppConfig {
    pub fn new() -> Self {
        Self::default()
    }
}
