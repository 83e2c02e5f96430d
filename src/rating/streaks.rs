use crate::config::StreakSettings;

use super::types::PlayerRatingState;

/// Streaks never carry over from a previous tournament
pub fn begin_tournament(state: &mut PlayerRatingState) {
    state.current_win_streak = 0;
    state.current_loss_streak = 0;
    state.best_win_streak_this_tourney = 0;
    state.worst_loss_streak_this_tourney = 0;
}

/// Applies one round's outcome to the career totals, streaks and milestones
pub fn record_result(state: &mut PlayerRatingState, won: bool, settings: &StreakSettings) {
    state.career_games += 1;

    if won {
        state.career_wins += 1;
        state.current_win_streak += 1;
        state.current_loss_streak = 0;

        let streak = state.current_win_streak;
        state.best_win_streak = state.best_win_streak.max(streak);
        state.best_win_streak_this_tourney = state.best_win_streak_this_tourney.max(streak);

        // Counted on the crossing only, a 12-streak is one of each
        if streak == settings.fivple {
            state.num_fivples += 1;
        }
        if streak == settings.tenple {
            state.num_tenples += 1;
        }
    } else {
        state.current_loss_streak += 1;
        state.current_win_streak = 0;

        let streak = state.current_loss_streak;
        state.worst_loss_streak = state.worst_loss_streak.max(streak);
        state.worst_loss_streak_this_tourney = state.worst_loss_streak_this_tourney.max(streak);

        if streak == settings.five_motte {
            state.num_five_mottes += 1;
        }
    }
}
