use crate::store::SaveData;

/// Base coins awarded for any completed solve.
const BASE_REWARD: u32 = 50;

/// Coins earned for one completed solve, itemized for the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reward {
    pub time_bonus: u32,
    pub move_bonus: u32,
    pub total: u32,
}

/// Reward arithmetic: a time bonus that decays by one coin
/// per six seconds, an efficiency bonus that decays by two coins per move,
/// and a flat base.
pub fn solve_reward(moves: u32, elapsed_secs: u32) -> Reward {
    let time_bonus = 100u32.saturating_sub(elapsed_secs / 6);
    let move_bonus = 200u32.saturating_sub(moves.saturating_mul(2));
    Reward {
        time_bonus,
        move_bonus,
        total: time_bonus + move_bonus + BASE_REWARD,
    }
}

impl SaveData {
    /// Record a completed solve: award coins, advance the level, and update
    /// any beaten best records.
    pub fn record_solve(&mut self, moves: u32, elapsed_secs: u32) -> Reward {
        let reward = solve_reward(moves, elapsed_secs);
        self.coins += reward.total;
        self.level += 1;

        if self.best_moves.is_none_or(|best| moves < best) {
            self.best_moves = Some(moves);
        }
        if self.best_time_secs.is_none_or(|best| elapsed_secs < best) {
            self.best_time_secs = Some(elapsed_secs);
        }

        tracing::info!(
            moves,
            elapsed_secs,
            coins = reward.total,
            level = self.level,
            "solve recorded"
        );
        reward
    }
}

/// Format elapsed seconds as the MM:SS string shown in the HUD.
pub fn format_time(secs: u32) -> String {
    format!("{:02}:{:02}", secs / 60, secs % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fast_efficient_solves_earn_the_most() {
        let r = solve_reward(0, 0);
        assert_eq!(r.time_bonus, 100);
        assert_eq!(r.move_bonus, 200);
        assert_eq!(r.total, 350);
    }

    #[test]
    fn bonuses_floor_at_zero() {
        let r = solve_reward(500, 100_000);
        assert_eq!(r.time_bonus, 0);
        assert_eq!(r.move_bonus, 0);
        assert_eq!(r.total, BASE_REWARD);
    }

    #[test]
    fn bonus_decay_rates_are_exact() {
        assert_eq!(solve_reward(10, 60).time_bonus, 90);
        assert_eq!(solve_reward(10, 60).move_bonus, 180);
    }

    #[test]
    fn record_solve_awards_and_levels_up() {
        let mut data = SaveData::default();
        let reward = data.record_solve(40, 120);
        assert_eq!(data.level, 2);
        assert_eq!(data.coins, reward.total);
        assert_eq!(data.best_moves, Some(40));
        assert_eq!(data.best_time_secs, Some(120));
    }

    #[test]
    fn best_records_only_improve() {
        let mut data = SaveData::default();
        data.record_solve(40, 120);
        data.record_solve(60, 300);
        assert_eq!(data.best_moves, Some(40));
        assert_eq!(data.best_time_secs, Some(120));
        data.record_solve(25, 90);
        assert_eq!(data.best_moves, Some(25));
        assert_eq!(data.best_time_secs, Some(90));
    }

    #[test]
    fn time_formats_as_minutes_and_seconds() {
        assert_eq!(format_time(0), "00:00");
        assert_eq!(format_time(75), "01:15");
        assert_eq!(format_time(3600), "60:00");
    }
}
