use std::time::Duration;

use crate::entity::location::LocationInfo;
use crate::entity::Entity;
use crate::map::direction::Direction;

/// The player: movement state plus score, lives and power mode.
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub entity: Entity,
    pub score: u32,
    pub lives: u8,
    pub can_eat_ghosts: bool,
    /// Simulation time at which the current power mode started.
    pub power_started_at: Option<Duration>,
    pub bonus_life_awarded: bool,
}

impl Player {
    pub fn new(location: LocationInfo, orientation: Direction, lives: u8) -> Self {
        Self {
            entity: Entity::new(location, orientation),
            score: 0,
            lives,
            can_eat_ghosts: false,
            power_started_at: None,
            bonus_life_awarded: false,
        }
    }

    /// Adds points, awarding one extra life the first time `bonus_threshold` is reached.
    ///
    /// Returns true if the bonus life was awarded by this call.
    pub fn add_score(&mut self, points: u32, bonus_threshold: u32) -> bool {
        self.score = self.score.saturating_add(points);
        if self.score >= bonus_threshold && !self.bonus_life_awarded {
            self.lives = self.lives.saturating_add(1);
            self.bonus_life_awarded = true;
            return true;
        }
        false
    }

    pub fn start_power(&mut self, now: Duration) {
        self.can_eat_ghosts = true;
        self.power_started_at = Some(now);
    }

    pub fn end_power(&mut self) {
        self.can_eat_ghosts = false;
        self.power_started_at = None;
    }

    /// Returns true if power mode is active and has lasted at least `duration`.
    pub fn power_expired(&self, now: Duration, duration: Duration) -> bool {
        match self.power_started_at {
            Some(started) if self.can_eat_ghosts => now.saturating_sub(started) >= duration,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn player() -> Player {
        Player::new(LocationInfo::new(0, 0.0), Direction::Left, 3)
    }

    #[test]
    fn test_bonus_life_awarded_once() {
        let mut player = player();
        assert!(!player.add_score(9_990, 10_000));
        assert!(player.add_score(10, 10_000));
        assert_eq!(player.lives, 4);
        assert!(!player.add_score(10_000, 10_000));
        assert_eq!(player.lives, 4);
    }

    #[test]
    fn test_power_expiry() {
        let mut player = player();
        let duration = Duration::from_secs(4);
        assert!(!player.power_expired(Duration::from_secs(100), duration));

        player.start_power(Duration::from_secs(1));
        assert!(!player.power_expired(Duration::from_millis(4_999), duration));
        assert!(player.power_expired(Duration::from_secs(5), duration));

        player.end_power();
        assert!(!player.can_eat_ghosts);
        assert!(!player.power_expired(Duration::from_secs(5), duration));
    }
}
