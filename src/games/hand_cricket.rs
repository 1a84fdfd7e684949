//! Hand Cricket match rules.
//!
//! The player bats first and the CPU chases. Every ball both sides show a
//! number from 1 to 6: matching numbers dismiss the batter, anything else adds
//! the batter's number to their score.

use crate::app::Difficulty;
use rand::Rng;
use thiserror::Error;

pub const MIN_PICK: u8 = 1;
pub const MAX_PICK: u8 = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CricketError {
    #[error("pick {0} is outside 1..=6")]
    InvalidPick(u8),
    #[error("the match is already over")]
    MatchOver,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Innings {
    PlayerBatting,
    CpuBatting,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BallOutcome {
    Runs(u8),
    Out,
}

/// One delivery as it was played
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BallRecord {
    pub innings: Innings,
    pub player_pick: u8,
    pub cpu_pick: u8,
    pub outcome: BallOutcome,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchResult {
    Win,
    Loss,
    Tie,
}

impl MatchResult {
    pub fn label(self) -> &'static str {
        match self {
            MatchResult::Win => "Win",
            MatchResult::Loss => "Loss",
            MatchResult::Tie => "Tie",
        }
    }
}

/// Per-difficulty tuning
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CricketRules {
    /// Balls each side may face before the innings closes
    pub balls_per_innings: u32,
    /// Chance the CPU reads the player's previous number
    pub anticipation: f64,
}

impl CricketRules {
    pub fn for_difficulty(difficulty: Difficulty) -> Self {
        match difficulty {
            Difficulty::Easy => Self { balls_per_innings: 12, anticipation: 0.0 },
            Difficulty::Medium => Self { balls_per_innings: 12, anticipation: 0.2 },
            Difficulty::Hard => Self { balls_per_innings: 18, anticipation: 0.35 },
        }
    }
}

pub struct HandCricketMatch<R: Rng> {
    rules: CricketRules,
    rng: R,
    innings: Innings,
    player_score: u32,
    cpu_score: u32,
    balls_this_innings: u32,
    balls_total: u32,
    last_player_pick: Option<u8>,
    last_ball: Option<BallRecord>,
    result: Option<MatchResult>,
}

impl<R: Rng> HandCricketMatch<R> {
    pub fn new(rules: CricketRules, rng: R) -> Self {
        Self {
            rules,
            rng,
            innings: Innings::PlayerBatting,
            player_score: 0,
            cpu_score: 0,
            balls_this_innings: 0,
            balls_total: 0,
            last_player_pick: None,
            last_ball: None,
            result: None,
        }
    }

    pub fn innings(&self) -> Innings {
        self.innings
    }

    pub fn player_score(&self) -> u32 {
        self.player_score
    }

    pub fn cpu_score(&self) -> u32 {
        self.cpu_score
    }

    pub fn balls_total(&self) -> u32 {
        self.balls_total
    }

    pub fn balls_left(&self) -> u32 {
        self.rules.balls_per_innings.saturating_sub(self.balls_this_innings)
    }

    pub fn last_ball(&self) -> Option<BallRecord> {
        self.last_ball
    }

    pub fn result(&self) -> Option<MatchResult> {
        self.result
    }

    pub fn is_over(&self) -> bool {
        self.result.is_some()
    }

    /// Runs the CPU needs to win, once the chase has started
    pub fn target(&self) -> Option<u32> {
        match self.innings {
            Innings::PlayerBatting => None,
            Innings::CpuBatting => Some(self.player_score + 1),
        }
    }

    /// Plays one ball with the CPU choosing its own number
    pub fn play(&mut self, player_pick: u8) -> Result<BallRecord, CricketError> {
        validate_pick(player_pick)?;
        if self.is_over() {
            return Err(CricketError::MatchOver);
        }
        let cpu_pick = self.cpu_pick();
        self.play_against(player_pick, cpu_pick)
    }

    /// Plays one ball with both numbers fixed
    pub fn play_against(&mut self, player_pick: u8, cpu_pick: u8) -> Result<BallRecord, CricketError> {
        validate_pick(player_pick)?;
        validate_pick(cpu_pick)?;
        if self.is_over() {
            return Err(CricketError::MatchOver);
        }

        let batter_pick = match self.innings {
            Innings::PlayerBatting => player_pick,
            Innings::CpuBatting => cpu_pick,
        };
        let outcome = if player_pick == cpu_pick {
            BallOutcome::Out
        } else {
            BallOutcome::Runs(batter_pick)
        };

        let record = BallRecord {
            innings: self.innings,
            player_pick,
            cpu_pick,
            outcome,
        };

        self.balls_this_innings += 1;
        self.balls_total += 1;
        self.last_player_pick = Some(player_pick);
        self.last_ball = Some(record);

        if let BallOutcome::Runs(runs) = outcome {
            match self.innings {
                Innings::PlayerBatting => self.player_score += u32::from(runs),
                Innings::CpuBatting => self.cpu_score += u32::from(runs),
            }
        }

        let innings_closed = outcome == BallOutcome::Out || self.balls_left() == 0;
        match self.innings {
            Innings::PlayerBatting if innings_closed => {
                self.innings = Innings::CpuBatting;
                self.balls_this_innings = 0;
            }
            Innings::PlayerBatting => {}
            Innings::CpuBatting => {
                if self.cpu_score > self.player_score {
                    self.result = Some(MatchResult::Loss);
                } else if innings_closed {
                    self.result = Some(if self.cpu_score == self.player_score {
                        MatchResult::Tie
                    } else {
                        MatchResult::Win
                    });
                }
            }
        }

        Ok(record)
    }

    fn cpu_pick(&mut self) -> u8 {
        let reads_player = self.rng.random_bool(self.rules.anticipation);
        match (self.innings, self.last_player_pick) {
            (Innings::PlayerBatting, Some(previous)) if reads_player => previous,
            (Innings::CpuBatting, Some(previous)) if reads_player => {
                // any number except the one the player showed last
                let pick = self.rng.random_range(MIN_PICK..MAX_PICK);
                if pick >= previous {
                    pick + 1
                } else {
                    pick
                }
            }
            _ => self.rng.random_range(MIN_PICK..=MAX_PICK),
        }
    }
}

fn validate_pick(pick: u8) -> Result<(), CricketError> {
    if (MIN_PICK..=MAX_PICK).contains(&pick) {
        Ok(())
    } else {
        Err(CricketError::InvalidPick(pick))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_xoshiro::Xoshiro256PlusPlus;

    fn new_match(difficulty: Difficulty) -> HandCricketMatch<Xoshiro256PlusPlus> {
        HandCricketMatch::new(
            CricketRules::for_difficulty(difficulty),
            Xoshiro256PlusPlus::seed_from_u64(42),
        )
    }

    #[test]
    fn test_rejects_out_of_range_pick() {
        let mut game = new_match(Difficulty::Easy);
        assert_eq!(game.play(0), Err(CricketError::InvalidPick(0)));
        assert_eq!(game.play(7), Err(CricketError::InvalidPick(7)));
        assert_eq!(game.balls_total(), 0);
    }

    #[test]
    fn test_player_scores_own_number_when_not_matched() {
        let mut game = new_match(Difficulty::Easy);
        let ball = game.play_against(4, 2).unwrap();
        assert_eq!(ball.outcome, BallOutcome::Runs(4));
        assert_eq!(game.player_score(), 4);
        assert_eq!(game.innings(), Innings::PlayerBatting);
    }

    #[test]
    fn test_matching_numbers_end_player_innings() {
        let mut game = new_match(Difficulty::Easy);
        game.play_against(6, 1).unwrap();
        let ball = game.play_against(3, 3).unwrap();
        assert_eq!(ball.outcome, BallOutcome::Out);
        assert_eq!(game.innings(), Innings::CpuBatting);
        assert_eq!(game.target(), Some(7));
        assert!(!game.is_over());
    }

    #[test]
    fn test_cpu_passing_target_is_a_loss() {
        let mut game = new_match(Difficulty::Easy);
        game.play_against(2, 2).unwrap(); // out for 0
        game.play_against(1, 5).unwrap(); // CPU scores 5
        assert_eq!(game.result(), Some(MatchResult::Loss));
        assert_eq!(game.play_against(1, 2), Err(CricketError::MatchOver));
    }

    #[test]
    fn test_cpu_dismissed_short_is_a_win() {
        let mut game = new_match(Difficulty::Easy);
        game.play_against(5, 1).unwrap();
        game.play_against(4, 4).unwrap(); // player all out for 5
        game.play_against(1, 3).unwrap(); // CPU 3
        game.play_against(6, 6).unwrap(); // CPU out
        assert_eq!(game.cpu_score(), 3);
        assert_eq!(game.result(), Some(MatchResult::Win));
    }

    #[test]
    fn test_level_scores_are_a_tie() {
        let mut game = new_match(Difficulty::Easy);
        game.play_against(4, 1).unwrap();
        game.play_against(2, 2).unwrap();
        game.play_against(1, 4).unwrap();
        game.play_against(5, 5).unwrap();
        assert_eq!(game.result(), Some(MatchResult::Tie));
    }

    #[test]
    fn test_ball_limit_closes_innings() {
        let mut game = new_match(Difficulty::Easy);
        for _ in 0..12 {
            game.play_against(1, 2).unwrap();
        }
        assert_eq!(game.innings(), Innings::CpuBatting);
        assert_eq!(game.player_score(), 12);
        assert_eq!(game.balls_left(), 12);
    }

    #[test]
    fn test_random_match_always_terminates() {
        for difficulty in [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard] {
            let limit = CricketRules::for_difficulty(difficulty).balls_per_innings * 2;
            for seed in 0..50 {
                let mut game = HandCricketMatch::new(
                    CricketRules::for_difficulty(difficulty),
                    Xoshiro256PlusPlus::seed_from_u64(seed),
                );
                let mut balls = 0;
                while !game.is_over() {
                    let pick = (balls % 6) as u8 + 1;
                    let ball = game.play(pick).unwrap();
                    assert!((MIN_PICK..=MAX_PICK).contains(&ball.cpu_pick));
                    balls += 1;
                    assert!(balls <= limit);
                }
            }
        }
    }
}
