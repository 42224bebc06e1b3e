use std::fmt;

/// Difficulty tiers offered to the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
    Expert,
}

/// Search and randomization parameters of a difficulty tier.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DifficultyProfile {
    /// Plies searched from the root, counting the engine's own move.
    pub depth: usize,
    /// Multiplier applied to the positional terms of the evaluator.
    pub eval_scale: f64,
    /// Half-width of the uniform noise added to each root score.
    pub jitter: f64,
    /// Chance of a random move while the board holds at most three pieces.
    pub early_random: f64,
}

impl Difficulty {
    pub const ALL: [Difficulty; 4] = [
        Difficulty::Easy,
        Difficulty::Medium,
        Difficulty::Hard,
        Difficulty::Expert,
    ];

    /// Parse a tier name, case-insensitively. Unknown names fall back to
    /// Medium.
    pub fn from_name(name: &str) -> Difficulty {
        Self::parse(name).unwrap_or_default()
    }

    /// Strict variant of [`Difficulty::from_name`].
    pub fn parse(name: &str) -> Option<Difficulty> {
        Self::ALL
            .into_iter()
            .find(|d| d.name().eq_ignore_ascii_case(name.trim()))
    }

    pub fn name(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
            Difficulty::Expert => "expert",
        }
    }

    pub fn profile(self) -> DifficultyProfile {
        match self {
            Difficulty::Easy => DifficultyProfile {
                depth: 1,
                eval_scale: 0.1,
                jitter: 8.0,
                early_random: 0.8,
            },
            Difficulty::Medium => DifficultyProfile {
                depth: 3,
                eval_scale: 0.3,
                jitter: 3.0,
                early_random: 0.4,
            },
            Difficulty::Hard => DifficultyProfile {
                depth: 4,
                eval_scale: 0.6,
                jitter: 1.0,
                early_random: 0.2,
            },
            Difficulty::Expert => DifficultyProfile {
                depth: 6,
                eval_scale: 1.0,
                jitter: 0.0,
                early_random: 0.0,
            },
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = self.name();
        let mut chars = name.chars();
        if let Some(first) = chars.next() {
            write!(f, "{}{}", first.to_ascii_uppercase(), chars.as_str())?;
        }
        Ok(())
    }
}
