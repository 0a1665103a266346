/// Tunable knobs for the automated player.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BotParams {
    risk: f64,
}

impl BotParams {
    pub const DEFAULT_RISK: f64 = 0.1;

    /// Risk is the per-turn probability of accusing without a completed
    /// deduction. Out-of-range or non-finite values fall back to the
    /// default.
    pub fn with_risk(risk: f64) -> Self {
        let risk = if risk.is_finite() && (0.0..=1.0).contains(&risk) {
            risk
        } else {
            Self::DEFAULT_RISK
        };
        Self { risk }
    }

    pub fn from_env() -> Self {
        Self::from_reader(|key| std::env::var(key).ok())
    }

    pub const fn risk(self) -> f64 {
        self.risk
    }

    fn from_reader<F>(mut read: F) -> Self
    where
        F: FnMut(&str) -> Option<String>,
    {
        let risk = read("MDCLUE_BOT_RISK")
            .and_then(|raw| raw.trim().parse::<f64>().ok())
            .filter(|value| value.is_finite() && (0.0..=1.0).contains(value))
            .unwrap_or(Self::DEFAULT_RISK);
        Self { risk }
    }
}

impl Default for BotParams {
    fn default() -> Self {
        Self {
            risk: Self::DEFAULT_RISK,
        }
    }
}
