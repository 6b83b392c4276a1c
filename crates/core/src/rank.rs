//! Qualitative rank derived from a final score.

use std::fmt;

/// Rank tiers ordered from lowest to highest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RankTier {
    /// Below 40%.
    Novice,
    /// 40% and above.
    Fair,
    /// 60% and above.
    Good,
    /// 80% and above.
    Excellent,
    /// A perfect score.
    Doctor,
}

impl RankTier {
    /// Minimum percentage for this tier, inclusive.
    #[must_use]
    pub fn threshold(self) -> u32 {
        match self {
            RankTier::Novice => 0,
            RankTier::Fair => 40,
            RankTier::Good => 60,
            RankTier::Excellent => 80,
            RankTier::Doctor => 100,
        }
    }

    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            RankTier::Doctor => "ドラえもん博士",
            RankTier::Excellent => "出木杉君レベル",
            RankTier::Good => "スネ夫レベル",
            RankTier::Fair => "ジャイアンレベル",
            RankTier::Novice => "のび太レベル",
        }
    }

    #[must_use]
    pub fn comment(self) -> &'static str {
        match self {
            RankTier::Doctor => "完璧です！あなたは真のドラえもん博士です！",
            RankTier::Excellent => "素晴らしい！とても優秀です！",
            RankTier::Good => "なかなかやりますね！",
            RankTier::Fair => "もう少し頑張りましょう！",
            RankTier::Novice => "ドラえもんに助けてもらいましょう！",
        }
    }
}

/// Title and comment shown at the end of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RankResult {
    pub tier: RankTier,
    pub title: &'static str,
    pub comment: &'static str,
}

impl From<RankTier> for RankResult {
    fn from(tier: RankTier) -> Self {
        Self {
            tier,
            title: tier.title(),
            comment: tier.comment(),
        }
    }
}

impl fmt::Display for RankResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.title, self.comment)
    }
}

/// Percentage of correct answers, `0.0` when `total` is zero.
#[must_use]
pub fn percentage(score: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    #[allow(clippy::cast_precision_loss)]
    let pct = score as f64 / total as f64 * 100.0;
    pct
}

/// Derive the rank for `score` correct answers out of `total`.
///
/// Thresholds are inclusive and compared in integer arithmetic, so 8/10 is
/// exactly 80% and lands in `Excellent`. An empty quiz ranks `Novice`.
#[must_use]
pub fn rank(score: usize, total: usize) -> RankResult {
    tier_for(score, total).into()
}

fn tier_for(score: usize, total: usize) -> RankTier {
    if total == 0 {
        return RankTier::Novice;
    }
    let reaches = |tier: RankTier| {
        let threshold = tier.threshold() as u128;
        (score as u128) * 100 >= threshold * (total as u128)
    };

    [
        RankTier::Doctor,
        RankTier::Excellent,
        RankTier::Good,
        RankTier::Fair,
    ]
    .into_iter()
    .find(|tier| reaches(*tier))
    .unwrap_or(RankTier::Novice)
}
