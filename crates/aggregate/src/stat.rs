//! The closed statistic enumeration and its combination policies.

use std::fmt;
use std::str::FromStr;

use dugout_io::PlayerRecord;

use crate::error::AggregateError;

/// Every statistic the aggregator understands.
///
/// The variants split into three families:
///
/// * head counts (`NumberOfPlayers`, `PlayersOverWar`), which have no
///   per-record value and only support [`Mode::Total`](crate::Mode),
/// * counting statistics (hits, home runs, wins, ...), which sum across
///   a day and average as a plain mean,
/// * rate statistics (batting average, ERA, ...), which never sum and
///   average as a weighted mean over each record's opportunities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stat {
    NumberOfPlayers,
    PlayersOverWar,
    War,
    AllStarGames,
    GamesBatted,
    GamesPitched,
    AtBats,
    Hits,
    HomeRuns,
    Rbi,
    StolenBases,
    Walks,
    BattingAverage,
    OnBasePercentage,
    Slugging,
    Ops,
    InningsPitched,
    Wins,
    Losses,
    Era,
    EraPlus,
    Whip,
    Saves,
    Strikeouts,
}

/// How a statistic combines under [`Mode::Total`](crate::Mode).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TotalPolicy {
    /// Count the day's records.
    Count,
    /// Count records whose career WAR exceeds a threshold.
    CountOverWar,
    /// Plain sum of the per-record values.
    Sum,
    /// Sum innings pitched in decimal thirds, rendered back to outs
    /// notation.
    InningsSum,
}

/// Denominator used when a rate statistic averages as a weighted mean.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Weight {
    /// Career at-bats.
    AtBats,
    /// At-bats plus walks, the approximation of plate appearances the
    /// source tables support.
    PlateAppearances,
    /// Career innings pitched, in decimal thirds.
    InningsPitched,
}

/// How a statistic combines under [`Mode::Average`](crate::Mode).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AveragePolicy {
    /// Recompute from components: total hits over total at-bats.
    HitsPerAtBat,
    /// Weighted mean of the per-record values.
    WeightedBy(Weight),
    /// Unweighted mean of the per-record values.
    Mean,
}

impl Stat {
    /// Per-record value of this statistic.
    ///
    /// Innings pitched is returned in decimal thirds, the internal form
    /// records carry. The head-count variants have no per-record value
    /// and return zero.
    pub fn value(self, rec: &PlayerRecord) -> f64 {
        match self {
            Stat::NumberOfPlayers | Stat::PlayersOverWar => 0.0,
            Stat::War => rec.war,
            Stat::AllStarGames => f64::from(rec.asg),
            Stat::GamesBatted => f64::from(rec.g_bat),
            Stat::GamesPitched => f64::from(rec.g_pit),
            Stat::AtBats => f64::from(rec.ab),
            Stat::Hits => f64::from(rec.h),
            Stat::HomeRuns => f64::from(rec.hr),
            Stat::Rbi => f64::from(rec.rbi),
            Stat::StolenBases => f64::from(rec.sb),
            Stat::Walks => f64::from(rec.bb),
            Stat::BattingAverage => rec.ba,
            Stat::OnBasePercentage => rec.obp,
            Stat::Slugging => rec.slg,
            Stat::Ops => rec.ops,
            Stat::InningsPitched => rec.ip,
            Stat::Wins => f64::from(rec.w),
            Stat::Losses => f64::from(rec.l),
            Stat::Era => rec.era,
            Stat::EraPlus => rec.era_plus,
            Stat::Whip => rec.whip,
            Stat::Saves => f64::from(rec.sv),
            Stat::Strikeouts => f64::from(rec.so),
        }
    }

    /// Combination policy under `Mode::Total`, or `None` when totalling
    /// makes no sense for this statistic.
    pub fn total_policy(self) -> Option<TotalPolicy> {
        match self {
            Stat::NumberOfPlayers => Some(TotalPolicy::Count),
            Stat::PlayersOverWar => Some(TotalPolicy::CountOverWar),
            Stat::InningsPitched => Some(TotalPolicy::InningsSum),
            Stat::War
            | Stat::AllStarGames
            | Stat::GamesBatted
            | Stat::GamesPitched
            | Stat::AtBats
            | Stat::Hits
            | Stat::HomeRuns
            | Stat::Rbi
            | Stat::StolenBases
            | Stat::Walks
            | Stat::Wins
            | Stat::Losses
            | Stat::Saves
            | Stat::Strikeouts => Some(TotalPolicy::Sum),
            Stat::BattingAverage
            | Stat::OnBasePercentage
            | Stat::Slugging
            | Stat::Ops
            | Stat::Era
            | Stat::EraPlus
            | Stat::Whip => None,
        }
    }

    /// Combination policy under `Mode::Average`, or `None` when the
    /// statistic is a head count and only supports totals.
    pub fn average_policy(self) -> Option<AveragePolicy> {
        match self {
            Stat::NumberOfPlayers | Stat::PlayersOverWar => None,
            Stat::BattingAverage => Some(AveragePolicy::HitsPerAtBat),
            Stat::OnBasePercentage | Stat::Ops => {
                Some(AveragePolicy::WeightedBy(Weight::PlateAppearances))
            }
            Stat::Slugging => Some(AveragePolicy::WeightedBy(Weight::AtBats)),
            Stat::Era | Stat::EraPlus | Stat::Whip => {
                Some(AveragePolicy::WeightedBy(Weight::InningsPitched))
            }
            _ => Some(AveragePolicy::Mean),
        }
    }

    /// True for the head-count variants, which have no per-record value.
    pub fn is_count(self) -> bool {
        matches!(self, Stat::NumberOfPlayers | Stat::PlayersOverWar)
    }

    /// True when a smaller value is the better one, as for ERA and WHIP.
    pub fn lower_is_better(self) -> bool {
        matches!(self, Stat::Era | Stat::Whip)
    }

    /// True when the per-record value is innings pitched in decimal
    /// thirds and should be rendered in outs notation for display.
    pub fn is_innings(self) -> bool {
        matches!(self, Stat::InningsPitched)
    }
}

impl fmt::Display for Stat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Stat::NumberOfPlayers => "Number of Players",
            Stat::PlayersOverWar => "Players Over WAR",
            Stat::War => "WAR",
            Stat::AllStarGames => "ASG",
            Stat::GamesBatted => "G_bat",
            Stat::GamesPitched => "G_pit",
            Stat::AtBats => "AB",
            Stat::Hits => "H",
            Stat::HomeRuns => "HR",
            Stat::Rbi => "RBI",
            Stat::StolenBases => "SB",
            Stat::Walks => "BB",
            Stat::BattingAverage => "BA",
            Stat::OnBasePercentage => "OBP",
            Stat::Slugging => "SLG",
            Stat::Ops => "OPS",
            Stat::InningsPitched => "IP",
            Stat::Wins => "W",
            Stat::Losses => "L",
            Stat::Era => "ERA",
            Stat::EraPlus => "ERA+",
            Stat::Whip => "WHIP",
            Stat::Saves => "SV",
            Stat::Strikeouts => "SO",
        };
        f.write_str(label)
    }
}

impl FromStr for Stat {
    type Err = AggregateError;

    /// Parses a statistic name, case-insensitively. Column headers
    /// (`HR`, `ERA+`) and a few spelled-out aliases are accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let stat = match s.to_ascii_lowercase().as_str() {
            "players" | "number-of-players" => Stat::NumberOfPlayers,
            "players-over-war" | "war-players" => Stat::PlayersOverWar,
            "war" => Stat::War,
            "asg" | "all-star-games" => Stat::AllStarGames,
            "g_bat" | "g-bat" | "games-batted" => Stat::GamesBatted,
            "g_pit" | "g-pit" | "games-pitched" => Stat::GamesPitched,
            "ab" | "at-bats" => Stat::AtBats,
            "h" | "hits" => Stat::Hits,
            "hr" | "home-runs" => Stat::HomeRuns,
            "rbi" => Stat::Rbi,
            "sb" | "stolen-bases" => Stat::StolenBases,
            "bb" | "walks" => Stat::Walks,
            "ba" | "avg" | "batting-average" => Stat::BattingAverage,
            "obp" | "on-base-percentage" => Stat::OnBasePercentage,
            "slg" | "slugging" => Stat::Slugging,
            "ops" => Stat::Ops,
            "ip" | "innings-pitched" => Stat::InningsPitched,
            "w" | "wins" => Stat::Wins,
            "l" | "losses" => Stat::Losses,
            "era" => Stat::Era,
            "era+" | "era-plus" => Stat::EraPlus,
            "whip" => Stat::Whip,
            "sv" | "saves" => Stat::Saves,
            "so" | "k" | "strikeouts" => Stat::Strikeouts,
            _ => {
                return Err(AggregateError::UnknownStat {
                    name: s.to_string(),
                });
            }
        };
        Ok(stat)
    }
}
