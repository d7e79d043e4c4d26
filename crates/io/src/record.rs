//! Career statistics for one player.

/// One player's career line, keyed to a birth calendar day.
///
/// Counting stats are non-negative integers. Rate stats are the
/// already-computed career aggregates from the source tables, so
/// combining them across players requires weighting (handled by the
/// aggregation crate, not here). `ip` holds innings pitched in the true
/// decimal-thirds representation — its fractional part is 0, 1/3, or
/// 2/3 — converted from the file's outs notation at load time.
///
/// Records are immutable once loaded.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PlayerRecord {
    /// Player name.
    pub name: String,
    /// Number of seasons played.
    pub years: u32,
    /// Games played as a batter.
    pub g_bat: u32,
    /// Games played as a pitcher.
    pub g_pit: u32,
    /// Career at-bats.
    pub ab: u32,
    /// Career runs scored.
    pub r: u32,
    /// Career hits.
    pub h: u32,
    /// Career home runs.
    pub hr: u32,
    /// Career runs batted in.
    pub rbi: u32,
    /// Career stolen bases.
    pub sb: u32,
    /// Career walks.
    pub bb: u32,
    /// Career batting average.
    pub ba: f64,
    /// Career on-base percentage.
    pub obp: f64,
    /// Career slugging percentage.
    pub slg: f64,
    /// Career on-base plus slugging.
    pub ops: f64,
    /// Career OPS+ (league- and park-adjusted OPS).
    pub ops_plus: f64,
    /// Career pitching wins.
    pub w: u32,
    /// Career pitching losses.
    pub l: u32,
    /// Career earned run average.
    pub era: f64,
    /// Career ERA+ (league- and park-adjusted ERA).
    pub era_plus: f64,
    /// Career walks plus hits per inning pitched.
    pub whip: f64,
    /// Career saves.
    pub sv: u32,
    /// Career strikeouts (pitching).
    pub so: u32,
    /// Career innings pitched, decimal-thirds representation.
    pub ip: f64,
    /// Career Wins Above Replacement. May be negative.
    pub war: f64,
    /// All-star game selections.
    pub asg: u32,
    /// Birth year.
    pub born: i32,
    /// Franchise codes the player appeared for.
    pub franchises: Vec<String>,
    /// Whether the player is in the Hall of Fame.
    pub hof: bool,
}
