//! CSV loading for per-day player tables.

use std::io::Read;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::{debug, info, warn};

use dugout_calendar::{Doy, MONTH_NAMES};
use dugout_innings::outs_to_thirds;

use crate::bucket::{DayBuckets, NUM_DAYS};
use crate::error::IoError;
use crate::record::PlayerRecord;
use crate::validate;

/// Raw CSV row as written by the extraction step.
///
/// Every numeric column is optional so that blank cells (players with no
/// pitching line, no batting line, ...) default to zero instead of
/// failing the row.
#[derive(Debug, Deserialize)]
struct RawRecord {
    #[serde(rename = "Name")]
    name: String,
    #[serde(rename = "Years", default)]
    years: Option<u32>,
    #[serde(rename = "G_bat", default)]
    g_bat: Option<u32>,
    #[serde(rename = "G_pit", default)]
    g_pit: Option<u32>,
    #[serde(rename = "AB", default)]
    ab: Option<u32>,
    #[serde(rename = "R", default)]
    r: Option<u32>,
    #[serde(rename = "H", default)]
    h: Option<u32>,
    #[serde(rename = "HR", default)]
    hr: Option<u32>,
    #[serde(rename = "RBI", default)]
    rbi: Option<u32>,
    #[serde(rename = "SB", default)]
    sb: Option<u32>,
    #[serde(rename = "BB", default)]
    bb: Option<u32>,
    #[serde(rename = "BA", default)]
    ba: Option<f64>,
    #[serde(rename = "OBP", default)]
    obp: Option<f64>,
    #[serde(rename = "SLG", default)]
    slg: Option<f64>,
    #[serde(rename = "OPS", default)]
    ops: Option<f64>,
    #[serde(rename = "OPS+", default)]
    ops_plus: Option<f64>,
    #[serde(rename = "W", default)]
    w: Option<u32>,
    #[serde(rename = "L", default)]
    l: Option<u32>,
    #[serde(rename = "ERA", default)]
    era: Option<f64>,
    #[serde(rename = "ERA+", default)]
    era_plus: Option<f64>,
    #[serde(rename = "WHIP", default)]
    whip: Option<f64>,
    #[serde(rename = "SV", default)]
    sv: Option<u32>,
    #[serde(rename = "SO", default)]
    so: Option<u32>,
    /// Innings pitched in outs notation (.1 = one out, .2 = two outs).
    #[serde(rename = "IP", default)]
    ip: Option<f64>,
    #[serde(rename = "WAR", default)]
    war: Option<f64>,
    #[serde(rename = "ASG", default)]
    asg: Option<u32>,
    #[serde(rename = "Born", default)]
    born: Option<i32>,
    #[serde(rename = "Franchises", default)]
    franchises: Option<String>,
    #[serde(rename = "HOF", default)]
    hof: Option<String>,
}

impl RawRecord {
    /// Converts the raw row into a [`PlayerRecord`], translating the IP
    /// column from outs notation to decimal thirds.
    fn into_record(self) -> PlayerRecord {
        let franchises = self
            .franchises
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect();

        PlayerRecord {
            name: self.name.trim().to_string(),
            years: self.years.unwrap_or(0),
            g_bat: self.g_bat.unwrap_or(0),
            g_pit: self.g_pit.unwrap_or(0),
            ab: self.ab.unwrap_or(0),
            r: self.r.unwrap_or(0),
            h: self.h.unwrap_or(0),
            hr: self.hr.unwrap_or(0),
            rbi: self.rbi.unwrap_or(0),
            sb: self.sb.unwrap_or(0),
            bb: self.bb.unwrap_or(0),
            ba: self.ba.unwrap_or(0.0),
            obp: self.obp.unwrap_or(0.0),
            slg: self.slg.unwrap_or(0.0),
            ops: self.ops.unwrap_or(0.0),
            ops_plus: self.ops_plus.unwrap_or(0.0),
            w: self.w.unwrap_or(0),
            l: self.l.unwrap_or(0),
            era: self.era.unwrap_or(0.0),
            era_plus: self.era_plus.unwrap_or(0.0),
            whip: self.whip.unwrap_or(0.0),
            sv: self.sv.unwrap_or(0),
            so: self.so.unwrap_or(0),
            ip: outs_to_thirds(self.ip.unwrap_or(0.0)),
            war: self.war.unwrap_or(0.0),
            asg: self.asg.unwrap_or(0),
            born: self.born.unwrap_or(0),
            franchises,
            hof: self.hof.is_some_and(|s| !s.trim().is_empty()),
        }
    }
}

/// Reads player records from any CSV reader.
///
/// Malformed rows are skipped with a warning; rows whose IP column is
/// not outs notation are accumulated into a single validation error
/// (they must be rejected before conversion, which would otherwise turn
/// them into plausible-looking thirds).
fn read_records<R: Read>(rdr: R) -> Result<Vec<PlayerRecord>, IoError> {
    let mut reader = csv::Reader::from_reader(rdr);
    let mut raws = Vec::new();
    for result in reader.deserialize::<RawRecord>() {
        match result {
            Ok(raw) => raws.push(raw),
            Err(e) => warn!("skipping malformed player row: {e}"),
        }
    }

    let mut collector = validate::ValidationCollector::new();
    for raw in &raws {
        validate::check_outs_notation(&mut collector, &raw.name, raw.ip.unwrap_or(0.0));
    }
    collector.finish()?;

    Ok(raws.into_iter().map(RawRecord::into_record).collect())
}

/// Returns the conventional path of one calendar day's CSV file:
/// `<dir>/<MonthName>/<MonthName>_<DD>.csv`.
pub fn day_csv_path(dir: &Path, doy: Doy) -> PathBuf {
    let (month, day) = doy.month_day();
    let month_name = MONTH_NAMES[(month - 1) as usize];
    dir.join(month_name).join(format!("{month_name}_{day:02}.csv"))
}

/// Loads and validates one calendar day's player table.
///
/// # Errors
///
/// Returns [`IoError::FileNotFound`] when the file is missing,
/// [`IoError::Csv`] on a reader failure, and [`IoError::Validation`]
/// when a loaded record carries an impossible innings-pitched fraction.
pub fn load_day_csv(path: &Path) -> Result<Vec<PlayerRecord>, IoError> {
    let file = std::fs::File::open(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            IoError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            IoError::Csv {
                path: path.to_path_buf(),
                reason: e.to_string(),
            }
        }
    })?;

    let records = read_records(file)?;

    debug!(path = %path.display(), n = records.len(), "day table loaded");
    Ok(records)
}

/// Loads all 366 per-day tables from `<dir>` into a [`DayBuckets`].
///
/// Every calendar day must have its file except February 29, which may
/// be absent entirely (datasets scraped without a leap-day table); its
/// bucket is then left empty so the leap slot is still addressable.
///
/// # Errors
///
/// Returns the first per-day loading error encountered, or
/// [`IoError::FileNotFound`] for any missing non-leap-day file.
pub fn load_buckets(dir: &Path) -> Result<DayBuckets, IoError> {
    let feb29 = Doy::from_month_day(2, 29)?;
    let mut days = Vec::with_capacity(NUM_DAYS);

    for index in 0..NUM_DAYS {
        let doy = Doy::from_index(index)?;
        let path = day_csv_path(dir, doy);
        match load_day_csv(&path) {
            Ok(records) => days.push(records),
            Err(IoError::FileNotFound { .. }) if doy == feb29 => {
                info!("no February 29 table, leaving the leap slot empty");
                days.push(Vec::new());
            }
            Err(e) => return Err(e),
        }
    }

    let buckets = DayBuckets::new(days)?;
    info!(
        total = buckets.total_records(),
        "loaded player records for all 366 calendar days"
    );
    Ok(buckets)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const HEADER: &str = "Name,Years,G_bat,G_pit,AB,R,H,HR,RBI,SB,BB,BA,OBP,SLG,OPS,OPS+,W,L,ERA,ERA+,WHIP,SV,SO,IP,WAR,Born,Franchises,HOF";

    #[test]
    fn full_row_parses() {
        let csv_data = format!(
            "{HEADER}\n\
             Babe Ruth,22,2504,163,8399,2174,2873,714,2214,123,2062,0.342,0.474,0.690,1.164,206,94,46,2.28,122,1.159,4,488,1221.1,182.6,1895,\"BOS,NYY\",HOF"
        );
        let records = read_records(csv_data.as_bytes()).unwrap();
        assert_eq!(records.len(), 1);

        let r = &records[0];
        assert_eq!(r.name, "Babe Ruth");
        assert_eq!(r.hr, 714);
        assert_eq!(r.ab, 8399);
        assert_eq!(r.born, 1895);
        assert_eq!(r.franchises, vec!["BOS".to_string(), "NYY".to_string()]);
        assert!(r.hof);
        // 1221.1 in outs notation = 1221 1/3 innings.
        assert_relative_eq!(r.ip, 1221.0 + 1.0 / 3.0, epsilon = 1e-9);
        assert_relative_eq!(r.war, 182.6, epsilon = 1e-12);
    }

    #[test]
    fn blank_cells_default_to_zero() {
        let csv_data = format!(
            "{HEADER}\n\
             Bench Player,3,,,,,,,,,,,,,,,,,,,,,,,,1950,,"
        );
        let records = read_records(csv_data.as_bytes()).unwrap();
        assert_eq!(records.len(), 1);

        let r = &records[0];
        assert_eq!(r.hr, 0);
        assert_eq!(r.ab, 0);
        assert_relative_eq!(r.ip, 0.0, epsilon = 1e-12);
        assert!(!r.hof);
        assert!(r.franchises.is_empty());
    }

    #[test]
    fn malformed_rows_are_skipped() {
        let csv_data = format!(
            "{HEADER}\n\
             Good Player,5,10,0,20,1,5,1,2,0,3,0.250,0.300,0.400,0.700,95,0,0,0.0,0,0.0,0,0,0.0,1.0,1960,BOS,\n\
             Bad Player,not_a_number,10,0,20,1,5,1,2,0,3,0.250,0.300,0.400,0.700,95,0,0,0.0,0,0.0,0,0,0.0,1.0,1960,BOS,\n\
             Also Good,5,10,0,20,1,5,1,2,0,3,0.250,0.300,0.400,0.700,95,0,0,0.0,0,0.0,0,0,0.0,1.0,1961,NYY,"
        );
        let records = read_records(csv_data.as_bytes()).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].name, "Good Player");
        assert_eq!(records[1].name, "Also Good");
    }

    #[test]
    fn header_only_yields_empty() {
        let records = read_records(HEADER.as_bytes()).unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn day_csv_path_layout() {
        let doy = Doy::from_month_day(2, 9).unwrap();
        let path = day_csv_path(Path::new("Data"), doy);
        assert_eq!(path, PathBuf::from("Data/February/February_09.csv"));

        let dec31 = Doy::from_month_day(12, 31).unwrap();
        let path = day_csv_path(Path::new("Data"), dec31);
        assert_eq!(path, PathBuf::from("Data/December/December_31.csv"));
    }

    #[test]
    fn load_day_csv_missing_file() {
        let err = load_day_csv(Path::new("/nonexistent/never.csv")).unwrap_err();
        assert!(matches!(err, IoError::FileNotFound { .. }));
    }

    #[test]
    fn load_day_csv_rejects_bad_ip_fraction() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.csv");
        // IP of 3.7 is not outs notation: fraction must be .0/.1/.2.
        std::fs::write(
            &path,
            format!("{HEADER}\nBad Arm,1,0,1,0,0,0,0,0,0,0,0,0,0,0,0,0,1,9.0,50,2.0,0,1,3.7,-0.5,1970,SD,\n"),
        )
        .unwrap();

        let err = load_day_csv(&path).unwrap_err();
        assert!(matches!(err, IoError::Validation { .. }));
    }
}
