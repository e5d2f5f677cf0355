use crate::scoring::risk::RiskReport;
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Append-only CSV log of scored submissions.
///
/// The header row is written the first time the file is created; every
/// scored session appends one row stamped with wall-clock Unix milliseconds.
pub struct ScoreLog {
    path: PathBuf,
}

const HEADER: &str = "ts_ms,user_id,risk_pct,decision,dwell_mean,flight_mean,error_rate,mouse_speed_p95,gesture_entropy";

impl ScoreLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one scored submission.
    pub fn append(&self, user_id: &str, report: &RiskReport) -> io::Result<()> {
        let write_header = !self.path.exists();

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        if write_header {
            writeln!(file, "{}", HEADER)?;
        }
        writeln!(
            file,
            "{},{},{:.2},{},{},{},{},{},{}",
            chrono::Utc::now().timestamp_millis(),
            user_id,
            report.risk_pct,
            report.decision,
            report.features.dwell_mean,
            report.features.flight_mean,
            report.features.error_rate,
            report.features.mouse_speed_p95,
            report.features.gesture_entropy,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::risk::RiskReport;

    #[test]
    fn test_header_written_once_then_rows_accumulate() {
        let dir = tempfile::tempdir().unwrap();
        let log = ScoreLog::new(dir.path().join("scores.csv"));
        let report = RiskReport::from_events(&[]);

        log.append("alice", &report).unwrap();
        log.append("bob", &report).unwrap();

        let contents = std::fs::read_to_string(log.path()).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], HEADER);
        assert!(lines[1].contains(",alice,"));
        assert!(lines[2].contains(",bob,"));
        assert!(lines[1].contains(",ALLOW,"));
    }

    #[test]
    fn test_row_carries_rounded_risk() {
        let dir = tempfile::tempdir().unwrap();
        let log = ScoreLog::new(dir.path().join("scores.csv"));

        let events = vec![
            crate::capture::types::InputEvent::Down {
                t: 0.0,
                k: "a".to_string(),
            },
            crate::capture::types::InputEvent::Up {
                t: 100.0,
                k: "a".to_string(),
            },
        ];
        let report = RiskReport::from_events(&events);
        log.append("carol", &report).unwrap();

        let contents = std::fs::read_to_string(log.path()).unwrap();
        assert!(contents.lines().nth(1).unwrap().contains(",11.67,"));
    }
}
