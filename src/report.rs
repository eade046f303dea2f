//! Aggregate results of decoding a file of packet lines.

use std::collections::HashMap;
use std::fmt::{Display, Formatter};
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::debug;

use crate::packet::{AprsPacket, PacketData};

/// Number of unidentified data-type identifiers listed by default.
pub const DEFAULT_TOP_UNIDENTIFIED: usize = 5;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum LineStatus {
    Passed { line: String, packet: AprsPacket },
    Failed { line: String, error: String },
}

impl LineStatus {
    /// Decode `line` and record the outcome.
    pub fn check(line: &str, received: DateTime<Utc>) -> Self {
        match AprsPacket::decode(line, received) {
            Ok(packet) => LineStatus::Passed {
                line: line.to_owned(),
                packet,
            },
            Err(e) => {
                debug!(line, error = %e, "failed to decode packet");
                LineStatus::Failed {
                    line: line.to_owned(),
                    error: e.to_string(),
                }
            }
        }
    }

    pub fn line(&self) -> &str {
        match self {
            LineStatus::Passed { line, .. } | LineStatus::Failed { line, .. } => line,
        }
    }

    fn unknown_body(&self) -> Option<&str> {
        match self {
            LineStatus::Passed {
                packet:
                    AprsPacket {
                        data: PacketData::Unknown { body },
                        ..
                    },
                ..
            } => Some(body.as_str()),
            _ => None,
        }
    }
}

/// Count of undecoded packets sharing a leading body character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct IdentifierCount {
    pub identifier: char,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CheckReport {
    pub tests: Vec<LineStatus>,
    #[serde(serialize_with = "serialize_millis")]
    pub elapsed: Duration,
}

impl CheckReport {
    /// Decode every non-blank line of `input`, all stamped with `received`.
    pub fn from_lines(input: &str, received: DateTime<Utc>) -> Self {
        let started = std::time::Instant::now();
        let tests = input
            .lines()
            .map(str::trim_end)
            .filter(|line| !line.is_empty())
            .map(|line| LineStatus::check(line, received))
            .collect();

        CheckReport {
            tests,
            elapsed: started.elapsed(),
        }
    }

    pub fn passed(&self) -> usize {
        self.tests
            .iter()
            .filter(|status| matches!(status, LineStatus::Passed { .. }))
            .count()
    }

    pub fn failed(&self) -> usize {
        self.tests
            .iter()
            .filter(|status| matches!(status, LineStatus::Failed { .. }))
            .count()
    }

    /// Lines that decoded, but to a data type this crate does not interpret.
    pub fn unknown(&self) -> usize {
        self.tests
            .iter()
            .filter(|status| status.unknown_body().is_some())
            .count()
    }

    /// Unknown packets grouped by their first body character, most common
    /// first. Equal counts are ordered by identifier.
    pub fn unidentified_identifiers(&self) -> Vec<IdentifierCount> {
        let mut counts: HashMap<char, usize> = HashMap::new();
        for identifier in self
            .tests
            .iter()
            .filter_map(LineStatus::unknown_body)
            .filter_map(|body| body.chars().next())
        {
            *counts.entry(identifier).or_default() += 1;
        }

        let mut counts: Vec<IdentifierCount> = counts
            .into_iter()
            .map(|(identifier, count)| IdentifierCount { identifier, count })
            .collect();
        counts.sort_by(|a, b| b.count.cmp(&a.count).then(a.identifier.cmp(&b.identifier)));
        counts
    }

    pub fn top_unidentified(&self, n: usize) -> Vec<IdentifierCount> {
        let mut counts = self.unidentified_identifiers();
        counts.truncate(n);
        counts
    }

    pub fn failures(&self) -> impl Iterator<Item = (&str, &str)> {
        self.tests.iter().filter_map(|status| match status {
            LineStatus::Failed { line, error } => Some((line.as_str(), error.as_str())),
            LineStatus::Passed { .. } => None,
        })
    }

    pub fn summary(&self, top: usize) -> CheckSummary<'_> {
        CheckSummary {
            total: self.tests.len(),
            passed: self.passed(),
            failed: self.failed(),
            unknown: self.unknown(),
            elapsed_ms: u64::try_from(self.elapsed.as_millis()).unwrap_or(u64::MAX),
            top_unidentified: self.top_unidentified(top),
            failures: self
                .failures()
                .map(|(line, error)| Failure { line, error })
                .collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Failure<'a> {
    pub line: &'a str,
    pub error: &'a str,
}

/// Counts and failures of a [`CheckReport`], without the decoded packets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckSummary<'a> {
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    pub unknown: usize,
    pub elapsed_ms: u64,
    pub top_unidentified: Vec<IdentifierCount>,
    pub failures: Vec<Failure<'a>>,
}

impl Display for CheckSummary<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for failure in &self.failures {
            writeln!(f, "FAILED {}", failure.line)?;
            writeln!(f, "    {}", failure.error)?;
        }
        writeln!(f, "Passed:  {}/{}", self.passed, self.total)?;
        writeln!(f, "Failed:  {}/{}", self.failed, self.total)?;
        writeln!(f, "Unknown: {}/{}", self.unknown, self.total)?;
        if !self.top_unidentified.is_empty() {
            writeln!(f, "Top unidentified data types:")?;
            for entry in &self.top_unidentified {
                writeln!(f, "    '{}': {}", entry.identifier, entry.count)?;
            }
        }
        write!(f, "Completed in {}ms", self.elapsed_ms)
    }
}

fn serialize_millis<S: serde::Serializer>(
    elapsed: &Duration,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.serialize_u64(u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    const SAMPLE: &str = "\
N0CALL-5>APRS:!4903.50N/07201.75W-Test
N0CALL-5>APRS:T#005,199,000,255,073,123,01101001
N0CALL-6>APRS:T#006,199,000,255,073,123,01101001
N0CALL-7>APRS:_10090556c220s004g005t077
N0CALL-8>APRS:!4903.50N/0720

not a packet
N0CALL-9>APRS:>Net Control
";

    fn report() -> CheckReport {
        CheckReport::from_lines(SAMPLE, Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap())
    }

    #[test]
    fn counts() {
        let report = report();
        assert_eq!(report.tests.len(), 7);
        assert_eq!(report.passed(), 5);
        assert_eq!(report.failed(), 2);
        assert_eq!(report.unknown(), 3);
    }

    #[test]
    fn unidentified_sorted_by_count() {
        assert_eq!(
            report().unidentified_identifiers(),
            vec![
                IdentifierCount {
                    identifier: 'T',
                    count: 2,
                },
                IdentifierCount {
                    identifier: '_',
                    count: 1,
                },
            ]
        );
    }

    #[test]
    fn top_unidentified_truncates() {
        let report = report();
        assert_eq!(report.top_unidentified(1).len(), 1);
        assert_eq!(report.top_unidentified(1)[0].identifier, 'T');
        assert_eq!(report.top_unidentified(DEFAULT_TOP_UNIDENTIFIED).len(), 2);
    }

    #[test]
    fn failures_keep_their_lines() {
        let report = report();
        let failures: Vec<&str> = report.failures().map(|(line, _)| line).collect();
        assert_eq!(failures, vec!["N0CALL-8>APRS:!4903.50N/0720", "not a packet"]);
    }

    #[test]
    fn empty_input() {
        let report = CheckReport::from_lines("", Utc::now());
        assert_eq!(report.passed(), 0);
        assert_eq!(report.failed(), 0);
        assert!(report.unidentified_identifiers().is_empty());
    }

    #[test]
    fn summary_text() {
        let report = report();
        let summary = report.summary(1);
        assert_eq!(summary.total, 7);
        assert_eq!(summary.failures.len(), 2);

        let text = summary.to_string();
        assert!(text.starts_with("FAILED N0CALL-8>APRS:!4903.50N/0720\n"));
        assert!(text.contains("Passed:  5/7\n"));
        assert!(text.contains("Unknown: 3/7\n"));
        assert!(text.contains("    'T': 2\n"));
        assert!(!text.contains("'_'"));
    }

    #[test]
    fn serializes_status_tag() {
        let json = serde_json::to_value(report()).unwrap();
        assert_eq!(json["tests"][0]["status"], "passed");
        assert_eq!(json["tests"][4]["status"], "failed");
    }
}
