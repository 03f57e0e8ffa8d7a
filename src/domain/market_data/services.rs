use super::entities::MarketRecord;
use super::value_objects::RecordPolicy;
use derive_more::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum RecordIssueKind {
    #[display(fmt = "{} is not a finite number", field)]
    NonFinite { field: &'static str },
    #[display(fmt = "volume is negative")]
    NegativeVolume,
    #[display(fmt = "high is below low")]
    HighBelowLow,
}

/// A problem found in the record at `index` of the fetched sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[display(fmt = "record {}: {}", index, kind)]
pub struct RecordIssue {
    pub index: usize,
    pub kind: RecordIssueKind,
}

/// Records after the policy was applied, plus everything that was flagged.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SanitizedRecords {
    pub records: Vec<MarketRecord>,
    pub issues: Vec<RecordIssue>,
    pub dropped: usize,
}

/// Доменный сервис для проверки записей перед построением графика
pub struct RecordValidationService;

impl RecordValidationService {
    /// First problem found in `record`, checking fields in chart order.
    pub fn check(record: &MarketRecord) -> Option<RecordIssueKind> {
        let numeric = [
            ("open", record.open),
            ("close", record.close),
            ("low", record.low),
            ("high", record.high),
            ("volume", record.volume),
        ];
        if let Some((field, _)) = numeric.iter().find(|(_, value)| !value.is_finite()) {
            return Some(RecordIssueKind::NonFinite { field: *field });
        }
        if record.volume < 0.0 {
            return Some(RecordIssueKind::NegativeVolume);
        }
        if record.high < record.low {
            return Some(RecordIssueKind::HighBelowLow);
        }
        None
    }

    /// Flag every bad record and, under [`RecordPolicy::Drop`], remove it.
    ///
    /// Surviving records keep their relative order.
    pub fn sanitize(records: Vec<MarketRecord>, policy: RecordPolicy) -> SanitizedRecords {
        let mut issues = Vec::new();
        let mut kept = Vec::with_capacity(records.len());

        for (index, record) in records.into_iter().enumerate() {
            match Self::check(&record) {
                Some(kind) => {
                    issues.push(RecordIssue { index, kind });
                    if policy == RecordPolicy::Keep {
                        kept.push(record);
                    }
                }
                None => kept.push(record),
            }
        }

        let dropped = match policy {
            RecordPolicy::Keep => 0,
            RecordPolicy::Drop => issues.len(),
        };
        SanitizedRecords { records: kept, issues, dropped }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(open: f64, close: f64, high: f64, low: f64, volume: f64) -> MarketRecord {
        MarketRecord::new(1_700_000_000, open, close, high, low, volume)
    }

    #[test]
    fn flags_each_kind() {
        assert_eq!(RecordValidationService::check(&record(1.0, 2.0, 3.0, 0.5, 10.0)), None);
        assert_eq!(
            RecordValidationService::check(&record(1.0, f64::NAN, 3.0, 0.5, 10.0)),
            Some(RecordIssueKind::NonFinite { field: "close" })
        );
        assert_eq!(
            RecordValidationService::check(&record(1.0, 2.0, 3.0, 0.5, -1.0)),
            Some(RecordIssueKind::NegativeVolume)
        );
        assert_eq!(
            RecordValidationService::check(&record(1.0, 2.0, 0.5, 3.0, 1.0)),
            Some(RecordIssueKind::HighBelowLow)
        );
    }

    #[test]
    fn keep_reports_but_preserves() {
        let input = vec![record(1.0, 2.0, 3.0, 0.5, 1.0), record(1.0, 2.0, f64::INFINITY, 0.5, 1.0)];
        let out = RecordValidationService::sanitize(input, RecordPolicy::Keep);
        assert_eq!(out.records.len(), 2);
        assert_eq!(out.dropped, 0);
        assert_eq!(out.issues, vec![RecordIssue { index: 1, kind: RecordIssueKind::NonFinite { field: "high" } }]);
    }

    #[test]
    fn drop_removes_flagged_in_order() {
        let mut a = record(1.0, 2.0, 3.0, 0.5, 1.0);
        a.data_ts = 1;
        let bad = record(1.0, 2.0, 3.0, 0.5, -5.0);
        let mut c = record(2.0, 1.0, 3.0, 0.5, 1.0);
        c.data_ts = 3;

        let out = RecordValidationService::sanitize(vec![a, bad, c], RecordPolicy::Drop);
        assert_eq!(out.dropped, 1);
        assert_eq!(out.records.iter().map(|r| r.data_ts).collect::<Vec<_>>(), vec![1, 3]);
        assert_eq!(out.issues[0].to_string(), "record 1: volume is negative");
    }
}
