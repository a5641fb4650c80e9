//! Port for the append-only request access log.
//!
//! Recording is fire-and-forget: implementations hand the entry off and
//! return immediately. A failure is reported to the caller for logging but
//! must never fail the request being recorded.

use chrono::{DateTime, SecondsFormat, Utc};

use super::define_port_error;

define_port_error! {
    /// Errors raised when handing an entry to the access log.
    pub enum AccessLogError {
        /// The background writer has stopped accepting entries.
        Closed { message: String } => "access log closed: {message}",
    }
}

/// One request as it appears in the access log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessLogEntry {
    /// Arrival time of the request.
    pub at: DateTime<Utc>,
    /// HTTP method, upper case.
    pub method: String,
    /// Request path including any query string.
    pub target: String,
}

impl AccessLogEntry {
    /// Render the entry as `[<ISO-8601 UTC, milliseconds>] METHOD target`.
    ///
    /// # Examples
    /// ```
    /// use chrono::{TimeZone, Utc};
    /// use taskboard::domain::ports::AccessLogEntry;
    ///
    /// let entry = AccessLogEntry {
    ///     at: Utc.with_ymd_and_hms(2025, 12, 20, 9, 30, 0).unwrap(),
    ///     method: "GET".into(),
    ///     target: "/api/tasks?mode=or".into(),
    /// };
    /// assert_eq!(entry.line(), "[2025-12-20T09:30:00.000Z] GET /api/tasks?mode=or");
    /// ```
    pub fn line(&self) -> String {
        format!(
            "[{}] {} {}",
            self.at.to_rfc3339_opts(SecondsFormat::Millis, true),
            self.method,
            self.target
        )
    }
}

/// Destination for access log entries.
#[cfg_attr(test, mockall::automock)]
pub trait AccessLogSink: Send + Sync {
    /// Queue `entry` for writing.
    fn record(&self, entry: AccessLogEntry) -> Result<(), AccessLogError>;
}

/// Sink that discards every entry.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoOpAccessLog;

impl AccessLogSink for NoOpAccessLog {
    fn record(&self, _entry: AccessLogEntry) -> Result<(), AccessLogError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rstest::rstest;

    #[rstest]
    #[case("/api/categories", "[2025-12-21T23:59:59.123Z] POST /api/categories")]
    #[case("/api/tasks?completed=1", "[2025-12-21T23:59:59.123Z] POST /api/tasks?completed=1")]
    fn line_uses_millisecond_utc_timestamps(#[case] target: &str, #[case] expected: &str) {
        let at = Utc
            .with_ymd_and_hms(2025, 12, 21, 23, 59, 59)
            .single()
            .expect("valid timestamp")
            + chrono::Duration::milliseconds(123);
        let entry = AccessLogEntry {
            at,
            method: "POST".to_owned(),
            target: target.to_owned(),
        };
        assert_eq!(entry.line(), expected);
    }

    #[rstest]
    fn no_op_sink_accepts_entries() {
        let entry = AccessLogEntry {
            at: Utc::now(),
            method: "GET".to_owned(),
            target: "/".to_owned(),
        };
        assert!(NoOpAccessLog.record(entry).is_ok());
    }
}
