use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Serialize, Serializer};

/// Wall-clock instant attached to every response.
///
/// Serializes as an RFC 3339 UTC string with microsecond precision,
/// e.g. `2024-01-01T00:00:00.000000Z`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// Reads the system clock.
    pub fn now() -> Self {
        Self(Utc::now())
    }

    #[cfg(test)]
    pub(crate) fn as_datetime(&self) -> DateTime<Utc> {
        self.0
    }

    #[cfg(test)]
    pub(crate) fn from_datetime(dt: DateTime<Utc>) -> Self {
        Self(dt)
    }
}

impl std::fmt::Display for Timestamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0.to_rfc3339_opts(SecondsFormat::Micros, true))
    }
}

impl Serialize for Timestamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
