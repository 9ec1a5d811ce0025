//! Custom serde helpers for API wire formats.

/// Deserializes `[[timestamp, value], ...]` into `(millis, value)` pairs.
///
/// The API encodes timestamps as JSON numbers that are sometimes written with a
/// fractional part. A missing or `null` array yields an empty vec.
///
/// Entries keep their index: a missing or `null` value becomes `NaN` so the
/// point still occupies its slot. An entry without a usable timestamp (absent,
/// non-finite, or outside the representable date range) fails the whole
/// payload, since dropping it would shift every later index.
pub mod series_pairs {
    use serde::de::Error as _;
    use serde::ser::SerializeSeq;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Vec<(i64, f64)>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<Vec<Vec<Option<f64>>>>::deserialize(deserializer)?;
        let raw = raw.unwrap_or_default();

        let mut missing = 0usize;
        let mut pairs = Vec::with_capacity(raw.len());
        for (index, entry) in raw.into_iter().enumerate() {
            let timestamp = entry
                .first()
                .copied()
                .flatten()
                .and_then(timestamp_ms)
                .ok_or_else(|| {
                    D::Error::custom(format!("series entry {index} has no valid timestamp"))
                })?;
            let value = match entry.get(1).copied().flatten() {
                Some(v) => v,
                None => {
                    missing += 1;
                    f64::NAN
                }
            };
            pairs.push((timestamp, value));
        }

        if missing > 0 {
            tracing::debug!(missing, "Series entries without a value kept as NaN");
        }
        Ok(pairs)
    }

    /// Whole milliseconds, if the instant is one chrono can represent.
    pub(crate) fn timestamp_ms(t: f64) -> Option<i64> {
        if !t.is_finite() || t < i64::MIN as f64 || t >= i64::MAX as f64 {
            return None;
        }
        let ms = t as i64;
        chrono::DateTime::from_timestamp_millis(ms).map(|_| ms)
    }

    pub fn serialize<S>(pairs: &[(i64, f64)], serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut seq = serializer.serialize_seq(Some(pairs.len()))?;
        for (t, v) in pairs {
            seq.serialize_element(&(*t, *v))?;
        }
        seq.end()
    }
}
