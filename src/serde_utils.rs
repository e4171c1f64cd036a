/// Serde utility functions for common patterns
use serde::{Deserialize, Deserializer, Serializer};
use std::time::Duration;

/// (De)serialize a [`Duration`] as whole milliseconds.
///
/// Notification timeouts travel as plain integers (`"timeout": 5000`), the
/// unit UI toolkits expect.
///
/// Usage:
/// ```ignore
/// use serde::{Deserialize, Serialize};
/// use std::time::Duration;
///
/// #[derive(Serialize, Deserialize)]
/// struct Example {
///     #[serde(with = "crate::serde_utils::duration_millis")]
///     timeout: Duration,
/// }
/// ```
pub mod duration_millis {
    use super::*;

    pub fn serialize<S>(duration: &Duration, ser: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let millis = u64::try_from(duration.as_millis()).unwrap_or(u64::MAX);
        ser.serialize_u64(millis)
    }

    pub fn deserialize<'de, D>(de: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        u64::deserialize(de).map(Duration::from_millis)
    }
}

#[cfg(test)]
mod tests {
    use serde::{Deserialize, Serialize};
    use std::time::Duration;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Timed {
        #[serde(with = "super::duration_millis")]
        timeout: Duration,
    }

    #[test]
    fn test_duration_serializes_as_millis() {
        let json = serde_json::to_string(&Timed {
            timeout: Duration::from_secs(5),
        })
        .unwrap();
        assert_eq!(json, r#"{"timeout":5000}"#);
    }

    #[test]
    fn test_duration_deserializes_from_millis() {
        let timed: Timed = serde_json::from_str(r#"{"timeout":250}"#).unwrap();
        assert_eq!(timed.timeout, Duration::from_millis(250));
    }
}
