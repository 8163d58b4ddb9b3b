use serde_json::Value;

use business::domain::recommendation::model::Preference;

/// Body of `POST /recommend`: `{ "preference": "..." }`.
///
/// Read leniently: invalid JSON, a missing field, or a non-string value all
/// yield an empty preference instead of a rejected request.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct RecommendRequest {
    pub preference: Preference,
}

impl RecommendRequest {
    pub fn from_body(body: &[u8]) -> Self {
        let preference = serde_json::from_slice::<Value>(body)
            .ok()
            .and_then(|value| {
                value
                    .get("preference")
                    .and_then(Value::as_str)
                    .map(Preference::new)
            })
            .unwrap_or_default();

        Self { preference }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_read_and_normalize_preference() {
        let request = RecommendRequest::from_body(br#"{"preference": " Phones under $500 "}"#);

        assert_eq!(request.preference.as_str(), "phones under $500");
    }

    #[test]
    fn should_default_to_empty_preference_on_malformed_body() {
        let bodies: [&[u8]; 6] = [
            b"",
            b"not json",
            b"[1, 2, 3]",
            br#"{"other": "field"}"#,
            br#"{"preference": 42}"#,
            br#"{"preference": null}"#,
        ];

        for body in bodies {
            assert_eq!(RecommendRequest::from_body(body), RecommendRequest::default());
        }
    }
}
