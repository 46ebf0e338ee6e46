use serde::{Deserialize, Deserializer};

// browsers send ids taken from object keys, so "3" and 3 both show up
#[derive(Deserialize)]
#[serde(untagged)]
enum LenientI64 {
    Int(i64),
    Str(String),
}

impl TryFrom<LenientI64> for i64 {
    type Error = String;

    fn try_from(value: LenientI64) -> Result<Self, Self::Error> {
        match value {
            LenientI64::Int(v) => Ok(v),
            LenientI64::Str(s) => s
                .trim()
                .parse::<i64>()
                .map_err(|_| format!("Wrong value {s}, can not parse to i64")),
        }
    }
}

pub fn deserialize_lenient_i64<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = LenientI64::deserialize(deserializer)?;
    i64::try_from(value).map_err(serde::de::Error::custom)
}

/// A missing or null list is empty.
pub fn deserialize_lenient_i64_list<'de, D>(deserializer: D) -> Result<Vec<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let values = Option::<Vec<LenientI64>>::deserialize(deserializer)?;
    values
        .unwrap_or_default()
        .into_iter()
        .map(|v| i64::try_from(v).map_err(serde::de::Error::custom))
        .collect()
}

/// Reads an integer out of a loose JSON value: numbers, or strings holding one.
pub fn lenient_i64(value: &serde_json::Value) -> Option<i64> {
    match value {
        serde_json::Value::Number(n) => n.as_i64(),
        serde_json::Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Deserialize)]
    struct Ids {
        #[serde(default, deserialize_with = "deserialize_lenient_i64_list")]
        ids: Vec<i64>,
    }

    #[test]
    fn null_list_is_empty() {
        let ids: Ids = serde_json::from_value(json!({"ids": null})).unwrap();
        assert!(ids.ids.is_empty());
    }

    #[test]
    fn garbage_in_list_is_rejected() {
        assert!(serde_json::from_value::<Ids>(json!({"ids": ["x"]})).is_err());
    }

    #[test]
    fn lenient_i64_reads_numbers_and_numeric_strings() {
        assert_eq!(lenient_i64(&json!(5)), Some(5));
        assert_eq!(lenient_i64(&json!(" 12 ")), Some(12));
        assert_eq!(lenient_i64(&json!("hard")), None);
        assert_eq!(lenient_i64(&json!(2.5)), None);
        assert_eq!(lenient_i64(&json!(true)), None);
    }
}
