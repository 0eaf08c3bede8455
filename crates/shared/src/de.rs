//! Tolerant field decoders for backend payloads.
//!
//! The WordPress backend sends `null` for unset meta and often sends
//! numbers as strings. One odd field must not fail the whole record.

use std::str::FromStr;

use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrText<T> {
    Number(T),
    Text(String),
}

/// `null` decodes as `T::default()`.
pub fn or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// A number, a numeric string or `null`. Anything unparseable is zero.
pub fn number<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + FromStr + Deserialize<'de>,
{
    Ok(opt_number(deserializer)?.unwrap_or_default())
}

/// Like [`number`], but `null`, `""` and unparseable text are `None`.
pub fn opt_number<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr + Deserialize<'de>,
{
    Ok(
        match Option::<NumberOrText<T>>::deserialize(deserializer)? {
            Some(NumberOrText::Number(n)) => Some(n),
            Some(NumberOrText::Text(s)) => s.trim().parse().ok(),
            None => None,
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Default, Deserialize, PartialEq)]
    #[serde(default)]
    struct Sample {
        #[serde(deserialize_with = "or_default")]
        name: String,
        #[serde(deserialize_with = "number")]
        price: f64,
        #[serde(deserialize_with = "number")]
        count: u64,
        #[serde(deserialize_with = "opt_number")]
        height: Option<u32>,
    }

    #[test]
    fn nulls_fall_back_to_defaults() {
        let s: Sample =
            serde_json::from_str(r#"{"name":null,"price":null,"count":null,"height":null}"#)
                .unwrap();
        assert_eq!(s, Sample::default());
    }

    #[test]
    fn numeric_strings_are_parsed() {
        let s: Sample =
            serde_json::from_str(r#"{"price":"250.5","count":"12","height":"165"}"#).unwrap();
        assert_eq!(s.price, 250.5);
        assert_eq!(s.count, 12);
        assert_eq!(s.height, Some(165));
    }

    #[test]
    fn junk_numbers_do_not_fail_the_record() {
        let s: Sample =
            serde_json::from_str(r#"{"name":"Ana","price":"","height":"alta"}"#).unwrap();
        assert_eq!(s.name, "Ana");
        assert_eq!(s.price, 0.0);
        assert_eq!(s.height, None);
    }

    #[test]
    fn missing_fields_use_struct_default() {
        let s: Sample = serde_json::from_str("{}").unwrap();
        assert_eq!(s, Sample::default());
    }
}
