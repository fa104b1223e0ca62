// Rust guideline compliant 2026-02-06

//! Locale tags carried on envelopes.

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Language the messages of an envelope are written in.
///
/// This is a tag for client-side localization only; nothing in this crate
/// translates messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Locale {
    /// Localization is not defined.
    Undefined = 0,
    /// Russian.
    #[default]
    Rus = 1,
    /// Kyrgyz.
    Kyr = 2,
    /// English.
    Eng = 3,
}

impl Locale {
    /// All locales in code order.
    pub const ALL: [Locale; 4] = [Locale::Undefined, Locale::Rus, Locale::Kyr, Locale::Eng];

    /// Returns the numeric wire code.
    #[must_use]
    pub fn code(self) -> u8 {
        self as u8
    }

    /// Returns the variant name used by the name wire encoding.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Locale::Undefined => "Undefined",
            Locale::Rus => "Rus",
            Locale::Kyr => "Kyr",
            Locale::Eng => "Eng",
        }
    }

    /// Looks up a locale by its numeric code.
    #[must_use]
    pub fn from_code(code: u64) -> Option<Self> {
        Self::ALL.into_iter().find(|locale| u64::from(locale.code()) == code)
    }

    /// Looks up a locale by name, ignoring ASCII case.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|locale| locale.name().eq_ignore_ascii_case(name))
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Locale {
    type Err = crate::Error;

    /// Parses either a variant name (`"eng"`, `"Rus"`) or a numeric code (`"3"`).
    fn from_str(s: &str) -> crate::Result<Self> {
        let trimmed = s.trim();
        let parsed = match trimmed.parse::<u64>() {
            Ok(code) => Self::from_code(code),
            Err(_) => Self::from_name(trimmed),
        };
        parsed.ok_or_else(|| crate::Error::invalid_argument(format!("unknown locale '{}'", s)))
    }
}

/// How a [`Locale`] is written on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum LocaleEncoding {
    /// The numeric code (`0..=3`).
    #[default]
    Numeric,
    /// The variant name (`"Rus"`).
    Name,
}

impl FromStr for LocaleEncoding {
    type Err = crate::Error;

    fn from_str(s: &str) -> crate::Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "numeric" => Ok(LocaleEncoding::Numeric),
            "name" => Ok(LocaleEncoding::Name),
            other => Err(crate::Error::invalid_argument(format!(
                "locale encoding must be numeric or name, got '{}'",
                other
            ))),
        }
    }
}

/// A locale paired with the encoding to write it in.
#[derive(Debug, Clone, Copy)]
pub(crate) struct EncodedLocale {
    pub(crate) locale: Locale,
    pub(crate) encoding: LocaleEncoding,
}

impl Serialize for EncodedLocale {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.encoding {
            LocaleEncoding::Numeric => serializer.serialize_u8(self.locale.code()),
            LocaleEncoding::Name => serializer.serialize_str(self.locale.name()),
        }
    }
}

impl Serialize for Locale {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.code())
    }
}

impl<'de> Deserialize<'de> for Locale {
    /// Accepts both wire encodings.
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(LocaleVisitor)
    }
}

struct LocaleVisitor;

impl<'de> Visitor<'de> for LocaleVisitor {
    type Value = Locale;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a locale code 0-3 or one of Undefined, Rus, Kyr, Eng")
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Locale, E> {
        Locale::from_code(v).ok_or_else(|| E::custom(format!("unknown locale code {}", v)))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Locale, E> {
        u64::try_from(v)
            .ok()
            .and_then(Locale::from_code)
            .ok_or_else(|| E::custom(format!("unknown locale code {}", v)))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Locale, E> {
        Locale::from_name(v).ok_or_else(|| E::custom(format!("unknown locale name '{}'", v)))
    }
}
