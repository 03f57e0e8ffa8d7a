use serde::{Deserialize, Deserializer, Serialize, Serializer};
use strum::{AsRefStr, Display as StrumDisplay, EnumIter, EnumString};

/// Value Object - направление бара: закрылся выше открытия или нет
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, StrumDisplay, EnumIter, EnumString, AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
}

impl Direction {
    /// `Up` only when `close > open`; a flat bar (and any NaN) counts as `Down`.
    pub fn of(open: f64, close: f64) -> Self {
        if close > open { Direction::Up } else { Direction::Down }
    }

    /// Sign used as the third volume-bar dimension by the chart's visual map.
    pub fn sign(self) -> i8 {
        match self {
            Direction::Up => 1,
            Direction::Down => -1,
        }
    }

    pub fn from_sign(sign: i8) -> Option<Self> {
        match sign {
            1 => Some(Direction::Up),
            -1 => Some(Direction::Down),
            _ => None,
        }
    }
}

impl Serialize for Direction {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i8(self.sign())
    }
}

impl<'de> Deserialize<'de> for Direction {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let sign = i8::deserialize(deserializer)?;
        Direction::from_sign(sign)
            .ok_or_else(|| serde::de::Error::custom(format!("direction must be 1 or -1, got {sign}")))
    }
}

/// How records that fail the sanity checks are treated before charting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, StrumDisplay, EnumString, AsRefStr, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum RecordPolicy {
    /// Pass everything through to the chart; issues are only reported.
    #[default]
    Keep,
    /// Remove flagged records before the adapter runs.
    Drop,
}
