use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// The seven daily markers of the takvim, in their fixed order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrayerName {
    Imsak,
    Fajr,
    Sunrise,
    Dhuhr,
    Asr,
    Maghrib,
    Isha,
}

impl PrayerName {
    pub const ALL: [PrayerName; 7] = [
        PrayerName::Imsak,
        PrayerName::Fajr,
        PrayerName::Sunrise,
        PrayerName::Dhuhr,
        PrayerName::Asr,
        PrayerName::Maghrib,
        PrayerName::Isha,
    ];

    /// Position in the day. Imsak sits before Fajr at -1 since it is not a
    /// mandated prayer.
    pub fn order(&self) -> i8 {
        match self {
            PrayerName::Imsak => -1,
            PrayerName::Fajr => 0,
            PrayerName::Sunrise => 1,
            PrayerName::Dhuhr => 2,
            PrayerName::Asr => 3,
            PrayerName::Maghrib => 4,
            PrayerName::Isha => 5,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PrayerName::Imsak => "imsak",
            PrayerName::Fajr => "fajr",
            PrayerName::Sunrise => "sunrise",
            PrayerName::Dhuhr => "dhuhr",
            PrayerName::Asr => "asr",
            PrayerName::Maghrib => "maghrib",
            PrayerName::Isha => "isha",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            PrayerName::Imsak => "Imsak",
            PrayerName::Fajr => "Fajr",
            PrayerName::Sunrise => "Sunrise",
            PrayerName::Dhuhr => "Dhuhr",
            PrayerName::Asr => "Asr",
            PrayerName::Maghrib => "Maghrib",
            PrayerName::Isha => "Isha",
        }
    }

    /// Albanian label as printed in the Kosovo takvim.
    pub fn label(&self) -> &'static str {
        match self {
            PrayerName::Imsak => "Imsaku",
            PrayerName::Fajr => "Sabahu",
            PrayerName::Sunrise => "Lindja e diellit",
            PrayerName::Dhuhr => "Dreka",
            PrayerName::Asr => "Ikindia",
            PrayerName::Maghrib => "Akshami",
            PrayerName::Isha => "Jacia",
        }
    }
}

impl std::fmt::Display for PrayerName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for PrayerName {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "imsak" | "imsaku" => Ok(PrayerName::Imsak),
            "fajr" | "sabahu" => Ok(PrayerName::Fajr),
            "sunrise" | "lindja" | "lindja e diellit" => Ok(PrayerName::Sunrise),
            "dhuhr" | "zuhr" | "dreka" => Ok(PrayerName::Dhuhr),
            "asr" | "ikindia" => Ok(PrayerName::Asr),
            "maghrib" | "akshami" => Ok(PrayerName::Maghrib),
            "isha" | "jacia" => Ok(PrayerName::Isha),
            _ => Err(anyhow::anyhow!("Unknown prayer: {}", s)),
        }
    }
}

/// One named instant of a day's timetable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrayerTime {
    pub name: PrayerName,
    pub time: NaiveTime,
}

impl PrayerTime {
    pub fn new(name: PrayerName, time: NaiveTime) -> Self {
        Self { name, time }
    }

    pub fn label(&self) -> &'static str {
        self.name.label()
    }
}

/// Derived state of a single prayer against "now". Never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PrayerStatus {
    pub prayer: PrayerTime,
    pub is_past: bool,
    pub is_current: bool,
    pub is_next: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_matches_declaration_order() {
        let orders: Vec<i8> = PrayerName::ALL.iter().map(|p| p.order()).collect();
        assert_eq!(orders, vec![-1, 0, 1, 2, 3, 4, 5]);
        assert!(PrayerName::Imsak < PrayerName::Fajr);
        assert!(PrayerName::Maghrib < PrayerName::Isha);
    }

    #[test]
    fn parses_english_and_albanian_names() {
        assert_eq!("Sabahu".parse::<PrayerName>().unwrap(), PrayerName::Fajr);
        assert_eq!("ZUHR".parse::<PrayerName>().unwrap(), PrayerName::Dhuhr);
        assert_eq!("jacia".parse::<PrayerName>().unwrap(), PrayerName::Isha);
        assert!("tahajjud".parse::<PrayerName>().is_err());
    }
}
