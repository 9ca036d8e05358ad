use std::fmt;
use std::str::FromStr;

use crate::error::AppError;

/// Platform routing values for Riot API (Summoner-V4, Champion-Mastery-V4)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    BR1,
    EUN1,
    EUW1,
    LA1,
    LA2,
    NA1,
    OC1,
    RU,
    TR1,
    JP1,
    KR,
}

impl Platform {
    pub fn base_url(&self) -> String {
        format!("https://{}.api.riotgames.com", self.as_str())
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::BR1 => "br1",
            Self::EUN1 => "eun1",
            Self::EUW1 => "euw1",
            Self::LA1 => "la1",
            Self::LA2 => "la2",
            Self::NA1 => "na1",
            Self::OC1 => "oc1",
            Self::RU => "ru",
            Self::TR1 => "tr1",
            Self::JP1 => "jp1",
            Self::KR => "kr",
        }
    }

    pub fn to_region(self) -> Region {
        match self {
            Self::BR1 | Self::LA1 | Self::LA2 | Self::NA1 => Region::Americas,
            Self::EUN1 | Self::EUW1 | Self::TR1 => Region::Europe,
            Self::JP1 | Self::KR | Self::RU => Region::Asia,
            Self::OC1 => Region::Sea,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::BR1 => "Brazil",
            Self::EUN1 => "EU Nordic & East",
            Self::EUW1 => "EU West",
            Self::LA1 => "Latin America North",
            Self::LA2 => "Latin America South",
            Self::NA1 => "North America",
            Self::OC1 => "Oceania",
            Self::RU => "Russia",
            Self::TR1 => "Turkey",
            Self::JP1 => "Japan",
            Self::KR => "Korea",
        }
    }
}

impl FromStr for Platform {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "BR" | "BR1" => Ok(Self::BR1),
            "EUNE" | "EUN" | "EUN1" => Ok(Self::EUN1),
            "EUW" | "EUW1" => Ok(Self::EUW1),
            "LAN" | "LA1" => Ok(Self::LA1),
            "LAS" | "LA2" => Ok(Self::LA2),
            "NA" | "NA1" => Ok(Self::NA1),
            "OCE" | "OC" | "OC1" => Ok(Self::OC1),
            "RU" => Ok(Self::RU),
            "TR" | "TR1" => Ok(Self::TR1),
            "JP" | "JP1" => Ok(Self::JP1),
            "KR" => Ok(Self::KR),
            _ => Err(AppError::InvalidRegion(s.to_string())),
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str().to_uppercase())
    }
}

/// Regional routing values for Riot API (Match-V5, TFT-Match-V1)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    Americas,
    Asia,
    Europe,
    Sea,
}

impl Region {
    pub fn base_url(&self) -> String {
        format!("https://{}.api.riotgames.com", self.as_str())
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Americas => "americas",
            Self::Asia => "asia",
            Self::Europe => "europe",
            Self::Sea => "sea",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
