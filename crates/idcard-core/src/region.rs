//! # Region Codes
//!
//! The first two characters of an identity card number name the
//! province-level division that issued it. Only the codes in
//! [`REGION_CODES`] are accepted; anything else fails validation no matter
//! what the remaining digits look like.
//!
//! The full six-digit division code (prefecture and county) is not checked.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::ValidationError;

/// Allow-listed two-character region prefixes, in ascending order.
pub const REGION_CODES: [&str; 35] = [
    "11", "12", "13", "14", "15", //
    "21", "22", "23", //
    "31", "32", "33", "34", "35", "36", "37", //
    "41", "42", "43", "44", "45", "46", //
    "50", "51", "52", "53", "54", //
    "61", "62", "63", "64", "65", //
    "71", "81", "82", "91",
];

/// Province-level division encoded in the first two characters.
///
/// Variant order follows [`REGION_CODES`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Region {
    Beijing,
    Tianjin,
    Hebei,
    Shanxi,
    InnerMongolia,
    Liaoning,
    Jilin,
    Heilongjiang,
    Shanghai,
    Jiangsu,
    Zhejiang,
    Anhui,
    Fujian,
    Jiangxi,
    Shandong,
    Henan,
    Hubei,
    Hunan,
    Guangdong,
    Guangxi,
    Hainan,
    Chongqing,
    Sichuan,
    Guizhou,
    Yunnan,
    Tibet,
    Shaanxi,
    Gansu,
    Qinghai,
    Ningxia,
    Xinjiang,
    Taiwan,
    HongKong,
    Macau,
    /// Issued abroad.
    Overseas,
}

impl Region {
    /// Every region, in the same order as [`REGION_CODES`].
    pub const ALL: [Region; 35] = [
        Self::Beijing,
        Self::Tianjin,
        Self::Hebei,
        Self::Shanxi,
        Self::InnerMongolia,
        Self::Liaoning,
        Self::Jilin,
        Self::Heilongjiang,
        Self::Shanghai,
        Self::Jiangsu,
        Self::Zhejiang,
        Self::Anhui,
        Self::Fujian,
        Self::Jiangxi,
        Self::Shandong,
        Self::Henan,
        Self::Hubei,
        Self::Hunan,
        Self::Guangdong,
        Self::Guangxi,
        Self::Hainan,
        Self::Chongqing,
        Self::Sichuan,
        Self::Guizhou,
        Self::Yunnan,
        Self::Tibet,
        Self::Shaanxi,
        Self::Gansu,
        Self::Qinghai,
        Self::Ningxia,
        Self::Xinjiang,
        Self::Taiwan,
        Self::HongKong,
        Self::Macau,
        Self::Overseas,
    ];

    /// Look up a region by its two-character code.
    ///
    /// Returns `None` for anything outside the allow-list, including
    /// inputs of the wrong length.
    pub fn from_code(code: &str) -> Option<Self> {
        REGION_CODES
            .iter()
            .position(|c| *c == code)
            .map(|idx| Self::ALL[idx])
    }

    /// The two-character code.
    pub fn code(&self) -> &'static str {
        REGION_CODES[*self as usize]
    }

    /// English name of the division.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Beijing => "Beijing",
            Self::Tianjin => "Tianjin",
            Self::Hebei => "Hebei",
            Self::Shanxi => "Shanxi",
            Self::InnerMongolia => "Inner Mongolia",
            Self::Liaoning => "Liaoning",
            Self::Jilin => "Jilin",
            Self::Heilongjiang => "Heilongjiang",
            Self::Shanghai => "Shanghai",
            Self::Jiangsu => "Jiangsu",
            Self::Zhejiang => "Zhejiang",
            Self::Anhui => "Anhui",
            Self::Fujian => "Fujian",
            Self::Jiangxi => "Jiangxi",
            Self::Shandong => "Shandong",
            Self::Henan => "Henan",
            Self::Hubei => "Hubei",
            Self::Hunan => "Hunan",
            Self::Guangdong => "Guangdong",
            Self::Guangxi => "Guangxi",
            Self::Hainan => "Hainan",
            Self::Chongqing => "Chongqing",
            Self::Sichuan => "Sichuan",
            Self::Guizhou => "Guizhou",
            Self::Yunnan => "Yunnan",
            Self::Tibet => "Tibet",
            Self::Shaanxi => "Shaanxi",
            Self::Gansu => "Gansu",
            Self::Qinghai => "Qinghai",
            Self::Ningxia => "Ningxia",
            Self::Xinjiang => "Xinjiang",
            Self::Taiwan => "Taiwan",
            Self::HongKong => "Hong Kong",
            Self::Macau => "Macau",
            Self::Overseas => "Overseas",
        }
    }
}

impl std::fmt::Display for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Region {
    type Err = ValidationError;

    /// Parse a region from its two-character code.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s).ok_or_else(|| ValidationError::UnknownRegion(s.to_string()))
    }
}
