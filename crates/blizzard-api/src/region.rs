//! Region and locale support for the Battle.net APIs

use std::fmt;

/// Supported Battle.net regions
///
/// Every region except China is served from a region-subdomain of
/// `api.blizzard.com`; China runs behind its own gateway hosts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    /// United States
    US,
    /// Europe
    EU,
    /// Korea
    KR,
    /// Taiwan
    TW,
    /// China
    CN,
}

impl Region {
    /// Get all available regions
    pub fn all() -> &'static [Region] {
        &[Region::US, Region::EU, Region::KR, Region::TW, Region::CN]
    }

    /// Convert region to lowercase string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Region::US => "us",
            Region::EU => "eu",
            Region::KR => "kr",
            Region::TW => "tw",
            Region::CN => "cn",
        }
    }

    /// Parse region from string
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "us" => Some(Region::US),
            "eu" => Some(Region::EU),
            "kr" => Some(Region::KR),
            "tw" => Some(Region::TW),
            "cn" => Some(Region::CN),
            _ => None,
        }
    }

    /// Base URL for game data and profile resources in this region
    pub fn api_host(&self) -> &'static str {
        match self {
            Region::US => "https://us.api.blizzard.com",
            Region::EU => "https://eu.api.blizzard.com",
            Region::KR => "https://kr.api.blizzard.com",
            Region::TW => "https://tw.api.blizzard.com",
            // China has no region subdomain, only a single gateway
            Region::CN => "https://gateway.battlenet.com.cn",
        }
    }

    /// Base URL for OAuth resources in this region
    pub fn oauth_host(&self) -> &'static str {
        match self {
            Region::CN => "https://www.gateway.battlenet.com.cn",
            _ => "https://oauth.battle.net",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Region {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Region::parse(s).ok_or_else(|| crate::Error::InvalidRegion(s.to_string()))
    }
}

/// Locales accepted by the Battle.net APIs
///
/// The locale is forwarded verbatim as the `locale` query parameter and
/// never interpreted by the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum Locale {
    EnUs,
    EnGb,
    EsEs,
    EsMx,
    PtBr,
    PtPt,
    DeDe,
    FrFr,
    ItIt,
    RuRu,
    KoKr,
    ZhTw,
    ZhCn,
}

impl Locale {
    /// Wire representation, e.g. `en_US`
    pub fn as_str(&self) -> &'static str {
        match self {
            Locale::EnUs => "en_US",
            Locale::EnGb => "en_GB",
            Locale::EsEs => "es_ES",
            Locale::EsMx => "es_MX",
            Locale::PtBr => "pt_BR",
            Locale::PtPt => "pt_PT",
            Locale::DeDe => "de_DE",
            Locale::FrFr => "fr_FR",
            Locale::ItIt => "it_IT",
            Locale::RuRu => "ru_RU",
            Locale::KoKr => "ko_KR",
            Locale::ZhTw => "zh_TW",
            Locale::ZhCn => "zh_CN",
        }
    }

    /// Parse locale from its wire representation
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "en_US" => Some(Locale::EnUs),
            "en_GB" => Some(Locale::EnGb),
            "es_ES" => Some(Locale::EsEs),
            "es_MX" => Some(Locale::EsMx),
            "pt_BR" => Some(Locale::PtBr),
            "pt_PT" => Some(Locale::PtPt),
            "de_DE" => Some(Locale::DeDe),
            "fr_FR" => Some(Locale::FrFr),
            "it_IT" => Some(Locale::ItIt),
            "ru_RU" => Some(Locale::RuRu),
            "ko_KR" => Some(Locale::KoKr),
            "zh_TW" => Some(Locale::ZhTw),
            "zh_CN" => Some(Locale::ZhCn),
            _ => None,
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Locale {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Locale::parse(s).ok_or_else(|| crate::Error::InvalidLocale(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_region_parse() {
        assert_eq!(Region::parse("us"), Some(Region::US));
        assert_eq!(Region::parse("US"), Some(Region::US));
        assert_eq!(Region::parse("tw"), Some(Region::TW));
        assert_eq!(Region::parse("invalid"), None);
    }

    #[test]
    fn test_region_from_str() {
        use std::str::FromStr;

        assert_eq!(Region::from_str("kr").unwrap(), Region::KR);
        assert_eq!(Region::from_str("EU").unwrap(), Region::EU);
        assert!(Region::from_str("invalid").is_err());
    }

    #[test]
    fn test_region_display() {
        assert_eq!(Region::US.to_string(), "us");
        assert_eq!(Region::CN.to_string(), "cn");
    }

    #[test]
    fn test_api_hosts() {
        assert_eq!(Region::US.api_host(), "https://us.api.blizzard.com");
        assert_eq!(Region::EU.api_host(), "https://eu.api.blizzard.com");
        assert_eq!(Region::KR.api_host(), "https://kr.api.blizzard.com");
        assert_eq!(Region::TW.api_host(), "https://tw.api.blizzard.com");
        assert_eq!(Region::CN.api_host(), "https://gateway.battlenet.com.cn");
    }

    #[test]
    fn test_oauth_hosts() {
        for region in [Region::US, Region::EU, Region::KR, Region::TW] {
            assert_eq!(region.oauth_host(), "https://oauth.battle.net");
        }
        assert_eq!(
            Region::CN.oauth_host(),
            "https://www.gateway.battlenet.com.cn"
        );
    }

    #[test]
    fn test_locale_round_trip() {
        for locale in [
            Locale::EnUs,
            Locale::DeDe,
            Locale::KoKr,
            Locale::ZhTw,
            Locale::ZhCn,
        ] {
            assert_eq!(Locale::parse(locale.as_str()), Some(locale));
        }
    }

    #[test]
    fn test_locale_display() {
        assert_eq!(Locale::EnUs.to_string(), "en_US");
        assert_eq!(Locale::PtBr.to_string(), "pt_BR");
    }

    #[test]
    fn test_locale_parse_rejects_lowercase() {
        // The wire format is case sensitive
        assert_eq!(Locale::parse("en_us"), None);
        assert_eq!(Locale::parse(""), None);
    }
}
