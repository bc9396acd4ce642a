use serde::{Deserialize, Serialize};

/// Language used for labels, trend suggestions and recommendations.
/// Always passed explicitly; nothing in the crate looks it up on its own.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Locale {
    #[serde(rename = "en")]
    English,
    #[serde(rename = "zh")]
    Chinese,
}

impl Locale {
    /// Short language code
    pub fn code(self) -> &'static str {
        match self {
            Locale::English => "en",
            Locale::Chinese => "zh",
        }
    }

    /// Parse a language code or tag such as `en`, `en-US`, `zh_CN`
    pub fn from_code(code: &str) -> Option<Self> {
        let language = code
            .split(|c| c == '-' || c == '_')
            .next()
            .unwrap_or_default()
            .trim()
            .to_lowercase();

        match language.as_str() {
            "en" => Some(Locale::English),
            "zh" => Some(Locale::Chinese),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_code() {
        assert_eq!(Locale::from_code("en"), Some(Locale::English));
        assert_eq!(Locale::from_code("en-US"), Some(Locale::English));
        assert_eq!(Locale::from_code("ZH_cn"), Some(Locale::Chinese));
        assert_eq!(Locale::from_code("fr"), None);
        assert_eq!(Locale::from_code(""), None);
    }
}
