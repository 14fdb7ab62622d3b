//! Site languages.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Lang {
    #[default]
    Ptbr,
    En,
}

impl Lang {
    /// Parse the cookie / query value (`ptbr` or `en`).
    pub fn from_code(code: &str) -> Option<Lang> {
        match code {
            "ptbr" => Some(Lang::Ptbr),
            "en" => Some(Lang::En),
            _ => None,
        }
    }

    /// Interpret `<body data-lang>`; anything but `en` is Portuguese.
    pub fn from_page_attr(value: &str) -> Lang {
        if value.eq_ignore_ascii_case("en") { Lang::En } else { Lang::Ptbr }
    }

    pub fn code(self) -> &'static str {
        match self {
            Lang::Ptbr => "ptbr",
            Lang::En => "en",
        }
    }

    /// BCP-47 tag used for `Intl` formatting and response headers.
    pub fn locale(self) -> &'static str {
        match self {
            Lang::Ptbr => "pt-BR",
            Lang::En => "en",
        }
    }

    pub fn index_file(self) -> &'static str {
        match self {
            Lang::Ptbr => "/index.html",
            Lang::En => "/index-en.html",
        }
    }

    pub fn is_english(self) -> bool {
        self == Lang::En
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes() {
        assert_eq!(Lang::from_code("en"), Some(Lang::En));
        assert_eq!(Lang::from_code("ptbr"), Some(Lang::Ptbr));
        assert_eq!(Lang::from_code("pt"), None);
        assert_eq!(Lang::En.code(), "en");
    }

    #[test]
    fn test_page_attr_defaults_to_portuguese() {
        assert_eq!(Lang::from_page_attr("EN"), Lang::En);
        assert_eq!(Lang::from_page_attr("pt"), Lang::Ptbr);
        assert_eq!(Lang::from_page_attr(""), Lang::Ptbr);
    }
}
