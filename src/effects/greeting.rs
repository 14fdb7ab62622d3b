//! Hero text: time-of-day greeting, seasonal messages and the typewriter.

use crate::lang::Lang;

/// Greeting for an hour of the São Paulo day.
pub fn greeting(hour: u32, lang: Lang) -> &'static str {
    match (hour, lang) {
        (6..=11, Lang::Ptbr) => "Bom dia, eu sou",
        (12..=17, Lang::Ptbr) => "Boa tarde, eu sou",
        (_, Lang::Ptbr) => "Boa noite, eu sou",
        (6..=11, Lang::En) => "Good morning, I'm",
        (12..=17, Lang::En) => "Good afternoon, I'm",
        (_, Lang::En) => "Good evening, I'm",
    }
}

pub fn christmas_greeting(lang: Lang) -> &'static str {
    if lang.is_english() { "Merry Christmas!" } else { "Feliz Natal a todos!" }
}

pub fn christmas_banner(lang: Lang) -> &'static str {
    if lang.is_english() { "Merry Christmas!" } else { "Feliz Natal!" }
}

pub fn new_year_greeting(lang: Lang) -> &'static str {
    if lang.is_english() {
        "✨ Happy New Year with peace, success and health! ✨"
    } else {
        "✨ Feliz Ano Novo com muita paz, sucesso e saúde! ✨"
    }
}

pub fn new_year_banner(lang: Lang) -> &'static str {
    if lang.is_english() { "Happy New Year!" } else { "Feliz Ano Novo!" }
}

const ROLES_PT: [&str; 5] = [
    "Engenheiro de Plataforma",
    "Arquiteto Cloud Native",
    "Contribuidor Open Source",
    "Infraestrutura IA/LLM",
    "Especialista em Sistemas Distribuídos",
];

const ROLES_EN: [&str; 5] = [
    "Staff Platform Engineer",
    "Cloud Native Architect",
    "Open Source Contributor",
    "AI/LLM Infrastructure",
    "Distributed Systems Expert",
];

pub const FIRST_DELAY_MS: i32 = 1_000;
const TYPE_MS: i32 = 100;
const DELETE_MS: i32 = 50;
const HOLD_MS: i32 = 2_000;
const NEXT_MS: i32 = 500;

/// Types each role one character at a time, holds it, erases it and moves on.
#[derive(Debug, Clone)]
pub struct Typewriter {
    texts: &'static [&'static str],
    index: usize,
    chars: usize,
    deleting: bool,
}

impl Typewriter {
    pub fn new(lang: Lang) -> Self {
        let texts: &'static [&'static str] = if lang.is_english() { &ROLES_EN } else { &ROLES_PT };
        Self { texts, index: 0, chars: 0, deleting: false }
    }

    /// Advance one keystroke: the text to show and the delay before the next.
    pub fn step(&mut self) -> (String, i32) {
        let current = self.texts[self.index];
        let len = current.chars().count();

        if self.deleting {
            self.chars = self.chars.saturating_sub(1);
        } else {
            self.chars = (self.chars + 1).min(len);
        }
        let shown: String = current.chars().take(self.chars).collect();

        let delay = if !self.deleting && self.chars == len {
            self.deleting = true;
            HOLD_MS
        } else if self.deleting && self.chars == 0 {
            self.deleting = false;
            self.index = (self.index + 1) % self.texts.len();
            NEXT_MS
        } else if self.deleting {
            DELETE_MS
        } else {
            TYPE_MS
        };
        (shown, delay)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_greeting_boundaries() {
        assert_eq!(greeting(5, Lang::Ptbr), "Boa noite, eu sou");
        assert_eq!(greeting(6, Lang::Ptbr), "Bom dia, eu sou");
        assert_eq!(greeting(11, Lang::Ptbr), "Bom dia, eu sou");
        assert_eq!(greeting(12, Lang::Ptbr), "Boa tarde, eu sou");
        assert_eq!(greeting(17, Lang::Ptbr), "Boa tarde, eu sou");
        assert_eq!(greeting(18, Lang::Ptbr), "Boa noite, eu sou");
        assert_eq!(greeting(9, Lang::En), "Good morning, I'm");
        assert_eq!(greeting(23, Lang::En), "Good evening, I'm");
    }

    #[test]
    fn test_seasonal_messages() {
        assert_eq!(christmas_greeting(Lang::Ptbr), "Feliz Natal a todos!");
        assert_eq!(christmas_banner(Lang::En), "Merry Christmas!");
        assert_eq!(new_year_banner(Lang::Ptbr), "Feliz Ano Novo!");
        assert!(new_year_greeting(Lang::En).contains("Happy New Year"));
    }

    #[test]
    fn test_typewriter_cycle() {
        let mut tw = Typewriter::new(Lang::En);
        assert_eq!(tw.step(), ("S".to_string(), TYPE_MS));
        assert_eq!(tw.step(), ("St".to_string(), TYPE_MS));
        let mut last = tw.step();
        while last.1 == TYPE_MS {
            last = tw.step();
        }
        assert_eq!(last, ("Staff Platform Engineer".to_string(), HOLD_MS));
        assert_eq!(tw.step(), ("Staff Platform Enginee".to_string(), DELETE_MS));
        while last.1 != NEXT_MS {
            last = tw.step();
        }
        assert_eq!(last.0, "");
        assert_eq!(tw.step().0, "C");
    }

    #[test]
    fn test_typewriter_counts_characters_not_bytes() {
        let mut tw = Typewriter::new(Lang::Ptbr);
        for _ in 0..4 {
            tw.step();
        }
        // skip to the last role, which contains a multi-byte character
        tw.index = 4;
        tw.chars = 0;
        let mut last = tw.step();
        while last.1 == TYPE_MS {
            last = tw.step();
        }
        assert_eq!(last.0, "Especialista em Sistemas Distribuídos");
    }
}
