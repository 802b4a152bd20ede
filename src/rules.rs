#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Replacement {
    pub from: &'static str,
    pub to: &'static str,
}

impl Replacement {
    /// Replaces every non-overlapping occurrence of `from`, or returns `None`
    /// when there is nothing to replace.
    pub fn apply(&self, source_code: &str) -> Option<String> {
        match source_code.contains(self.from) {
            false => None,
            true => Some(source_code.replace(self.from, self.to)),
        }
    }
}

pub const THEME_CONTEXT: [Replacement; 2] = [
    Replacement {
        from: "'../context/ThemeContext'",
        to: "'@/context/ThemeContext'",
    },
    Replacement {
        from: "\"../context/ThemeContext\"",
        to: "\"@/context/ThemeContext\"",
    },
];
