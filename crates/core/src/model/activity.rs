use std::fmt;

/// The six mini-games a session offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActivityKind {
    Syllables,
    WordBuilder,
    Sentences,
    Antonyms,
    YesNo,
    Reading,
}

impl ActivityKind {
    /// Every activity, in menu order.
    pub const ALL: [ActivityKind; 6] = [
        ActivityKind::Syllables,
        ActivityKind::WordBuilder,
        ActivityKind::Sentences,
        ActivityKind::Antonyms,
        ActivityKind::YesNo,
        ActivityKind::Reading,
    ];

    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            ActivityKind::Syllables => "Syllable Split",
            ActivityKind::WordBuilder => "Word Builder",
            ActivityKind::Sentences => "Finish the Sentence",
            ActivityKind::Antonyms => "Opposites",
            ActivityKind::YesNo => "Yes or No",
            ActivityKind::Reading => "Story Time",
        }
    }
}

impl fmt::Display for ActivityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_lists_each_kind_once() {
        assert_eq!(ActivityKind::ALL.len(), 6);
        for (i, kind) in ActivityKind::ALL.iter().enumerate() {
            for other in &ActivityKind::ALL[i + 1..] {
                assert_ne!(kind, other);
            }
        }
    }

    #[test]
    fn displays_the_menu_label() {
        assert_eq!(ActivityKind::WordBuilder.to_string(), "Word Builder");
    }
}
