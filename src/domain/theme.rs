//! Presentation themes

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

const PREMIUM_QUOTES: [&str; 4] = [
    "Psalm 127:2 - God grants sleep to those He loves.",
    "Matthew 11:28 - Come to me, all who are weary, and I will give you rest.",
    "Strong bodies are built in silence - during deep rest.",
    "Recovery is where strength is born. Sleep well tonight!",
];

/// Glyphs used when drawing text charts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartGlyphs {
    pub point: char,
    pub target: char,
    pub bar: char,
}

/// Visual variant of the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Plain layout with a fixed encouragement after each entry
    #[default]
    Classic,
    /// Banner layout, titled charts and a random quote after each entry
    Premium,
}

impl Theme {
    pub fn title(&self) -> &'static str {
        match self {
            Theme::Classic => "Deep Sleep Vault Tracker (Athlete Edition)",
            Theme::Premium => "Deep Sleep Vault: Athlete Edition",
        }
    }

    pub fn subtitle(&self) -> &'static str {
        match self {
            Theme::Classic => "Your personal sleep coach with streaks, badges, and insights",
            Theme::Premium => {
                "Your personal sleep coach to boost recovery, energy, and performance."
            }
        }
    }

    /// Text shown after a successful entry.
    ///
    /// Premium picks one of its quotes at random.
    pub fn entry_added_message<R: Rng + ?Sized>(&self, rng: &mut R) -> String {
        match self {
            Theme::Classic => {
                "Entry added successfully! Keep going - your rest is your edge.".to_string()
            }
            Theme::Premium => {
                let quote = self.quotes().choose(rng).copied().unwrap_or_default();
                format!("Entry added successfully!\n{}", quote)
            }
        }
    }

    /// Quotes the theme can show after an entry
    pub fn quotes(&self) -> &'static [&'static str] {
        match self {
            Theme::Classic => &[],
            Theme::Premium => &PREMIUM_QUOTES,
        }
    }

    /// Whether charts carry titles and axis labels
    pub fn labels_charts(&self) -> bool {
        matches!(self, Theme::Premium)
    }

    pub fn glyphs(&self) -> ChartGlyphs {
        match self {
            Theme::Classic => ChartGlyphs {
                point: 'o',
                target: '-',
                bar: '#',
            },
            Theme::Premium => ChartGlyphs {
                point: '◆',
                target: '┄',
                bar: '█',
            },
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Theme::Classic => f.write_str("classic"),
            Theme::Premium => f.write_str("premium"),
        }
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "classic" => Ok(Theme::Classic),
            "premium" => Ok(Theme::Premium),
            _ => Err(format!(
                "Invalid theme: '{}'. Valid themes are: classic, premium",
                s
            )),
        }
    }
}
