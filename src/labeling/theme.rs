use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};

/// Station network domain; decides which properties a station form edits.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Atmosphere,
    Ecosystem,
    Ocean,
}

impl Theme {
    pub const ALL: [Theme; 3] = [Self::Atmosphere, Self::Ecosystem, Self::Ocean];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Atmosphere => "atmosphere",
            Self::Ecosystem => "ecosystem",
            Self::Ocean => "ocean",
        }
    }
}

impl Display for Theme {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
