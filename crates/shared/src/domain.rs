use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::VoteError;

macro_rules! id_newtype {
    ($name:ident) => {
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        pub struct $name(pub i64);

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

id_newtype!(ProductId);

/// One votable item. Everything except `votes` is display metadata and never
/// changes after the seed is loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub title: String,
    pub description: String,
    pub url: String,
    #[serde(default)]
    pub votes: i64,
    pub submitter_avatar_url: String,
    pub product_image_url: String,
}

impl Product {
    /// Returns a copy of this product carrying a different score.
    pub fn with_votes(&self, votes: i64) -> Self {
        Self {
            votes,
            ..self.clone()
        }
    }

    /// Returns a copy with `direction` applied to the score.
    pub fn voted(&self, direction: VoteDirection) -> Self {
        self.with_votes(self.votes.saturating_add(direction.delta()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VoteDirection {
    Up,
    Down,
}

impl VoteDirection {
    pub fn delta(self) -> i64 {
        match self {
            Self::Up => 1,
            Self::Down => -1,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Up => "up",
            Self::Down => "down",
        }
    }
}

impl TryFrom<i64> for VoteDirection {
    type Error = VoteError;

    fn try_from(delta: i64) -> Result<Self, Self::Error> {
        match delta {
            1 => Ok(Self::Up),
            -1 => Ok(Self::Down),
            other => Err(VoteError::InvalidDelta { delta: other }),
        }
    }
}

impl FromStr for VoteDirection {
    type Err = VoteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "up" | "+" | "+1" => Ok(Self::Up),
            "down" | "-" | "-1" => Ok(Self::Down),
            _ => Err(VoteError::InvalidDirection {
                input: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for VoteDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
#[path = "tests/domain_tests.rs"]
mod tests;
