//! Click counter and the policy that derives the request variant from it.
//!
//! The variant tells the remote service to hand back a different set of
//! tracks for a mood it has already answered. It only moves forward after a
//! successful fetch, so a failed "Generate" never consumes a click.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// How fast the variant advances with Generate presses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum VariantPolicy {
    /// A fresh variant on every successful click.
    EveryClick,
    /// A fresh variant every second successful click.
    #[default]
    EveryTwoClicks,
}

impl VariantPolicy {
    /// Variant for the given total number of successful clicks.
    pub fn variant_for(self, clicks: u32) -> u32 {
        match self {
            VariantPolicy::EveryClick => clicks,
            VariantPolicy::EveryTwoClicks => clicks / 2,
        }
    }

    /// Configuration label.
    pub fn as_str(self) -> &'static str {
        match self {
            VariantPolicy::EveryClick => "every-click",
            VariantPolicy::EveryTwoClicks => "every-two-clicks",
        }
    }
}

impl fmt::Display for VariantPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VariantPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('_', "-").as_str() {
            "every-click" | "1" => Ok(VariantPolicy::EveryClick),
            "every-two-clicks" | "2" => Ok(VariantPolicy::EveryTwoClicks),
            other => Err(format!(
                "Unknown variant policy '{}' (expected every-click or every-two-clicks)",
                other
            )),
        }
    }
}

/// Counter values computed for a request that has not resolved yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingClick {
    pub clicks: u32,
    pub variant: u32,
}

/// Successful Generate presses and the variant derived from them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ClickCounter {
    clicks: u32,
    variant: u32,
}

impl ClickCounter {
    pub fn clicks(&self) -> u32 {
        self.clicks
    }

    pub fn variant(&self) -> u32 {
        self.variant
    }

    /// Values the next request should use. Does not touch the counter.
    pub fn next(&self, policy: VariantPolicy) -> PendingClick {
        let clicks = self.clicks.saturating_add(1);
        PendingClick {
            clicks,
            variant: policy.variant_for(clicks),
        }
    }

    /// Store the values of a request that succeeded.
    pub fn commit(&mut self, pending: PendingClick) {
        self.clicks = pending.clicks;
        self.variant = pending.variant;
    }
}
