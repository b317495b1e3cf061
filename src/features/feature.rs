//! The closed set of per-trace features and their presentation metadata.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which packets of a trace a feature looks at
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Destination address is the local device
    Incoming,
    /// Source address is the local device
    Outgoing,
    /// Every packet
    All,
}

/// The statistic a feature computes over its packet subset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Statistic {
    MeanSize,
    TotalSize,
    Count,
    UniqueSizes,
    Duration,
}

/// A named scalar statistic computed from one trace
///
/// Serializes as its key, e.g. `"Avg In Pack"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Feature {
    AvgInPack,
    AvgOutPack,
    AvgAllPack,
    TotInSize,
    TotOutSize,
    TotSize,
    NumInPacks,
    NumOutPacks,
    NumTotPacks,
    NumUniqueSizes,
    ActionDuration,
}

impl Feature {
    /// Every feature, in report order
    pub const ALL: [Feature; 11] = [
        Feature::AvgInPack,
        Feature::AvgOutPack,
        Feature::AvgAllPack,
        Feature::TotInSize,
        Feature::TotOutSize,
        Feature::TotSize,
        Feature::NumInPacks,
        Feature::NumOutPacks,
        Feature::NumTotPacks,
        Feature::NumUniqueSizes,
        Feature::ActionDuration,
    ];

    /// Short name used on the command line and in reports
    pub fn key(self) -> &'static str {
        match self {
            Feature::AvgInPack => "Avg In Pack",
            Feature::AvgOutPack => "Avg Out Pack",
            Feature::AvgAllPack => "Avg All Pack",
            Feature::TotInSize => "Tot In Size",
            Feature::TotOutSize => "Tot Out Size",
            Feature::TotSize => "Tot Size",
            Feature::NumInPacks => "Num In Packs",
            Feature::NumOutPacks => "Num Out Packs",
            Feature::NumTotPacks => "Num Tot Packs",
            Feature::NumUniqueSizes => "Num Unique Sizes",
            Feature::ActionDuration => "Action Duration",
        }
    }

    /// Chart title
    pub fn title(self) -> &'static str {
        match self {
            Feature::AvgInPack => "Average Size of Incoming Packets",
            Feature::AvgOutPack => "Average Size of Outgoing Packets",
            Feature::AvgAllPack => "Average Size of All Packets",
            Feature::TotInSize => "Total Size of Incoming Packets",
            Feature::TotOutSize => "Total Size of Outgoing Packets",
            Feature::TotSize => "Total Size of All Packets",
            Feature::NumInPacks => "Number of Incoming Packets",
            Feature::NumOutPacks => "Number of Outgoing Packets",
            Feature::NumTotPacks => "Number of Packets",
            Feature::NumUniqueSizes => "Number of Packets with Unique length",
            Feature::ActionDuration => "Duration of the action",
        }
    }

    /// Y-axis label
    pub fn unit(self) -> &'static str {
        match self.statistic() {
            Statistic::MeanSize | Statistic::TotalSize => "Size (bytes)",
            Statistic::Count | Statistic::UniqueSizes => "Number of packets",
            Statistic::Duration => "Duration (seconds)",
        }
    }

    /// Lower-cased key without spaces, e.g. `avginpack`
    pub fn file_stem(self) -> String {
        self.key().replace(' ', "").to_lowercase()
    }

    pub fn statistic(self) -> Statistic {
        match self {
            Feature::AvgInPack | Feature::AvgOutPack | Feature::AvgAllPack => Statistic::MeanSize,
            Feature::TotInSize | Feature::TotOutSize | Feature::TotSize => Statistic::TotalSize,
            Feature::NumInPacks | Feature::NumOutPacks | Feature::NumTotPacks => Statistic::Count,
            Feature::NumUniqueSizes => Statistic::UniqueSizes,
            Feature::ActionDuration => Statistic::Duration,
        }
    }

    /// Packet subset the statistic runs over
    ///
    /// Unique sizes and duration always use the whole trace.
    pub fn direction(self) -> Direction {
        match self {
            Feature::AvgInPack | Feature::TotInSize | Feature::NumInPacks => Direction::Incoming,
            Feature::AvgOutPack | Feature::TotOutSize | Feature::NumOutPacks => Direction::Outgoing,
            _ => Direction::All,
        }
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Feature {
    type Err = String;

    /// Accepts the key (any case) or the file stem
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        let compact = wanted.replace([' ', '_', '-'], "").to_lowercase();

        Feature::ALL
            .into_iter()
            .find(|f| f.key().eq_ignore_ascii_case(wanted) || f.file_stem() == compact)
            .ok_or_else(|| format!("unknown feature '{}'", s))
    }
}

impl From<Feature> for String {
    fn from(feature: Feature) -> Self {
        feature.key().to_string()
    }
}

impl TryFrom<String> for Feature {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
