//! Chart configuration enums.

/// Tradable asset shown on the chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Asset {
    BtcUsdt,
    EthUsdt,
    Spx,
}

impl Asset {
    /// Returns the display symbol for this asset.
    pub fn label(&self) -> &'static str {
        match self {
            Asset::BtcUsdt => "BTC/USDT",
            Asset::EthUsdt => "ETH/USDT",
            Asset::Spx => "SPX",
        }
    }

    /// Returns the long-form name for this asset.
    pub fn name(&self) -> &'static str {
        match self {
            Asset::BtcUsdt => "Bitcoin",
            Asset::EthUsdt => "Ethereum",
            Asset::Spx => "S&P 500",
        }
    }

    /// Parses a display symbol. Matching is case-insensitive.
    pub fn from_label(label: &str) -> Option<Self> {
        match label.to_uppercase().as_str() {
            "BTC/USDT" => Some(Asset::BtcUsdt),
            "ETH/USDT" => Some(Asset::EthUsdt),
            "SPX" => Some(Asset::Spx),
            _ => None,
        }
    }

    /// Returns all available assets in selector order.
    pub fn all() -> &'static [Asset] {
        &[Asset::BtcUsdt, Asset::EthUsdt, Asset::Spx]
    }
}

/// Timeframe enumeration for the chart period selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Timeframe {
    Min15,
    Hour1,
    Hour4,
    Day1,
}

impl Timeframe {
    /// Returns a short label for this timeframe.
    pub fn label(&self) -> &'static str {
        match self {
            Timeframe::Min15 => "15M",
            Timeframe::Hour1 => "1H",
            Timeframe::Hour4 => "4H",
            Timeframe::Day1 => "1D",
        }
    }

    /// Parses a short label. Matching is case-insensitive.
    pub fn from_label(label: &str) -> Option<Self> {
        match label.to_uppercase().as_str() {
            "15M" => Some(Timeframe::Min15),
            "1H" => Some(Timeframe::Hour1),
            "4H" => Some(Timeframe::Hour4),
            "1D" => Some(Timeframe::Day1),
            _ => None,
        }
    }

    /// Returns all available timeframes in order.
    pub fn all() -> &'static [Timeframe] {
        &[
            Timeframe::Min15,
            Timeframe::Hour1,
            Timeframe::Hour4,
            Timeframe::Day1,
        ]
    }
}

/// The (asset, timeframe) pair a series is generated for.
///
/// Changing either field invalidates the current series and forces an
/// immediate regeneration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartConfig {
    pub asset: Asset,
    pub timeframe: Timeframe,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            asset: Asset::BtcUsdt,
            timeframe: Timeframe::Hour1,
        }
    }
}
