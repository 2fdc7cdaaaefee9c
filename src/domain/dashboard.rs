// Dashboard domain model
use serde::Serialize;
use std::fmt;

pub const DASHBOARD_TITLE: &str = "Dashboard Overview";
pub const ACTIONS_TITLE: &str = "Quick Actions";

/// Symbolic icon reference; the renderer maps these to actual glyphs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Icon {
    BuildingOffice,
    Truck,
    Clock,
    CurrencyDollar,
    ChartBar,
}

/// Symbolic accent color reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum AccentColor {
    Blue,
    Green,
    Purple,
    Yellow,
    Indigo,
    Pink,
}

/// The six metrics shown on the dashboard, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Metric {
    TotalSlots,
    AvailableSlots,
    RegisteredCars,
    ActiveParking,
    TotalRevenue,
    AverageDuration,
}

impl Metric {
    pub const ALL: [Metric; 6] = [
        Metric::TotalSlots,
        Metric::AvailableSlots,
        Metric::RegisteredCars,
        Metric::ActiveParking,
        Metric::TotalRevenue,
        Metric::AverageDuration,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Metric::TotalSlots => "Total Parking Slots",
            Metric::AvailableSlots => "Available Slots",
            Metric::RegisteredCars => "Registered Cars",
            Metric::ActiveParking => "Active Parking",
            Metric::TotalRevenue => "Total Revenue",
            Metric::AverageDuration => "Average Duration",
        }
    }

    pub fn icon(self) -> Icon {
        match self {
            Metric::TotalSlots | Metric::AvailableSlots => Icon::BuildingOffice,
            Metric::RegisteredCars => Icon::Truck,
            Metric::ActiveParking => Icon::Clock,
            Metric::TotalRevenue => Icon::CurrencyDollar,
            Metric::AverageDuration => Icon::ChartBar,
        }
    }

    pub fn accent_color(self) -> AccentColor {
        match self {
            Metric::TotalSlots => AccentColor::Blue,
            Metric::AvailableSlots => AccentColor::Green,
            Metric::RegisteredCars => AccentColor::Purple,
            Metric::ActiveParking => AccentColor::Yellow,
            Metric::TotalRevenue => AccentColor::Indigo,
            Metric::AverageDuration => AccentColor::Pink,
        }
    }
}

/// A card value ready for direct rendering: counts stay numeric, everything
/// else is pre-formatted text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum CardValue {
    Count(i64),
    Text(String),
}

impl fmt::Display for CardValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CardValue::Count(count) => write!(f, "{}", count),
            CardValue::Text(text) => f.write_str(text),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayCard {
    pub metric: Metric,
    pub label: &'static str,
    pub value: CardValue,
    pub icon: Icon,
    pub accent_color: AccentColor,
}

/// A parameterless navigation shortcut.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuickAction {
    pub label: &'static str,
    pub path: &'static str,
    pub icon: Icon,
    pub accent_color: AccentColor,
}

pub const QUICK_ACTIONS: [QuickAction; 4] = [
    QuickAction {
        label: "Register Car",
        path: "/cars",
        icon: Icon::Truck,
        accent_color: AccentColor::Blue,
    },
    QuickAction {
        label: "Record Entry",
        path: "/parking-records",
        icon: Icon::Clock,
        accent_color: AccentColor::Green,
    },
    QuickAction {
        label: "Process Payment",
        path: "/payments",
        icon: Icon::CurrencyDollar,
        accent_color: AccentColor::Indigo,
    },
    QuickAction {
        label: "View Reports",
        path: "/reports",
        icon: Icon::ChartBar,
        accent_color: AccentColor::Purple,
    },
];

/// What one dashboard activation renders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "camelCase")]
pub enum DashboardView {
    Loading,
    #[serde(rename_all = "camelCase")]
    Loaded {
        title: &'static str,
        cards: Vec<DisplayCard>,
        actions_title: &'static str,
        actions: Vec<QuickAction>,
    },
}

impl DashboardView {
    pub fn loaded(cards: Vec<DisplayCard>) -> Self {
        DashboardView::Loaded {
            title: DASHBOARD_TITLE,
            cards,
            actions_title: ACTIONS_TITLE,
            actions: QUICK_ACTIONS.to_vec(),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, DashboardView::Loading)
    }
}
