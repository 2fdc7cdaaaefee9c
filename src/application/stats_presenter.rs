// Stats presenter - Derives display cards from a statistics snapshot
use crate::domain::dashboard::{CardValue, DisplayCard, Metric};
use crate::domain::formatting::{format_duration, format_revenue};
use crate::domain::statistics::StatisticsSnapshot;

/// Build the six dashboard cards, in display order.
pub fn present(snapshot: &StatisticsSnapshot) -> Vec<DisplayCard> {
    Metric::ALL
        .iter()
        .map(|&metric| DisplayCard {
            metric,
            label: metric.label(),
            value: card_value(metric, snapshot),
            icon: metric.icon(),
            accent_color: metric.accent_color(),
        })
        .collect()
}

fn card_value(metric: Metric, snapshot: &StatisticsSnapshot) -> CardValue {
    match metric {
        Metric::TotalSlots => CardValue::Count(snapshot.total_slots),
        Metric::AvailableSlots => CardValue::Count(snapshot.available_slots),
        Metric::RegisteredCars => CardValue::Count(snapshot.total_cars),
        Metric::ActiveParking => CardValue::Count(snapshot.active_parking),
        Metric::TotalRevenue => CardValue::Text(format_revenue(snapshot.total_revenue)),
        Metric::AverageDuration => CardValue::Text(format_duration(snapshot.average_duration)),
    }
}
