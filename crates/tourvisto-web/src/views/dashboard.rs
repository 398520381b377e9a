//! Dashboard view model

use serde::Serialize;
use tourvisto_core::UserRecord;
use tourvisto_core::types::{DashboardData, TripSummary};
use tourvisto_core::utils::{Trend, calculate_trend};

/// Number of trips shown under "Created Trips"
pub const TRIP_CARD_COUNT: usize = 4;

/// One statistic card
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatCard {
    /// Card title
    pub header_title: &'static str,
    /// Overall total
    pub total: u64,
    /// This month
    pub current_month_count: u64,
    /// Last month
    pub last_month_count: u64,
    /// Direction of the change
    pub trend: Trend,
    /// Size of the change in percent
    pub percentage: f64,
}

impl StatCard {
    fn new(header_title: &'static str, total: u64, current: u64, last: u64) -> Self {
        let change = calculate_trend(current, last);
        Self {
            header_title,
            total,
            current_month_count: current,
            last_month_count: last,
            trend: change.trend,
            percentage: change.percentage,
        }
    }
}

/// Trip card
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TripCard {
    /// Trip id
    pub id: String,
    /// Trip name
    pub name: String,
    /// Cover image, empty when the trip has none
    pub image_url: String,
    /// First itinerary stop, empty when there is none
    pub location: String,
    /// Tags
    pub tags: Vec<String>,
    /// Displayed price
    pub price: String,
}

impl From<&TripSummary> for TripCard {
    fn from(trip: &TripSummary) -> Self {
        Self {
            id: trip.id.clone(),
            name: trip.name.clone(),
            image_url: trip.image_urls.first().cloned().unwrap_or_default(),
            location: trip
                .itinerary
                .first()
                .map(|stop| stop.location.clone())
                .unwrap_or_default(),
            tags: trip.tags.clone(),
            price: trip.estimated_price.clone(),
        }
    }
}

/// Dashboard page
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardView {
    /// Greeting
    pub title: String,
    /// Subtitle
    pub description: &'static str,
    /// Statistic cards
    pub stats: Vec<StatCard>,
    /// Most recent trips
    pub trips: Vec<TripCard>,
}

/// Build the dashboard for `user` from `data`
pub fn dashboard_view(user: Option<&UserRecord>, data: &DashboardData) -> DashboardView {
    let name = user
        .map(|u| u.name.trim())
        .filter(|name| !name.is_empty())
        .unwrap_or("Guest");
    let stats = &data.stats;

    DashboardView {
        title: format!("Welcome {name}"),
        description: "Track activity, trends and popular destinations in real time",
        stats: vec![
            StatCard::new(
                "Total Users",
                stats.total_users,
                stats.users_joined.current_month,
                stats.users_joined.last_month,
            ),
            StatCard::new(
                "Total Trips",
                stats.total_trips,
                stats.trips_created.current_month,
                stats.trips_created.last_month,
            ),
            StatCard::new(
                "Active Users Today",
                stats.user_role.total,
                stats.user_role.current_month,
                stats.user_role.last_month,
            ),
        ],
        trips: data
            .trips
            .iter()
            .take(TRIP_CARD_COUNT)
            .map(TripCard::from)
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tourvisto_core::UserStatus;
    use tourvisto_core::types::{DashboardStats, ItineraryStop, MonthlyCount, RoleCount};

    fn trip(n: usize) -> TripSummary {
        TripSummary {
            id: n.to_string(),
            name: format!("Trip {n}"),
            image_urls: vec![format!("/images/{n}.jpg"), "/images/other.jpg".to_string()],
            itinerary: vec![ItineraryStop {
                location: format!("City {n}"),
            }],
            tags: vec!["Adventure".to_string()],
            travel_style: "Adventure".to_string(),
            estimated_price: format!("${n}00"),
        }
    }

    fn data() -> DashboardData {
        DashboardData {
            stats: DashboardStats {
                total_users: 12_450,
                users_joined: MonthlyCount {
                    current_month: 218,
                    last_month: 176,
                },
                total_trips: 3_210,
                trips_created: MonthlyCount {
                    current_month: 150,
                    last_month: 250,
                },
                user_role: RoleCount {
                    total: 62,
                    current_month: 25,
                    last_month: 25,
                },
            },
            trips: (1..=6).map(trip).collect(),
        }
    }

    #[test]
    fn test_greeting() {
        let admin = UserRecord {
            id: "d1".to_string(),
            account_id: "a1".to_string(),
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            image_url: None,
            joined_at: String::new(),
            status: UserStatus::Admin,
        };

        assert_eq!(dashboard_view(Some(&admin), &data()).title, "Welcome Ada");
        assert_eq!(dashboard_view(None, &data()).title, "Welcome Guest");
    }

    #[test]
    fn test_stat_cards() {
        let view = dashboard_view(None, &data());
        let titles: Vec<_> = view.stats.iter().map(|c| c.header_title).collect();
        assert_eq!(titles, vec!["Total Users", "Total Trips", "Active Users Today"]);

        assert_eq!(view.stats[0].total, 12_450);
        assert_eq!(view.stats[0].trend, Trend::Increment);
        assert_eq!(view.stats[1].trend, Trend::Decrement);
        assert!((view.stats[1].percentage - 40.0).abs() < f64::EPSILON);
        assert_eq!(view.stats[2].trend, Trend::NoChange);
        assert_eq!(view.stats[2].total, 62);
    }

    #[test]
    fn test_first_four_trips() {
        let view = dashboard_view(None, &data());

        assert_eq!(view.trips.len(), 4);
        assert_eq!(
            view.trips[0],
            TripCard {
                id: "1".to_string(),
                name: "Trip 1".to_string(),
                image_url: "/images/1.jpg".to_string(),
                location: "City 1".to_string(),
                tags: vec!["Adventure".to_string()],
                price: "$100".to_string(),
            }
        );
    }

    #[test]
    fn test_trip_without_images_or_itinerary() {
        let card = TripCard::from(&TripSummary {
            id: "x".to_string(),
            name: "Bare".to_string(),
            ..TripSummary::default()
        });
        assert_eq!(card.image_url, "");
        assert_eq!(card.location, "");
    }
}
