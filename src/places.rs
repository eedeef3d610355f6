//! Places-lookup HTTP adapter and stop enrichment.

use serde::{Deserialize, Serialize};

use crate::model::{Coordinate, DayPlan, Stop, TravelPlan};
use crate::traits::PlaceLookup;

#[derive(Debug, Clone)]
pub struct PlacesConfig {
    pub base_url: String,
    pub timeout_secs: u64,
}

impl Default for PlacesConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000/api".to_string(),
            timeout_secs: 10,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlaceLocation {
    pub latitude: f64,
    pub longitude: f64,
}

/// Details returned for a place query.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceDetails {
    pub found: bool,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub user_rating_count: Option<u32>,
    #[serde(default)]
    pub location: Option<PlaceLocation>,
    #[serde(default)]
    pub photo_url: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct PlaceQuery<'a> {
    place_name: &'a str,
}

#[derive(Debug, Clone)]
pub struct PlacesClient {
    config: PlacesConfig,
    client: reqwest::blocking::Client,
}

impl PlacesClient {
    pub fn new(config: PlacesConfig) -> Result<Self, reqwest::Error> {
        let client = reqwest::blocking::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { config, client })
    }
}

/// Search text sent to the places service: "Tosokchon in Seoul".
pub fn query_text(place_name: &str, destination: &str) -> String {
    let destination = destination.trim();
    if destination.is_empty() {
        place_name.to_string()
    } else {
        format!("{} in {}", place_name, destination)
    }
}

impl PlaceLookup for PlacesClient {
    fn lookup(&self, place_name: &str, destination: &str) -> Option<PlaceDetails> {
        let query = query_text(place_name, destination);
        let url = format!("{}/get-place-details", self.config.base_url);

        let response = self
            .client
            .post(url)
            .json(&PlaceQuery { place_name: &query })
            .send()
            .and_then(|resp| resp.error_for_status())
            .and_then(|resp| resp.json::<PlaceDetails>());

        match response {
            Ok(details) if details.found => Some(details),
            Ok(_) => None,
            Err(err) => {
                tracing::warn!(place = %query, error = %err, "place lookup failed");
                None
            }
        }
    }
}

/// Merge looked-up details into a copy of `stop`. Values the details omit are kept.
pub fn enrich_stop(stop: &Stop, details: &PlaceDetails) -> Stop {
    let mut enriched = stop.clone();
    if !details.found {
        return enriched;
    }

    if let Some(location) = details.location {
        enriched.coordinate = Some(Coordinate::new(location.latitude, location.longitude));
    }
    if details.rating.is_some() {
        enriched.rating = details.rating;
    }
    if details.user_rating_count.is_some() {
        enriched.user_rating_count = details.user_rating_count;
    }
    if details.address.is_some() {
        enriched.address = details.address.clone();
    }
    if details.photo_url.is_some() {
        enriched.photo_url = details.photo_url.clone();
    }

    enriched
}

pub fn enrich_day<L>(day: &DayPlan, lookup: &L, destination: &str) -> DayPlan
where
    L: PlaceLookup,
{
    let stops = day
        .stops
        .iter()
        .map(|stop| match lookup.lookup(&stop.name, destination) {
            Some(details) => enrich_stop(stop, &details),
            None => stop.clone(),
        })
        .collect();

    DayPlan { day: day.day, stops }
}

/// Enrich every stop of a plan. Must finish before the plan is optimized.
pub fn enrich_plan<L>(plan: &TravelPlan, lookup: &L) -> TravelPlan
where
    L: PlaceLookup,
{
    let destination = plan.destination.as_deref().unwrap_or("");
    TravelPlan {
        title: plan.title.clone(),
        destination: plan.destination.clone(),
        days: plan.days.iter().map(|day| enrich_day(day, lookup, destination)).collect(),
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::collections::HashMap;

    use super::*;
    use crate::model::Category;

    struct FixedLookup {
        known: HashMap<String, PlaceDetails>,
        queries: RefCell<Vec<String>>,
    }

    impl PlaceLookup for FixedLookup {
        fn lookup(&self, place_name: &str, destination: &str) -> Option<PlaceDetails> {
            self.queries.borrow_mut().push(query_text(place_name, destination));
            self.known.get(place_name).cloned()
        }
    }

    fn found_at(lat: f64, lng: f64) -> PlaceDetails {
        PlaceDetails {
            found: true,
            location: Some(PlaceLocation { latitude: lat, longitude: lng }),
            rating: Some(4.6),
            ..PlaceDetails::default()
        }
    }

    #[test]
    fn test_query_text() {
        assert_eq!(query_text("Tosokchon", "Seoul"), "Tosokchon in Seoul");
        assert_eq!(query_text("Tosokchon", "  "), "Tosokchon");
    }

    #[test]
    fn test_decode_response() {
        let details: PlaceDetails = serde_json::from_str(
            r#"{"found": true, "address": "5 Jahamun-ro", "rating": 4.4,
                "userRatingCount": 21000, "location": {"latitude": 37.5779, "longitude": 126.9714},
                "photoUrl": null}"#,
        )
        .expect("decode details");
        assert!(details.found);
        assert_eq!(details.user_rating_count, Some(21000));
        assert_eq!(details.photo_url, None);

        let missing: PlaceDetails = serde_json::from_str(r#"{"found": false}"#).expect("decode");
        assert!(!missing.found);
    }

    #[test]
    fn test_enrich_stop_merges_fields() {
        let stop = Stop::new("Tosokchon", Category::Meal).with_description("samgyetang");
        let enriched = enrich_stop(&stop, &found_at(37.5779, 126.9714));

        assert_eq!(enriched.coordinate, Some(Coordinate::new(37.5779, 126.9714)));
        assert_eq!(enriched.rating, Some(4.6));
        assert_eq!(enriched.description, "samgyetang");
        assert!(stop.coordinate.is_none());
    }

    #[test]
    fn test_enrich_stop_ignores_not_found() {
        let stop = Stop::new("Nowhere", Category::Sightseeing).with_location(1.0, 2.0);
        let details = PlaceDetails {
            found: false,
            location: Some(PlaceLocation { latitude: 9.0, longitude: 9.0 }),
            ..PlaceDetails::default()
        };
        assert_eq!(enrich_stop(&stop, &details), stop);
    }

    #[test]
    fn test_enrich_plan_uses_destination() {
        let lookup = FixedLookup {
            known: HashMap::from([("Gyeongbokgung".to_string(), found_at(37.5796, 126.9770))]),
            queries: RefCell::new(Vec::new()),
        };
        let plan = TravelPlan {
            title: "Seoul".to_string(),
            destination: Some("Seoul".to_string()),
            days: vec![DayPlan {
                day: 1,
                stops: vec![
                    Stop::new("Gyeongbokgung", Category::Sightseeing),
                    Stop::new("Unknown Alley", Category::Sightseeing),
                ],
            }],
        };

        let enriched = enrich_plan(&plan, &lookup);
        let stops = &enriched.days[0].stops;
        assert!(stops[0].has_coordinate());
        assert!(!stops[1].has_coordinate());
        assert_eq!(
            *lookup.queries.borrow(),
            vec!["Gyeongbokgung in Seoul".to_string(), "Unknown Alley in Seoul".to_string()]
        );
    }
}
