//! Real Seoul locations for realistic test fixtures.
//!
//! Coordinates are approximate (within a few dozen meters), which is plenty
//! for ordering stops by straight-line distance.

use itinerary_planner::model::{Category, Stop};
use itinerary_planner::places::{PlaceDetails, PlaceLocation};
use itinerary_planner::traits::PlaceLookup;

/// A named location with coordinates.
#[derive(Debug, Clone)]
pub struct Location {
    pub name: &'static str,
    pub description: &'static str,
    pub lat: f64,
    pub lng: f64,
}

impl Location {
    pub const fn new(name: &'static str, description: &'static str, lat: f64, lng: f64) -> Self {
        Self {
            name,
            description,
            lat,
            lng,
        }
    }

    pub fn stop(&self, category: Category) -> Stop {
        Stop::new(self.name, category)
            .with_description(self.description)
            .with_location(self.lat, self.lng)
    }

    pub fn sight(&self) -> Stop {
        self.stop(Category::Sightseeing)
    }

    pub fn meal(&self) -> Stop {
        self.stop(Category::Meal)
    }
}

// ============================================================================
// Palaces, Neighbourhoods and Landmarks
// ============================================================================

pub const GYEONGBOKGUNG: Location = Location::new("Gyeongbokgung", "main royal palace", 37.5796, 126.9770);
pub const BUKCHON: Location = Location::new("Bukchon Hanok Village", "traditional houses", 37.5826, 126.9830);
pub const CHANGDEOKGUNG: Location = Location::new("Changdeokgung", "palace and secret garden", 37.5794, 126.9910);
pub const INSADONG: Location = Location::new("Insadong", "antique street", 37.5743, 126.9856);
pub const JOGYESA: Location = Location::new("Jogyesa", "buddhist temple", 37.5740, 126.9816);
pub const CHEONGGYECHEON: Location = Location::new("Cheonggyecheon Plaza", "stream walk", 37.5690, 126.9780);
pub const MYEONGDONG_CATHEDRAL: Location = Location::new("Myeongdong Cathedral", "gothic cathedral", 37.5633, 126.9873);
pub const N_SEOUL_TOWER: Location = Location::new("N Seoul Tower", "city views", 37.5512, 126.9882);
pub const DDP: Location = Location::new("Dongdaemun Design Plaza", "architecture", 37.5665, 127.0092);
pub const IHWA_MURAL_VILLAGE: Location = Location::new("Ihwa Mural Village", "hillside murals", 37.5790, 127.0060);

pub const LANDMARKS: &[Location] = &[
    GYEONGBOKGUNG,
    BUKCHON,
    CHANGDEOKGUNG,
    INSADONG,
    JOGYESA,
    CHEONGGYECHEON,
    MYEONGDONG_CATHEDRAL,
    N_SEOUL_TOWER,
    DDP,
    IHWA_MURAL_VILLAGE,
];

// ============================================================================
// Restaurants and Cafes
// ============================================================================

pub const ONION_ANGUK: Location = Location::new("Onion Anguk", "bakery in a hanok", 37.5776, 126.9866);
pub const MYEONGDONG_KYOJA: Location = Location::new("Myeongdong Kyoja", "knife-cut noodle soup", 37.5625, 126.9856);
pub const TOSOKCHON: Location = Location::new("Tosokchon", "famous ginseng chicken soup", 37.5779, 126.9714);
pub const GWANGJANG_MARKET: Location = Location::new("Gwangjang Market", "mung bean pancakes", 37.5701, 126.9996);
pub const MAPLE_TREE_HOUSE: Location = Location::new("Maple Tree House", "korean bbq", 37.5340, 126.9940);

pub const RESTAURANTS: &[Location] = &[ONION_ANGUK, MYEONGDONG_KYOJA, TOSOKCHON, GWANGJANG_MARKET, MAPLE_TREE_HOUSE];

// ============================================================================
// Places Lookup
// ============================================================================

/// Answers lookups from the fixture tables; anything else is not found.
pub struct FixtureLookup;

impl PlaceLookup for FixtureLookup {
    fn lookup(&self, place_name: &str, _destination: &str) -> Option<PlaceDetails> {
        LANDMARKS
            .iter()
            .chain(RESTAURANTS.iter())
            .find(|location| location.name == place_name)
            .map(|location| PlaceDetails {
                found: true,
                location: Some(PlaceLocation {
                    latitude: location.lat,
                    longitude: location.lng,
                }),
                rating: Some(4.5),
                user_rating_count: Some(800),
                ..PlaceDetails::default()
            })
    }
}
