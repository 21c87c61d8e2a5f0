/// Lookups farther than this from every known city find nothing
pub const MAX_CITY_DISTANCE_KM: f64 = 50.0;

const KM_PER_DEGREE: f64 = 111.0;

const CITIES: [(&str, f64, f64); 4] = [
    ("北京", 39.9042, 116.4074),
    ("上海", 31.2304, 121.4737),
    ("广州", 23.1291, 113.2644),
    ("深圳", 22.5431, 114.0579),
];

/// Rough distance in km, treating degrees as a flat grid
fn distance_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    ((lat1 - lat2).powi(2) + (lon1 - lon2).powi(2)).sqrt() * KM_PER_DEGREE
}

/// Closest known city within [`MAX_CITY_DISTANCE_KM`]
pub fn nearest_city(latitude: f64, longitude: f64) -> Option<&'static str> {
    CITIES
        .iter()
        .map(|&(name, lat, lon)| (name, distance_km(latitude, longitude, lat, lon)))
        .min_by(|a, b| a.1.total_cmp(&b.1))
        .filter(|&(_, distance)| distance < MAX_CITY_DISTANCE_KM)
        .map(|(name, _)| name)
}
