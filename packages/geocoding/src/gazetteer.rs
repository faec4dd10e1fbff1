//! Fixed gazetteer of known place names and the non-geographic ignore-list.
//!
//! Entries are lowercase. `PLACES` is an ordered slice, not a set: query
//! simplification picks the first entry by iteration order, so the order is
//! part of the observable behavior.

use std::collections::HashSet;
use std::sync::LazyLock;

/// Major world cities, countries, and US states, in match-priority order.
pub const PLACES: &[&str] = &[
    // Major cities
    "new york",
    "los angeles",
    "chicago",
    "houston",
    "phoenix",
    "philadelphia",
    "san antonio",
    "san diego",
    "dallas",
    "san jose",
    "austin",
    "san francisco",
    "boston",
    "seattle",
    "miami",
    "atlanta",
    "tokyo",
    "delhi",
    "shanghai",
    "sao paulo",
    "mexico city",
    "cairo",
    "mumbai",
    "beijing",
    "dhaka",
    "osaka",
    "london",
    "paris",
    "istanbul",
    "moscow",
    "karachi",
    "lagos",
    "manila",
    "berlin",
    "rome",
    "madrid",
    "toronto",
    "sydney",
    "melbourne",
    "singapore",
    "dubai",
    "bangkok",
    "hong kong",
    "kuala lumpur",
    "jakarta",
    "seoul",
    "tehran",
    "brussels",
    "johannesburg",
    "kiev",
    // Countries
    "usa",
    "united states",
    "america",
    "canada",
    "mexico",
    "brazil",
    "argentina",
    "uk",
    "united kingdom",
    "england",
    "france",
    "germany",
    "spain",
    "italy",
    "russia",
    "china",
    "japan",
    "india",
    "australia",
    "south korea",
    "north korea",
    "egypt",
    "south africa",
    "nigeria",
    "kenya",
    "pakistan",
    "bangladesh",
    "thailand",
    "vietnam",
    "malaysia",
    "indonesia",
    "philippines",
    "new zealand",
    "ireland",
    "portugal",
    "sweden",
    "norway",
    "denmark",
    "finland",
    "belgium",
    "netherlands",
    "austria",
    "switzerland",
    "poland",
    "ukraine",
    "turkey",
    "iran",
    "iraq",
    "saudi arabia",
    "uae",
    "united arab emirates",
    "qatar",
    "israel",
    "lebanon",
    // US states
    "california",
    "texas",
    "florida",
    "new york state",
    "pennsylvania",
    "illinois",
    "ohio",
    "georgia",
    "north carolina",
    "michigan",
    "new jersey",
    "virginia",
    "washington",
    "arizona",
    "massachusetts",
    "tennessee",
    "indiana",
    "missouri",
    "maryland",
    "wisconsin",
    "colorado",
    "minnesota",
    "south carolina",
    "alabama",
    "louisiana",
    "kentucky",
    "oregon",
    "oklahoma",
    "connecticut",
    "utah",
    "iowa",
    "nevada",
    "arkansas",
    "mississippi",
    "kansas",
    "new mexico",
    "nebraska",
    "west virginia",
    "idaho",
    "hawaii",
    "new hampshire",
    "maine",
    "montana",
    "rhode island",
    "delaware",
    "south dakota",
    "north dakota",
    "alaska",
    "vermont",
    "wyoming",
];

/// Terms that must never be treated as a location signal.
pub const IGNORED: &[&str] = &[
    "twitter",
    "internet",
    "home",
    "work",
    "everywhere",
    "nowhere",
    "online",
    "inbox",
    "cloud",
    "worldwide",
    "global",
    "earth",
    "planet",
    "universe",
    "website",
    "app",
    "web",
    "platform",
    "social media",
    "facebook",
    "instagram",
    "snapchat",
    "tiktok",
    "linkedin",
    "youtube",
    "twitch",
    "reality",
    "cyberspace",
    "metaverse",
    "matrix",
    "zoom",
    "microsoft",
    "apple",
    "google",
    "amazon",
];

static PLACE_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| PLACES.iter().copied().collect());

static IGNORE_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| IGNORED.iter().copied().collect());

/// Whether `term` names a known place (case-insensitive).
pub fn is_known(term: &str) -> bool {
    PLACE_SET.contains(term.to_lowercase().as_str())
}

/// Whether `term` is on the ignore-list (case-insensitive, trimmed).
pub fn is_ignored(term: &str) -> bool {
    IGNORE_SET.contains(term.trim().to_lowercase().as_str())
}

/// First gazetteer entry contained anywhere in `text`, by entry order.
pub fn first_contained(text: &str) -> Option<&'static str> {
    let lower = text.to_lowercase();
    PLACES.iter().copied().find(|place| lower.contains(place))
}
