/// Built-in replies served when the agent runtime cannot be reached
///
/// Destinations are picked by keyword from the user's message. Replies use
/// the same `{"reply": [...], "text": [...]}` shape as live agent turns.

use concierge_core::{AggregationResult, Place, PlaceRecord};

const INDIA_TEXT: &str = "India offers a wealth of incredible experiences! From the Taj Mahal in Agra to the ghats of Varanasi, here are a few places to start with. Would you like to explore any of these further?";
const JAPAN_TEXT: &str = "Japan blends ancient temples with modern cities. Here are some highlights across Tokyo, Kyoto and beyond. Shall I suggest an itinerary?";
const PARIS_TEXT: &str = "Paris is full of iconic sights. Here are a few must-see places in the city. Would you like restaurant or hotel ideas nearby?";
const GENERIC_TEXT: &str = "I'd love to help you plan your trip! Tell me which country or city you have in mind and I'll suggest places to visit.";

/// Mock aggregation for `message`
pub fn fallback_reply(message: &str) -> AggregationResult {
    let message = message.to_lowercase();
    let mentions = |words: &[&str]| words.iter().any(|word| message.contains(word));

    let (places, text) = if mentions(&["india"]) {
        (india(), INDIA_TEXT)
    } else if mentions(&["japan", "tokyo", "kyoto"]) {
        (japan(), JAPAN_TEXT)
    } else if mentions(&["paris", "france"]) {
        (paris(), PARIS_TEXT)
    } else {
        (Vec::new(), GENERIC_TEXT)
    };

    AggregationResult {
        places: places.into_iter().map(Place::from).collect(),
        texts: vec![text.to_string()],
    }
}

fn landmark(
    place_name: &str,
    address: &str,
    (lat, long): (&str, &str),
    review_ratings: &str,
    highlights: &str,
    image_url: &str,
) -> PlaceRecord {
    let query = format!("{}, {}", place_name, address);
    PlaceRecord {
        place_name: place_name.to_string(),
        address: address.to_string(),
        lat: lat.to_string(),
        long: long.to_string(),
        review_ratings: review_ratings.to_string(),
        highlights: highlights.to_string(),
        image_url: image_url.to_string(),
        map_url: Some(format!(
            "https://www.google.com/maps/search/?api=1&query={}",
            urlencoding::encode(&query)
        )),
        place_id: None,
    }
}

fn india() -> Vec<PlaceRecord> {
    vec![
        landmark(
            "Taj Mahal",
            "Dharmapuri, Forest Colony, Tajganj, Agra, Uttar Pradesh 282001, India",
            ("27.1751", "78.0421"),
            "4.8",
            "Iconic ivory-white marble mausoleum, a UNESCO World Heritage Site.",
            "https://upload.wikimedia.org/wikipedia/commons/thumb/1/1d/Taj_Mahal_%28Edited%29.jpeg/1280px-Taj_Mahal_%28Edited%29.jpeg",
        ),
        landmark(
            "Gateway of India",
            "Apollo Bunder, Colaba, Mumbai, Maharashtra 400001, India",
            ("18.9219", "72.8347"),
            "4.6",
            "Arch monument on the Mumbai waterfront, built in 1924.",
            "https://upload.wikimedia.org/wikipedia/commons/thumb/a/ae/Gateway_of_India_in_Mumbai.jpg/1280px-Gateway_of_India_in_Mumbai.jpg",
        ),
        landmark(
            "Amber Fort",
            "Devisinghpura, Amer, Jaipur, Rajasthan 302028, India",
            ("26.9859", "75.8513"),
            "4.7",
            "Hilltop fort near Jaipur known for its artistic Hindu style elements.",
            "https://upload.wikimedia.org/wikipedia/commons/thumb/d/d3/Amber_Fort_Jaipur_Rajasthan.jpg/1280px-Amber_Fort_Jaipur_Rajasthan.jpg",
        ),
        landmark(
            "Varanasi Ghats",
            "Varanasi, Uttar Pradesh, India",
            ("25.3087", "83.0076"),
            "4.7",
            "Riverside steps on the Ganges, the heart of the city's rituals.",
            "https://upload.wikimedia.org/wikipedia/commons/thumb/b/b3/Ghats_of_Varanasi_on_the_River_Ganges.jpg/1280px-Ghats_of_Varanasi_on_the_River_Ganges.jpg",
        ),
    ]
}

fn japan() -> Vec<PlaceRecord> {
    vec![
        landmark(
            "Fushimi Inari Taisha",
            "68 Fukakusa Yabunouchicho, Fushimi Ward, Kyoto, 612-0882, Japan",
            ("34.9671", "135.7727"),
            "4.7",
            "Shinto shrine famous for thousands of vermilion torii gates.",
            "",
        ),
        landmark(
            "Senso-ji",
            "2 Chome-3-1 Asakusa, Taito City, Tokyo 111-0032, Japan",
            ("35.7148", "139.7967"),
            "4.6",
            "Tokyo's oldest temple, approached through the Nakamise shopping street.",
            "",
        ),
        landmark(
            "Kinkaku-ji",
            "1 Kinkakujicho, Kita Ward, Kyoto, 603-8361, Japan",
            ("35.0394", "135.7292"),
            "4.6",
            "Zen temple whose top floors are covered in gold leaf.",
            "",
        ),
    ]
}

fn paris() -> Vec<PlaceRecord> {
    vec![
        landmark(
            "Eiffel Tower",
            "Champ de Mars, 5 Av. Anatole France, 75007 Paris, France",
            ("48.8584", "2.2945"),
            "4.7",
            "Wrought-iron lattice tower with views across the city.",
            "",
        ),
        landmark(
            "Louvre Museum",
            "Rue de Rivoli, 75001 Paris, France",
            ("48.8606", "2.3376"),
            "4.7",
            "The world's most visited museum, home of the Mona Lisa.",
            "",
        ),
        landmark(
            "Sacré-Cœur",
            "35 Rue du Chevalier de la Barre, 75018 Paris, France",
            ("48.8867", "2.3431"),
            "4.7",
            "Basilica at the summit of Montmartre.",
            "",
        ),
    ]
}
