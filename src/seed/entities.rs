//! Field-map builders for the seeded records.
//!
//! Builders are pure functions over an injected RNG and return the JSON
//! field map handed to the document store. Cross-collection references are
//! wired here: a property picks one agent and bounded subsets of the
//! already-created review and gallery ids.

use rand::prelude::*;
use serde_json::{json, Value};

use super::images;
use super::sampler::random_subset;

/// Property types offered by the listing app.
pub const PROPERTY_TYPES: [&str; 8] = [
    "House",
    "Townhouse",
    "Condo",
    "Duplex",
    "Studio",
    "Villa",
    "Apartment",
    "Other",
];

/// Facility vocabulary for the `facilities` field.
pub const FACILITIES: [&str; 5] = ["Laundry", "Parking", "Gym", "Wifi", "Pet-friendly"];

/// Bounds for the per-property review reference subset.
pub const REVIEWS_PER_PROPERTY: (usize, usize) = (5, 7);

/// Bounds for the per-property gallery reference subset.
pub const GALLERIES_PER_PROPERTY: (usize, usize) = (3, 8);

/// Build the field map for agent `index` (1-based).
pub fn agent<R: Rng + ?Sized>(rng: &mut R, index: usize) -> Value {
    json!({
        "name": format!("Agent {index}"),
        "email": format!("agent{index}@example.com"),
        "avatar": *images::AGENT_IMAGES.choose(rng).expect("non-empty image pool"),
    })
}

/// Build the field map for review `index` (1-based).
pub fn review<R: Rng + ?Sized>(rng: &mut R, index: usize) -> Value {
    json!({
        "name": format!("Reviewer {index}"),
        "avatar": *images::REVIEW_IMAGES.choose(rng).expect("non-empty image pool"),
        "review": format!("This is a review by Reviewer {index}."),
        "rating": rng.random_range(1..=5u32),
    })
}

/// Build the field map for one gallery entry.
pub fn gallery(image: &str) -> Value {
    json!({ "image": image })
}

/// Build the field map for property `index` (1-based).
///
/// Picks one agent id uniformly (with replacement across properties), a
/// review subset sized within [`REVIEWS_PER_PROPERTY`], a gallery subset
/// sized within [`GALLERIES_PER_PROPERTY`], and a non-empty facility subset.
pub fn property<R: Rng + ?Sized>(
    rng: &mut R,
    index: usize,
    agent_ids: &[String],
    review_ids: &[String],
    gallery_ids: &[String],
) -> Value {
    let agent = agent_ids.choose(rng).expect("at least one agent");
    let reviews = random_subset(
        rng,
        review_ids,
        REVIEWS_PER_PROPERTY.0,
        REVIEWS_PER_PROPERTY.1,
    );
    let gallery = random_subset(
        rng,
        gallery_ids,
        GALLERIES_PER_PROPERTY.0,
        GALLERIES_PER_PROPERTY.1,
    );
    let facilities = random_subset(rng, &FACILITIES, 1, FACILITIES.len());

    json!({
        "name": format!("Property {index}"),
        "type": *PROPERTY_TYPES.choose(rng).expect("non-empty type list"),
        "description": format!("This is the description for Property {index}."),
        "address": format!("123 Property Street, City {index}"),
        "geolocation": format!("192.168.1.{index}, 192.168.1.{index}"),
        "price": rng.random_range(1000..=9999u32),
        "area": rng.random_range(500..=3499u32),
        "bedrooms": rng.random_range(1..=5u32),
        "bathrooms": rng.random_range(1..=5u32),
        "rating": rng.random_range(1..=5u32),
        "facilities": facilities,
        "image": property_image(rng, index),
        "agent": agent,
        "reviews": reviews,
        "gallery": gallery,
    })
}

/// Cover image for property `index`: positional while the pool index is in
/// range, a uniform random pick past the end. Indices are 1-based, so pool
/// entry 0 is never chosen positionally.
fn property_image<R: Rng + ?Sized>(rng: &mut R, index: usize) -> &'static str {
    if index < images::PROPERTY_IMAGES.len() {
        images::PROPERTY_IMAGES[index]
    } else {
        images::PROPERTY_IMAGES
            .choose(rng)
            .expect("non-empty image pool")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use std::collections::HashSet;

    fn ids(prefix: &str, count: usize) -> Vec<String> {
        (0..count).map(|i| format!("{prefix}-{i}")).collect()
    }

    fn build_property(seed: u64) -> Value {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        property(
            &mut rng,
            1,
            &ids("agent", 5),
            &ids("review", 20),
            &ids("gallery", 10),
        )
    }

    #[test]
    fn test_agent_fields() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let agent = agent(&mut rng, 3);

        assert_eq!(agent["name"], "Agent 3");
        assert_eq!(agent["email"], "agent3@example.com");
        let avatar = agent["avatar"].as_str().expect("avatar is a string");
        assert!(images::AGENT_IMAGES.contains(&avatar));
    }

    #[test]
    fn test_review_rating_in_range() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);

        for i in 1..=50 {
            let review = review(&mut rng, i);
            let rating = review["rating"].as_u64().expect("rating is a number");
            assert!((1..=5).contains(&rating));
        }
    }

    #[test]
    fn test_property_references_known_ids() {
        let agents = ids("agent", 5);
        let reviews = ids("review", 20);
        let galleries = ids("gallery", 10);
        let mut rng = ChaCha8Rng::seed_from_u64(7);

        for i in 1..=50 {
            let prop = property(&mut rng, i, &agents, &reviews, &galleries);

            let agent = prop["agent"].as_str().expect("agent id is a string");
            assert!(agents.iter().any(|a| a == agent));

            let review_refs: Vec<&str> = prop["reviews"]
                .as_array()
                .expect("reviews is an array")
                .iter()
                .map(|v| v.as_str().expect("review id is a string"))
                .collect();
            assert!((5..=7).contains(&review_refs.len()));
            let unique: HashSet<&str> = review_refs.iter().copied().collect();
            assert_eq!(unique.len(), review_refs.len());
            assert!(review_refs.iter().all(|r| reviews.iter().any(|x| x == r)));

            let gallery_refs = prop["gallery"].as_array().expect("gallery is an array");
            assert!((3..=8).contains(&gallery_refs.len()));
        }
    }

    #[test]
    fn test_property_facilities_from_vocabulary() {
        for seed in 0..50 {
            let prop = build_property(seed);
            let facilities: Vec<&str> = prop["facilities"]
                .as_array()
                .expect("facilities is an array")
                .iter()
                .map(|v| v.as_str().expect("facility is a string"))
                .collect();

            assert!(!facilities.is_empty());
            assert!(facilities.len() <= FACILITIES.len());
            let unique: HashSet<&str> = facilities.iter().copied().collect();
            assert_eq!(unique.len(), facilities.len());
            assert!(facilities.iter().all(|f| FACILITIES.contains(f)));
        }
    }

    #[test]
    fn test_property_numeric_ranges() {
        for seed in 0..50 {
            let prop = build_property(seed);

            let price = prop["price"].as_u64().expect("price is a number");
            assert!((1000..=9999).contains(&price));

            let area = prop["area"].as_u64().expect("area is a number");
            assert!((500..=3499).contains(&area));

            for field in ["bedrooms", "bathrooms", "rating"] {
                let value = prop[field].as_u64().expect("numeric field");
                assert!((1..=5).contains(&value), "{field} out of range: {value}");
            }
        }
    }

    #[test]
    fn test_property_type_from_enum() {
        for seed in 0..20 {
            let prop = build_property(seed);
            let property_type = prop["type"].as_str().expect("type is a string");
            assert!(PROPERTY_TYPES.contains(&property_type));
        }
    }

    #[test]
    fn test_property_image_positional_within_pool() {
        let mut rng = ChaCha8Rng::seed_from_u64(5);

        // In-range indices use the pool entry at that index
        for index in 1..images::PROPERTY_IMAGES.len() {
            assert_eq!(
                property_image(&mut rng, index),
                images::PROPERTY_IMAGES[index]
            );
        }

        // Past the pool the pick is random but still from the pool
        let fallback = property_image(&mut rng, images::PROPERTY_IMAGES.len());
        assert!(images::PROPERTY_IMAGES.contains(&fallback));
    }
}
