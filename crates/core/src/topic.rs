//! Topic classification.
//!
//! A message is lowercased and tested against fixed keyword groups in a
//! fixed priority order. The first group with any keyword contained in the
//! message wins; specificity and match length play no part.
//!
//! The order produces deliberate overlaps that callers rely on:
//! - "mars" hits the rover group (3rd) before the planet group (7th).
//! - "andromeda" hits the constellation group (6th) before
//!   "andromeda galaxy" in the galaxy group (9th) can.
//! - "near earth" hits the asteroid group (2nd) before "earth" (7th).

use serde::{Deserialize, Serialize};

/// The classification label for a user message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Topic {
    /// Astronomy picture of the day
    PictureOfDay,
    /// Near-Earth objects (asteroids)
    NearEarthObject,
    MarsRover,
    Launch,
    /// Indian space agency trivia
    AgencyTrivia,
    Constellation,
    Planet,
    Star,
    Galaxy,
    /// Nothing matched; answered by the generative model
    General,
}

impl Topic {
    /// Every topic, in classification priority order (`General` last).
    pub const ALL: [Topic; 10] = [
        Topic::PictureOfDay,
        Topic::NearEarthObject,
        Topic::MarsRover,
        Topic::Launch,
        Topic::AgencyTrivia,
        Topic::Constellation,
        Topic::Planet,
        Topic::Star,
        Topic::Galaxy,
        Topic::General,
    ];

    /// The kebab-case tag used in logs and serialized output.
    pub fn as_str(&self) -> &'static str {
        match self {
            Topic::PictureOfDay => "picture-of-day",
            Topic::NearEarthObject => "near-earth-object",
            Topic::MarsRover => "mars-rover",
            Topic::Launch => "launch",
            Topic::AgencyTrivia => "agency-trivia",
            Topic::Constellation => "constellation",
            Topic::Planet => "planet",
            Topic::Star => "star",
            Topic::Galaxy => "galaxy",
            Topic::General => "general",
        }
    }

    /// Whether answering this topic may involve a live network call.
    pub fn is_live(&self) -> bool {
        matches!(
            self,
            Topic::PictureOfDay | Topic::NearEarthObject | Topic::Launch
        )
    }
}

impl std::fmt::Display for Topic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Topic {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Topic::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| format!("unknown topic: {s}"))
    }
}

/// Ordered (topic, keywords) rules. Evaluated top to bottom.
const RULES: &[(Topic, &[&str])] = &[
    (Topic::PictureOfDay, &["apod", "picture", "photo", "image"]),
    (Topic::NearEarthObject, &["asteroid", "neo", "near earth"]),
    (Topic::MarsRover, &["mars", "rover", "curiosity"]),
    (Topic::Launch, &["spacex", "launch", "rocket"]),
    (Topic::AgencyTrivia, &["isro", "indian space", "india"]),
    (
        Topic::Constellation,
        &[
            "ursa major",
            "ursa minor",
            "orion",
            "cassiopeia",
            "andromeda",
            "constellation",
            "big dipper",
            "little dipper",
        ],
    ),
    (
        Topic::Planet,
        &[
            "mercury", "venus", "earth", "mars", "jupiter", "saturn", "uranus", "neptune", "planet",
        ],
    ),
    (
        Topic::Star,
        &[
            "star",
            "sun",
            "supernova",
            "neutron star",
            "white dwarf",
            "black hole",
        ],
    ),
    (
        Topic::Galaxy,
        &["galaxy", "milky way", "andromeda galaxy", "spiral galaxy"],
    ),
];

/// Classify a raw user message into a [`Topic`].
///
/// Total: any input, including the empty string, yields a topic.
pub fn classify(message: &str) -> Topic {
    let haystack = message.to_lowercase();
    RULES
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|k| haystack.contains(k)))
        .map(|(topic, _)| *topic)
        .unwrap_or(Topic::General)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_group_classifies() {
        assert_eq!(classify("show me today's APOD"), Topic::PictureOfDay);
        assert_eq!(classify("any asteroid nearby?"), Topic::NearEarthObject);
        assert_eq!(classify("what is curiosity doing"), Topic::MarsRover);
        assert_eq!(classify("latest SpaceX mission"), Topic::Launch);
        assert_eq!(classify("tell me about ISRO"), Topic::AgencyTrivia);
        assert_eq!(classify("what is orion"), Topic::Constellation);
        assert_eq!(classify("how big is jupiter"), Topic::Planet);
        assert_eq!(classify("what is a supernova"), Topic::Star);
        assert_eq!(classify("the milky way"), Topic::Galaxy);
    }

    #[test]
    fn rover_group_precedes_planet_and_galaxy() {
        assert_eq!(
            classify("tell me about mars and the andromeda galaxy"),
            Topic::MarsRover
        );
        assert_eq!(classify("Mars"), Topic::MarsRover);
    }

    #[test]
    fn andromeda_galaxy_is_a_constellation_question() {
        assert_eq!(classify("andromeda galaxy"), Topic::Constellation);
    }

    #[test]
    fn near_earth_beats_earth() {
        assert_eq!(classify("near earth objects"), Topic::NearEarthObject);
        assert_eq!(classify("earth"), Topic::Planet);
    }

    #[test]
    fn keyword_containment_is_substring_based() {
        // "sunday" contains "sun"
        assert_eq!(classify("what happens on sunday"), Topic::Star);
        // "neon" contains "neo"
        assert_eq!(classify("neon lights"), Topic::NearEarthObject);
    }

    #[test]
    fn case_is_ignored() {
        assert_eq!(classify("ORION"), classify("orion"));
        assert_eq!(classify("BLACK HOLE"), Topic::Star);
    }

    #[test]
    fn unmatched_input_is_general() {
        assert_eq!(classify(""), Topic::General);
        assert_eq!(classify("tell me a space fact"), Topic::General);
        assert_eq!(classify("?!…"), Topic::General);
        assert_eq!(classify("नमस्ते 🚀"), Topic::General);
    }

    #[test]
    fn topic_tags_roundtrip_through_display_and_serde() {
        for topic in Topic::ALL {
            assert_eq!(topic.to_string().parse::<Topic>().unwrap(), topic);
            let json = serde_json::to_string(&topic).unwrap();
            assert_eq!(json, format!("\"{}\"", topic.as_str()));
        }
    }

    #[test]
    fn only_feed_topics_are_live() {
        let live: Vec<Topic> = Topic::ALL.into_iter().filter(Topic::is_live).collect();
        assert_eq!(
            live,
            vec![Topic::PictureOfDay, Topic::NearEarthObject, Topic::Launch]
        );
    }

    #[test]
    fn general_has_no_rule() {
        assert!(RULES.iter().all(|(topic, _)| *topic != Topic::General));
    }
}
