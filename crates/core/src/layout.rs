//! Built-in Biology City layouts, one per map variant.

use serde::{Deserialize, Serialize};
use crate::catalog::TopicCatalog;
use crate::error::UnknownVariant;
use crate::id::TopicId;
use crate::topic::{Position, Topic, Zone};

/// Visual flavour of the map. Each one ships its own layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MapVariant {
    /// Flat top-down map
    Flat,
    /// Isometric map with roads
    Isometric,
    /// Realistic buildings on the large map
    Realistic,
    /// Large zoned map with districts
    #[default]
    CitiesSkylines,
}

impl MapVariant {
    /// All variants.
    pub const ALL: [MapVariant; 4] = [
        MapVariant::Flat,
        MapVariant::Isometric,
        MapVariant::Realistic,
        MapVariant::CitiesSkylines,
    ];

    /// Get string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            MapVariant::Flat => "flat",
            MapVariant::Isometric => "isometric",
            MapVariant::Realistic => "realistic",
            MapVariant::CitiesSkylines => "cities-skylines",
        }
    }

    /// Build the catalog for this variant.
    pub fn catalog(self) -> TopicCatalog {
        let (anchor, topics) = match self {
            MapVariant::Flat => (Position::new(40.0, 40.0), flat_topics()),
            MapVariant::Isometric => (Position::new(40.0, 60.0), isometric_topics()),
            MapVariant::Realistic | MapVariant::CitiesSkylines => {
                (Position::new(40.0, 60.0), zoned_topics())
            }
        };
        TopicCatalog::from_parts(topics, anchor)
    }
}

impl std::fmt::Display for MapVariant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for MapVariant {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "flat" => Ok(MapVariant::Flat),
            "isometric" => Ok(MapVariant::Isometric),
            "realistic" => Ok(MapVariant::Realistic),
            "cities-skylines" | "cities_skylines" | "skylines" => Ok(MapVariant::CitiesSkylines),
            _ => Err(UnknownVariant(s.to_string())),
        }
    }
}

/// Artwork tags in unlock order. Shared by every layout.
pub const DISPLAY_TYPES: [&str; 14] = [
    "atp-power-plant",
    "photosynthesis-solar-park",
    "chloroplast-research-center",
    "light-tower",
    "calvin-cycle-factory",
    "organic-synthesis-lab",
    "digestive-diversity-museum",
    "digestive-anatomy-tower",
    "human-digestive-hospital",
    "chemical-digestion-lab",
    "absorption-transport-station",
    "oxygen-respiration-powerhouse",
    "krebs-ets-reactor",
    "fermentation-brewery",
];

const SHORT_NAMES: [&str; 14] = [
    "ATP Power Plant",
    "Photosynthesis Solar Park",
    "Chloroplast Research Center",
    "Light Tower",
    "Calvin Cycle Factory",
    "Organic Synthesis Lab",
    "Digestive Diversity Museum",
    "Digestive Anatomy Tower",
    "Human Digestive Hospital",
    "Chemical Digestion Lab",
    "Absorption & Transport Station",
    "Oxygen Respiration Powerhouse",
    "Krebs & ETS Reactor",
    "Fermentation Brewery",
];

const LONG_NAMES: [&str; 14] = [
    "ATP Power Plant",
    "Photosynthesis Greenhouse Park",
    "Chloroplast Research Laboratory",
    "Light Tower Observatory",
    "Calvin Cycle Factory",
    "Organic Synthesis Laboratory",
    "Digestive Diversity Museum",
    "Digestive Anatomy Tower",
    "Human Digestive Hospital",
    "Chemical Digestion Lab",
    "Absorption & Transport Station",
    "Oxygen Respiration Powerhouse",
    "Krebs & ETS Reactor",
    "Fermentation Brewery",
];

const FLAT_POSITIONS: [(f32, f32); 14] = [
    (50.0, 400.0),
    (200.0, 350.0),
    (350.0, 300.0),
    (500.0, 250.0),
    (650.0, 200.0),
    (750.0, 300.0),
    (700.0, 450.0),
    (550.0, 500.0),
    (400.0, 550.0),
    (250.0, 500.0),
    (100.0, 550.0),
    (50.0, 700.0),
    (250.0, 750.0),
    (450.0, 700.0),
];

const ISOMETRIC_POSITIONS: [(f32, f32); 14] = [
    (80.0, 500.0),
    (250.0, 450.0),
    (420.0, 380.0),
    (580.0, 320.0),
    (720.0, 260.0),
    (850.0, 320.0),
    (780.0, 480.0),
    (620.0, 540.0),
    (450.0, 600.0),
    (280.0, 560.0),
    (120.0, 620.0),
    (60.0, 760.0),
    (280.0, 720.0),
    (500.0, 780.0),
];

// At most three buildings per row on the large map.
const ZONED_POSITIONS: [(f32, f32); 14] = [
    (200.0, 100.0),
    (700.0, 180.0),
    (1200.0, 260.0),
    (150.0, 380.0),
    (650.0, 460.0),
    (1150.0, 540.0),
    (250.0, 660.0),
    (750.0, 740.0),
    (1250.0, 820.0),
    (200.0, 940.0),
    (700.0, 1020.0),
    (1200.0, 1100.0),
    (400.0, 1220.0),
    (900.0, 1300.0),
];

const DISTRICTS: [(&str, Zone); 14] = [
    ("Energy Basics", Zone::Industrial),
    ("Photosynthesis Zone", Zone::Research),
    ("Photosynthesis Zone", Zone::Research),
    ("Photosynthesis Zone", Zone::Educational),
    ("Photosynthesis Zone", Zone::Industrial),
    ("Synthesis Zone", Zone::Research),
    ("Digestion Zone", Zone::Educational),
    ("Digestion Zone", Zone::Educational),
    ("Digestion Zone", Zone::Medical),
    ("Digestion Zone", Zone::Research),
    ("Transport Zone", Zone::Commercial),
    ("Respiration Zone", Zone::Industrial),
    ("Respiration Zone", Zone::Research),
    ("Respiration Zone", Zone::Industrial),
];

fn build(names: &[&str; 14], positions: &[(f32, f32); 14]) -> Vec<Topic> {
    (1u32..)
        .filter_map(TopicId::new)
        .zip(names.iter().zip(DISPLAY_TYPES.iter()).zip(positions.iter()))
        .map(|(id, ((name, kind), &(x, y)))| Topic::new(id, *name, *kind, Position::new(x, y)))
        .collect()
}

fn flat_topics() -> Vec<Topic> {
    build(&SHORT_NAMES, &FLAT_POSITIONS)
}

fn isometric_topics() -> Vec<Topic> {
    build(&LONG_NAMES, &ISOMETRIC_POSITIONS)
}

fn zoned_topics() -> Vec<Topic> {
    build(&LONG_NAMES, &ZONED_POSITIONS)
        .into_iter()
        .zip(DISTRICTS.iter())
        .map(|(topic, &(district, zone))| topic.in_district(district, zone))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_variant_has_fourteen_topics() {
        for variant in MapVariant::ALL {
            let catalog = variant.catalog();
            assert_eq!(catalog.len(), 14, "{variant}");
            assert_eq!(catalog.last_id().get(), 14);
        }
    }

    #[test]
    fn test_builtin_layouts_pass_validation() {
        for variant in MapVariant::ALL {
            let catalog = variant.catalog();
            let checked = TopicCatalog::new(catalog.topics().to_vec(), catalog.anchor()).unwrap();
            assert_eq!(checked, catalog, "{variant}");
        }
    }

    #[test]
    fn test_variants_share_display_types() {
        for variant in MapVariant::ALL {
            let kinds: Vec<_> = variant.catalog().iter().map(|t| t.display_type.to_string()).collect();
            assert_eq!(kinds, DISPLAY_TYPES);
        }
    }

    #[test]
    fn test_flat_layout() {
        let catalog = MapVariant::Flat.catalog();
        let second = catalog.get(TopicId::new(2).unwrap()).unwrap();
        assert_eq!(second.name, "Photosynthesis Solar Park");
        assert_eq!(second.position, Position::new(200.0, 350.0));
        assert!(second.district.is_none());
        assert_eq!(catalog.anchor(), Position::new(40.0, 40.0));
    }

    #[test]
    fn test_zoned_layout_has_districts() {
        let catalog = MapVariant::CitiesSkylines.catalog();
        let last = catalog.get(TopicId::new(14).unwrap()).unwrap();
        assert_eq!(last.district.as_deref(), Some("Respiration Zone"));
        assert_eq!(last.zone, Some(Zone::Industrial));

        let names: Vec<_> = catalog.districts().into_iter().map(|(name, _)| name).collect();
        assert_eq!(
            names,
            vec![
                "Energy Basics",
                "Photosynthesis Zone",
                "Synthesis Zone",
                "Digestion Zone",
                "Transport Zone",
                "Respiration Zone",
            ]
        );
    }

    #[test]
    fn test_parse_variant() {
        assert_eq!("flat".parse::<MapVariant>(), Ok(MapVariant::Flat));
        assert_eq!("Isometric".parse::<MapVariant>(), Ok(MapVariant::Isometric));
        assert_eq!("cities-skylines".parse::<MapVariant>(), Ok(MapVariant::CitiesSkylines));
        assert!("voxel".parse::<MapVariant>().is_err());
        for variant in MapVariant::ALL {
            assert_eq!(variant.as_str().parse::<MapVariant>(), Ok(variant));
        }
    }
}
