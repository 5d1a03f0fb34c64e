// src/schema/catalog.rs

use crate::error::ReshapeError;
use crate::schema::types::WorldMetric;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// The five Dutch airports we visualise, keyed by the city they serve.
///
/// Declaration order is catalog order, so a `BTreeMap<City, _>` iterates
/// Amsterdam, Rotterdam, Eindhoven, Maastricht, Groningen.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum City {
    Amsterdam,
    Rotterdam,
    Eindhoven,
    Maastricht,
    Groningen,
}

/// Every catalog city in catalog order.
pub const CATALOG: [City; 5] = [
    City::Amsterdam,
    City::Rotterdam,
    City::Eindhoven,
    City::Maastricht,
    City::Groningen,
];

impl City {
    pub fn name(&self) -> &'static str {
        match self {
            City::Amsterdam => "Amsterdam",
            City::Rotterdam => "Rotterdam",
            City::Eindhoven => "Eindhoven",
            City::Maastricht => "Maastricht",
            City::Groningen => "Groningen",
        }
    }

    /// CBS airport code used in the `Airports` column.
    pub fn airport_code(&self) -> &'static str {
        match self {
            City::Amsterdam => "A043590",
            City::Rotterdam => "A043596",
            City::Eindhoven => "A043591",
            City::Maastricht => "A043595",
            City::Groningen => "A043593",
        }
    }

    /// Reverse catalog lookup. Aggregate and foreign rows return `None`.
    pub fn from_airport_code(code: &str) -> Option<City> {
        CATALOG.into_iter().find(|c| c.airport_code() == code)
    }

    /// Flash marker on the map of the Netherlands.
    pub fn flash_element(&self) -> ElementRef {
        ElementRef::Id(match self {
            City::Amsterdam => "AmsterdamFlash",
            City::Rotterdam => "RotterdamFlash",
            City::Eindhoven => "EindhovenFlash",
            City::Maastricht => "MaastrichtFlash",
            City::Groningen => "GroningenFlash",
        })
    }

    /// Name label on the world map.
    pub fn label_element(&self) -> ElementRef {
        ElementRef::Id(self.name())
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for City {
    type Err = ReshapeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        CATALOG
            .into_iter()
            .find(|c| c.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| ReshapeError::UnknownLabel(s.to_string()))
    }
}

/// A reference to a map element: either a single element id or a whole class.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum ElementRef {
    Id(&'static str),
    Class(&'static str),
}

impl ElementRef {
    /// CSS selector form (`#id` / `.class`).
    pub fn selector(&self) -> String {
        match self {
            ElementRef::Id(id) => format!("#{}", id),
            ElementRef::Class(class) => format!(".{}", class),
        }
    }
}

/// Destinations selectable in the world view.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Region {
    Europe,
    America,
    Africa,
    Asia,
    Oceania,
    AnnualPassengers,
}

pub const REGIONS: [Region; 6] = [
    Region::Europe,
    Region::America,
    Region::Africa,
    Region::Asia,
    Region::Oceania,
    Region::AnnualPassengers,
];

impl Region {
    /// Menu label text.
    pub fn label(&self) -> &'static str {
        match self {
            Region::Europe => "Europe",
            Region::America => "America",
            Region::Africa => "Africa",
            Region::Asia => "Asia",
            Region::Oceania => "Oceania",
            Region::AnnualPassengers => "Annual Number Of Passengers",
        }
    }

    /// Flight path and region label to reveal when this region is chosen.
    pub fn highlight(&self) -> &'static [ElementRef] {
        match self {
            Region::Europe => &[ElementRef::Id("EuropePath"), ElementRef::Id("Europe-2")],
            Region::America => &[ElementRef::Id("AmericaPath"), ElementRef::Id("America-2")],
            Region::Africa => &[ElementRef::Id("AfricaPath"), ElementRef::Id("Africa-2")],
            Region::Asia => &[ElementRef::Id("AsiaPath"), ElementRef::Id("Asia-2")],
            Region::Oceania => &[ElementRef::Id("OceaniaPath"), ElementRef::Id("Oceania-2")],
            Region::AnnualPassengers => &[ElementRef::Class("cls-2")],
        }
    }

    /// The world figure displayed for this region.
    pub fn metric(&self) -> WorldMetric {
        match self {
            Region::Europe => WorldMetric::Europe,
            Region::America => WorldMetric::America,
            Region::Africa => WorldMetric::Africa,
            Region::Asia => WorldMetric::Asia,
            Region::Oceania => WorldMetric::Oceania,
            Region::AnnualPassengers => WorldMetric::TotalPassengers,
        }
    }
}

impl FromStr for Region {
    type Err = ReshapeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        REGIONS
            .into_iter()
            .find(|r| r.label().eq_ignore_ascii_case(s))
            .ok_or_else(|| ReshapeError::UnknownLabel(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_codes_are_distinct() {
        let codes: HashSet<_> = CATALOG.iter().map(|c| c.airport_code()).collect();
        assert_eq!(codes.len(), CATALOG.len());
    }

    #[test]
    fn test_airport_code_lookup() {
        assert_eq!(City::from_airport_code("A043590"), Some(City::Amsterdam));
        assert_eq!(City::from_airport_code("A043593"), Some(City::Groningen));
        // national total row
        assert_eq!(City::from_airport_code("A043597"), None);
        assert_eq!(City::from_airport_code(""), None);
    }

    #[test]
    fn test_city_from_label() {
        assert_eq!(" Maastricht ".parse::<City>().unwrap(), City::Maastricht);
        assert_eq!("eindhoven".parse::<City>().unwrap(), City::Eindhoven);
        assert_eq!(
            "Utrecht".parse::<City>(),
            Err(ReshapeError::UnknownLabel("Utrecht".to_string()))
        );
    }

    #[test]
    fn test_city_elements() {
        assert_eq!(City::Rotterdam.flash_element().selector(), "#RotterdamFlash");
        assert_eq!(City::Rotterdam.label_element().selector(), "#Rotterdam");
    }

    #[test]
    fn test_region_tables() {
        let region: Region = "Annual Number Of Passengers".parse().unwrap();
        assert_eq!(region, Region::AnnualPassengers);
        assert_eq!(region.metric(), WorldMetric::TotalPassengers);
        assert_eq!(region.highlight(), &[ElementRef::Class("cls-2")]);

        let asia: Region = "Asia".parse().unwrap();
        let selectors: Vec<_> = asia.highlight().iter().map(|e| e.selector()).collect();
        assert_eq!(selectors, vec!["#AsiaPath", "#Asia-2"]);
        assert!("Antarctica".parse::<Region>().is_err());
    }
}
