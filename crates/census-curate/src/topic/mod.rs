//! Topic registry: the fixed topic set, source tables and curation rules.

mod rules;

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::error::{CurateError, Result};

pub use rules::{CurationRule, rules};

/// A curated statistical subject backed by one ACS table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Topic {
    Age,
    Sex,
    Race,
    HouseholdIncome,
    Poverty,
    TransportationToWork,
    PopulationByHouseholdType,
    MaritalStatusBySex,
    WomenWhoGaveBirthByAge,
    OccupiedVsVacantHousing,
    OwnershipOfOccupiedUnits,
    TypesOfStructure,
    YearMovedInByPopulation,
    ValueOfOwnerOccupiedHousingUnits,
    PopulationMigrationSincePreviousYear,
    PopulationByMinimumLevelOfEducation,
    LanguageAtHomeChildren,
    LanguageAtHomeAdults,
    PlaceOfBirthForForeignBornPopulation,
    VeteransByWartimeService,
}

/// Lookup by lowercase topic name or lowercase table id.
///
/// Table ids shared by several topics map to the first of them.
static BY_KEY: Lazy<HashMap<String, Topic>> = Lazy::new(|| {
    let mut index = HashMap::new();
    for topic in Topic::ALL {
        index.insert(topic.key().to_string(), topic);
    }
    for topic in Topic::ALL {
        index
            .entry(topic.source_table().to_lowercase())
            .or_insert(topic);
    }
    index
});

impl Topic {
    /// All topics in registry order.
    pub const ALL: [Topic; 20] = [
        Topic::Age,
        Topic::Sex,
        Topic::Race,
        Topic::HouseholdIncome,
        Topic::Poverty,
        Topic::TransportationToWork,
        Topic::PopulationByHouseholdType,
        Topic::MaritalStatusBySex,
        Topic::WomenWhoGaveBirthByAge,
        Topic::OccupiedVsVacantHousing,
        Topic::OwnershipOfOccupiedUnits,
        Topic::TypesOfStructure,
        Topic::YearMovedInByPopulation,
        Topic::ValueOfOwnerOccupiedHousingUnits,
        Topic::PopulationMigrationSincePreviousYear,
        Topic::PopulationByMinimumLevelOfEducation,
        Topic::LanguageAtHomeChildren,
        Topic::LanguageAtHomeAdults,
        Topic::PlaceOfBirthForForeignBornPopulation,
        Topic::VeteransByWartimeService,
    ];

    /// Snake-case topic name.
    pub fn key(self) -> &'static str {
        match self {
            Topic::Age => "age",
            Topic::Sex => "sex",
            Topic::Race => "race",
            Topic::HouseholdIncome => "household_income",
            Topic::Poverty => "poverty",
            Topic::TransportationToWork => "transportation_to_work",
            Topic::PopulationByHouseholdType => "population_by_household_type",
            Topic::MaritalStatusBySex => "marital_status_by_sex",
            Topic::WomenWhoGaveBirthByAge => "women_who_gave_birth_by_age",
            Topic::OccupiedVsVacantHousing => "occupied_vs_vacant_housing",
            Topic::OwnershipOfOccupiedUnits => "ownership_of_occupied_units",
            Topic::TypesOfStructure => "types_of_structure",
            Topic::YearMovedInByPopulation => "year_moved_in_by_population",
            Topic::ValueOfOwnerOccupiedHousingUnits => "value_of_owner_occupied_housing_units",
            Topic::PopulationMigrationSincePreviousYear => {
                "population_migration_since_previous_year"
            }
            Topic::PopulationByMinimumLevelOfEducation => {
                "population_by_minimum_level_of_education"
            }
            Topic::LanguageAtHomeChildren => "language_at_home_children",
            Topic::LanguageAtHomeAdults => "language_at_home_adults",
            Topic::PlaceOfBirthForForeignBornPopulation => {
                "place_of_birth_for_foreign_born_population"
            }
            Topic::VeteransByWartimeService => "veterans_by_wartime_service",
        }
    }

    /// ACS table the topic is curated from.
    pub fn source_table(self) -> &'static str {
        match self {
            Topic::Age | Topic::Sex => "B01001",
            Topic::Race => "B03002",
            Topic::HouseholdIncome => "B19001",
            Topic::Poverty => "B17001",
            Topic::TransportationToWork => "B08006",
            Topic::PopulationByHouseholdType => "B11002",
            Topic::MaritalStatusBySex => "B12001",
            Topic::WomenWhoGaveBirthByAge => "B13016",
            Topic::OccupiedVsVacantHousing => "B25002",
            Topic::OwnershipOfOccupiedUnits => "B25003",
            Topic::TypesOfStructure => "B25024",
            Topic::YearMovedInByPopulation => "B25026",
            Topic::ValueOfOwnerOccupiedHousingUnits => "B25075",
            Topic::PopulationMigrationSincePreviousYear => "B07003",
            Topic::PopulationByMinimumLevelOfEducation => "B15002",
            Topic::LanguageAtHomeChildren | Topic::LanguageAtHomeAdults => "B16007",
            Topic::PlaceOfBirthForForeignBornPopulation => "B05006",
            Topic::VeteransByWartimeService => "B21002",
        }
    }

    /// Curation rules in output column order.
    pub fn rules(self) -> &'static [CurationRule] {
        rules(self)
    }

    /// Curated column labels in output order.
    pub fn labels(self) -> Vec<&'static str> {
        self.rules().iter().map(|r| r.label).collect()
    }

    /// Resolve a topic name or a table id, ignoring case.
    pub fn resolve(key: &str) -> Result<Topic> {
        BY_KEY
            .get(&key.trim().to_lowercase())
            .copied()
            .ok_or_else(|| CurateError::UnknownTopic(key.to_string()))
    }
}

impl FromStr for Topic {
    type Err = CurateError;

    fn from_str(s: &str) -> Result<Self> {
        Topic::resolve(s)
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Source table for a topic name.
pub fn source_table(topic: &str) -> Result<&'static str> {
    Topic::resolve(topic).map(Topic::source_table)
}
