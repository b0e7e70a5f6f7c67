//! Static curation rule tables.
//!
//! Each topic maps to an ordered list of rules; each rule sums a fixed list
//! of raw table columns into one labeled output column. Order is part of the
//! output contract: downstream consumers index curated columns by position,
//! so reordering, relabeling or changing a column list is a breaking change.

use serde::Serialize;

use super::Topic;

/// One curated output column: the sum of `columns` labeled `label`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CurationRule {
    /// Output column name.
    pub label: &'static str,
    /// Raw column codes summed for this column.
    pub columns: &'static [&'static str],
}

const fn rule(label: &'static str, columns: &'static [&'static str]) -> CurationRule {
    CurationRule { label, columns }
}

/// Curation rules for a topic, in output column order.
///
/// An empty slice means the topic produces only the geography columns.
pub fn rules(topic: Topic) -> &'static [CurationRule] {
    match topic {
        Topic::Age => AGE,
        Topic::Sex => SEX,
        Topic::Race => RACE,
        Topic::HouseholdIncome => HOUSEHOLD_INCOME,
        Topic::Poverty => POVERTY,
        Topic::TransportationToWork => TRANSPORTATION_TO_WORK,
        Topic::PopulationByHouseholdType => POPULATION_BY_HOUSEHOLD_TYPE,
        Topic::MaritalStatusBySex => MARITAL_STATUS_BY_SEX,
        Topic::WomenWhoGaveBirthByAge => WOMEN_WHO_GAVE_BIRTH_BY_AGE,
        Topic::OccupiedVsVacantHousing => OCCUPIED_VS_VACANT_HOUSING,
        Topic::OwnershipOfOccupiedUnits => OWNERSHIP_OF_OCCUPIED_UNITS,
        Topic::TypesOfStructure => TYPES_OF_STRUCTURE,
        Topic::YearMovedInByPopulation => YEAR_MOVED_IN_BY_POPULATION,
        Topic::ValueOfOwnerOccupiedHousingUnits => VALUE_OF_OWNER_OCCUPIED_HOUSING_UNITS,
        Topic::PopulationMigrationSincePreviousYear => POPULATION_MIGRATION_SINCE_PREVIOUS_YEAR,
        Topic::PopulationByMinimumLevelOfEducation => POPULATION_BY_MINIMUM_LEVEL_OF_EDUCATION,
        Topic::LanguageAtHomeChildren => LANGUAGE_AT_HOME_CHILDREN,
        Topic::LanguageAtHomeAdults => LANGUAGE_AT_HOME_ADULTS,
        Topic::PlaceOfBirthForForeignBornPopulation => PLACE_OF_BIRTH_FOR_FOREIGN_BORN_POPULATION,
        Topic::VeteransByWartimeService => VETERANS_BY_WARTIME_SERVICE,
    }
}

const AGE: &[CurationRule] = &[
    rule(
        "Under 18",
        &[
            "B01001003", "B01001004", "B01001005", "B01001006", "B01001027", "B01001028",
            "B01001029", "B01001030",
        ],
    ),
    rule(
        "18 to 64",
        &[
            "B01001007", "B01001008", "B01001009", "B01001010", "B01001011", "B01001012",
            "B01001013", "B01001014", "B01001015", "B01001016", "B01001017", "B01001018",
            "B01001019", "B01001031", "B01001032", "B01001033", "B01001034", "B01001035",
            "B01001036", "B01001037", "B01001038", "B01001039", "B01001040", "B01001041",
            "B01001042", "B01001043",
        ],
    ),
    rule(
        "Over 65",
        &[
            "B01001020", "B01001021", "B01001022", "B01001023", "B01001024", "B01001025",
            "B01001044", "B01001045", "B01001046", "B01001047", "B01001048", "B01001049",
        ],
    ),
];

const SEX: &[CurationRule] = &[rule("Male", &["B01001002"]), rule("Female", &["B01001026"])];

// Shipped column order; not the table's own order.
const RACE: &[CurationRule] = &[
    rule("White", &["B03002003"]),
    rule("Black", &["B03002004"]),
    rule("Native", &["B03002005"]),
    rule("Two or More", &["B03002009"]),
    rule("Hispanic", &["B03002012"]),
    rule("Other", &["B03002008"]),
    rule("Islander", &["B03002007"]),
    rule("Asian", &["B03002006"]),
];

const HOUSEHOLD_INCOME: &[CurationRule] = &[
    rule(
        "Under $50K",
        &[
            "B19001002", "B19001003", "B19001004", "B19001005", "B19001006", "B19001007",
            "B19001008", "B19001009", "B19001010",
        ],
    ),
    rule("$50K to $100K", &["B19001011", "B19001012", "B19001013"]),
    rule("$100K to $200K", &["B19001014", "B19001015", "B19001016"]),
    rule("Over $200K", &["B19001017"]),
];

const POVERTY: &[CurationRule] = &[
    rule(
        "Poverty, Children (Under 18)",
        &[
            "B17001004", "B17001005", "B17001006", "B17001007", "B17001008", "B17001009",
            "B17001018", "B17001019", "B17001020", "B17001021", "B17001022", "B17001023",
        ],
    ),
    rule(
        "Non-poverty, Children (Under 18)",
        &[
            "B17001033", "B17001034", "B17001035", "B17001036", "B17001037", "B17001038",
            "B17001047", "B17001048", "B17001049", "B17001050", "B17001051", "B17001052",
        ],
    ),
    rule(
        "Poverty, Seniors (65 and Over)",
        &["B17001015", "B17001016", "B17001029", "B17001030"],
    ),
    rule(
        "Non-poverty, Seniors (65 and Over)",
        &["B17001044", "B17001045", "B17001058", "B17001059"],
    ),
];

const TRANSPORTATION_TO_WORK: &[CurationRule] = &[
    rule("Drove Alone", &["B08006003"]),
    rule("Carpooled", &["B08006004"]),
    rule("Public Transit", &["B08006008"]),
    rule("Bicycle", &["B08006014"]),
    rule("Walked", &["B08006015"]),
    rule("Other", &["B08006016"]),
    rule("Worked at Home", &["B08006017"]),
];

const POPULATION_BY_HOUSEHOLD_TYPE: &[CurationRule] = &[
    rule("Married Couples", &["B11002003"]),
    rule("Male Householder", &["B11002006"]),
    rule("Female Householder", &["B11002009"]),
    rule("Non-family", &["B11002012"]),
];

// "Windowed" is the shipped label.
const MARITAL_STATUS_BY_SEX: &[CurationRule] = &[
    rule("Never Married: Male", &["B12001003"]),
    rule("Never Married: Female", &["B12001012"]),
    rule("Married: Male", &["B12001004"]),
    rule("Married: Female", &["B12001013"]),
    rule("Divorced: Male", &["B12001010"]),
    rule("Divorced: Female", &["B12001019"]),
    rule("Windowed: Male", &["B12001009"]),
    rule("Windowed: Female", &["B12001018"]),
];

const WOMEN_WHO_GAVE_BIRTH_BY_AGE: &[CurationRule] = &[
    rule("15 to 19", &["B13016003"]),
    rule("20 to 24", &["B13016004"]),
    rule("25 to 29", &["B13016005"]),
    rule("30 to 34", &["B13016006"]),
    rule("35 to 39", &["B13016007"]),
    rule("40 to 44", &["B13016008"]),
    rule("45 to 50", &["B13016009"]),
];

const OCCUPIED_VS_VACANT_HOUSING: &[CurationRule] =
    &[rule("Occupied", &["B25002002"]), rule("Vacant", &["B25002003"])];

const OWNERSHIP_OF_OCCUPIED_UNITS: &[CurationRule] = &[
    rule("Owner Occupied", &["B25003002"]),
    rule("Renter Occupied", &["B25003003"]),
];

const TYPES_OF_STRUCTURE: &[CurationRule] = &[
    rule("Single Unit", &["B25024002", "B25024003"]),
    rule(
        "Multi-unit",
        &["B25024004", "B25024005", "B25024006", "B25024007", "B25024008", "B25024009"],
    ),
    rule("Mobile Home", &["B25024010"]),
    rule("Vehicle", &["B25024011"]),
];

const YEAR_MOVED_IN_BY_POPULATION: &[CurationRule] = &[
    rule("Before 1970", &["B25026008", "B25026015"]),
    rule("1970s", &["B25026007", "B25026014"]),
    rule("1980s", &["B25026006", "B25026013"]),
    rule("1990s", &["B25026005", "B25026012"]),
    rule("2000 to 2004", &["B25026004", "B25026011"]),
    rule("Since 2005", &["B25026003", "B25026010"]),
];

const VALUE_OF_OWNER_OCCUPIED_HOUSING_UNITS: &[CurationRule] = &[
    rule(
        "Under $100K",
        &[
            "B25075002", "B25075003", "B25075004", "B25075005", "B25075006", "B25075007",
            "B25075008", "B25075009", "B25075010", "B25075011", "B25075012", "B25075013",
            "B25075014",
        ],
    ),
    rule(
        "$100K to $200K",
        &["B25075015", "B25075016", "B25075017", "B25075018"],
    ),
    rule("$200K to $300K", &["B25075019", "B25075020"]),
    rule("$300K to $400K", &["B25075021"]),
    rule("$400K to $500K", &["B25075022"]),
    rule("$500K to $1M", &["B25075023", "B25075024"]),
    rule("Over $1M", &["B25075025"]),
];

const POPULATION_MIGRATION_SINCE_PREVIOUS_YEAR: &[CurationRule] = &[
    rule("Same House Year Ago", &["B07003004"]),
    rule("From Same County", &["B07003007"]),
    rule("From Different County", &["B07003010"]),
    rule("From Different State", &["B07003013"]),
    rule("From Abroad", &["B07003016"]),
];

const POPULATION_BY_MINIMUM_LEVEL_OF_EDUCATION: &[CurationRule] = &[
    rule(
        "No Degree",
        &[
            "B15002003", "B15002004", "B15002005", "B15002006", "B15002007", "B15002008",
            "B15002009", "B15002010", "B15002020", "B15002021", "B15002022", "B15002023",
            "B15002024", "B15002025", "B15002026", "B15002027",
        ],
    ),
    rule("High School", &["B15002011", "B15002028"]),
    rule(
        "Some college",
        &["B15002012", "B15002013", "B15002014", "B15002029", "B15002030", "B15002031"],
    ),
    rule("Bachelor's", &["B15002015", "B15002032"]),
    rule(
        "Post-grad",
        &["B15002016", "B15002017", "B15002018", "B15002033", "B15002034", "B15002035"],
    ),
];

const LANGUAGE_AT_HOME_CHILDREN: &[CurationRule] = &[
    rule("English Only", &["B16007003"]),
    rule("Spanish", &["B16007004"]),
    rule("Indo-European", &["B16007005"]),
    rule("Asian/Islander", &["B16007006"]),
    rule("Other", &["B16007007"]),
];

const LANGUAGE_AT_HOME_ADULTS: &[CurationRule] = &[
    rule("English Only", &["B16007009", "B16007015"]),
    rule("Spanish", &["B16007010", "B16007016"]),
    rule("Indo-European", &["B16007011", "B16007017"]),
    rule("Asian/Islander", &["B16007012", "B16007018"]),
    rule("Other", &["B16007013", "B16007019"]),
];

const PLACE_OF_BIRTH_FOR_FOREIGN_BORN_POPULATION: &[CurationRule] = &[
    rule("Europe", &["B05006002"]),
    rule("Asia", &["B05006047"]),
    rule("Africa", &["B05006091"]),
    rule("Oceania", &["B05006116"]),
    rule("Latin America", &["B05006123"]),
    rule("North America", &["B05006159"]),
];

// Brackets overlap: a veteran who served in several eras is counted in each.
const VETERANS_BY_WARTIME_SERVICE: &[CurationRule] = &[
    rule("WWII", &["B21002009", "B21002011", "B21002012"]),
    rule("Korea", &["B21002008", "B21002009", "B21002010", "B21002011"]),
    rule(
        "Vietnam",
        &["B21002004", "B21002006", "B21002007", "B21002008", "B21002009"],
    ),
    rule(
        "Gulf (1990s)",
        &["B21002003", "B21002004", "B21002005", "B21002006"],
    ),
    rule("Gulf (2001-)", &["B21002002", "B21002003", "B21002004"]),
];
