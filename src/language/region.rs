//! Region type and region code parser.
//!
//! A [`Region`] is always one of the codes in the static tables below, so it
//! can be compared and copied cheaply. Parsing accepts ISO 3166-1 alpha-2,
//! alpha-3 and numeric country codes as well as UN M.49 macro-regions.

use crate::error::{Error, Result};
use serde::{Serialize, Serializer};
use std::fmt;
use unic_langid::subtags;

/// A validated region (country or UN M.49 area).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Region {
    /// Alpha-2 code for countries, three digits for macro-regions
    code: &'static str,
}

impl Region {
    /// Unknown region ("ZZ"), returned when a tag has no region.
    pub const UNKNOWN: Region = Region { code: "ZZ" };

    /// The canonical region code (e.g. "AT", "419").
    pub fn code(&self) -> &'static str {
        self.code
    }

    /// Whether this is a country rather than a macro-region or "ZZ".
    pub fn is_country(&self) -> bool {
        COUNTRIES.iter().any(|c| c.alpha2 == self.code)
    }

    /// Look up the region for a language identifier's region subtag.
    ///
    /// Returns `None` for subtags that are well-formed but unassigned.
    pub fn from_subtag(subtag: subtags::Region) -> Option<Region> {
        let code = subtag.as_str();
        if code.bytes().all(|b| b.is_ascii_digit()) {
            return from_numeric(code);
        }
        from_alpha2(code)
    }
}

impl Default for Region {
    fn default() -> Self {
        Region::UNKNOWN
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code)
    }
}

impl Serialize for Region {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.code)
    }
}

impl std::str::FromStr for Region {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        parse_region(s)
    }
}

/// Parse a region code.
///
/// Accepts (case-insensitively, surrounding whitespace ignored):
/// - ISO 3166-1 alpha-2: `"at"`, `"CA"`
/// - ISO 3166-1 alpha-3: `"AUT"`, mapped to `"AT"`
/// - ISO 3166-1 numeric: `"040"`, mapped to `"AT"`
/// - UN M.49 macro-regions: `"419"`, `"150"`, `"001"`
///
/// Anything else, including full language tags such as `"de-AT"` and
/// unassigned codes such as `"EN"`, is an [`Error::InvalidRegion`].
pub fn parse_region(input: &str) -> Result<Region> {
    let trimmed = input.trim();
    let invalid = || Error::InvalidRegion(input.to_string());

    if trimmed.len() == 3 && trimmed.bytes().all(|b| b.is_ascii_alphabetic()) {
        let upper = trimmed.to_ascii_uppercase();
        return COUNTRIES
            .iter()
            .find(|c| c.alpha3 == upper)
            .map(|c| Region { code: c.alpha2 })
            .ok_or_else(invalid);
    }

    // Two letters or three digits; also normalizes letter case.
    let subtag: subtags::Region = trimmed.parse().map_err(|_| invalid())?;
    Region::from_subtag(subtag).ok_or_else(invalid)
}

fn from_alpha2(code: &str) -> Option<Region> {
    if code == Region::UNKNOWN.code {
        return Some(Region::UNKNOWN);
    }
    COUNTRIES
        .iter()
        .find(|c| c.alpha2 == code)
        .map(|c| Region { code: c.alpha2 })
}

fn from_numeric(code: &str) -> Option<Region> {
    COUNTRIES
        .iter()
        .find(|c| c.numeric == code)
        .map(|c| Region { code: c.alpha2 })
        .or_else(|| {
            MACRO_REGIONS
                .iter()
                .find(|m| **m == code)
                .map(|&code| Region { code })
        })
}

struct Country {
    alpha2: &'static str,
    alpha3: &'static str,
    numeric: &'static str,
}

const fn country(alpha2: &'static str, alpha3: &'static str, numeric: &'static str) -> Country {
    Country {
        alpha2,
        alpha3,
        numeric,
    }
}

/// UN M.49 areas that group countries (world, continents, sub-regions).
const MACRO_REGIONS: &[&str] = &[
    "001", "002", "003", "005", "009", "011", "013", "014", "015", "017", "018", "019", "021",
    "029", "030", "034", "035", "039", "053", "054", "057", "061", "142", "143", "145", "150",
    "151", "154", "155", "202", "419",
];

/// ISO 3166-1 assigned codes, plus Kosovo (XK).
const COUNTRIES: &[Country] = &[
    country("AD", "AND", "020"),
    country("AE", "ARE", "784"),
    country("AF", "AFG", "004"),
    country("AG", "ATG", "028"),
    country("AI", "AIA", "660"),
    country("AL", "ALB", "008"),
    country("AM", "ARM", "051"),
    country("AO", "AGO", "024"),
    country("AQ", "ATA", "010"),
    country("AR", "ARG", "032"),
    country("AS", "ASM", "016"),
    country("AT", "AUT", "040"),
    country("AU", "AUS", "036"),
    country("AW", "ABW", "533"),
    country("AX", "ALA", "248"),
    country("AZ", "AZE", "031"),
    country("BA", "BIH", "070"),
    country("BB", "BRB", "052"),
    country("BD", "BGD", "050"),
    country("BE", "BEL", "056"),
    country("BF", "BFA", "854"),
    country("BG", "BGR", "100"),
    country("BH", "BHR", "048"),
    country("BI", "BDI", "108"),
    country("BJ", "BEN", "204"),
    country("BL", "BLM", "652"),
    country("BM", "BMU", "060"),
    country("BN", "BRN", "096"),
    country("BO", "BOL", "068"),
    country("BQ", "BES", "535"),
    country("BR", "BRA", "076"),
    country("BS", "BHS", "044"),
    country("BT", "BTN", "064"),
    country("BV", "BVT", "074"),
    country("BW", "BWA", "072"),
    country("BY", "BLR", "112"),
    country("BZ", "BLZ", "084"),
    country("CA", "CAN", "124"),
    country("CC", "CCK", "166"),
    country("CD", "COD", "180"),
    country("CF", "CAF", "140"),
    country("CG", "COG", "178"),
    country("CH", "CHE", "756"),
    country("CI", "CIV", "384"),
    country("CK", "COK", "184"),
    country("CL", "CHL", "152"),
    country("CM", "CMR", "120"),
    country("CN", "CHN", "156"),
    country("CO", "COL", "170"),
    country("CR", "CRI", "188"),
    country("CU", "CUB", "192"),
    country("CV", "CPV", "132"),
    country("CW", "CUW", "531"),
    country("CX", "CXR", "162"),
    country("CY", "CYP", "196"),
    country("CZ", "CZE", "203"),
    country("DE", "DEU", "276"),
    country("DJ", "DJI", "262"),
    country("DK", "DNK", "208"),
    country("DM", "DMA", "212"),
    country("DO", "DOM", "214"),
    country("DZ", "DZA", "012"),
    country("EC", "ECU", "218"),
    country("EE", "EST", "233"),
    country("EG", "EGY", "818"),
    country("EH", "ESH", "732"),
    country("ER", "ERI", "232"),
    country("ES", "ESP", "724"),
    country("ET", "ETH", "231"),
    country("FI", "FIN", "246"),
    country("FJ", "FJI", "242"),
    country("FK", "FLK", "238"),
    country("FM", "FSM", "583"),
    country("FO", "FRO", "234"),
    country("FR", "FRA", "250"),
    country("GA", "GAB", "266"),
    country("GB", "GBR", "826"),
    country("GD", "GRD", "308"),
    country("GE", "GEO", "268"),
    country("GF", "GUF", "254"),
    country("GG", "GGY", "831"),
    country("GH", "GHA", "288"),
    country("GI", "GIB", "292"),
    country("GL", "GRL", "304"),
    country("GM", "GMB", "270"),
    country("GN", "GIN", "324"),
    country("GP", "GLP", "312"),
    country("GQ", "GNQ", "226"),
    country("GR", "GRC", "300"),
    country("GS", "SGS", "239"),
    country("GT", "GTM", "320"),
    country("GU", "GUM", "316"),
    country("GW", "GNB", "624"),
    country("GY", "GUY", "328"),
    country("HK", "HKG", "344"),
    country("HM", "HMD", "334"),
    country("HN", "HND", "340"),
    country("HR", "HRV", "191"),
    country("HT", "HTI", "332"),
    country("HU", "HUN", "348"),
    country("ID", "IDN", "360"),
    country("IE", "IRL", "372"),
    country("IL", "ISR", "376"),
    country("IM", "IMN", "833"),
    country("IN", "IND", "356"),
    country("IO", "IOT", "086"),
    country("IQ", "IRQ", "368"),
    country("IR", "IRN", "364"),
    country("IS", "ISL", "352"),
    country("IT", "ITA", "380"),
    country("JE", "JEY", "832"),
    country("JM", "JAM", "388"),
    country("JO", "JOR", "400"),
    country("JP", "JPN", "392"),
    country("KE", "KEN", "404"),
    country("KG", "KGZ", "417"),
    country("KH", "KHM", "116"),
    country("KI", "KIR", "296"),
    country("KM", "COM", "174"),
    country("KN", "KNA", "659"),
    country("KP", "PRK", "408"),
    country("KR", "KOR", "410"),
    country("KW", "KWT", "414"),
    country("KY", "CYM", "136"),
    country("KZ", "KAZ", "398"),
    country("LA", "LAO", "418"),
    country("LB", "LBN", "422"),
    country("LC", "LCA", "662"),
    country("LI", "LIE", "438"),
    country("LK", "LKA", "144"),
    country("LR", "LBR", "430"),
    country("LS", "LSO", "426"),
    country("LT", "LTU", "440"),
    country("LU", "LUX", "442"),
    country("LV", "LVA", "428"),
    country("LY", "LBY", "434"),
    country("MA", "MAR", "504"),
    country("MC", "MCO", "492"),
    country("MD", "MDA", "498"),
    country("ME", "MNE", "499"),
    country("MF", "MAF", "663"),
    country("MG", "MDG", "450"),
    country("MH", "MHL", "584"),
    country("MK", "MKD", "807"),
    country("ML", "MLI", "466"),
    country("MM", "MMR", "104"),
    country("MN", "MNG", "496"),
    country("MO", "MAC", "446"),
    country("MP", "MNP", "580"),
    country("MQ", "MTQ", "474"),
    country("MR", "MRT", "478"),
    country("MS", "MSR", "500"),
    country("MT", "MLT", "470"),
    country("MU", "MUS", "480"),
    country("MV", "MDV", "462"),
    country("MW", "MWI", "454"),
    country("MX", "MEX", "484"),
    country("MY", "MYS", "458"),
    country("MZ", "MOZ", "508"),
    country("NA", "NAM", "516"),
    country("NC", "NCL", "540"),
    country("NE", "NER", "562"),
    country("NF", "NFK", "574"),
    country("NG", "NGA", "566"),
    country("NI", "NIC", "558"),
    country("NL", "NLD", "528"),
    country("NO", "NOR", "578"),
    country("NP", "NPL", "524"),
    country("NR", "NRU", "520"),
    country("NU", "NIU", "570"),
    country("NZ", "NZL", "554"),
    country("OM", "OMN", "512"),
    country("PA", "PAN", "591"),
    country("PE", "PER", "604"),
    country("PF", "PYF", "258"),
    country("PG", "PNG", "598"),
    country("PH", "PHL", "608"),
    country("PK", "PAK", "586"),
    country("PL", "POL", "616"),
    country("PM", "SPM", "666"),
    country("PN", "PCN", "612"),
    country("PR", "PRI", "630"),
    country("PS", "PSE", "275"),
    country("PT", "PRT", "620"),
    country("PW", "PLW", "585"),
    country("PY", "PRY", "600"),
    country("QA", "QAT", "634"),
    country("RE", "REU", "638"),
    country("RO", "ROU", "642"),
    country("RS", "SRB", "688"),
    country("RU", "RUS", "643"),
    country("RW", "RWA", "646"),
    country("SA", "SAU", "682"),
    country("SB", "SLB", "090"),
    country("SC", "SYC", "690"),
    country("SD", "SDN", "729"),
    country("SE", "SWE", "752"),
    country("SG", "SGP", "702"),
    country("SH", "SHN", "654"),
    country("SI", "SVN", "705"),
    country("SJ", "SJM", "744"),
    country("SK", "SVK", "703"),
    country("SL", "SLE", "694"),
    country("SM", "SMR", "674"),
    country("SN", "SEN", "686"),
    country("SO", "SOM", "706"),
    country("SR", "SUR", "740"),
    country("SS", "SSD", "728"),
    country("ST", "STP", "678"),
    country("SV", "SLV", "222"),
    country("SX", "SXM", "534"),
    country("SY", "SYR", "760"),
    country("SZ", "SWZ", "748"),
    country("TC", "TCA", "796"),
    country("TD", "TCD", "148"),
    country("TF", "ATF", "260"),
    country("TG", "TGO", "768"),
    country("TH", "THA", "764"),
    country("TJ", "TJK", "762"),
    country("TK", "TKL", "772"),
    country("TL", "TLS", "626"),
    country("TM", "TKM", "795"),
    country("TN", "TUN", "788"),
    country("TO", "TON", "776"),
    country("TR", "TUR", "792"),
    country("TT", "TTO", "780"),
    country("TV", "TUV", "798"),
    country("TW", "TWN", "158"),
    country("TZ", "TZA", "834"),
    country("UA", "UKR", "804"),
    country("UG", "UGA", "800"),
    country("UM", "UMI", "581"),
    country("US", "USA", "840"),
    country("UY", "URY", "858"),
    country("UZ", "UZB", "860"),
    country("VA", "VAT", "336"),
    country("VC", "VCT", "670"),
    country("VE", "VEN", "862"),
    country("VG", "VGB", "092"),
    country("VI", "VIR", "850"),
    country("VN", "VNM", "704"),
    country("VU", "VUT", "548"),
    country("WF", "WLF", "876"),
    country("WS", "WSM", "882"),
    country("XK", "XKX", ""),
    country("YE", "YEM", "887"),
    country("YT", "MYT", "175"),
    country("ZA", "ZAF", "710"),
    country("ZM", "ZMB", "894"),
    country("ZW", "ZWE", "716"),
];
