use crate::models::{CountryZone, SubZone};

pub static COUNTRY_ZONES: &[CountryZone] = &[
    CountryZone {
        country_code_2: Some("AT"),
        country_code_3: "AUT",
        provider_zone_id: "10YAT-APG------L",
        display_name: "Austria",
        timezone: "Europe/Vienna",
    },
    CountryZone {
        country_code_2: Some("AL"),
        country_code_3: "ALB",
        provider_zone_id: "10YAL-KESH-----5",
        display_name: "Albania",
        timezone: "Europe/Tirane",
    },
    CountryZone {
        country_code_2: Some("BY"),
        country_code_3: "BLR",
        provider_zone_id: "10Y1001A1001A51S",
        display_name: "Belarus",
        timezone: "Europe/Minsk",
    },
    CountryZone {
        country_code_2: Some("BE"),
        country_code_3: "BEL",
        provider_zone_id: "10YBE----------2",
        display_name: "Belgium",
        timezone: "Europe/Brussels",
    },
    CountryZone {
        country_code_2: Some("BA"),
        country_code_3: "BIH",
        provider_zone_id: "10YBA-JPCC-----D",
        display_name: "Bosnia and Herzegovina",
        timezone: "Europe/Sarajevo",
    },
    CountryZone {
        country_code_2: Some("BG"),
        country_code_3: "BGR",
        provider_zone_id: "10YCA-BULGARIA-R",
        display_name: "Bulgaria",
        timezone: "Europe/Sofia",
    },
    CountryZone {
        country_code_2: Some("CH"),
        country_code_3: "CHE",
        provider_zone_id: "10YCH-SWISSGRIDZ",
        display_name: "Switzerland",
        timezone: "Europe/Zurich",
    },
    CountryZone {
        country_code_2: Some("CY"),
        country_code_3: "CYP",
        provider_zone_id: "10YCY-1001A0003J",
        display_name: "Cyprus",
        timezone: "Asia/Nicosia",
    },
    CountryZone {
        country_code_2: Some("CZ"),
        country_code_3: "CZE",
        provider_zone_id: "10YCZ-CEPS-----N",
        display_name: "Czech Republic",
        timezone: "Europe/Prague",
    },
    CountryZone {
        country_code_2: Some("DE"),
        country_code_3: "DEU",
        provider_zone_id: "10Y1001A1001A83F",
        display_name: "Germany",
        timezone: "Europe/Berlin",
    },
    CountryZone {
        country_code_2: Some("DK"),
        country_code_3: "DNK",
        provider_zone_id: "10Y1001A1001A65H",
        display_name: "Denmark",
        timezone: "Europe/Copenhagen",
    },
    CountryZone {
        country_code_2: Some("EE"),
        country_code_3: "EST",
        provider_zone_id: "10Y1001A1001A39I",
        display_name: "Estonia",
        timezone: "Europe/Tallinn",
    },
    CountryZone {
        country_code_2: Some("ES"),
        country_code_3: "ESP",
        provider_zone_id: "10YES-REE------0",
        display_name: "Spain",
        timezone: "Europe/Madrid",
    },
    CountryZone {
        country_code_2: Some("FI"),
        country_code_3: "FIN",
        provider_zone_id: "10YFI-1--------U",
        display_name: "Finland",
        timezone: "Europe/Helsinki",
    },
    CountryZone {
        country_code_2: Some("FR"),
        country_code_3: "FRA",
        provider_zone_id: "10YFR-RTE------C",
        display_name: "France",
        timezone: "Europe/Paris",
    },
    CountryZone {
        country_code_2: Some("GB"),
        country_code_3: "GBR",
        provider_zone_id: "10YGB----------A",
        display_name: "United Kingdom",
        timezone: "Europe/London",
    },
    CountryZone {
        country_code_2: Some("GE"),
        country_code_3: "GEO",
        provider_zone_id: "10Y1001A1001B012",
        display_name: "Georgia",
        timezone: "Asia/Tbilisi",
    },
    CountryZone {
        country_code_2: Some("GR"),
        country_code_3: "GRC",
        provider_zone_id: "10YGR-HTSO-----Y",
        display_name: "Greece",
        timezone: "Europe/Athens",
    },
    CountryZone {
        country_code_2: Some("HR"),
        country_code_3: "HRV",
        provider_zone_id: "10YHR-HEP------M",
        display_name: "Croatia",
        timezone: "Europe/Zagreb",
    },
    CountryZone {
        country_code_2: Some("HU"),
        country_code_3: "HUN",
        provider_zone_id: "10YHU-MAVIR----U",
        display_name: "Hungary",
        timezone: "Europe/Budapest",
    },
    CountryZone {
        country_code_2: Some("IS"),
        country_code_3: "ISL",
        provider_zone_id: "IS",
        display_name: "Iceland",
        timezone: "Atlantic/Reykjavik",
    },
    CountryZone {
        country_code_2: Some("IE"),
        country_code_3: "IRL",
        provider_zone_id: "10YIE-1001A00010",
        display_name: "Ireland",
        timezone: "Europe/Dublin",
    },
    CountryZone {
        country_code_2: Some("IT"),
        country_code_3: "ITA",
        provider_zone_id: "10YIT-GRTN-----B",
        display_name: "Italy",
        timezone: "Europe/Rome",
    },
    CountryZone {
        country_code_2: Some("LT"),
        country_code_3: "LTU",
        provider_zone_id: "10YLT-1001A0008Q",
        display_name: "Lithuania",
        timezone: "Europe/Vilnius",
    },
    CountryZone {
        country_code_2: Some("LU"),
        country_code_3: "LUX",
        provider_zone_id: "10YLU-CEGEDEL-NQ",
        display_name: "Luxembourg",
        timezone: "Europe/Luxembourg",
    },
    CountryZone {
        country_code_2: Some("LV"),
        country_code_3: "LVA",
        provider_zone_id: "10YLV-1001A00074",
        display_name: "Latvia",
        timezone: "Europe/Riga",
    },
    CountryZone {
        country_code_2: Some("MD"),
        country_code_3: "MDA",
        provider_zone_id: "10Y1001A1001A990",
        display_name: "Moldova",
        timezone: "Europe/Chisinau",
    },
    CountryZone {
        country_code_2: Some("MK"),
        country_code_3: "MKD",
        provider_zone_id: "10YMK-MEPSO----8",
        display_name: "North Macedonia",
        timezone: "Europe/Skopje",
    },
    CountryZone {
        country_code_2: Some("MT"),
        country_code_3: "MLT",
        provider_zone_id: "10Y1001A1001A93C",
        display_name: "Malta",
        timezone: "Europe/Malta",
    },
    CountryZone {
        country_code_2: Some("ME"),
        country_code_3: "MNE",
        provider_zone_id: "10YCS-CG-TSO---S",
        display_name: "Montenegro",
        timezone: "Europe/Podgorica",
    },
    CountryZone {
        country_code_2: Some("NL"),
        country_code_3: "NLD",
        provider_zone_id: "10YNL----------L",
        display_name: "Netherlands",
        timezone: "Europe/Amsterdam",
    },
    CountryZone {
        country_code_2: Some("NO"),
        country_code_3: "NOR",
        provider_zone_id: "10YNO-0--------C",
        display_name: "Norway",
        timezone: "Europe/Oslo",
    },
    CountryZone {
        country_code_2: Some("PL"),
        country_code_3: "POL",
        provider_zone_id: "10YPL-AREA-----S",
        display_name: "Poland",
        timezone: "Europe/Warsaw",
    },
    CountryZone {
        country_code_2: Some("PT"),
        country_code_3: "PRT",
        provider_zone_id: "10YPT-REN------W",
        display_name: "Portugal",
        timezone: "Europe/Lisbon",
    },
    CountryZone {
        country_code_2: Some("RO"),
        country_code_3: "ROU",
        provider_zone_id: "10YRO-TEL------P",
        display_name: "Romania",
        timezone: "Europe/Bucharest",
    },
    CountryZone {
        country_code_2: Some("RU"),
        country_code_3: "RUS",
        provider_zone_id: "10Y1001A1001A49F",
        display_name: "Russia",
        timezone: "Europe/Moscow",
    },
    CountryZone {
        country_code_2: Some("RS"),
        country_code_3: "SRB",
        provider_zone_id: "10YCS-SERBIATSOV",
        display_name: "Serbia",
        timezone: "Europe/Belgrade",
    },
    CountryZone {
        country_code_2: Some("SK"),
        country_code_3: "SVK",
        provider_zone_id: "10YSK-SEPS-----K",
        display_name: "Slovakia",
        timezone: "Europe/Bratislava",
    },
    CountryZone {
        country_code_2: Some("SI"),
        country_code_3: "SVN",
        provider_zone_id: "10YSI-ELES-----O",
        display_name: "Slovenia",
        timezone: "Europe/Ljubljana",
    },
    CountryZone {
        country_code_2: Some("SE"),
        country_code_3: "SWE",
        provider_zone_id: "10YSE-1--------K",
        display_name: "Sweden",
        timezone: "Europe/Stockholm",
    },
    CountryZone {
        country_code_2: Some("TR"),
        country_code_3: "TUR",
        provider_zone_id: "10YTR-TEIAS----W",
        display_name: "Turkey",
        timezone: "Europe/Istanbul",
    },
    CountryZone {
        country_code_2: Some("UA"),
        country_code_3: "UKR",
        provider_zone_id: "10Y1001C--00003F",
        display_name: "Ukraine",
        timezone: "Europe/Kiev",
    },
    CountryZone {
        country_code_2: Some("XK"),
        country_code_3: "XKX",
        provider_zone_id: "10Y1001C--00100H",
        display_name: "Kosovo",
        timezone: "Europe/Rome",
    },
];

pub static SUB_ZONES: &[SubZone] = &[
    // DE
    SubZone {
        country_code: "DE",
        zone_code: "DE_50HZ",
        provider_zone_id: "10YDE-VE-------2",
        description: "50Hertz",
        timezone: "Europe/Berlin",
    },
    SubZone {
        country_code: "DE",
        zone_code: "DE_AMPRION",
        provider_zone_id: "10YDE-RWENET---I",
        description: "Amprion",
        timezone: "Europe/Berlin",
    },
    SubZone {
        country_code: "DE",
        zone_code: "DE_TENNET",
        provider_zone_id: "10YDE-EON------1",
        description: "TenneT GER",
        timezone: "Europe/Berlin",
    },
    SubZone {
        country_code: "DE",
        zone_code: "DE_TRANSNET",
        provider_zone_id: "10YDE-ENBW-----N",
        description: "TransnetBW",
        timezone: "Europe/Berlin",
    },
    // DK
    SubZone {
        country_code: "DK",
        zone_code: "DK_1",
        provider_zone_id: "10YDK-1--------W",
        description: "Western Denmark",
        timezone: "Europe/Copenhagen",
    },
    SubZone {
        country_code: "DK",
        zone_code: "DK_2",
        provider_zone_id: "10YDK-2--------M",
        description: "Eastern Denmark",
        timezone: "Europe/Copenhagen",
    },
    // IT
    SubZone {
        country_code: "IT",
        zone_code: "IT_NORD",
        provider_zone_id: "10Y1001A1001A73I",
        description: "North",
        timezone: "Europe/Rome",
    },
    SubZone {
        country_code: "IT",
        zone_code: "IT_CNOR",
        provider_zone_id: "10Y1001A1001A70O",
        description: "Centre-North",
        timezone: "Europe/Rome",
    },
    SubZone {
        country_code: "IT",
        zone_code: "IT_CSUD",
        provider_zone_id: "10Y1001A1001A71M",
        description: "Centre-South",
        timezone: "Europe/Rome",
    },
    SubZone {
        country_code: "IT",
        zone_code: "IT_SUD",
        provider_zone_id: "10Y1001A1001A788",
        description: "South",
        timezone: "Europe/Rome",
    },
    SubZone {
        country_code: "IT",
        zone_code: "IT_SARD",
        provider_zone_id: "10Y1001A1001A74G",
        description: "Sardinia",
        timezone: "Europe/Rome",
    },
    SubZone {
        country_code: "IT",
        zone_code: "IT_SICI",
        provider_zone_id: "10Y1001A1001A75E",
        description: "Sicily",
        timezone: "Europe/Rome",
    },
    SubZone {
        country_code: "IT",
        zone_code: "IT_BRNN",
        provider_zone_id: "10Y1001A1001A699",
        description: "Brindisi",
        timezone: "Europe/Rome",
    },
    SubZone {
        country_code: "IT",
        zone_code: "IT_ROSN",
        provider_zone_id: "10Y1001A1001A77A",
        description: "Rossano",
        timezone: "Europe/Rome",
    },
    SubZone {
        country_code: "IT",
        zone_code: "IT_FOGN",
        provider_zone_id: "10Y1001A1001A72K",
        description: "Foggia",
        timezone: "Europe/Rome",
    },
    SubZone {
        country_code: "IT",
        zone_code: "IT_CALA",
        provider_zone_id: "10Y1001C--00096J",
        description: "Calabria",
        timezone: "Europe/Rome",
    },
    SubZone {
        country_code: "IT",
        zone_code: "IT_PRGP",
        provider_zone_id: "10Y1001A1001A76C",
        description: "Priolo",
        timezone: "Europe/Rome",
    },
    SubZone {
        country_code: "IT",
        zone_code: "IT_GR",
        provider_zone_id: "10Y1001A1001A66F",
        description: "Greece border",
        timezone: "Europe/Rome",
    },
    // NO
    SubZone {
        country_code: "NO",
        zone_code: "NO_1",
        provider_zone_id: "10YNO-1--------2",
        description: "Eastern",
        timezone: "Europe/Oslo",
    },
    SubZone {
        country_code: "NO",
        zone_code: "NO_2",
        provider_zone_id: "10YNO-2--------T",
        description: "Southern",
        timezone: "Europe/Oslo",
    },
    SubZone {
        country_code: "NO",
        zone_code: "NO_3",
        provider_zone_id: "10YNO-3--------J",
        description: "Central",
        timezone: "Europe/Oslo",
    },
    SubZone {
        country_code: "NO",
        zone_code: "NO_4",
        provider_zone_id: "10YNO-4--------9",
        description: "Western",
        timezone: "Europe/Oslo",
    },
    SubZone {
        country_code: "NO",
        zone_code: "NO_5",
        provider_zone_id: "10Y1001A1001A48H",
        description: "Northern",
        timezone: "Europe/Oslo",
    },
    // SE
    SubZone {
        country_code: "SE",
        zone_code: "SE_1",
        provider_zone_id: "10Y1001A1001A44P",
        description: "Northern",
        timezone: "Europe/Stockholm",
    },
    SubZone {
        country_code: "SE",
        zone_code: "SE_2",
        provider_zone_id: "10Y1001A1001A45N",
        description: "Central",
        timezone: "Europe/Stockholm",
    },
    SubZone {
        country_code: "SE",
        zone_code: "SE_3",
        provider_zone_id: "10Y1001A1001A46L",
        description: "Southern",
        timezone: "Europe/Stockholm",
    },
    SubZone {
        country_code: "SE",
        zone_code: "SE_4",
        provider_zone_id: "10Y1001A1001A47J",
        description: "Eastern",
        timezone: "Europe/Stockholm",
    },
    // UA
    SubZone {
        country_code: "UA",
        zone_code: "UA_DOBTPP",
        provider_zone_id: "10Y1001A1001A869",
        description: "DobTPP",
        timezone: "Europe/Kiev",
    },
    SubZone {
        country_code: "UA",
        zone_code: "UA_BEI",
        provider_zone_id: "10YUA-WEPS-----0",
        description: "BEI",
        timezone: "Europe/Kiev",
    },
    SubZone {
        country_code: "UA",
        zone_code: "UA_IPS",
        provider_zone_id: "10Y1001C--000182",
        description: "IPS",
        timezone: "Europe/Kiev",
    },
    // GB
    SubZone {
        country_code: "GB",
        zone_code: "GB_IFA",
        provider_zone_id: "10Y1001C--00098F",
        description: "IFA Interconnector",
        timezone: "Europe/London",
    },
    SubZone {
        country_code: "GB",
        zone_code: "GB_IFA2",
        provider_zone_id: "17Y0000009369493",
        description: "IFA2 Interconnector",
        timezone: "Europe/London",
    },
    SubZone {
        country_code: "GB",
        zone_code: "GB_ELECLINK",
        provider_zone_id: "11Y0-0000-0265-K",
        description: "ElecLink Interconnector",
        timezone: "Europe/London",
    },
];
