//! Static currency metadata: which region issues a currency, and which
//! codes get a special icon instead of a flag.

/// Maps an ISO 4217 currency code to the 2-letter region whose flag represents it.
///
/// Shared currencies point at a representative issuer (e.g. XOF → Senegal).
pub const CURRENCY_REGIONS: &[(&str, &str)] = &[
    ("AED", "AE"), ("AFN", "AF"), ("ALL", "AL"), ("AMD", "AM"), ("ANG", "CW"),
    ("AOA", "AO"), ("ARS", "AR"), ("AUD", "AU"), ("AWG", "AW"), ("AZN", "AZ"),
    ("BAM", "BA"), ("BBD", "BB"), ("BDT", "BD"), ("BGN", "BG"), ("BHD", "BH"),
    ("BIF", "BI"), ("BMD", "BM"), ("BND", "BN"), ("BOB", "BO"), ("BRL", "BR"),
    ("BSD", "BS"), ("BTN", "BT"), ("BWP", "BW"), ("BYN", "BY"), ("BZD", "BZ"),
    ("CAD", "CA"), ("CDF", "CD"), ("CHF", "CH"), ("CLP", "CL"), ("CNY", "CN"),
    ("COP", "CO"), ("CRC", "CR"), ("CUP", "CU"), ("CVE", "CV"), ("CZK", "CZ"),
    ("DJF", "DJ"), ("DKK", "DK"), ("DOP", "DO"), ("DZD", "DZ"),
    ("EGP", "EG"), ("ERN", "ER"), ("ETB", "ET"), ("EUR", "EU"),
    ("FJD", "FJ"), ("FKP", "FK"),
    ("GBP", "GB"), ("GEL", "GE"), ("GGP", "GG"), ("GHS", "GH"), ("GIP", "GI"),
    ("GMD", "GM"), ("GNF", "GN"), ("GTQ", "GT"), ("GYD", "GY"),
    ("HKD", "HK"), ("HNL", "HN"), ("HRK", "HR"), ("HTG", "HT"), ("HUF", "HU"),
    ("IDR", "ID"), ("ILS", "IL"), ("IMP", "IM"), ("INR", "IN"), ("IQD", "IQ"),
    ("IRR", "IR"), ("ISK", "IS"),
    ("JEP", "JE"), ("JMD", "JM"), ("JOD", "JO"), ("JPY", "JP"),
    ("KES", "KE"), ("KGS", "KG"), ("KHR", "KH"), ("KID", "KI"), ("KMF", "KM"),
    ("KRW", "KR"), ("KWD", "KW"), ("KYD", "KY"), ("KZT", "KZ"),
    ("LAK", "LA"), ("LBP", "LB"), ("LKR", "LK"), ("LRD", "LR"), ("LSL", "LS"),
    ("LYD", "LY"),
    ("MAD", "MA"), ("MDL", "MD"), ("MGA", "MG"), ("MKD", "MK"), ("MMK", "MM"),
    ("MNT", "MN"), ("MOP", "MO"), ("MRU", "MR"), ("MUR", "MU"), ("MVR", "MV"),
    ("MWK", "MW"), ("MXN", "MX"), ("MYR", "MY"), ("MZN", "MZ"),
    ("NAD", "NA"), ("NGN", "NG"), ("NIO", "NI"), ("NOK", "NO"), ("NPR", "NP"),
    ("NZD", "NZ"),
    ("OMR", "OM"),
    ("PAB", "PA"), ("PEN", "PE"), ("PGK", "PG"), ("PHP", "PH"), ("PKR", "PK"),
    ("PLN", "PL"), ("PYG", "PY"),
    ("QAR", "QA"),
    ("RON", "RO"), ("RSD", "RS"), ("RUB", "RU"), ("RWF", "RW"),
    ("SAR", "SA"), ("SBD", "SB"), ("SCR", "SC"), ("SDG", "SD"), ("SEK", "SE"),
    ("SGD", "SG"), ("SHP", "SH"), ("SLE", "SL"), ("SLL", "SL"), ("SOS", "SO"),
    ("SRD", "SR"), ("SSP", "SS"), ("STN", "ST"), ("SYP", "SY"), ("SZL", "SZ"),
    ("THB", "TH"), ("TJS", "TJ"), ("TMT", "TM"), ("TND", "TN"), ("TOP", "TO"),
    ("TRY", "TR"), ("TTD", "TT"), ("TVD", "TV"), ("TWD", "TW"), ("TZS", "TZ"),
    ("UAH", "UA"), ("UGX", "UG"), ("USD", "US"), ("UYU", "UY"), ("UZS", "UZ"),
    ("VES", "VE"), ("VND", "VN"), ("VUV", "VU"),
    ("WST", "WS"),
    ("XAF", "CM"), ("XCD", "AG"), ("XOF", "SN"), ("XPF", "PF"), ("XDR", "EU"),
    ("YER", "YE"),
    ("ZAR", "ZA"), ("ZMW", "ZM"), ("ZWL", "ZW"),
];

/// Precious metals and special drawing rights are shown with an icon, not a flag.
pub const SPECIAL_ICONS: &[(&str, &str)] = &[
    ("XAU", "🪙"),
    ("XAG", "🪙"),
    ("XPT", "🪙"),
    ("XPD", "🪙"),
    ("XDR", "🌐"),
];

/// Trims and uppercases a user-supplied currency code.
pub fn normalize_code(code: &str) -> String {
    code.trim().to_uppercase()
}

/// Returns the region mapped to an already-normalized code.
pub fn region_for(code: &str) -> Option<&'static str> {
    CURRENCY_REGIONS
        .iter()
        .find(|(currency, _)| *currency == code)
        .map(|(_, region)| *region)
}

/// Returns the special icon for an already-normalized code.
pub fn special_icon(code: &str) -> Option<&'static str> {
    SPECIAL_ICONS
        .iter()
        .find(|(currency, _)| *currency == code)
        .map(|(_, icon)| *icon)
}

/// Every code the widget knows about without asking the server.
/// May contain duplicates; callers dedupe.
pub fn static_codes() -> impl Iterator<Item = &'static str> {
    CURRENCY_REGIONS
        .iter()
        .chain(SPECIAL_ICONS.iter())
        .map(|(code, _)| *code)
}
