use crate::resources::filter_set::FilterSet;
use crate::utils::entity_ruler::{EntityLabel, ENTITY_RULER};
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

// ASCII, Arabic-Indic and Extended Arabic-Indic digits
const DIGIT: &str = "[0-9٠-٩۰-۹]";

static BEDS_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        r"(?i)({DIGIT}+)\s*(?:bedroom|beds|bed|غرفة|غرف)"
    ))
    .unwrap()
});

static PRICE_RANGE_RE: Lazy<Regex> = Lazy::new(|| {
    let number = format!(r"({DIGIT}+(?:\.{DIGIT}+)?)");
    let unit = "(k|m|ألف|مليون)?";
    Regex::new(&format!(r"(?i){number}{unit}\s*[-–]\s*{number}{unit}")).unwrap()
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PriceUnit {
    One,
    Thousand,
    Million,
}

impl PriceUnit {
    fn parse(unit: Option<&str>) -> Self {
        match unit.map(str::to_lowercase).as_deref() {
            Some("k") | Some("ألف") => PriceUnit::Thousand,
            Some("m") | Some("مليون") => PriceUnit::Million,
            _ => PriceUnit::One,
        }
    }

    fn multiplier(self) -> f64 {
        match self {
            PriceUnit::One => 1.0,
            PriceUnit::Thousand => 1_000.0,
            PriceUnit::Million => 1_000_000.0,
        }
    }
}

/// Pull search filters out of a free-text query.
///
/// Entities come from [`ENTITY_RULER`]; when one category is hit more than
/// once, the span furthest into the text wins. Bedrooms and the price range
/// take the first match of their pattern. Nothing here fails: a missing or
/// unparsable value just leaves the field `None`.
pub fn extract_filters(text: &str) -> FilterSet {
    let mut filters = FilterSet::default();

    for span in ENTITY_RULER.find(text) {
        let value = Some(span.text.to_string());
        match span.label {
            EntityLabel::City => filters.city = value,
            EntityLabel::Area => filters.area = value,
            EntityLabel::Type => filters.property_type = value,
        }
    }

    filters.beds = BEDS_RE
        .captures(text)
        .and_then(|caps| parse_integer(&caps[1]));

    if let Some(caps) = PRICE_RANGE_RE.captures(text) {
        filters.min_price = parse_price(&caps, 1, 2);
        filters.max_price = parse_price(&caps, 3, 4);
    }

    filters
}

fn parse_price(caps: &Captures<'_>, number: usize, unit: usize) -> Option<u64> {
    let value: f64 = ascii_digits(&caps[number]).parse().ok()?;
    let unit = PriceUnit::parse(caps.get(unit).map(|m| m.as_str()));
    let scaled = (value * unit.multiplier()).trunc();

    // u64::MAX as f64 rounds up to 2^64, so `<` keeps the cast lossless
    if scaled.is_finite() && scaled < u64::MAX as f64 {
        Some(scaled as u64)
    } else {
        None
    }
}

fn parse_integer(digits: &str) -> Option<u64> {
    ascii_digits(digits).parse().ok()
}

fn ascii_digits(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            '٠'..='٩' => shift_digit(c, '٠'),
            '۰'..='۹' => shift_digit(c, '۰'),
            _ => c,
        })
        .collect()
}

fn shift_digit(c: char, zero: char) -> char {
    char::from_digit(c as u32 - zero as u32, 10).unwrap_or(c)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bedrooms_and_area() {
        let filters = extract_filters("3 bedrooms in JVC");
        assert_eq!(filters.beds, Some(3));
        assert_eq!(filters.area.as_deref(), Some("JVC"));
        assert_eq!(filters.city, None);
        assert_eq!(filters.min_price, None);
    }

    #[test]
    fn test_price_range_type_and_city() {
        let filters = extract_filters("500k-750k apartment in Dubai");
        assert_eq!(
            filters,
            FilterSet {
                city: Some("Dubai".to_string()),
                property_type: Some("apartment".to_string()),
                min_price: Some(500_000),
                max_price: Some(750_000),
                ..Default::default()
            }
        );
    }

    #[test]
    fn test_arabic_villa_in_dubai_marina() {
        let filters = extract_filters("فيلا في دبي مارينا 2 غرف");
        assert_eq!(filters.property_type.as_deref(), Some("فيلا"));
        assert_eq!(filters.area.as_deref(), Some("دبي مارينا"));
        assert_eq!(filters.city, None);
        assert_eq!(filters.beds, Some(2));
    }

    #[test]
    fn test_dubai_marina_is_an_area_not_a_city() {
        for text in [
            "Dubai Marina",
            "2 bed apartment in Dubai Marina",
            "Dubai Marina villa 1m-2m",
            "need something near Dubai Marina.",
        ] {
            let filters = extract_filters(text);
            assert_eq!(filters.area.as_deref(), Some("Dubai Marina"), "{text}");
            assert_eq!(filters.city, None, "{text}");
        }
    }

    #[test]
    fn test_last_match_per_category_wins() {
        let filters = extract_filters("villa or apartment in JVC or Dubai Marina");
        assert_eq!(filters.property_type.as_deref(), Some("apartment"));
        assert_eq!(filters.area.as_deref(), Some("Dubai Marina"));
    }

    #[test]
    fn test_city_survives_next_to_a_longer_area() {
        let filters = extract_filters("Dubai Marina, Dubai");
        assert_eq!(filters.area.as_deref(), Some("Dubai Marina"));
        assert_eq!(filters.city.as_deref(), Some("Dubai"));
    }

    #[test]
    fn test_no_entities_yields_empty_filters() {
        let filters = extract_filters("something cheap and quiet please");
        assert_eq!(filters, FilterSet::default());
        assert!(filters.query_params().is_empty());
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(extract_filters(""), FilterSet::default());
    }

    #[test]
    fn test_bed_word_variants_case_insensitive() {
        assert_eq!(extract_filters("1 Bed").beds, Some(1));
        assert_eq!(extract_filters("4BEDS").beds, Some(4));
        assert_eq!(extract_filters("5 Bedroom villa").beds, Some(5));
        assert_eq!(extract_filters("شقة 3 غرفة").beds, Some(3));
    }

    #[test]
    fn test_first_bedroom_count_wins() {
        assert_eq!(extract_filters("2 beds or 3 beds").beds, Some(2));
    }

    #[test]
    fn test_number_without_bed_word_is_not_beds() {
        assert_eq!(extract_filters("apartment 3 in JVC").beds, None);
    }

    #[test]
    fn test_price_units_apply_per_side() {
        let filters = extract_filters("1.5m - 900k");
        assert_eq!(filters.min_price, Some(1_500_000));
        assert_eq!(filters.max_price, Some(900_000));

        let filters = extract_filters("budget 800000–2M");
        assert_eq!(filters.min_price, Some(800_000));
        assert_eq!(filters.max_price, Some(2_000_000));
    }

    #[test]
    fn test_arabic_price_units() {
        let filters = extract_filters("شقة 500ألف-2مليون");
        assert_eq!(filters.min_price, Some(500_000));
        assert_eq!(filters.max_price, Some(2_000_000));
    }

    #[test]
    fn test_price_range_is_not_reordered() {
        let filters = extract_filters("900k-100k");
        assert_eq!(filters.min_price, Some(900_000));
        assert_eq!(filters.max_price, Some(100_000));
    }

    #[test]
    fn test_price_is_truncated() {
        let filters = extract_filters("10.75-20.9");
        assert_eq!(filters.min_price, Some(10));
        assert_eq!(filters.max_price, Some(20));
    }

    #[test]
    fn test_single_price_is_not_a_range() {
        let filters = extract_filters("under 750k");
        assert_eq!(filters.min_price, None);
        assert_eq!(filters.max_price, None);
    }

    #[test]
    fn test_arabic_indic_digits() {
        let filters = extract_filters("فيلا ٣ غرف ٥٠٠ألف-٧٥٠ألف");
        assert_eq!(filters.beds, Some(3));
        assert_eq!(filters.min_price, Some(500_000));
        assert_eq!(filters.max_price, Some(750_000));
    }

    #[test]
    fn test_oversized_numbers_are_dropped() {
        let filters = extract_filters("99999999999999999999999 beds");
        assert_eq!(filters.beds, None);

        let filters = extract_filters("1-99999999999999999999m");
        assert_eq!(filters.min_price, Some(1));
        assert_eq!(filters.max_price, None);
    }
}
