/// Splits a comma separated list of cities into trimmed, non-empty names.
/// Order is preserved and duplicates are kept as entered.
pub fn parse_destinations(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|city| !city.is_empty())
        .map(String::from)
        .collect()
}
