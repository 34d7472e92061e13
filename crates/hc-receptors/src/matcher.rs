//! Nutrient-name matching.
//!
//! Decides whether a reported nutrient name refers to the same substance as a
//! catalog factor name: exact case-insensitive equality, or a hit in a small
//! fixed synonym table.

/// Canonical substance keys and their accepted spelling variants.
const SYNONYMS: &[(&str, &[&str])] = &[
    ("vitamin c", &["vitamin-c", "ascorbic acid", "ascorbate"]),
    (
        "vitamin d",
        &["vitamin-d", "vitamin d3", "d3", "cholecalciferol"],
    ),
    ("calcium", &["ca", "calcium carbonate", "calcium citrate"]),
    ("iron", &["fe", "ferrous", "ferric"]),
    (
        "magnesium",
        &["mg", "magnesium glycinate", "magnesium citrate"],
    ),
    ("zinc", &["zn", "zinc picolinate", "zinc citrate"]),
];

/// Whether `factor_name` and `nutrient_name` name the same substance.
///
/// A synonym hit requires one side to be a listed variant (or the key itself)
/// and the key text to appear inside the other side. Two variants that do not
/// embed the key, such as `d3` and `cholecalciferol`, therefore do not match.
#[must_use]
pub fn matches(factor_name: &str, nutrient_name: &str) -> bool {
    let factor = factor_name.to_lowercase();
    let nutrient = nutrient_name.to_lowercase();

    if factor == nutrient {
        return true;
    }

    SYNONYMS.iter().any(|(key, variants)| {
        let is_variant = |name: &str| name == *key || variants.contains(&name);
        (is_variant(&factor) && nutrient.contains(key))
            || (is_variant(&nutrient) && factor.contains(key))
    })
}
