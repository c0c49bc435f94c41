//! Administrative regions of Kazakhstan.
//!
//! Object records usually carry one of these names in their `region` field,
//! but free-form values are also accepted and kept as-is.

/// The 14 regions plus the three cities of republican significance.
pub const KNOWN_REGIONS: &[&str] = &[
    "Акмолинская область",
    "Актюбинская область",
    "Алматинская область",
    "Атырауская область",
    "Восточно-Казахстанская область",
    "Жамбылская область",
    "Западно-Казахстанская область",
    "Карагандинская область",
    "Костанайская область",
    "Кызылординская область",
    "Мангистауская область",
    "Павлодарская область",
    "Северо-Казахстанская область",
    "Туркестанская область",
    "Алматы",
    "Астана",
    "Шымкент",
];

/// Returns the canonical spelling of a known region, ignoring case and
/// surrounding whitespace.
///
/// Returns `None` for free-form values that are not in [`KNOWN_REGIONS`].
#[must_use]
pub fn canonical_region(raw: &str) -> Option<&'static str> {
    let needle = raw.trim().to_lowercase();
    KNOWN_REGIONS
        .iter()
        .copied()
        .find(|region| region.to_lowercase() == needle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn region_count() {
        assert_eq!(KNOWN_REGIONS.len(), 17);
    }

    #[test]
    fn region_names_are_unique() {
        let unique: BTreeSet<_> = KNOWN_REGIONS.iter().collect();
        assert_eq!(unique.len(), KNOWN_REGIONS.len());
    }

    #[test]
    fn canonical_region_ignores_case_and_whitespace() {
        assert_eq!(
            canonical_region("  алматинская ОБЛАСТЬ "),
            Some("Алматинская область")
        );
        assert_eq!(canonical_region("Астана"), Some("Астана"));
    }

    #[test]
    fn unknown_region() {
        assert_eq!(canonical_region("Окраина"), None);
        assert_eq!(canonical_region(""), None);
    }
}
