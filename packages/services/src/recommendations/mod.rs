mod catalog;

use catalog::CATALOG;
use models::recommendation::Recommendation;

/// Looks up the treatment suggestion for a concern key.
///
/// Only exact keys match. A miss is an ordinary outcome and is reported as
/// `None`; it is also logged so a drift between the form's options and the
/// catalog shows up in the logs.
pub fn get_recommendation(concern: &str) -> Option<&'static Recommendation> {
    let found = CATALOG
        .iter()
        .find(|(key, _)| *key == concern)
        .map(|(_, recommendation)| recommendation);

    if found.is_none() {
        tracing::warn!(concern, "no recommendation found for concern");
    }

    found
}

pub fn is_valid_concern(concern: &str) -> bool {
    CATALOG.iter().any(|(key, _)| *key == concern)
}

/// Concern keys in catalog order. The order is stable but not sorted.
pub fn available_concerns() -> Vec<&'static str> {
    CATALOG.iter().map(|(key, _)| *key).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use models::choices::Concern;

    #[test]
    fn test_acne_recommendation() {
        let result = get_recommendation("acne").unwrap();
        assert_eq!(result.title, "Acne Healing Facials");
        assert!(result.desc.contains("Deep Pore Cleanse"));
    }

    #[test]
    fn test_wrinkles_recommendation() {
        let result = get_recommendation("wrinkles").unwrap();
        assert_eq!(result.title, "Anti-Aging Facial Treatments");
        assert!(result.desc.contains("Glo Signature Rejuvenation Facial"));
    }

    #[test]
    fn test_texture_recommendation() {
        let result = get_recommendation("texture").unwrap();
        assert_eq!(result.title, "Texture Refinement Services");
        assert!(result.desc.contains("Microdermabrasion"));
    }

    #[test]
    fn test_hair_recommendation() {
        let result = get_recommendation("hair").unwrap();
        assert_eq!(result.title, "Laser Hair Removal");
        assert!(result.desc.contains("medical-grade laser"));
    }

    #[test]
    fn test_unknown_concerns_are_not_found() {
        for concern in ["invalid", "", "Acne", " acne", "acne ", "hair removal"] {
            assert!(get_recommendation(concern).is_none(), "{concern:?}");
        }
    }

    #[test]
    fn test_lookup_returns_the_same_record_every_time() {
        let first = get_recommendation("texture").unwrap();
        let second = get_recommendation("texture").unwrap();
        assert!(std::ptr::eq(first, second));
        assert_eq!(get_recommendation("invalid"), get_recommendation("invalid"));
    }

    #[test]
    fn test_is_valid_concern() {
        for concern in ["acne", "wrinkles", "texture", "hair"] {
            assert!(is_valid_concern(concern));
        }
        assert!(!is_valid_concern("invalid"));
        assert!(!is_valid_concern(""));
    }

    #[test]
    fn test_available_concerns() {
        let concerns = available_concerns();
        assert_eq!(concerns, vec!["wrinkles", "acne", "texture", "hair"]);
        for concern in &concerns {
            assert!(is_valid_concern(concern));
        }
    }

    #[test]
    fn test_every_offered_concern_has_a_recommendation() {
        for concern in Concern::ALL {
            assert!(is_valid_concern(concern.as_str()), "{concern:?}");
        }
        assert_eq!(available_concerns().len(), Concern::ALL.len());
    }
}
