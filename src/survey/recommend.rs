//! Narrative recommendations keyed by risk tier.

use crate::core::RiskTier;

/// Fallback returned when a textual tier value cannot be parsed. Unreachable
/// through [`recommendation`], since `RiskTier` is a closed enum, but kept as
/// the default of the label-based lookup so a foreign tier string can never
/// render an empty recommendation.
pub const UNRECOGNIZED_TIER: &str = "Nivel de riesgo no reconocido.";

/// Fixed recommendation paragraph for a risk tier.
pub fn recommendation(tier: RiskTier) -> &'static str {
    match tier {
        RiskTier::Nil => {
            "El riesgo resulta despreciable por lo que no se requiere medidas adicionales."
        }
        RiskTier::Low => {
            "Es necesario una mayor difusión de la política de prevención de riesgos \
             psicosociales y programas para: la prevención de los factores de riesgo \
             psicosocial, la promoción de un entorno organizacional favorable y la \
             prevención de la violencia laboral."
        }
        RiskTier::Medium => {
            "Se requiere revisar la política de prevención de riesgos psicosociales y \
             programas para la prevención de los factores de riesgo psicosocial, la \
             promoción de un entorno organizacional favorable y la prevención de la \
             violencia laboral, así como reforzar su aplicación y difusión, mediante un \
             Programa de intervención."
        }
        RiskTier::High => {
            "Se requiere realizar un análisis de cada categoría y dominio, de manera que \
             se puedan determinar las acciones de intervención apropiadas a través de un \
             Programa de intervención..."
        }
        RiskTier::VeryHigh => {
            "Se requiere realizar el análisis de cada categoría y dominio para establecer \
             las acciones de intervención apropiadas, mediante un Programa de intervención \
             que deberá incluir evaluaciones específicas..."
        }
    }
}

/// Recommendation for a textual tier value, with the fallback for anything
/// [`RiskTier::from_label`] does not recognize.
pub fn recommendation_for_label(label: &str) -> &'static str {
    match RiskTier::from_label(label) {
        Some(tier) => recommendation(tier),
        None => UNRECOGNIZED_TIER,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_tier_has_a_distinct_recommendation() {
        let texts = [
            recommendation(RiskTier::Nil),
            recommendation(RiskTier::Low),
            recommendation(RiskTier::Medium),
            recommendation(RiskTier::High),
            recommendation(RiskTier::VeryHigh),
        ];
        for (index, text) in texts.iter().enumerate() {
            assert!(!text.is_empty());
            for other in &texts[index + 1..] {
                assert_ne!(text, other);
            }
        }
    }

    #[test]
    fn escalating_tiers_require_an_intervention_program() {
        for tier in [RiskTier::Medium, RiskTier::High, RiskTier::VeryHigh] {
            assert!(recommendation(tier).contains("Programa de intervención"));
        }
        assert!(!recommendation(RiskTier::Nil).contains("Programa de intervención"));
    }

    #[test]
    fn label_lookup_matches_the_tier_lookup() {
        assert_eq!(
            recommendation_for_label("Bajo"),
            recommendation(RiskTier::Low)
        );
        assert_eq!(
            recommendation_for_label("Muy alto"),
            recommendation(RiskTier::VeryHigh)
        );
    }

    #[test]
    fn unknown_labels_fall_back() {
        assert_eq!(recommendation_for_label("Extremo"), UNRECOGNIZED_TIER);
        assert_eq!(recommendation_for_label(""), UNRECOGNIZED_TIER);
    }
}
