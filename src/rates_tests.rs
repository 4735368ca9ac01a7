use super::*;

#[test]
fn default_rates_match_published_factors() {
    let rates = EmissionRates::default();
    assert!((rates.rate(TransportMode::Car) - 0.12).abs() < f64::EPSILON);
    assert!((rates.rate(TransportMode::Plane) - 0.25).abs() < f64::EPSILON);
    assert!((rates.rate(TransportMode::Train) - 0.04).abs() < f64::EPSILON);
    assert!((rates.rate(TransportMode::Bus) - 0.06).abs() < f64::EPSILON);
}

#[test]
fn iter_follows_enumeration_order() {
    let modes: Vec<_> = EmissionRates::default().iter().map(|(m, _)| m).collect();
    assert_eq!(modes, TransportMode::ALL.to_vec());
}

#[test]
fn from_pairs_builds_complete_table() {
    let rates = EmissionRates::from_pairs(DEFAULT_EMISSION_RATES).unwrap();
    assert_eq!(rates, EmissionRates::default());
}

#[test]
fn from_pairs_last_value_wins() {
    let mut pairs = DEFAULT_EMISSION_RATES.to_vec();
    pairs.push((TransportMode::Bus, 0.1));
    let rates = EmissionRates::from_pairs(pairs).unwrap();
    assert!((rates.rate(TransportMode::Bus) - 0.1).abs() < f64::EPSILON);
}

#[test]
fn from_pairs_reports_missing_mode() {
    let err = EmissionRates::from_pairs([
        (TransportMode::Car, 0.12),
        (TransportMode::Plane, 0.25),
        (TransportMode::Bus, 0.06),
    ])
    .unwrap_err();
    assert!(matches!(err, Co2Error::MissingRate(ref m) if m == "train"));
}

#[test]
fn from_pairs_rejects_non_positive_rate() {
    let err = EmissionRates::from_pairs([(TransportMode::Car, 0.0)]).unwrap_err();
    assert!(matches!(err, Co2Error::Config(_)));
}

#[test]
fn from_pairs_rejects_nan_rate() {
    let err = EmissionRates::from_pairs([(TransportMode::Car, f64::NAN)]).unwrap_err();
    assert!(matches!(err, Co2Error::Config(_)));
}

#[test]
fn default_equivalence_constants() {
    let eq = EquivalenceRates::default();
    assert!((eq.streaming_kg_per_hour - 0.036).abs() < f64::EPSILON);
    assert!((eq.tree_absorption_kg_per_year - 22.0).abs() < f64::EPSILON);
}

#[test]
fn equivalence_rejects_negative_constant() {
    assert!(EquivalenceRates::new(0.036, -1.0).is_err());
    assert!(EquivalenceRates::new(f64::INFINITY, 22.0).is_err());
}
