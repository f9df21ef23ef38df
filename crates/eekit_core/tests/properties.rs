use eekit_core::{
    CircuitMode, ColorBand, RcParameters, ResistorList, Unavailable, estimate_rc, format_resistance,
    reduce_network, resolve_color_code,
};
use rstest::rstest;

#[test]
fn brown_black_red_gold_is_one_kiloohm() {
    let reading = resolve_color_code(
        ColorBand::Brown,
        ColorBand::Black,
        ColorBand::Red,
        ColorBand::Gold,
    );
    let resistance = reading.resistance.expect("valid bands");
    assert_eq!(resistance.ohms, 1000.0);
    assert_eq!(resistance.to_string(), "1 kΩ");
    assert_eq!(reading.tolerance, Some(5.0));
    assert_eq!(reading.tolerance_label(), "±5%");
}

#[test]
fn every_valid_selection_is_deterministic() {
    let digits: Vec<_> = ColorBand::choices(eekit_core::BandRole::FirstDigit).collect();
    let multipliers: Vec<_> = ColorBand::choices(eekit_core::BandRole::Multiplier).collect();
    for &d1 in &digits {
        for &d2 in &digits {
            for &m in &multipliers {
                let first = resolve_color_code(d1, d2, m, ColorBand::Gold);
                let second = resolve_color_code(d1, d2, m, ColorBand::Gold);
                assert_eq!(first, second);
                let ohms = first.resistance.expect("digit and multiplier bands").ohms;
                let expected = f64::from(d1.digit().unwrap() * 10 + d2.digit().unwrap())
                    * m.multiplier().unwrap();
                assert!((ohms - expected).abs() <= expected * 1e-12);
            }
        }
    }
}

#[rstest]
#[case(&[], CircuitMode::Series, 0.0)]
#[case(&[], CircuitMode::Parallel, 0.0)]
#[case(&["100", "200"], CircuitMode::Series, 300.0)]
#[case(&["100", "100"], CircuitMode::Parallel, 50.0)]
#[case(&["100", "abc", "-5", "0"], CircuitMode::Series, 100.0)]
fn network_properties(#[case] values: &[&str], #[case] mode: CircuitMode, #[case] expected: f64) {
    assert_eq!(reduce_network(values, mode), expected);
    // no hidden state between calls
    assert_eq!(reduce_network(values, mode), expected);
}

#[test]
fn network_display() {
    insta::assert_snapshot!(format_resistance(reduce_network(&["1000", "2000"][..], CircuitMode::Parallel)), @"666.67 Ω");
}

#[test]
fn rc_half_voltage() {
    let timing = estimate_rc(&RcParameters::new(1e-6, 1000.0, 5.0, 2.5));
    assert_eq!(timing.time_constant_label(), "1.000 ms");
    let charge = timing.charge.unwrap();
    let discharge = timing.discharge.unwrap();
    assert!((charge - 0.000693).abs() < 1e-6);
    assert!((discharge - 0.000693).abs() < 1e-6);
    assert_eq!(estimate_rc(&RcParameters::new(1e-6, 1000.0, 5.0, 2.5)), timing);
}

#[test]
fn rc_zero_target() {
    let timing = estimate_rc(&RcParameters::new(1e-6, 1000.0, 5.0, 0.0));
    assert!(timing.time_constant.is_ok());
    assert!(timing.charge.is_err());
    assert!(timing.discharge.is_err());
}

#[test]
fn rc_zero_capacitance() {
    let timing = estimate_rc(&RcParameters::new(0.0, 1000.0, 5.0, 2.0));
    assert_eq!(timing.time_constant, Err(Unavailable::OutOfRange));
    assert_eq!(timing.charge, Err(Unavailable::OutOfRange));
    assert_eq!(timing.discharge, Err(Unavailable::OutOfRange));
}

#[test]
fn resistor_list_identity() {
    let mut list = ResistorList::new();
    let kept = list.entries()[0].id;
    let removed = list.push();
    list.remove(removed).unwrap();
    let added = list.push();
    assert_ne!(added, removed);
    assert!(list.remove(kept).is_ok());
    assert!(list.remove(added).is_err());
}
