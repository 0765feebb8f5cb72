//! Each coordinate mode checked against hand-computed values.

use sky_format::{
    CoordinateMode, FrameContext, ModeValue, NumericNotation, Quantity, evaluate, format_quantity,
    parse_sexagesimal, render,
};

/// λ = 90°, β = 0 on the equator at LST 6h: the body sits on the
/// meridian, α = 90°, δ = ε, and it culminates due north at h = 90° − ε.
const OBL: f64 = 23.4393;
const CTX: FrameContext = FrameContext {
    obliquity_deg: OBL,
    lst_hours: 6.0,
    latitude_deg: 0.0,
};

fn close(a: f64, b: f64, tol: f64) -> bool {
    (a - b).abs() < tol
}

#[test]
fn six_modes_hand_computed_decimal() {
    let expected = [
        (CoordinateMode::EclipticAngular, "90.0000°  +0.0000°"),
        (CoordinateMode::EclipticZodiacal, "Cancer 0.0000°  +0.0000°"),
        (CoordinateMode::EquatorialTime, "6.0000h  +23.4393°"),
        (CoordinateMode::EquatorialAngular, "90.0000°  +23.4393°"),
        (CoordinateMode::HorizontalTime, "12.0000h  +66.5607°"),
        (CoordinateMode::HorizontalAngular, "180.0000°  +66.5607°"),
    ];
    for (mode, text) in expected {
        let out = render(mode, NumericNotation::Decimal, 90.0, 0.0, OBL, 6.0, 0.0);
        assert_eq!(out, text, "mode {mode}");
    }
}

#[test]
fn six_modes_hand_computed_sexagesimal() {
    let expected = [
        (CoordinateMode::EclipticAngular, "90°00'00.0\"  +0°00'00.0\""),
        (CoordinateMode::EclipticZodiacal, "Cancer 0°00'00.0\"  +0°00'00.0\""),
        (CoordinateMode::EquatorialTime, "06h00m00.0s  +23°26'21.5\""),
        (CoordinateMode::EquatorialAngular, "90°00'00.0\"  +23°26'21.5\""),
        (CoordinateMode::HorizontalTime, "12h00m00.0s  +66°33'38.5\""),
        (CoordinateMode::HorizontalAngular, "180°00'00.0\"  +66°33'38.5\""),
    ];
    for (mode, text) in expected {
        let out = render(mode, NumericNotation::Sexagesimal, 90.0, 0.0, OBL, 6.0, 0.0);
        assert_eq!(out, text, "mode {mode}");
    }
}

#[test]
fn six_modes_are_distinct() {
    let outputs: Vec<String> = CoordinateMode::all()
        .iter()
        .map(|m| evaluate(*m, 90.0, 0.0, &CTX).render(NumericNotation::Decimal))
        .collect();
    for i in 0..outputs.len() {
        for j in (i + 1)..outputs.len() {
            assert_ne!(outputs[i], outputs[j]);
        }
    }
}

#[test]
fn equatorial_modes_match_pollux() {
    // Meeus example 13.a, read in reverse.
    let ctx = FrameContext {
        obliquity_deg: 23.439_291_1,
        ..CTX
    };
    match evaluate(CoordinateMode::EquatorialAngular, 113.215_630, 6.684_170, &ctx) {
        ModeValue::EquatorialAngular { ra_deg, dec_deg } => {
            assert!(close(ra_deg, 116.328_942, 1e-5), "α = {ra_deg}");
            assert!(close(dec_deg, 28.026_183, 1e-5), "δ = {dec_deg}");
        }
        other => panic!("unexpected {other:?}"),
    }
    match evaluate(CoordinateMode::EquatorialTime, 113.215_630, 6.684_170, &ctx) {
        ModeValue::EquatorialTime { ra_hours, .. } => {
            assert!(close(ra_hours, 116.328_942 / 15.0, 1e-6), "α = {ra_hours}h");
        }
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn horizontal_mode_matches_venus_example() {
    // Meeus example 13.b: Venus from Washington, α = 347.3193375°,
    // δ = −6.719892°, H = 64.352133° → A = 68.0337°, h = 15.1249°.
    // Feed the ecliptic position that maps to that α, δ.
    let obl = 23.440_946_1;
    let ecl = sky_frames::equatorial_to_ecliptic(347.319_337_5, -6.719_892, obl);
    let lst_hours = (347.319_337_5 + 64.352_133) / 15.0;
    let ctx = FrameContext {
        obliquity_deg: obl,
        lst_hours,
        latitude_deg: 38.921_389,
    };
    match evaluate(CoordinateMode::HorizontalAngular, ecl.lon_deg, ecl.lat_deg, &ctx) {
        ModeValue::HorizontalAngular {
            azimuth_deg,
            altitude_deg,
        } => {
            assert!(close(azimuth_deg, 68.0337, 1e-3), "A = {azimuth_deg}");
            assert!(close(altitude_deg, 15.1249, 1e-3), "h = {altitude_deg}");
        }
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn rendering_is_idempotent() {
    for m in CoordinateMode::all() {
        for notation in [NumericNotation::Decimal, NumericNotation::Sexagesimal] {
            let a = render(*m, notation, 201.7, -2.3, OBL, 17.25, -33.9);
            let b = render(*m, notation, 201.7, -2.3, OBL, 17.25, -33.9);
            assert_eq!(a, b);
        }
    }
}

#[test]
fn sexagesimal_render_parses_back_within_one_arcsecond() {
    let arcsec = 1.0 / 3600.0;
    for i in 0..500 {
        let v = i as f64 * 0.719_3 - 90.0;
        let signed = format_quantity(v, Quantity::Signed, NumericNotation::Sexagesimal);
        let back = parse_sexagesimal(&signed).unwrap();
        assert!(close(back, v, arcsec), "{v} → {signed} → {back}");

        let angle = v.rem_euclid(360.0);
        let text = format_quantity(angle, Quantity::Angle, NumericNotation::Sexagesimal);
        let back = parse_sexagesimal(&text).unwrap();
        let diff = (back - angle).rem_euclid(360.0);
        assert!(diff.min(360.0 - diff) < arcsec, "{angle} → {text} → {back}");
    }
}

#[test]
fn hours_render_parses_back() {
    for i in 0..240 {
        let h = i as f64 * 0.099_7;
        let text = format_quantity(h, Quantity::Hours, NumericNotation::Sexagesimal);
        let back = parse_sexagesimal(&text).unwrap();
        assert!(close(back, h, 1.0 / 3600.0), "{h} → {text} → {back}");
    }
}
