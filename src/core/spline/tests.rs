use super::*;
use crate::core::BezierKnot;
use crate::shared::safe_look_rotation;
use approx::assert_relative_eq;
use glam::Quat;

/// Gerades Segment von `start` nach `end` mit Tangenten von je einem
/// Drittel der Segmentlänge (de-facto lineare Parametrisierung).
fn straight_spline(start: Vec3, end: Vec3) -> Spline {
    let direction = end - start;
    let rotation = safe_look_rotation(direction, Vec3::Y);
    let tangent = rotation.inverse() * (direction / 3.0);

    let mut spline = Spline::new();
    spline.add_knot(BezierKnot {
        position: start,
        rotation,
        tangent_in: -tangent,
        tangent_out: tangent,
    });
    spline.add_knot(BezierKnot {
        position: end,
        rotation,
        tangent_in: -tangent,
        tangent_out: tangent,
    });
    spline
}

// ── Bogenlänge ──

#[test]
fn test_arc_length_straight_segment() {
    let spline = straight_spline(Vec3::ZERO, Vec3::new(0.0, 0.0, 10.0));
    assert_relative_eq!(spline.arc_length(), 10.0, epsilon = 1e-3);
}

#[test]
fn test_arc_length_empty_and_single_knot() {
    let empty = Spline::new();
    assert_eq!(empty.arc_length(), 0.0);

    let mut single = Spline::new();
    single.add_knot(BezierKnot::at(Vec3::new(1.0, 2.0, 3.0)));
    assert_eq!(single.arc_length(), 0.0);
}

#[test]
fn test_closed_spline_has_wraparound_segment() {
    let mut spline = Spline::new();
    for position in [
        Vec3::ZERO,
        Vec3::new(10.0, 0.0, 0.0),
        Vec3::new(10.0, 0.0, 10.0),
    ] {
        spline.add_knot(BezierKnot::at(position));
    }
    assert_eq!(spline.segment_count(), 2);
    spline.closed = true;
    assert_eq!(spline.segment_count(), 3);
    // Umfang des Dreiecks (Tangenten Null → Segmente sind Geraden)
    let expected = 10.0 + 10.0 + (200.0f32).sqrt();
    assert_relative_eq!(spline.arc_length(), expected, epsilon = 1e-2);
}

// ── Auswertung ──

#[test]
fn test_evaluate_endpoints() {
    let start = Vec3::new(1.0, 2.0, 3.0);
    let end = Vec3::new(1.0, 2.0, 13.0);
    let spline = straight_spline(start, end);

    let (p0, _, _) = spline.evaluate(0.0);
    let (p1, _, _) = spline.evaluate(1.0);
    assert_relative_eq!(p0.distance(start), 0.0, epsilon = 1e-4);
    assert_relative_eq!(p1.distance(end), 0.0, epsilon = 1e-4);
}

#[test]
fn test_evaluate_midpoint_and_tangent_direction() {
    let spline = straight_spline(Vec3::ZERO, Vec3::new(0.0, 0.0, 10.0));
    let (position, tangent, up) = spline.evaluate(0.5);

    assert_relative_eq!(position.distance(Vec3::new(0.0, 0.0, 5.0)), 0.0, epsilon = 1e-3);
    let forward = tangent.normalize();
    assert_relative_eq!(forward.z, 1.0, epsilon = 1e-4);
    assert_relative_eq!(up.y, 1.0, epsilon = 1e-4);
}

#[test]
fn test_evaluate_clamps_parameter() {
    let spline = straight_spline(Vec3::ZERO, Vec3::new(0.0, 0.0, 10.0));
    let (below, _, _) = spline.evaluate(-0.5);
    let (above, _, _) = spline.evaluate(1.5);
    assert_relative_eq!(below.distance(Vec3::ZERO), 0.0, epsilon = 1e-4);
    assert_relative_eq!(above.distance(Vec3::new(0.0, 0.0, 10.0)), 0.0, epsilon = 1e-4);
}

#[test]
fn test_evaluate_degenerate_spline_is_finite() {
    let mut spline = Spline::new();
    spline.add_knot(BezierKnot::at(Vec3::new(4.0, 5.0, 6.0)));

    for t in [-1.0, 0.0, 0.5, 1.0, 2.0] {
        let (position, tangent, up) = spline.evaluate(t);
        assert!(position.is_finite() && tangent.is_finite() && up.is_finite());
        assert_eq!(position, Vec3::new(4.0, 5.0, 6.0));
    }
}

#[test]
fn test_evaluate_up_vector_carries_roll() {
    // Beide Knoten um 90 Grad um die Kurvenrichtung (+Z) gerollt
    let roll = Quat::from_axis_angle(Vec3::Z, std::f32::consts::FRAC_PI_2);
    let mut spline = straight_spline(Vec3::ZERO, Vec3::new(0.0, 0.0, 10.0));
    for knot in &mut spline.knots {
        knot.rotation = roll * knot.rotation;
    }

    let (_, _, up) = spline.evaluate(0.5);
    // +Y um 90 Grad um +Z gedreht ergibt -X... (Rechtsdrehung: Y → -X)
    assert_relative_eq!(up.x.abs(), 1.0, epsilon = 1e-4);
    assert_relative_eq!(up.y, 0.0, epsilon = 1e-4);
}

// ── Nearest ──

#[test]
fn test_nearest_interior_point() {
    let spline = straight_spline(Vec3::ZERO, Vec3::new(10.0, 0.0, 0.0));
    let (position, t) = spline.nearest(Vec3::new(3.0, 2.0, 0.0), 4.0);

    assert!(t > 0.0 && t < 1.0, "t={t} sollte strikt innerhalb liegen");
    assert_relative_eq!(position.x, 3.0, epsilon = 0.2);
    assert_relative_eq!(position.y, 0.0, epsilon = 1e-3);
}

#[test]
fn test_nearest_beyond_endpoints_clamps_to_0_or_1() {
    let spline = straight_spline(Vec3::ZERO, Vec3::new(10.0, 0.0, 0.0));

    let (_, t_before) = spline.nearest(Vec3::new(-5.0, 1.0, 0.0), 4.0);
    let (_, t_after) = spline.nearest(Vec3::new(15.0, 1.0, 0.0), 4.0);
    assert_eq!(t_before, 0.0);
    assert_eq!(t_after, 1.0);
}

#[test]
fn test_nearest_tie_prefers_lowest_t() {
    // Zwei identische Knoten: jede Stützstelle ist exakt gleich weit
    // entfernt, der strikte `<`-Vergleich lässt das niedrigste t gewinnen
    let mut spline = Spline::new();
    spline.add_knot(BezierKnot::at(Vec3::ZERO));
    spline.add_knot(BezierKnot::at(Vec3::ZERO));
    let (_, t) = spline.nearest(Vec3::new(1.0, 2.0, 3.0), 4.0);
    assert_eq!(t, 0.0, "bei Gleichstand gewinnt das niedrigste t");
}

#[test]
fn test_nearest_degenerate_spline() {
    let mut spline = Spline::new();
    spline.add_knot(BezierKnot::at(Vec3::ONE));
    let (position, t) = spline.nearest(Vec3::new(9.0, 9.0, 9.0), 2.0);
    assert_eq!(position, Vec3::ONE);
    assert_eq!(t, 0.0);
}
