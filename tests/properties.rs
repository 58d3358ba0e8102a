//! Property tests for the collision and integration invariants.

use glam::Vec2;
use proptest::prelude::*;

use bounce_arena::sim::{Arena, Ball, Hsl, resolve_pair};
use bounce_arena::{distance, rotate};

const COLOR: Hsl = Hsl {
    h: 180.0,
    s: 0.5,
    l: 0.5,
};

fn ball_strategy() -> impl Strategy<Value = Ball> {
    (
        8.0f32..18.0,
        20.0f32..580.0,
        20.0f32..380.0,
        -5.0f32..5.0,
        -5.0f32..5.0,
    )
        .prop_map(|(radius, x, y, vx, vy)| {
            Ball::new(Vec2::new(x, y), Vec2::new(vx, vy), radius, COLOR, 100.0)
        })
}

/// A pair whose centers are at most one combined radius apart, so most cases
/// actually collide.
fn close_pair_strategy() -> impl Strategy<Value = (Ball, Ball)> {
    (ball_strategy(), ball_strategy(), 0.0f32..1.0, 0.0f32..std::f32::consts::TAU).prop_map(
        |(a, mut b, dist_frac, angle)| {
            let dist = (a.radius + b.radius) * dist_frac;
            b.pos = a.pos + rotate(Vec2::new(dist, 0.0), angle);
            (a, b)
        },
    )
}

proptest! {
    #[test]
    fn resolve_pair_leaves_no_residual_overlap((mut a, mut b) in close_pair_strategy()) {
        resolve_pair(&mut a, &mut b);
        prop_assert!(distance(a.pos, b.pos) >= a.radius + b.radius - 1e-3);
    }

    #[test]
    fn resolve_pair_conserves_momentum((mut a, mut b) in close_pair_strategy()) {
        let before = a.vel * a.mass + b.vel * b.mass;
        resolve_pair(&mut a, &mut b);
        let after = a.vel * a.mass + b.vel * b.mass;
        // Masses reach ~180, so allow a little f32 slack
        prop_assert!((after - before).length() < 0.1);
    }

    #[test]
    fn resolve_pair_keeps_tangential_velocity((mut a, mut b) in close_pair_strategy()) {
        let delta = b.pos - a.pos;
        let angle = delta.y.atan2(delta.x);
        let tangent = rotate(Vec2::new(0.0, 1.0), angle);
        let before_a = a.vel.dot(tangent);
        let before_b = b.vel.dot(tangent);

        resolve_pair(&mut a, &mut b);

        prop_assert!((a.vel.dot(tangent) - before_a).abs() < 1e-3);
        prop_assert!((b.vel.dot(tangent) - before_b).abs() < 1e-3);
    }

    #[test]
    fn resolve_pair_is_noop_when_separated(
        mut a in ball_strategy(),
        mut b in ball_strategy(),
        gap in 0.5f32..50.0,
        angle in 0.0f32..std::f32::consts::TAU,
    ) {
        b.pos = a.pos + rotate(Vec2::new(a.radius + b.radius + gap, 0.0), angle);
        let (before_a, before_b) = (a.clone(), b.clone());

        resolve_pair(&mut a, &mut b);

        // Bit-identical, not merely close
        prop_assert_eq!(a, before_a);
        prop_assert_eq!(b, before_b);
    }

    #[test]
    fn integrate_always_contains_ball(
        radius in 8.0f32..18.0,
        x in -50.0f32..650.0,
        y in -50.0f32..450.0,
        vx in -30.0f32..30.0,
        vy in -30.0f32..30.0,
    ) {
        let arena = Arena { width: 600.0, height: 400.0 };
        let mut ball = Ball::new(Vec2::new(x, y), Vec2::new(vx, vy), radius, COLOR, 100.0);

        ball.integrate(arena, 0.98);

        prop_assert!(ball.pos.x >= ball.radius && ball.pos.x <= arena.width - ball.radius);
        prop_assert!(ball.pos.y >= ball.radius && ball.pos.y <= arena.height - ball.radius);
    }

    #[test]
    fn integrate_never_speeds_up_rebound(
        radius in 8.0f32..18.0,
        vx in -30.0f32..30.0,
        vy in -30.0f32..30.0,
    ) {
        let arena = Arena { width: 600.0, height: 400.0 };
        // Start on the left wall so a rebound is likely
        let mut ball = Ball::new(Vec2::new(radius, 200.0), Vec2::new(vx, vy), radius, COLOR, 100.0);
        let speed_before = ball.vel.length();

        ball.integrate(arena, 0.98);

        prop_assert!(ball.vel.length() <= speed_before + 1e-4);
    }
}
