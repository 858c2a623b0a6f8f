// Host-side tests for tuning constants and their relationships.

use field_core::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn constants_keep_the_simulation_stable() {
    // Friction and bounce must both dissipate energy.
    assert!(FRICTION > 0.0 && FRICTION < 1.0);
    assert!(BOUNCE_DAMPING > 0.0 && BOUNCE_DAMPING < 1.0);

    // Homing must stay a weak spring relative to friction.
    assert!(RETURN_FORCE > 0.0 && RETURN_FORCE < 1.0 - FRICTION);

    // Breathing never fully hides or over-brightens a particle.
    assert!(BREATHE_BASE - BREATHE_DEPTH > 0.0);
    assert!(BREATHE_BASE + BREATHE_DEPTH <= 1.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn constants_have_logical_relationships() {
    assert!(OPACITY_MIN < OPACITY_MAX && OPACITY_MAX <= 1.0);
    assert!(AGE_STEP > 0.0 && AGE_STEP < MAX_AGE);
    assert!(POINTER_REACH_FACTOR > 1.0);
    assert!(POINTER_LINE_ALPHA_MAX > LINE_ALPHA_MAX);
    assert!(INTERACTION_RADIUS > GLOW_RADIUS);
}
