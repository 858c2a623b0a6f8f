// Host-side tests for connection selection and drawing order.

mod common;

use common::{approx, particle_at, DrawCall, RecordingSurface};
use field_core::{
    collect_edges, draw_connections, fade_alpha, EdgeKind, FieldConfig, Rgba, GLOW_RADIUS,
    LINE_WIDTH, POINTER_LINE_WIDTH,
};
use glam::Vec2;

fn at(x: f32, y: f32) -> field_core::Particle {
    let p = Vec2::new(x, y);
    particle_at(p, p, Vec2::ZERO)
}

#[test]
fn pair_at_exact_threshold_is_skipped() {
    let config = FieldConfig::default();
    let particles = vec![at(0.0, 0.0), at(config.connection_distance, 0.0)];
    let mut edges = Vec::new();
    collect_edges(&particles, None, &config, &mut edges);
    assert!(edges.is_empty());
    assert_eq!(fade_alpha(100.0, 100.0, 0.5), None);
}

#[test]
fn pair_at_half_threshold_has_quarter_alpha() {
    let config = FieldConfig::default();
    let particles = vec![at(10.0, 10.0), at(10.0, 60.0)];
    let mut edges = Vec::new();
    collect_edges(&particles, None, &config, &mut edges);
    assert_eq!(edges.len(), 1);
    assert_eq!(edges[0].kind, EdgeKind::Particle);
    assert!(approx(edges[0].alpha, 0.25, 1e-6));
    assert_eq!(edges[0].from, Vec2::new(10.0, 10.0));
    assert_eq!(edges[0].to, Vec2::new(10.0, 60.0));
}

#[test]
fn alpha_falls_monotonically_with_distance() {
    let mut prev = f32::INFINITY;
    for d in 0..100 {
        let alpha = fade_alpha(d as f32, 100.0, 0.5).unwrap_or(0.0);
        assert!(alpha < prev, "alpha at {d} not below previous");
        assert!(alpha <= 0.5);
        prev = alpha;
    }
    assert_eq!(fade_alpha(0.0, 100.0, 0.5), Some(0.5));
}

#[test]
fn every_close_pair_is_visited_once() {
    let config = FieldConfig::default();
    // Three mutually close particles and one far away.
    let particles = vec![at(0.0, 0.0), at(10.0, 0.0), at(0.0, 10.0), at(500.0, 500.0)];
    let mut edges = Vec::new();
    collect_edges(&particles, None, &config, &mut edges);
    assert_eq!(edges.len(), 3);
}

#[test]
fn pointer_edges_reach_one_and_a_half_thresholds() {
    let config = FieldConfig::default();
    let pointer = Some(Vec2::new(0.0, 0.0));
    let particles = vec![at(0.0, 0.0), at(149.0, 0.0), at(150.0, 0.0), at(0.0, 75.0)];
    let mut edges = Vec::new();
    collect_edges(&particles, pointer, &config, &mut edges);

    let pointer_edges: Vec<_> = edges.iter().filter(|e| e.kind == EdgeKind::Pointer).collect();
    assert_eq!(pointer_edges.len(), 3);
    assert!(approx(pointer_edges[0].alpha, 0.8, 1e-6));
    assert!(pointer_edges[1].alpha > 0.0 && pointer_edges[1].alpha < 0.01);
    assert!(approx(pointer_edges[2].alpha, 0.4, 1e-6));
    assert!(pointer_edges.iter().all(|e| e.to == Vec2::ZERO));
}

#[test]
fn pointer_edges_need_pointer_and_interactivity() {
    let particles = vec![at(5.0, 5.0)];
    let mut edges = Vec::new();

    collect_edges(&particles, None, &FieldConfig::default(), &mut edges);
    assert!(edges.is_empty());

    let passive = FieldConfig {
        interactive: false,
        ..FieldConfig::default()
    };
    collect_edges(&particles, Some(Vec2::ZERO), &passive, &mut edges);
    assert!(edges.is_empty());
}

#[test]
fn glow_is_drawn_after_every_line() {
    let config = FieldConfig::default();
    let pointer = Some(Vec2::new(20.0, 20.0));
    let particles = vec![at(0.0, 0.0), at(30.0, 0.0), at(0.0, 30.0)];
    let mut edges = Vec::new();
    collect_edges(&particles, pointer, &config, &mut edges);

    let mut surface = RecordingSurface::new(100.0, 100.0);
    draw_connections(&mut surface, &edges, pointer, &config);

    assert_eq!(surface.lines(), edges.len());
    assert_eq!(
        surface.calls.last(),
        Some(&DrawCall::Glow {
            center: Vec2::new(20.0, 20.0),
            radius: GLOW_RADIUS,
            color: config.glow_color.with_alpha(1.0),
        })
    );
    for call in &surface.calls {
        if let DrawCall::Line {
            to, color, width, ..
        } = call
        {
            if *to == Vec2::new(20.0, 20.0) {
                assert_eq!(*color, config.pointer_line_color);
                assert_eq!(*width, POINTER_LINE_WIDTH);
            } else {
                assert_eq!(*color, config.line_color);
                assert_eq!(*width, LINE_WIDTH);
            }
        }
    }
}

#[test]
fn glow_center_is_fully_opaque() {
    let translucent = FieldConfig {
        glow_color: Rgba::rgb(200, 100, 50).with_alpha(0.15),
        ..FieldConfig::default()
    };
    for config in [FieldConfig::default(), translucent] {
        let mut surface = RecordingSurface::new(100.0, 100.0);
        draw_connections(&mut surface, &[], Some(Vec2::new(10.0, 10.0)), &config);
        let Some(DrawCall::Glow { color, .. }) = surface.calls.last() else {
            panic!("expected a glow, got {:?}", surface.calls);
        };
        assert_eq!(color.a, 1.0);
        assert_eq!(*color, config.glow_color.with_alpha(1.0));
        assert!(color.to_css(1.0).ends_with(", 1.000)"));
    }
}

#[test]
fn no_glow_without_pointer() {
    let config = FieldConfig::default();
    let mut surface = RecordingSurface::new(100.0, 100.0);
    draw_connections(&mut surface, &[], None, &config);
    assert!(surface.calls.is_empty());
}
