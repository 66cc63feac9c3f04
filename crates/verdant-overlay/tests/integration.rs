//! Integration tests for OverlayEngine
//!
//! These tests verify the full widget workflow including:
//! - Snapshot-delta geometry under arbitrary move sequences
//! - Mode gating of stray and out-of-order events
//! - Full-screen round-trips and entry gating
//! - Discrete zoom clamping
//! - Control-region exclusion from drag starts

use verdant_overlay::{
    InteractionKind, OverlayEngine, PointerSample, Rect, Size, SurfaceConfig, Vec2, ZoomDirection,
    MIN_HEIGHT, MIN_WIDTH,
};

fn engine_with_frame(x: f32, y: f32, w: f32, h: f32) -> OverlayEngine {
    let mut config = SurfaceConfig::for_viewport(1920.0, 1080.0);
    config.frame = Some(Rect::new(x, y, w, h));
    config.icon_pos = Some(Vec2::new(800.0, 800.0));
    let mut engine = OverlayEngine::with_config(config);
    engine.toggle_expanded();
    engine
}

// =============================================================================
// Snapshot-delta model
// =============================================================================

#[test]
fn test_resize_result_depends_only_on_final_pointer_position() {
    // Same start and end point, three different move sequences
    let paths: [&[(f32, f32)]; 3] = [
        &[(540.0, 560.0)],
        &[(510.0, 505.0), (525.0, 530.0), (540.0, 560.0)],
        &[
            (900.0, 900.0),
            (100.0, 100.0),
            (540.0, 561.0),
            (540.0, 560.0),
        ],
    ];

    for path in paths {
        let mut engine = engine_with_frame(100.0, 100.0, 280.0, 380.0);
        engine.begin_interaction(InteractionKind::Resize, PointerSample::new(500.0, 500.0));
        for &(x, y) in path {
            engine.handle_pointer_move(x, y);
        }

        assert!((engine.surface.frame.width - 320.0).abs() < 0.001);
        assert!((engine.surface.frame.height - 440.0).abs() < 0.001);
    }
}

#[test]
fn test_resize_returns_exactly_when_pointer_returns() {
    let mut engine = engine_with_frame(100.0, 100.0, 280.0, 380.0);

    engine.begin_interaction(InteractionKind::Resize, PointerSample::new(500.0, 500.0));
    engine.handle_pointer_move(540.0, 560.0);
    assert!((engine.surface.frame.width - 320.0).abs() < 0.001);
    assert!((engine.surface.frame.height - 440.0).abs() < 0.001);

    // Back to the start point: exact return, deltas are not accumulated
    engine.handle_pointer_move(500.0, 500.0);
    assert!((engine.surface.frame.width - 280.0).abs() < 0.001);
    assert!((engine.surface.frame.height - 380.0).abs() < 0.001);
}

#[test]
fn test_resize_clamp_formula_holds_for_any_sequence() {
    let mut engine = engine_with_frame(100.0, 100.0, 280.0, 380.0);

    engine.begin_interaction(InteractionKind::Resize, PointerSample::new(500.0, 500.0));
    for &(x, y) in &[(300.0, 700.0), (460.0, 520.0), (430.0, 505.0)] {
        engine.handle_pointer_move(x, y);
    }

    // Final pointer (430, 505): dx = -70, dy = 5
    let expected_w = (280.0f32 - 70.0).max(MIN_WIDTH);
    let expected_h = (380.0f32 + 5.0).max(MIN_HEIGHT);
    assert!((engine.surface.frame.width - expected_w).abs() < 0.001);
    assert!((engine.surface.frame.height - expected_h).abs() < 0.001);
}

#[test]
fn test_window_drag_ignores_dropped_intermediate_events() {
    let mut engine = engine_with_frame(100.0, 100.0, 280.0, 380.0);

    engine.begin_interaction(InteractionKind::DragWindow, PointerSample::new(150.0, 110.0));
    // Only the final event arrives
    engine.handle_pointer_move(250.0, 310.0);

    assert!((engine.surface.frame.x - 200.0).abs() < 0.001);
    assert!((engine.surface.frame.y - 300.0).abs() < 0.001);
}

// =============================================================================
// Mode gating
// =============================================================================

#[test]
fn test_stray_moves_after_release_never_mutate_geometry() {
    let mut engine = engine_with_frame(100.0, 100.0, 280.0, 380.0);

    engine.begin_interaction(InteractionKind::Resize, PointerSample::new(500.0, 500.0));
    engine.handle_pointer_move(540.0, 560.0);
    engine.handle_pointer_up();

    let frame = engine.surface.frame;
    let icon = engine.surface.icon_pos;

    // Out-of-order delivery: moves landing after the release
    for &(x, y) in &[(700.0, 700.0), (0.0, 0.0), (-50.0, 900.0)] {
        engine.handle_pointer_move(x, y);
    }

    assert_eq!(engine.surface.frame, frame);
    assert_eq!(engine.surface.icon_pos, icon);
}

#[test]
fn test_one_interaction_at_a_time_freezes_other_entity() {
    let mut engine = engine_with_frame(100.0, 100.0, 280.0, 380.0);
    let icon_before = engine.surface.icon_pos;

    engine.begin_interaction(InteractionKind::DragWindow, PointerSample::new(150.0, 110.0));
    engine.handle_pointer_move(400.0, 400.0);

    // The frame moved; the icon did not
    assert!((engine.surface.frame.x - 350.0).abs() < 0.001);
    assert_eq!(engine.surface.icon_pos, icon_before);
}

// =============================================================================
// Full-screen
// =============================================================================

#[test]
fn test_fullscreen_round_trip_restores_geometry() {
    let mut engine = engine_with_frame(100.0, 100.0, 280.0, 380.0);
    let before = engine.surface.frame;

    engine.toggle_fullscreen();
    assert!((engine.screen_rect().width - 1920.0).abs() < 0.001);
    engine.toggle_fullscreen();

    assert_eq!(engine.surface.frame, before);
}

#[test]
fn test_fullscreen_blocks_window_drag_and_resize_entry() {
    let mut engine = engine_with_frame(100.0, 100.0, 280.0, 380.0);
    engine.toggle_fullscreen();
    let frame = engine.surface.frame;

    engine.begin_interaction(InteractionKind::DragWindow, PointerSample::new(150.0, 110.0));
    assert!(!engine.input.is_active());

    engine.begin_interaction(InteractionKind::Resize, PointerSample::new(375.0, 475.0));
    assert!(!engine.input.is_active());

    engine.handle_pointer_move(900.0, 900.0);
    assert_eq!(engine.surface.frame, frame);
}

#[test]
fn test_fullscreen_still_allows_collapse_and_icon_drag() {
    let mut engine = engine_with_frame(100.0, 100.0, 280.0, 380.0);
    engine.toggle_fullscreen();

    engine.begin_interaction(InteractionKind::DragIcon, PointerSample::new(820.0, 820.0));
    assert!(engine.input.is_active());
    engine.handle_pointer_move(850.0, 790.0);
    assert!((engine.surface.icon_pos.x - 830.0).abs() < 0.001);
    assert!((engine.surface.icon_pos.y - 770.0).abs() < 0.001);
    engine.handle_pointer_up();

    engine.toggle_expanded();
    assert!(!engine.surface.expanded);
}

// =============================================================================
// Zoom
// =============================================================================

#[test]
fn test_zoom_round_trip_stays_in_tolerance() {
    let mut engine = engine_with_frame(100.0, 100.0, 280.0, 380.0);

    engine.zoom(ZoomDirection::In);
    engine.zoom(ZoomDirection::Out);

    let frame = engine.surface.frame;
    assert!(frame.width >= MIN_WIDTH);
    assert!(frame.height >= MIN_HEIGHT);
    // Not exact: 1.1 * 0.9 = 0.99
    assert!((frame.width - 280.0).abs() < 280.0 * 0.02);
    assert!((frame.height - 380.0).abs() < 380.0 * 0.02);
}

#[test]
fn test_zoom_is_usable_during_an_interaction() {
    let mut engine = engine_with_frame(100.0, 100.0, 280.0, 380.0);

    engine.begin_interaction(InteractionKind::DragWindow, PointerSample::new(150.0, 110.0));
    engine.zoom(ZoomDirection::In);

    // The interaction is still active and the frame scaled
    assert!(engine.input.is_active());
    assert!((engine.surface.frame.width - 308.0).abs() < 0.001);
}

// =============================================================================
// Control regions
// =============================================================================

#[test]
fn test_pointer_down_in_control_region_starts_no_interaction() {
    let mut engine = engine_with_frame(100.0, 100.0, 280.0, 380.0);

    let buttons = [
        engine.surface.close_button_rect(),
        engine.surface.fullscreen_button_rect(),
        engine.surface.zoom_in_button_rect(),
        engine.surface.zoom_out_button_rect(),
    ];

    for rect in buttons {
        let mut engine = engine_with_frame(100.0, 100.0, 280.0, 380.0);
        engine.handle_pointer_down(rect.x + rect.width / 2.0, rect.y + rect.height / 2.0);
        assert!(!engine.input.is_active());
    }
}

#[test]
fn test_close_button_collapses_while_header_around_it_drags() {
    let mut engine = engine_with_frame(100.0, 100.0, 280.0, 380.0);
    let close = engine.surface.close_button_rect();

    // Click on the close button: collapses, no drag
    engine.handle_pointer_down(close.x + 2.0, close.y + 2.0);
    assert!(!engine.surface.expanded);
    assert!(!engine.input.is_active());

    // Reopen; click on header left of all buttons: drags
    engine.toggle_expanded();
    engine.handle_pointer_down(120.0, 110.0);
    assert_eq!(
        engine.input.state().map(|s| s.kind()),
        Some(InteractionKind::DragWindow)
    );
}

// =============================================================================
// Lifecycle
// =============================================================================

#[test]
fn test_full_session_workflow() {
    let mut engine = OverlayEngine::new();
    engine.init(1920.0, 1080.0);

    // Starts collapsed at the derived dock position
    assert!(!engine.surface.expanded);
    assert!((engine.surface.icon_pos.x - 1840.0).abs() < 0.001);

    // Drag the icon somewhere else
    let icon = engine.surface.icon_rect();
    engine.handle_pointer_down(icon.x + 10.0, icon.y + 10.0);
    engine.handle_pointer_move(icon.x - 90.0, icon.y - 190.0);
    engine.handle_pointer_up();
    assert!((engine.surface.icon_pos.x - 1740.0).abs() < 0.001);
    assert!((engine.surface.icon_pos.y - 780.0).abs() < 0.001);

    // Expand, resize a bit, go full-screen and back
    engine.toggle_expanded();
    let frame = engine.surface.frame;
    engine.begin_interaction(
        InteractionKind::Resize,
        PointerSample::new(frame.right(), frame.bottom()),
    );
    engine.handle_pointer_move(frame.right() + 60.0, frame.bottom() + 40.0);
    engine.handle_pointer_up();
    assert!((engine.surface.frame.width - (frame.width + 60.0)).abs() < 0.001);
    assert!((engine.surface.frame.height - (frame.height + 40.0)).abs() < 0.001);

    let resized = engine.surface.frame;
    engine.toggle_fullscreen();
    engine.toggle_fullscreen();
    assert_eq!(engine.surface.frame, resized);

    // Collapse again: geometry survives for the next expand
    engine.toggle_expanded();
    assert!(!engine.surface.expanded);
    assert_eq!(engine.surface.frame, resized);
}

#[test]
fn test_interactions_are_exclusive_across_kinds() {
    let mut engine = engine_with_frame(100.0, 100.0, 280.0, 380.0);

    // A resize begun while a window drag is active replaces it; the frame
    // position computed from the stale drag snapshot no longer changes.
    engine.begin_interaction(InteractionKind::DragWindow, PointerSample::new(150.0, 110.0));
    engine.begin_interaction(InteractionKind::Resize, PointerSample::new(500.0, 500.0));

    engine.handle_pointer_move(540.0, 560.0);
    assert!((engine.surface.frame.x - 100.0).abs() < 0.001);
    assert!((engine.surface.frame.y - 100.0).abs() < 0.001);
    assert!((engine.surface.frame.width - 320.0).abs() < 0.001);
    assert!((engine.surface.frame.height - 440.0).abs() < 0.001);
}

#[test]
fn test_resize_clamping_is_not_sticky() {
    let mut engine = engine_with_frame(100.0, 100.0, 280.0, 380.0);

    engine.begin_interaction(InteractionKind::Resize, PointerSample::new(500.0, 500.0));

    // Far up-left: both axes clamp
    engine.handle_pointer_move(0.0, 0.0);
    assert!((engine.surface.frame.width - MIN_WIDTH).abs() < 0.001);
    assert!((engine.surface.frame.height - MIN_HEIGHT).abs() < 0.001);

    // Clamping is not sticky: moving back re-derives from the snapshot
    engine.handle_pointer_move(540.0, 560.0);
    assert!((engine.surface.frame.width - 320.0).abs() < 0.001);
    assert!((engine.surface.frame.height - 440.0).abs() < 0.001);
}

#[test]
fn test_engine_init_is_repeatable() {
    let mut engine = OverlayEngine::new();
    engine.init(1920.0, 1080.0);

    engine.toggle_expanded();
    engine.begin_interaction(InteractionKind::DragWindow, PointerSample::new(1650.0, 640.0));

    // Re-init resets interaction state and layout
    engine.init(1280.0, 800.0);
    assert!(!engine.input.is_active());
    assert!(!engine.surface.expanded);
    assert!((engine.surface.icon_pos.x - 1200.0).abs() < 0.001);
}

#[test]
fn test_size_never_below_minimum_after_any_mutation() {
    let mut engine = engine_with_frame(100.0, 100.0, 280.0, 380.0);

    // Interleave zooms and resizes aggressively
    for step in 0..20 {
        engine.zoom(ZoomDirection::Out);
        engine.begin_interaction(InteractionKind::Resize, PointerSample::new(500.0, 500.0));
        engine.handle_pointer_move(500.0 - step as f32 * 50.0, 500.0 - step as f32 * 50.0);
        engine.handle_pointer_up();

        assert!(engine.surface.frame.width >= MIN_WIDTH - 0.001);
        assert!(engine.surface.frame.height >= MIN_HEIGHT - 0.001);
    }
}

#[test]
fn test_minimum_size_is_configurable() {
    let mut config = SurfaceConfig::for_viewport(1920.0, 1080.0);
    config.frame = Some(Rect::new(100.0, 100.0, 400.0, 400.0));
    config.min_size = Size::new(300.0, 350.0);
    let mut engine = OverlayEngine::with_config(config);
    engine.toggle_expanded();

    engine.begin_interaction(InteractionKind::Resize, PointerSample::new(500.0, 500.0));
    engine.handle_pointer_move(0.0, 0.0);

    assert!((engine.surface.frame.width - 300.0).abs() < 0.001);
    assert!((engine.surface.frame.height - 350.0).abs() < 0.001);
}
