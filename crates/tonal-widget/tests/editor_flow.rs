use glam::Vec2;
use tonal_core::{Channel, ControlPoint, CurveSet, Preset, decode_curves};
use tonal_frontend_core::{DrawCommand, EventReply, PointerEvent};
use tonal_widget::theme;
use tonal_widget::{
    CurvesWidget, DragState, EditorConfig, FrameLayout, HostFrame, HostNotification, NodeWidget,
    WidgetKind, WidgetRegistry, header_offset_for,
};

const EPSILON: f32 = 1e-4;

fn frame() -> HostFrame {
    HostFrame::new(420.0, 640.0, header_offset_for(&[20.0, 20.0, 20.0]))
}

fn widget() -> CurvesWidget {
    let mut widget = CurvesWidget::new(EditorConfig::default());
    widget.on_create(None);
    widget
}

/// Pointer event at a normalized curve position.
fn at(nx: f32, ny: f32) -> PointerEvent {
    let s = FrameLayout::compute(&frame()).curve.to_screen(Vec2::new(nx, ny));
    PointerEvent::at(s.x, s.y)
}

fn click(widget: &mut CurvesWidget, event: PointerEvent) -> EventReply {
    let frame = frame();
    let reply = widget.on_pointer_down(&frame, event);
    widget.on_pointer_up(&frame, event);
    reply
}

fn backing(widget: &CurvesWidget) -> CurveSet {
    decode_curves(widget.backing_value()).expect("backing value should always decode")
}

#[test]
fn click_adds_point_and_drags_it() {
    let mut w = widget();
    let f = frame();

    assert_eq!(w.on_pointer_down(&f, at(0.4, 0.6)), EventReply::REDRAW);
    assert_eq!(w.state().drag, DragState::Dragging(1));
    let added = backing(&w).points(Channel::Rgb)[1];
    assert!((added.x - 0.4).abs() < EPSILON && (added.y - 0.6).abs() < EPSILON);

    assert_eq!(w.on_pointer_move(&f, at(0.3, 0.7)), EventReply::REDRAW);
    let moved = backing(&w).points(Channel::Rgb)[1];
    assert!((moved.x - 0.3).abs() < EPSILON && (moved.y - 0.7).abs() < EPSILON);

    assert_eq!(w.on_pointer_up(&f, at(0.3, 0.7)), EventReply::CONSUMED);
    assert_eq!(w.state().drag, DragState::Idle);
    assert_eq!(w.on_pointer_move(&f, at(0.9, 0.1)), EventReply::IGNORED);
}

#[test]
fn click_within_hit_radius_does_not_add() {
    let mut w = widget();
    click(&mut w, at(0.5, 0.5));
    assert_eq!(w.state().model.points(Channel::Rgb).len(), 3);

    let mut near = at(0.5, 0.5);
    near.position += Vec2::new(6.0, -5.0);
    click(&mut w, near);
    assert_eq!(w.state().model.points(Channel::Rgb).len(), 3);
}

#[test]
fn delete_gesture_respects_minimum() {
    let mut w = widget();
    click(&mut w, at(0.0, 0.0).with_shift());
    click(&mut w, at(1.0, 1.0).with_shift());
    assert_eq!(
        w.state().model.points(Channel::Rgb),
        &[ControlPoint::new(0.0, 0.0), ControlPoint::new(1.0, 1.0)]
    );

    click(&mut w, at(0.5, 0.3));
    click(&mut w, at(0.5, 0.3).with_shift());
    assert_eq!(w.state().model.points(Channel::Rgb).len(), 2);
}

#[test]
fn drag_across_neighbors_keeps_tracking() {
    let mut w = widget();
    click(&mut w, at(0.3, 0.3));
    click(&mut w, at(0.6, 0.6));

    let f = frame();
    w.on_pointer_down(&f, at(0.3, 0.3));
    assert_eq!(w.state().drag, DragState::Dragging(1));
    for x in [0.4, 0.5, 0.65, 0.8] {
        w.on_pointer_move(&f, at(x, 0.2));
        let DragState::Dragging(index) = w.state().drag else {
            panic!("drag ended early");
        };
        let p = w.state().model.points(Channel::Rgb)[index];
        assert!((p.x - x).abs() < EPSILON && (p.y - 0.2).abs() < EPSILON);
    }
    assert_eq!(w.state().drag, DragState::Dragging(2));
    w.on_pointer_up(&f, at(0.8, 0.2));

    let xs: Vec<f32> = w.state().model.points(Channel::Rgb).iter().map(|p| p.x).collect();
    assert!(xs.windows(2).all(|pair| pair[0] <= pair[1]));
}

#[test]
fn channel_buttons_route_edits() {
    let mut w = widget();
    let layout = FrameLayout::compute(&frame());
    let blue = layout.channel_button(Channel::Blue).rect.center();
    click(&mut w, PointerEvent::at(blue.x, blue.y));
    assert_eq!(w.state().active_channel, Channel::Blue);

    click(&mut w, at(0.5, 0.7));
    let curves = backing(&w);
    assert_eq!(curves.points(Channel::Blue).len(), 3);
    assert!(!curves.is_edited(Channel::Rgb));
}

#[test]
fn reset_all_notifies_preset_selector() {
    let mut w = widget();
    w.on_preset_selected("golden_hour");
    assert_eq!(w.state().selected_preset, Preset::GoldenHour);
    assert!(w.drain_notifications().is_empty());

    let layout = FrameLayout::compute(&frame());
    let reset = layout.action_buttons[2].rect.center();
    assert_eq!(click(&mut w, PointerEvent::at(reset.x, reset.y)), EventReply::REDRAW);

    assert!(backing(&w).is_identity());
    assert_eq!(
        w.drain_notifications(),
        vec![HostNotification::PresetSelectionChanged(Preset::None)]
    );
    assert!(w.drain_notifications().is_empty());
}

#[test]
fn serialize_restores_points_and_channel() {
    let mut w = widget();
    w.on_preset_selected("cross_process");
    let layout = FrameLayout::compute(&frame());
    let green = layout.channel_button(Channel::Green).rect.center();
    click(&mut w, PointerEvent::at(green.x, green.y));
    click(&mut w, at(0.2, 0.35));

    let saved = w.on_serialize().expect("snapshot should encode");

    let mut restored = widget();
    restored.on_deserialize(&saved).expect("snapshot should decode");
    assert_eq!(restored.state().active_channel, Channel::Green);
    assert_eq!(restored.state().model.curves(), w.state().model.curves());
    assert_eq!(restored.backing_value(), w.backing_value());
}

#[test]
fn registry_builds_curves_widget() {
    let registry = WidgetRegistry::builtin();
    assert_eq!(registry.resolve("CurvesAdjustPro"), Some(WidgetKind::Curves));

    let mut node = registry
        .create("CurvesAdjustPro", &EditorConfig::default())
        .expect("curves widget should be registered");
    node.on_create(Some(r#"{"rgb":[[0,0],[0.5,0.7],[1,1]]}"#));
    let curves = decode_curves(node.backing_value()).expect("backing value should decode");
    assert_eq!(curves.points(Channel::Rgb).len(), 3);
    assert!(!curves.is_edited(Channel::Red));
}

#[test]
fn renderer_marks_active_curve_and_edited_channels() {
    let mut w = widget();
    w.on_preset_selected("warm_tones");
    let list = w.on_draw(&frame());

    let markers = list
        .commands()
        .iter()
        .filter(|c| matches!(c, DrawCommand::Circle { radius, .. } if *radius == theme::MARKER_RADIUS))
        .count();
    assert_eq!(markers, w.state().model.points(Channel::Rgb).len());

    let badges: Vec<Vec2> = list
        .commands()
        .iter()
        .filter_map(|c| match c {
            DrawCommand::Circle { center, color, .. } if *color == theme::BADGE => Some(*center),
            _ => None,
        })
        .collect();
    let layout = FrameLayout::compute(&frame());
    let edited: Vec<Channel> = Channel::ALL
        .into_iter()
        .filter(|c| !c.is_combined() && w.state().model.curves().is_edited(*c))
        .collect();
    assert_eq!(badges.len(), edited.len());
    for channel in edited {
        let rect = layout.channel_button(channel).rect;
        assert!(badges.iter().any(|b| rect.contains(*b)));
    }
}
