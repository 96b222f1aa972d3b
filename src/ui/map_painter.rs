//! Zeichnet die Lochszene mit dem egui-Painter.

use glam::DVec2;

use crate::core::{Coordinate, MapCamera};
use crate::shared::{DistanceLabel, HoleScene, RenderUnavailable, SegmentGeometry, ViewerOptions};

const BACKGROUND_COLOR: egui::Color32 = egui::Color32::from_rgb(34, 82, 44);
const LABEL_BACKGROUND: egui::Color32 = egui::Color32::from_rgba_premultiplied(0, 0, 0, 170);

/// [f32; 4]-Farbe aus den Optionen → egui-Farbe
fn color32(color: [f32; 4]) -> egui::Color32 {
    egui::Color32::from_rgba_unmultiplied(
        (color[0] * 255.0) as u8,
        (color[1] * 255.0) as u8,
        (color[2] * 255.0) as u8,
        (color[3] * 255.0) as u8,
    )
}

/// Zeichnet Hintergrund, Linien, Marker und Labels in `rect`.
pub fn paint_hole_scene(
    painter: &egui::Painter,
    rect: egui::Rect,
    scene: Result<&HoleScene, &RenderUnavailable>,
    camera: &MapCamera,
    options: &ViewerOptions,
) {
    painter.rect_filled(rect, egui::CornerRadius::ZERO, BACKGROUND_COLOR);

    let scene = match scene {
        Ok(scene) => scene,
        Err(reason) => {
            let text = match reason {
                RenderUnavailable::NoHole => "Kein Kurs geladen. Kurs öffnen …".to_string(),
                other => other.to_string(),
            };
            painter.text(
                rect.center(),
                egui::Align2::CENTER_CENTER,
                text,
                egui::FontId::proportional(20.0),
                egui::Color32::WHITE,
            );
            return;
        }
    };

    let viewport_size = [rect.width(), rect.height()];
    let to_screen = |coordinate: Coordinate| {
        let p: DVec2 = camera.coordinate_to_screen(coordinate, viewport_size);
        egui::pos2(rect.min.x + p.x as f32, rect.min.y + p.y as f32)
    };

    // Genauigkeitskreis unter allem anderen
    if let Some(fix) = scene.live_position {
        let radius = (fix.accuracy_m / camera.meters_per_pixel()) as f32;
        if radius.is_finite() && radius > options.gps_marker_radius_px {
            painter.circle_filled(
                to_screen(fix.coordinate),
                radius,
                color32(options.accuracy_color),
            );
        }
    }

    let width = options.line_width_px;
    paint_segment(painter, &scene.near, width, color32(options.near_line_color), &to_screen);
    paint_segment(painter, &scene.far, width, color32(options.far_line_color), &to_screen);

    // Tee nur zeigen, wenn es Ursprung ist oder keine Live-Position existiert
    if !scene.mode.is_gps() || scene.live_position.is_none() {
        painter.circle_filled(
            to_screen(scene.tee),
            options.point_marker_radius_px,
            color32(options.tee_color),
        );
    }
    paint_pin(painter, to_screen(scene.pin), options);

    if let Some(fix) = scene.live_position {
        let center = to_screen(fix.coordinate);
        painter.circle_filled(center, options.gps_marker_radius_px, color32(options.gps_color));
        painter.circle_stroke(
            center,
            options.gps_marker_radius_px,
            egui::Stroke::new(2.0, egui::Color32::WHITE),
        );
    }

    let aim_radius = if scene.dragging {
        options.aim_marker_radius_px * 1.3
    } else {
        options.aim_marker_radius_px
    };
    let aim = to_screen(scene.aim_target);
    painter.circle_stroke(aim, aim_radius, egui::Stroke::new(3.0, color32(options.aim_color)));
    painter.circle_filled(aim, 2.5, color32(options.aim_color));

    paint_label(painter, &scene.near_label, options.label_font_size, &to_screen);
    paint_label(painter, &scene.far_label, options.label_font_size, &to_screen);
}

fn paint_segment(
    painter: &egui::Painter,
    segment: &SegmentGeometry,
    width: f32,
    color: egui::Color32,
    to_screen: &impl Fn(Coordinate) -> egui::Pos2,
) {
    painter.line_segment(
        [to_screen(segment.drawn_start), to_screen(segment.end)],
        egui::Stroke::new(width, color),
    );
}

/// Fahne: Mast mit Wimpel über dem Lochpunkt.
fn paint_pin(painter: &egui::Painter, base: egui::Pos2, options: &ViewerOptions) {
    let color = color32(options.pin_color);
    let top = base - egui::vec2(0.0, 24.0);
    painter.line_segment([base, top], egui::Stroke::new(2.0, egui::Color32::WHITE));
    painter.add(egui::Shape::convex_polygon(
        vec![top, top + egui::vec2(14.0, 5.0), top + egui::vec2(0.0, 10.0)],
        color,
        egui::Stroke::NONE,
    ));
    painter.circle_filled(base, options.point_marker_radius_px * 0.6, color);
}

fn paint_label(
    painter: &egui::Painter,
    label: &DistanceLabel,
    font_size: f32,
    to_screen: &impl Fn(Coordinate) -> egui::Pos2,
) {
    let galley = painter.layout_no_wrap(
        label.text.clone(),
        egui::FontId::proportional(font_size),
        egui::Color32::WHITE,
    );
    let center = to_screen(label.position);
    let text_rect = egui::Align2::CENTER_CENTER.anchor_size(center, galley.size());
    painter.rect_filled(
        text_rect.expand(4.0),
        egui::CornerRadius::same(4),
        LABEL_BACKGROUND,
    );
    painter.galley(text_rect.min, galley, egui::Color32::WHITE);
}
