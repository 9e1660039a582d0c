//! Interactive viewer for the slider-crank mechanism.
//!
//! Drag the round guide handles to move and aim the cylinder, pan with
//! WASD, zoom with the mouse wheel, toggle the guides with G.

use eframe::egui;
use slider_crank::{Config, Cylinder, DragState, Mechanism, Point, Pointer, Vec2, View, tick};

const WINDOW_WIDTH: f32 = 800.0;
const WINDOW_HEIGHT: f32 = 600.0;

const ZOOM_MAX_SPEED: f64 = 0.05;
const ZOOM_DAMPING: f64 = 0.8;
const CAMERA_DAMPING: f64 = 0.8;
const MIN_ZOOM: f64 = 0.1;

const BEARING_RADIUS: f64 = 10.0;
const THROW_WIDTH: f64 = 10.0;
const ROD_WIDTH: f64 = 10.0;
const PISTON_WIDTH: f64 = 50.0;
const PISTON_LENGTH: f64 = 30.0;

const AXES_COLOR: egui::Color32 = egui::Color32::from_black_alpha(25);
const CRANKSHAFT_COLOR: egui::Color32 = egui::Color32::from_rgb(50, 50, 200);
const ROD_COLOR: egui::Color32 = egui::Color32::from_rgb(200, 50, 50);
const PISTON_COLOR: egui::Color32 = egui::Color32::from_rgb(50, 200, 50);
const GUIDE_COLOR: egui::Color32 = egui::Color32::from_rgb(150, 150, 175);
const GUIDE_ACTIVE_COLOR: egui::Color32 = egui::Color32::from_rgb(100, 100, 255);

fn main() -> eframe::Result {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([WINDOW_WIDTH, WINDOW_HEIGHT])
            .with_resizable(false),
        ..Default::default()
    };
    eframe::run_native(
        "Piston",
        options,
        Box::new(|_cc| Ok(Box::new(Viewer::default()))),
    )
}

struct Viewer {
    mechanism: Mechanism,
    drag: DragState,
    view: View,
    config: Config,
    show_guides: bool,
    /// Smoothed zoom: the wheel sets a speed which then decays.
    zoom_speed: f64,
    /// Smoothed pan: WASD accelerates, damping bleeds it off.
    camera_speed: Vec2,
}

impl Default for Viewer {
    fn default() -> Self {
        Self {
            mechanism: Mechanism::default(),
            drag: DragState::Idle,
            view: View::new(f64::from(WINDOW_WIDTH), f64::from(WINDOW_HEIGHT)),
            config: Config::default(),
            show_guides: true,
            zoom_speed: 0.0,
            camera_speed: Vec2::new(0.0, 0.0),
        }
    }
}

/// Keyboard, mouse and clock state read from egui once per frame.
struct Input {
    elapsed: f64,
    pointer: Option<Point>,
    pressed: bool,
    scroll: f64,
    pan_up: bool,
    pan_down: bool,
    pan_left: bool,
    pan_right: bool,
    toggle_guides: bool,
}

fn is_zero(a: f64) -> bool {
    a.abs() < 1e-3
}

impl Viewer {
    /// Smoothed WASD pan and wheel zoom, with the zoom clamped so the
    /// camera can never scale through zero and flip its coordinates.
    fn control_camera(&mut self, input: &Input, delta: f64) {
        self.zoom_speed *= ZOOM_DAMPING * delta;
        if is_zero(self.zoom_speed) {
            self.zoom_speed = 0.0;
        }
        self.camera_speed = self.camera_speed * (CAMERA_DAMPING * delta);
        if is_zero(self.camera_speed.magnitude()) {
            self.camera_speed = Vec2::new(0.0, 0.0);
        }

        let move_speed = 1.0 / self.view.to_screen_length(1.0);
        if input.pan_up {
            self.camera_speed = self.camera_speed + Vec2::new(0.0, -move_speed);
        }
        if input.pan_down {
            self.camera_speed = self.camera_speed + Vec2::new(0.0, move_speed);
        }
        if input.pan_left {
            self.camera_speed = self.camera_speed + Vec2::new(move_speed, 0.0);
        }
        if input.pan_right {
            self.camera_speed = self.camera_speed + Vec2::new(-move_speed, 0.0);
        }
        if !is_zero(input.scroll) {
            self.zoom_speed = input.scroll.signum() * ZOOM_MAX_SPEED;
        }

        if !is_zero(self.camera_speed.magnitude()) {
            self.view = self.view.panned(self.camera_speed * delta);
        }
        let zooming_out_too_far =
            self.zoom_speed < 0.0 && self.view.to_screen_length(1.0) < MIN_ZOOM;
        if !is_zero(self.zoom_speed) && !zooming_out_too_far {
            self.view = self.view.zoomed(1.0 + self.zoom_speed * delta);
        }
    }
}

impl eframe::App for Viewer {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let input = ctx.input(|i| Input {
            elapsed: f64::from(i.unstable_dt),
            pointer: i
                .pointer
                .hover_pos()
                .map(|p| Point::from((f64::from(p.x), f64::from(p.y)))),
            pressed: i.pointer.primary_down(),
            scroll: f64::from(i.raw_scroll_delta.y),
            pan_up: i.key_down(egui::Key::W),
            pan_down: i.key_down(egui::Key::S),
            pan_left: i.key_down(egui::Key::A),
            pan_right: i.key_down(egui::Key::D),
            toggle_guides: i.key_pressed(egui::Key::G),
        });
        let delta = input.elapsed / self.config.reference_frame_seconds;

        if input.toggle_guides {
            self.show_guides = !self.show_guides;
        }

        // The pointer only interacts with the guides while they're shown.
        let pointer = Pointer {
            position: input
                .pointer
                .map(|p| self.view.to_world(p))
                .unwrap_or_default(),
            pressed: input.pressed && input.pointer.is_some() && self.show_guides,
        };

        let frame = tick(
            self.mechanism,
            pointer,
            self.drag,
            input.elapsed,
            &self.config,
        );
        self.mechanism = frame.mechanism;
        self.drag = frame.drag;

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE.fill(egui::Color32::WHITE))
            .show(ctx, |ui| {
                let painter = ui.painter();
                draw_coordinates(painter, &self.view);
                draw_crankshaft(painter, &self.view, frame.solution.crankpin);
                if let Ok(piston) = frame.solution.piston {
                    draw_connecting_rod(painter, &self.view, frame.solution.crankpin, piston);
                    draw_piston(painter, &self.view, &self.mechanism.cylinder, piston);
                }
                if self.show_guides {
                    draw_cylinder_guides(
                        painter,
                        &self.view,
                        &self.mechanism.cylinder,
                        self.drag,
                        self.config.guide_radius,
                    );
                }
            });

        self.control_camera(&input, delta);

        // Keep animating even without input events.
        ctx.request_repaint();
    }
}

fn to_pos(view: &View, p: Point) -> egui::Pos2 {
    let p = view.to_screen(p);
    egui::pos2(p.x as f32, p.y as f32)
}

fn draw_line(painter: &egui::Painter, view: &View, from: Point, to: Point, color: egui::Color32) {
    painter.line_segment([to_pos(view, from), to_pos(view, to)], (1.0, color));
}

fn draw_circle(
    painter: &egui::Painter,
    view: &View,
    center: Point,
    radius: f64,
    color: egui::Color32,
) {
    painter.circle_filled(
        to_pos(view, center),
        view.to_screen_length(radius) as f32,
        color,
    );
}

/// A filled rectangle of the given width spanning `start` to `end`,
/// drawn as a convex quad so it can lie at any angle.
fn draw_quad(
    painter: &egui::Painter,
    view: &View,
    start: Point,
    end: Point,
    width: f64,
    color: egui::Color32,
) {
    let Some(normal) = (end - start).perpendicular().normalized() else {
        return;
    };
    let half = normal * (width / 2.0);
    let corners = vec![
        to_pos(view, start + half),
        to_pos(view, start - half),
        to_pos(view, end - half),
        to_pos(view, end + half),
    ];
    painter.add(egui::Shape::convex_polygon(
        corners,
        color,
        egui::Stroke::NONE,
    ));
}

/// Faint world axes with tick marks every 10 units.
fn draw_coordinates(painter: &egui::Painter, view: &View) {
    let size = view.to_world_length(1000.0);
    draw_line(
        painter,
        view,
        Point { x: -size, y: 0.0 },
        Point { x: size, y: 0.0 },
        AXES_COLOR,
    );
    draw_line(
        painter,
        view,
        Point { x: 0.0, y: -size },
        Point { x: 0.0, y: size },
        AXES_COLOR,
    );

    for i in (-1000..1000).step_by(10) {
        let i = f64::from(i);
        draw_line(
            painter,
            view,
            Point { x: i, y: -5.0 },
            Point { x: i, y: 5.0 },
            AXES_COLOR,
        );
        draw_line(
            painter,
            view,
            Point { x: -5.0, y: i },
            Point { x: 5.0, y: i },
            AXES_COLOR,
        );
    }
}

/// The crank throw: a bearing at the shaft center, a bearing at the
/// crankpin, and the throw between them.
fn draw_crankshaft(painter: &egui::Painter, view: &View, crankpin: Point) {
    let center = Point { x: 0.0, y: 0.0 };
    draw_circle(painter, view, center, BEARING_RADIUS, CRANKSHAFT_COLOR);
    draw_quad(painter, view, center, crankpin, THROW_WIDTH, CRANKSHAFT_COLOR);
    draw_circle(painter, view, crankpin, BEARING_RADIUS, CRANKSHAFT_COLOR);
}

fn draw_connecting_rod(painter: &egui::Painter, view: &View, crankpin: Point, piston: Point) {
    draw_circle(painter, view, crankpin, BEARING_RADIUS, ROD_COLOR);
    draw_quad(painter, view, crankpin, piston, ROD_WIDTH, ROD_COLOR);
    draw_circle(painter, view, piston, BEARING_RADIUS, ROD_COLOR);
}

/// The piston body, extruded from the piston pin along the cylinder axis.
fn draw_piston(painter: &egui::Painter, view: &View, cylinder: &Cylinder, piston: Point) {
    let Some(axis) = cylinder.direction.normalized() else {
        return;
    };
    let end = piston + axis * PISTON_LENGTH;
    draw_quad(painter, view, piston, end, PISTON_WIDTH, PISTON_COLOR);
}

/// The cylinder axis line and its two drag handles: one ring on the
/// origin, one on the tip of the direction vector.
fn draw_cylinder_guides(
    painter: &egui::Painter,
    view: &View,
    cylinder: &Cylinder,
    drag: DragState,
    guide_radius: f64,
) {
    let color = match drag {
        DragState::Idle => GUIDE_COLOR,
        DragState::Origin | DragState::Direction => GUIDE_ACTIVE_COLOR,
    };

    let reach = cylinder.direction * view.to_world_length(1000.0);
    draw_line(
        painter,
        view,
        cylinder.origin - reach,
        cylinder.origin + reach,
        color,
    );

    for handle in [cylinder.origin, cylinder.direction_handle()] {
        draw_circle(painter, view, handle, guide_radius, color);
        draw_circle(painter, view, handle, guide_radius * 0.8, egui::Color32::WHITE);
    }
}
