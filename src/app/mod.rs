use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::{SystemTime, UNIX_EPOCH};

use gtk4::prelude::*;
use gtk4::{Application, ApplicationWindow, DrawingArea};

use crate::canvas::{AppendOutcome, ShapeCanvas};
use crate::config;
use crate::error::AppResult;
use crate::geometry::{CanvasRect, Rgba};
use crate::notification;
use crate::render::{scene_commands, DrawCommand};
use crate::shape::SpawnRng;

const APP_ID: &str = "io.github.shapetap";
const WINDOW_TITLE: &str = "shapetap";
const WINDOW_WIDTH: i32 = 760;
const WINDOW_HEIGHT: i32 = 520;

pub struct App;

impl App {
    pub fn new() -> Self {
        Self
    }

    pub fn start(&mut self) -> AppResult<()> {
        let settings = config::load_settings()?;
        tracing::info!(
            max_shapes = settings.options.max_shapes,
            palette_len = settings.palette.len(),
            "resolved board settings"
        );

        let canvas = Rc::new(RefCell::new(ShapeCanvas::with_palette(
            settings.options,
            settings.palette.clone(),
            SpawnRng::from_seed(clock_seed()),
        )));

        tracing::info!("starting gtk runtime");
        let application = Application::new(Some(APP_ID), gtk4::gio::ApplicationFlags::NON_UNIQUE);

        let activate_once = Rc::new(Cell::new(false));
        let canvas_for_activate = canvas.clone();
        let restart_message = settings.restart_message.clone();
        let count_label = settings.count_label.clone();
        application.connect_activate(move |app| {
            if activate_once.replace(true) {
                tracing::debug!("ignoring duplicate gtk activate signal");
                return;
            }
            build_board_window(
                app,
                canvas_for_activate.clone(),
                restart_message.clone(),
                count_label.clone(),
            );
        });

        // Pass only argv[0] to GTK so app-specific flags do not fail GTK parsing.
        application.run_with_args(&gtk_launch_args());

        tracing::info!(shapes = canvas.borrow().count(), "gtk runtime finished");
        Ok(())
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

fn build_board_window(
    app: &Application,
    canvas: Rc<RefCell<ShapeCanvas>>,
    restart_message: String,
    count_label: String,
) {
    let window = ApplicationWindow::new(app);
    window.set_title(Some(WINDOW_TITLE));
    window.set_default_size(WINDOW_WIDTH, WINDOW_HEIGHT);

    let board_area = DrawingArea::new();
    board_area.set_hexpand(true);
    board_area.set_vexpand(true);

    {
        let canvas = canvas.clone();
        board_area.set_draw_func(move |_, context, width, height| {
            if width <= 0 || height <= 0 {
                return;
            }
            paint_background(context, width, height);
            let board = canvas.borrow();
            for command in scene_commands(board.shapes(), &count_label) {
                paint_command(context, &command);
            }
        });
    }

    let press = gtk4::GestureClick::new();
    press.set_button(gtk4::gdk::BUTTON_PRIMARY);
    {
        let canvas = canvas.clone();
        let board_area = board_area.clone();
        press.connect_pressed(move |_gesture, _n_press, x, y| {
            let outcome = canvas.borrow_mut().press(x as f32, y as f32);
            if outcome == AppendOutcome::Cleared {
                notification::send(restart_message.as_str());
            }
            board_area.queue_draw();
        });
    }
    board_area.add_controller(press);

    window.set_child(Some(&board_area));
    window.present();
}

fn gtk_launch_args() -> Vec<String> {
    std::env::args().take(1).collect()
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0x5EED, |elapsed| {
            elapsed.subsec_nanos() ^ elapsed.as_secs() as u32
        })
}

fn paint_background(context: &gtk4::cairo::Context, width: i32, height: i32) {
    context.set_source_rgba(1.0, 1.0, 1.0, 1.0);
    context.rectangle(0.0, 0.0, f64::from(width), f64::from(height));
    let _ = context.fill();
}

fn set_source_color(context: &gtk4::cairo::Context, color: Rgba) {
    let (red, green, blue, alpha) = color.to_cairo_rgba();
    context.set_source_rgba(red, green, blue, alpha);
}

fn paint_command(context: &gtk4::cairo::Context, command: &DrawCommand) {
    match command {
        DrawCommand::FillCircle {
            center,
            radius,
            color,
        } => {
            set_source_color(context, *color);
            context.arc(
                f64::from(center.x),
                f64::from(center.y),
                f64::from(*radius),
                0.0,
                std::f64::consts::TAU,
            );
            let _ = context.fill();
        }
        DrawCommand::FillRect { rect, color } => {
            set_source_color(context, *color);
            context.rectangle(
                f64::from(rect.x),
                f64::from(rect.y),
                f64::from(rect.width),
                f64::from(rect.height),
            );
            let _ = context.fill();
        }
        DrawCommand::FillRoundedRect {
            rect,
            corner_radius,
            color,
        } => {
            set_source_color(context, *color);
            append_rounded_rect_path(context, *rect, f64::from(*corner_radius));
            let _ = context.fill();
        }
        DrawCommand::Label {
            origin,
            text_size,
            color,
            text,
        } => {
            set_source_color(context, *color);
            context.select_font_face(
                "Sans",
                gtk4::cairo::FontSlant::Normal,
                gtk4::cairo::FontWeight::Bold,
            );
            context.set_font_size(f64::from(*text_size));
            context.move_to(f64::from(origin.x), f64::from(origin.y));
            let _ = context.show_text(text);
        }
    }
}

fn append_rounded_rect_path(context: &gtk4::cairo::Context, rect: CanvasRect, radius: f64) {
    let x = f64::from(rect.x);
    let y = f64::from(rect.y);
    let width = f64::from(rect.width);
    let height = f64::from(rect.height);
    if width <= 0.0 || height <= 0.0 {
        return;
    }
    let radius = radius.clamp(0.0, width.min(height) / 2.0);
    if radius <= 0.0 {
        context.rectangle(x, y, width, height);
        return;
    }

    let right = x + width;
    let bottom = y + height;
    context.new_sub_path();
    context.arc(
        right - radius,
        y + radius,
        radius,
        -std::f64::consts::FRAC_PI_2,
        0.0,
    );
    context.arc(
        right - radius,
        bottom - radius,
        radius,
        0.0,
        std::f64::consts::FRAC_PI_2,
    );
    context.arc(
        x + radius,
        bottom - radius,
        radius,
        std::f64::consts::FRAC_PI_2,
        std::f64::consts::PI,
    );
    context.arc(
        x + radius,
        y + radius,
        radius,
        std::f64::consts::PI,
        std::f64::consts::PI * 1.5,
    );
    context.close_path();
}
