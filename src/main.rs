mod constants;
mod editor;
mod model;
mod skeleton_renderer;

use eframe::egui;
use egui::{Frame, Sense, Vec2, ViewportCommand};

use constants::{CANVAS_COLOR, CANVAS_HEIGHT, CANVAS_WIDTH, WINDOW_TITLE};
use editor::common::{EditorEvent, LoopControl};
use editor::skeleton_editor::SkeletonEditor;
use skeleton_renderer::SkeletonRenderer;

#[derive(Default)]
pub struct PoseCalibratorApp {
    editor: SkeletonEditor,
    renderer: SkeletonRenderer,
}

impl eframe::App for PoseCalibratorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default()
            .frame(Frame::none().fill(CANVAS_COLOR))
            .show(ctx, |ui| {
                let (response, painter) = ui.allocate_painter(
                    Vec2::new(CANVAS_WIDTH, CANVAS_HEIGHT),
                    Sense::click(),
                );
                let canvas = response.rect;

                // Input is applied before drawing so a click shows up in this frame.
                let events: Vec<EditorEvent> = ctx.input(|i| {
                    i.events
                        .iter()
                        .filter_map(|event| EditorEvent::from_egui(event, canvas.min))
                        .collect()
                });
                let control = self.editor.apply_all(events);

                let items = self
                    .renderer
                    .render(&self.editor.skeleton, self.editor.selected_joint());
                self.renderer.paint(&painter, canvas, &items);

                if control == LoopControl::Stop {
                    log::info!("Escape pressed, closing");
                    ctx.send_viewport_cmd(ViewportCommand::Close);
                }
            });
    }
}

fn main() -> Result<(), eframe::Error> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(WINDOW_TITLE)
            .with_inner_size([CANVAS_WIDTH, CANVAS_HEIGHT])
            .with_resizable(false),
        ..Default::default()
    };

    log::info!("Press 'c' to clear the selection, Esc to quit");
    eframe::run_native(
        WINDOW_TITLE,
        options,
        Box::new(|_cc| Box::new(PoseCalibratorApp::default())),
    )
    .map_err(|err| {
        log::error!("Could not open the {WINDOW_TITLE} window: {err}");
        err
    })
}
