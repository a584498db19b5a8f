use eframe::{
    NativeOptions,
    egui::{self, ViewportBuilder},
};
use tracing::info;

use crate::display::{DisplaySink, Preview};
use crate::error::{Error, Result};

/// Owned copy of a preview, moved into the window's event loop.
struct PreviewFrame {
    title: String,
    size: [usize; 2],
    rgb: Vec<u8>,
}

/// Shows every preview side by side in one native window and blocks until the
/// window is closed or any key is pressed.
pub struct WindowDisplay {
    title: String,
}

impl WindowDisplay {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }
}

impl Default for WindowDisplay {
    fn default() -> Self {
        Self::new("Hybrid Image")
    }
}

impl DisplaySink for WindowDisplay {
    fn show(&mut self, previews: &[Preview<'_>]) -> Result<()> {
        let frames: Vec<PreviewFrame> = previews
            .iter()
            .map(|p| PreviewFrame {
                title: p.title().to_string(),
                size: [p.image.width() as usize, p.image.height() as usize],
                rgb: p.image.as_raw().clone(),
            })
            .collect();

        let options = NativeOptions {
            viewport: ViewportBuilder::default()
                .with_inner_size([1024.0, 768.0])
                .with_min_inner_size([400.0, 300.0]),
            ..Default::default()
        };

        info!("Showing {} previews; press any key to continue", frames.len());
        eframe::run_native(
            &self.title,
            options,
            Box::new(|_cc| Ok(Box::new(PreviewApp::new(frames)))),
        )
        .map_err(|e| Error::Display(e.to_string()))
    }
}

struct PreviewApp {
    frames: Vec<PreviewFrame>,
    textures: Vec<egui::TextureHandle>,
}

impl PreviewApp {
    fn new(frames: Vec<PreviewFrame>) -> Self {
        Self {
            frames,
            textures: Vec::new(),
        }
    }
}

impl eframe::App for PreviewApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.textures.len() != self.frames.len() {
            self.textures = self
                .frames
                .iter()
                .map(|f| {
                    ctx.load_texture(
                        f.title.clone(),
                        egui::ColorImage::from_rgb(f.size, &f.rgb),
                        egui::TextureOptions::NEAREST,
                    )
                })
                .collect();
        }

        let key_pressed = ctx.input(|i| {
            i.events
                .iter()
                .any(|e| matches!(e, egui::Event::Key { pressed: true, .. }))
        });
        if key_pressed {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.label(
                egui::RichText::new("Press any key or close the window to continue")
                    .color(egui::Color32::from_gray(150)),
            );
            egui::ScrollArea::both().show(ui, |ui| {
                ui.horizontal_wrapped(|ui| {
                    for (frame, texture) in self.frames.iter().zip(&self.textures) {
                        ui.vertical(|ui| {
                            ui.label(egui::RichText::new(&frame.title).strong());
                            ui.image(egui::load::SizedTexture::from_handle(texture));
                        });
                    }
                });
            });
        });
    }
}
