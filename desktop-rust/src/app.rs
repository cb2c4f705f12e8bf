use std::collections::{HashMap, HashSet};
use std::sync::mpsc::{self, Receiver, Sender};

use eframe::egui::{self, Color32, RichText};
use fundbuero::capture::{today, CaptureSession, CaptureState, ImageSource};
use fundbuero::error::Result;
use fundbuero::search::{self, SearchHit, NOT_FOUND_MESSAGE};
use fundbuero::startup::App as Context;
use fundbuero_common::format_confidence;

use crate::io::{color_image, pick_upload, spawn_thumbnail};
use crate::model::{CaptureFields, SearchState, Tab, ThumbData};

pub struct DesktopApp {
    context: Context,
    tab: Tab,
    session: CaptureSession,
    fields: CaptureFields,
    preview: Option<egui::TextureHandle>,
    status: String,
    error: Option<String>,
    search: SearchState,
    thumbs: HashMap<String, egui::TextureHandle>,
    thumb_rx: Receiver<ThumbData>,
    thumb_tx: Sender<ThumbData>,
    thumb_inflight: HashSet<String>,
    thumb_failed: HashSet<String>,
}

impl DesktopApp {
    pub fn new(context: Context) -> Self {
        let (thumb_tx, thumb_rx) = mpsc::channel();
        let search = SearchState {
            selected: search::label_choices(context.labels())
                .first()
                .cloned()
                .unwrap_or_default(),
            ..Default::default()
        };
        Self {
            context,
            tab: Tab::default(),
            session: CaptureSession::new(),
            fields: CaptureFields::default(),
            preview: None,
            status: String::new(),
            error: None,
            search,
            thumbs: HashMap::new(),
            thumb_rx,
            thumb_tx,
            thumb_inflight: HashSet::new(),
            thumb_failed: HashSet::new(),
        }
    }

    fn on_source_selected(&mut self, source: ImageSource) {
        self.session.select_source(source);
        if self.session.image().is_none() {
            self.preview = None;
        }
        self.status.clear();
        self.error = None;
    }

    fn on_upload(&mut self, ctx: &egui::Context) {
        let Some(path) = pick_upload() else {
            return;
        };
        let result = self.session.acquire_file(&path, self.context.classifier.as_ref());
        self.after_acquire(ctx, result.map(|_| ()));
    }

    fn on_camera(&mut self, ctx: &egui::Context) {
        let result = self.session.capture_from_camera(
            self.context.config.camera_command.as_deref(),
            self.context.classifier.as_ref(),
        );
        self.after_acquire(ctx, result.map(|_| ()));
    }

    fn after_acquire(&mut self, ctx: &egui::Context, result: Result<()>) {
        self.status.clear();
        match result {
            Ok(()) => {
                self.error = None;
                self.preview = self.session.image().map(|image| {
                    ctx.load_texture("capture_preview", color_image(image, 480), egui::TextureOptions::default())
                });
            }
            Err(err) => self.error = Some(err.to_string()),
        }
    }

    fn on_save(&mut self) {
        let form = self.fields.to_form();

        match self.session.save(&form, &self.context.store) {
            Ok(record) => {
                self.status = format!("✅ Fund erfolgreich gespeichert! ({})", record.image);
                self.error = None;
                self.preview = None;
                self.fields = CaptureFields::default();
                // stale results would miss the new record
                self.search.outcome = None;
            }
            Err(err) => self.error = Some(err.to_string()),
        }
    }

    fn on_search(&mut self) {
        match search::search(&self.context.store, &self.search.selected) {
            Ok(outcome) => {
                self.search.outcome = Some(outcome);
                self.search.error = None;
            }
            Err(err) => {
                self.search.outcome = None;
                self.search.error = Some(err.to_string());
            }
        }
    }

    fn request_thumbnail(&mut self, path: &str) {
        if self.thumbs.contains_key(path)
            || self.thumb_inflight.contains(path)
            || self.thumb_failed.contains(path)
        {
            return;
        }
        self.thumb_inflight.insert(path.to_string());
        spawn_thumbnail(path.to_string(), self.thumb_tx.clone());
    }

    fn poll_thumbnails(&mut self, ctx: &egui::Context) {
        while let Ok(msg) = self.thumb_rx.try_recv() {
            self.thumb_inflight.remove(&msg.path);
            if msg.size[0] == 0 || msg.size[1] == 0 {
                self.thumb_failed.insert(msg.path);
                continue;
            }
            let color_image = egui::ColorImage::from_rgba_unmultiplied(msg.size, &msg.pixels);
            let texture = ctx.load_texture(&msg.path, color_image, egui::TextureOptions::default());
            self.thumbs.insert(msg.path, texture);
        }
    }

    fn render_capture(&mut self, ui: &mut egui::Ui, ctx: &egui::Context) {
        ui.heading("Gefundenen Gegenstand erfassen");
        ui.add_space(6.0);

        ui.label("Bildquelle auswählen:");
        let mut source = self.session.source();
        for option in [ImageSource::Camera, ImageSource::Upload] {
            ui.radio_value(&mut source, option, option.label());
        }
        if source != self.session.source() {
            self.on_source_selected(source);
        }

        ui.add_space(6.0);
        match self.session.source() {
            ImageSource::Camera => {
                let camera_ready = self.context.config.camera_command.is_some();
                if ui.add_enabled(camera_ready, egui::Button::new("Foto aufnehmen")).clicked() {
                    self.on_camera(ctx);
                }
                if !camera_ready {
                    ui.label(RichText::new("Keine Kamera konfiguriert").color(Color32::from_gray(150)));
                }
            }
            ImageSource::Upload => {
                if ui.button("Bild auswählen").clicked() {
                    self.on_upload(ctx);
                }
            }
        }

        if let CaptureState::Acquired { prediction, .. } = self.session.state() {
            let prediction_text = format!(
                "🤖 KI erkennt: {} ({})",
                prediction.label,
                format_confidence(prediction.confidence)
            );

            ui.add_space(8.0);
            if let Some(texture) = &self.preview {
                let size = texture.size_vec2();
                let scale = (ui.available_width() / size.x).min(1.0);
                ui.add(egui::Image::new(texture).fit_to_exact_size(size * scale));
            }

            ui.add_space(8.0);
            egui::Grid::new("capture_fields").num_columns(2).show(ui, |ui| {
                ui.label("Kurze Beschreibung");
                ui.text_edit_singleline(&mut self.fields.description);
                ui.end_row();
                ui.label("Fundort");
                ui.text_edit_singleline(&mut self.fields.location);
                ui.end_row();
                ui.label("Funddatum");
                ui.horizontal(|ui| date_picker(ui, &mut self.fields));
                ui.end_row();
            });

            ui.add_space(8.0);
            ui.label(RichText::new(prediction_text).color(Color32::from_rgb(120, 170, 255)));

            if ui.button("Fund speichern").clicked() {
                self.on_save();
            }
        }

        if !self.status.is_empty() {
            ui.label(RichText::new(&self.status).color(Color32::from_rgb(110, 200, 120)));
        }
        if let Some(err) = &self.error {
            ui.label(RichText::new(err).color(Color32::from_rgb(230, 90, 90)));
        }
    }

    fn render_search(&mut self, ui: &mut egui::Ui) {
        ui.heading("Verlorenen Gegenstand suchen");
        ui.add_space(6.0);

        let previous = self.search.selected.clone();
        egui::ComboBox::from_label("Was suchst du?")
            .selected_text(self.search.selected.as_str())
            .show_ui(ui, |ui| {
                for label in search::label_choices(self.context.labels()) {
                    let text = label.clone();
                    ui.selectable_value(&mut self.search.selected, label, text);
                }
            });
        let never_searched = self.search.outcome.is_none() && self.search.error.is_none();
        if previous != self.search.selected || never_searched {
            self.on_search();
        }

        ui.separator();
        if let Some(err) = &self.search.error {
            ui.label(RichText::new(err).color(Color32::from_rgb(230, 90, 90)));
            return;
        }

        let hits = match &self.search.outcome {
            Some(outcome) if !outcome.is_empty() => outcome.hits.clone(),
            Some(_) => {
                ui.label(NOT_FOUND_MESSAGE);
                return;
            }
            None => return,
        };

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                for (index, hit) in hits.iter().enumerate() {
                    self.render_hit(ui, index, hit);
                    ui.add_space(8.0);
                }
            });
    }

    fn render_hit(&mut self, ui: &mut egui::Ui, index: usize, hit: &SearchHit) {
        let path = hit.image_path.to_string_lossy().to_string();
        let frame = egui::Frame::none()
            .fill(Color32::from_rgb(24, 28, 40))
            .stroke(egui::Stroke::new(1.0, Color32::from_gray(40)))
            .rounding(egui::Rounding::same(10.0))
            .inner_margin(egui::Margin::same(10.0));

        frame.show(ui, |ui| {
            ui.set_min_width(ui.available_width());
            ui.horizontal(|ui| {
                let thumb_size = egui::vec2(250.0, 190.0);
                if let Some(texture) = self.thumbs.get(&path) {
                    let size = texture.size_vec2();
                    let scale = (thumb_size.x / size.x).min(thumb_size.y / size.y).min(1.0);
                    ui.add(egui::Image::new(texture).fit_to_exact_size(size * scale));
                } else {
                    let text = if self.thumb_failed.contains(&path) { "Bild fehlt" } else { "Lädt..." };
                    self.request_thumbnail(&path);
                    ui.allocate_ui_with_layout(
                        thumb_size,
                        egui::Layout::centered_and_justified(egui::Direction::LeftToRight),
                        |ui| {
                            ui.label(text);
                        },
                    );
                }

                ui.add_space(8.0);
                egui::Grid::new(format!("hit_grid_{}", index)).striped(true).show(ui, |ui| {
                    for (caption, value) in hit.detail_rows() {
                        ui.label(RichText::new(caption).strong());
                        ui.label(if value.is_empty() { "-".to_string() } else { value });
                        ui.end_row();
                    }
                });
            });
        });
    }
}

fn date_picker(ui: &mut egui::Ui, fields: &mut CaptureFields) {
    let (mut year, mut month, mut day) = fields.date_parts();
    let mut changed = false;
    changed |= ui.add(egui::DragValue::new(&mut day).clamp_range(1..=31).suffix(".")).changed();
    changed |= ui.add(egui::DragValue::new(&mut month).clamp_range(1..=12).suffix(".")).changed();
    changed |= ui.add(egui::DragValue::new(&mut year).clamp_range(2000..=2100)).changed();
    if changed {
        fields.set_date(year, month, day);
    }
    if ui.button("Heute").clicked() {
        fields.date = today();
    }
}

impl eframe::App for DesktopApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if !self.thumb_inflight.is_empty() {
            ctx.request_repaint();
        }
        self.poll_thumbnails(ctx);

        egui::TopBottomPanel::top("tabs").show(ctx, |ui| {
            ui.heading("📦 Digitales Fundbüro (Schule)");
            ui.horizontal(|ui| {
                ui.selectable_value(&mut self.tab, Tab::Capture, "📸 Fund erfassen");
                ui.selectable_value(&mut self.tab, Tab::Search, "🔍 Fund suchen");
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| match self.tab {
            Tab::Capture => {
                egui::ScrollArea::vertical().show(ui, |ui| self.render_capture(ui, ctx));
            }
            Tab::Search => self.render_search(ui),
        });
    }
}
