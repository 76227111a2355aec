use ascii_sketch::{
    Conversion, ConversionConfig, PaletteStyle, ResizeMode, SampleFilter, convert, decode_image,
    open_image,
};
use eframe::egui;
use image::RgbaImage;
use std::time::Instant;

/// Main application state for the ASCII Sketch GUI
pub struct SketchApp {
    /// Input image (decoded)
    input_image: Option<RgbaImage>,
    /// Name shown above the preview
    input_name: String,
    /// Result of the last conversion
    output: Option<Conversion>,
    /// Configuration parameters
    config: ConversionConfig,

    /// Texture handle for input image display
    input_texture: Option<egui::TextureHandle>,

    /// Whether to automatically reconvert when parameters change
    auto_process: bool,
    /// Flag indicating parameters have changed and reconversion is needed
    needs_reprocess: bool,

    /// Last conversion time in milliseconds
    last_process_time_ms: f64,
    /// Message to display (if any)
    error_message: Option<String>,
}

impl Default for SketchApp {
    fn default() -> Self {
        Self {
            input_image: None,
            input_name: String::new(),
            output: None,
            config: ConversionConfig::default(),
            input_texture: None,
            auto_process: true,
            needs_reprocess: false,
            last_process_time_ms: 0.0,
            error_message: None,
        }
    }
}

impl SketchApp {
    /// Create a new application
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        Self::default()
    }

    /// Load an image from file path
    pub fn load_image(&mut self, path: &std::path::Path) {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        let decoded = open_image(path);
        self.set_input(name, decoded);
    }

    /// Load an image from dropped bytes (web and some platforms give no path)
    pub fn load_image_bytes(&mut self, name: &str, bytes: &[u8]) {
        let decoded = decode_image(bytes);
        self.set_input(name.to_string(), decoded);
    }

    fn set_input(&mut self, name: String, decoded: ascii_sketch::Result<RgbaImage>) {
        match decoded {
            Ok(rgba) => {
                log::info!("loaded {} ({}x{})", name, rgba.width(), rgba.height());
                self.input_image = Some(rgba);
                self.input_name = name;
                self.input_texture = None; // Clear old texture
                self.output = None;
                self.needs_reprocess = true;
                self.error_message = None;
            }
            Err(e) => {
                log::warn!("failed to load {}: {}", name, e);
                self.error_message = Some(format!("Failed to load {}: {}", name, e));
            }
        }
    }

    /// Save the output text to file
    pub fn save_output(&self, path: &std::path::Path) -> Result<(), String> {
        match &self.output {
            Some(conversion) => std::fs::write(path, &conversion.text)
                .map_err(|e| format!("Failed to save: {}", e)),
            None => Err("No output to save".to_string()),
        }
    }

    /// Convert the input image with current configuration
    fn process(&mut self) {
        if let Some(ref input) = self.input_image {
            let start = Instant::now();

            match convert(input, &self.config) {
                Ok(conversion) => {
                    self.last_process_time_ms = start.elapsed().as_secs_f64() * 1000.0;
                    self.output = Some(conversion);
                    self.needs_reprocess = false;
                    self.error_message = None;
                }
                Err(e) => {
                    self.needs_reprocess = false;
                    self.error_message = Some(format!("Conversion failed: {}", e));
                }
            }
        }
    }

    /// Render the control panel UI
    fn render_controls(&mut self, ui: &mut egui::Ui) -> bool {
        let mut changed = false;

        ui.heading("Controls");
        ui.separator();

        // Output size
        ui.collapsing("Output Size", |ui| {
            changed |= ui
                .add(egui::Slider::new(&mut self.config.output_width, 1..=300).text("Width"))
                .on_hover_text("Characters per line")
                .changed();

            changed |= ui
                .add(egui::Slider::new(&mut self.config.output_height, 1..=200).text("Height"))
                .on_hover_text("Number of lines")
                .changed();

            let mut mode = self.config.resize_mode;
            egui::ComboBox::from_label("Resize")
                .selected_text(mode.to_string())
                .show_ui(ui, |ui| {
                    ui.selectable_value(&mut mode, ResizeMode::Stretch, "stretch");
                    ui.selectable_value(&mut mode, ResizeMode::Crop, "crop");
                });
            if mode != self.config.resize_mode {
                self.config.resize_mode = mode;
                changed = true;
            }

            let mut filter = self.config.filter;
            egui::ComboBox::from_label("Filter")
                .selected_text(filter.to_string())
                .show_ui(ui, |ui| {
                    ui.selectable_value(&mut filter, SampleFilter::Nearest, "nearest");
                    ui.selectable_value(&mut filter, SampleFilter::Bilinear, "bilinear");
                });
            if filter != self.config.filter {
                self.config.filter = filter;
                changed = true;
            }
        });

        ui.add_space(8.0);

        // Palette settings
        ui.collapsing("Palette", |ui| {
            let mut style = self.config.palette_style;
            egui::ComboBox::from_label("Style")
                .selected_text(style.to_string())
                .show_ui(ui, |ui| {
                    for option in PaletteStyle::ALL {
                        ui.selectable_value(&mut style, option, option.name());
                    }
                });
            if style != self.config.palette_style {
                self.config.palette_style = style;
                changed = true;
            }
            ui.monospace(style.base_chars());

            changed |= ui
                .add(egui::Slider::new(&mut self.config.sensitivity, 0.0..=0.99).text("Sensitivity"))
                .on_hover_text("Raises the brightness floor, favouring lighter characters")
                .changed();

            changed |= ui
                .checkbox(&mut self.config.inverse, "Inverse")
                .on_hover_text("Reverse the palette order")
                .changed();
        });

        ui.add_space(16.0);
        ui.separator();

        // Auto-process toggle
        ui.checkbox(&mut self.auto_process, "Auto-convert")
            .on_hover_text("Automatically reconvert when parameters change");

        ui.add_enabled_ui(self.input_image.is_some(), |ui| {
            if ui.button("Convert").clicked() {
                self.process();
            }
        });

        // Show processing time
        if self.last_process_time_ms > 0.0 {
            ui.label(format!("Last conversion: {:.1} ms", self.last_process_time_ms));
        }

        changed
    }

    /// Pick up files dropped onto the window
    fn handle_dropped_files(&mut self, ctx: &egui::Context) {
        let dropped = ctx.input(|i| i.raw.dropped_files.clone());
        let Some(file) = dropped.into_iter().next() else {
            return;
        };

        if let Some(path) = file.path {
            self.load_image(&path);
        } else if let Some(bytes) = file.bytes {
            self.load_image_bytes(&file.name, &bytes);
        } else {
            self.error_message = Some(format!("Dropped file {} has no readable data", file.name));
        }
    }

    /// Show the input image preview
    fn display_input(&mut self, ui: &mut egui::Ui) {
        ui.vertical(|ui| {
            ui.heading("Original");

            let Some(img) = self.input_image.as_ref() else {
                ui.label("Drop an image here or use File > Open Image...");
                return;
            };

            // Update texture if needed
            let texture = self.input_texture.get_or_insert_with(|| {
                let size = [img.width() as usize, img.height() as usize];
                let color_image = egui::ColorImage::from_rgba_unmultiplied(size, img.as_raw());
                ui.ctx()
                    .load_texture("input", color_image, egui::TextureOptions::default())
            });

            let size = texture.size_vec2();
            let max_size = ui.available_size();
            let scale = (max_size.x / size.x).min(max_size.y / size.y).min(4.0);
            ui.image((texture.id(), size * scale));
            ui.label(format!("{} ({}x{})", self.input_name, img.width(), img.height()));
        });
    }

    /// Show the ASCII result
    fn display_output(&self, ui: &mut egui::Ui) {
        ui.vertical(|ui| {
            ui.horizontal(|ui| {
                ui.heading("ASCII Output");
                if let Some(ref conversion) = self.output
                    && ui.button("Copy").clicked()
                {
                    ui.ctx().copy_text(conversion.text.clone());
                }
            });

            match self.output {
                Some(ref conversion) => {
                    let (w, h) = conversion.characters.dimensions();
                    ui.label(format!("{}x{} characters", w, h));
                    egui::ScrollArea::both().show(ui, |ui| {
                        ui.add(
                            egui::Label::new(egui::RichText::new(&conversion.text).monospace())
                                .extend(),
                        );
                    });
                }
                None => {
                    ui.label("No output yet");
                }
            }
        });
    }
}

impl eframe::App for SketchApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_dropped_files(ctx);

        // Top menu bar
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::MenuBar::new().ui(ui, |ui| {
                ui.menu_button("File", |ui| {
                    if ui.button("Open Image...").clicked() {
                        if let Some(path) = rfd::FileDialog::new()
                            .add_filter("Images", &["png", "jpg", "jpeg", "bmp", "gif", "webp"])
                            .pick_file()
                        {
                            self.load_image(&path);
                        }
                        ui.close();
                    }

                    if ui.button("Save Text...").clicked() {
                        if let Some(path) = rfd::FileDialog::new()
                            .add_filter("Text", &["txt"])
                            .save_file()
                            && let Err(e) = self.save_output(&path)
                        {
                            self.error_message = Some(e);
                        }
                        ui.close();
                    }

                    ui.separator();

                    if ui.button("Quit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });
            });
        });

        // Left panel: Controls
        egui::SidePanel::left("control_panel")
            .resizable(true)
            .default_width(250.0)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    if self.render_controls(ui) {
                        self.needs_reprocess = true;
                    }
                });
            });

        // Central panel: preview and text
        egui::CentralPanel::default().show(ctx, |ui| {
            if ctx.input(|i| !i.raw.hovered_files.is_empty()) {
                ui.heading("Release to load image");
                ui.separator();
            }

            if let Some(ref msg) = self.error_message {
                ui.colored_label(egui::Color32::RED, msg);
                if ui.button("Clear Error").clicked() {
                    self.error_message = None;
                }
                ui.separator();
            }

            if self.auto_process && self.needs_reprocess && self.input_image.is_some() {
                self.process();
            }

            ui.horizontal(|ui| {
                let half_width = ui.available_width() / 2.0 - 8.0;

                ui.allocate_ui_with_layout(
                    egui::vec2(half_width, ui.available_height()),
                    egui::Layout::top_down(egui::Align::Center),
                    |ui| self.display_input(ui),
                );

                ui.separator();

                ui.allocate_ui_with_layout(
                    egui::vec2(half_width, ui.available_height()),
                    egui::Layout::top_down(egui::Align::Min),
                    |ui| self.display_output(ui),
                );
            });
        });
    }
}
