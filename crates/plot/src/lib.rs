use batpint_sim::Figure;
use eframe::egui;
use egui_plot::{Legend, Line, Plot, PlotPoint};

/// Vertical space reserved for each figure's heading, in points.
const HEADING_HEIGHT: f32 = 28.0;

/// Smallest height a plot is given, however many figures share the window.
const MIN_PLOT_HEIGHT: f32 = 120.0;

/// A runnable egui application showing figures stacked in one window.
#[derive(Default)]
pub struct PlotApp {
    figures: Vec<Panel>,
}

struct Panel {
    title: String,
    x_label: String,
    y_label: String,
    lines: Vec<(String, Vec<PlotPoint>)>,
}

impl PlotApp {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn add_figure(mut self, figure: &Figure) -> Self {
        self.figures.push(Panel {
            title: figure.title.clone(),
            x_label: figure.x_label.clone(),
            y_label: figure.y_label.clone(),
            lines: figure
                .series
                .iter()
                .map(|series| {
                    let points = series.points.iter().copied().map(Into::into).collect();
                    (series.name.clone(), points)
                })
                .collect(),
        });

        self
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.figures.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.figures.is_empty()
    }

    /// Opens the window and blocks until it is closed.
    #[allow(clippy::missing_errors_doc)]
    pub fn run(self, title: &str) -> Result<(), eframe::Error> {
        eframe::run_native(
            title,
            eframe::NativeOptions::default(),
            Box::new(|_cc| Ok(Box::new(self))),
        )
    }
}

impl eframe::App for PlotApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            let height = plot_height(ui.available_height(), self.figures.len());

            for panel in &self.figures {
                ui.heading(panel.title.as_str());
                Plot::new(&panel.title)
                    .height(height)
                    .x_axis_label(panel.x_label.as_str())
                    .y_axis_label(panel.y_label.as_str())
                    .show_grid(true)
                    .legend(Legend::default())
                    .show(ui, |plot_ui| {
                        for (name, points) in &panel.lines {
                            plot_ui.line(Line::new(points.as_slice()).name(name));
                        }
                    });
            }
        });
    }
}

/// Shows `figures` in one window titled `title`, blocking until it is closed.
#[allow(clippy::missing_errors_doc)]
pub fn show(figures: &[Figure], title: &str) -> Result<(), eframe::Error> {
    figures
        .iter()
        .fold(PlotApp::new(), PlotApp::add_figure)
        .run(title)
}

/// Splits the available height evenly between `count` plots.
fn plot_height(available: f32, count: usize) -> f32 {
    if count == 0 {
        return available;
    }
    #[allow(clippy::cast_precision_loss)]
    let share = available / count as f32 - HEADING_HEIGHT;
    share.max(MIN_PLOT_HEIGHT)
}
