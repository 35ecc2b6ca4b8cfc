//! The `pixel` backend: a small software rasterizer.
//!
//! Executes the full statement vocabulary against an in-memory figure and
//! captures it with the `image` crate. Recipe series types (`step`, `area`)
//! are drawn by composing the native primitives.

use std::collections::BTreeMap;
use std::fs::File;
use std::path::Path;

use image::codecs::gif::{GifEncoder, Repeat};
use image::{Delay, Frame, ImageFormat, Rgba, RgbaImage};
use plotdoc_catalog::Node;
use rand::rngs::StdRng;

use crate::backend::{Backend, BackendError, Support};
use crate::exec::{Env, eval_data, series_kind, split_args};

const WIDTH: u32 = 400;
const HEIGHT: u32 = 300;
const MARGIN: u32 = 20;

const PALETTE: [[u8; 4]; 5] = [
    [31, 119, 180, 255],
    [214, 39, 40, 255],
    [44, 160, 44, 255],
    [255, 127, 14, 255],
    [148, 103, 189, 255],
];

const NATIVE_SERIES: &[&str] = &["bar", "heatmap", "histogram", "line", "scatter"];
const RECIPE_SERIES: &[&str] = &["area", "step"];

#[derive(Debug, Clone)]
struct Series {
    kind: String,
    data: Vec<f64>,
    attrs: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Default)]
struct Figure {
    title: String,
    xlabel: String,
    ylabel: String,
    series: Vec<Series>,
}

/// Software raster backend.
#[derive(Debug)]
pub struct PixelBackend {
    display: bool,
    env: Env,
    figure: Figure,
    frames: Vec<RgbaImage>,
}

impl PixelBackend {
    #[must_use]
    pub fn new() -> Self {
        Self {
            display: false,
            env: Env::default(),
            figure: Figure::default(),
            frames: Vec::new(),
        }
    }

    fn call(&mut self, name: &str, args: &[Node], rng: &mut StdRng) -> Result<(), BackendError> {
        match name {
            "frame" => {
                let frame = self.render();
                self.frames.push(frame);
                Ok(())
            }
            "title" | "xlabel" | "ylabel" => {
                let text = match args.first() {
                    Some(Node::Str(text)) => text.clone(),
                    _ => return Err(BackendError::Unsupported(format!("{name} without text"))),
                };
                match name {
                    "title" => self.figure.title = text,
                    "xlabel" => self.figure.xlabel = text,
                    _ => self.figure.ylabel = text,
                }
                Ok(())
            }
            "plot" | "scatter" | "bar" | "histogram" | "heatmap" => {
                self.add_series(name, args, rng)
            }
            other => Err(BackendError::Unsupported(format!("call to '{other}'"))),
        }
    }

    fn add_series(
        &mut self,
        call_name: &str,
        args: &[Node],
        rng: &mut StdRng,
    ) -> Result<(), BackendError> {
        let parts = split_args(args);
        let kind = series_kind(call_name, &parts);
        if self.series_type_support(&kind) == Support::Unsupported {
            return Err(BackendError::Unsupported(format!("series type :{kind}")));
        }
        let mut data = Vec::new();
        for node in &parts.data {
            data.extend(eval_data(node, &self.env, rng)?);
        }
        if data.is_empty() {
            return Err(BackendError::Unsupported("series without data".to_owned()));
        }
        let attrs = parts
            .attrs
            .iter()
            .map(|(name, value)| ((*name).to_owned(), value.clone()))
            .collect();
        // A plot-family call starts a fresh figure.
        self.figure = Figure::default();
        self.figure.series.push(Series { kind, data, attrs });
        Ok(())
    }

    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_precision_loss,
        clippy::cast_sign_loss
    )]
    fn render(&self) -> RgbaImage {
        let mut img = RgbaImage::from_pixel(WIDTH, HEIGHT, Rgba([255, 255, 255, 255]));
        draw_border(&mut img);
        if !self.figure.title.is_empty() {
            fill_rect(&mut img, 1, 1, WIDTH - 2, MARGIN / 2, Rgba([235, 235, 245, 255]));
        }
        for (index, series) in self.figure.series.iter().enumerate() {
            let color = Rgba(PALETTE[index % PALETTE.len()]);
            // Recipes compose the native primitives.
            let drawn = match series.kind.as_str() {
                "step" => "line",
                "area" => "bar",
                kind => kind,
            };
            match drawn {
                "scatter" => draw_scatter(&mut img, &series.data, color),
                "bar" => draw_bars(&mut img, &series.data, color),
                "histogram" => {
                    let bins = series
                        .attrs
                        .get("bins")
                        .and_then(|raw| raw.parse::<usize>().ok())
                        .unwrap_or(30);
                    draw_bars(&mut img, &bin_counts(&series.data, bins), color);
                }
                "heatmap" => draw_heatmap(&mut img, &series.data, color),
                _ => draw_line(&mut img, &series.data, color),
            }
        }
        img
    }
}

impl Default for PixelBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl Backend for PixelBackend {
    fn name(&self) -> &'static str {
        "pixel"
    }

    fn supported_attributes(&self) -> Vec<&'static str> {
        vec![
            "aspect_ratio",
            "background_color",
            "bins",
            "dpi",
            "fillalpha",
            "fillcolor",
            "grid",
            "guide",
            "label",
            "legend",
            "lims",
            "linecolor",
            "linestyle",
            "linewidth",
            "markercolor",
            "markershape",
            "markersize",
            "scale",
            "seriestype",
            "size",
            "ticks",
            "title",
        ]
    }

    fn supported_series_types(&self) -> Vec<&'static str> {
        let mut types: Vec<&'static str> = NATIVE_SERIES.iter().chain(RECIPE_SERIES).copied().collect();
        types.sort_unstable();
        types
    }

    fn supported_styles(&self) -> Vec<&'static str> {
        vec!["dash", "dashdot", "dot", "solid"]
    }

    fn supported_markers(&self) -> Vec<&'static str> {
        vec!["circle", "cross", "diamond", "none", "square"]
    }

    fn supported_scales(&self) -> Vec<&'static str> {
        vec!["identity", "log10"]
    }

    fn series_type_support(&self, series_type: &str) -> Support {
        if NATIVE_SERIES.contains(&series_type) {
            Support::Native
        } else if RECIPE_SERIES.contains(&series_type) {
            Support::Recipe
        } else {
            Support::Unsupported
        }
    }

    fn set_display(&mut self, enabled: bool) {
        self.display = enabled;
    }

    fn execute(&mut self, statement: &Node, rng: &mut StdRng) -> Result<(), BackendError> {
        match statement {
            Node::Block(children) => {
                for child in children {
                    self.execute(child, rng)?;
                }
                Ok(())
            }
            Node::LineInfo { .. } => Ok(()),
            Node::Assign { target, value } => {
                let data = eval_data(value, &self.env, rng)?;
                self.env.set(target, data);
                Ok(())
            }
            Node::Call { name, args } => self.call(name, args, rng),
            other => Err(BackendError::Unsupported(other.to_string())),
        }
    }

    fn rasterize(&mut self, path: &Path) -> Result<(), BackendError> {
        let img = self.render();
        img.save_with_format(path, ImageFormat::Png)?;
        tracing::debug!(display = self.display, path = %path.display(), "rasterized figure");
        Ok(())
    }

    fn encode_animation(&mut self, path: &Path, fps: u32) -> Result<(), BackendError> {
        if self.frames.is_empty() {
            return Err(BackendError::EmptyAnimation);
        }
        let file = File::create(path)?;
        let mut encoder = GifEncoder::new(file);
        encoder.set_repeat(Repeat::Infinite)?;
        let delay = Delay::from_numer_denom_ms(1000, fps);
        for frame in self.frames.drain(..) {
            encoder.encode_frame(Frame::from_parts(frame, 0, 0, delay))?;
        }
        Ok(())
    }
}

fn draw_border(img: &mut RgbaImage) {
    let gray = Rgba([120, 120, 120, 255]);
    for x in 0..WIDTH {
        img.put_pixel(x, 0, gray);
        img.put_pixel(x, HEIGHT - 1, gray);
    }
    for y in 0..HEIGHT {
        img.put_pixel(0, y, gray);
        img.put_pixel(WIDTH - 1, y, gray);
    }
}

fn fill_rect(img: &mut RgbaImage, x0: u32, y0: u32, x1: u32, y1: u32, color: Rgba<u8>) {
    for y in y0..=y1.min(HEIGHT - 1) {
        for x in x0..=x1.min(WIDTH - 1) {
            img.put_pixel(x, y, color);
        }
    }
}

/// Normalize samples into `[0, 1]`; a constant series maps to `0.5`.
fn normalized(data: &[f64]) -> Vec<f64> {
    let min = data.iter().copied().fold(f64::INFINITY, f64::min);
    let max = data.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    if (max - min).abs() < f64::EPSILON {
        return vec![0.5; data.len()];
    }
    data.iter().map(|v| (v - min) / (max - min)).collect()
}

#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss, clippy::cast_sign_loss)]
fn sample_xy(values: &[f64], index: usize) -> (u32, u32) {
    let span_x = f64::from(WIDTH - 2 * MARGIN);
    let span_y = f64::from(HEIGHT - 2 * MARGIN);
    let denom = values.len().saturating_sub(1).max(1) as f64;
    let x = f64::from(MARGIN) + index as f64 / denom * span_x;
    let y = f64::from(HEIGHT - MARGIN) - values[index] * span_y;
    (x as u32, y as u32)
}

fn draw_line(img: &mut RgbaImage, data: &[f64], color: Rgba<u8>) {
    let values = normalized(data);
    let mut previous: Option<(u32, u32)> = None;
    for index in 0..values.len() {
        let (x, y) = sample_xy(&values, index);
        if let Some((_, py)) = previous {
            let (lo, hi) = if py < y { (py, y) } else { (y, py) };
            fill_rect(img, x, lo, x, hi, color);
        } else {
            img.put_pixel(x, y, color);
        }
        previous = Some((x, y));
    }
}

fn draw_scatter(img: &mut RgbaImage, data: &[f64], color: Rgba<u8>) {
    let values = normalized(data);
    for index in 0..values.len() {
        let (x, y) = sample_xy(&values, index);
        fill_rect(img, x.saturating_sub(1), y.saturating_sub(1), x + 1, y + 1, color);
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss, clippy::cast_sign_loss)]
fn draw_bars(img: &mut RgbaImage, data: &[f64], color: Rgba<u8>) {
    let values = normalized(data);
    let span_x = f64::from(WIDTH - 2 * MARGIN);
    let slot = span_x / values.len().max(1) as f64;
    let span_y = f64::from(HEIGHT - 2 * MARGIN);
    for (index, value) in values.iter().enumerate() {
        let x0 = f64::from(MARGIN) + index as f64 * slot;
        let x1 = (x0 + slot * 0.8).max(x0 + 1.0);
        let top = f64::from(HEIGHT - MARGIN) - value * span_y;
        fill_rect(img, x0 as u32, top as u32, x1 as u32, HEIGHT - MARGIN, color);
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss, clippy::cast_sign_loss)]
fn draw_heatmap(img: &mut RgbaImage, data: &[f64], color: Rgba<u8>) {
    let values = normalized(data);
    let side = (values.len() as f64).sqrt().ceil().max(1.0) as usize;
    let cell_w = f64::from(WIDTH - 2 * MARGIN) / side as f64;
    let cell_h = f64::from(HEIGHT - 2 * MARGIN) / side as f64;
    for (index, value) in values.iter().enumerate() {
        let row = index / side;
        let col = index % side;
        let x0 = f64::from(MARGIN) + col as f64 * cell_w;
        let y0 = f64::from(MARGIN) + row as f64 * cell_h;
        let shade = Rgba([
            (f64::from(color.0[0]) * value + 255.0 * (1.0 - value)) as u8,
            (f64::from(color.0[1]) * value + 255.0 * (1.0 - value)) as u8,
            (f64::from(color.0[2]) * value + 255.0 * (1.0 - value)) as u8,
            255,
        ]);
        fill_rect(
            img,
            x0 as u32,
            y0 as u32,
            (x0 + cell_w) as u32,
            (y0 + cell_h) as u32,
            shade,
        );
    }
}

/// Bin samples into `bins` equal-width buckets and return the counts.
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss, clippy::cast_sign_loss)]
fn bin_counts(data: &[f64], bins: usize) -> Vec<f64> {
    let bins = bins.max(1);
    let values = normalized(data);
    let mut counts = vec![0.0; bins];
    for value in values {
        let index = ((value * bins as f64) as usize).min(bins - 1);
        counts[index] += 1.0;
    }
    counts
}
