//! The `outline` backend: a deliberately minimal capability set.
//!
//! Supports line and scatter series only and cannot encode animations, so
//! real documentation runs exercise the per-example warning path. Also
//! backs the deprecated `legacy` registry entry under another name.

use std::path::Path;

use image::{ImageFormat, Rgba, RgbaImage};
use plotdoc_catalog::Node;
use rand::rngs::StdRng;

use crate::backend::{Backend, BackendError, Support};
use crate::exec::{Env, eval_data, series_kind, split_args};

const WIDTH: u32 = 400;
const HEIGHT: u32 = 300;

/// Minimal reference backend.
#[derive(Debug)]
pub struct OutlineBackend {
    name: &'static str,
    display: bool,
    env: Env,
    /// Mean value of each series in the current figure, in plot order.
    levels: Vec<f64>,
}

impl OutlineBackend {
    #[must_use]
    pub fn new() -> Self {
        Self::named("outline")
    }

    /// Construct under a different registered name (used by `legacy`).
    #[must_use]
    pub fn named(name: &'static str) -> Self {
        Self {
            name,
            display: false,
            env: Env::default(),
            levels: Vec::new(),
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
        #[allow(clippy::cast_precision_loss)]
        let mean = data.iter().sum::<f64>() / data.len() as f64;
        self.levels = vec![mean];
        Ok(())
    }
}

impl Default for OutlineBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl Backend for OutlineBackend {
    fn name(&self) -> &'static str {
        self.name
    }

    fn supported_attributes(&self) -> Vec<&'static str> {
        vec!["label", "legend", "markershape", "markersize", "seriestype", "title"]
    }

    fn supported_series_types(&self) -> Vec<&'static str> {
        vec!["line", "scatter"]
    }

    fn supported_styles(&self) -> Vec<&'static str> {
        vec!["solid"]
    }

    fn supported_markers(&self) -> Vec<&'static str> {
        vec!["circle", "none"]
    }

    fn supported_scales(&self) -> Vec<&'static str> {
        vec!["identity"]
    }

    fn series_type_support(&self, series_type: &str) -> Support {
        if matches!(series_type, "line" | "scatter") {
            Support::Native
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
            Node::Call { name, args } => match name.as_str() {
                "plot" | "scatter" => self.add_series(name, args, rng),
                // Figure-level text attributes are accepted and ignored.
                "title" | "xlabel" | "ylabel" => Ok(()),
                other => Err(BackendError::Unsupported(format!("call to '{other}'"))),
            },
            other => Err(BackendError::Unsupported(other.to_string())),
        }
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn rasterize(&mut self, path: &Path) -> Result<(), BackendError> {
        let mut img = RgbaImage::from_pixel(WIDTH, HEIGHT, Rgba([255, 255, 255, 255]));
        let gray = Rgba([160, 160, 160, 255]);
        for x in 0..WIDTH {
            img.put_pixel(x, 0, gray);
            img.put_pixel(x, HEIGHT - 1, gray);
        }
        for y in 0..HEIGHT {
            img.put_pixel(0, y, gray);
            img.put_pixel(WIDTH - 1, y, gray);
        }
        for level in &self.levels {
            let y = (f64::from(HEIGHT) * (1.0 - level.clamp(0.0, 1.0))) as u32;
            let y = y.clamp(1, HEIGHT - 2);
            for x in 1..WIDTH - 1 {
                img.put_pixel(x, y, Rgba([60, 60, 60, 255]));
            }
        }
        img.save_with_format(path, ImageFormat::Png)?;
        tracing::debug!(display = self.display, path = %path.display(), "rasterized figure");
        Ok(())
    }

    fn encode_animation(&mut self, _path: &Path, _fps: u32) -> Result<(), BackendError> {
        Err(BackendError::Unsupported("animation output".to_owned()))
    }
}
