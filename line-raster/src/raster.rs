use std::time::Instant;

use bresenham_line::{Coordinate, LineGenerator};
use image::{GrayImage, Luma};
use num_traits::{PrimInt, Signed, ToPrimitive};
use rand::Rng;
use slog::info;

use crate::utils::set_log_config;
use crate::IS_DEBUG;

/// RasterParameter
#[derive(Clone, Debug)]
pub struct RasterParameter {
    pub width: u32,
    pub height: u32,
    pub foreground: u8,
    pub background: u8,
}

impl Default for RasterParameter {
    fn default() -> Self {
        Self {
            width: 64,
            height: 64,
            foreground: 255,
            background: 0,
        }
    }
}

impl RasterParameter {
    #[allow(clippy::field_reassign_with_default)]
    pub fn new(width: u32, height: u32) -> RasterParameter {
        let mut ret = RasterParameter::default();
        ret.width = width;
        ret.height = height;
        ret
    }
}

/// Sets the pixel under every point that falls inside `image` and returns how
/// many did. Points outside the image are skipped.
pub fn plot_points<I, C>(image: &mut GrayImage, points: I, value: u8) -> usize
where
    I: IntoIterator<Item = C>,
    C: Coordinate,
{
    let (width, height) = image.dimensions();
    let mut plotted = 0;
    for point in points {
        if let (Some(x), Some(y)) = (point.x().to_u32(), point.y().to_u32()) {
            if x < width && y < height {
                image.put_pixel(x, y, Luma([value]));
                plotted += 1;
            }
        }
    }
    plotted
}

/// Whether `value`, moving in the direction of `step`, has left `0..limit`
/// for good.
fn is_past<T: PrimInt, W: Signed>(value: T, step: W, limit: u32) -> bool {
    if step.is_negative() {
        value < T::zero()
    } else {
        match value.to_u32() {
            Some(v) => v >= limit,
            None => value > T::zero(),
        }
    }
}

/// Draws `line` on a fresh `background` image.
///
/// The walk stops as soon as the major axis has left the image in the
/// direction of travel. A line that starts far outside the image is still
/// walked point by point until it enters.
pub fn rasterize_line<C, W>(param: &RasterParameter, line: &LineGenerator<C, W>) -> GrayImage
where
    C: Coordinate,
    W: PrimInt + Signed,
{
    let mut image = GrayImage::from_pixel(param.width, param.height, Luma([param.background]));
    let (x_step, y_step) = line.direction();
    let y_major = line.is_y_major();
    let inside = line.points().take_while(|point| {
        if y_major {
            !is_past(point.y(), y_step, param.height)
        } else {
            !is_past(point.x(), x_step, param.width)
        }
    });
    plot_points(&mut image, inside, param.foreground);
    image
}

fn create_temporary_tiff_file_path() -> Result<String, String> {
    let suffix: String = rand::thread_rng()
        .sample_iter(&rand::distributions::Alphanumeric)
        .take(10)
        .map(char::from)
        .collect();
    let temporary_path = std::env::temp_dir().join(format!("line_{}.tiff", suffix));

    // Windows paths may hold utf-16 data with no utf-8 encoding.
    temporary_path
        .clone()
        .into_os_string()
        .into_string()
        .map_err(|_| {
            format!(
                "Failed to convert path to string {}",
                temporary_path.display()
            )
        })
}

/// Draws the line from `first` to `last` and saves it as a TIFF image.
///
/// Returns the path written to: `optional_output_path` if given, otherwise a
/// random file name in the OS temporary directory.
pub fn write_line_image(
    param: &RasterParameter,
    first: (i64, i64),
    last: (i64, i64),
    optional_output_path: Option<String>,
) -> Result<String, String> {
    let log = set_log_config();
    let tick = Instant::now();

    let line = LineGenerator::<_, i64>::try_new(first, last).map_err(|e| e.to_string())?;
    let image = rasterize_line(param, &line);
    if IS_DEBUG {
        let log = log.new(slog::OwnedKV(line));
        info!(
            log,
            "rasterized {}x{} in {:.3}s",
            param.width,
            param.height,
            tick.elapsed().as_millis() as f64 / 1000.0
        );
    }

    let output_path = match optional_output_path {
        Some(result) => result,
        None => create_temporary_tiff_file_path()?,
    };
    image.save(&output_path).map_err(|e| e.to_string())?;

    Ok(output_path)
}
