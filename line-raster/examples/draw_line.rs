//Rasterize a line between two endpoints and save it as a TIFF image

use clap::Parser;
use line_raster::{
    raster::{write_line_image, RasterParameter},
    utils::set_log_config,
};
use slog::{error, info};

#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Args {
    #[arg(long, allow_negative_numbers = true)]
    x0: i64,
    #[arg(long, allow_negative_numbers = true)]
    y0: i64,
    #[arg(long, allow_negative_numbers = true)]
    x1: i64,
    #[arg(long, allow_negative_numbers = true)]
    y1: i64,
    #[arg(long, default_value_t = 64)]
    width: u32,
    #[arg(long, default_value_t = 64)]
    height: u32,
    //path to the output TIFF file, a temporary file if omitted
    #[arg(short, long)]
    output: Option<String>,
}

fn main() {
    let args = Args::parse();
    let log = set_log_config();
    let param = RasterParameter::new(args.width, args.height);
    match write_line_image(&param, (args.x0, args.y0), (args.x1, args.y1), args.output) {
        Ok(path) => info!(log, "wrote line image"; "path" => path),
        Err(e) => {
            error!(log, "could not draw line"; "reason" => e);
            // The async drain only flushes on drop.
            drop(log);
            std::process::exit(1);
        }
    }
}
