//Print the points of a line between two integer endpoints

use bresenham_line::LineGenerator;
use clap::Parser;

#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Args {
    #[arg(long, allow_negative_numbers = true)]
    x0: i32,
    #[arg(long, allow_negative_numbers = true)]
    y0: i32,
    #[arg(long, allow_negative_numbers = true)]
    x1: i32,
    #[arg(long, allow_negative_numbers = true)]
    y1: i32,
}

fn main() {
    let args = Args::parse();
    let first = (args.x0, args.y0);
    let last = (args.x1, args.y1);
    let mut line = match LineGenerator::<(i32, i32)>::try_new(first, last) {
        Ok(line) => line,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    println!("{} points", line.len());
    for (x, y) in &mut line {
        println!("{} {}", x, y);
    }
}
