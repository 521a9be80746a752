//--------------------------------------------------------------------
// main.rs
//--------------------------------------------------------------------
// Provides the main function
//--------------------------------------------------------------------

use std::io::{self, Write};

use anyhow::Result;
use clap::Parser;
use shape_kernel::{deg_to_rad, Coord, PolygonStyle, Rect, RegularPolygon};
use tracing_subscriber::fmt::SubscriberBuilder;

#[derive(Parser)]
#[command(name = "shape-demo")]
#[command(about = "Builds a regular polygon inside a rectangle and prints its path")]
struct Args {
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    x: Coord,
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    y: Coord,
    #[arg(long, default_value_t = 100.0)]
    width: Coord,
    #[arg(long, default_value_t = 100.0)]
    height: Coord,
    /// Number of sides; zero produces an empty path
    #[arg(long, default_value_t = PolygonStyle::default().sides)]
    sides: usize,
    /// Angle of the first vertex (radians unless --degrees is given)
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    phase: Coord,
    #[arg(long, default_value_t = PolygonStyle::default().line_width)]
    line_width: Coord,
    /// Interpret --phase in degrees
    #[arg(long)]
    degrees: bool,
}

impl Args {
    fn style(&self) -> PolygonStyle {
        let phase = if self.degrees { deg_to_rad(self.phase) } else { self.phase };
        PolygonStyle { sides: self.sides, phase, line_width: self.line_width }
    }
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).with_writer(io::stderr).init();
    let args = Args::parse();

    let bounds = Rect::new(args.x, args.y, args.width, args.height);
    let style = args.style();
    tracing::info!(%bounds, sides = style.sides, phase = style.phase, line_width = style.line_width, "build");

    let mut polygon = RegularPolygon::with_style(bounds, style);
    let path = polygon.path();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if path.is_empty() {
        writeln!(out, "Nothing to draw: no usable area inside {}", bounds)?;
        return Ok(());
    }

    writeln!(out, "Vertices:")?;
    for (i, v) in path.iter().enumerate() {
        writeln!(out, "  {}: {}", i, v)?;
    }

    writeln!(out, "Path:")?;
    for cmd in path.to_commands() {
        writeln!(out, "  {}", cmd)?;
    }

    if let Some(rect) = path.bounding_rect() {
        writeln!(out, "Bounding rect: {} (integral {})", rect, rect.integral())?;
    }
    writeln!(out, "Signed area: {}", path.signed_area())?;
    out.flush()?;
    Ok(())
}
