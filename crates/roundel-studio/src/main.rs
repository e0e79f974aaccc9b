use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::{Arg, ArgAction, ArgMatches, Command};
use image::RgbaImage;

use roundel_engine::coords::{Rect, Vec2};
use roundel_engine::logging::{LoggingConfig, init_logging};
use roundel_engine::paint::Color;
use roundel_engine::render::Canvas;
use roundel_engine::scene::DrawList;
use roundel_engine::shape::ShapeConfig;
use roundel_ui::painter::Painter;
use roundel_ui::widget::Widget;
use roundel_ui::widgets::rounded_box::RoundedBox;

mod shape_file;
use shape_file::ShapeFile;

fn cli() -> Command {
    Command::new("roundel-studio")
        .about("Rasterizes rounded-box shape descriptions and probes their hit tests")
        .subcommand_required(true)
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("More logging (repeat for trace)")
                .action(ArgAction::Count)
                .global(true),
        )
        .subcommand(
            Command::new("render")
                .about("Render a shape file to PNG")
                .arg(Arg::new("shape").value_name("SHAPE.toml").required(true))
                .arg(
                    Arg::new("output")
                        .short('o')
                        .long("output")
                        .value_name("PNG")
                        .help("Output image")
                        .default_value("shape.png"),
                )
                .arg(
                    Arg::new("width")
                        .long("width")
                        .value_name("PX")
                        .help("Canvas width (overrides the file)")
                        .value_parser(clap::value_parser!(u32).range(1..)),
                )
                .arg(
                    Arg::new("height")
                        .long("height")
                        .value_name("PX")
                        .help("Canvas height (overrides the file)")
                        .value_parser(clap::value_parser!(u32).range(1..)),
                )
                .arg(
                    Arg::new("probe")
                        .long("probe")
                        .value_name("X,Y")
                        .help("Report hit test and coverage at a canvas position")
                        .action(ArgAction::Append),
                ),
        )
}

fn main() -> Result<()> {
    let matches = cli().get_matches();

    let default_level = match matches.get_count("verbose") {
        0 => log::LevelFilter::Info,
        1 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    init_logging(LoggingConfig { default_level, ..Default::default() });

    match matches.subcommand() {
        Some(("render", sub)) => render(sub),
        Some((other, _)) => bail!("unknown command {other:?}"),
        None => bail!("no command given"),
    }
}

fn render(matches: &ArgMatches) -> Result<()> {
    let shape_path = matches.get_one::<String>("shape").map(PathBuf::from).context("missing shape file")?;
    let output = matches.get_one::<String>("output").map(PathBuf::from).context("missing output path")?;

    let file = ShapeFile::load(&shape_path)?;
    let width = matches.get_one::<u32>("width").copied().unwrap_or(file.canvas.width);
    let height = matches.get_one::<u32>("height").copied().unwrap_or(file.canvas.height);
    let host = file.host_rect(width, height);
    let shape = file.build(host)?;
    log::info!("Loaded {} ({}x{} canvas, host {:?})", shape_path.display(), width, height, host);

    let [r, g, b, a] = file.canvas.background;
    let canvas = rasterize(&shape, host, width, height, Color::from_straight_u8(r, g, b, a));

    let image = RgbaImage::from_raw(width, height, canvas.to_rgba8())
        .context("canvas buffer does not match image size")?;
    image.save(&output).with_context(|| format!("writing {}", output.display()))?;
    log::info!("Wrote {}", output.display());

    for probe in matches.get_many::<String>("probe").into_iter().flatten() {
        let pos = parse_probe(probe)?;
        println!("{}", probe_report(&shape, &canvas, host, pos));
    }
    Ok(())
}

fn rasterize(shape: &RoundedBox, host: Rect, width: u32, height: u32, background: Color) -> Canvas {
    let mut list = DrawList::new();
    {
        let mut painter = Painter::new(&mut list, Vec2::new(-1.0, -1.0), false);
        shape.paint(&mut painter, host);
    }
    let mut canvas = Canvas::new(width as usize, height as usize, ShapeConfig::default());
    canvas.clear(background);
    canvas.draw_list(&mut list);
    canvas
}

fn parse_probe(text: &str) -> Result<Vec2> {
    let (x, y) = text.split_once(',').with_context(|| format!("probe {text:?} is not X,Y"))?;
    let x: f32 = x.trim().parse().with_context(|| format!("probe x in {text:?}"))?;
    let y: f32 = y.trim().parse().with_context(|| format!("probe y in {text:?}"))?;
    Ok(Vec2::new(x, y))
}

fn probe_report(shape: &RoundedBox, canvas: &Canvas, host: Rect, pos: Vec2) -> String {
    let hit = shape.hit_test(host, pos);
    let (rect, params) = shape.params(host);
    let distance = params.distance(rect.to_local(pos));
    let coverage = params.coverage(rect.to_local(pos));

    let px = pos.x.floor();
    let py = pos.y.floor();
    let alpha = if px >= 0.0 && py >= 0.0 && (px as usize) < canvas.width() && (py as usize) < canvas.height() {
        format!("{:.3}", canvas.pixel(px as usize, py as usize).a)
    } else {
        "-".to_string()
    };

    format!(
        "{:>8.2},{:<8.2} {} distance={:+.3} coverage={:.3} alpha={}",
        pos.x,
        pos.y,
        if hit { "HIT " } else { "miss" },
        distance,
        coverage,
        alpha,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use roundel_engine::coords::RadiusSet;

    #[test]
    fn cli_is_well_formed() {
        cli().debug_assert();
    }

    #[test]
    fn parses_probe_positions() {
        assert_eq!(parse_probe("12.5, 3").unwrap(), Vec2::new(12.5, 3.0));
        assert!(parse_probe("12").is_err());
        assert!(parse_probe("a,b").is_err());
    }

    #[test]
    fn probe_reports_corner_miss() {
        let shape = RoundedBox::new().radii(RadiusSet::all(1.0)).unwrap();
        let host = Rect::new(0.0, 0.0, 40.0, 40.0);
        let canvas = rasterize(&shape, host, 40, 40, Color::transparent());

        assert!(probe_report(&shape, &canvas, host, Vec2::new(20.0, 20.0)).contains("HIT"));
        let corner = probe_report(&shape, &canvas, host, Vec2::new(1.0, 1.0));
        assert!(corner.contains("miss"));
        assert!(corner.contains("alpha=0.000"));
    }
}
