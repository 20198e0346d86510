use std::env;
use std::path::PathBuf;

use volume_knob::geometry::format_volume;
use volume_knob::{Knob, KnobConfig, KnobError};

const USAGE: &str = "\
Usage: volume_knob [options]
  --title <text>         window title
  --dots <n>             number of dots (2-40)
  --ring-radius <px>     ring radius, 0 for 35% of the window width
  --knob-radius <px>     knob handle radius
  --size <w> <h>         window size in logical pixels
  --font <path>          font used for the volume label";

fn main() -> Result<(), KnobError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut title = "Volume".to_string();
    let mut dots = 30;
    let mut ring_radius = 0.0;
    let mut knob_radius = 50.0;
    let mut size = (400, 400);
    let mut font = None;

    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--title" => {
                if let Some(value) = args.next() {
                    title = value;
                }
            }
            "--dots" => {
                if let Some(Ok(n)) = args.next().map(|s| s.parse::<i32>()) {
                    dots = n;
                }
            }
            "--ring-radius" => {
                if let Some(Ok(r)) = args.next().map(|s| s.parse::<f32>()) {
                    ring_radius = r;
                }
            }
            "--knob-radius" => {
                if let Some(Ok(r)) = args.next().map(|s| s.parse::<f32>()) {
                    knob_radius = r;
                }
            }
            "--size" => {
                if let (Some(w), Some(h)) = (args.next(), args.next()) {
                    if let (Ok(w), Ok(h)) = (w.parse::<usize>(), h.parse::<usize>()) {
                        size = (w.max(1), h.max(1));
                    }
                }
            }
            "--font" => {
                font = args.next().map(PathBuf::from);
            }
            "-h" | "--help" => {
                println!("{USAGE}");
                return Ok(());
            }
            other => log::warn!("Ignoring unknown argument {:?}", other),
        }
    }

    let config = KnobConfig::builder()
        .title(title)
        .dot_count_size(dots)
        .ring_radius(ring_radius)
        .knob_radius(knob_radius)
        .window_width(size.0)
        .window_height(size.1)
        .maybe_font_path(font)
        .build();

    let mut knob = Knob::new(config);
    knob.on_value_changed(|value| log::info!("Volume {}", format_volume(value)));
    knob.show()
}
