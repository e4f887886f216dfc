//! Command line handling

use std::path::Path;

use brl::{
    braille,
    font::bdf::Font,
    presets,
    raster::{text::render_text, Canvas},
};
use color_eyre::eyre::{eyre, WrapErr};
use env_logger::Env;
use image::ImageFormat;
use log::LevelFilter;
use prettytable::{format, row, Table};

pub mod opt;

use crate::ttf;
use opt::{Options, SizeSpec};

/// Set up CLI
pub fn init<T: clap::Parser>() -> color_eyre::Result<T> {
    color_eyre::install()?;
    env_logger::Builder::new()
        .filter_level(LevelFilter::Info)
        .format_timestamp(None)
        .parse_env(Env::new().filter("BRL_TOOL_LOG"))
        .init();
    let args = T::parse();
    Ok(args)
}

/// Run the selected command
pub fn run(opt: &Options) -> color_eyre::Result<()> {
    if opt.list_presets {
        list_presets();
        return Ok(());
    }

    // clap enforces this outside of --list-presets
    let font_path = opt
        .font
        .as_deref()
        .ok_or_else(|| eyre!("missing font argument"))?;
    let text = match opt.text.is_empty() {
        true => "Hello".to_string(),
        false => opt.text.join(" "),
    };

    let canvas = if is_bitmap_font(font_path) {
        let font = Font::load(font_path)
            .wrap_err_with(|| format!("failed to read font '{}'", font_path.display()))?;
        render_text(&text, &font, opt.spacing)
    } else {
        let cells = opt.size.unwrap_or(SizeSpec {
            width: 8,
            height: 4,
        });
        let char_size = presets::pixel_size((cells.width, cells.height));
        let raster = ttf::rasterize_text(font_path, &text, char_size, opt.font_size);
        Canvas::from_gray(&raster, opt.threshold)
    };

    if let Some(out_path) = &opt.out {
        let image = canvas.to_image();
        image
            .save_with_format(out_path, ImageFormat::Png)
            .wrap_err_with(|| format!("failed to write '{}'", out_path.display()))?;
    }

    println!("{}", braille::encode(&canvas));
    Ok(())
}

fn is_bitmap_font(path: &Path) -> bool {
    path.extension()
        .map(|ext| ext.eq_ignore_ascii_case("bdf"))
        .unwrap_or(false)
}

fn list_presets() {
    let mut table = Table::new();
    table.set_format(*format::consts::FORMAT_NO_LINESEP_WITH_TITLE);
    table.set_titles(row!["braille", "pixels", "description"]);
    for preset in presets::PRESETS.iter() {
        table.add_row(row![
            format!("{}x{}", preset.cells.0, preset.cells.1),
            format!("{}x{}", preset.pixels.0, preset.pixels.1),
            preset.label
        ]);
    }
    table.printstd();
}

#[cfg(test)]
mod tests {
    use super::is_bitmap_font;
    use std::path::Path;

    #[test]
    fn test_is_bitmap_font() {
        assert!(is_bitmap_font(Path::new("font.bdf")));
        assert!(is_bitmap_font(Path::new("FONT.BDF")));
        assert!(!is_bitmap_font(Path::new("font.ttf")));
        assert!(!is_bitmap_font(Path::new("bdf")));
    }
}
