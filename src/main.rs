// SPDX-License-Identifier: MPL-2.0
//! Prints the layout of a picker sheet over a synthetic image library.
//!
//! ```text
//! picker_sheet [--width 320] [--height 568] [--max-selection N]
//!              [--config sheet.toml] [--select INDEX]...
//! ```

use iced_core::Size;
use picker_sheet::application::sheet::{CellSlot, CollectionProvider, SheetRowKind};
use picker_sheet::domain::{Action, ActionStyle, Asset, AssetId};
use picker_sheet::infrastructure::MemoryAssetSource;
use picker_sheet::{SheetConfig, SheetController, SheetEffect};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing_subscriber::EnvFilter;

const HELP: &str = "\
picker_sheet - print the layout of an image picker sheet

USAGE:
  picker_sheet [OPTIONS]

OPTIONS:
  --width POINTS         Viewport width [default: 320]
  --height POINTS        Viewport height [default: 568]
  --max-selection N      Maximum number of selected images
  --config FILE          Sheet configuration (TOML)
  --select INDEX         Select a preview image (repeatable)
  -h, --help             Print this help
";

/// Number of cells bound and resolved for the printout.
const VISIBLE_CELLS: usize = 3;

#[derive(Debug, Error)]
enum DemoError {
    #[error("Argument Error: {0}")]
    Args(#[from] pico_args::Error),
    #[error("I/O Error: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Sheet(#[from] picker_sheet::Error),
}

struct Args {
    width: f32,
    height: f32,
    max_selection: Option<usize>,
    config: Option<PathBuf>,
    select: Vec<usize>,
}

fn parse_args() -> Result<Option<Args>, DemoError> {
    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }

    Ok(Some(Args {
        width: args.opt_value_from_str("--width")?.unwrap_or(320.0),
        height: args.opt_value_from_str("--height")?.unwrap_or(568.0),
        max_selection: args.opt_value_from_str("--max-selection")?,
        config: args.opt_value_from_str("--config")?,
        select: args.values_from_str("--select")?,
    }))
}

fn load_config(path: Option<&Path>) -> Result<SheetConfig, DemoError> {
    match path {
        Some(path) => {
            let content = std::fs::read_to_string(path)?;
            Ok(SheetConfig::from_toml_str(&content)?)
        }
        None => Ok(SheetConfig::default()),
    }
}

fn synthetic_library() -> Vec<Asset> {
    let shapes = [(4032, 3024), (3024, 4032), (1920, 1080), (2048, 2048), (1080, 1920)];
    (0..12u64)
        .zip(shapes.iter().cycle())
        .map(|(id, &(width, height))| Asset::new(AssetId::new(id + 1), width, height, id == 7))
        .collect()
}

fn main() -> Result<(), DemoError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let Some(args) = parse_args()? else {
        print!("{HELP}");
        return Ok(());
    };

    let mut config = load_config(args.config.as_deref())?;
    if args.max_selection.is_some() {
        config.selection.maximum_selection = args.max_selection;
    }

    let mut sheet = SheetController::new(MemoryAssetSource::new(synthetic_library()), config)?;
    sheet.set_viewport(Size::new(args.width, args.height));
    sheet.load_assets();

    sheet.add_action(Action::new("Take Photo", ActionStyle::Default, |_| {}));
    sheet.add_action(
        Action::new("Photo Library", ActionStyle::Default, |_| {})
            .with_secondary_title(|count| format!("Add {count} Photo{}", if count == 1 { "" } else { "s" })),
    );
    sheet.add_action(Action::new("Cancel", ActionStyle::Cancel, |_| {}));

    for index in args.select {
        let effects = sheet.select_asset(index)?;
        if effects
            .iter()
            .any(|effect| matches!(effect, SheetEffect::ResizePreviewRow { .. }))
        {
            sheet.finish_enlarge_animation();
        }
        for effect in effects {
            println!("effect: {effect:?}");
        }
    }

    let runtime = tokio::runtime::Builder::new_current_thread().build()?;
    runtime.block_on(async {
        for index in 0..VISIBLE_CELLS.min(sheet.assets().len()) {
            let request = sheet.bind_preview_cell(CellSlot(index), index)?;
            sheet.will_display_preview_cell(index);
            let image = request.image.await;
            sheet.complete_image(request.ticket, image);
        }
        Ok::<(), picker_sheet::Error>(())
    })?;

    print_sheet(&sheet);
    Ok(())
}

fn print_sheet(sheet: &SheetController<MemoryAssetSource>) {
    let rows = sheet.sheet_rows();
    let frame = sheet.sheet_frame();

    println!(
        "sheet: {:.0}x{:.0} at y={:.0}, preview height {:.0}, {} selected",
        frame.width,
        frame.height,
        frame.y,
        rows.layout().sheet.preview_height,
        sheet.selected_count()
    );

    for row in rows.snapshots() {
        let label = match &row.kind {
            SheetRowKind::Preview { cell_count, .. } => format!("[{cell_count} images]"),
            SheetRowKind::Action {
                text, font_weight, ..
            } => format!("{text} ({font_weight:?})"),
        };
        let insets = row.attributes.insets;
        println!(
            "  row {}: {:<24} h={:<5} corners={:?} insets=({}, {}, {}, {})",
            row.row,
            label,
            row.size.height,
            row.attributes.corners,
            insets.top,
            insets.left,
            insets.bottom,
            insets.right
        );
    }

    for cell in sheet.preview_cells().snapshots() {
        println!(
            "  cell {:>2}: {:>4}x{:<4} x={:<7} selected={} image={}",
            cell.index,
            cell.size.width,
            cell.size.height,
            cell.frame.x,
            cell.is_selected,
            cell.image.is_some()
        );
    }
}
