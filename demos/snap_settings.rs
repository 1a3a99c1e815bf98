//! Save and restore snap settings, then snap with them.
use snapline::prelude::*;
use tracing_subscriber::EnvFilter;

fn main() -> snapline::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("snapline=debug")))
        .init();

    let path = std::env::temp_dir().join("snapline_settings.json");

    let settings = SnapSettings { threshold: 4.0, show_guidelines: false, ..SnapSettings::default() };
    settings.save(&path)?;
    println!("Saved settings to {}", path.display());

    let loaded = SnapSettings::load_or_default(&path);
    assert_eq!(loaded, settings, "settings should survive a save/load cycle");
    println!("Loaded: {}", loaded.to_json_string()?);

    let snapper = Snapper::new(loaded);
    let boxes = [BoundingBox::new(0.0, 0.0, 10.0, 20.0)];
    let result = snapper.snap(&boxes, 1.0, 1.0);
    println!(
        "Snapped to ({}, {}), {} guidelines drawn",
        result.x,
        result.y,
        snapper.visible_guidelines(&result).len()
    );
    Ok(())
}
