//! Named chart colors.

use wavesculpt_config::{ColorScheme, palette};

/// Run the palette command.
pub fn run() -> anyhow::Result<()> {
    let defaults = ColorScheme::default();
    println!("Named Colors");
    println!();
    for entry in palette() {
        println!("  {:<22} {}", entry.name, entry.color);
    }
    println!();
    println!(
        "Defaults: background {}, positive {}, negative {}",
        defaults.background, defaults.positive, defaults.negative
    );
    Ok(())
}
