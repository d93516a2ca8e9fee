use crate::error::Result;
use crate::ui;
use armkit::core::catalog::Variant;
use tracing::info;

pub fn run() -> Result<()> {
    let headers = ["model", "derives from", "species", "reactions"].map(str::to_string);
    let mut rows = Vec::with_capacity(Variant::ALL.len());
    for variant in Variant::ALL {
        let model = variant.build()?;
        rows.push(vec![
            model.name().to_string(),
            model.ancestry().last().cloned().unwrap_or_else(|| "-".to_string()),
            model.all_species().len().to_string(),
            model.reaction_count().to_string(),
        ]);
    }
    info!("Listing {} catalog models.", rows.len());
    print!("{}", ui::render_table(&headers, &rows));
    Ok(())
}
