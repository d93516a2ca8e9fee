use crate::cli::ShowArgs;
use crate::error::Result;
use crate::ui;
use armkit::core::catalog;
use armkit::core::models::finalize::FinalizedModel;
use tracing::info;

pub fn run(args: ShowArgs) -> Result<()> {
    let model = catalog::build(&args.model)?;
    let finalized = model.finalize()?;
    info!("Showing model '{}'.", model.name());
    print!("{}", render(&finalized, args.implicit));
    Ok(())
}

fn render(finalized: &FinalizedModel, implicit: bool) -> String {
    let model = finalized.model();
    let mut out = String::new();

    out.push_str(&format!("Model: {}\n", model.name()));
    if !model.ancestry().is_empty() {
        out.push_str(&format!("Ancestry: {}\n", model.ancestry().join(" -> ")));
    }

    out.push_str("\nParameters:\n");
    let rows: Vec<Vec<String>> = model
        .parameters()
        .map(|(name, p)| {
            vec![
                name.to_string(),
                p.value.map_or_else(|| "abstract".to_string(), |v| format!("{:e}", v)),
            ]
        })
        .collect();
    out.push_str(&ui::render_table(&["name", "value"].map(str::to_string), &rows));

    out.push_str("\nSpecies:\n");
    let rows: Vec<Vec<String>> = finalized
        .species()
        .iter()
        .filter(|s| implicit || !s.implicit)
        .map(|s| vec![s.name.to_string(), format!("{:e}", s.initial)])
        .collect();
    out.push_str(&ui::render_table(&["name", "initial"].map(str::to_string), &rows));

    out.push_str("\nReactions:\n");
    for (name, template) in model.reactions() {
        out.push_str(&format!(
            "  {:<34} {:<20} {}\n",
            name,
            template.kind_name(),
            template.equation(name)
        ));
    }
    out
}
