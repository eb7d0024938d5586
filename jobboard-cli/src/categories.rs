//! Jobboard Categories - show the resolved category list.

use jobboard_kanban::BoardConfig;

use crate::table;

/// Run the categories command.
pub fn run_categories(config: &BoardConfig, json: bool) -> anyhow::Result<()> {
    if json {
        let output = serde_json::json!({
            "categories": config.categories,
            "filter_field": config.filter_field,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!("{}", table::categories_table(&config.categories));
    Ok(())
}
