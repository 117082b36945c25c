use colored::Colorize;
use comfy_table::{ContentArrangement, Table};
use nf_engine::Orchestrator;

pub fn run() -> Result<(), String> {
    let orch = Orchestrator::standard();
    let registry = orch.registry();

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Key", "Status", "Creative weight"]);

    for key in orch.keys() {
        let status = if registry.is_available(key) {
            "available"
        } else {
            "placeholder"
        };
        let weight = orch
            .creative_weight(key)
            .map_or_else(|| "-".to_string(), |w| format!("{w:.1}"));
        table.add_row(vec![key, status, weight.as_str()]);
    }

    println!("{table}");
    println!();
    println!(
        "  {} families {}",
        registry.len(),
        format!(
            "(weighted selection at creativity >= {})",
            orch.config().creative_threshold
        )
        .dimmed()
    );

    Ok(())
}
