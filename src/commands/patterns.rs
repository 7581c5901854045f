//! Patterns command - list the fabrication-indicator registry

use veripaper::output::OutputMode;
use veripaper::registry::registry;

/// List all registry patterns
pub fn patterns(mode: OutputMode) -> anyhow::Result<()> {
    let reg = registry();

    if mode == OutputMode::Json {
        let entries: Vec<_> = reg
            .entries()
            .iter()
            .map(|e| {
                serde_json::json!({
                    "id": e.id,
                    "label": e.label,
                    "description": e.description,
                    "severity": e.severity.to_string(),
                    "weight": e.weight,
                    "category": e.category.to_string(),
                })
            })
            .collect();
        println!("{}", serde_json::json!({ "patterns": entries }));
    } else {
        println!("Fabrication-indicator patterns ({}):\n", reg.len());
        for e in reg.entries() {
            println!("  [{}] {} ({})", e.severity.to_string().to_uppercase(), e.label, e.category);
            println!("  ID: {} | weight: {:+}", e.id, e.weight);
            println!("  {}\n", e.description);
        }
    }

    Ok(())
}
