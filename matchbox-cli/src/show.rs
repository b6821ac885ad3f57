use colored::Colorize;
use matchbox_lib::PreferenceReconciler;

pub fn handle(reconciler: &PreferenceReconciler) {
    for entry in reconciler.entries() {
        if entry.is_preferred() {
            println!(
                "{:>4}. {} ({})",
                entry.order(),
                entry.name().bold(),
                entry.resource_id()
            );
        } else {
            println!("    - {} ({})", entry.name().dimmed(), entry.resource_id());
        }
    }

    let batches = reconciler.batches();
    println!(
        "{} to insert, {} to update, {} to delete",
        batches.insert.len().to_string().green(),
        batches.update.len().to_string().yellow(),
        batches.delete.len().to_string().red()
    );
}
