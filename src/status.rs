// Store status display: file size, title and word-row counts, newest titles.

use std::path::Path;

use anyhow::Result;

use crate::db::Database;

/// Display store status to the terminal.
pub async fn show(db: &dyn Database, db_path: &Path) -> Result<()> {
    if !db_path.exists() {
        println!("Database: not initialized");
        println!("\nRun `wordrank init` to set up the database.");
        return Ok(());
    }

    let file_size = std::fs::metadata(db_path)
        .map(|m| format_bytes(m.len()))
        .unwrap_or_else(|_| "unknown".to_string());
    println!("Database: {} ({})", db_path.display(), file_size);

    let stats = db.stats().await?;
    println!(
        "Stored titles: {} ({} ranked word rows)",
        stats.titles, stats.word_rows
    );

    if stats.titles == 0 {
        println!("  Run `wordrank fetch <URL>` to add a book");
        return Ok(());
    }

    let mut titles = db.list_titles().await?;
    titles.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
    println!("Most recent:");
    for t in titles.iter().take(5) {
        println!("  {} ({})", t.title, t.created_at);
    }

    Ok(())
}

fn format_bytes(bytes: u64) -> String {
    if bytes < 1024 {
        format!("{} B", bytes)
    } else if bytes < 1024 * 1024 {
        format!("{:.1} KB", bytes as f64 / 1024.0)
    } else {
        format!("{:.1} MB", bytes as f64 / (1024.0 * 1024.0))
    }
}
