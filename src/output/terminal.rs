// Colored terminal output for rankings and title listings.
//
// All terminal-specific formatting lives here; main.rs only decides which
// of these to call.

use colored::Colorize;

use crate::db::models::{RankedResult, TitleSummary};
use crate::text::rank::WordCount;
use crate::text::Analysis;

/// Display a stored ranking with its title and source URL.
pub fn display_ranking(result: &RankedResult) {
    println!(
        "\n{}",
        format!("=== Title: {} ===", super::truncate_chars(&result.title, 70)).bold()
    );
    println!("  {}", result.url.dimmed());
    println!();
    display_word_table(&result.words);
}

/// Display an offline analysis of a local file.
pub fn display_analysis(analysis: &Analysis, source: &str) {
    let title = analysis.title.as_deref().unwrap_or("(no title found)");
    println!(
        "\n{}",
        format!("=== Title: {} ===", super::truncate_chars(title, 70)).bold()
    );
    println!("  {}", source.dimmed());
    if !analysis.bounded {
        println!(
            "  {}",
            "Start/end markers not found; counted the whole document.".yellow()
        );
    }
    println!();
    display_word_table(&analysis.words);
}

/// Display ranked words as a numbered Word / Count table.
pub fn display_word_table(words: &[WordCount]) {
    if words.is_empty() {
        println!("  No words found.");
        return;
    }

    println!(
        "  {:>4}  {:<24} {:>8}",
        "Rank".dimmed(),
        "Word".dimmed(),
        "Count".dimmed(),
    );
    println!("  {}", "-".repeat(40).dimmed());

    for (i, wc) in words.iter().enumerate() {
        println!(
            "  {:>4}. {:<24} {:>8}",
            i + 1,
            super::truncate_chars(&wc.word, 24),
            wc.count,
        );
    }
    println!();
}

/// Display every stored title.
pub fn display_title_list(titles: &[TitleSummary]) {
    if titles.is_empty() {
        println!("No titles stored yet. Run `wordrank fetch <URL>` first.");
        return;
    }

    println!(
        "\n{}",
        format!("=== Stored Titles ({}) ===", titles.len()).bold()
    );
    println!();
    println!(
        "  {:<40} {:>5}  {:<19}  {}",
        "Title".dimmed(),
        "Words".dimmed(),
        "Added".dimmed(),
        "URL".dimmed(),
    );
    println!("  {}", "-".repeat(90).dimmed());

    for t in titles {
        println!(
            "  {:<40} {:>5}  {:<19}  {}",
            super::truncate_chars(&t.title, 37),
            t.word_count,
            t.created_at,
            t.url.dimmed(),
        );
    }
    println!();
}
