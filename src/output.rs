use colored::Colorize;

use cachesweep::walker::format_size;

pub fn print_scan_header(label: &str) {
    println!("{}", format!("=== {label} ===").bold().white());
}

pub fn print_scan_entry(path: &str, size: &str) {
    println!("  {}  {}", path.dimmed(), size.yellow());
}

pub fn print_region_total(label: &str, total: u64) {
    println!(
        "  {} {}",
        format!("{label} total:").bold(),
        format_size(total).green()
    );
    println!();
}

pub fn print_grand_total(total: u64) {
    println!(
        "  {:<30} {}",
        "Total reclaimable:".bold(),
        format_size(total).green().bold()
    );
    println!();
}

pub fn print_info_row(label: &str, bytes: u64) {
    println!("  {:<25} {}", label, format_size(bytes).green());
}

pub fn print_warning(msg: &str) {
    println!("{} {}", "Warning:".red().bold(), msg.red());
}

pub fn print_dry_run_footer() {
    println!(
        "{}",
        "This was a dry run. Re-run with --confirm to delete."
            .yellow()
            .bold()
    );
}

pub fn print_clear_complete(freed: u64) {
    println!(
        "{} {}",
        "Cleared!".green().bold(),
        format!("{} freed.", format_size(freed)).green()
    );
}

pub fn print_no_confirm_warning() {
    println!(
        "{}",
        "No --confirm flag provided. Running as dry-run scan."
            .yellow()
            .bold()
    );
    println!();
}
