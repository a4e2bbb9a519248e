//! Terminal table rendering for measurement results.
//!
//! This module draws the human-readable report: one row per measured file
//! with its raw, gzip, and brotli sizes, tinted by status (red over the
//! budget, yellow within 10% of it). An empty result set prints a single
//! no-matches message instead of a table.

use colored::{ColoredString, Colorize};

use crate::{
    config::ReportOptions,
    measure::{FileReport, Status},
    utils::format_bytes,
};

/// Fixed column labels, in render order.
const COLUMNS: [&str; 4] = ["File", "Raw", "GZip", "Brotli"];

/// Print the result table, or a no-matches message for an empty set.
///
/// The header is printed bold; each data row takes the color of its
/// status. A totals line follows the table.
pub fn render(reports: &[FileReport], options: &ReportOptions) {
    if reports.is_empty() {
        println!("{}", "✨ No files matched the glob pattern!".yellow());
        return;
    }

    let lines = table_lines(reports, options);

    println!("{}", lines[0].bold());
    for (line, report) in lines[1..].iter().zip(reports) {
        println!("{}", tint(line, report.status));
    }

    print_totals(reports, options);
}

/// Build the aligned table lines, header first, one line per result after
/// that. Pure so tests can assert on the layout without capturing stdout.
#[must_use]
pub fn table_lines(reports: &[FileReport], options: &ReportOptions) -> Vec<String> {
    let rows: Vec<[String; 4]> = reports.iter().map(|r| row_cells(r, options)).collect();

    let mut widths: [usize; 4] = [0; 4];
    for (i, label) in COLUMNS.iter().enumerate() {
        widths[i] = label.len();
    }
    for row in &rows {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(cell.len());
        }
    }

    let mut lines = Vec::with_capacity(rows.len() + 1);
    lines.push(format_line(&COLUMNS.map(String::from), &widths));

    for row in &rows {
        lines.push(format_line(row, &widths));
    }

    lines
}

/// Cells for one result row, sizes formatted per the report options.
fn row_cells(report: &FileReport, options: &ReportOptions) -> [String; 4] {
    [
        report.path.display().to_string(),
        format_bytes(report.raw, options.unit, options.decimals),
        format_bytes(report.gzip, options.unit, options.decimals),
        format_bytes(report.brotli, options.unit, options.decimals),
    ]
}

/// File left-aligned, sizes right-aligned, two spaces between columns.
fn format_line(cells: &[String; 4], widths: &[usize; 4]) -> String {
    format!(
        "{:<file$}  {:>raw$}  {:>gzip$}  {:>brotli$}",
        cells[0],
        cells[1],
        cells[2],
        cells[3],
        file = widths[0],
        raw = widths[1],
        gzip = widths[2],
        brotli = widths[3],
    )
}

/// Apply the status color to a rendered row.
fn tint(line: &str, status: Status) -> ColoredString {
    match status.color() {
        Some(color) => line.color(color),
        None => line.normal(),
    }
}

/// One-line aggregate across all measured files.
fn print_totals(reports: &[FileReport], options: &ReportOptions) {
    let raw: u64 = reports.iter().map(|r| r.raw).sum();
    let gzip: u64 = reports.iter().map(|r| r.gzip).sum();
    let brotli: u64 = reports.iter().map(|r| r.brotli).sum();

    println!(
        "\n{} {} files, {} raw, {} gzip, {} brotli",
        "📊 Total:".bold(),
        reports.len(),
        format_bytes(raw, options.unit, options.decimals),
        format_bytes(gzip, options.unit, options.decimals),
        format_bytes(brotli, options.unit, options.decimals),
    );
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;
    use crate::config::SizeUnit;

    fn report(path: &str, raw: u64, gzip: u64, brotli: u64) -> FileReport {
        FileReport {
            path: PathBuf::from(path),
            status: Status::Ok,
            raw,
            gzip,
            brotli,
        }
    }

    #[test]
    fn test_header_labels_and_order() {
        let reports = vec![report("a.js", 100, 50, 40)];
        let lines = table_lines(&reports, &ReportOptions::default());

        let header: Vec<&str> = lines[0].split_whitespace().collect();
        assert_eq!(header, vec!["File", "Raw", "GZip", "Brotli"]);
    }

    #[test]
    fn test_one_line_per_report_in_input_order() {
        let reports = vec![
            report("first.js", 100, 50, 40),
            report("second.js", 200, 90, 80),
        ];
        let lines = table_lines(&reports, &ReportOptions::default());

        assert_eq!(lines.len(), 3);
        assert!(lines[1].starts_with("first.js"));
        assert!(lines[2].starts_with("second.js"));
    }

    #[test]
    fn test_sizes_are_formatted_with_the_configured_unit() {
        let reports = vec![report("bundle.js", 2048, 1024, 512)];
        let options = ReportOptions {
            unit: SizeUnit::Kb,
            decimals: 1,
        };
        let lines = table_lines(&reports, &options);

        assert!(lines[1].contains("2.0KB"));
        assert!(lines[1].contains("1.0KB"));
        assert!(lines[1].contains("0.5KB"));
    }

    #[test]
    fn test_columns_are_aligned() {
        let reports = vec![
            report("a.js", 1, 1, 1),
            report("a-much-longer-name.js", 1_000_000, 500_000, 400_000),
        ];
        let lines = table_lines(&reports, &ReportOptions::default());

        let lengths: Vec<usize> = lines.iter().map(String::len).collect();
        assert!(lengths.windows(2).all(|pair| pair[0] == pair[1]));
    }
}
