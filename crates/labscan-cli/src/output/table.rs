use labscan_core::analysis::Analysis;
use labscan_core::{LabResult, TrendPoint};

pub fn print_analysis(analysis: &Analysis) {
    println!("{}\n", analysis.message);
    if !analysis.results.is_empty() {
        print!("{}", format_results(&analysis.results));
    }
}

/// Render results as aligned columns, flagging values outside their range.
pub fn format_results(results: &[LabResult]) -> String {
    let rows: Vec<[String; 5]> = results
        .iter()
        .map(|r| {
            let marker = if r.status.is_normal() { "" } else { " (!)" };
            [
                r.parameter.clone(),
                r.value.to_string(),
                r.unit.clone(),
                r.range.to_string(),
                format!("{}{}", r.status, marker),
            ]
        })
        .collect();

    let headers = ["Parameter", "Value", "Unit", "Range", "Status"];
    let mut widths = headers.map(str::len);
    for row in &rows {
        for (w, cell) in widths.iter_mut().zip(row) {
            *w = (*w).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    push_row(&mut out, &headers.map(String::from), &widths);
    out.push_str(&format!(
        "  {}\n",
        "-".repeat(widths.iter().sum::<usize>() + 2 * (widths.len() - 1))
    ));
    for row in &rows {
        push_row(&mut out, row, &widths);
    }
    out
}

fn push_row(out: &mut String, cells: &[String; 5], widths: &[usize; 5]) {
    let line: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, w)| format!("{:<width$}", cell, width = w))
        .collect();
    out.push_str("  ");
    out.push_str(line.join("  ").trim_end());
    out.push('\n');
}

pub fn print_trend(parameter: &str, points: &[TrendPoint]) {
    println!("{parameter} (synthetic, last {} months)\n", points.len());
    for p in points {
        println!("  {}  {:>12.2}", p.date, p.value);
    }
}
