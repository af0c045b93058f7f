//! Stdout dump of the first rows plus a per-column fill summary,
//! the equivalent of eyeballing the raw file before charting it.

use anyhow::{Context, Result};
use log::info;

use crate::{cli::PreviewArgs, io_utils, table};

pub fn execute(args: &PreviewArgs) -> Result<()> {
    let delimiter = io_utils::resolve_input_delimiter(&args.input, args.delimiter);
    let encoding = io_utils::resolve_encoding(args.input_encoding.as_deref())?;
    let mut reader = io_utils::open_csv_reader_from_path(&args.input, delimiter, true)?;
    let headers = io_utils::reader_headers(&mut reader, encoding)?;

    let mut head = Vec::new();
    let mut non_empty = vec![0usize; headers.len()];
    let mut total = 0usize;
    for (idx, record) in reader.byte_records().enumerate() {
        let record = record.with_context(|| format!("Reading row {}", idx + 2))?;
        let decoded = io_utils::decode_record(&record, encoding)?;
        for (col, cell) in decoded.iter().enumerate().take(non_empty.len()) {
            if !cell.trim().is_empty() {
                non_empty[col] += 1;
            }
        }
        total += 1;
        if idx < args.rows {
            head.push(decoded);
        }
    }

    table::print_table(&headers, &head);
    println!();

    let summary_headers = vec![
        "column".to_string(),
        "non_empty".to_string(),
        "rows".to_string(),
    ];
    let summary_rows: Vec<Vec<String>> = headers
        .iter()
        .zip(&non_empty)
        .map(|(name, count)| vec![name.clone(), count.to_string(), total.to_string()])
        .collect();
    table::print_table(&summary_headers, &summary_rows);

    info!(
        "Previewed {} of {} row(s) from {:?}",
        head.len(),
        total,
        args.input
    );
    Ok(())
}
