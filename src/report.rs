//! 結果の出力

use crate::cli::OutputFormat;
use crate::error::Result;
use ingredient_barcode_common::{format_line, LookupResult};
use std::io::Write;

/// 照会結果を入力順に書き出す
pub fn write_results<W: Write>(
    out: &mut W,
    results: &[LookupResult],
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Text => {
            for result in results {
                writeln!(out, "{}", format_line(result))?;
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, results)?;
            writeln!(out)?;
        }
    }
    Ok(())
}
