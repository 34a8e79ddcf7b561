//! CSV rendering of a distribution.
//!
//! Produces the flat export the app offers behind the share button: one row
//! per entry, then trailer rows with the totals and the transaction inputs.
//! Writing the bytes anywhere is the host's concern.

use csv::WriterBuilder;
use serde::Serialize;

use crate::{Distribution, Division, EngineError, ResultEngine};

#[derive(Serialize)]
struct ExportRow<'a> {
    name: &'a str,
    rate: String,
    difference: String,
    amount: String,
}

/// Renders a distribution as CSV text.
///
/// Amounts are rounded to two decimals and rates to one, here and nowhere
/// earlier; the stored distribution stays unrounded.
pub fn to_csv(distribution: &Distribution, sum: f64, division: Division) -> ResultEngine<String> {
    let mut writer = WriterBuilder::new().has_headers(false).from_writer(vec![]);

    writer
        .write_record(["Ebene", "Satz (%)", "Differenz (%)", "Betrag (€)"])
        .map_err(export_error)?;

    for entry in &distribution.entries {
        writer
            .serialize(ExportRow {
                name: &entry.name,
                rate: format!("{:.1}", entry.rate),
                difference: format!("{:.1}", entry.difference),
                amount: format!("{:.2}", entry.amount),
            })
            .map_err(export_error)?;
    }

    let total_difference = format!("{:.1}", distribution.total_difference);
    let total_amount = format!("{:.2}", distribution.total_amount);
    writer
        .write_record(["Gesamt", "", total_difference.as_str(), total_amount.as_str()])
        .map_err(export_error)?;
    let sum = format!("{sum}");
    writer
        .write_record(["Bewertungssumme", "", "", sum.as_str()])
        .map_err(export_error)?;
    writer
        .write_record(["Sparte", "", "", division.label()])
        .map_err(export_error)?;

    let data = writer
        .into_inner()
        .map_err(export_error)?;
    String::from_utf8(data).map_err(export_error)
}

fn export_error(err: impl std::fmt::Display) -> EngineError {
    EngineError::Export(err.to_string())
}
