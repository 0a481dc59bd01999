use serde::{Deserialize, Serialize};
use std::io;
use std::path::Path;
use thiserror::Error;

use crate::{Amount, Operation, Transaction, TransactionKind};

/// Errors that can occur when reading operation rows
#[derive(Debug, Error)]
pub enum CsvError {
    #[error("failed to open csv file: {0}")]
    Open(#[source] csv::Error),

    #[error("line {line}: failed to parse row: {source}")]
    Parse { line: usize, source: csv::Error },

    #[error("line {line}: unrecognized operation type '{op_type}'")]
    UnrecognizedType { line: usize, op_type: String },

    #[error("line {line}: {op_type} missing amount")]
    MissingAmount { line: usize, op_type: String },
}

#[derive(Debug, Deserialize)]
struct InputRow {
    r#type: String,
    amount: Option<f64>,
}

#[derive(Debug, Serialize)]
struct OutputRow {
    r#type: TransactionKind,
    amount: String,
    timestamp: String,
}

/// Read ledger operations from a csv file
pub fn read_operations(
    path: impl AsRef<Path>,
) -> Result<impl Iterator<Item = Result<Operation, CsvError>>, CsvError> {
    let reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path)
        .map_err(CsvError::Open)?;

    Ok(reader
        .into_deserialize::<InputRow>()
        .enumerate()
        .map(|(idx, result)| {
            let line = idx + 2; // 1-indexed, skip header
            let row = result.map_err(|source| CsvError::Parse { line, source })?;
            let op_type = row.r#type.as_str();
            let build: fn(Amount) -> Operation = match op_type {
                "deposit" => |amount| Operation::Deposit { amount },
                "withdrawal" => |amount| Operation::Withdrawal { amount },
                "credit" => |amount| Operation::TakeCredit { amount },
                "repayment" => |amount| Operation::PayCredit { amount },
                other => {
                    return Err(CsvError::UnrecognizedType {
                        line,
                        op_type: other.to_string(),
                    });
                }
            };
            let amount = row.amount.ok_or_else(|| CsvError::MissingAmount {
                line,
                op_type: op_type.to_string(),
            })?;
            Ok(build(Amount::new(amount)))
        }))
}

/// Write a transaction history in csv format
pub fn write_history<'a, W: io::Write>(
    writer: W,
    history: impl IntoIterator<Item = &'a Transaction>,
) -> Result<(), csv::Error> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);

    // written up front so an empty history still carries the header
    writer.write_record(["type", "amount", "timestamp"])?;

    for tx in history {
        let row = OutputRow {
            r#type: tx.kind(),
            amount: tx.amount().to_string(),
            timestamp: tx.timestamp().to_rfc3339(),
        };
        writer.serialize(&row)?;
    }

    writer.flush()?;
    Ok(())
}
