use std::env;
use std::io;
use std::process::ExitCode;

use cart_ledger::csv::{read_operations, write_history};
use cart_ledger::BankAccount;
use tokio_stream::wrappers::ReceiverStream;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::WARN.into())
                .from_env_lossy(),
        )
        .with_writer(io::stderr)
        .init();

    let mut args = env::args().skip(1);
    let Some(path) = args.next() else {
        eprintln!("usage: cart-ledger <operations.csv> [credit-limit]");
        return ExitCode::from(2);
    };

    let account = match args.next() {
        None => Ok(BankAccount::new()),
        Some(limit) => match limit.parse::<f64>() {
            Ok(limit) => BankAccount::with_credit_limit(limit).map_err(|e| e.to_string()),
            Err(e) => Err(format!("credit limit '{limit}': {e}")),
        },
    };
    let mut account = match account {
        Ok(account) => account,
        Err(reason) => {
            error!(%reason, "invalid credit limit");
            return ExitCode::from(2);
        }
    };

    if !path.ends_with(".csv") {
        warn!(path, "input file seems to not be a csv file");
    }

    let operations = match read_operations(path) {
        Ok(operations) => operations,
        Err(e) => {
            error!("{e}");
            return ExitCode::FAILURE;
        }
    };

    let (op_sender, op_receiver) = tokio::sync::mpsc::channel(16);

    tokio::spawn(async move {
        for result in operations {
            match result {
                Ok(op) => {
                    if op_sender.send(op).await.is_err() {
                        break;
                    }
                }
                Err(e) => {
                    warn!("{e}");
                }
            }
        }
    });

    account.run(ReceiverStream::new(op_receiver)).await;

    info!(
        balance = %account.balance(),
        credit_loan = %account.credit_loan(),
        available_credit = %account.available_credit(),
        transactions = account.transaction_history().len(),
        "replay finished"
    );

    if let Err(e) = write_history(io::stdout().lock(), account.transaction_history()) {
        error!("failed to write history: {e}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
