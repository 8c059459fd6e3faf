//! FlatCalc
//!
//! Reads `a op b` lines from stdin and prints the results.

use std::io::{self, BufRead};

use flatstore::calc::{parse_expression, DispatchTable};
use tracing_subscriber::{fmt, EnvFilter};

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let table = DispatchTable::new();

    println!("Calculator (e.g. '10 + 5'), Ctrl+D to exit:");
    println!("─────────────────────────────────────────────────");

    for line in io::stdin().lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                tracing::error!("stdin read failed: {}", e);
                break;
            }
        };
        if line.trim().is_empty() {
            continue;
        }

        // One bad line never stops the loop
        let outcome = parse_expression(&line)
            .and_then(|expr| expr.evaluate(&table).map(|result| (expr, result)));
        match outcome {
            Ok((expr, result)) => println!("{} = {}", expr, result),
            Err(e) => {
                tracing::debug!(input = %line.trim(), "rejected");
                eprintln!("Error: {}", e);
            }
        }
    }

    println!("─────────────────────────────────────────────────");
    println!("Calculator finished.");
}
