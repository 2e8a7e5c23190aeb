use std::env;

use matrix_client::{Computed, MatrixClient, input};
use matrix_engine::Operation;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();

    let addr = args
        .get(1)
        .cloned()
        .unwrap_or_else(|| "localhost:50051".to_string());
    let mode = args.get(2).cloned().unwrap_or_else(|| "history".to_string());

    match mode.as_str() {
        "random" => {
            let operation: Operation = args.get(3).map_or("determinant", String::as_str).parse()?;
            let rows: usize = args.get(4).unwrap_or(&"3".to_string()).parse()?;
            let cols: usize = args.get(5).unwrap_or(&"3".to_string()).parse()?;

            let mut rng = rand::thread_rng();
            let a = input::random_matrix(rows, cols, &mut rng);
            let b = operation.is_binary().then(|| match operation {
                Operation::Multiply => input::random_matrix(cols, rows, &mut rng),
                _ => input::random_matrix(rows, cols, &mut rng),
            });

            println!("Generated {}x{} matrix A", rows, cols);
            if let Some(b) = &b {
                println!("Generated {}x{} matrix B", b.len(), b.first().map_or(0, Vec::len));
            }
            run(&addr, operation, a, b).await?;
        }
        "csv" => {
            let operation: Operation = args.get(3).map_or("", String::as_str).parse()?;
            let a_path = args.get(4).ok_or("missing path to matrix A")?;
            let a = input::parse_csv(&std::fs::read_to_string(a_path)?)?;
            let b = match args.get(5) {
                Some(path) => Some(input::parse_csv(&std::fs::read_to_string(path)?)?),
                None => None,
            };

            println!("Loaded {}x{} matrix A from {}", a.len(), a[0].len(), a_path);
            run(&addr, operation, a, b).await?;
        }
        "history" => {
            let limit: u32 = args.get(3).unwrap_or(&"0".to_string()).parse()?;

            let mut client = MatrixClient::connect(addr.clone()).await?;
            let records = client.history(limit).await?;
            println!("{} recent operations:", records.len());
            for r in records {
                let b = match (r.b_rows, r.b_cols) {
                    (Some(rows), Some(cols)) => format!(" × {}x{}", rows, cols),
                    _ => String::new(),
                };
                println!(
                    "  #{} {} {}x{}{} in {:.3} ms",
                    r.id, r.operation, r.a_rows, r.a_cols, b, r.elapsed_time_ms
                );
            }
        }
        _ => {
            eprintln!("Unknown mode: {}", mode);
            eprintln!("Usage: {} <addr> <mode> [args...]", args[0]);
            eprintln!("Modes:");
            eprintln!("  random <op> <rows> <cols>   - Run <op> on random matrices");
            eprintln!("  csv <op> <a.csv> [b.csv]    - Run <op> on matrices read from CSV");
            eprintln!("  history [limit]             - List recent operations (default)");
            eprintln!("Operations: add subtract multiply transpose determinant inverse");
            std::process::exit(1);
        }
    }

    Ok(())
}

async fn run(
    addr: &str,
    operation: Operation,
    a: Vec<Vec<f64>>,
    b: Option<Vec<Vec<f64>>>,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut client = MatrixClient::connect(addr).await?;
    let execution = client.execute(operation, a, b).await?;

    match execution.value {
        Computed::Scalar(v) => println!("{} = {}", operation, v),
        Computed::Matrix(m) => {
            let cols = m.first().map_or(0, |row| row.len());
            println!("Result ({}x{}):", m.len(), cols);
            for row in m.iter().take(10) {
                println!("  {:?}", row);
            }
            if m.len() > 10 {
                println!("  ... {} more rows", m.len() - 10);
            }
        }
    }
    println!("Computed in {:.3} ms", execution.elapsed_ms);

    Ok(())
}
