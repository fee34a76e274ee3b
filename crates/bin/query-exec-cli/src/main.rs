//! Run a SQL query read from stdin and print the result as JSON.

use std::io::Read as _;

#[tokio::main(flavor = "current_thread")]
async fn main() -> color_eyre::eyre::Result<()> {
    color_eyre::install()?;
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let connection_string: String = envfury::must("QUERY_EXEC_CONNECTION")?;

    let mut query = String::new();
    std::io::stdin().read_to_string(&mut query)?;
    let query = query.trim();

    let result = query_exec::execute(&connection_string, query).await?;

    println!("{}", serde_json::to_string_pretty(&result)?);

    Ok(())
}
