use miette::Result;

#[tokio::main]
async fn main() -> Result<()> {
    people_table::cli::run().await?;
    Ok(())
}
