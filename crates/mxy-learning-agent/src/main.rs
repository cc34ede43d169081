use mxy_runtime::ServerRuntime;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = std::env::args().skip(1).collect();
    mxy_learning_agent::launch(&ServerRuntime::new(), args).await?;
    Ok(())
}
