use ngspark::{cli::Cli, log};

#[tokio::main]
async fn main() {
    let args: Vec<String> = std::env::args().collect();
    let Some(cli) = Cli::parse_args(&args) else {
        return;
    };
    log::init_logging(cli.verbose);

    if let Err(err) = cli.run().await {
        tracing::error!("{} error: {}", err.category(), err);
        std::process::exit(1);
    }
}
