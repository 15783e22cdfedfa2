use clap::Parser;

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
	color_eyre::install()?;
	let args = carlot_api::Args::parse();
	carlot_api::run(args).await
}
