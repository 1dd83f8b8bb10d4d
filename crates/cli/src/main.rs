use clap::Parser;
use runc::Cli;
use runc_core::ExitCode;

fn main() {
    // Logs go to stderr so stdout carries only the program's output
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let code = match cli.execute() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Unexpected error occurred: {e:#}");
            ExitCode::InternalError
        }
    };

    std::process::exit(code.code());
}
