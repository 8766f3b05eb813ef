use clap::Parser;
use course_cli::{Cli, CliError, Session, UreqTransport};
use course_core::{CourseApi, CourseClient};

fn main() -> Result<(), CliError> {
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let cli = Cli::parse();
    tracing::info!(api_url = %cli.api_url, "starting course client");

    let api = CourseApi::new(CourseClient::new(&cli.api_url), UreqTransport::new());
    let mut session = Session::new(api);

    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    course_cli::run(&mut session, stdin.lock(), &mut stdout)?;
    Ok(())
}
