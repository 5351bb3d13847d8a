use mall::prelude::*;
use tokio::io::AsyncWriteExt;

const USAGE: &str = "Usage: mall report [fixture.csv] [--partitions N] | mall bits <tokens>";

/// Parsed command line
#[derive(Debug, PartialEq, Eq)]
enum Command {
    Report {
        fixture: Option<String>,
        execution: Execution,
    },
    Bits {
        tokens: String,
    },
}

#[tokio::main]
async fn main() {
    init_logger();
    let args: Vec<String> = std::env::args().collect();

    CliApp::new("mall")
        .run(|writer| async move { run(writer, parse_args(&args)?).await })
        .await
}

/// Parse and validate command-line arguments
fn parse_args(args: &[String]) -> Result<Command, AppError> {
    let invalid = || AppError::InvalidArguments(USAGE.to_string());

    match args.get(1).map(String::as_str) {
        Some("bits") => match &args[2..] {
            [tokens] => Ok(Command::Bits {
                tokens: tokens.clone(),
            }),
            _ => Err(invalid()),
        },
        Some("report") | None => {
            let mut fixture = None;
            let mut execution = Execution::Auto;
            let mut rest = args.iter().skip(2);
            while let Some(arg) = rest.next() {
                if arg == "--partitions" {
                    let partitions = rest
                        .next()
                        .and_then(|n| n.parse::<usize>().ok())
                        .filter(|n| *n > 0)
                        .ok_or_else(invalid)?;
                    execution = Execution::Partitioned(partitions);
                } else if fixture.is_none() && !arg.starts_with("--") {
                    fixture = Some(arg.clone());
                } else {
                    return Err(invalid());
                }
            }
            Ok(Command::Report { fixture, execution })
        }
        Some(_) => Err(invalid()),
    }
}

/// Main application logic - runs the selected command and writes to stdout
async fn run(mut writer: ReportWriter, command: Command) -> Result<(), AppError> {
    match command {
        Command::Report { fixture, execution } => {
            let source: Box<dyn DatasetSource> = match fixture {
                Some(path) => Box::new(CsvFileSource::new(path)),
                None => Box::new(ClassicOnlineStore),
            };
            let mall = source.load().await?;
            let report = Report::build(&mall, execution)?;
            write_report(&report, &mut writer).await?;
        }
        Command::Bits { tokens } => {
            let bits = collect_serial(tokens.split(','), &BitString)?;
            writer.write_all(format!("{bits}\n").as_bytes()).await?;
            writer.flush().await?;
        }
    }

    Ok(())
}
