use std::future::Future;

use tracing::{error, warn};

use super::error::AppError;

/// Buffered stdout handed to the application body
pub type ReportWriter = tokio::io::BufWriter<tokio::io::Stdout>;

/// Reusable CLI application runner that handles:
/// - Signal handling (SIGINT, SIGTERM, SIGHUP)
/// - Stdout buffering
/// - Exit codes (0 = success, 1 = error, 130 = SIGINT, 143 = SIGTERM, 129 = SIGHUP)
pub struct CliApp {
    name: String,
}

impl CliApp {
    /// Create a new CLI application runner
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Run the application body, then exit the process
    ///
    /// The body receives a buffered stdout writer and is responsible for
    /// flushing it. This function never returns.
    pub async fn run<F, Fut>(self, main_fn: F) -> !
    where
        F: FnOnce(ReportWriter) -> Fut,
        Fut: Future<Output = Result<(), AppError>>,
    {
        let writer = tokio::io::BufWriter::new(tokio::io::stdout());
        let code = self.run_until_signal(main_fn(writer)).await;
        std::process::exit(code);
    }

    /// Race the body against termination signals and map the outcome to an exit code
    async fn run_until_signal<Fut>(&self, body: Fut) -> i32
    where
        Fut: Future<Output = Result<(), AppError>>,
    {
        tokio::select! {
            result = body => match result {
                Ok(()) => 0,
                Err(e) => {
                    error!(app = %self.name, "{e}");
                    eprintln!("Error: {e}");
                    1
                }
            },
            signal_code = wait_for_signal() => signal_code,
        }
    }
}

/// Wait for any Unix signal (SIGINT, SIGTERM, SIGHUP) or Ctrl+C
/// Returns the exit code to use (130 for SIGINT, 143 for SIGTERM, etc.)
async fn wait_for_signal() -> i32 {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{SignalKind, signal};

        let (Ok(mut sigterm), Ok(mut sigint), Ok(mut sighup)) = (
            signal(SignalKind::terminate()),
            signal(SignalKind::interrupt()),
            signal(SignalKind::hangup()),
        ) else {
            warn!("Failed to install signal handlers");
            return std::future::pending().await;
        };

        tokio::select! {
            _ = sigterm.recv() => {
                eprintln!("Received SIGTERM");
                143 // 128 + 15
            }
            _ = sigint.recv() => {
                eprintln!("Received SIGINT");
                130 // 128 + 2
            }
            _ = sighup.recv() => {
                eprintln!("Received SIGHUP");
                129 // 128 + 1
            }
        }
    }

    #[cfg(not(unix))]
    {
        if tokio::signal::ctrl_c().await.is_err() {
            warn!("Failed to install Ctrl+C handler");
            return std::future::pending().await;
        }
        eprintln!("Received Ctrl+C");
        130
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_app_new() {
        let app = CliApp::new("test-app");
        assert_eq!(app.name(), "test-app");
    }

    #[tokio::test]
    async fn successful_body_exits_zero() {
        let app = CliApp::new("test-app");
        assert_eq!(app.run_until_signal(async { Ok(()) }).await, 0);
    }

    #[tokio::test]
    async fn failing_body_exits_one() {
        let app = CliApp::new("test-app");
        let code = app
            .run_until_signal(async { Err(AppError::InvalidArguments("bad".to_string())) })
            .await;

        assert_eq!(code, 1);
    }
}
