use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    match pathway_lib::run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // Tracing may not be installed yet when configuration fails.
            eprintln!("error: {e}");
            tracing::error!(error = %e, "Pathway failed to start");
            ExitCode::FAILURE
        }
    }
}
