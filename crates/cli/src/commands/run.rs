use std::io;

use tracing::debug;

use runc_core::{ExitCode, LanguageRegistry, RunRequest, Runner, Settings, SystemExecutor};

pub fn run_command(registry: &LanguageRegistry, settings: &Settings, request: &RunRequest) -> ExitCode {
    debug!("Running with settings: {:?}", settings);

    let executor = SystemExecutor;
    let code = Runner::new(registry, settings, &executor).run(
        request,
        &mut io::stdout().lock(),
        &mut io::stderr().lock(),
    );

    debug!("Finished with {}", code);
    code
}
