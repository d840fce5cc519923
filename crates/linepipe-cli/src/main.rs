use linepipe_cli::run;
use linepipe_core::set_verbose;
use linepipe_stages::StageRegistry;
use std::env;
use std::io::{self, BufReader};
use std::process::ExitCode;
use std::sync::{Arc, Mutex};

fn main() -> ExitCode {
    set_verbose(env::var_os("LINEPIPE_VERBOSE").is_some());

    let args: Vec<String> = env::args().skip(1).collect();
    let stdin = BufReader::new(io::stdin());
    let stdout: linepipe_core::OutputSink = Arc::new(Mutex::new(io::stdout()));
    let registry = StageRegistry::with_builtin_stages();

    let code = run(&args, stdin, stdout, &registry, io::stdout());
    ExitCode::from(u8::try_from(code).unwrap_or(u8::MAX))
}
