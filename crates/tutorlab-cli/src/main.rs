mod cli;

use tutorlab_core::interrupt;

/// 130 for interrupt-driven exits (128 + SIGINT), 1 for everything else.
fn exit_code(e: &anyhow::Error) -> i32 {
    if e.downcast_ref::<interrupt::InterruptedError>().is_some() {
        130
    } else {
        1
    }
}

fn main() {
    if let Err(e) = cli::run() {
        let code = exit_code(&e);
        if code != 130 {
            eprintln!("{e:#}"); // pretty anyhow chain
        }
        std::process::exit(code);
    }
}
