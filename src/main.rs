use std::process::ExitCode;

fn main() -> ExitCode {
    match endgame_bound::app::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::from(err.exit_code())
        }
    }
}
