use std::process::ExitCode;

fn main() -> ExitCode {
    ongkir_cli::run()
}
