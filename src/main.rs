use termprompt::{
    cli::{get_log_level_from_verbose, parse_cli, Runner},
    constants::exit_codes,
    error::default_error_handler,
};

fn main() {
    let cli = parse_cli();
    env_logger::Builder::new().filter_level(get_log_level_from_verbose(cli.verbose)).init();

    let runner = Runner::new(cli);
    let config = runner.output_config();
    match runner.run() {
        Ok(exit_codes::SUCCESS) => {}
        Ok(code) => std::process::exit(code),
        Err(err) => default_error_handler(err, config),
    }
}
