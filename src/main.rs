use cyclic::app::App;
use cyclic::cli::Opt;
use cyclic::stage::STAGES;

use log::error;
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};
use structopt::StructOpt;
use structopt_flags::LogLevel;

fn main() {
    let opt: Opt = Opt::from_args();

    TermLogger::init(
        opt.verbose.get_level_filter(),
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )
    .unwrap();

    if let Some(shell) = opt.completions {
        Opt::clap().gen_completions_to("cyclic", shell, &mut std::io::stdout());
        return;
    }

    if opt.list_stages {
        for stage in STAGES {
            println!("{:<12} {}x{}", stage.name, stage.size.width, stage.size.height);
        }

        return;
    }

    let config = match opt.to_app_config() {
        Ok(config) => config,
        Err(message) => {
            error!("{}", message);
            std::process::exit(1);
        }
    };

    if let Err(error) = App::new(config).run() {
        error!("{}", error);
        std::process::exit(1);
    }
}
