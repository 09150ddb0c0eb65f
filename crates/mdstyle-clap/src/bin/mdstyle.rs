//! `mdstyle`: list and inspect the built-in themes.

use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand};
use mdstyle_clap::{
    render_theme, render_theme_list, CliError, ElementSelector, ShowFormat, ThemeArgs,
};

#[derive(Parser, Debug)]
#[command(name = "mdstyle", version, about = "Inspect Markdown publishing themes")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List available themes
    List,
    /// Print a resolved theme
    Show {
        #[command(flatten)]
        theme: ThemeArgs,

        /// Output format
        #[arg(long, value_enum, default_value_t = ShowFormat::Yaml)]
        format: ShowFormat,

        /// Only print one element, e.g. `h1` or `inline:td`
        #[arg(long, value_name = "ELEMENT")]
        element: Option<ElementSelector>,
    },
}

fn run(cli: Cli) -> anyhow::Result<String> {
    let registry = mdstyle::builtin();
    match cli.command {
        Commands::List => Ok(render_theme_list(registry, console::colors_enabled())),
        Commands::Show {
            theme: args,
            format,
            element,
        } => {
            let config = args.to_config()?;
            let theme = config.resolve(registry).map_err(CliError::from)?;
            let element = element.as_ref().map(ElementSelector::as_pair);
            let out = render_theme(&config.theme, &theme, format, element)
                .with_context(|| format!("showing theme '{}'", config.theme))?;
            Ok(out)
        }
    }
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    match run(Cli::parse()) {
        Ok(out) => {
            print!("{}", out);
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {:#}", err);
            ExitCode::from(exit_code(&err))
        }
    }
}

/// Exit code for a failed run, looking through any added context.
fn exit_code(err: &anyhow::Error) -> u8 {
    err.downcast_ref::<CliError>().map_or(1, CliError::exit_code)
}
