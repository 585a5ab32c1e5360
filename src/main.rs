use clap::Parser;
use form_state::cli::commands::{cmd_capture, cmd_forget, cmd_restore, cmd_show};
use form_state::cli::config::{
    Cli, Commands, build_store_options, load_config, resolve_state_file, resolve_trace_file,
};
use form_state::persist::store::StateFile;
use form_state::trace::logger::TraceLogger;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref());

    // Resolve file locations: CLI > config > defaults
    let state_file = resolve_state_file(cli.state.as_deref(), &config);
    let trace_file = resolve_trace_file(cli.trace.as_deref(), &config);

    let mut store = StateFile::new(&state_file).with_options(build_store_options(&config));
    if let Some(path) = &trace_file {
        store = store.with_tracer(TraceLogger::new(path));
    }

    if cli.verbose > 1 {
        eprintln!("State file: {}", state_file);
        if let Some(path) = &trace_file {
            eprintln!("Trace file: {}", path);
        }
    }

    match cli.command {
        Commands::Capture { tree, page } => {
            cmd_capture(&store, &tree, &page, cli.verbose)?;
        }
        Commands::Restore { tree, page, output } => {
            cmd_restore(&store, &tree, &page, output.as_deref(), cli.verbose)?;
        }
        Commands::Show { page } => {
            cmd_show(&store, page.as_deref())?;
        }
        Commands::Forget { page } => {
            cmd_forget(&store, &page)?;
        }
    }

    Ok(())
}
