use std::io;
use std::process;

use clap::Parser;
use payroll_deductions::cli::{Cli, Menu};
use payroll_deductions::logging;
use tracing::{debug, error, info};

fn main() {
    let cli = Cli::parse();
    logging::init_logger(cli.verbose);
    debug!(?cli, "Parsed command line");

    let session = match cli.session() {
        Ok(session) => session,
        Err(e) => {
            error!(error = %e, kind = ?e.kind(), "Failed to prepare payroll run");
            eprintln!("Error: {}", e);
            process::exit(2);
        }
    };

    if cli.interactive {
        let stdin = io::stdin();
        let mut menu = Menu::new(stdin.lock(), io::stdout(), &session);
        if let Err(e) = menu.run() {
            error!(error = %e, "Console I/O failed");
            process::exit(1);
        }
        return;
    }

    match session.generate() {
        Ok((path, content)) => {
            info!(path = %path.display(), "Saved payroll report");
            println!("Report written to: {}", path.display());
            if cli.print {
                println!("\n---- Report contents ----\n");
                print!("{}", content);
            }
        }
        Err(e) => {
            error!(error = %e, kind = ?e.kind(), "Failed to generate payroll report");
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}
