// minilex: C-like lexer and brace-depth tree viewer

use std::io::{self, Read};
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use minilex::constants::SYMBOL_TABLE_FILE;
use minilex::session::Session;
use minilex::tree::Nesting;
use minilex::ui::App;

#[derive(ValueEnum, Clone, Copy, Debug)]
enum NestingArg {
    /// `}` always returns to the root
    ResetToRoot,
    /// `}` closes one level
    Stack,
}

impl NestingArg {
    fn to_core(self) -> Nesting {
        match self {
            NestingArg::ResetToRoot => Nesting::ResetToRoot,
            NestingArg::Stack => Nesting::Stack,
        }
    }
}

#[derive(Parser)]
#[command(name = "minilex")]
#[command(about = "Tokenize a C-like snippet and group its tokens by brace depth")]
struct Cli {
    /// Source file to load (stdin in batch mode when omitted)
    file: Option<PathBuf>,

    /// Print tokens and tree, save the symbol table, and exit
    #[arg(short, long)]
    batch: bool,

    /// Where to write the symbol table
    #[arg(short, long, value_name = "PATH", default_value = SYMBOL_TABLE_FILE)]
    symbols: PathBuf,

    /// How `}` moves the insertion point when building the tree
    #[arg(long, value_enum, default_value_t = NestingArg::ResetToRoot)]
    nesting: NestingArg,
}

fn main() {
    let cli = Cli::parse();

    let result = if cli.batch { run_batch(&cli) } else { run_tui(&cli) };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn load_session(cli: &Cli) -> Result<Session, Box<dyn std::error::Error>> {
    let session = match &cli.file {
        Some(path) => {
            eprintln!("Reading {}...", path.display());
            Session::from_file(path)?
        }
        None => Session::new(),
    };
    Ok(session
        .with_nesting(cli.nesting.to_core())
        .with_symbols_path(&cli.symbols))
}

fn run_batch(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let mut session = load_session(cli)?;
    if cli.file.is_none() {
        let mut source = String::new();
        io::stdin().read_to_string(&mut source)?;
        session.set_source(source);
    }

    session.analyze();
    println!("{}", session.token_listing());

    session.build_tree();
    print!("{}", session.tree_listing());

    for diagnostic in session.diagnostics() {
        eprintln!("Warning: {}", diagnostic);
    }

    let path = session.save_symbols()?;
    eprintln!("Symbol table saved to '{}'", path.display());

    Ok(())
}

fn run_tui(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let session = load_session(cli)?;

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create and run app
    let mut app = App::new(session);
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res?;
    Ok(())
}
