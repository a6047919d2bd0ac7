use clap::Parser;
use colored::Colorize;
use cppgrep::{grep_all, output, FilterSpec, GrepRequest, QuerySpec};
use std::path::PathBuf;
use std::process::ExitCode;

// Exit statuses: 0 success, 1 argument parse failure, 2 grep run failure
// (missing input file).
const EXIT_USAGE: u8 = 1;
const EXIT_GREP_FAILED: u8 = 2;

#[derive(Parser)]
#[command(name = "cppgrep")]
#[command(about = "Greps intelligently through C++ code", long_about = None)]
#[command(version)]
struct Cli {
    /// Grep for class declarations only
    #[arg(long = "class")]
    classes: bool,

    /// Grep for class/struct template declarations only
    #[arg(long = "template")]
    templates: bool,

    /// Grep for struct declarations only
    #[arg(long = "struct")]
    structs: bool,

    /// Grep for function declarations only
    #[arg(long = "function")]
    functions: bool,

    /// Grep for variable/member/param declarations only
    #[arg(long = "variable")]
    variables: bool,

    /// Optional grep query string
    #[arg(short, long)]
    query: Option<String>,

    /// Ignore case when using grep queries
    #[arg(short, long)]
    ignore_case: bool,

    /// Source files to grep
    #[arg(required = true, value_name = "FILES")]
    files: Vec<PathBuf>,
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // --help and --version land here too; they are not failures.
            let _ = err.print();
            return if err.use_stderr() {
                ExitCode::from(EXIT_USAGE)
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    let request = GrepRequest {
        files: cli.files,
        filter: FilterSpec {
            classes: cli.classes,
            templates: cli.templates,
            structs: cli.structs,
            functions: cli.functions,
            variables: cli.variables,
        },
        query: QuerySpec {
            needle: cli.query.unwrap_or_default(),
            ignore_case: cli.ignore_case,
        },
    };

    match grep_all(&request, |result| output::print_result(&result)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {}", "error:".red(), err);
            ExitCode::from(EXIT_GREP_FAILED)
        }
    }
}
