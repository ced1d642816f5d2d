//! devstart CLI - Scaffold production-ready front-end projects

use anyhow::Result;
use clap::{Parser, Subcommand};
use devstart_core::tui::CreateArgs;

#[derive(Parser, Debug)]
#[command(name = "devstart")]
#[command(
    about = "A powerful CLI tool that scaffolds production-ready projects with your preferred tech stack"
)]
#[command(version)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create a new project
    Init(CliInitArgs),
}

#[derive(Parser, Debug)]
pub struct CliInitArgs {
    /// Project name (also the target directory)
    pub name: Option<String>,

    /// Framework (nextjs-app, nextjs-pages, vite-react, remix)
    #[arg(long)]
    pub framework: Option<String>,

    /// Styling solution (tailwind, css-modules, styled-components, none)
    #[arg(long)]
    pub styling: Option<String>,

    /// UI component kit (shadcn, radix, headless, none)
    #[arg(long)]
    pub ui: Option<String>,

    /// State management (zustand, redux, jotai, context, none)
    #[arg(long)]
    pub state: Option<String>,

    /// Data fetching (tanstack-query, swr, apollo, fetch)
    #[arg(long)]
    pub data: Option<String>,

    /// Database & backend (supabase, firebase, prisma, mongodb, none)
    #[arg(long)]
    pub database: Option<String>,

    /// Authentication (supabase-auth, nextauth, clerk, firebase-auth, none)
    #[arg(long)]
    pub auth: Option<String>,

    /// Additional tools (comma-separated: axios,date-fns,zod,react-hook-form,framer-motion,lucide-react)
    #[arg(long, value_delimiter = ',')]
    pub tools: Option<Vec<String>>,

    /// Generate a JavaScript project instead of TypeScript
    #[arg(long = "no-typescript")]
    pub no_typescript: bool,

    /// Skip git repository initialization
    #[arg(long = "no-git")]
    pub no_git: bool,

    /// Skip dependency installation
    #[arg(long = "no-install")]
    pub no_install: bool,

    /// Auto-confirm all prompts (non-interactive mode)
    #[arg(short, long)]
    pub yes: bool,
}

impl From<CliInitArgs> for CreateArgs {
    fn from(args: CliInitArgs) -> Self {
        CreateArgs {
            name: args.name,
            framework: args.framework,
            styling: args.styling,
            ui: args.ui,
            state: args.state,
            data: args.data,
            database: args.database,
            auth: args.auth,
            tools: args.tools,
            typescript: args.no_typescript.then_some(false),
            git: args.no_git.then_some(false),
            install: args.no_install.then_some(false),
            yes: args.yes,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Ensure terminal cursor is restored on panic
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = console::Term::stderr().show_cursor();
        default_panic(info);
    }));

    // Handle Ctrl+C gracefully
    ctrlc::set_handler(move || {
        let _ = console::Term::stderr().show_cursor();
        std::process::exit(130);
    })
    .ok();

    let args = Args::parse();

    // No subcommand defaults to the interactive interview
    let create_args = match args.command {
        Some(Command::Init(init_args)) => init_args.into(),
        None => CreateArgs::default(),
    };

    let result = devstart_core::run(create_args).await;

    // Ensure cursor is visible on normal exit
    let _ = console::Term::stderr().show_cursor();

    result
}
