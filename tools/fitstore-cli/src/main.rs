//! FitStore CLI - terminal front end for the supplement storefront.
//!
//! Commands:
//! - `fitstore home` / `products` / `product` - Browse the catalog
//! - `fitstore cart` / `wishlist` - Manage the shopping cart and wishlist
//! - `fitstore login` / `logout` / `register` / `whoami` - Session
//! - `fitstore profile` / `addresses` - Account details
//! - `fitstore chat` - Community chat board
//! - `fitstore seller` - Seller back-office
//! - `fitstore route` - Resolve a path through the access guard
//! - `fitstore config` - Manage configuration

mod commands;
mod config;
mod context;
mod logging;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{
    AddressesArgs, CartArgs, ChatArgs, ConfigArgs, LoginArgs, ProductArgs, ProductsArgs,
    ProfileArgs, RegisterArgs, RouteArgs, SellerArgs, WishlistArgs,
};

/// FitStore - browse, shop and manage a supplement store from the terminal
#[derive(Parser)]
#[command(name = "fitstore")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use JSON output format
    #[arg(long, global = true)]
    json: bool,

    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Directory holding the persisted storefront state
    #[arg(long, global = true)]
    data_dir: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show featured products and categories
    Home,

    /// List products with optional search, category and sort
    Products(ProductsArgs),

    /// Show a product with related products
    Product(ProductArgs),

    /// Manage the shopping cart
    Cart(CartArgs),

    /// Manage the wishlist
    Wishlist(WishlistArgs),

    /// Log in with an email and password, or as a demo account
    Login(LoginArgs),

    /// End the current session
    Logout,

    /// Create an account and log in
    Register(RegisterArgs),

    /// Show the logged-in user
    Whoami,

    /// View and edit the profile
    Profile(ProfileArgs),

    /// Manage saved addresses
    Addresses(AddressesArgs),

    /// Community chat board
    Chat(ChatArgs),

    /// Seller back-office
    Seller(SellerArgs),

    /// Resolve a path and show where the guard sends the viewer
    Route(RouteArgs),

    /// Manage configuration
    Config(ConfigArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup output formatting
    let output = output::Output::new(cli.verbose, cli.json);

    // Load config before anything logs so the filter applies from the start
    let (config, config_file) = context::resolve_config(cli.config.as_deref())?;
    logging::init(&config.log, cli.verbose);

    // `config` commands work without opening the store
    let command = match cli.command {
        Commands::Config(args) => {
            if let Err(e) = commands::config::run(args, &config, config_file.as_deref(), &output) {
                output.error(&format!("{:#}", e));
                std::process::exit(1);
            }
            return Ok(());
        }
        command => command,
    };

    let mut ctx = match context::Context::open(config, config_file, cli.data_dir.as_deref(), output.clone()) {
        Ok(ctx) => ctx,
        Err(e) => {
            output.error(&format!("{:#}", e));
            std::process::exit(1);
        }
    };

    if let Some(path) = &ctx.config_file {
        ctx.output.debug(&format!("config: {}", path.display()));
    }
    ctx.output.debug(&format!("data dir: {}", ctx.data_dir.display()));

    // Execute command
    let result = match command {
        Commands::Home => commands::browse::home(&ctx),
        Commands::Products(args) => commands::browse::products(args, &ctx),
        Commands::Product(args) => commands::browse::product(args, &ctx),
        Commands::Cart(args) => commands::cart::run(args, &mut ctx),
        Commands::Wishlist(args) => commands::wishlist::run(args, &mut ctx),
        Commands::Login(args) => commands::account::login(args, &mut ctx),
        Commands::Logout => commands::account::logout(&mut ctx),
        Commands::Register(args) => commands::account::register(args, &mut ctx),
        Commands::Whoami => commands::account::whoami(&ctx),
        Commands::Profile(args) => commands::account::profile(args, &mut ctx),
        Commands::Addresses(args) => commands::addresses::run(args, &mut ctx),
        Commands::Chat(args) => commands::chat::run(args, &mut ctx),
        Commands::Seller(args) => commands::seller::run(args, &mut ctx),
        Commands::Route(args) => commands::route::run(args, &ctx),
        Commands::Config(_) => Ok(()),
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}
