//! CLI command implementations.

pub mod account;
pub mod addresses;
pub mod browse;
pub mod cart;
pub mod chat;
pub mod config;
pub mod route;
pub mod seller;
pub mod wishlist;

use clap::{Args, Subcommand};

/// Arguments for the products command.
#[derive(Args)]
pub struct ProductsArgs {
    /// Search product names and descriptions.
    #[arg(short, long)]
    pub search: Option<String>,

    /// Category: pre-workout, post-workout, supplements or all.
    #[arg(long)]
    pub category: Option<String>,

    /// Sort: default, price-low, price-high, rating or name.
    #[arg(long)]
    pub sort: Option<String>,
}

/// Arguments for the product command.
#[derive(Args)]
pub struct ProductArgs {
    /// Product ID.
    pub id: String,
}

/// Arguments for the cart command.
#[derive(Args)]
pub struct CartArgs {
    #[command(subcommand)]
    pub command: Option<CartCommand>,
}

#[derive(Subcommand)]
pub enum CartCommand {
    /// Show the cart with its order summary.
    Show,
    /// Add a product.
    Add {
        /// Product ID.
        id: String,
        /// Quantity to add.
        #[arg(short, long, default_value_t = 1)]
        qty: i64,
    },
    /// Remove a product.
    Remove {
        /// Product ID.
        id: String,
    },
    /// Set a line's quantity; zero or less removes it.
    Set {
        /// Product ID.
        id: String,
        /// New quantity.
        #[arg(allow_negative_numbers = true)]
        qty: i64,
    },
    /// Empty the cart.
    Clear,
}

/// Arguments for the wishlist command.
#[derive(Args)]
pub struct WishlistArgs {
    #[command(subcommand)]
    pub command: Option<WishlistCommand>,
}

#[derive(Subcommand)]
pub enum WishlistCommand {
    /// Show saved products.
    Show,
    /// Save a product.
    Add {
        /// Product ID.
        id: String,
    },
    /// Remove a saved product.
    Remove {
        /// Product ID.
        id: String,
    },
    /// Save or unsave a product.
    Toggle {
        /// Product ID.
        id: String,
    },
    /// Remove everything.
    Clear,
}

/// Arguments for the login command.
#[derive(Args)]
pub struct LoginArgs {
    /// Email address.
    #[arg(required_unless_present = "demo")]
    pub email: Option<String>,

    /// Password.
    #[arg(required_unless_present = "demo")]
    pub password: Option<String>,

    /// Log in as the demo buyer or seller.
    #[arg(long, value_name = "ROLE", conflicts_with_all = ["email", "password"])]
    pub demo: Option<String>,
}

/// Arguments for the register command.
#[derive(Args)]
pub struct RegisterArgs {
    /// Full name.
    #[arg(long)]
    pub name: String,

    /// Email address.
    #[arg(long)]
    pub email: String,

    /// Phone number.
    #[arg(long, default_value = "")]
    pub phone: String,

    /// Password.
    #[arg(long)]
    pub password: String,

    /// Password again.
    #[arg(long)]
    pub confirm_password: String,

    /// Account type: buyer or seller.
    #[arg(long, default_value = "buyer")]
    pub role: String,
}

/// Arguments for the profile command.
#[derive(Args)]
pub struct ProfileArgs {
    #[command(subcommand)]
    pub command: Option<ProfileCommand>,
}

#[derive(Subcommand)]
pub enum ProfileCommand {
    /// Show the profile.
    Show,
    /// Change name, email or phone.
    Edit {
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        phone: Option<String>,
    },
    /// List your orders.
    Orders,
}

/// Address form fields.
#[derive(Args)]
pub struct AddressFields {
    #[arg(long)]
    pub street: String,
    #[arg(long)]
    pub city: String,
    #[arg(long)]
    pub state: String,
    /// Six-digit pincode.
    #[arg(long)]
    pub pincode: String,
    /// Make this the primary address.
    #[arg(long)]
    pub primary: bool,
}

/// Arguments for the addresses command.
#[derive(Args)]
pub struct AddressesArgs {
    #[command(subcommand)]
    pub command: Option<AddressesCommand>,
}

#[derive(Subcommand)]
pub enum AddressesCommand {
    /// List saved addresses.
    List,
    /// Add an address.
    Add(AddressFields),
    /// Replace an address.
    Edit {
        /// Address ID.
        id: String,
        #[command(flatten)]
        fields: AddressFields,
    },
    /// Remove an address.
    Remove {
        /// Address ID.
        id: String,
    },
    /// Make an address primary.
    Primary {
        /// Address ID.
        id: String,
    },
}

/// Arguments for the chat command.
#[derive(Args)]
pub struct ChatArgs {
    #[command(subcommand)]
    pub command: Option<ChatCommand>,
}

#[derive(Subcommand)]
pub enum ChatCommand {
    /// List posts, newest first.
    List {
        /// Search messages, names and replies.
        #[arg(short, long, default_value = "")]
        search: String,
    },
    /// Start a new thread.
    Post {
        /// Message text.
        message: String,
    },
    /// Reply to a thread.
    Reply {
        /// Post ID.
        id: String,
        /// Message text.
        message: String,
    },
}

/// Arguments for the seller command.
#[derive(Args)]
pub struct SellerArgs {
    #[command(subcommand)]
    pub command: SellerCommand,
}

#[derive(Subcommand)]
pub enum SellerCommand {
    /// Store metrics, low stock and recent orders.
    Dashboard,
    /// Manage products.
    Products {
        #[command(subcommand)]
        command: Option<SellerProductsCommand>,
    },
    /// Manage orders.
    Orders {
        #[command(subcommand)]
        command: Option<SellerOrdersCommand>,
    },
}

/// Product form fields.
#[derive(Args)]
pub struct ProductFields {
    #[arg(long)]
    pub name: String,
    #[arg(long)]
    pub description: String,
    /// Price in whole rupees.
    #[arg(long)]
    pub price: i64,
    /// pre-workout, post-workout or supplements.
    #[arg(long)]
    pub category: String,
    #[arg(long, default_value_t = 0)]
    pub stock: u32,
    #[arg(long)]
    pub brand: String,
    /// Pack size, e.g. "1 kg".
    #[arg(long, default_value = "")]
    pub weight: String,
    #[arg(long, default_value = "")]
    pub image: String,
    /// Comma-separated flavors.
    #[arg(long, value_delimiter = ',')]
    pub flavors: Vec<String>,
    #[arg(long, default_value_t = 0.0)]
    pub rating: f32,
    #[arg(long, default_value_t = 0)]
    pub reviews: u32,
}

#[derive(Subcommand)]
pub enum SellerProductsCommand {
    /// List products.
    List {
        /// Search name, category and brand.
        #[arg(short, long, default_value = "")]
        search: String,
    },
    /// Add a product.
    Add(ProductFields),
    /// Replace a product's fields.
    Edit {
        /// Product ID.
        id: String,
        #[command(flatten)]
        fields: ProductFields,
    },
    /// Delete a product.
    Delete {
        /// Product ID.
        id: String,
        /// Skip confirmation.
        #[arg(short, long)]
        yes: bool,
    },
}

#[derive(Subcommand)]
pub enum SellerOrdersCommand {
    /// List orders.
    List {
        /// Search order IDs.
        #[arg(short, long, default_value = "")]
        search: String,
        /// processing, shipped or delivered.
        #[arg(long)]
        status: Option<String>,
    },
    /// Change an order's status.
    Status {
        /// Order ID.
        id: String,
        /// processing, shipped or delivered.
        status: String,
    },
}

/// Arguments for the route command.
#[derive(Args)]
pub struct RouteArgs {
    /// Path to resolve, e.g. /seller/dashboard.
    pub path: String,
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration.
    Show,
    /// Initialize a config file.
    Init {
        /// Overwrite existing config.
        #[arg(short, long)]
        force: bool,
    },
}
