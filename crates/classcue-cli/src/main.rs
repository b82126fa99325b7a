use classcue_cli::seeder::{self, SEED_EMAIL_DOMAIN, SeedConfig};
use clap::{Parser, Subcommand};
use dialoguer::{Input, Password};
use dotenvy::dotenv;
use sqlx::postgres::{PgPool, PgPoolOptions};

#[derive(Parser)]
#[command(name = "classcue-cli")]
#[command(about = "ClassCue CLI - Administrative tools for ClassCue", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a teacher account
    CreateUser {
        /// Email address
        #[arg(short = 'e', long)]
        email: Option<String>,

        /// Name shown in the app
        #[arg(short = 'n', long)]
        display_name: Option<String>,

        /// Password (will be prompted securely if not provided)
        #[arg(short = 'p', long)]
        password: Option<String>,
    },
    /// Seed the database with fake teachers, school setups and reminders
    Seed {
        /// Number of teachers to create
        #[arg(short = 't', long, default_value = "5")]
        teachers: usize,

        /// Number of periods in each teacher's timetable
        #[arg(long, default_value = "6")]
        periods: usize,

        /// Number of reminders per teacher
        #[arg(short = 'r', long, default_value = "20")]
        reminders: usize,
    },
    /// Delete every seeded teacher along with their setups and reminders
    ClearSeed,
}

#[tokio::main]
async fn main() {
    dotenv().ok();

    let Ok(database_url) = std::env::var("DATABASE_URL") else {
        eprintln!("❌ DATABASE_URL must be set");
        std::process::exit(1);
    };

    let pool = match PgPoolOptions::new()
        .max_connections(5)
        .connect(&database_url)
        .await
    {
        Ok(pool) => pool,
        Err(e) => {
            eprintln!("❌ Failed to connect to database: {}", e);
            std::process::exit(1);
        }
    };

    let cli = Cli::parse();

    match cli.command {
        Commands::CreateUser {
            email,
            display_name,
            password,
        } => handle_create_user(&pool, email, display_name, password).await,
        Commands::Seed {
            teachers,
            periods,
            reminders,
        } => handle_seed(&pool, teachers, periods, reminders).await,
        Commands::ClearSeed => handle_clear_seed(&pool).await,
    }
}

async fn handle_create_user(
    pool: &PgPool,
    email: Option<String>,
    display_name: Option<String>,
    password: Option<String>,
) {
    let answers = prompt_missing(email, display_name, password);
    let (email, display_name, password) = match answers {
        Ok(answers) => answers,
        Err(e) => {
            eprintln!("\n❌ Failed to read input: {}", e);
            std::process::exit(1);
        }
    };

    match seeder::users::create_user(pool, &email, &display_name, &password).await {
        Ok(id) => {
            println!("\n✅ User created successfully!");
            println!("   Id: {}", id);
            println!("   Email: {}", email.trim().to_lowercase());
            println!("   Name: {}", display_name.trim());
        }
        Err(e) => {
            eprintln!("\n❌ Error creating user: {}", e);
            std::process::exit(1);
        }
    }
}

fn prompt_missing(
    email: Option<String>,
    display_name: Option<String>,
    password: Option<String>,
) -> dialoguer::Result<(String, String, String)> {
    let email = match email {
        Some(email) => email,
        None => Input::new().with_prompt("Email address").interact_text()?,
    };

    let display_name = match display_name {
        Some(name) => name,
        None => Input::new().with_prompt("Display name").interact_text()?,
    };

    let password = match password {
        Some(password) => password,
        None => Password::new()
            .with_prompt("Password")
            .with_confirmation("Confirm password", "Passwords don't match")
            .interact()?,
    };

    Ok((email, display_name, password))
}

async fn handle_seed(pool: &PgPool, teachers: usize, periods: usize, reminders: usize) {
    let config = SeedConfig::new(teachers)
        .with_periods(periods)
        .with_reminders(reminders);

    match seeder::seed_all(pool, config).await {
        Ok(report) => {
            println!(
                "   {} teachers, {} setups, {} reminders (emails end in @{})",
                report.teachers, report.setups, report.reminders, SEED_EMAIL_DOMAIN
            );
        }
        Err(e) => {
            eprintln!("\n❌ Error seeding database: {}", e);
            std::process::exit(1);
        }
    }
}

async fn handle_clear_seed(pool: &PgPool) {
    match seeder::clear_all(pool).await {
        Ok(deleted) => println!("   Removed {} seeded teachers", deleted),
        Err(e) => {
            eprintln!("\n❌ Error clearing seeded data: {}", e);
            std::process::exit(1);
        }
    }
}
