mod api;
mod error;
mod file_store;


use std::path::PathBuf;

use chrono::{FixedOffset, Local, NaiveDateTime, Offset, TimeZone};
use clap::{Parser, Subcommand, ValueEnum};
use market::{
    BookingDraft, BookingRequest, Category, CategoryFilter, ListingQuery, LocalOffset, LoginRequest, Role, Session,
    SessionStore, SignupRequest,
};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use crate::api::ApiClient;
use crate::error::CliError;
use crate::file_store::FileStore;

const DEFAULT_API_URL: &str = "http://localhost:5000/api";

#[derive(Parser, Debug)]
#[command(name = "neighbourcare", about = "NeighbourCare marketplace CLI")]
struct Cli {
    #[arg(long, env = "NEIGHBOURCARE_API_URL", default_value = DEFAULT_API_URL)]
    api_url: String,

    /// Where the session token and profile are kept.
    #[arg(long, env = "NEIGHBOURCARE_SESSION_FILE")]
    session_file: Option<PathBuf>,

    /// Minutes east of UTC applied to booking times. Defaults to the local offset.
    #[arg(long, env = "NEIGHBOURCARE_UTC_OFFSET", allow_negative_numbers = true)]
    utc_offset: Option<i32>,

    /// Log more to stderr (-v info, -vv debug). `RUST_LOG` overrides.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Sign in and store the session.
    Login {
        #[arg(long)]
        email: String,
        #[arg(long, env = "NEIGHBOURCARE_PASSWORD")]
        password: String,
    },
    /// Create an account and store the session.
    Signup {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long, env = "NEIGHBOURCARE_PASSWORD")]
        password: String,
        #[arg(long, value_enum, default_value_t = RoleArg::User)]
        role: RoleArg,
    },
    /// Forget the stored session.
    Logout,
    /// Show the signed-in user.
    Whoami,
    /// Search listings.
    Listings {
        #[arg(long)]
        q: Option<String>,
        #[arg(long)]
        category: Option<String>,
    },
    /// Show one listing.
    Listing { id: String },
    /// Book a listing for a local date and time.
    Book {
        listing_id: String,
        /// `YYYY-MM-DD`
        #[arg(long)]
        date: String,
        /// `HH:MM`
        #[arg(long)]
        time: String,
        /// Whole hours.
        #[arg(long, default_value = "1", allow_negative_numbers = true)]
        duration: String,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum RoleArg {
    User,
    Provider,
}

impl From<RoleArg> for Role {
    fn from(role: RoleArg) -> Self {
        match role {
            RoleArg::User => Role::User,
            RoleArg::Provider => Role::Provider,
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let session_path = cli.session_file.clone().unwrap_or_else(default_session_file);
    let mut sessions = SessionStore::new(FileStore::open(&session_path)?);
    tracing::debug!(path = %sessions.store().path().display(), "session file");

    match cli.command {
        Command::Login { email, password } => {
            let client = ApiClient::new(&cli.api_url, None)?;
            let request = LoginRequest {
                email: email.trim().to_owned(),
                password,
            };
            let session = Session::from(client.login(&request).await?);
            sessions.save(&session)?;
            println!("Logged in as {}", session.user.name);
        }
        Command::Signup {
            name,
            email,
            password,
            role,
        } => {
            let client = ApiClient::new(&cli.api_url, None)?;
            let request = SignupRequest {
                name: name.trim().to_owned(),
                email: email.trim().to_owned(),
                password,
                role: role.into(),
            };
            let session = Session::from(client.signup(&request).await?);
            sessions.save(&session)?;
            println!("Signed up as {}", session.user.name);
        }
        Command::Logout => {
            sessions.clear()?;
            println!("Logged out");
        }
        Command::Whoami => match sessions.load() {
            Some(session) => println!("{}", describe_user(&session)),
            None => println!("anonymous"),
        },
        Command::Listings { q, category } => {
            let query = listing_query(q.as_deref(), category.as_deref())?;
            let client = ApiClient::new(&cli.api_url, token(&sessions))?;
            print_json(&client.listings(&query).await?)?;
        }
        Command::Listing { id } => {
            let client = ApiClient::new(&cli.api_url, token(&sessions))?;
            print_json(&client.listing(&id).await?)?;
        }
        Command::Book {
            listing_id,
            date,
            time,
            duration,
        } => {
            let zone = resolve_zone(cli.utc_offset)?;
            let request = prepare_booking(&listing_id, date, time, duration, &zone)?;
            let token = token(&sessions).ok_or(CliError::NotLoggedIn)?;
            let client = ApiClient::new(&cli.api_url, Some(token))?;
            tracing::info!(
                listing = %request.listing_id,
                start = %request.start_time,
                hours = request.duration_hours(),
                "submitting booking"
            );
            print_json(&client.create_booking(&request).await?)?;
        }
    }
    Ok(())
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)))
        .init();
}

/// `~/.neighbourcare/session.json`, or relative to the working directory when
/// no home directory is known.
fn default_session_file() -> PathBuf {
    let home = std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(PathBuf::from)
        .unwrap_or_default();
    home.join(".neighbourcare").join("session.json")
}

/// Where booking times get their UTC offset.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum BookingZone {
    /// `--utc-offset`, applied to every date.
    Fixed(FixedOffset),
    /// The system time zone, consulted for the booked date itself.
    System,
}

impl LocalOffset for BookingZone {
    fn offset_at(&self, local: NaiveDateTime) -> Option<FixedOffset> {
        match self {
            Self::Fixed(offset) => Some(*offset),
            Self::System => Local.offset_from_local_datetime(&local).earliest().map(|o| o.fix()),
        }
    }
}

fn resolve_zone(minutes: Option<i32>) -> Result<BookingZone, CliError> {
    match minutes {
        Some(minutes) => minutes
            .checked_mul(60)
            .and_then(FixedOffset::east_opt)
            .map(BookingZone::Fixed)
            .ok_or(CliError::InvalidOffset(minutes)),
        None => Ok(BookingZone::System),
    }
}

fn listing_query(q: Option<&str>, category: Option<&str>) -> Result<ListingQuery, CliError> {
    let filter = match category.map(str::trim).filter(|c| !c.is_empty()) {
        Some(raw) => CategoryFilter::Only(Category::parse(raw).ok_or_else(|| CliError::UnknownCategory(raw.to_owned()))?),
        None => CategoryFilter::All,
    };
    Ok(ListingQuery::new(q.unwrap_or_default(), filter))
}

/// Validate the draft and derive the interval. Nothing is sent for an
/// invalid draft.
fn prepare_booking(
    listing_id: &str,
    date: String,
    time: String,
    duration: String,
    zone: &impl LocalOffset,
) -> Result<BookingRequest, CliError> {
    let mut draft = BookingDraft::default();
    draft.set_date(date);
    draft.set_time(time);
    draft.set_duration(duration);
    Ok(BookingRequest::prepare(listing_id, &draft, zone)?)
}

fn token(sessions: &SessionStore<FileStore>) -> Option<String> {
    sessions.load().map(|s| s.token)
}

fn describe_user(session: &Session) -> String {
    let user = &session.user;
    match &user.email {
        Some(email) => format!("{} <{email}> ({})", user.name, user.role.as_str()),
        None => format!("{} ({})", user.name, user.role.as_str()),
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<(), CliError> {
    let rendered = serde_json::to_string_pretty(value)?;
    println!("{rendered}");
    Ok(())
}
