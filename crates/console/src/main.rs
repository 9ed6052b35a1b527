// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

mod prompt;

use clap::{Parser, Subcommand};
use prompt::StdinPrompt;
use room_desk::{AppState, Command};
use room_desk_api::{
    AuthenticationService, BcryptVerifier, ExportArtifact, ExportMode, PinPolicy, build_export,
};
use room_desk_domain::{Period, Remaining, parse_date, remaining, room_occupancy};
use room_desk_engine::{DISPLAY_TICK, Store, Sweeper, SystemClock};
use room_desk_persistence::{DEFAULT_STORAGE_FILE, Persistence};
use room_desk_privacy::{AtRestCodec, PinGate};
use std::io::Write as _;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use time::PrimitiveDateTime;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::Mutex;
use tracing::{info, warn};

/// Room Desk: occupancy, bookings, menu, and reports for a small motel.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the state file. If not provided, state lives in memory
    /// only.
    #[arg(short, long)]
    data: Option<PathBuf>,

    /// Shared reveal code guarding guest-identity display (6 digits).
    #[arg(long, default_value = "070528")]
    reveal_code: String,

    /// Shared key the at-rest guest-identity transform uses.
    #[arg(long, default_value = "room-desk-at-rest")]
    data_key: String,

    /// Bcrypt hash of the operator password. When set, `run` asks for
    /// the password before starting.
    #[arg(long)]
    password_hash: Option<String>,

    /// Seconds between re-evaluation sweeps.
    #[arg(long, default_value_t = 60)]
    sweep_seconds: u64,

    #[command(subcommand)]
    command: Option<ConsoleCommand>,
}

#[derive(Subcommand, Debug)]
enum ConsoleCommand {
    /// Run the engine until interrupted (default).
    Run,
    /// Print every room with its derived occupancy and countdowns.
    Status,
    /// Export the report for a period as JSON on stdout.
    Report {
        /// The period: today, week, month, year, or custom.
        #[arg(long, default_value = "today")]
        period: String,
        /// First day of a custom period (`YYYY-MM-DD`).
        #[arg(long)]
        start: Option<String>,
        /// Last day of a custom period (`YYYY-MM-DD`).
        #[arg(long)]
        end: Option<String>,
        /// Export guest identities in the clear. Requires the reveal
        /// code.
        #[arg(long)]
        revealed: bool,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Args = Args::parse();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    PinPolicy::default().validate(&args.reveal_code)?;

    // Initialize persistence (in-memory or file-based based on CLI argument)
    let persistence: Persistence = match &args.data {
        Some(path) => {
            info!("Using state file at: {}", path.display());
            Persistence::new_with_file(path)
        }
        None => {
            warn!(
                "No state file given; state lives in memory only (pass --data {DEFAULT_STORAGE_FILE} to keep it)"
            );
            Persistence::new_in_memory()
        }
    };

    let clock: Arc<SystemClock> = Arc::new(SystemClock);
    let mut store: Store = Store::new(persistence, clock.clone());
    let codec: AtRestCodec = AtRestCodec::new(&args.data_key);

    match args.command.unwrap_or(ConsoleCommand::Run) {
        ConsoleCommand::Run => {
            // sessions do not survive a restart
            if store.state().is_authenticated {
                store.dispatch(Command::SetAuthenticated {
                    authenticated: false,
                });
            }
            if let Some(hash) = &args.password_hash {
                login(&mut store, hash).await?;
            }
            run(store, clock, args.sweep_seconds).await;
        }
        ConsoleCommand::Status => print_status(store.state(), store.now()),
        ConsoleCommand::Report {
            period,
            start,
            end,
            revealed,
        } => {
            let period: Period = parse_period(&period, start.as_deref(), end.as_deref())?;
            let gate: PinGate = PinGate::new(&args.reveal_code);
            report(&store, &codec, &gate, period, revealed).await?;
        }
    }

    Ok(())
}

/// Runs the engine until ctrl-c, then tears the timers down.
async fn run(store: Store, clock: Arc<SystemClock>, sweep_seconds: u64) {
    let rooms: usize = store.state().rooms.len();
    let shared: Arc<Mutex<Store>> = Arc::new(Mutex::new(store));
    let sweeper: Sweeper = Sweeper::start(
        Arc::clone(&shared),
        clock,
        DISPLAY_TICK,
        Duration::from_secs(sweep_seconds),
    );

    info!(rooms, sweep_seconds, "Room Desk engine running; ctrl-c to stop");

    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!(error = %err, "Could not listen for shutdown signal");
    }

    sweeper.stop();
    info!("Room Desk engine stopped");
}

/// Asks for the operator password and opens the session.
async fn login(store: &mut Store, password_hash: &str) -> Result<(), Box<dyn std::error::Error>> {
    let mut auth: AuthenticationService =
        AuthenticationService::new(Box::new(BcryptVerifier::new(password_hash)));

    eprint!("Mot de passe: ");
    let _ = std::io::stderr().flush();
    let mut line: String = String::new();
    BufReader::new(tokio::io::stdin())
        .read_line(&mut line)
        .await?;

    let _token: String = auth.login(line.trim(), store.now())?;
    info!("Operator session open");
    store.dispatch(Command::SetAuthenticated {
        authenticated: true,
    });
    Ok(())
}

/// Prints each room with its derived occupancy and, for active moments,
/// the live countdown.
fn print_status(state: &AppState, now: PrimitiveDateTime) {
    println!("{} ({now})", state.settings.motel_name);
    for room in &state.rooms {
        let occupancy = room_occupancy(&room.id, &state.moments, &state.nights, now);
        let label: &str = if occupancy.occupied {
            "occupée"
        } else if room.is_clean {
            "libre"
        } else {
            "à nettoyer"
        };
        println!("  Chambre {}: {label}", room.number);

        for moment in &occupancy.active_moments {
            let left: Remaining = remaining(moment, now);
            println!("    moment {}, reste {left}", moment.id);
        }
        for night in &occupancy.active_nights {
            println!("    nuit {}, départ le {}", night.id, night.check_out_date);
        }
    }
}

/// Builds and prints the report export, gating revealed identities behind
/// the shared code.
async fn report(
    store: &Store,
    codec: &AtRestCodec,
    gate: &PinGate,
    period: Period,
    revealed: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let mode: ExportMode = if revealed {
        if gate.request_unlock(&mut StdinPrompt).await {
            ExportMode::Revealed
        } else {
            warn!("Reveal not granted; exporting obscured identities instead");
            ExportMode::Obscured
        }
    } else {
        ExportMode::Obscured
    };

    let state: &AppState = store.state();
    let artifact: ExportArtifact = build_export(
        &state.moments,
        &state.nights,
        period,
        mode,
        codec,
        store.now().date(),
    )?;
    println!("{}", artifact.to_json()?);
    Ok(())
}

/// Parses a period selector from the command line.
fn parse_period(
    period: &str,
    start: Option<&str>,
    end: Option<&str>,
) -> Result<Period, Box<dyn std::error::Error>> {
    match period {
        "today" => Ok(Period::Today),
        "week" => Ok(Period::Week),
        "month" => Ok(Period::Month),
        "year" => Ok(Period::Year),
        "custom" => {
            let (Some(start), Some(end)) = (start, end) else {
                return Err("a custom period needs --start and --end".into());
            };
            Ok(Period::Custom {
                start: parse_date(start)?,
                end: parse_date(end)?,
            })
        }
        other => Err(format!("unknown period '{other}'").into()),
    }
}
