//! fg-cli: Command-line front end for floor generation
//!
//! Parses arguments, generates one or more floors and prints their layout.

use std::io::{self, Write};

use clap::Parser;
use log::LevelFilter;
use thiserror::Error;

use fg_core::FloorError;
use fg_core::floor::{Floor, FloorBuilder, Position, legend};

/// Generate dungeon floor layouts
#[derive(Parser, Debug)]
#[command(name = "floorgen")]
#[command(author, version, about = "Floorgen - lay out a dungeon floor", long_about = None)]
pub struct Args {
    /// Number of rooms on each floor (at least 3)
    #[arg(short = 'n', long = "rooms")]
    pub rooms: usize,

    /// Seed for reproducible floors (successive floors use seed+1, seed+2, ...)
    #[arg(short = 's', long = "seed")]
    pub seed: Option<u64>,

    /// Growth attempts before giving up
    #[arg(long = "max-attempts", conflicts_with = "unbounded")]
    pub max_attempts: Option<u32>,

    /// Retry growth with no attempt ceiling
    #[arg(long = "unbounded")]
    pub unbounded: bool,

    /// Number of floors to generate
    #[arg(short = 'c', long = "count", default_value_t = 1)]
    pub count: u32,

    /// List every room's doors
    #[arg(long = "doors")]
    pub doors: bool,

    /// Print the symbol legend
    #[arg(long = "legend")]
    pub legend: bool,

    /// Verbose output (repeat for more)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    /// Log level implied by the verbosity flag
    pub fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }

    /// Builder for the `index`-th floor of this run
    pub fn builder(&self, index: u32) -> FloorBuilder {
        let mut builder = FloorBuilder::new().rooms(self.rooms);
        if let Some(seed) = self.seed {
            builder = builder.seed(seed.wrapping_add(u64::from(index)));
        }
        if self.unbounded {
            builder = builder.unbounded();
        } else if let Some(max_attempts) = self.max_attempts {
            builder = builder.max_attempts(max_attempts);
        }
        builder
    }
}

/// CLI errors
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Floor(#[from] FloorError),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// Short label for a room position on a floor
fn room_label(floor: &Floor, pos: Position) -> &'static str {
    if pos == floor.start_pos() {
        "start"
    } else if pos == floor.boss_room_pos() {
        "boss"
    } else if pos == floor.item_room_pos() {
        "item"
    } else {
        "room"
    }
}

/// Write one line per room listing its doors, in placement order
pub fn write_doors(floor: &Floor, out: &mut impl Write) -> io::Result<()> {
    for (pos, room) in floor.rooms_map().iter() {
        let doors: Vec<String> = room
            .doors()
            .map(|(dir, door)| {
                let lock = if door.requires_key() { " (locked)" } else { "" };
                format!("{dir} -> {}{lock}", door.leads_to)
            })
            .collect();
        writeln!(
            out,
            "{pos} {}: {}",
            room_label(floor, pos),
            doors.join(", ")
        )?;
    }
    Ok(())
}

/// Generate and print every requested floor
pub fn run(args: &Args, out: &mut impl Write) -> Result<(), CliError> {
    if args.legend {
        writeln!(out, "{}", legend())?;
    }

    for index in 0..args.count {
        let floor = args.builder(index).build()?;
        if args.count > 1 || args.verbose > 0 {
            writeln!(
                out,
                "Floor {} (seed {}, {} attempt(s))",
                index + 1,
                floor.seed(),
                floor.attempts()
            )?;
        }
        write!(out, "{floor}")?;
        if args.doors {
            write_doors(&floor, out)?;
        }
        if index + 1 < args.count {
            writeln!(out)?;
        }
    }
    Ok(())
}
