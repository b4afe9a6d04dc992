// Copyright 2020 Zachary Stewart
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
use std::{
    fmt,
    io::{self, BufRead, Write},
    time::{Duration, Instant},
};

use clap::{value_t, App, Arg, ArgMatches};
use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use tracing::info;
use tracing_subscriber::EnvFilter;

use fleetgrid::{
    board::{DimensionsError, RotateError, DEFAULT_CELL_SIZE, DEFAULT_GRID_SIZE},
    scene::{Appearance, LineAxis},
    Board, DragOutcome, EditorConfig, PixelPoint, Position, ShipId,
};

fn main() -> io::Result<()> {
    let matches = App::new("fleetedit")
        .version("0.1")
        .author("Zachary Stewart <zachary@zstewart.com>")
        .about("Drag and rotate Battleship ships on a snapping grid.")
        .arg(
            Arg::with_name("cell_size")
                .short("c")
                .long("cell-size")
                .value_name("PIXELS")
                .help("size of one grid cell in pixels")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("grid_size")
                .short("g")
                .long("grid-size")
                .value_name("CELLS")
                .help("number of cells along each side of the grid")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("cooldown_ms")
                .long("cooldown-ms")
                .value_name("MILLIS")
                .help("minimum time between two rotations of the same ship")
                .takes_value(true),
        )
        .get_matches();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let config = read_config(&matches);
    info!(?config, "starting editor");
    let mut board = Board::new(&config).map_err(invalid_config)?;

    let stdin = io::stdin();
    let mut input = InputReader::new(stdin.lock());
    edit(&mut board, &mut input)
}

/// Build the editor config from the command line, falling back to the defaults.
fn read_config(matches: &ArgMatches) -> EditorConfig {
    let defaults = EditorConfig::default();
    let or_default = |name: &str, default: u32| {
        if matches.is_present(name) {
            value_t!(matches, name, u32).unwrap_or_else(|e| e.exit())
        } else {
            default
        }
    };
    EditorConfig {
        grid_size: or_default("grid_size", DEFAULT_GRID_SIZE),
        cell_size: or_default("cell_size", DEFAULT_CELL_SIZE),
        rotation_cooldown: if matches.is_present("cooldown_ms") {
            Duration::from_millis(value_t!(matches, "cooldown_ms", u64).unwrap_or_else(|e| e.exit()))
        } else {
            defaults.rotation_cooldown
        },
    }
}

fn invalid_config(err: DimensionsError) -> io::Error {
    io::Error::new(io::ErrorKind::InvalidInput, err)
}

/// A single editor command, standing in for a pointer gesture on the canvas.
#[derive(Debug, Copy, Clone, PartialEq)]
enum Command {
    Drag(ShipId, PixelPoint),
    Move(ShipId, i64, i64),
    Rotate(ShipId),
    Select(ShipId),
    Deselect,
    SetDestroyed(ShipId, bool),
    CellSize(u32),
    Show,
    List,
    Lines,
    Help,
    Quit,
}

/// Matcher for commands with args.
static DRAG: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^(?x)(?:drag|drop)\s+
        (?P<ship>[0-9]+)\s+
        (?:(?:to|at|->)\s+)?
        (?P<x>-?[0-9]+(?:\.[0-9]+)?)(?:\s*,\s*|\s+)(?P<y>-?[0-9]+(?:\.[0-9]+)?)$",
    )
    .unwrap()
});
static MOVE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^(?x)(?:move|put)\s+
        (?P<ship>[0-9]+)\s+
        (?:(?:to|at|->)\s+)?
        (?P<col>-?[0-9]+)(?:\s*,\s*|\s+)(?P<row>-?[0-9]+)$",
    )
    .unwrap()
});
static SHIP_VERB: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?P<verb>rotate|rot|dbl|select|sel|destroy|repair)\s+(?P<ship>[0-9]+)$").unwrap()
});
static CELL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^cell(?:-size)?\s+(?P<size>[0-9]+)$").unwrap());

/// Parse one line of (lowercased, trimmed) input.
fn parse_command(input: &str) -> Result<Command, String> {
    fn ship(captures: &Captures) -> Result<ShipId, String> {
        let raw = &captures["ship"];
        raw.parse()
            .map_err(|_| format!("invalid ship id: {}", raw))
    }
    fn number<T: std::str::FromStr>(captures: &Captures, name: &str) -> Result<T, String> {
        let raw = &captures[name];
        raw.parse().map_err(|_| format!("invalid {}: {}", name, raw))
    }

    Ok(match input {
        "?" | "help" | "h" => Command::Help,
        "show" | "board" => Command::Show,
        "list" | "ls" => Command::List,
        "lines" | "grid" => Command::Lines,
        "deselect" | "unselect" => Command::Deselect,
        "quit" | "exit" | "q" => Command::Quit,
        other => {
            if let Some(captures) = DRAG.captures(other) {
                Command::Drag(
                    ship(&captures)?,
                    PixelPoint::new(number(&captures, "x")?, number(&captures, "y")?),
                )
            } else if let Some(captures) = MOVE.captures(other) {
                Command::Move(
                    ship(&captures)?,
                    number(&captures, "col")?,
                    number(&captures, "row")?,
                )
            } else if let Some(captures) = SHIP_VERB.captures(other) {
                let id = ship(&captures)?;
                match &captures["verb"] {
                    "rotate" | "rot" | "dbl" => Command::Rotate(id),
                    "select" | "sel" => Command::Select(id),
                    "destroy" => Command::SetDestroyed(id, true),
                    _ => Command::SetDestroyed(id, false),
                }
            } else if let Some(captures) = CELL.captures(other) {
                Command::CellSize(number(&captures, "size")?)
            } else {
                return Err(format!(
                    "Invalid command \"{}\". Use '?' for help",
                    other
                ));
            }
        }
    })
}

/// Run the editor until the user quits or input ends.
fn edit(board: &mut Board, input: &mut InputReader<impl BufRead>) -> io::Result<()> {
    println!("Drag and rotate your ships. Type help or ? for commands.");
    println!();
    show_board(board);
    loop {
        println!();
        let cmd = match input.read_input_lower("> ", |line| match parse_command(line) {
            Ok(cmd) => Some(cmd),
            Err(msg) => {
                println!("{}", msg);
                None
            }
        })? {
            Some(cmd) => cmd,
            None => return Ok(()),
        };

        match cmd {
            Command::Quit => return Ok(()),
            Command::Drag(id, point) => drag(board, id, point),
            Command::Move(id, col, row) => {
                let origin = Position::from_cell(col, row, board.dimensions().cell_size());
                drag(board, id, origin.into())
            }
            Command::Rotate(id) => match board.rotate(id, Instant::now()) {
                Ok(extent) => {
                    println!("Ship {} is now {}.", id, extent);
                    show_board(board);
                }
                Err(RotateError::CoolingDown { .. }) => println!("Ship {} rotated too recently.", id),
                Err(err) => println!("Cannot rotate: {}.", err),
            },
            Command::Select(id) => report(board.select(id)),
            Command::Deselect => board.clear_selection(),
            Command::SetDestroyed(id, destroyed) => report(board.set_destroyed(id, destroyed)),
            Command::CellSize(size) => match board.set_cell_size(size) {
                Ok(()) => println!("Cell size is now {}.", size),
                Err(err) => println!("Cannot change cell size: {}.", err),
            },
            Command::Show => show_board(board),
            Command::List => list_ships(board),
            Command::Lines => list_lines(board),
            Command::Help => {
                println!(
                    "Available Commands:
    drag <id> <x>,<y>       drop the ship at the given pixel position. It snaps to the
        nearest cell, or back to where it was if the drop is not legal.
    move <id> <col>,<row>   drop the ship on the given cell.
    rotate <id>             rotate the ship in place (alias \"dbl\").
    select <id>             select the ship. \"deselect\" clears the selection.
    destroy <id>            mark the ship destroyed. \"repair <id>\" clears the mark.
    cell <size>             change the cell size in pixels.
    show                    print the board.
    list                    list every ship with its position, size and appearance.
    lines                   list the grid lines.
    quit                    leave the editor."
                );
            }
        }
    }
}

/// Run a full drag gesture on the ship and report where it ended up.
fn drag(board: &mut Board, id: ShipId, point: PixelPoint) {
    if let Err(err) = board.begin_drag(id) {
        println!("{}.", err);
        return;
    }
    match board.end_drag(id, point) {
        Ok(DragOutcome::Committed(pos)) => {
            println!("Ship {} moved to {}.", id, pos);
            show_board(board);
        }
        Ok(DragOutcome::SnappedBack { restore, reason }) => {
            println!("Ship {} snapped back to {}: {}.", id, restore, reason);
        }
        Err(err) => println!("{}.", err),
    }
}

fn report<E: fmt::Display>(result: Result<(), E>) {
    if let Err(err) = result {
        println!("{}.", err);
    }
}

/// Print one line per ship with its committed state and appearance.
fn list_ships(board: &Board) {
    println!(
        "{:>3}  {:>12}  {:>5}  {:<26}  {}",
        "id", "position", "size", "flags", "appearance"
    );
    for ship in board.ships() {
        let flags = [
            (ship.is_dragging(), "dragging"),
            (ship.is_selected(), "selected"),
            (ship.is_destroyed(), "destroyed"),
        ]
        .iter()
        .filter(|(on, _)| *on)
        .map(|(_, name)| *name)
        .collect::<Vec<_>>()
        .join(",");
        println!(
            "{:>3}  {:>12}  {:>5}  {:<26}  {}",
            ship.id(),
            ship.position().to_string(),
            ship.extent().to_string(),
            flags,
            AppearanceSummary(Appearance::for_flags(ship.flags())),
        );
    }
}

fn list_lines(board: &Board) {
    for line in board.frame().lines {
        let axis = match line.axis {
            LineAxis::Vertical => "|",
            LineAxis::Horizontal => "-",
        };
        println!(
            "{} {} -> {} ({}px {})",
            axis, line.start, line.end, line.stroke_width, line.stroke
        );
    }
}

/// Display helper for an [`Appearance`].
struct AppearanceSummary(Appearance);

impl fmt::Display for AppearanceSummary {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let a = &self.0;
        write!(
            f,
            "scale {} shadow {}/{}/{} offset {} opacity {}",
            a.scale, a.shadow_color, a.shadow_blur, a.shadow_opacity, a.shadow_offset, a.opacity
        )
    }
}

/// Print the board as a grid of cells, each showing the id of the ship covering it.
fn show_board(board: &Board) {
    enum Cell {
        Empty,
        Ship(ShipId),
    }
    impl fmt::Display for Cell {
        fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
            match self {
                Cell::Empty => f.pad("~~"),
                Cell::Ship(id) => f.pad(&id.to_string()),
            }
        }
    }

    print!("   ");
    for i in 0..board.dimensions().grid_size() {
        print!("{:^4}", i);
    }
    println!();
    for (i, row) in board.iter_board().enumerate() {
        print!("{:>2} ", i);
        for cell in row {
            let cell = cell.map_or(Cell::Empty, Cell::Ship);
            print!("{:^4}", cell);
        }
        println!();
    }
}

/// Helper to read input from the user.
struct InputReader<B> {
    read: B,
    buf: String,
}

impl<B> InputReader<B> {
    fn new(read: B) -> Self {
        Self {
            read,
            buf: String::new(),
        }
    }
}

impl<B: BufRead> InputReader<B> {
    /// Repeatedly tries to read input until the input checker returns `Some`. Converts
    /// to ascii lower before running the checker. Returns `None` once input ends.
    fn read_input_lower<F, T>(&mut self, prompt: &str, mut checker: F) -> io::Result<Option<T>>
    where
        F: FnMut(&str) -> Option<T>,
    {
        loop {
            if !self.read_input_inner(prompt)? {
                return Ok(None);
            }
            self.buf.make_ascii_lowercase();
            if let Some(val) = checker(self.buf.trim()) {
                return Ok(Some(val));
            }
        }
    }

    /// Helper to print the prompt, clear the string buffer and read a line. Returns
    /// `false` at end of input.
    fn read_input_inner(&mut self, prompt: &str) -> io::Result<bool> {
        print!("{} ", prompt);
        io::stdout().flush()?;
        self.buf.clear();
        if self.read.read_line(&mut self.buf)? == 0 {
            println!();
            return Ok(false);
        }
        Ok(true)
    }
}
