use std::io::{BufRead, Write};

use crate::hlt::command::{encode_queue, Command};
use crate::hlt::entity::PlayerId;
use crate::hlt::error::EngineError;
use crate::hlt::map::GameMap;

/// First half of the engine handshake: the player id has been read, the map
/// size and initial map have not.
///
/// Splitting here lets the caller open the per-player log file before the
/// rest of the handshake can fail.
pub struct Handshake<R, W> {
    reader: R,
    writer: W,
    my_id: PlayerId,
}

impl<R: BufRead, W: Write> Handshake<R, W> {
    pub fn begin(mut reader: R, writer: W) -> Result<Self, EngineError> {
        let id_line = read_line(&mut reader)?;
        let Ok(my_id) = id_line.trim().parse::<PlayerId>() else {
            return Err(EngineError::Handshake { line: id_line });
        };

        Ok(Self {
            reader,
            writer,
            my_id,
        })
    }

    pub fn my_id(&self) -> PlayerId {
        self.my_id
    }

    /// Reads the map size and initial map, then announces `name`.
    pub fn finish(mut self, name: &str) -> Result<Game<R, W>, EngineError> {
        let size_line = read_line(&mut self.reader)?;
        let Some((width, height)) = parse_size(&size_line) else {
            return Err(EngineError::Handshake { line: size_line });
        };

        let initial_line = read_line(&mut self.reader)?;
        let initial_map = GameMap::parse(self.my_id, width, height, &initial_line)?;

        writeln!(self.writer, "{name}")?;
        self.writer.flush()?;

        Ok(Game {
            reader: self.reader,
            writer: self.writer,
            my_id: self.my_id,
            width,
            height,
            name: name.to_string(),
            initial_map,
            turn: 0,
        })
    }
}

/// Line-oriented connection to the Halite-II engine.
///
/// The handshake reads the player id, the map size and the initial map, then
/// answers with the bot name. Afterwards every turn is one map line in and one
/// command line out.
pub struct Game<R, W> {
    reader: R,
    writer: W,
    my_id: PlayerId,
    width: u32,
    height: u32,
    name: String,
    initial_map: GameMap,
    turn: u32,
}

impl<R: BufRead, W: Write> Game<R, W> {
    /// Runs the whole handshake in one go.
    pub fn connect(name: &str, reader: R, writer: W) -> Result<Self, EngineError> {
        Handshake::begin(reader, writer)?.finish(name)
    }

    pub fn my_id(&self) -> PlayerId {
        self.my_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn turn(&self) -> u32 {
        self.turn
    }

    /// Snapshot received during the handshake, before the first turn.
    pub fn initial_map(&self) -> &GameMap {
        &self.initial_map
    }

    /// Blocks for the next turn's map. [`EngineError::Closed`] means the game is over.
    pub fn update_map(&mut self) -> Result<GameMap, EngineError> {
        let line = read_line(&mut self.reader)?;
        let map = GameMap::parse(self.my_id, self.width, self.height, &line)?;
        self.turn += 1;
        tracing::info!(turn = self.turn, "---NEW TURN---");
        Ok(map)
    }

    pub fn send_command_queue(&mut self, commands: &[Command]) -> Result<(), EngineError> {
        writeln!(self.writer, "{}", encode_queue(commands))?;
        self.writer.flush()?;
        Ok(())
    }

    pub fn into_writer(self) -> W {
        self.writer
    }
}

fn read_line(reader: &mut impl BufRead) -> Result<String, EngineError> {
    let mut line = String::new();
    if reader.read_line(&mut line)? == 0 {
        return Err(EngineError::Closed);
    }
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

fn parse_size(line: &str) -> Option<(u32, u32)> {
    let mut parts = line.split_whitespace();
    let width = parts.next()?.parse().ok()?;
    let height = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some((width, height))
}
