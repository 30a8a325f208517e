use std::io::{self, BufRead, Write};

use common::games::tictactoe::{Board, GameOutput, MarkSymbols, MoveInput, SessionError};

pub struct ConsoleInput<R> {
    reader: R,
}

impl<R: BufRead> ConsoleInput<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> MoveInput for ConsoleInput<R> {
    fn read_line(&mut self) -> Result<Option<String>, SessionError> {
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}

pub struct ConsoleOutput<W> {
    writer: W,
    symbols: MarkSymbols,
}

impl<W: Write> ConsoleOutput<W> {
    pub fn new(writer: W, symbols: MarkSymbols) -> Self {
        Self { writer, symbols }
    }
}

impl<W: Write> GameOutput for ConsoleOutput<W> {
    fn show_message(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.writer, "{}", message)?;
        self.writer.flush()
    }

    fn show_board(&mut self, board: &Board) -> io::Result<()> {
        self.writer.write_all(board.render(&self.symbols).as_bytes())?;
        self.writer.flush()
    }
}
