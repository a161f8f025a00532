use crate::error::RosterResult;
use serde::Serialize;
use serde_json::ser::{Formatter, PrettyFormatter, Serializer};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Two-space pretty printer that writes every `/` inside strings as the
/// JSON escape `\/`.
pub struct SlashEscapingFormatter {
    inner: PrettyFormatter<'static>,
}

impl SlashEscapingFormatter {
    pub fn new() -> Self {
        Self {
            inner: PrettyFormatter::with_indent(b"  "),
        }
    }
}

impl Default for SlashEscapingFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl Formatter for SlashEscapingFormatter {
    fn write_string_fragment<W>(&mut self, writer: &mut W, fragment: &str) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        let mut pieces = fragment.split('/');
        if let Some(first) = pieces.next() {
            writer.write_all(first.as_bytes())?;
        }
        for piece in pieces {
            writer.write_all(b"\\/")?;
            writer.write_all(piece.as_bytes())?;
        }
        Ok(())
    }

    fn begin_array<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        self.inner.begin_array(writer)
    }

    fn end_array<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        self.inner.end_array(writer)
    }

    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        self.inner.begin_array_value(writer, first)
    }

    fn end_array_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        self.inner.end_array_value(writer)
    }

    fn begin_object<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        self.inner.begin_object(writer)
    }

    fn end_object<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        self.inner.end_object(writer)
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        self.inner.begin_object_key(writer, first)
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        self.inner.begin_object_value(writer)
    }

    fn end_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        self.inner.end_object_value(writer)
    }
}

pub fn write_json<W: Write, T: Serialize + ?Sized>(writer: W, value: &T) -> RosterResult<()> {
    let mut serializer = Serializer::with_formatter(writer, SlashEscapingFormatter::new());
    value.serialize(&mut serializer)?;
    Ok(())
}

pub fn to_json_string<T: Serialize + ?Sized>(value: &T) -> RosterResult<String> {
    let mut buf = Vec::new();
    write_json(&mut buf, value)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

pub fn save_json<P: AsRef<Path>, T: Serialize + ?Sized>(path: P, value: &T) -> RosterResult<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    write_json(&mut writer, value)?;
    writer.flush()?;
    Ok(())
}
