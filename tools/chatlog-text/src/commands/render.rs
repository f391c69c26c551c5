use std::{
    fs,
    io::{self, Write},
    path::PathBuf,
};

use anyhow::{Result, anyhow};
use chatnorm::{
    MessageDarwinV3, MessageV3, MessageV4, Normalizer, PlainTextRenderer, RawRecord,
};
use chrono::{FixedOffset, Local};
use clap::Args;
use serde::de::DeserializeOwned;
use tracing::info;

use crate::{input::read_rows, schema::SchemaArg};

#[derive(Args)]
pub struct RenderArgs {
    /// JSON-lines file with one raw row per line (stdin if not specified)
    input: Option<PathBuf>,

    /// Schema version the rows were read from
    #[arg(short, long, value_enum)]
    schema: SchemaArg,

    /// Host used in media links
    #[arg(long, env = "CHATLOG_HOST", default_value = "127.0.0.1:5030")]
    host: String,

    /// Include the chat room in group message headers
    #[arg(long)]
    show_chat_room: bool,

    /// Render timestamps at a fixed UTC offset, in hours
    #[arg(long, allow_hyphen_values = true, conflicts_with = "local_time")]
    utc_offset: Option<i32>,

    /// Render timestamps in the local time zone
    #[arg(long)]
    local_time: bool,

    /// Output file path (stdout if not specified)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

impl RenderArgs {
    pub fn run(self) -> Result<()> {
        let renderer = PlainTextRenderer::new().with_offset(self.offset()?);
        let normalizer = Normalizer::new();

        let text = match self.schema {
            SchemaArg::V3 => self.render::<MessageV3>(&normalizer, &renderer)?,
            SchemaArg::V4 => self.render::<MessageV4>(&normalizer, &renderer)?,
            SchemaArg::DarwinV3 => self.render::<MessageDarwinV3>(&normalizer, &renderer)?,
        };

        match &self.output {
            Some(path) => fs::write(path, text)?,
            None => io::stdout().lock().write_all(text.as_bytes())?,
        }
        Ok(())
    }

    fn offset(&self) -> Result<FixedOffset> {
        if self.local_time {
            return Ok(*Local::now().offset());
        }
        let hours = self.utc_offset.unwrap_or(0);
        FixedOffset::east_opt(hours * 3600).ok_or_else(|| anyhow!("invalid --utc-offset {hours}"))
    }

    fn render<R>(&self, normalizer: &Normalizer, renderer: &PlainTextRenderer) -> Result<String>
    where
        R: RawRecord + DeserializeOwned + Send,
    {
        let rows: Vec<R> = read_rows(self.input.as_deref())?;
        info!(rows = rows.len(), schema = %self.schema.version(), "normalizing");

        let messages = normalizer.normalize_batch(rows);
        let mut out = String::new();
        for message in &messages {
            out.push_str(&renderer.render(message, self.show_chat_room, &self.host));
        }
        Ok(out)
    }
}
