use std::io::{BufReader, BufWriter, Write};
use std::path::Path;
use std::{fs, io};

use anyhow::{Context, Result};
use store::MissionsList;

pub mod common_types;

pub mod concord;
pub mod vineyard;

#[cfg(test)]
mod tests;

pub fn builtins() -> impl Iterator<Item = (&'static str, MissionsList)> {
    [("concord", concord::missions_list()), ("vineyard", vineyard::missions_list())].into_iter()
}

/// Format of a rendered mission file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// The bracketed format read by the simulator.
    #[default]
    Tmc,
    /// XML with the same tree structure.
    Xml,
}

impl OutputFormat {
    #[must_use]
    pub fn extension(self) -> &'static str {
        match self {
            Self::Tmc => "tmc",
            Self::Xml => "xml",
        }
    }

    pub fn render(self, list: &MissionsList) -> Result<String, store::Error> {
        match self {
            Self::Tmc => list.render(),
            Self::Xml => list.render_xml(),
        }
    }
}

fn write_rendered(list: &MissionsList, format: OutputFormat, output: &Path) -> Result<()> {
    let rendered = format.render(list).context("render missions")?;

    let mut writer = BufWriter::new(
        fs::File::create(output).with_context(|| format!("create {}", output.display()))?,
    );
    writer.write_all(rendered.as_bytes()).context("write missions")?;
    writer.write_all(b"\n").context("write missions")?;
    writer.flush().context("flush missions")?;

    tracing::info!(path = %output.display(), missions = list.missions.len(), "Wrote mission file");
    Ok(())
}

pub fn build_assets(missions_dir: &Path, format: OutputFormat) -> Result<()> {
    if let Err(err) = fs::create_dir_all(missions_dir)
        && err.kind() != io::ErrorKind::AlreadyExists
    {
        return Err(err).context("mkdir missions");
    }

    for (name, list) in builtins() {
        let path = missions_dir.join(format!("{name}.{}", format.extension()));
        write_rendered(&list, format, &path).with_context(|| format!("build {name}"))?;
    }

    Ok(())
}

pub fn json_schema(output: &Path, gzip: bool) -> Result<()> {
    let schema = schemars::schema_for!(MissionsList);
    let writer = BufWriter::new(fs::File::create(output).context("create output")?);

    if gzip {
        let mut encoder = flate2::write::GzEncoder::new(writer, flate2::Compression::best());
        serde_json::to_writer(&mut encoder, &schema).context("write schema")?;
        encoder.finish().context("finish gzip stream")?.flush().context("flush output")?;
    } else {
        let mut writer = writer;
        serde_json::to_writer(&mut writer, &schema).context("write schema")?;
        writer.flush().context("flush output")?;
    }

    Ok(())
}

pub fn from_json(input: &Path, output: &Path, format: OutputFormat) -> Result<()> {
    let list: MissionsList =
        serde_json::from_reader(BufReader::new(fs::File::open(input).context("open input")?))
            .context("parse json")?;
    tracing::debug!(path = %input.display(), missions = list.missions.len(), "Parsed mission list");

    write_rendered(&list, format, output)
}

pub fn to_json(name: &str, output: &Path) -> Result<()> {
    let Some((_, list)) = builtins().find(|&(builtin, _)| builtin == name) else {
        let known: Vec<_> = builtins().map(|(builtin, _)| builtin).collect();
        anyhow::bail!("No built-in mission list called {name:?}, expected one of {known:?}");
    };

    let mut writer = BufWriter::new(fs::File::create(output).context("create output")?);
    serde_json::to_writer_pretty(&mut writer, &list).context("write json")?;
    writer.flush().context("flush output")?;
    Ok(())
}
