use chrono::NaiveDateTime;
use clap::{Parser, ValueEnum};
use sepalib::{
    assemble::DATE_TIME_FORMAT,
    clock::{Clock, FixedClock, SystemClock},
    config::{BuildOptions, ControlSumPolicy},
    error::{Result, SepaError},
    formats::{csv::Csv, pain001::Pain001, xml::SimpleXml},
    model::TransferRequest,
    traits::{ReadFormat, WriteFormat},
};
use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Copy, Clone, Debug, ValueEnum)]
enum Fmt {
    Csv,
    Xml,
    Pain001,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum CtrlSum {
    Trusted,
    Recomputed,
}

#[derive(Parser, Debug)]
#[command(name = "sepa", version, about = "SEPA credit transfer: CSV/XML -> pain.001.001.03")]
struct Cli {
    /// Входной файл (по умолчанию stdin)
    #[arg(short = 'i', long = "input")]
    input: Option<PathBuf>,

    /// Выходной файл (по умолчанию stdout)
    #[arg(short = 'o', long = "output")]
    output: Option<PathBuf>,

    /// Формат входа
    #[arg(long = "in-format", value_enum)]
    in_format: Fmt,

    /// Формат выхода
    #[arg(long = "out-format", value_enum, default_value = "pain001")]
    out_format: Fmt,

    /// YAML с настройками сборки (control_sum, indent)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Откуда брать CtrlSum; перекрывает config
    #[arg(long = "control-sum", value_enum)]
    control_sum: Option<CtrlSum>,

    /// Отступ в выходном XML; перекрывает config
    #[arg(long)]
    indent: Option<usize>,

    /// Фиксированное время создания (YYYY-MM-DDTHH:MM:SS) вместо системного
    #[arg(long = "created-at", value_parser = parse_created_at)]
    created_at: Option<NaiveDateTime>,

    /// Подробность логов (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn parse_created_at(s: &str) -> std::result::Result<NaiveDateTime, String> {
    NaiveDateTime::parse_from_str(s, DATE_TIME_FORMAT).map_err(|e| e.to_string())
}

/// Настройки из config, поверх — флаги командной строки.
fn build_options(cli: &Cli) -> Result<BuildOptions> {
    let mut options = match &cli.config {
        Some(path) => BuildOptions::from_path(path)?,
        None => BuildOptions::default(),
    };
    if let Some(cs) = cli.control_sum {
        options.control_sum = match cs {
            CtrlSum::Trusted => ControlSumPolicy::Trusted,
            CtrlSum::Recomputed => ControlSumPolicy::Recomputed,
        };
    }
    if let Some(indent) = cli.indent {
        options.indent = indent;
    }
    Ok(options)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    let options = build_options(&cli)?;
    tracing::debug!(?options, "build options");

    // reader
    let reader: Box<dyn io::Read> = match &cli.input {
        Some(path) => Box::new(File::open(path)?),
        None => Box::new(io::stdin()),
    };
    let br = BufReader::new(reader);

    let req = match cli.in_format {
        Fmt::Csv => Csv.read(br),
        Fmt::Xml => SimpleXml.read(br),
        Fmt::Pain001 => Pain001::new().read(br),
    }?;
    tracing::info!(
        msg_id = %req.message_id,
        payments = req.payments.len(),
        "transfer request loaded"
    );

    // writer
    let mut writer: Box<dyn Write> = match &cli.output {
        Some(path) => Box::new(File::create(path)?),
        None => Box::new(io::stdout()),
    };

    match cli.out_format {
        Fmt::Csv => Csv.write(&mut writer, &req),
        Fmt::Xml => SimpleXml.write(&mut writer, &req),
        Fmt::Pain001 => match cli.created_at {
            Some(at) => write_pain001(FixedClock(at), options, &mut writer, &req),
            None => write_pain001(SystemClock, options, &mut writer, &req),
        },
    }?;

    writer.flush().map_err(SepaError::from)
}

fn write_pain001<C: Clock, W: Write>(
    clock: C,
    options: BuildOptions,
    w: W,
    req: &TransferRequest,
) -> Result<()> {
    Pain001::with_clock(clock).options(options).write(w, req)
}
