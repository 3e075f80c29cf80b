mod debug_report;

use std::io::{self, IsTerminal, Read};

use chislitel::{
    Context, Error, FormatOptions, Gender, Options, Result, TimeFormat, DEFAULT_DENOMINATORS,
    extract_datetime_verbose_with, extract_duration, extract_number_with, extract_numbers_with, nice_number_with,
    nice_time_with, normalize, parse_default_time, parse_reference, pronounce_number_with,
};
use chrono::NaiveDateTime;
use tracing_subscriber::EnvFilter;

fn main() {
    let config = match parse_args() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(2);
        }
    };
    init_tracing(config.verbose);

    if let Err(err) = run(&config) {
        eprintln!("error: {err}");
        std::process::exit(2);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Number,
    Numbers,
    Duration,
    Datetime,
    Pronounce,
    NiceNumber,
    NiceTime,
    Normalize,
}

impl Command {
    fn parse(name: &str) -> Option<Command> {
        Some(match name {
            "number" => Command::Number,
            "numbers" => Command::Numbers,
            "duration" => Command::Duration,
            "datetime" => Command::Datetime,
            "pronounce" => Command::Pronounce,
            "nice-number" => Command::NiceNumber,
            "nice-time" => Command::NiceTime,
            "normalize" => Command::Normalize,
            _ => return None,
        })
    }
}

struct CliConfig {
    command: Command,
    input: String,
    context: Context,
    options: Options,
    format: FormatOptions,
    time_format: TimeFormat,
    verbose: bool,
    color: bool,
}

fn run(config: &CliConfig) -> Result<()> {
    let input = config.input.trim();
    match config.command {
        Command::Number => match extract_number_with(input, &config.options) {
            Some(n) => println!("{n}"),
            None => println!("-"),
        },
        Command::Numbers => match extract_numbers_with(input, &config.options) {
            Some(found) => println!("{}", found.iter().map(f64::to_string).collect::<Vec<_>>().join(" ")),
            None => println!("-"),
        },
        Command::Duration => match extract_duration(input) {
            Some((Some(duration), rest)) => println!("{}s\t{rest}", duration.num_milliseconds() as f64 / 1000.0),
            Some((None, rest)) => println!("-\t{rest}"),
            None => println!("-"),
        },
        Command::Datetime => {
            let res = extract_datetime_verbose_with(input, &config.context);
            if config.verbose {
                debug_report::print_run(&res, config.color);
            } else {
                match &res.result {
                    Some((when, rest)) => println!("{}\t{rest}", when.format("%Y-%m-%dT%H:%M:%S")),
                    None => println!("-"),
                }
            }
        }
        Command::Pronounce => {
            let spoken = match input.parse::<i128>() {
                Ok(n) => pronounce_number_with(n, &config.format),
                Err(_) => pronounce_number_with(parse_float(input)?, &config.format),
            };
            println!("{spoken}");
        }
        Command::NiceNumber => {
            let value = parse_float(input)?;
            println!("{}", nice_number_with(value, config.time_format.speech, &DEFAULT_DENOMINATORS));
        }
        Command::NiceTime => {
            let dt = parse_clock(input, config.context.reference_time)?;
            println!("{}", nice_time_with(dt, &config.time_format));
        }
        Command::Normalize => println!("{}", normalize(input, false)),
    }
    Ok(())
}

fn parse_float(value: &str) -> Result<f64> {
    value.replace(',', ".").parse().map_err(|_| Error::invalid_argument(format!("'{value}' is not a number")))
}

/// A full timestamp, or a bare `HH:MM[:SS]` on the reference date.
fn parse_clock(value: &str, reference: NaiveDateTime) -> Result<NaiveDateTime> {
    parse_reference(value).or_else(|_| {
        parse_default_time(value)
            .map(|time| reference.date().and_time(time))
            .map_err(|_| Error::invalid_argument(format!("'{value}' is not a time")))
    })
}

fn init_tracing(verbose: bool) {
    let mut filter = std::env::var("CHISLITEL_LOG")
        .or_else(|_| std::env::var("RUST_LOG"))
        .ok()
        .and_then(|spec| EnvFilter::try_new(spec).ok())
        .unwrap_or_else(|| EnvFilter::new("warn"));
    if verbose {
        if let Ok(directive) = "chislitel=debug".parse() {
            filter = filter.add_directive(directive);
        }
    }
    tracing_subscriber::fmt().compact().with_writer(io::stderr).with_env_filter(filter).init();
}

fn next_value(args: &mut impl Iterator<Item = String>, flag: &str) -> Result<String> {
    args.next().ok_or_else(|| Error::invalid_argument(format!("{flag} expects a value")))
}

fn parse_args() -> Result<CliConfig> {
    let mut command: Option<Command> = None;
    let mut input: Option<String> = None;
    let mut context = Context::default();
    let mut options = Options::default();
    let mut format = FormatOptions::default();
    let mut time_format = TimeFormat::default();
    let mut verbose = false;
    let mut color = io::stdout().is_terminal();
    let mut args = std::env::args().skip(1);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            "-V" | "--version" => {
                println!("chislitel {}", env!("CARGO_PKG_VERSION"));
                std::process::exit(0);
            }
            "--color" => color = true,
            "--no-color" => color = false,
            "--verbose" | "-v" => verbose = true,
            "--long-scale" => {
                options.short_scale = false;
                format.short_scale = false;
            }
            "--ordinals" => options.ordinals = true,
            "--scientific" => format.scientific = true,
            "--feminine" => format.gender = Gender::Feminine,
            "--24h" => time_format.use_24hour = true,
            "--ampm" => time_format.use_ampm = true,
            "--display" => time_format.speech = false,
            "--reference" => context.reference_time = parse_reference(&next_value(&mut args, "--reference")?)?,
            "--default-time" => {
                context.default_time = Some(parse_default_time(&next_value(&mut args, "--default-time")?)?)
            }
            "--places" => {
                let value = next_value(&mut args, "--places")?;
                format.places =
                    value.parse().map_err(|_| Error::invalid_argument(format!("invalid --places '{value}'")))?;
            }
            "--" => {
                let rest = args.by_ref().collect::<Vec<_>>().join(" ");
                if !rest.trim().is_empty() {
                    input = Some(rest);
                }
                break;
            }
            _ if arg.starts_with("--reference=") => {
                context.reference_time = parse_reference(arg.trim_start_matches("--reference="))?;
            }
            _ if arg.starts_with("--default-time=") => {
                context.default_time = Some(parse_default_time(arg.trim_start_matches("--default-time="))?);
            }
            // A leading minus on a number is input, not an option.
            _ if arg.starts_with('-') && arg.parse::<f64>().is_err() => {
                return Err(Error::invalid_argument(format!("unknown option '{arg}'")));
            }
            _ if command.is_none() => {
                command = Some(
                    Command::parse(&arg)
                        .ok_or_else(|| Error::invalid_argument(format!("unknown command '{arg}'\n\n{}", help_text())))?,
                );
            }
            _ => {
                let rest = std::iter::once(arg).chain(args.by_ref()).collect::<Vec<_>>().join(" ");
                input = Some(rest);
                break;
            }
        }
    }

    let command = command.ok_or_else(|| Error::invalid_argument(format!("no command given\n\n{}", help_text())))?;
    let input = match input {
        Some(value) => value,
        None => read_stdin_input()?,
    };
    if input.trim().is_empty() {
        return Err(Error::MissingInput);
    }

    Ok(CliConfig { command, input, context, options, format, time_format, verbose, color })
}

fn read_stdin_input() -> Result<String> {
    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer)?;
    Ok(buffer)
}

fn print_help() {
    println!("{}", help_text());
}

fn help_text() -> String {
    format!(
        "chislitel {version}

Russian numbers, durations and datetimes.

Usage:
  chislitel <command> [OPTIONS] [--] <input...>

Commands:
  number        First number in the text.
  numbers       All numbers in the text.
  duration      Total duration and leftover words.
  datetime      Datetime and leftover words.
  pronounce     Number in words.
  nice-number   Number as a mixed fraction.
  nice-time     Clock time in words (HH:MM or YYYY-MM-DDTHH:MM:SS).
  normalize     Lowercase, strip punctuation, small numbers as digits.

Options:
  --reference <timestamp>    Reference time in YYYY-MM-DDTHH:MM:SS.
                             Default: now.
  --default-time <HH:MM>     Time of day for dates without a clock time.
  --long-scale               Long scale for extraction and pronunciation.
  --ordinals                 Read ordinals as numbers.
  --places <n>               Decimal places to pronounce (default 2).
  --scientific               Pronounce in scientific notation.
  --feminine                 Pronounce in feminine gender.
  --24h                      24-hour clock for nice-time.
  --ampm                     Add AM/PM (до/после полудня) for nice-time.
  --display                  Digits instead of words for nice-time and
                             nice-number.
  -v, --verbose              Rule trace for datetime; debug logging.
  --color                    Force ANSI color output.
  --no-color                 Disable ANSI color output.
  -h, --help                 Show this help message.
  -V, --version              Print version information.

Environment:
  CHISLITEL_LOG              Log filter (falls back to RUST_LOG, default warn).

Exit codes:
  0  Success.
  2  Invalid arguments or missing input.
",
        version = env!("CARGO_PKG_VERSION"),
    )
}
