use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{anyhow, bail, Context, Result};
use clap::{App, Arg, ArgMatches};

use easel_engine::canvas::{PixelCanvas, PixelCanvasFactory};
use easel_engine::coords::Size;
use easel_engine::logging::{init_logging, LoggingConfig};
use easel_engine::painter::{ChannelReceiver, EventLoop, Frame, LoopConfig, DEFAULT_QUEUE_CAPACITY};
use easel_script::Parser;

/// What a run should do, resolved from the command line.
#[derive(Debug)]
struct Options {
    loop_config: LoopConfig,
    out: Option<PathBuf>,
    /// Script files in submission order. Empty means stdin.
    scripts: Vec<PathBuf>,
}

fn main() -> Result<()> {
    let params = cli().get_matches();

    init_logging(LoggingConfig::default().verbosity(params.occurrences_of("verbose")));

    let options = Options::from_matches(&params)?;
    run(&options)
}

fn cli() -> App<'static, 'static> {
    App::new(env!("CARGO_PKG_NAME"))
        .version(env!("CARGO_PKG_VERSION"))
        .about("Runs easel drawing scripts through the painting loop, off-screen")
        .after_help(concat!(
            "Scripts are parsed in order by one parser, so later scripts build on\n",
            "the picture left by earlier ones. With no SCRIPT, stdin is read.\n",
        ))
        .arg(Arg::with_name("verbose")
            .short("v")
            .multiple(true)
            .help("Raises log verbosity (repeat for more); RUST_LOG overrides"))
        .arg(Arg::with_name("size")
            .long("size")
            .short("s")
            .takes_value(true)
            .value_name("WxH")
            .help("Canvas size in pixels (default 800x800)"))
        .arg(Arg::with_name("capacity")
            .long("capacity")
            .short("c")
            .takes_value(true)
            .value_name("N")
            .help("Operations queued before posting blocks"))
        .arg(Arg::with_name("out")
            .long("out")
            .short("o")
            .takes_value(true)
            .value_name("FILE.png")
            .help("Writes the last published frame as PNG"))
        .arg(Arg::with_name("SCRIPT")
            .help("Script files to run, in order")
            .multiple(true)
            .index(1))
}

impl Options {
    fn from_matches(params: &ArgMatches<'_>) -> Result<Self> {
        let mut loop_config = LoopConfig::default();

        if let Some(size) = params.value_of("size") {
            loop_config.canvas_size = parse_size(size)?;
        }

        if let Some(capacity) = params.value_of("capacity") {
            loop_config.queue_capacity = capacity
                .parse()
                .with_context(|| format!("invalid --capacity `{capacity}`"))?;
            if loop_config.queue_capacity == 0 {
                bail!("--capacity must be at least 1 (default {DEFAULT_QUEUE_CAPACITY})");
            }
        }

        let scripts = params
            .values_of_os("SCRIPT")
            .map(|values| values.map(PathBuf::from).collect())
            .unwrap_or_default();

        Ok(Self {
            loop_config,
            out: params.value_of_os("out").map(PathBuf::from),
            scripts,
        })
    }
}

/// Parses `WIDTHxHEIGHT`, e.g. `800x600`. Both sides must be non-zero.
fn parse_size(spec: &str) -> Result<Size> {
    let (w, h) = spec
        .split_once(['x', 'X'])
        .ok_or_else(|| anyhow!("invalid --size `{spec}`: expected WIDTHxHEIGHT"))?;

    let width: u32 = w.trim().parse().with_context(|| format!("invalid width in `{spec}`"))?;
    let height: u32 = h.trim().parse().with_context(|| format!("invalid height in `{spec}`"))?;

    let size = Size::new(width, height);
    if !size.is_valid() {
        bail!("invalid --size `{spec}`: both sides must be non-zero");
    }
    Ok(size)
}

fn run(options: &Options) -> Result<()> {
    let (receiver, frames) = ChannelReceiver::<PixelCanvas>::new();
    let mut event_loop =
        EventLoop::<PixelCanvas>::with_config(options.loop_config.clone(), Arc::new(receiver));
    event_loop.start(&PixelCanvasFactory).context("failed to start the painting loop")?;

    let mut parser = Parser::new();
    if options.scripts.is_empty() {
        submit(&event_loop, &mut parser, io::stdin().lock(), Path::new("<stdin>"))?;
    } else {
        for path in &options.scripts {
            let file = File::open(path).with_context(|| format!("cannot open {}", path.display()))?;
            submit(&event_loop, &mut parser, BufReader::new(file), path)?;
        }
    }

    event_loop.stop_and_wait().context("painting loop did not shut down cleanly")?;

    let published: Vec<Frame<PixelCanvas>> = frames.try_iter().collect();
    log::info!("{} frame(s) published", published.len());

    if let Some(out) = &options.out {
        let last = published
            .last()
            .ok_or_else(|| anyhow!("no frame was published; add `update` to a script to write {}", out.display()))?;
        last.canvas
            .read()
            .image()
            .save(out)
            .with_context(|| format!("cannot write {}", out.display()))?;
        log::info!("wrote frame {} to {}", last.time.frame_index, out.display());
    }

    Ok(())
}

fn submit<R: BufRead>(
    event_loop: &EventLoop<PixelCanvas>,
    parser: &mut Parser,
    script: R,
    name: &Path,
) -> Result<()> {
    let ops = parser.parse(script).with_context(|| format!("in {}", name.display()))?;
    log::debug!("{}: posting {} operation(s)", name.display(), ops.len());

    for op in ops {
        event_loop.post(op).with_context(|| format!("cannot post operations from {}", name.display()))?;
    }
    Ok(())
}
