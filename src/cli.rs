// src/cli.rs
use std::path::PathBuf;

use clap::{ ArgAction, Parser };
use color_eyre::eyre::{ Result, WrapErr };
use log::{ info, LevelFilter };

use crate::{
    config::{
        consts::{ API_BASE_URL, TIMEOUT_SECS },
        options::{ AppOptions, OutputFormat },
    },
    core::html,
    file,
    lookup::SpecLookupController,
    progress::NullIndicator,
    render::{ self, Fragment, HtmlTarget, Surface },
    specs::DeviceResult,
};

/// Look up a phone's specifications (GSMArena via Varshade API).
#[derive(Parser, Debug)]
#[command(name = "cli", version, about)]
pub struct Args {
    /// Device name, e.g. Samsung S24 Ultra (words are joined with spaces)
    pub query: Vec<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Write to this file (or into this directory) instead of stdout
    #[arg(short, long)]
    pub out: Option<PathBuf>,

    /// Lookup endpoint; the query is sent as `?query=`
    #[arg(long, env = "SPEC_LOOKUP_ENDPOINT", default_value = API_BASE_URL)]
    pub endpoint: String,

    /// HTTP timeout in seconds
    #[arg(long, default_value_t = TIMEOUT_SECS)]
    pub timeout: u64,

    /// More log detail in .store/debug.log (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    pub fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::Info,
            1 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }

    pub fn query_text(&self) -> String {
        self.query.join(" ")
    }

    pub fn to_options(&self) -> AppOptions {
        let mut opts = AppOptions::default();
        opts.lookup.endpoint = self.endpoint.clone();
        opts.lookup.timeout_secs = self.timeout;
        opts.export.format = self.format;
        if let Some(out) = &self.out {
            opts.export.set_path(&out.to_string_lossy());
        }
        opts
    }
}

pub type CliSurface = Surface<HtmlTarget, NullIndicator>;

pub fn run(args: Args) -> Result<()> {
    let opts = args.to_options();
    let surface = Surface::new(HtmlTarget::default(), HtmlTarget::default(), NullIndicator);
    let mut ctl = SpecLookupController::from_options(&opts.lookup, surface)?;

    let query = args.query_text();
    let device = ctl.search(&query)?;

    let contents = render_output(opts.export.format, &device, ctl.surface())
        .wrap_err("rendering output")?;

    match file::write_export(&opts.export, &contents).wrap_err("writing output")? {
        Some(path) => eprintln!("Wrote {}", path.display()),
        None => print!("{contents}"),
    }
    info!("CLI: done format={:?}", opts.export.format);
    Ok(())
}

/// Final output for one device. HTML reuses what the controller rendered into
/// the two regions.
pub fn render_output(
    format: OutputFormat,
    device: &DeviceResult,
    surface: &CliSurface,
) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Html => Ok(html::page(&device.title, surface.image.html(), surface.results.html())),
        OutputFormat::Text => {
            let head = render::text::fragment(&Fragment::Device {
                title: device.title.clone(),
                image_url: device.image.clone(),
                fallback_url: s!(),
            });
            let sheet = render::build_sheet(device);
            Ok(join!(head, "\n", &render::text::sheet_text(&sheet)))
        }
        OutputFormat::Json => {
            let mut s = serde_json::to_string_pretty(device)?;
            s.push('\n');
            Ok(s)
        }
    }
}
