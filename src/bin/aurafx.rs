use std::{
    fs::File,
    io::{BufReader, Write as _},
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "aurafx", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compile a scene request into a skill script.
    Compile(CompileArgs),
    /// Compile a multi-session project into one script.
    Project(ProjectArgs),
}

#[derive(Parser, Debug)]
struct CompileArgs {
    /// Input request JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output script path (stdout when omitted).
    #[arg(long)]
    out: Option<PathBuf>,

    /// Collapse circle groups into ring primitives.
    #[arg(long)]
    optimize: bool,

    /// Post a generation notification to this endpoint (overrides AURAFX_WEBHOOK_URL).
    #[arg(long)]
    notify_endpoint: Option<String>,

    /// Fetch the community banner from this URL (overrides AURAFX_BANNER_URL).
    #[arg(long)]
    banner_url: Option<String>,
}

#[derive(Parser, Debug)]
struct ProjectArgs {
    /// Input project JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output script path (stdout when omitted).
    #[arg(long)]
    out: Option<PathBuf>,

    /// Fetch the community banner from this URL (overrides AURAFX_BANNER_URL).
    #[arg(long)]
    banner_url: Option<String>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Compile(args) => cmd_compile(args),
        Command::Project(args) => cmd_project(args),
    }
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path, what: &str) -> anyhow::Result<T> {
    let f = File::open(path).with_context(|| format!("open {what} '{}'", path.display()))?;
    let value = serde_json::from_reader(BufReader::new(f))
        .with_context(|| format!("parse {what} JSON"))?;
    Ok(value)
}

fn write_output(out: Option<&Path>, text: &str) -> anyhow::Result<()> {
    let Some(path) = out else {
        let mut stdout = std::io::stdout().lock();
        writeln!(stdout, "{text}").context("write script to stdout")?;
        return Ok(());
    };
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    std::fs::write(path, text).with_context(|| format!("write script '{}'", path.display()))?;
    eprintln!("wrote {}", path.display());
    Ok(())
}

fn banner_config(url: Option<String>) -> aurafx::BannerConfig {
    let config = aurafx::BannerConfig::from_env();
    match url {
        Some(url) => config.with_source(url),
        None => config,
    }
}

fn cmd_compile(args: CompileArgs) -> anyhow::Result<()> {
    let mut request: aurafx::CompileRequest = read_json(&args.in_path, "request")?;
    request.optimize |= args.optimize;

    let banner = banner_config(args.banner_url);
    let mut notify = aurafx::NotifyConfig::from_env();
    if let Some(url) = args.notify_endpoint {
        notify = notify.with_endpoint(url);
    }

    let text = run_compile(&request, &banner, &notify)?;
    write_output(args.out.as_deref(), &text)
}

#[cfg(feature = "network")]
fn run_compile(
    request: &aurafx::CompileRequest,
    banner: &aurafx::BannerConfig,
    notify: &aurafx::NotifyConfig,
) -> anyhow::Result<String> {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("start async runtime")?;
    runtime.block_on(async {
        let ctx = aurafx::ScriptContext::new(
            aurafx::now_utc_timestamp(),
            aurafx::fetch_banner(banner).await,
        );
        let script = aurafx::compile(request, &ctx).context("compile request")?;
        // The process exits right after writing, so wait for the notification here.
        if let Some(task) = aurafx::dispatch(notify, script.summary(request, &ctx.generated_at))
            && let Err(err) = task.await
        {
            tracing::warn!(error = %err, "notification task failed");
        }
        Ok::<_, anyhow::Error>(script.text)
    })
}

#[cfg(not(feature = "network"))]
fn run_compile(
    request: &aurafx::CompileRequest,
    banner: &aurafx::BannerConfig,
    notify: &aurafx::NotifyConfig,
) -> anyhow::Result<String> {
    if notify.endpoint.is_some() {
        tracing::warn!("built without the network feature, notification skipped");
    }
    let ctx = aurafx::ScriptContext::new(aurafx::now_utc_timestamp(), banner.offline_text());
    Ok(aurafx::compile(request, &ctx).context("compile request")?.text)
}

fn cmd_project(args: ProjectArgs) -> anyhow::Result<()> {
    let project: aurafx::Project = read_json(&args.in_path, "project")?;
    let banner = banner_config(args.banner_url);
    let ctx = aurafx::ScriptContext::new(aurafx::now_utc_timestamp(), resolve_banner(&banner)?);
    let text = aurafx::compile_project(&project, &ctx).context("compile project")?;
    write_output(args.out.as_deref(), &text)
}

#[cfg(feature = "network")]
fn resolve_banner(banner: &aurafx::BannerConfig) -> anyhow::Result<String> {
    if banner.source.is_none() {
        return Ok(banner.offline_text());
    }
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("start async runtime")?;
    Ok(runtime.block_on(aurafx::fetch_banner(banner)))
}

#[cfg(not(feature = "network"))]
fn resolve_banner(banner: &aurafx::BannerConfig) -> anyhow::Result<String> {
    Ok(banner.offline_text())
}
