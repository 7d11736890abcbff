use anyhow::{ Context, bail };
use clap::{ Parser, Subcommand };
use tracing::debug;
use tracing_subscriber::EnvFilter;

use qstree::{ Params, UrlComponent, decode, encode, parse_url };

#[derive(Parser, Debug)]
#[command(name = "qstree", about = "Decode / encode nested query strings")]
struct Opt {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// 解码为 JSON
    Decode {
        input: String,

        #[arg(long)]
        pretty: bool,
    },
    /// 把 key=value 编码为 query string，重复 key 视为多值
    Encode {
        #[arg(required = true)]
        pairs: Vec<String>,
    },
    /// 解析 URL
    ParseUrl {
        url: String,

        #[arg(long)]
        component: Option<UrlComponent>,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let opt = Opt::parse();
    debug!(?opt, "qstree started");

    match opt.command {
        Command::Decode { input, pretty } => {
            let tree = decode(&input).with_context(|| format!("failed to decode {:?}", input))?;
            let json = if pretty {
                serde_json::to_string_pretty(&tree)?
            } else {
                serde_json::to_string(&tree)?
            };
            println!("{}", json);
        }
        Command::Encode { pairs } => {
            let mut params = Params::new();
            for pair in &pairs {
                let Some((key, value)) = pair.split_once('=') else {
                    bail!("expected KEY=VALUE, got {:?}", pair);
                };
                params.entry(key.to_string()).or_default().push(value.to_string());
            }
            println!("{}", encode(&params));
        }
        Command::ParseUrl { url, component } => {
            let parts = parse_url(&url).context("failed to parse url")?;
            match component {
                Some(c) => println!("{}", parts.component(c).unwrap_or_default()),
                None => println!("{}", serde_json::to_string(&parts.to_map())?),
            }
        }
    }

    Ok(())
}
