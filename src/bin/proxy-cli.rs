use clap::{Parser, Subcommand};
use serde_json::Value;

#[derive(Parser)]
#[command(name = "proxy-cli")]
#[command(about = "Command line client for the Saavn pass-through proxy", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://localhost:8000")]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the proxy banner and configured upstream
    Status,
    /// Call the hello endpoint
    Hello,
    /// Show the health descriptor
    Health,
    /// Search the upstream catalogue
    Search {
        /// Search text
        query: String,
    },
    /// GET an arbitrary upstream path through the proxy
    Get {
        /// Upstream path, e.g. `songs`
        path: String,

        /// Query parameter as key=value; repeatable
        #[arg(short, long = "param", value_parser = parse_param)]
        params: Vec<(String, String)>,
    },
}

fn parse_param(raw: &str) -> Result<(String, String), String> {
    raw.split_once('=')
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .ok_or_else(|| format!("expected key=value, got `{raw}`"))
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();
    let base = cli.url.trim_end_matches('/');

    let request = match cli.command {
        Commands::Status => client.get(format!("{}/", base)),
        Commands::Hello => client.get(format!("{}/api/hello", base)),
        Commands::Health => client.get(format!("{}/test", base)),
        Commands::Search { query } => client
            .get(format!("{}/api/search", base))
            .query(&[("q", query)]),
        Commands::Get { path, params } => client
            .get(format!("{}/api/saavn/{}", base, path.trim_start_matches('/')))
            .query(&params),
    };

    print_response(request.send().await?).await
}

async fn print_response(res: reqwest::Response) -> Result<(), Box<dyn std::error::Error>> {
    let status = res.status();
    let text = res.text().await?;

    if !status.is_success() {
        eprintln!("Error: proxy returned status {}", status);
    }

    match serde_json::from_str::<Value>(&text) {
        Ok(json) => println!("{}", serde_json::to_string_pretty(&json)?),
        Err(_) => println!("{}", text),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn param_splits_on_first_equals() {
        assert_eq!(
            parse_param("id=a=b").unwrap(),
            ("id".to_string(), "a=b".to_string())
        );
    }

    #[test]
    fn param_without_equals_is_rejected() {
        assert!(parse_param("id").is_err());
    }

    #[test]
    fn get_collects_repeated_params() {
        let cli = Cli::try_parse_from(["proxy-cli", "get", "songs", "-p", "id=1", "-p", "lang=hi"]).unwrap();
        match cli.command {
            Commands::Get { path, params } => {
                assert_eq!(path, "songs");
                assert_eq!(params.len(), 2);
            }
            _ => panic!("expected get"),
        }
    }
}
