use anyhow::Result;
use goly_core::{ShortKey, ShortenParams, UrlStore};
use std::io::Write;
use std::num::ParseIntError;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};

type Input = Lines<BufReader<Stdin>>;

/// Interactive command loop over the URL store.
///
/// The shell only formats engine results; every engine error is printed
/// and the loop continues. The store handle is passed in explicitly at
/// construction, there is no ambient global instance.
pub struct Repl {
    store: Arc<dyn UrlStore>,
    default_ttl_days: i64,
}

impl Repl {
    pub fn new(store: Arc<dyn UrlStore>, default_ttl_days: i64) -> Self {
        Self {
            store,
            default_ttl_days,
        }
    }

    pub async fn run(&self) -> Result<()> {
        let mut input = BufReader::new(tokio::io::stdin()).lines();

        println!("goly url shortener ready");
        loop {
            println!();
            println!("1: shorten url | 2: resolve (click) | 3: dashboard | 4: exit");
            let Some(choice) = prompt(&mut input, "action > ").await? else {
                break;
            };

            match choice.trim() {
                "1" => self.shorten(&mut input).await?,
                "2" => self.resolve(&mut input).await?,
                "3" => self.dashboard().await,
                "4" => break,
                other => println!("unknown command: {}", other),
            }
        }
        println!("shutting down");

        Ok(())
    }

    async fn shorten(&self, input: &mut Input) -> Result<()> {
        let Some(url) = prompt(input, "enter long url: ").await? else {
            return Ok(());
        };
        let Some(alias) = prompt(input, "custom alias (blank for auto): ").await? else {
            return Ok(());
        };
        let ttl_prompt = format!("days until expiry (default {}): ", self.default_ttl_days);
        let Some(ttl) = prompt(input, &ttl_prompt).await? else {
            return Ok(());
        };

        let ttl_days = match parse_ttl_days(&ttl, self.default_ttl_days) {
            Ok(days) => days,
            Err(err) => {
                println!("error: invalid ttl: {}", err);
                return Ok(());
            }
        };

        let custom_alias = match alias.trim() {
            "" => None,
            alias => match ShortKey::new(alias) {
                Ok(key) => Some(key),
                Err(err) => {
                    println!("error: {}", err);
                    return Ok(());
                }
            },
        };

        let params = ShortenParams {
            original_url: url.trim().to_string(),
            ttl_days,
            custom_alias,
        };

        match self.store.shorten(params).await {
            Ok(short_url) => println!("short url: {}", short_url),
            Err(err) => println!("error: {}", err),
        }
        Ok(())
    }

    async fn resolve(&self, input: &mut Input) -> Result<()> {
        let Some(short_url) = prompt(input, "enter short url to resolve: ").await? else {
            return Ok(());
        };

        match self.store.resolve(short_url.trim()).await {
            Ok(original_url) => println!("redirecting to: {}", original_url),
            Err(err) => println!("error: {}", err),
        }
        Ok(())
    }

    async fn dashboard(&self) {
        match self.store.stats().await {
            Ok(stats) if stats.is_empty() => println!("no urls in the system"),
            Ok(stats) => {
                println!("--- active url analytics ---");
                for entry in stats {
                    println!(
                        "short: {:<24} | clicks: {:<4} | expires: {} | target: {}",
                        entry.short_url, entry.clicks, entry.expires_at, entry.original_url
                    );
                }
            }
            Err(err) => println!("error: {}", err),
        }
    }
}

/// Empty input falls back to the configured default TTL.
fn parse_ttl_days(input: &str, default: i64) -> Result<i64, ParseIntError> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(default);
    }
    input.parse()
}

async fn prompt(input: &mut Input, message: &str) -> Result<Option<String>> {
    print!("{}", message);
    std::io::stdout().flush()?;
    Ok(input.next_line().await?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_ttl_uses_default() {
        assert_eq!(parse_ttl_days("", 7), Ok(7));
        assert_eq!(parse_ttl_days("   ", 7), Ok(7));
    }

    #[test]
    fn explicit_ttl_is_parsed() {
        assert_eq!(parse_ttl_days("30", 7), Ok(30));
        assert_eq!(parse_ttl_days(" 0 ", 7), Ok(0));
        assert_eq!(parse_ttl_days("-1", 7), Ok(-1));
    }

    #[test]
    fn garbage_ttl_is_an_error() {
        assert!(parse_ttl_days("soon", 7).is_err());
    }
}
