//! Access link issuer
//!
//! Prints the QR-code deep link for each seminar id, using the same
//! `SEMINAR_ACCESS_SECRET` and `PUBLIC_DETAIL_URL` as the server.
//!
//! ```text
//! issue-link 42 43
//! issue-link --token-only 42
//! issue-link --generate-secret
//! ```

use api::config::seminar_config_from_env;
use clap::Parser;
use kernel::id::SeminarId;
use platform::crypto::random_hex;
use seminar::issue_access_link;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Seminar ids to issue links for
    #[arg(required_unless_present = "generate_secret", value_name = "SEMINAR_ID")]
    seminar_ids: Vec<u64>,

    /// Print only the token instead of the full URL
    #[arg(long)]
    token_only: bool,

    /// Print a fresh random value for SEMINAR_ACCESS_SECRET and exit
    #[arg(long, conflicts_with_all = ["seminar_ids", "token_only"])]
    generate_secret: bool,
}

/// Bytes of entropy in a generated secret
const SECRET_BYTES: usize = 32;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.generate_secret {
        println!("{}", random_hex(SECRET_BYTES));
        return Ok(());
    }

    dotenvy::dotenv().ok();

    let config = seminar_config_from_env()?;

    for id in cli.seminar_ids {
        let link = issue_access_link(SeminarId::new(id), &config);
        if cli.token_only {
            println!("{}", link.token);
        } else {
            println!("{}\t{}", link.seminar_id, link.url);
        }
    }

    Ok(())
}
