//! `maskid` — operator tool for minting and resolving public entity tokens.
//!
//! Reads the base secret from `MASKID_SECRET`; without it the insecure dev
//! default is used and a warning is logged, so tokens printed here only match
//! production when the real secret is supplied.

use anyhow::Result;
use clap::{Parser, Subcommand};

use maskid_codec::{BaseSecret, CodecRegistry};
use maskid_core::{EntityId, Namespace};

#[derive(Parser)]
#[command(name = "maskid", about = "Mint and resolve public entity tokens")]
struct Cli {
    #[command(subcommand)]
    cmd: Cmd,
}

#[derive(Subcommand)]
enum Cmd {
    /// Mint the public token for a canonical identifier.
    Encode {
        /// Entity namespace (e.g. invoices, users).
        namespace: String,
        /// 24-hex-character canonical identifier.
        id: String,
    },

    /// Resolve a public token back to its canonical identifier.
    Decode {
        /// Entity namespace the token was minted under.
        namespace: String,
        /// The public token.
        token: String,
    },

    /// List the namespaces the registry serves.
    Namespaces,
}

fn main() -> Result<()> {
    maskid_observability::init();

    let cli = Cli::parse();
    let secret = BaseSecret::from_env();
    let registry = CodecRegistry::new(&secret);

    match cli.cmd {
        Cmd::Encode { namespace, id } => {
            let namespace: Namespace = namespace.parse()?;
            let id = EntityId::parse(&id)?;
            println!("{}", registry.encode(namespace, id));
        }
        Cmd::Decode { namespace, token } => {
            let namespace: Namespace = namespace.parse()?;
            println!("{}", registry.decode(namespace, &token)?);
        }
        Cmd::Namespaces => {
            for ns in registry.namespaces() {
                println!("{ns}");
            }
        }
    }

    Ok(())
}
