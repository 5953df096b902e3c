mod settings;

use agora_ecdsa::hasher::HashAlgorithm;
use agora_ecdsa::parse::parse_int;
use agora_ecdsa::rng::RandomNonce;
use agora_ecdsa::{Curve, Ecdsa, Keypair, Point, Signature};
use num_bigint::BigInt;
use rand::rngs::OsRng;
use structopt::StructOpt;

#[derive(StructOpt)]
#[structopt(name = "agora-ecdsa", about = "ECDSA signatures over secp256k1")]
struct Opt {
    #[structopt(long, help = "hash algorithm (sha256 or keccak256), overrides the configured one")]
    hash: Option<HashAlgorithm>,
    #[structopt(subcommand)]
    cmd: Command,
}

#[derive(StructOpt)]
enum Command {
    /// Generates a random keypair
    Keygen,
    /// Derives the public key belonging to a private key
    Pubkey {
        #[structopt(long, parse(try_from_str = parse_int))]
        private_key: BigInt,
    },
    /// Hashes and signs a message
    Sign {
        #[structopt(long, parse(try_from_str = parse_int))]
        private_key: BigInt,
        #[structopt(long)]
        message: String,
    },
    /// Verifies a signature, exits with status 1 if it is invalid
    Verify {
        #[structopt(long)]
        message: String,
        #[structopt(long, parse(try_from_str = parse_int))]
        r: BigInt,
        #[structopt(long, parse(try_from_str = parse_int))]
        s: BigInt,
        #[structopt(long, parse(try_from_str = parse_int))]
        pubkey_x: BigInt,
        #[structopt(long, parse(try_from_str = parse_int))]
        pubkey_y: BigInt,
    },
}

fn main() -> anyhow::Result<()> {
    let settings = settings::get_config()?;
    env_logger::Builder::new()
        .parse_filters(&settings.log_level)
        .init();

    let opt = Opt::from_args();
    let hash = opt.hash.unwrap_or(settings.hash_algorithm);
    log::debug!("hashing messages with {:?}", hash);

    let curve = Curve::secp256k1();
    let ecdsa = Ecdsa::new(&curve)?;

    match opt.cmd {
        Command::Keygen => {
            let keypair = Keypair::random(&ecdsa, &mut OsRng)?;
            println!("private key: {:#066x}", keypair.privkey());
            println!("{}", keypair.pubkey());
        }
        Command::Pubkey { private_key } => {
            println!("{}", ecdsa.derive_public_key(&private_key)?);
        }
        Command::Sign {
            private_key,
            message,
        } => {
            let keypair = Keypair::new(&ecdsa, private_key)?;
            let signature =
                keypair.sign_message(&ecdsa, hash, message.as_bytes(), &mut RandomNonce::os())?;
            println!("{}", signature);
        }
        Command::Verify {
            message,
            r,
            s,
            pubkey_x,
            pubkey_y,
        } => {
            let public_key = Point::new(&curve, pubkey_x, pubkey_y)?;
            let digest = hash.digest(message.as_bytes());
            let valid = ecdsa.verify(&digest, &Signature::new(r, s), &public_key)?;
            println!("{}", valid);
            if !valid {
                std::process::exit(1);
            }
        }
    }

    Ok(())
}
