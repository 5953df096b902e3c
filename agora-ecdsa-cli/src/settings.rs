use agora_ecdsa::hasher::HashAlgorithm;
use config::{Config, ConfigError, Environment};
use dotenv::dotenv;

const ENV_PREFIX: &str = "AGORA_ECDSA";

#[derive(serde::Deserialize, Debug)]
pub struct Settings {
    pub hash_algorithm: HashAlgorithm,
    pub log_level: String,
}

pub fn get_config() -> Result<Settings, ConfigError> {
    // NOTE a missing .env file is not an error, variables may come
    // from the process environment alone
    dotenv().ok();
    build_settings(Environment::with_prefix(ENV_PREFIX))
}

fn build_settings(env: Environment) -> Result<Settings, ConfigError> {
    Config::builder()
        .set_default("hash_algorithm", "sha256")?
        .set_default("log_level", "info")?
        .add_source(env)
        .build()?
        .try_deserialize()
}

#[cfg(test)]
mod test {
    use super::*;
    use config::Map;

    fn env_from(vars: &[(&str, &str)]) -> Environment {
        let map: Map<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Environment::with_prefix(ENV_PREFIX).source(Some(map))
    }

    #[test]
    fn defaults() {
        let settings = build_settings(env_from(&[])).unwrap();
        assert_eq!(settings.hash_algorithm, HashAlgorithm::Sha256);
        assert_eq!(settings.log_level, "info");
    }

    #[test]
    fn environment_overrides() {
        let settings = build_settings(env_from(&[
            ("AGORA_ECDSA_HASH_ALGORITHM", "keccak256"),
            ("AGORA_ECDSA_LOG_LEVEL", "agora_ecdsa=debug"),
        ]))
        .unwrap();
        assert_eq!(settings.hash_algorithm, HashAlgorithm::Keccak256);
        assert_eq!(settings.log_level, "agora_ecdsa=debug");
    }

    #[test]
    fn unknown_algorithm() {
        let result = build_settings(env_from(&[("AGORA_ECDSA_HASH_ALGORITHM", "md5")]));
        assert!(result.is_err());
    }
}
