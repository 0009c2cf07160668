use based58::Alphabet;
use std::env;

#[derive(Debug, Clone)]
pub struct Configuration {
    iterations: usize,
    log_interval: usize,
    random_length: usize,
    alphabet_name: String,
    alphabet: Alphabet,
}

fn var(key: &str, default: Option<String>) -> Result<String, String> {
    match env::var(key) {
        Ok(value) => Ok(value),
        Err(_) => default.ok_or(format!("Missing {}", key)),
    }
}

fn var_map<T, E>(key: &str, mut f: impl FnMut(&str) -> Result<T, E>, default: Option<T>) -> Result<T, String> {
    match var(key, None) {
        Ok(value) => f(&value).map_err(|_| format!("Invalid {} {}", key, value)),
        Err(err) => default.ok_or(err),
    }
}

pub fn alphabet(name: &str) -> Option<Alphabet> {
    match name {
        "bitcoin" => Some(Alphabet::BITCOIN),
        "monero" => Some(Alphabet::MONERO),
        "ripple" => Some(Alphabet::RIPPLE),
        "flickr" => Some(Alphabet::FLICKR),
        _ => None,
    }
}

impl Configuration {
    pub fn new() -> Result<Self, String> {
        let iterations = var_map("ITERATIONS", |iterations| iterations.parse(), Some(100_000))?;
        let log_interval = var_map("LOG_INTERVAL", |interval| interval.parse(), Some(iterations / 4))?;
        let random_length = var_map("RANDOM_LENGTH", |length| length.parse(), Some(1024))?;
        let alphabet_name = var("ALPHABET", Some("bitcoin".to_string()))?.to_lowercase();
        let alphabet = alphabet(&alphabet_name).ok_or(format!("Invalid ALPHABET {}", alphabet_name))?;
        Ok(Self {
            iterations,
            log_interval,
            random_length,
            alphabet_name,
            alphabet,
        })
    }

    pub fn iterations(&self) -> usize {
        self.iterations
    }

    pub fn log_interval(&self) -> usize {
        self.log_interval
    }

    pub fn random_length(&self) -> usize {
        self.random_length
    }

    pub fn alphabet_name(&self) -> &str {
        &self.alphabet_name
    }

    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }
}
