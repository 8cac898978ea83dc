use std::net::SocketAddr;
use std::path::PathBuf;

pub const DEFAULT_PORT: u16 = 8080;
/// Lives outside the code path so the directory can be volume-mounted.
pub const DEFAULT_DATA_PATH: &str = "data/progressions.json";

/// Process configuration. The port is the one externally-visible knob
/// (`CHORDCRAFT_PORT`); the backing file path is injected so tests and the
/// binary can point the store anywhere.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub data_path: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, String> {
        let port = match std::env::var("CHORDCRAFT_PORT") {
            Ok(raw) => parse_port(&raw)?,
            Err(_) => DEFAULT_PORT,
        };
        Ok(Self {
            port,
            ..Self::default()
        })
    }

    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::from(([0, 0, 0, 0], self.port))
    }
}

fn parse_port(raw: &str) -> Result<u16, String> {
    let port = raw
        .trim()
        .parse::<u16>()
        .map_err(|_| format!("invalid CHORDCRAFT_PORT: {raw}"))?;
    if port == 0 {
        return Err("CHORDCRAFT_PORT must be non-zero".to_string());
    }
    Ok(port)
}
