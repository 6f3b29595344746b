//! Configuration command handler.
//!
//! Prints the resolved configuration with the source of every value
//! (`default`, `file` or `env`) as pretty JSON:
//!
//! ```json
//! {
//!   "dealer": {
//!     "value": "reach17",
//!     "source": "default"
//!   },
//!   ...
//! }
//! ```

use crate::config::{self, ConfigResolved};
use crate::error::CliError;
use crate::ui;
use std::io::Write;

/// Loads the configuration from the environment and prints it.
///
/// # Errors
///
/// Returns `CliError::Config` if the file cannot be read or a value fails
/// validation, `CliError::Io` if writing fails.
pub fn handle_cfg_command(out: &mut dyn Write, err: &mut dyn Write) -> Result<(), CliError> {
    let resolved = match config::load_with_sources() {
        Ok(r) => r,
        Err(e) => {
            ui::write_error(err, &format!("Invalid configuration: {}", e))?;
            return Err(CliError::Config(format!("Invalid configuration: {}", e)));
        }
    };
    writeln!(out, "{}", render_config(&resolved)?)?;
    Ok(())
}

fn render_config(resolved: &ConfigResolved) -> Result<String, CliError> {
    let ConfigResolved { config, sources } = resolved;
    let display = serde_json::json!({
        "seed": {
            "value": config.seed,
            "source": sources.seed,
        },
        "dealer": {
            "value": config.dealer,
            "source": sources.dealer,
        },
        "threshold": {
            "value": config.threshold,
            "source": sources.threshold,
        },
        "agent": {
            "value": config.agent,
            "source": sources.agent,
        },
        "rounds": {
            "value": config.rounds,
            "source": sources.rounds,
        }
    });
    Ok(serde_json::to_string_pretty(&display).map_err(std::io::Error::other)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_every_key_with_source() {
        let resolved = config::load_from(|key| match key {
            "BLACKJACK_AGENT" => Some("random".to_string()),
            _ => None,
        })
        .unwrap();
        let text = render_config(&resolved).unwrap();
        let json: serde_json::Value = serde_json::from_str(&text).unwrap();

        for key in ["seed", "dealer", "threshold", "agent", "rounds"] {
            assert!(json.get(key).is_some(), "missing {key}");
        }
        assert_eq!(json["agent"]["value"], "random");
        assert_eq!(json["agent"]["source"], "env");
        assert_eq!(json["dealer"]["source"], "default");
        assert_eq!(json["threshold"]["value"], 17);
        assert!(json["seed"]["value"].is_null());
        assert!(text.contains('\n'), "output should be pretty-printed");
    }
}
