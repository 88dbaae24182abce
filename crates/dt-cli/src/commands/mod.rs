pub mod dice;
pub mod frames;
pub mod layout;
pub mod roll;

use dt_engine::DieKind;

/// Parse a die argument like `d20`.
fn parse_die(tag: &str) -> Result<DieKind, String> {
    DieKind::from_str_tag(tag).ok_or_else(|| format!("unknown die '{tag}' (expected e.g. d6, d20)"))
}
