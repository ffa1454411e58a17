//! Start-up banner.

use crate::prompt::{Prompt, Result, Tone};

const BANNER: &str = r#"               _                           _
  __ _  _ __  (_) _ __   __ _   ___   ___ | |_   __ _  _ __ ___
 / _` || '_ \ | || '__| / _` | / __| / _ \| __| / _` || '_ ` _ \
| (_| || | | || || |   | (_| || (__ |  __/| |_ | (_| || | | | | |
 \__,_||_| |_||_||_|    \__,_| \___| \___| \__| \__,_||_| |_| |_|"#;

pub const TAGLINE: &str = "Terminal Language Learning Program";

pub fn display_header(prompt: &mut impl Prompt) -> Result<()> {
    prompt.say(Tone::Banner, BANNER)?;
    prompt.say(Tone::Banner, &format!("{TAGLINE}\n"))
}
