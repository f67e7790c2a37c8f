//! Announcement phrase generation
//!
//! Turns an hour of day into the literal text handed to the TTS
//! engine. Kept pure over the hour so tests never need a clock;
//! `main` feeds it `Local::now().hour()`.

use crate::config::Config;

/// Build the spoken time announcement for the given hour (0-23).
///
/// 12-hour mode says "7 o'clock", with hour 0 mapped to 12; the
/// optional AM/PM suffix is spelled "A M"/"P M" so engines pronounce
/// the letters instead of guessing at "am". 24-hour mode says
/// "19 hundred hours" with a leading zero spoken for early hours.
pub fn time_phrase(config: &Config, hour: u32) -> String {
    if config.use_12_hour {
        let spoken_hour = match hour % 12 {
            0 => 12,
            h => h,
        };

        if config.include_am_pm {
            let ampm = if hour >= 12 { "P M" } else { "A M" };
            format!("{} {} o'clock {}", config.prefix, spoken_hour, ampm)
        } else {
            format!("{} {} o'clock", config.prefix, spoken_hour)
        }
    } else {
        format!("{} {:02} hundred hours", config.prefix, hour)
    }
}
