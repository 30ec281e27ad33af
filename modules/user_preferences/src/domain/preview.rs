//! Live timestamp preview for general settings
//!
//! Renders the current instant the way the in-progress settings would show it.
//! Timezones are fixed `UTC±HH:MM` offsets with no DST history. Unknown
//! timezones render as UTC and unknown languages use the fallback locale.

use crate::contract::{DateFormat, GeneralSettings, TimeFormat};
use chrono::{DateTime, FixedOffset, Locale, Offset, Utc};

const MAX_OFFSET_HOURS: i32 = 14;

/// Parse a `UTC`, `UTC±HH` or `UTC±HH:MM` label into a fixed offset
pub fn parse_utc_offset(label: &str) -> Option<FixedOffset> {
    let rest = label.trim().strip_prefix("UTC")?;
    if rest.is_empty() {
        return Some(Utc.fix());
    }

    let sign = match rest.chars().next()? {
        '+' => 1,
        '-' => -1,
        _ => return None,
    };
    let (hours, minutes) = match rest[1..].split_once(':') {
        Some((h, m)) => (h, m),
        None => (&rest[1..], "00"),
    };
    let is_number = |s: &str| (1..=2).contains(&s.len()) && s.chars().all(|c| c.is_ascii_digit());
    if !is_number(hours) || !is_number(minutes) {
        return None;
    }

    let hours: i32 = hours.parse().ok()?;
    let minutes: i32 = minutes.parse().ok()?;
    if hours > MAX_OFFSET_HOURS || minutes >= 60 {
        return None;
    }
    FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60))
}

/// Offset for a timezone label, UTC when the label is not understood
pub fn resolve_offset(label: &str) -> FixedOffset {
    parse_utc_offset(label).unwrap_or_else(|| {
        tracing::trace!(timezone = label, "unrecognized timezone label, rendering as UTC");
        Utc.fix()
    })
}

/// Locale for a language code, matched on its primary subtag
pub fn locale_for(language: &str) -> Option<Locale> {
    let primary = language
        .trim()
        .split(|c| c == '-' || c == '_')
        .next()?
        .to_ascii_lowercase();

    let locale = match primary.as_str() {
        "en" => Locale::en_US,
        "es" => Locale::es_ES,
        "fr" => Locale::fr_FR,
        "de" => Locale::de_DE,
        "it" => Locale::it_IT,
        "pt" => Locale::pt_BR,
        "nl" => Locale::nl_NL,
        "ru" => Locale::ru_RU,
        "ja" => Locale::ja_JP,
        "zh" => Locale::zh_CN,
        "ko" => Locale::ko_KR,
        _ => return None,
    };
    Some(locale)
}

/// strftime pattern for the date part
fn date_pattern(date_format: DateFormat) -> &'static str {
    if date_format.is_month_first() {
        "%m/%d/%Y"
    } else {
        "%d %b %Y"
    }
}

/// AM/PM marker in `locale`, or the default marker when the locale has none
fn meridiem(local: &DateTime<FixedOffset>, locale: Locale) -> String {
    let marker = local.format_localized("%p", locale).to_string();
    if marker.trim().is_empty() {
        local.format("%p").to_string()
    } else {
        marker
    }
}

/// Formats the preview string
#[derive(Debug, Clone, Copy)]
pub struct PreviewFormatter {
    fallback: Locale,
}

impl PreviewFormatter {
    /// `fallback_language` is used for languages without a known locale
    pub fn new(fallback_language: &str) -> Self {
        Self {
            fallback: locale_for(fallback_language).unwrap_or(Locale::en_US),
        }
    }

    pub fn format(&self, settings: &GeneralSettings, now: DateTime<Utc>) -> String {
        let offset = resolve_offset(&settings.timezone);
        let locale = locale_for(&settings.language).unwrap_or(self.fallback);
        let local = now.with_timezone(&offset);
        let date = local.format_localized(date_pattern(settings.date_format), locale);
        match settings.time_format {
            TimeFormat::TwelveHour => {
                format!("{}, {} {}", date, local.format("%I:%M"), meridiem(&local, locale))
            }
            TimeFormat::TwentyFourHour => format!("{}, {}", date, local.format("%H:%M")),
        }
    }
}

impl Default for PreviewFormatter {
    fn default() -> Self {
        Self::new("en")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn instant() -> DateTime<Utc> {
        // 2024-03-05 15:07:00 UTC
        Utc.with_ymd_and_hms(2024, 3, 5, 15, 7, 0).unwrap()
    }

    fn settings(date_format: DateFormat, time_format: TimeFormat) -> GeneralSettings {
        GeneralSettings {
            date_format,
            time_format,
            ..GeneralSettings::default()
        }
    }

    #[test]
    fn test_parse_utc_offset() {
        assert_eq!(parse_utc_offset("UTC"), FixedOffset::east_opt(0));
        assert_eq!(parse_utc_offset("UTC+00:00"), FixedOffset::east_opt(0));
        assert_eq!(parse_utc_offset("UTC+05:30"), FixedOffset::east_opt(5 * 3600 + 1800));
        assert_eq!(parse_utc_offset("UTC-12:00"), FixedOffset::west_opt(12 * 3600));
        assert_eq!(parse_utc_offset("UTC+12:00"), FixedOffset::east_opt(12 * 3600));
        assert_eq!(parse_utc_offset("UTC-3"), FixedOffset::west_opt(3 * 3600));
        assert!(parse_utc_offset("America/New_York").is_none());
        assert!(parse_utc_offset("UTC+25:00").is_none());
        assert!(parse_utc_offset("UTC+05:75").is_none());
        assert!(parse_utc_offset("UTC++5").is_none());
        assert!(parse_utc_offset("UTC5").is_none());
    }

    #[test]
    fn test_month_first_uses_numeric_month() {
        let text = PreviewFormatter::default()
            .format(&settings(DateFormat::MonthFirst, TimeFormat::TwelveHour), instant());
        assert_eq!(text, "03/05/2024, 03:07 PM");
    }

    #[test]
    fn test_day_first_uses_abbreviated_month() {
        let text = PreviewFormatter::default()
            .format(&settings(DateFormat::DayFirst, TimeFormat::TwentyFourHour), instant());
        assert_eq!(text, "05 Mar 2024, 15:07");
    }

    #[test]
    fn test_24h_never_renders_marker() {
        let formatter = PreviewFormatter::default();
        for date_format in DateFormat::ALL {
            for hour in [0, 9, 12, 23] {
                let now = Utc.with_ymd_and_hms(2024, 7, 1, hour, 30, 0).unwrap();
                let text = formatter.format(&settings(date_format, TimeFormat::TwentyFourHour), now);
                assert!(!text.contains("AM") && !text.contains("PM"), "{}", text);
            }
        }
    }

    #[test]
    fn test_every_catalog_language_renders_marker_for_12h() {
        use crate::domain::catalog::{OptionCatalog, StaticOptionCatalog};

        let formatter = PreviewFormatter::default();
        for lang in StaticOptionCatalog.languages() {
            for date_format in DateFormat::ALL {
                let mut s = settings(date_format, TimeFormat::TwelveHour);
                s.language = lang.code.to_string();
                let text = formatter.format(&s, instant());
                let (clock, marker) = text.rsplit_once(' ').unwrap();
                assert!(clock.ends_with("03:07"), "{}: {}", lang.code, text);
                assert!(!marker.trim().is_empty(), "{}: {}", lang.code, text);

                s.time_format = TimeFormat::TwentyFourHour;
                let text = formatter.format(&s, instant());
                assert!(text.ends_with(", 15:07"), "{}: {}", lang.code, text);
            }
        }
    }

    #[test]
    fn test_locale_without_marker_uses_default() {
        let mut s = settings(DateFormat::MonthFirst, TimeFormat::TwelveHour);
        s.language = "fr".to_string();
        assert_eq!(PreviewFormatter::default().format(&s, instant()), "03/05/2024, 03:07 PM");

        s.language = "ja".to_string();
        assert_eq!(PreviewFormatter::default().format(&s, instant()), "03/05/2024, 03:07 午後");
    }

    #[test]
    fn test_timezone_shifts_rendering() {
        let mut s = settings(DateFormat::MonthFirst, TimeFormat::TwentyFourHour);
        s.timezone = "UTC+10:00".to_string();
        // 15:07 UTC is 01:07 the next day at UTC+10
        assert_eq!(PreviewFormatter::default().format(&s, instant()), "03/06/2024, 01:07");

        s.timezone = "Mars/Olympus".to_string();
        assert_eq!(PreviewFormatter::default().format(&s, instant()), "03/05/2024, 15:07");
    }

    #[test]
    fn test_unknown_language_falls_back() {
        let mut s = settings(DateFormat::DayFirst, TimeFormat::TwentyFourHour);
        s.language = "tlh".to_string();
        assert_eq!(PreviewFormatter::default().format(&s, instant()), "05 Mar 2024, 15:07");
    }

    #[test]
    fn test_locale_for_subtags() {
        assert_eq!(locale_for("pt-BR"), Some(Locale::pt_BR));
        assert_eq!(locale_for("FR"), Some(Locale::fr_FR));
        assert_eq!(locale_for("en_GB"), Some(Locale::en_US));
        assert_eq!(locale_for(""), None);
    }
}
